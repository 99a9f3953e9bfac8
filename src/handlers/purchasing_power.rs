// src/handlers/purchasing_power.rs
use log::info;
use serde::{Deserialize, Serialize};
use warp::reply::Json;
use warp::Rejection;
use crate::services::calculations::compute_purchasing_power;
use super::reject;

#[derive(Debug, Deserialize)]
pub struct PurchasingPowerQuery {
    pub amount: f64,
    pub inflation: f64,
    pub years: u32,
}

#[derive(Serialize)]
struct PurchasingPowerResponse {
    amount: f64,
    inflation_rate: f64,
    years: u32,
    future_value: f64,
}

pub async fn get_purchasing_power(query: PurchasingPowerQuery) -> Result<Json, Rejection> {
    info!("Handling request for purchasing power over {} years", query.years);

    let future_value = compute_purchasing_power(query.amount, query.inflation, query.years).map_err(reject)?;

    Ok(warp::reply::json(&PurchasingPowerResponse {
        amount: query.amount,
        inflation_rate: query.inflation,
        years: query.years,
        future_value,
    }))
}
