// src/handlers/break_even.rs
use log::info;
use serde::{Deserialize, Serialize};
use warp::reply::Json;
use warp::Rejection;
use crate::services::calculations::compute_break_even_inflation;
use super::reject;

#[derive(Debug, Deserialize)]
pub struct BreakEvenQuery {
    pub nominal: f64,
}

#[derive(Serialize)]
struct BreakEvenResponse {
    nominal_return: f64,
    break_even_inflation: f64,
}

pub async fn get_break_even(query: BreakEvenQuery) -> Result<Json, Rejection> {
    info!("Handling request for break-even inflation");

    let break_even_inflation = compute_break_even_inflation(query.nominal).map_err(reject)?;

    Ok(warp::reply::json(&BreakEvenResponse {
        nominal_return: query.nominal,
        break_even_inflation,
    }))
}
