// src/handlers/real_return.rs
use std::sync::Arc;
use log::info;
use serde::{Deserialize, Serialize};
use warp::reply::Json;
use warp::Rejection;
use crate::models::{Interpretation, ReturnInput};
use crate::services::cache::InflationCache;
use crate::services::calculations::compute_real_return;
use super::{reject, resolve_inflation};

#[derive(Debug, Deserialize)]
pub struct RealReturnQuery {
    pub nominal: f64,
    pub inflation: Option<f64>,
}

#[derive(Serialize)]
struct RealReturnResponse {
    input: ReturnInput,
    real_return: f64,
    interpretation: Interpretation,
    summary: &'static str,
}

pub async fn get_real_return(query: RealReturnQuery, cache: Arc<InflationCache>) -> Result<Json, Rejection> {
    info!("Handling request to calculate real return");

    let inflation_rate = resolve_inflation(query.inflation, &cache).await?;
    let result = compute_real_return(query.nominal, inflation_rate).map_err(reject)?;
    info!("Calculated real return: {}", result.real_return);

    Ok(warp::reply::json(&RealReturnResponse {
        input: ReturnInput {
            nominal_return: query.nominal,
            inflation_rate,
        },
        real_return: result.real_return,
        interpretation: result.interpretation,
        summary: result.interpretation.describe(),
    }))
}
