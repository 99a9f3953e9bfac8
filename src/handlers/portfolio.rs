// src/handlers/portfolio.rs
use std::collections::HashMap;
use log::info;
use serde::{Deserialize, Serialize};
use warp::reply::Json;
use warp::Rejection;
use crate::models::{AssetHolding, PortfolioValuation, Position, ReturnResult};
use crate::services::calculations::compute_portfolio_real_return;
use crate::services::holdings::value_positions;
use super::reject;

#[derive(Debug, Deserialize)]
pub struct PortfolioRequest {
    pub holdings: Vec<AssetHolding>,
    pub inflation_rate: f64,
}

#[derive(Debug, Deserialize)]
pub struct ValuationRequest {
    pub positions: Vec<Position>,
    pub prices: HashMap<String, f64>,
    pub inflation_rate: f64,
}

#[derive(Serialize)]
struct ValuationResponse {
    valuation: PortfolioValuation,
    result: ReturnResult,
}

pub async fn post_portfolio(request: PortfolioRequest) -> Result<Json, Rejection> {
    info!("Handling request for real return of {} holdings", request.holdings.len());

    let result = compute_portfolio_real_return(&request.holdings, request.inflation_rate).map_err(reject)?;
    info!("Calculated portfolio real return: {}", result.real_return);

    Ok(warp::reply::json(&result))
}

pub async fn post_valuation(request: ValuationRequest) -> Result<Json, Rejection> {
    info!("Handling request to value {} positions", request.positions.len());

    let valuation = value_positions(&request.positions, &request.prices).map_err(reject)?;
    let result = compute_portfolio_real_return(&valuation.to_holdings(), request.inflation_rate).map_err(reject)?;
    info!("Portfolio worth {:.2} with real return {}", valuation.total_value, result.real_return);

    Ok(warp::reply::json(&ValuationResponse { valuation, result }))
}
