// src/handlers/projection.rs
use std::sync::Arc;
use log::{error, info};
use serde::{Deserialize, Serialize};
use warp::reply::Json;
use warp::Rejection;
use crate::models::ProjectionRow;
use crate::services::cache::InflationCache;
use crate::services::calculations::{project_over_years, project_scenario};
use super::error::ApiError;
use super::{reject, resolve_inflation};

#[derive(Debug, Deserialize)]
pub struct ProjectionQuery {
    pub nominal: f64,
    pub inflation: Option<f64>,
    pub years: u32,
}

#[derive(Debug, Deserialize)]
pub struct ScenarioProjectionRequest {
    pub nominal_rates: Vec<f64>,
    pub inflation_rates: Vec<f64>,
}

#[derive(Serialize)]
struct ProjectionResponse {
    years: usize,
    rows: Vec<ProjectionRow>,
}

fn check_horizon(years: usize, max_years: u32) -> Result<(), Rejection> {
    if years > max_years as usize {
        error!("Projection of {} years exceeds limit of {}", years, max_years);
        return Err(warp::reject::custom(ApiError::invalid_input(format!(
            "projection is limited to {} years",
            max_years
        ))));
    }
    Ok(())
}

pub async fn get_projection(query: ProjectionQuery, cache: Arc<InflationCache>) -> Result<Json, Rejection> {
    info!("Handling request to project {} years", query.years);
    check_horizon(query.years as usize, cache.config().max_projection_years)?;

    let inflation_rate = resolve_inflation(query.inflation, &cache).await?;
    let rows = project_over_years(query.nominal, inflation_rate, query.years).map_err(reject)?;

    Ok(warp::reply::json(&ProjectionResponse { years: rows.len(), rows }))
}

pub async fn post_scenario_projection(
    request: ScenarioProjectionRequest,
    cache: Arc<InflationCache>,
) -> Result<Json, Rejection> {
    info!("Handling request to project a {}-year rate scenario", request.nominal_rates.len());
    check_horizon(request.nominal_rates.len(), cache.config().max_projection_years)?;

    let rows = project_scenario(&request.nominal_rates, &request.inflation_rates).map_err(reject)?;

    Ok(warp::reply::json(&ProjectionResponse { years: rows.len(), rows }))
}
