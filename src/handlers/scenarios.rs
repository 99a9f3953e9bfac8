// src/handlers/scenarios.rs
use log::info;
use serde::{Deserialize, Serialize};
use warp::reply::Json;
use warp::Rejection;
use crate::models::ScenarioEntry;
use crate::services::calculations::compute_scenario_grid;
use super::reject;

#[derive(Debug, Deserialize)]
pub struct ScenarioRequest {
    pub nominal_return: f64,
    pub inflation_rates: Vec<f64>,
}

#[derive(Serialize)]
struct ScenarioResponse {
    nominal_return: f64,
    scenarios: Vec<ScenarioEntry>,
}

pub async fn post_scenarios(request: ScenarioRequest) -> Result<Json, Rejection> {
    info!("Handling request for {} inflation scenarios", request.inflation_rates.len());

    let scenarios = compute_scenario_grid(request.nominal_return, &request.inflation_rates).map_err(reject)?;

    Ok(warp::reply::json(&ScenarioResponse {
        nominal_return: request.nominal_return,
        scenarios,
    }))
}
