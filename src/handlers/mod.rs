// src/handlers/mod.rs
use log::{debug, error};
use warp::Rejection;
use crate::services::cache::InflationCache;
use crate::services::calculations::CalcError;
use self::error::ApiError;

pub mod break_even;
pub mod error;
pub mod inflation;
pub mod portfolio;
pub mod projection;
pub mod purchasing_power;
pub mod real_return;
pub mod scenarios;

pub(crate) fn reject(err: CalcError) -> Rejection {
    debug!("Rejecting request: {}", err);
    warp::reject::custom(ApiError::from(err))
}

/// Uses the caller's rate when given, otherwise the live reading.
pub(crate) async fn resolve_inflation(explicit: Option<f64>, cache: &InflationCache) -> Result<f64, Rejection> {
    if let Some(rate) = explicit {
        return Ok(rate);
    }
    debug!("No inflation rate supplied, using live reading");
    cache.current().await.map(|reading| reading.rate).map_err(|e| {
        error!("Live inflation unavailable: {}", e);
        warp::reject::custom(ApiError::external_error(format!("Failed to fetch inflation data: {}", e)))
    })
}
