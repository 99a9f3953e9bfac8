// src/handlers/inflation.rs
use std::sync::Arc;
use log::{debug, error, info};
use warp::Rejection;
use crate::services::cache::InflationCache;
use super::error::ApiError;

pub async fn get_inflation(cache: Arc<InflationCache>) -> Result<impl warp::Reply, Rejection> {
    info!("Handling request to get inflation data");

    let reading = cache.current().await.map_err(|e| {
        error!("Failed to get inflation data: {}", e);
        warp::reject::custom(ApiError::external_error(format!("Failed to fetch inflation data: {}", e)))
    })?;

    debug!("Returning inflation rate: {}", reading.rate);
    Ok(warp::reply::with_status(
        warp::reply::json(&reading),
        warp::http::StatusCode::OK,
    ))
}
