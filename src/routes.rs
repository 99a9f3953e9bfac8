// src/routes.rs
use std::convert::Infallible;
use std::sync::Arc;
use log::{error, info};
use warp::filters::body::BodyDeserializeError;
use warp::http::StatusCode;
use warp::reject::{InvalidQuery, Rejection};
use warp::{Filter, Reply};
use crate::handlers::error::ApiError;
use crate::handlers::break_even::{get_break_even, BreakEvenQuery};
use crate::handlers::inflation::get_inflation;
use crate::handlers::portfolio::{post_portfolio, post_valuation, PortfolioRequest, ValuationRequest};
use crate::handlers::projection::{get_projection, post_scenario_projection, ProjectionQuery, ScenarioProjectionRequest};
use crate::handlers::purchasing_power::{get_purchasing_power, PurchasingPowerQuery};
use crate::handlers::real_return::{get_real_return, RealReturnQuery};
use crate::handlers::scenarios::{post_scenarios, ScenarioRequest};
use crate::services::cache::InflationCache;

const MAX_BODY_BYTES: u64 = 64 * 1024;

async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let code;
    let message: String;

    if err.is_not_found() {
        code = StatusCode::NOT_FOUND;
        message = "Not Found".to_string();
    } else if let Some(api_error) = err.find::<ApiError>() {
        code = api_error.status();
        message = api_error.message.clone();
    } else if let Some(e) = err.find::<InvalidQuery>() {
        code = StatusCode::BAD_REQUEST;
        message = format!("Invalid query: {}", e);
    } else if let Some(e) = err.find::<BodyDeserializeError>() {
        code = StatusCode::BAD_REQUEST;
        message = format!("Invalid body: {}", e);
    } else if err.find::<warp::reject::UnsupportedMediaType>().is_some() {
        code = StatusCode::UNSUPPORTED_MEDIA_TYPE;
        message = "Expected a JSON body".to_string();
    } else if err.find::<warp::reject::LengthRequired>().is_some() {
        code = StatusCode::LENGTH_REQUIRED;
        message = "Content-Length required".to_string();
    } else if err.find::<warp::reject::PayloadTooLarge>().is_some() {
        code = StatusCode::PAYLOAD_TOO_LARGE;
        message = "Payload Too Large".to_string();
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        code = StatusCode::METHOD_NOT_ALLOWED;
        message = "Method Not Allowed".to_string();
    } else {
        error!("Unhandled rejection: {:?}", err);
        code = StatusCode::INTERNAL_SERVER_ERROR;
        message = "Internal Server Error".to_string();
    }

    Ok(warp::reply::with_status(
        warp::reply::json(&serde_json::json!({
            "error": message,
        })),
        code,
    ))
}

fn json_body<T: serde::de::DeserializeOwned + Send>() -> impl Filter<Extract = (T,), Error = Rejection> + Clone {
    warp::body::content_length_limit(MAX_BODY_BYTES).and(warp::body::json())
}

pub fn routes(cache: Arc<InflationCache>) -> impl Filter<Extract = impl Reply, Error = Infallible> + Clone {
    info!("Configuring routes...");

    let cache_filter = warp::any().map(move || cache.clone());

    let real_return_route = warp::path!("api" / "v1" / "real_return")
        .and(warp::get())
        .and(warp::query::<RealReturnQuery>())
        .and(cache_filter.clone())
        .and_then(get_real_return);

    let projection_route = warp::path!("api" / "v1" / "projection")
        .and(warp::get())
        .and(warp::query::<ProjectionQuery>())
        .and(cache_filter.clone())
        .and_then(get_projection);

    let scenario_projection_route = warp::path!("api" / "v1" / "projection" / "scenario")
        .and(warp::post())
        .and(json_body::<ScenarioProjectionRequest>())
        .and(cache_filter.clone())
        .and_then(post_scenario_projection);

    let break_even_route = warp::path!("api" / "v1" / "break_even")
        .and(warp::get())
        .and(warp::query::<BreakEvenQuery>())
        .and_then(get_break_even);

    let portfolio_route = warp::path!("api" / "v1" / "portfolio")
        .and(warp::post())
        .and(json_body::<PortfolioRequest>())
        .and_then(post_portfolio);

    let valuation_route = warp::path!("api" / "v1" / "portfolio" / "valuation")
        .and(warp::post())
        .and(json_body::<ValuationRequest>())
        .and_then(post_valuation);

    let scenarios_route = warp::path!("api" / "v1" / "scenarios")
        .and(warp::post())
        .and(json_body::<ScenarioRequest>())
        .and_then(post_scenarios);

    let purchasing_power_route = warp::path!("api" / "v1" / "purchasing_power")
        .and(warp::get())
        .and(warp::query::<PurchasingPowerQuery>())
        .and_then(get_purchasing_power);

    let inflation_route = warp::path!("api" / "v1" / "inflation")
        .and(warp::get())
        .and(cache_filter.clone())
        .and_then(get_inflation);

    info!("All routes configured successfully.");

    real_return_route
        .or(projection_route)
        .or(scenario_projection_route)
        .or(break_even_route)
        .or(portfolio_route)
        .or(valuation_route)
        .or(scenarios_route)
        .or(purchasing_power_route)
        .or(inflation_route)
        .recover(handle_rejection)
}
