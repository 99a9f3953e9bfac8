use std::net::SocketAddr;
use std::sync::Arc;
use log::{error, info};
use warp::Filter;
use real_return_acm::config::Config;
use real_return_acm::routes;
use real_return_acm::services::cache::InflationCache;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize the logger
    env_logger::init();
    info!("Logger initialized. Starting the application...");

    let config = Config::from_env().map_err(|e| {
        error!("Invalid configuration: {}", e);
        anyhow::anyhow!("invalid configuration: {}", e)
    })?;
    info!("Using PORT: {}", config.port);

    let addr: SocketAddr = ([0, 0, 0, 0], config.port).into();
    info!("Will bind to: {}", addr);

    let cache = Arc::new(InflationCache::new(config).map_err(|e| anyhow::anyhow!("{}", e))?);

    // Set up CORS
    let cors = warp::cors()
        .allow_any_origin()
        .allow_header("content-type")
        .allow_methods(vec!["GET", "POST"]);

    let api = routes::routes(cache).with(cors);
    info!("Routes configured successfully with CORS.");

    info!("Starting server on {}", addr);
    warp::serve(api)
        .run(addr)
        .await;

    Ok(())
}
