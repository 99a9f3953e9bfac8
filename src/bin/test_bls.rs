// src/bin/test_bls.rs
use dotenv::dotenv;
use log::{error, info};
use real_return_acm::config::Config;
use real_return_acm::services::cache::InflationCache;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();

    info!("Testing BLS CPI fetching...");
    let config = Config::from_env().map_err(|e| anyhow::anyhow!("{}", e))?;
    let cache = InflationCache::new(config).map_err(|e| anyhow::anyhow!("{}", e))?;

    match cache.current().await {
        Ok(reading) => {
            info!("SUCCESS: inflation {} for {}", reading.rate, reading.period);
            println!("CPI-U YoY ({}): {:.2}%", reading.period, reading.rate * 100.0);
        }
        Err(e) => {
            error!("ERROR: Failed to fetch inflation: {}", e);
            return Err(anyhow::anyhow!("{}", e));
        }
    }

    Ok(())
}
