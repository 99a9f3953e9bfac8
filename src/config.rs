// src/config.rs
use std::env;
use std::str::FromStr;
use log::warn;
use crate::BoxError;

pub const DEFAULT_BLS_API_URL: &str = "https://api.bls.gov/publicAPI/v2/timeseries/data";
pub const DEFAULT_BLS_SERIES_ID: &str = "CUUR0000SA0"; // CPI-U, all items

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub bls_api_url: String,
    pub bls_series_id: String,
    pub inflation_cache_ttl_minutes: i64,
    pub http_timeout_secs: u64,
    pub max_projection_years: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 3030,
            bls_api_url: DEFAULT_BLS_API_URL.to_string(),
            bls_series_id: DEFAULT_BLS_SERIES_ID.to_string(),
            inflation_cache_ttl_minutes: 60,
            http_timeout_secs: 10,
            max_projection_years: 100,
        }
    }
}

fn parse_var<T: FromStr>(name: &str, default: T) -> Result<T, BoxError>
where
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| format!("{} must be a number, got {:?}: {}", name, raw, e).into()),
        Err(_) => Ok(default),
    }
}

impl Config {
    /// Reads `.env` (if any) and then the process environment.
    pub fn from_env() -> Result<Self, BoxError> {
        dotenv::dotenv().ok();
        let defaults = Config::default();

        let port = match env::var("PORT") {
            Ok(_) => parse_var("PORT", defaults.port)?,
            Err(_) => {
                warn!("$PORT not set, defaulting to {}", defaults.port);
                defaults.port
            }
        };

        let config = Config {
            port,
            bls_api_url: env::var("BLS_API_URL").unwrap_or(defaults.bls_api_url),
            bls_series_id: env::var("BLS_SERIES_ID").unwrap_or(defaults.bls_series_id),
            inflation_cache_ttl_minutes: parse_var(
                "INFLATION_CACHE_TTL_MINUTES",
                defaults.inflation_cache_ttl_minutes,
            )?,
            http_timeout_secs: parse_var("HTTP_TIMEOUT_SECS", defaults.http_timeout_secs)?,
            max_projection_years: parse_var("MAX_PROJECTION_YEARS", defaults.max_projection_years)?,
        };

        if config.max_projection_years == 0 {
            return Err("MAX_PROJECTION_YEARS must be at least 1".into());
        }
        if config.inflation_cache_ttl_minutes < 0 {
            return Err("INFLATION_CACHE_TTL_MINUTES must not be negative".into());
        }

        Ok(config)
    }

    pub fn series_url(&self) -> String {
        format!("{}/{}", self.bls_api_url.trim_end_matches('/'), self.bls_series_id)
    }
}
