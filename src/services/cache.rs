// src/services/cache.rs
use std::time::Duration as StdDuration;
use chrono::{Duration, Utc};
use log::{debug, error, info, warn};
use reqwest::Client;
use tokio::sync::{Mutex, RwLock};
use crate::config::Config;
use crate::models::InflationReading;
use crate::BoxError;
use super::bls::fetch_inflation_data;

/// In-memory holder for the last live inflation reading.
pub struct InflationCache {
    config: Config,
    client: Client,
    reading: RwLock<Option<InflationReading>>,
    // Held for the whole refetch so only one request hits BLS at a time.
    refresh: Mutex<()>,
}

impl InflationCache {
    pub fn new(config: Config) -> Result<Self, BoxError> {
        let client = Client::builder()
            .timeout(StdDuration::from_secs(config.http_timeout_secs))
            .build()?;
        Ok(Self {
            config,
            client,
            reading: RwLock::new(None),
            refresh: Mutex::new(()),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub async fn store(&self, reading: InflationReading) {
        *self.reading.write().await = Some(reading);
    }

    pub async fn cached(&self) -> Option<InflationReading> {
        self.reading.read().await.clone()
    }

    fn is_fresh(&self, reading: &InflationReading) -> bool {
        reading.fetched_at >= Utc::now() - Duration::minutes(self.config.inflation_cache_ttl_minutes)
    }

    /// Returns the cached reading while fresh, otherwise refetches.
    /// A failed refetch falls back to the stale reading when there is one.
    pub async fn current(&self) -> Result<InflationReading, BoxError> {
        let cached = self.cached().await;
        debug!("Current inflation cache: {:?}", cached);

        if let Some(reading) = &cached {
            if self.is_fresh(reading) {
                return Ok(reading.clone());
            }
            info!("Inflation cache expired, fetching new data");
        }

        let _refresh = self.refresh.lock().await;
        // Another request may have refreshed while we waited.
        let cached = self.cached().await;
        if let Some(reading) = &cached {
            if self.is_fresh(reading) {
                debug!("Inflation cache refreshed by a concurrent request");
                return Ok(reading.clone());
            }
        }

        match fetch_inflation_data(&self.client, &self.config).await {
            Ok(reading) => {
                self.store(reading.clone()).await;
                Ok(reading)
            }
            Err(e) => {
                error!("Failed to fetch new inflation data: {}", e);
                match cached {
                    Some(stale) => {
                        warn!("Serving stale inflation rate from {}", stale.fetched_at);
                        Ok(stale)
                    }
                    None => Err(e),
                }
            }
        }
    }
}
