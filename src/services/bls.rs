// src/services/bls.rs
use chrono::Utc;
use log::{debug, error, info};
use reqwest::Client;
use serde::Deserialize;
use crate::config::Config;
use crate::models::InflationReading;
use crate::BoxError;

pub type Result<T> = std::result::Result<T, BoxError>;

#[derive(Debug, Deserialize)]
struct BlsResponse {
    status: String,
    #[serde(default)]
    message: Vec<String>,
    #[serde(rename = "Results")]
    results: Option<BlsResults>,
}

#[derive(Debug, Deserialize)]
struct BlsResults {
    series: Vec<BlsSeries>,
}

#[derive(Debug, Deserialize)]
struct BlsSeries {
    data: Vec<BlsObservation>,
}

#[derive(Debug, Deserialize)]
struct BlsObservation {
    year: String,
    period: String,
    #[serde(rename = "periodName")]
    period_name: String,
    value: String,
}

impl BlsObservation {
    /// Monthly periods are M01..M12; M13 is the annual average.
    fn is_monthly(&self) -> bool {
        self.period.starts_with('M') && self.period != "M13"
    }
}

/// Year-over-year change of the newest monthly index value, as a fraction.
pub fn parse_cpi_response(body: &str) -> Result<(f64, String)> {
    let response: BlsResponse = serde_json::from_str(body)?;
    if response.status != "REQUEST_SUCCEEDED" {
        return Err(format!("BLS request failed: {} {}", response.status, response.message.join("; ")).into());
    }

    let series = response
        .results
        .and_then(|r| r.series.into_iter().next())
        .ok_or("No series in BLS response")?;

    let monthly: Vec<&BlsObservation> = series.data.iter().filter(|o| o.is_monthly()).collect();
    let latest = monthly.first().ok_or("No monthly observations in BLS response")?;
    let latest_year: i32 = latest.year.trim().parse()?;
    let prior_year = (latest_year - 1).to_string();

    let prior = monthly
        .iter()
        .find(|o| o.period == latest.period && o.year.trim() == prior_year)
        .ok_or_else(|| format!("No observation for {} {}", latest.period_name, prior_year))?;

    let latest_index: f64 = latest.value.trim().parse()?;
    let prior_index: f64 = prior.value.trim().parse()?;
    if prior_index <= 0.0 {
        return Err(format!("Invalid CPI index {} for {} {}", prior_index, prior.period_name, prior_year).into());
    }

    let rate = latest_index / prior_index - 1.0;
    Ok((rate, format!("{} {}", latest.period_name, latest.year.trim())))
}

/// Fetch the latest CPI-U year-over-year inflation rate.
pub async fn fetch_inflation_data(client: &Client, config: &Config) -> Result<InflationReading> {
    let url = config.series_url();
    info!("Fetching CPI data from URL: {}", url);

    let body = client
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    debug!("BLS response length: {} bytes", body.len());

    match parse_cpi_response(&body) {
        Ok((rate, period)) => {
            info!("Found inflation rate {} for {}", rate, period);
            Ok(InflationReading {
                rate,
                period,
                fetched_at: Utc::now(),
            })
        }
        Err(e) => {
            error!("Could not parse BLS response: {}", e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "status": "REQUEST_SUCCEEDED",
        "responseTime": 120,
        "message": [],
        "Results": {
            "series": [{
                "seriesID": "CUUR0000SA0",
                "data": [
                    {"year": "2024", "period": "M13", "periodName": "Annual", "value": "313.689", "footnotes": [{}]},
                    {"year": "2024", "period": "M09", "periodName": "September", "latest": "true", "value": "315.301", "footnotes": [{}]},
                    {"year": "2024", "period": "M08", "periodName": "August", "value": "314.796", "footnotes": [{}]},
                    {"year": "2023", "period": "M09", "periodName": "September", "value": "307.789", "footnotes": [{}]},
                    {"year": "2023", "period": "M08", "periodName": "August", "value": "307.026", "footnotes": [{}]}
                ]
            }]
        }
    }"#;

    #[test]
    fn test_parse_year_over_year() {
        let (rate, period) = parse_cpi_response(SAMPLE).unwrap();
        assert!((rate - (315.301 / 307.789 - 1.0)).abs() < 1e-12);
        assert_eq!(period, "September 2024");
    }

    #[test]
    fn test_parse_failed_status() {
        let body = r#"{"status": "REQUEST_NOT_PROCESSED", "message": ["daily threshold reached"]}"#;
        let err = parse_cpi_response(body).unwrap_err();
        assert!(err.to_string().contains("daily threshold reached"));
    }

    #[test]
    fn test_parse_missing_prior_year() {
        let body = r#"{
            "status": "REQUEST_SUCCEEDED",
            "Results": {"series": [{"data": [
                {"year": "2024", "period": "M09", "periodName": "September", "value": "315.301"}
            ]}]}
        }"#;
        assert!(parse_cpi_response(body).is_err());
    }
}
