// src/models.rs
use serde::{Serialize, Deserialize};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReturnInput {
    pub nominal_return: f64,
    pub inflation_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Interpretation {
    Positive,
    Neutral,
    Negative,
}

impl Interpretation {
    pub fn describe(&self) -> &'static str {
        match self {
            Interpretation::Positive => "purchasing power grows",
            Interpretation::Neutral => "purchasing power is preserved",
            Interpretation::Negative => "purchasing power shrinks",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReturnResult {
    pub real_return: f64,
    pub interpretation: Interpretation,
}

/// One year of a projection. `cumulative_*` are growth factors, 1.0 = break even.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionRow {
    pub year: u32,
    pub nominal_return: f64,
    pub inflation_rate: f64,
    pub real_return: f64,
    pub cumulative_nominal: f64,
    pub cumulative_real: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssetHolding {
    pub weight: f64,
    pub nominal_return: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioEntry {
    pub inflation_rate: f64,
    pub result: ReturnResult,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub ticker: String,
    pub shares: f64,
    pub nominal_return: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuedPosition {
    pub ticker: String,
    pub shares: f64,
    pub price: f64,
    pub value: f64,
    pub weight: f64,
    pub nominal_return: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioValuation {
    pub lines: Vec<ValuedPosition>,
    pub total_value: f64,
}

impl PortfolioValuation {
    pub fn to_holdings(&self) -> Vec<AssetHolding> {
        self.lines
            .iter()
            .map(|line| AssetHolding {
                weight: line.weight,
                nominal_return: line.nominal_return,
            })
            .collect()
    }
}

/// Latest year-over-year CPI change as a fraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InflationReading {
    pub rate: f64,
    pub period: String,
    pub fetched_at: DateTime<Utc>,
}
