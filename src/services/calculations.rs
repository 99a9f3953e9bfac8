// src/services/calculations.rs
use std::fmt;
use crate::models::{AssetHolding, Interpretation, ProjectionRow, ReturnResult, ScenarioEntry};

/// Real returns within this distance of zero are reported as neutral.
pub const NEUTRAL_EPSILON: f64 = 1e-9;

/// Allowed drift of a portfolio's weight sum from 1.
pub const WEIGHT_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, PartialEq)]
pub enum CalcError {
    InvalidInput(String),
    InvalidPortfolio(String),
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CalcError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
            CalcError::InvalidPortfolio(msg) => write!(f, "invalid portfolio: {}", msg),
        }
    }
}

impl std::error::Error for CalcError {}

pub type Result<T> = std::result::Result<T, CalcError>;

fn ensure_finite(value: f64, name: &str) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CalcError::InvalidInput(format!("{} must be a finite number, got {}", name, value)))
    }
}

fn ensure_inflation(inflation_rate: f64) -> Result<()> {
    ensure_finite(inflation_rate, "inflation rate")?;
    if inflation_rate <= -1.0 {
        return Err(CalcError::InvalidInput(format!(
            "inflation rate must be greater than -100%, got {}",
            inflation_rate
        )));
    }
    Ok(())
}

/// Finite inputs can still overflow or underflow to a non-finite figure.
fn ensure_finite_result(value: f64, name: &str) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::InvalidInput(format!("{} is not finite for these inputs", name)))
    }
}

fn classify(real_return: f64) -> Interpretation {
    if real_return.abs() <= NEUTRAL_EPSILON {
        Interpretation::Neutral
    } else if real_return > 0.0 {
        Interpretation::Positive
    } else {
        Interpretation::Negative
    }
}

/// Fisher relation: `(1 + nominal) / (1 + inflation) - 1`.
pub fn compute_real_return(nominal_return: f64, inflation_rate: f64) -> Result<ReturnResult> {
    ensure_finite(nominal_return, "nominal return")?;
    ensure_inflation(inflation_rate)?;

    let real_return = ensure_finite_result(
        (1.0 + nominal_return) / (1.0 + inflation_rate) - 1.0,
        "real return",
    )?;
    Ok(ReturnResult {
        real_return,
        interpretation: classify(real_return),
    })
}

/// Holds both rates constant for `years` years.
pub fn project_over_years(nominal_return: f64, inflation_rate: f64, years: u32) -> Result<Vec<ProjectionRow>> {
    if years < 1 {
        return Err(CalcError::InvalidInput("projection needs at least one year".to_string()));
    }
    let per_year = compute_real_return(nominal_return, inflation_rate)?;

    let mut cumulative_nominal = 1.0;
    let mut cumulative_real = 1.0;
    let mut rows = Vec::with_capacity(years as usize);
    for year in 1..=years {
        cumulative_nominal = ensure_finite_result(cumulative_nominal * (1.0 + nominal_return), "cumulative nominal growth")?;
        cumulative_real = ensure_finite_result(cumulative_real * (1.0 + per_year.real_return), "cumulative real growth")?;
        rows.push(ProjectionRow {
            year,
            nominal_return,
            inflation_rate,
            real_return: per_year.real_return,
            cumulative_nominal,
            cumulative_real,
        });
    }

    Ok(rows)
}

/// Year `y` uses the `y-1`th element of each slice.
pub fn project_scenario(nominal_rates: &[f64], inflation_rates: &[f64]) -> Result<Vec<ProjectionRow>> {
    if nominal_rates.is_empty() {
        return Err(CalcError::InvalidInput("scenario needs at least one year of rates".to_string()));
    }
    if nominal_rates.len() != inflation_rates.len() {
        return Err(CalcError::InvalidInput(format!(
            "scenario has {} nominal rates but {} inflation rates",
            nominal_rates.len(),
            inflation_rates.len()
        )));
    }

    // Validate every year before producing any row.
    let results = nominal_rates
        .iter()
        .zip(inflation_rates)
        .map(|(&nominal, &inflation)| compute_real_return(nominal, inflation))
        .collect::<Result<Vec<_>>>()?;

    let mut cumulative_nominal = 1.0;
    let mut cumulative_real = 1.0;
    let mut rows = Vec::with_capacity(results.len());
    for (idx, result) in results.iter().enumerate() {
        let nominal_return = nominal_rates[idx];
        cumulative_nominal = ensure_finite_result(cumulative_nominal * (1.0 + nominal_return), "cumulative nominal growth")?;
        cumulative_real = ensure_finite_result(cumulative_real * (1.0 + result.real_return), "cumulative real growth")?;
        rows.push(ProjectionRow {
            year: idx as u32 + 1,
            nominal_return,
            inflation_rate: inflation_rates[idx],
            real_return: result.real_return,
            cumulative_nominal,
            cumulative_real,
        });
    }

    Ok(rows)
}

/// Inflation at which the real return is zero, which is the nominal return itself.
pub fn compute_break_even_inflation(nominal_return: f64) -> Result<f64> {
    ensure_finite(nominal_return, "nominal return")?;
    Ok(nominal_return)
}

pub fn compute_portfolio_real_return(holdings: &[AssetHolding], inflation_rate: f64) -> Result<ReturnResult> {
    if holdings.is_empty() {
        return Err(CalcError::InvalidPortfolio("portfolio has no holdings".to_string()));
    }
    for (idx, holding) in holdings.iter().enumerate() {
        if !holding.weight.is_finite() || !(0.0..=1.0).contains(&holding.weight) {
            return Err(CalcError::InvalidPortfolio(format!(
                "holding {} has weight {} outside [0, 1]",
                idx, holding.weight
            )));
        }
    }
    let weight_sum: f64 = holdings.iter().map(|h| h.weight).sum();
    if (weight_sum - 1.0).abs() > WEIGHT_TOLERANCE {
        return Err(CalcError::InvalidPortfolio(format!(
            "weights sum to {}, expected 1",
            weight_sum
        )));
    }

    // Adjust each holding first, then weight the real returns.
    let mut real_return = 0.0;
    for holding in holdings {
        let result = compute_real_return(holding.nominal_return, inflation_rate)?;
        real_return += holding.weight * result.real_return;
    }
    let real_return = ensure_finite_result(real_return, "portfolio real return")?;

    Ok(ReturnResult {
        real_return,
        interpretation: classify(real_return),
    })
}

/// One entry per inflation rate, in input order.
pub fn compute_scenario_grid(nominal_return: f64, inflation_rates: &[f64]) -> Result<Vec<ScenarioEntry>> {
    inflation_rates
        .iter()
        .map(|&inflation_rate| {
            compute_real_return(nominal_return, inflation_rate).map(|result| ScenarioEntry {
                inflation_rate,
                result,
            })
        })
        .collect()
}

/// What `amount` today buys after `years` of constant inflation.
pub fn compute_purchasing_power(amount: f64, inflation_rate: f64, years: u32) -> Result<f64> {
    ensure_finite(amount, "amount")?;
    ensure_inflation(inflation_rate)?;
    let future_value = amount / (1.0 + inflation_rate).powf(f64::from(years));
    ensure_finite_result(future_value, "future value")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_band() {
        assert_eq!(classify(0.0), Interpretation::Neutral);
        assert_eq!(classify(1e-12), Interpretation::Neutral);
        assert_eq!(classify(-1e-12), Interpretation::Neutral);
        assert_eq!(classify(1e-6), Interpretation::Positive);
        assert_eq!(classify(-1e-6), Interpretation::Negative);
    }

    #[test]
    fn test_inflation_below_minus_one_rejected() {
        assert!(matches!(compute_real_return(0.05, -1.5), Err(CalcError::InvalidInput(_))));
    }

    #[test]
    fn test_nan_rejected() {
        assert!(matches!(compute_real_return(f64::NAN, 0.02), Err(CalcError::InvalidInput(_))));
        assert!(matches!(compute_real_return(0.02, f64::INFINITY), Err(CalcError::InvalidInput(_))));
    }

    #[test]
    fn test_zero_years_rejected() {
        assert!(matches!(project_over_years(0.07, 0.03, 0), Err(CalcError::InvalidInput(_))));
    }

    #[test]
    fn test_negative_weight_rejected() {
        let holdings = [
            AssetHolding { weight: -0.5, nominal_return: 0.05 },
            AssetHolding { weight: 1.5, nominal_return: 0.05 },
        ];
        assert!(matches!(
            compute_portfolio_real_return(&holdings, 0.02),
            Err(CalcError::InvalidPortfolio(_))
        ));
    }

    #[test]
    fn test_error_display() {
        let err = CalcError::InvalidPortfolio("weights sum to 0.9, expected 1".to_string());
        assert_eq!(err.to_string(), "invalid portfolio: weights sum to 0.9, expected 1");
    }
}
