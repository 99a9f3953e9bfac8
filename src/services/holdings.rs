// src/services/holdings.rs
use std::collections::HashMap;
use std::io::Read;
use csv::Reader;
use serde::Deserialize;
use crate::models::{Position, PortfolioValuation, ValuedPosition};
use super::calculations::{CalcError, Result};

#[derive(Debug, Deserialize)]
struct PriceRow {
    #[serde(rename = "Ticker")]
    ticker: String,
    #[serde(rename = "Price")]
    price: f64,
}

#[derive(Debug, Deserialize)]
struct PositionRow {
    #[serde(rename = "Ticker")]
    ticker: String,
    #[serde(rename = "Shares")]
    shares: f64,
    #[serde(rename = "NominalReturn")]
    nominal_return: f64,
}

/// Values each position at the supplied price and derives its portfolio weight.
/// Every ticker must have a price; there is no fallback table.
pub fn value_positions(positions: &[Position], prices: &HashMap<String, f64>) -> Result<PortfolioValuation> {
    if positions.is_empty() {
        return Err(CalcError::InvalidPortfolio("no positions to value".to_string()));
    }

    let mut lines = Vec::with_capacity(positions.len());
    for position in positions {
        if !position.shares.is_finite() || position.shares < 0.0 {
            return Err(CalcError::InvalidPortfolio(format!(
                "{} has invalid share count {}",
                position.ticker, position.shares
            )));
        }
        let price = *prices.get(&position.ticker).ok_or_else(|| {
            CalcError::InvalidPortfolio(format!("no price supplied for {}", position.ticker))
        })?;
        if !price.is_finite() || price < 0.0 {
            return Err(CalcError::InvalidPortfolio(format!(
                "{} has invalid price {}",
                position.ticker, price
            )));
        }

        lines.push(ValuedPosition {
            ticker: position.ticker.clone(),
            shares: position.shares,
            price,
            value: position.shares * price,
            weight: 0.0,
            nominal_return: position.nominal_return,
        });
    }

    let total_value: f64 = lines.iter().map(|l| l.value).sum();
    if total_value <= 0.0 {
        return Err(CalcError::InvalidPortfolio("portfolio has zero total value".to_string()));
    }
    for line in &mut lines {
        line.weight = line.value / total_value;
    }

    Ok(PortfolioValuation { lines, total_value })
}

/// Reads `Ticker,Shares,NominalReturn` rows.
pub fn read_positions<R: Read>(reader: R) -> std::result::Result<Vec<Position>, csv::Error> {
    let mut rdr = Reader::from_reader(reader);
    let mut positions = Vec::new();
    for record in rdr.deserialize() {
        let row: PositionRow = record?;
        positions.push(Position {
            ticker: row.ticker.trim().to_string(),
            shares: row.shares,
            nominal_return: row.nominal_return,
        });
    }
    Ok(positions)
}

/// Reads `Ticker,Price` rows. Later rows win on duplicate tickers.
pub fn read_prices<R: Read>(reader: R) -> std::result::Result<HashMap<String, f64>, csv::Error> {
    let mut rdr = Reader::from_reader(reader);
    let mut prices = HashMap::new();
    for record in rdr.deserialize() {
        let row: PriceRow = record?;
        prices.insert(row.ticker.trim().to_string(), row.price);
    }
    Ok(prices)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_prices() -> HashMap<String, f64> {
        let mut prices = HashMap::new();
        prices.insert("AAPL".to_string(), 175.50);
        prices.insert("MSFT".to_string(), 325.75);
        prices.insert("GOOGL".to_string(), 130.20);
        prices
    }

    fn position(ticker: &str, shares: f64) -> Position {
        Position {
            ticker: ticker.to_string(),
            shares,
            nominal_return: 0.08,
        }
    }

    #[test]
    fn test_value_positions_weights() {
        let positions = vec![position("AAPL", 10.0), position("MSFT", 5.0), position("GOOGL", 8.0)];
        let valuation = value_positions(&positions, &sample_prices()).unwrap();

        let expected_total = 10.0 * 175.50 + 5.0 * 325.75 + 8.0 * 130.20;
        assert!((valuation.total_value - expected_total).abs() < 1e-9);

        let weight_sum: f64 = valuation.lines.iter().map(|l| l.weight).sum();
        assert!((weight_sum - 1.0).abs() < 1e-12);
        assert!((valuation.lines[0].weight - 1755.0 / expected_total).abs() < 1e-12);
    }

    #[test]
    fn test_missing_price() {
        let positions = vec![position("TSLA", 1.0)];
        let err = value_positions(&positions, &sample_prices()).unwrap_err();
        assert_eq!(err, CalcError::InvalidPortfolio("no price supplied for TSLA".to_string()));
    }

    #[test]
    fn test_zero_value_portfolio() {
        let positions = vec![position("AAPL", 0.0)];
        assert!(value_positions(&positions, &sample_prices()).is_err());
    }

    #[test]
    fn test_read_csv_files() {
        let positions_csv = "Ticker,Shares,NominalReturn\nAAPL,10,0.09\n MSFT ,5,0.07\n";
        let prices_csv = "Ticker,Price\nAAPL,175.5\nMSFT,325.75\n";

        let positions = read_positions(positions_csv.as_bytes()).unwrap();
        assert_eq!(positions.len(), 2);
        assert_eq!(positions[1].ticker, "MSFT");
        assert!((positions[0].nominal_return - 0.09).abs() < 1e-12);

        let prices = read_prices(prices_csv.as_bytes()).unwrap();
        assert_eq!(prices.get("MSFT"), Some(&325.75));
    }

    #[test]
    fn test_read_positions_bad_number() {
        let positions_csv = "Ticker,Shares,NominalReturn\nAAPL,ten,0.09\n";
        assert!(read_positions(positions_csv.as_bytes()).is_err());
    }
}
