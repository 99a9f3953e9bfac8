// src/bin/positions_report.rs
// Usage: positions_report <positions.csv> <prices.csv> <inflation %>
use std::env;
use std::fs::File;
use anyhow::{anyhow, Context, Result};
use dotenv::dotenv;
use log::info;
use real_return_acm::cli::parse_percent;
use real_return_acm::services::calculations::compute_portfolio_real_return;
use real_return_acm::services::holdings::{read_positions, read_prices, value_positions};

fn usage(args: &[String]) -> String {
    let program = args.first().map(String::as_str).unwrap_or("positions_report");
    format!("usage: {} <positions.csv> <prices.csv> <inflation %>", program)
}

fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 4 {
        return Err(anyhow!(usage(&args)));
    }

    let positions_file = File::open(&args[1]).with_context(|| format!("opening {}", args[1]))?;
    let prices_file = File::open(&args[2]).with_context(|| format!("opening {}", args[2]))?;
    let inflation = parse_percent(&args[3])?;

    let positions = read_positions(positions_file)?;
    let prices = read_prices(prices_file)?;
    info!("Loaded {} positions and {} prices", positions.len(), prices.len());

    let valuation = value_positions(&positions, &prices)?;
    let result = compute_portfolio_real_return(&valuation.to_holdings(), inflation)?;

    println!("{:<8} {:>10} {:>10} {:>12} {:>8}", "Ticker", "Shares", "Price", "Value", "Weight");
    for line in &valuation.lines {
        println!(
            "{:<8} {:>10.2} {:>10.2} {:>12.2} {:>7.2}%",
            line.ticker,
            line.shares,
            line.price,
            line.value,
            line.weight * 100.0
        );
    }
    println!("Total Portfolio Value: {:.2}", valuation.total_value);
    println!(
        "Portfolio real return: {:.2}% ({:?})",
        result.real_return * 100.0,
        result.interpretation
    );

    Ok(())
}
