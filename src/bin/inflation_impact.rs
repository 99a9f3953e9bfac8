// src/bin/inflation_impact.rs
use std::io::{self, Write};
use anyhow::{Context, Result};
use real_return_acm::cli::{prompt, prompt_f64, prompt_percent};
use real_return_acm::services::calculations::compute_purchasing_power;

fn main() -> Result<()> {
    env_logger::init();

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();

    writeln!(output, "Inflation Impact Calculator")?;
    let amount = prompt_f64(&mut input, &mut output, "Enter the current amount of money: ")?;
    let inflation = prompt_percent(&mut input, &mut output, "Enter annual inflation rate (in %): ")?;
    let raw_years = prompt(&mut input, &mut output, "Enter the number of years: ")?;
    let years: u32 = raw_years
        .parse()
        .with_context(|| format!("{:?} is not a whole number of years", raw_years))?;

    let future_value = compute_purchasing_power(amount, inflation, years)?;
    writeln!(
        output,
        "\n{:.2} today will only be worth about {:.2} in {} years at {:.1}% inflation.",
        amount,
        future_value,
        years,
        inflation * 100.0
    )?;

    Ok(())
}
