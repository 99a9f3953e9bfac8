// src/bin/real_return.rs
use std::io::{self, Write};
use anyhow::Result;
use log::debug;
use real_return_acm::config::Config;
use real_return_acm::cli::{prompt_optional_years, prompt_percent, write_projection_csv};
use real_return_acm::services::calculations::{compute_real_return, project_over_years};

fn main() -> Result<()> {
    env_logger::init();
    let config = Config::from_env().map_err(|e| anyhow::anyhow!("invalid configuration: {}", e))?;

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();

    writeln!(output, "Real vs Nominal Return Calculator")?;
    let nominal = prompt_percent(&mut input, &mut output, "Enter Nominal return (%): ")?;
    let inflation = prompt_percent(&mut input, &mut output, "Enter Inflation Rate (%): ")?;
    debug!("nominal = {}, inflation = {}", nominal, inflation);

    let result = compute_real_return(nominal, inflation)?;
    writeln!(output, "Real return: {:.2}%", result.real_return * 100.0)?;
    writeln!(output, "Interpretation: {:?} ({})", result.interpretation, result.interpretation.describe())?;

    if let Some(years) = prompt_optional_years(
        &mut input,
        &mut output,
        "Years to project (blank to skip): ",
        config.max_projection_years,
    )? {
        let rows = project_over_years(nominal, inflation, years)?;
        write_projection_csv(&rows, &mut output)?;
    }

    Ok(())
}
