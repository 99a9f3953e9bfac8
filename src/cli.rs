// src/cli.rs
use std::io::{BufRead, Write};
use anyhow::{anyhow, Context, Result};
use csv::Writer;
use crate::models::ProjectionRow;

/// Prints `label` and reads one trimmed line from `input`.
pub fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> Result<String> {
    write!(output, "{}", label)?;
    output.flush()?;
    let mut line = String::new();
    let read = input.read_line(&mut line).context("failed to read input")?;
    if read == 0 {
        return Err(anyhow!("unexpected end of input"));
    }
    Ok(line.trim().to_string())
}

/// Accepts `7`, `7.5` or `7.5%` and returns the fraction (0.075).
pub fn parse_percent(raw: &str) -> Result<f64> {
    let cleaned = raw.trim().trim_end_matches('%').trim();
    let value: f64 = cleaned
        .parse()
        .with_context(|| format!("{:?} is not a percentage", raw))?;
    Ok(value / 100.0)
}

pub fn prompt_percent<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> Result<f64> {
    let raw = prompt(input, output, label)?;
    parse_percent(&raw)
}

pub fn prompt_f64<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> Result<f64> {
    let raw = prompt(input, output, label)?;
    raw.parse::<f64>().with_context(|| format!("{:?} is not a number", raw))
}

/// Empty input means "skip". Horizons above `max_years` are refused.
pub fn prompt_optional_years<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
    max_years: u32,
) -> Result<Option<u32>> {
    let raw = prompt(input, output, label)?;
    if raw.is_empty() {
        return Ok(None);
    }
    let years = raw.parse::<u32>().with_context(|| format!("{:?} is not a whole number of years", raw))?;
    if years > max_years {
        return Err(anyhow!("projection is limited to {} years", max_years));
    }
    Ok(Some(years))
}

/// Rates are written as percentages with four decimals.
pub fn write_projection_csv<W: Write>(rows: &[ProjectionRow], writer: W) -> Result<()> {
    let mut wtr = Writer::from_writer(writer);
    wtr.write_record([
        "Year",
        "Nominal (%)",
        "Inflation (%)",
        "Real (%)",
        "Cumulative Nominal",
        "Cumulative Real",
    ])?;
    for row in rows {
        wtr.write_record([
            row.year.to_string(),
            format!("{:.4}", row.nominal_return * 100.0),
            format!("{:.4}", row.inflation_rate * 100.0),
            format!("{:.4}", row.real_return * 100.0),
            format!("{:.6}", row.cumulative_nominal),
            format!("{:.6}", row.cumulative_real),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::calculations::project_over_years;

    #[test]
    fn test_parse_percent() {
        assert!((parse_percent("7").unwrap() - 0.07).abs() < 1e-12);
        assert!((parse_percent(" 7.5% ").unwrap() - 0.075).abs() < 1e-12);
        assert!((parse_percent("-2").unwrap() + 0.02).abs() < 1e-12);
        assert!(parse_percent("seven").is_err());
    }

    #[test]
    fn test_prompt_reads_line() {
        let mut input = "3.5\n".as_bytes();
        let mut output = Vec::new();
        let value = prompt_percent(&mut input, &mut output, "Enter Inflation Rate (%): ").unwrap();
        assert!((value - 0.035).abs() < 1e-12);
        assert_eq!(String::from_utf8(output).unwrap(), "Enter Inflation Rate (%): ");
    }

    #[test]
    fn test_optional_years_blank() {
        let mut input = "\n".as_bytes();
        let mut output = Vec::new();
        assert_eq!(prompt_optional_years(&mut input, &mut output, "Years: ", 100).unwrap(), None);
    }

    #[test]
    fn test_optional_years_over_limit() {
        let mut input = "4294967295\n".as_bytes();
        let mut output = Vec::new();
        let err = prompt_optional_years(&mut input, &mut output, "Years: ", 100).unwrap_err();
        assert_eq!(err.to_string(), "projection is limited to 100 years");

        let mut input = "100\n".as_bytes();
        assert_eq!(prompt_optional_years(&mut input, &mut output, "Years: ", 100).unwrap(), Some(100));
    }

    #[test]
    fn test_prompt_eof() {
        let mut input = "".as_bytes();
        let mut output = Vec::new();
        assert!(prompt(&mut input, &mut output, "> ").is_err());
    }

    #[test]
    fn test_write_projection_csv() {
        let rows = project_over_years(0.07, 0.03, 2).unwrap();
        let mut buf = Vec::new();
        write_projection_csv(&rows, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Year,"));
        assert!(lines[1].starts_with("1,7.0000,3.0000,3.8835,1.070000,1.038835"));
        assert!(lines[2].starts_with("2,"));
    }
}
