//! Handler for the `compute` command.
//!
//! Reads `<mean> <stddev>` (two whitespace-separated reals) from stdin unless
//! both are given as flags, runs the engine, and prints one JSON line.

use std::io::{self, Read};

use tracing::info;

use crate::adapter::inbound::cli::command::ComputeArgs;
use crate::adapter::inbound::cli::output;
use crate::error::{Error, Result};
use crate::infrastructure::config::Config;

/// Execute the compute command.
pub fn execute(config: &Config, args: &ComputeArgs) -> Result<()> {
    let settings = args.apply(&config.engine);
    let engine = settings.build_engine()?;
    let horizon = settings.horizon()?;

    let (mean, stddev) = match args.distribution() {
        Some(params) => params,
        None => read_distribution(io::stdin().lock())?,
    };

    info!(
        mean,
        stddev,
        horizon_days = horizon.days(),
        confidence_level = engine.confidence_level(),
        sample_count = engine.sample_count(),
        "Running simulation"
    );

    let metrics = engine.compute_over(mean, stddev, horizon)?;
    output::json_line(&metrics)
}

/// Read the distribution parameters from a stream.
pub fn read_distribution<R: Read>(mut reader: R) -> Result<(f64, f64)> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    parse_distribution(&input)
}

/// Parse `<mean> <stddev>` from whitespace-separated text.
pub fn parse_distribution(input: &str) -> Result<(f64, f64)> {
    let mut tokens = input.split_whitespace();
    let mean = parse_real(tokens.next(), "mean")?;
    let stddev = parse_real(tokens.next(), "stddev")?;

    if let Some(extra) = tokens.next() {
        return Err(Error::Parse(format!(
            "unexpected trailing input \"{extra}\", expected \"<mean> <stddev>\""
        )));
    }

    Ok((mean, stddev))
}

fn parse_real(token: Option<&str>, name: &str) -> Result<f64> {
    let token = token.ok_or_else(|| {
        Error::Parse(format!("missing {name}, expected \"<mean> <stddev>\""))
    })?;
    token
        .parse()
        .map_err(|_| Error::Parse(format!("{name} is not a number: \"{token}\"")))
}
