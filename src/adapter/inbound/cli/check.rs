//! Handler for `check` subcommands.

use std::path::Path;

use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::config::Config;

/// Validate configuration and print the effective engine settings.
///
/// `config` has already been loaded from `config_path` (or defaulted when no
/// path was given); loading rejects invalid files before this runs.
pub fn execute_config(config_path: Option<&Path>, config: &Config) -> Result<()> {
    let engine = config.engine.build_engine()?;
    let horizon = config.engine.horizon()?;

    output::section("Configuration Check");
    match config_path {
        Some(path) => output::field("Config", path.display()),
        None => output::field("Config", "(built-in defaults)"),
    }
    output::success("Configuration is valid");

    output::section("Engine");
    output::field("Confidence", engine.confidence_level());
    output::field("Simulations", engine.sample_count());
    output::field("Tail index", engine.tail_index());
    output::field("Seed", engine.seed());
    output::field("Horizon", format!("{} day(s)", horizon.days()));

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);

    Ok(())
}
