//! Top-level dispatch for a parsed command line.

use tracing::debug;

use crate::adapter::inbound::cli::command::{CheckCommand, Cli, Commands};
use crate::adapter::inbound::cli::{check, compute};
use crate::error::Result;
use crate::infrastructure::config::Config;

/// Load configuration, initialize logging, and run the selected command.
pub fn execute(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    if cli.json_logs {
        config.logging.format = "json".into();
    }
    config.logging.validate()?;
    config.init_logging();

    debug!(config = ?cli.config, "Configuration loaded");

    match cli.command.unwrap_or_default() {
        Commands::Compute(args) => compute::execute(&config, &args),
        Commands::Check(CheckCommand::Config) => {
            check::execute_config(cli.config.as_deref(), &config)
        }
    }
}
