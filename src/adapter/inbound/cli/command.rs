//! Command-line interface definitions.
//!
//! Defines the CLI structure for the var-engine binary using `clap`. Running
//! the binary without a subcommand reads `<mean> <stddev>` from stdin and
//! prints the `{"var": .., "es": ..}` record, same as `compute`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::infrastructure::config::EngineConfig;

/// Monte Carlo Value-at-Risk and Expected Shortfall calculator
#[derive(Parser, Debug)]
#[command(name = "var-engine")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override log level (debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level subcommands for the var-engine CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute VaR and ES for a normal P&L distribution (default)
    Compute(ComputeArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

impl Default for Commands {
    fn default() -> Self {
        Self::Compute(ComputeArgs::default())
    }
}

/// Subcommands for `var-engine check`
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate the configuration and show effective engine settings
    Config,
}

/// Arguments for the `compute` subcommand.
#[derive(Parser, Debug, Default)]
pub struct ComputeArgs {
    /// Mean of one-period P&L (read from stdin when omitted)
    #[arg(long, requires = "stddev", allow_negative_numbers = true)]
    pub mean: Option<f64>,

    /// Standard deviation of one-period P&L (read from stdin when omitted)
    #[arg(long, requires = "mean", allow_negative_numbers = true)]
    pub stddev: Option<f64>,

    /// Override confidence level, strictly between 0 and 1
    #[arg(long, allow_negative_numbers = true)]
    pub confidence: Option<f64>,

    /// Override number of Monte Carlo simulations
    #[arg(long)]
    pub simulations: Option<usize>,

    /// Override generator seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Scale the parameters to a horizon of this many trading days
    #[arg(long)]
    pub horizon_days: Option<u32>,
}

impl ComputeArgs {
    /// Apply command-line overrides on top of configured engine settings.
    #[must_use]
    pub fn apply(&self, base: &EngineConfig) -> EngineConfig {
        EngineConfig {
            confidence_level: self.confidence.unwrap_or(base.confidence_level),
            sample_count: self.simulations.unwrap_or(base.sample_count),
            seed: self.seed.unwrap_or(base.seed),
            horizon_days: self.horizon_days.unwrap_or(base.horizon_days),
        }
    }

    /// Distribution parameters given on the command line, if any.
    #[must_use]
    pub fn distribution(&self) -> Option<(f64, f64)> {
        match (self.mean, self.stddev) {
            (Some(mean), Some(stddev)) => Some((mean, stddev)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn bare_invocation_has_no_subcommand() {
        let cli = Cli::try_parse_from(["var-engine"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn compute_accepts_negative_mean() {
        let cli =
            Cli::try_parse_from(["var-engine", "compute", "--mean", "-0.5", "--stddev", "2"])
                .unwrap();
        match cli.command {
            Some(Commands::Compute(args)) => assert_eq!(args.distribution(), Some((-0.5, 2.0))),
            other => panic!("expected compute, got {other:?}"),
        }
    }

    #[test]
    fn negative_confidence_reaches_validation() {
        let cli = Cli::try_parse_from(["var-engine", "compute", "--confidence", "-0.5"]).unwrap();
        match cli.command {
            Some(Commands::Compute(args)) => assert_eq!(args.confidence, Some(-0.5)),
            other => panic!("expected compute, got {other:?}"),
        }
    }

    #[test]
    fn mean_without_stddev_is_a_usage_error() {
        assert!(Cli::try_parse_from(["var-engine", "compute", "--mean", "1"]).is_err());
    }

    #[test]
    fn global_config_after_subcommand() {
        let cli =
            Cli::try_parse_from(["var-engine", "check", "config", "--config", "risk.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("risk.toml")));
        assert!(matches!(
            cli.command,
            Some(Commands::Check(CheckCommand::Config))
        ));
    }

    #[test]
    fn overrides_replace_only_given_fields() {
        let args = ComputeArgs {
            simulations: Some(1_000),
            horizon_days: Some(10),
            ..Default::default()
        };
        let merged = args.apply(&EngineConfig::default());
        assert_eq!(merged.sample_count, 1_000);
        assert_eq!(merged.horizon_days, 10);
        assert_eq!(merged.confidence_level, 0.99);
        assert_eq!(merged.seed, 42);
    }
}
