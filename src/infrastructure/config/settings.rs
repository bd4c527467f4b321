//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates engine and logging
//! settings. Every section is optional; a missing file section falls back to
//! the driver defaults (99% confidence, 50,000 simulations, seed 42).
//!
//! # Example
//!
//! ```no_run
//! use var_engine::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("var-engine.toml")?;
//!     config.init_logging();
//!     let engine = config.engine.build_engine()?;
//!     println!("{}", engine.compute(0.0, 1.0)?);
//!     Ok(())
//! }
//! ```

use serde::Deserialize;
use std::path::Path;

use super::engine::EngineConfig;
use super::logging::LoggingConfig;
use crate::error::{ConfigError, Result};

/// Main application configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Simulation settings.
    #[serde(default)]
    pub engine: EngineConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Validate configuration values.
    ///
    /// Runs the same checks the engine applies at construction, so a loaded
    /// config always yields a usable engine.
    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        self.engine.build_engine().map_err(ConfigError::from)?;
        self.engine.horizon().map_err(ConfigError::from)?;
        self.logging.validate()?;
        Ok(())
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::parse_toml("").unwrap();
        assert_eq!(config.engine, EngineConfig::default());
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn partial_engine_section_keeps_other_defaults() {
        let config = Config::parse_toml("[engine]\nseed = 7\n").unwrap();
        assert_eq!(config.engine.seed, 7);
        assert_eq!(config.engine.sample_count, 50_000);
        assert_eq!(config.engine.confidence_level, 0.99);
    }

    #[test]
    fn rejects_confidence_of_one() {
        let result = Config::parse_toml("[engine]\nconfidence_level = 1.0\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "confidence_level",
                ..
            }))
        ));
    }

    #[test]
    fn rejects_malformed_toml() {
        let result = Config::parse_toml("[engine\n");
        assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
    }

    #[test]
    fn rejects_negative_sample_count_at_parse() {
        let result = Config::parse_toml("[engine]\nsample_count = -5\n");
        assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
    }
}
