//! Simulation engine configuration.

use serde::Deserialize;

use crate::application::engine::{
    RiskEngine, DEFAULT_CONFIDENCE_LEVEL, DEFAULT_SAMPLE_COUNT, DEFAULT_SEED,
};
use crate::domain::{DomainError, Horizon};

/// Settings for the Monte Carlo risk engine.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EngineConfig {
    /// Fraction of the distribution outside the tail (e.g., 0.99).
    #[serde(default = "default_confidence_level")]
    pub confidence_level: f64,
    /// Monte Carlo draws per computation.
    #[serde(default = "default_sample_count")]
    pub sample_count: usize,
    /// Generator seed; identical seeds reproduce identical figures.
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Trading days the input parameters are scaled to (default: 1).
    #[serde(default = "default_horizon_days")]
    pub horizon_days: u32,
}

const fn default_confidence_level() -> f64 {
    DEFAULT_CONFIDENCE_LEVEL
}

const fn default_sample_count() -> usize {
    DEFAULT_SAMPLE_COUNT
}

const fn default_seed() -> u64 {
    DEFAULT_SEED
}

const fn default_horizon_days() -> u32 {
    1
}

impl EngineConfig {
    /// Build a validated engine from these settings.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidConfiguration`] for an out-of-range
    /// confidence level or a sample count of zero or above
    /// [`MAX_SAMPLE_COUNT`](crate::application::engine::MAX_SAMPLE_COUNT).
    pub fn build_engine(&self) -> Result<RiskEngine, DomainError> {
        RiskEngine::try_with_seed(self.confidence_level, self.sample_count, self.seed)
    }

    /// Build the validated risk horizon.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidConfiguration`] if `horizon_days` is zero.
    pub fn horizon(&self) -> Result<Horizon, DomainError> {
        Horizon::try_new(self.horizon_days)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            confidence_level: default_confidence_level(),
            sample_count: default_sample_count(),
            seed: default_seed(),
            horizon_days: default_horizon_days(),
        }
    }
}
