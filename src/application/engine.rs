//! Monte Carlo Value-at-Risk and Expected Shortfall engine.
//!
//! Each computation draws `sample_count` P&L outcomes from a normal
//! distribution, sorts them ascending (worst losses first), and reads the
//! tail at the `(1 - confidence_level)` quantile:
//!
//! - **VaR** is the negated P&L at the tail index.
//! - **ES** is the negated mean of every draw at or below that P&L.
//!
//! The generator is re-seeded from the stored seed on every call, so a given
//! engine returns bit-identical figures for identical inputs.
//!
//! # Examples
//!
//! ```
//! use var_engine::application::engine::RiskEngine;
//!
//! let engine = RiskEngine::try_new(0.99, 10_000)?;
//! let metrics = engine.compute(0.0, 1.0)?;
//!
//! assert!(metrics.es() >= metrics.var());
//! assert_eq!(metrics, engine.compute(0.0, 1.0)?);
//! # Ok::<(), var_engine::domain::DomainError>(())
//! ```

use rand::SeedableRng;
use rand_distr::{Distribution, StandardNormal};
use rand_pcg::Pcg64;
use tracing::debug;

use crate::domain::{DomainError, Horizon, RiskMetrics};

/// Seed used when the caller does not supply one.
pub const DEFAULT_SEED: u64 = 42;

/// Confidence level of the command-line driver.
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.99;

/// Simulation count of the command-line driver.
pub const DEFAULT_SAMPLE_COUNT: usize = 50_000;

/// Largest sample a `Vec<f64>` can hold.
pub const MAX_SAMPLE_COUNT: usize = isize::MAX as usize / std::mem::size_of::<f64>();

/// Simulation configuration for tail-risk estimation.
///
/// Immutable once constructed; [`RiskEngine::compute`] takes `&self` and keeps
/// its generator and sample buffer local to the call, so one engine can be
/// shared across threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskEngine {
    confidence_level: f64,
    sample_count: usize,
    seed: u64,
}

impl RiskEngine {
    /// Creates an engine seeded with [`DEFAULT_SEED`].
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidConfiguration`] if `confidence_level` is
    /// not strictly between 0 and 1, or `sample_count` is zero or above
    /// [`MAX_SAMPLE_COUNT`].
    pub fn try_new(confidence_level: f64, sample_count: usize) -> Result<Self, DomainError> {
        Self::try_with_seed(confidence_level, sample_count, DEFAULT_SEED)
    }

    /// Creates an engine with an explicit generator seed.
    ///
    /// # Errors
    ///
    /// Same as [`RiskEngine::try_new`].
    pub fn try_with_seed(
        confidence_level: f64,
        sample_count: usize,
        seed: u64,
    ) -> Result<Self, DomainError> {
        // Negated so NaN fails too
        if !(confidence_level > 0.0 && confidence_level < 1.0) {
            return Err(DomainError::configuration(
                "confidence_level",
                format!("must be strictly between 0 and 1, got {confidence_level}"),
            ));
        }
        if sample_count == 0 {
            return Err(DomainError::configuration(
                "sample_count",
                "must be at least 1",
            ));
        }
        if sample_count > MAX_SAMPLE_COUNT {
            return Err(DomainError::configuration(
                "sample_count",
                format!("must be at most {MAX_SAMPLE_COUNT}, got {sample_count}"),
            ));
        }

        Ok(Self {
            confidence_level,
            sample_count,
            seed,
        })
    }

    /// Returns a copy of this engine using `seed`.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub const fn confidence_level(&self) -> f64 {
        self.confidence_level
    }

    #[must_use]
    pub const fn sample_count(&self) -> usize {
        self.sample_count
    }

    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Position of the VaR threshold in the ascending sample.
    ///
    /// `floor(n * (1 - c)) - 1`, clamped to `[0, n - 1]`.
    #[must_use]
    pub fn tail_index(&self) -> usize {
        let tail_mass = (self.sample_count as f64 * (1.0 - self.confidence_level)).floor();
        // Float-to-int `as` saturates, so an oversized mass lands on the upper clamp
        (tail_mass as usize)
            .saturating_sub(1)
            .min(self.sample_count - 1)
    }

    /// Simulates `N(mean, stddev)` P&L and returns its VaR and ES.
    ///
    /// `stddev = 0` is a point mass at `mean`, giving `var == es == -mean`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidInput`] if `mean` is not finite,
    /// `stddev` is negative or not finite, or the simulated P&L overflows
    /// `f64` and the figures come out non-finite.
    pub fn compute(&self, mean: f64, stddev: f64) -> Result<RiskMetrics, DomainError> {
        validate_distribution(mean, stddev)?;

        let mut pnl = self.simulate(mean, stddev);
        pnl.sort_unstable_by(f64::total_cmp);

        let tail_index = self.tail_index();
        let metrics = tail_metrics(&pnl, tail_index);

        if !(metrics.var().is_finite() && metrics.es().is_finite()) {
            return Err(DomainError::input(
                "distribution",
                format!("N({mean}, {stddev}) overflows f64 when simulated"),
            ));
        }

        debug!(
            confidence_level = self.confidence_level,
            sample_count = self.sample_count,
            seed = self.seed,
            mean,
            stddev,
            tail_index,
            var = metrics.var(),
            es = metrics.es(),
            "Computed tail risk"
        );

        Ok(metrics)
    }

    /// Scales one-period parameters to `horizon` and computes over it.
    ///
    /// # Errors
    ///
    /// Same as [`RiskEngine::compute`]. Parameters that are finite per
    /// period but overflow once scaled are reported against the caller's values.
    pub fn compute_over(
        &self,
        mean: f64,
        stddev: f64,
        horizon: Horizon,
    ) -> Result<RiskMetrics, DomainError> {
        validate_distribution(mean, stddev)?;

        let (scaled_mean, scaled_stddev) = horizon.scale(mean, stddev);
        let days = horizon.days();
        if !scaled_mean.is_finite() {
            return Err(DomainError::input(
                "mean",
                format!("{mean:e} overflows when scaled to {days} days"),
            ));
        }
        if !scaled_stddev.is_finite() {
            return Err(DomainError::input(
                "stddev",
                format!("{stddev:e} overflows when scaled to {days} days"),
            ));
        }

        self.compute(scaled_mean, scaled_stddev)
    }

    /// Draws the P&L sample from a generator freshly seeded for this call.
    fn simulate(&self, mean: f64, stddev: f64) -> Vec<f64> {
        let mut rng = Pcg64::seed_from_u64(self.seed);
        (0..self.sample_count)
            .map(|_| {
                let z: f64 = StandardNormal.sample(&mut rng);
                mean + stddev * z
            })
            .collect()
    }
}

impl Default for RiskEngine {
    fn default() -> Self {
        Self {
            confidence_level: DEFAULT_CONFIDENCE_LEVEL,
            sample_count: DEFAULT_SAMPLE_COUNT,
            seed: DEFAULT_SEED,
        }
    }
}

fn validate_distribution(mean: f64, stddev: f64) -> Result<(), DomainError> {
    if !mean.is_finite() {
        return Err(DomainError::input(
            "mean",
            format!("must be finite, got {mean}"),
        ));
    }
    if !stddev.is_finite() {
        return Err(DomainError::input(
            "stddev",
            format!("must be finite, got {stddev}"),
        ));
    }
    if stddev < 0.0 {
        return Err(DomainError::input(
            "stddev",
            format!("must be non-negative, got {stddev}"),
        ));
    }
    Ok(())
}

/// Reads VaR and ES off an ascending sample.
///
/// ES is the threshold plus the mean excess of the tail over it. Every excess
/// is non-positive, so `es >= var` holds without rounding slack, and a
/// constant sample yields `es == var` exactly.
fn tail_metrics(sorted: &[f64], tail_index: usize) -> RiskMetrics {
    let threshold = sorted[tail_index];
    let tail = &sorted[..=tail_index];
    let excess = tail.iter().map(|pnl| pnl - threshold).sum::<f64>() / tail.len() as f64;

    RiskMetrics::new(-threshold, -(threshold + excess))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_driver_settings() {
        let engine = RiskEngine::default();
        assert_eq!(engine.confidence_level(), 0.99);
        assert_eq!(engine.sample_count(), 50_000);
        assert_eq!(engine.seed(), DEFAULT_SEED);
    }

    #[test]
    fn try_new_uses_default_seed() {
        let engine = RiskEngine::try_new(0.95, 100).unwrap();
        assert_eq!(engine.seed(), DEFAULT_SEED);
        assert_eq!(engine.with_seed(7).seed(), 7);
    }

    #[test]
    fn rejects_confidence_outside_open_unit_interval() {
        for confidence in [0.0, 1.0, -0.5, 1.5, f64::NAN, f64::INFINITY] {
            let result = RiskEngine::try_new(confidence, 100);
            assert!(
                matches!(
                    result,
                    Err(DomainError::InvalidConfiguration {
                        field: "confidence_level",
                        ..
                    })
                ),
                "confidence {confidence} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_zero_samples() {
        assert!(matches!(
            RiskEngine::try_new(0.99, 0),
            Err(DomainError::InvalidConfiguration {
                field: "sample_count",
                ..
            })
        ));
    }

    #[test]
    fn rejects_sample_count_beyond_vec_capacity() {
        assert!(RiskEngine::try_new(0.99, MAX_SAMPLE_COUNT).is_ok());
        assert!(matches!(
            RiskEngine::try_new(0.99, usize::MAX),
            Err(DomainError::InvalidConfiguration {
                field: "sample_count",
                ..
            })
        ));
    }

    #[test]
    fn tail_index_for_driver_settings() {
        assert_eq!(RiskEngine::default().tail_index(), 499);
    }

    #[test]
    fn tail_index_clamps_to_start() {
        let engine = RiskEngine::try_new(0.99, 10).unwrap();
        assert_eq!(engine.tail_index(), 0);

        let single = RiskEngine::try_new(0.5, 1).unwrap();
        assert_eq!(single.tail_index(), 0);
    }

    #[test]
    fn tail_index_clamps_to_end() {
        // 1 - 1e-17 rounds to exactly 1.0, so the unclamped index would be n
        let engine = RiskEngine::try_new(1e-17, 10).unwrap();
        assert_eq!(engine.tail_index(), 9);
    }

    #[test]
    fn tail_index_at_five_percent() {
        let engine = RiskEngine::try_new(0.95, 100).unwrap();
        assert_eq!(engine.tail_index(), 4);
    }

    #[test]
    fn tail_metrics_on_known_sample() {
        let sorted = [-5.0, -3.0, -1.0, 0.0, 2.0];
        let metrics = tail_metrics(&sorted, 1);
        assert_eq!(metrics.var(), 3.0);
        assert_eq!(metrics.es(), 4.0);
    }

    #[test]
    fn tail_metrics_at_first_index() {
        let sorted = [-2.5, 1.0, 3.0];
        let metrics = tail_metrics(&sorted, 0);
        assert_eq!(metrics.var(), 2.5);
        assert_eq!(metrics.es(), 2.5);
    }

    #[test]
    fn rejects_negative_stddev() {
        let engine = RiskEngine::try_new(0.99, 100).unwrap();
        assert!(matches!(
            engine.compute(0.0, -1.0),
            Err(DomainError::InvalidInput { field: "stddev", .. })
        ));
    }

    #[test]
    fn rejects_non_finite_parameters() {
        let engine = RiskEngine::try_new(0.99, 100).unwrap();
        assert!(matches!(
            engine.compute(f64::NAN, 1.0),
            Err(DomainError::InvalidInput { field: "mean", .. })
        ));
        assert!(matches!(
            engine.compute(0.0, f64::INFINITY),
            Err(DomainError::InvalidInput { field: "stddev", .. })
        ));
    }

    #[test]
    fn generator_is_reseeded_per_call() {
        let engine = RiskEngine::try_new(0.9, 1_000).unwrap();
        let first = engine.simulate(0.0, 1.0);
        let second = engine.simulate(0.0, 1.0);
        assert_eq!(first, second);
    }

    #[test]
    fn seed_changes_sample() {
        let engine = RiskEngine::try_new(0.9, 1_000).unwrap();
        let a = engine.simulate(0.0, 1.0);
        let b = engine.with_seed(DEFAULT_SEED + 1).simulate(0.0, 1.0);
        assert_ne!(a, b);
    }

    #[test]
    fn sample_has_configured_length() {
        let engine = RiskEngine::try_new(0.9, 123).unwrap();
        assert_eq!(engine.simulate(1.0, 2.0).len(), 123);
    }

    #[test]
    fn compute_over_one_day_matches_compute() {
        let engine = RiskEngine::try_new(0.95, 2_000).unwrap();
        assert_eq!(
            engine.compute_over(0.01, 0.2, Horizon::one_day()).unwrap(),
            engine.compute(0.01, 0.2).unwrap()
        );
    }

    #[test]
    fn compute_over_rejects_negative_stddev_before_scaling() {
        let engine = RiskEngine::try_new(0.95, 100).unwrap();
        let horizon = Horizon::try_new(10).unwrap();
        assert!(matches!(
            engine.compute_over(0.0, -0.1, horizon),
            Err(DomainError::InvalidInput { field: "stddev", .. })
        ));
    }

    #[test]
    fn overflowing_draws_are_rejected() {
        let engine = RiskEngine::try_new(0.99, 1_000).unwrap();
        assert!(matches!(
            engine.compute(0.0, 1e308),
            Err(DomainError::InvalidInput {
                field: "distribution",
                ..
            })
        ));
    }

    #[test]
    fn horizon_overflow_reports_unscaled_mean() {
        let engine = RiskEngine::try_new(0.99, 100).unwrap();
        let horizon = Horizon::try_new(100).unwrap();
        match engine.compute_over(1e307, 1.0, horizon) {
            Err(DomainError::InvalidInput { field: "mean", reason }) => {
                assert!(reason.contains("1e307"), "unexpected reason: {reason}");
                assert!(reason.contains("scaled to 100 days"), "unexpected reason: {reason}");
            }
            other => panic!("expected scaled mean overflow, got {other:?}"),
        }
    }
}
