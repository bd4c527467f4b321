//! Tail-risk figures produced by a single simulation run.

use std::fmt;

use serde::Serialize;

/// Value-at-Risk and Expected Shortfall for one distribution.
///
/// Both figures are loss magnitudes: a positive value means the tail sits in
/// loss territory. Serializes as `{"var": .., "es": ..}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskMetrics {
    var: f64,
    es: f64,
}

impl RiskMetrics {
    /// Creates a result pair from already-computed figures.
    #[must_use]
    pub const fn new(var: f64, es: f64) -> Self {
        Self { var, es }
    }

    /// Value-at-Risk: the loss at the tail quantile.
    #[must_use]
    pub const fn var(&self) -> f64 {
        self.var
    }

    /// Expected Shortfall: the mean loss at or beyond the VaR threshold.
    #[must_use]
    pub const fn es(&self) -> f64 {
        self.es
    }
}

impl fmt::Display for RiskMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VaR {:.6}, ES {:.6}", self.var, self.es)
    }
}
