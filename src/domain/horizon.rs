//! Risk horizon and square-root-of-time parameter scaling.
//!
//! Distribution parameters are usually estimated per trading day. Over a
//! horizon of `T` days, independent daily P&L sums to a normal distribution
//! with mean `mu * T` and standard deviation `sigma * sqrt(T)`.

use super::error::DomainError;

/// Number of trading days the risk figures cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Horizon {
    days: u32,
}

impl Horizon {
    /// Creates a horizon of `days` trading days.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidConfiguration`] if `days` is zero.
    pub fn try_new(days: u32) -> Result<Self, DomainError> {
        if days == 0 {
            return Err(DomainError::configuration(
                "horizon_days",
                "must be at least 1",
            ));
        }
        Ok(Self { days })
    }

    /// The single-period horizon; scaling through it is the identity.
    #[must_use]
    pub const fn one_day() -> Self {
        Self { days: 1 }
    }

    #[must_use]
    pub const fn days(&self) -> u32 {
        self.days
    }

    /// Scales one-period `(mean, stddev)` to this horizon.
    #[must_use]
    pub fn scale(&self, mean: f64, stddev: f64) -> (f64, f64) {
        let days = f64::from(self.days);
        (mean * days, stddev * days.sqrt())
    }
}

impl Default for Horizon {
    fn default() -> Self {
        Self::one_day()
    }
}
