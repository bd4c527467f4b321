//! Domain validation errors for engine configuration and simulation input.
//!
//! These errors are returned by `try_new` constructors and by
//! [`RiskEngine::compute`](crate::application::engine::RiskEngine::compute)
//! when an invariant of the risk model is violated.
//!
//! # Examples
//!
//! ```
//! use var_engine::application::engine::RiskEngine;
//! use var_engine::domain::error::DomainError;
//!
//! // Zero simulations cannot produce a tail
//! let result = RiskEngine::try_new(0.99, 0);
//!
//! assert!(matches!(
//!     result,
//!     Err(DomainError::InvalidConfiguration { field: "sample_count", .. })
//! ));
//! ```

use thiserror::Error;

/// Errors that occur when risk model invariants are violated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Engine configuration is unusable (confidence level, sample count, horizon).
    #[error("invalid configuration for {field}: {reason}")]
    InvalidConfiguration {
        /// The offending configuration field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// Distribution parameters passed to a computation are unusable.
    #[error("invalid input for {field}: {reason}")]
    InvalidInput {
        /// The offending input parameter.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

impl DomainError {
    pub(crate) fn configuration(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            field,
            reason: reason.into(),
        }
    }

    pub(crate) fn input(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}
