//! Risk model value types and their invariants.

pub mod error;
pub mod horizon;
pub mod metrics;

pub use error::DomainError;
pub use horizon::Horizon;
pub use metrics::RiskMetrics;
