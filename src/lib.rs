//! var-engine - Monte Carlo Value-at-Risk and Expected Shortfall.
//!
//! This crate estimates the tail risk of a normally distributed P&L by
//! simulation: draw a large seeded sample, sort it, read the loss at the
//! `(1 - confidence)` quantile (VaR), and average the losses beyond it (ES).
//!
//! # Architecture
//!
//! - **`application::engine`** - The [`RiskEngine`](application::RiskEngine):
//!   immutable configuration plus a re-seeded, self-contained `compute` call
//! - **`domain`** - Result and horizon value types with their validation errors
//! - **`infrastructure::config`** - TOML configuration and logging setup
//! - **`adapter::inbound::cli`** - The `var-engine` command-line driver
//!
//! # Modules
//!
//! - [`adapter`] - Command-line driver reading stdin and printing JSON
//! - [`application`] - The simulation-and-aggregation engine
//! - [`domain`] - `RiskMetrics`, `Horizon`, `DomainError`
//! - [`error`] - Error types for the crate
//! - [`infrastructure`] - Configuration loading and logging
//!
//! # Example
//!
//! ```
//! use var_engine::application::RiskEngine;
//! use var_engine::domain::Horizon;
//!
//! let engine = RiskEngine::try_with_seed(0.99, 20_000, 42)?;
//!
//! // Daily parameters scaled to a 10-day horizon
//! let horizon = Horizon::try_new(10)?;
//! let metrics = engine.compute_over(0.0005, 0.012, horizon)?;
//!
//! assert!(metrics.var() > 0.0);
//! assert!(metrics.es() >= metrics.var());
//! # Ok::<(), var_engine::domain::DomainError>(())
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
