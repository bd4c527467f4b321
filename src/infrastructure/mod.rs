//! Infrastructure layer.
//!
//! Provides technical concerns that support the application without containing
//! risk logic.
//!
//! # Submodules
//!
//! - [`config`] - Configuration loading, validation and logging setup

pub mod config;
