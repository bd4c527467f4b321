//! Inbound adapters drive the application from the outside.

pub mod cli;
