//! Adapters between the engine and its callers.

pub mod inbound;
