//! Application services.
//!
//! The risk engine turns configuration plus distribution parameters into
//! tail-risk figures.

pub mod engine;

pub use engine::{
    RiskEngine, DEFAULT_CONFIDENCE_LEVEL, DEFAULT_SAMPLE_COUNT, DEFAULT_SEED, MAX_SAMPLE_COUNT,
};
