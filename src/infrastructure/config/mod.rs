//! Infrastructure configuration modules.

pub mod engine;
pub mod logging;
pub mod settings;

pub use engine::EngineConfig;
pub use logging::LoggingConfig;
pub use settings::Config;
