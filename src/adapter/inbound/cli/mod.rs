//! CLI module graph.

pub mod check;
pub mod command;
pub mod compute;
pub mod output;
pub mod run;

pub use command::{CheckCommand, Cli, Commands, ComputeArgs};
