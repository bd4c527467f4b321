//! Shared CLI output helpers for consistent operator-facing text.

use std::fmt::Display;

use serde::Serialize;

use crate::error::Result;

const RULE_WIDTH: usize = 48;

/// Print a section header and separator.
pub fn section(title: &str) {
    println!();
    println!("{title}");
    println!("{}", "─".repeat(RULE_WIDTH));
}

/// Print a simple key/value line.
pub fn field(label: &str, value: impl Display) {
    println!("  {label:<14} {value}");
}

/// Print a successful status line.
pub fn success(message: &str) {
    println!("✓ {message}");
}

/// Print a value as a single compact JSON line on stdout.
pub fn json_line<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}
