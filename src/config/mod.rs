//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (host markers, endpoint defaults, timeouts)
//! - CLI option types and parsing
//! - The library-facing [`Config`] and its validation

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Command, Config, ConfigValidationError, LogFormat, LogLevel, Opt};
