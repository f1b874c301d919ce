//! launch_inspector library: launch URL validation and operator config resolution
//!
//! The library has three independent entry points:
//!
//! - [`validate`]: per-scheme launch URL validators, with [`detect`] choosing
//!   a scheme from the host
//! - [`operator`]: concurrent resolution of an operator's runtime config
//!   across environments and game categories
//! - [`availability`]: certificate/game queries over a certification dataset
//!
//! All of them read the immutable [`reference::ReferenceData`] tables.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use launch_inspector::initialization::{init_client, init_reference};
//! use launch_inspector::operator::OperatorConfigResolver;
//! use launch_inspector::validate::validate_detected;
//! use launch_inspector::Config;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let reference = init_reference(&config)?;
//!
//! if let Some((scheme, outcome)) = validate_detected(
//!     "https://launch.spribegaming.com/aviator?user=u1&token=t1&currency=USD&operator=op1",
//!     &reference,
//! ) {
//!     println!("{scheme}: {} error(s)", outcome.errors.len());
//! }
//!
//! let resolver = OperatorConfigResolver::new(init_client(&config)?, &config, Arc::clone(&reference))?;
//! let snapshot = resolver.resolve("my-operator").await?;
//! println!("{} environment(s) active", snapshot.environments.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! The operator resolver and remote dataset loading need a Tokio runtime.
//! Validation and detection are synchronous.

pub mod app;
pub mod availability;
pub mod config;
pub mod detect;
pub mod error_handling;
pub mod initialization;
pub mod operator;
pub mod reference;
pub mod validate;

// Re-export public API
pub use app::{run_command, CommandReport};
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{CertificationError, InitializationError, ReferenceError, ResolveError};
