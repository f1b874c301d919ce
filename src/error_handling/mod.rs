//! Error handling.
//!
//! This module provides:
//! - Error type definitions for setup, reference loading, certification
//!   datasets and operator resolution
//! - Categorization of transport failures for probe logging
//!
//! Validation findings are deliberately absent: they are data, returned in a
//! [`crate::validate::ValidationOutcome`].

mod categorization;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, categorize_status};
pub use types::{
    CertificationError, InitializationError, ProbeFailure, ReferenceError, ResolveError,
};
