//! Error type definitions.
//!
//! Validation findings are not errors in this sense: they are returned inside
//! [`crate::validate::ValidationOutcome`]. The types here cover setup failures,
//! unusable input documents, and the one fatal resolver outcome.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// Error loading the reference tables.
    #[error("Reference data initialization error: {0}")]
    ReferenceError(#[from] ReferenceError),
}

/// Errors loading an override reference document.
#[derive(Error, Debug)]
pub enum ReferenceError {
    /// The document could not be read.
    #[error("failed to read reference data: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid reference JSON.
    #[error("failed to parse reference data: {0}")]
    Parse(#[from] serde_json::Error),

    /// A game id appears more than once in the catalog.
    #[error("duplicate game id '{0}' in catalog")]
    DuplicateGame(String),
}

/// Errors from the operator configuration resolver.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The operator key was empty or whitespace.
    #[error("operator key must not be blank")]
    BlankOperatorKey,

    /// No probe in any environment answered with an active config.
    #[error("operator '{0}' not found in any environment")]
    OperatorNotFound(String),

    /// A configured endpoint base cannot host probe URLs.
    #[error("invalid config endpoint base '{base}': {reason}")]
    InvalidEndpoint {
        /// The base URL as configured
        base: String,
        /// Why it was rejected
        reason: String,
    },
}

/// Errors building a certification index.
#[derive(Error, Debug)]
pub enum CertificationError {
    /// No header mentions "certificate"/"cert".
    #[error("no certificate column found in header row")]
    MissingCertificateColumn,

    /// The dataset has no header row at all.
    #[error("certification dataset is empty")]
    EmptyDataset,

    /// The CSV text could not be tokenised.
    #[error("failed to parse certification dataset: {0}")]
    Csv(#[from] csv::Error),

    /// A local dataset file could not be read.
    #[error("failed to read certification dataset: {0}")]
    Io(#[from] std::io::Error),
}

/// Why a config probe ended up disabled.
///
/// Callers only ever see `disabled`; the kind is kept for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ProbeFailure {
    /// 404 from the config endpoint (operator not set up for the category)
    NotFound,
    /// Any other non-2xx status
    HttpStatus,
    /// Request timed out
    Timeout,
    /// TCP/TLS connection could not be established
    Connect,
    /// 2xx response whose body is not JSON
    Decode,
    /// Anything else reqwest reports
    Other,
}

impl std::fmt::Display for ProbeFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ProbeFailure {
    /// Returns a human-readable string representation of the failure kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProbeFailure::NotFound => "Not Found (404)",
            ProbeFailure::HttpStatus => "HTTP status error",
            ProbeFailure::Timeout => "HTTP request timeout error",
            ProbeFailure::Connect => "HTTP request connect error",
            ProbeFailure::Decode => "Response body decode error",
            ProbeFailure::Other => "HTTP request other error",
        }
    }
}
