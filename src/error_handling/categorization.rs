//! Probe failure categorization.
//!
//! A failed probe is always reported as `disabled`; this only decides which
//! label the debug log carries.

use reqwest::StatusCode;

use super::types::ProbeFailure;

/// Categorizes a non-success HTTP status.
pub fn categorize_status(status: StatusCode) -> ProbeFailure {
    if status == StatusCode::NOT_FOUND {
        ProbeFailure::NotFound
    } else {
        ProbeFailure::HttpStatus
    }
}

/// Categorizes a `reqwest::Error` into a [`ProbeFailure`].
///
/// Status codes are checked first, then the reqwest error kind.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ProbeFailure {
    if let Some(status) = error.status() {
        return categorize_status(status);
    }

    if error.is_timeout() {
        ProbeFailure::Timeout
    } else if error.is_connect() {
        ProbeFailure::Connect
    } else if error.is_decode() {
        ProbeFailure::Decode
    } else {
        ProbeFailure::Other
    }
}
