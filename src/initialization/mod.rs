//! Shared resource setup: logger, HTTP client and reference tables.

mod client;
mod logger;

use std::sync::Arc;

use crate::config::Config;
use crate::error_handling::InitializationError;
use crate::reference::ReferenceData;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;

/// Loads the reference tables named by `config.reference_path`, or the
/// bundled tables when none is set.
///
/// # Errors
///
/// Returns `InitializationError::ReferenceError` if the override file cannot
/// be read or parsed.
pub fn init_reference(config: &Config) -> Result<Arc<ReferenceData>, InitializationError> {
    let reference = match &config.reference_path {
        Some(path) => {
            log::info!("Loading reference tables from {}", path.display());
            ReferenceData::from_json_file(path)?
        }
        None => ReferenceData::builtin(),
    };
    Ok(Arc::new(reference))
}
