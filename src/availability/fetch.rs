//! Loading certification datasets from a file or URL.

use crate::error_handling::{categorize_reqwest_error, categorize_status, CertificationError};

use super::CertificationIndex;

/// Loads a certification dataset from `source`, an `http(s)` URL or a local
/// path.
///
/// A remote source that cannot be fetched, or answers with a non-2xx status,
/// yields an empty index and a warning. Local read errors and malformed
/// datasets are returned as errors.
pub async fn load_certifications(
    client: &reqwest::Client,
    source: &str,
) -> Result<CertificationIndex, CertificationError> {
    let source = source.trim();
    let lower = source.to_ascii_lowercase();
    let text = if lower.starts_with("http://") || lower.starts_with("https://") {
        match fetch_text(client, source).await {
            Some(text) => text,
            None => return Ok(CertificationIndex::default()),
        }
    } else {
        tokio::fs::read_to_string(source).await?
    };

    let index = CertificationIndex::from_csv(&text)?;
    log::info!(
        "Loaded {} games and {} certificates from {source}",
        index.game_count(),
        index.certificates().len()
    );
    Ok(index)
}

async fn fetch_text(client: &reqwest::Client, url: &str) -> Option<String> {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => {
            log::warn!(
                "Failed to fetch certification dataset {url}: {}",
                categorize_reqwest_error(&e)
            );
            return None;
        }
    };

    let status = response.status();
    if !status.is_success() {
        log::warn!(
            "Certification dataset {url} answered {status}: {}",
            categorize_status(status)
        );
        return None;
    }

    match response.text().await {
        Ok(text) => Some(text),
        Err(e) => {
            log::warn!(
                "Failed to read certification dataset {url}: {}",
                categorize_reqwest_error(&e)
            );
            None
        }
    }
}
