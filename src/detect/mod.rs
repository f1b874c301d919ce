//! Launch URL scheme detection.
//!
//! Classifies a raw URL by host before any scheme-specific parsing. Markers are
//! checked in a fixed priority order: round-details hosts can also carry the
//! stage or production domain, so they must be recognised first.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::config::{
    CLICK_MIRROR_PATTERN, PROD_DOMAIN, REDIRECTOR_DOMAIN, ROUND_DETAILS_MARKER,
    STAGE_DOMAIN_MARKER,
};
use crate::validate::Scheme;

static CLICK_MIRROR: LazyLock<Option<Regex>> = LazyLock::new(|| compile(CLICK_MIRROR_PATTERN));

static CLICK_MIRROR_EXACT: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile(&format!("^{CLICK_MIRROR_PATTERN}$")));

fn compile(pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(regex) => Some(regex),
        Err(e) => {
            log::error!("Invalid host pattern {pattern}: {e}");
            None
        }
    }
}

/// Returns true if `host` belongs to the production launch family: the primary
/// domain, the redirector, or a numeric `.click` mirror.
///
/// `host` is expected to be lower-cased already.
pub fn is_production_host(host: &str) -> bool {
    host.contains(PROD_DOMAIN)
        || host.contains(REDIRECTOR_DOMAIN)
        || CLICK_MIRROR
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(host))
}

/// Returns true if `domain` is exactly one of the production launch domains
/// (case-insensitive). Used by the production prefix gate, which is stricter
/// than detection.
pub fn is_production_domain(domain: &str) -> bool {
    let domain = domain.to_lowercase();
    domain == PROD_DOMAIN
        || domain == REDIRECTOR_DOMAIN
        || CLICK_MIRROR_EXACT
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(&domain))
}

/// Detects which launch scheme a raw URL belongs to.
///
/// Returns `None` if the string is not a URL or its host matches no marker.
/// Partner-integration and generic URLs are never detected; callers pick
/// those schemes explicitly.
///
/// # Examples
///
/// ```
/// use launch_inspector::detect::detect_scheme;
/// use launch_inspector::validate::Scheme;
///
/// assert_eq!(
///     detect_scheme("https://launch.spribegaming.com/aviator?user=u"),
///     Some(Scheme::ProdLaunch)
/// );
/// assert_eq!(detect_scheme("not a url"), None);
/// ```
pub fn detect_scheme(raw: &str) -> Option<Scheme> {
    let parsed = Url::parse(raw.trim()).ok()?;
    let host = parsed.host_str()?.to_lowercase();

    if host.contains(ROUND_DETAILS_MARKER) {
        Some(Scheme::RoundDetails)
    } else if host.contains(STAGE_DOMAIN_MARKER) {
        Some(Scheme::StageLaunch)
    } else if is_production_host(&host) {
        Some(Scheme::ProdLaunch)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
