//! Validation steps shared by every scheme.
//!
//! Each step appends to the caller's [`OutcomeBuilder`]; none of them aborts
//! the run on its own. Early exits are decided by the scheme validators.

use url::Url;

use crate::config::CURRENCY_PARAM;
use crate::reference::ReferenceData;

use super::outcome::{OutcomeBuilder, ParsedUrlComponents, Payload};

pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Records an error unless `raw` starts with `http://` or `https://`
/// (case-insensitive).
pub(crate) fn check_protocol(raw: &str, outcome: &mut OutcomeBuilder) {
    let lower = raw.to_ascii_lowercase();
    if !lower.starts_with("http://") && !lower.starts_with("https://") {
        outcome.error("URL must start with http:// or https://");
    }
}

/// Non-fatal smells in the raw string.
///
/// `path_game_id` enables the trailing-slash-before-query check, which only
/// matters for schemes that read the game id from the path.
pub(crate) fn check_structure(raw: &str, path_game_id: bool, outcome: &mut OutcomeBuilder) {
    let after_protocol = raw.find("://").map_or(raw, |index| &raw[index + 3..]);
    if after_protocol.contains("//") {
        outcome.error("URL contains a double slash '//' after the protocol");
    }

    if raw.contains("&&") {
        outcome.error("URL contains an empty parameter '&&'");
    }

    if path_game_id {
        if let Some((before_query, _)) = raw.split_once('?') {
            if before_query.ends_with('/') {
                outcome.error("URL path must not end with '/' before the query string");
            }
        }
    }
}

/// Parses `raw`, recording "Invalid URL format" on failure unless an earlier
/// step already explained what is wrong.
pub(crate) fn parse(raw: &str, outcome: &mut OutcomeBuilder) -> Option<Url> {
    match Url::parse(raw) {
        Ok(url) => Some(url),
        Err(e) => {
            log::trace!("Failed to parse {raw}: {e}");
            if !outcome.has_errors() {
                outcome.error("Invalid URL format");
            }
            None
        }
    }
}

/// Decoded query pairs, in order, without empty keys.
pub(crate) fn extract_payload(url: &Url) -> Payload {
    url.query_pairs()
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect()
}

pub(crate) fn components(url: &Url, game_id: String, payload: Payload) -> ParsedUrlComponents {
    ParsedUrlComponents {
        protocol: url.scheme().to_string(),
        host: url.host_str().unwrap_or_default().to_lowercase(),
        game_id,
        payload,
    }
}

/// First non-empty path segment.
pub(crate) fn path_game_id(url: &Url) -> String {
    url.path_segments()
        .and_then(|mut segments| segments.find(|segment| !segment.is_empty()))
        .unwrap_or_default()
        .to_string()
}

/// First label of the host.
pub(crate) fn subdomain_game_id(url: &Url) -> String {
    url.host_str()
        .and_then(|host| host.split('.').next())
        .unwrap_or_default()
        .to_lowercase()
}

/// Reports every payload key outside the required and optional name sets,
/// together in one error.
pub(crate) fn check_unknown_params(
    payload: &Payload,
    reference: &ReferenceData,
    outcome: &mut OutcomeBuilder,
) {
    let unknown: Vec<&str> = payload
        .keys()
        .filter(|key| !reference.is_known_param(key))
        .collect();
    if !unknown.is_empty() {
        outcome.error(format!("Unknown parameters: {}", unknown.join(", ")));
    }
}

pub(crate) fn check_game_id(game_id: &str, reference: &ReferenceData, outcome: &mut OutcomeBuilder) {
    if is_blank(game_id) {
        outcome.error("Missing game id");
    } else if !reference.is_valid_game_id(game_id) {
        outcome.error(format!("Unknown game id '{game_id}'"));
    }
}

/// Records one error per name that is absent or blank.
pub(crate) fn check_required<'a>(
    payload: &Payload,
    names: impl IntoIterator<Item = &'a str>,
    outcome: &mut OutcomeBuilder,
) {
    for name in names {
        if payload.get(name).is_none_or(is_blank) {
            outcome.error(format!("Missing required parameter '{name}'"));
        }
    }
}

/// Required parameter values must not contain `/`.
pub(crate) fn check_required_slashes(
    payload: &Payload,
    reference: &ReferenceData,
    outcome: &mut OutcomeBuilder,
) {
    for name in reference.required_params() {
        if payload.get(name).is_some_and(|value| value.contains('/')) {
            outcome.error(format!("Parameter '{name}' must not contain '/'"));
        }
    }
}

pub(crate) fn check_currency(payload: &Payload, reference: &ReferenceData, outcome: &mut OutcomeBuilder) {
    if let Some(currency) = payload.get(CURRENCY_PARAM).filter(|c| !is_blank(c)) {
        if !reference.is_valid_currency(currency.trim()) {
            outcome.error(format!("Invalid currency '{currency}'"));
        }
    }
}
