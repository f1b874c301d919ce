//! Production, stage and generic launch URL validators.
//!
//! All three share one checklist and differ only in where the game id comes
//! from and whether a fixed prefix gate applies.

use crate::config::{PROD_LAUNCH_PREFIX, PROD_LAUNCH_SCHEME_AND_SUBDOMAIN};
use crate::detect::is_production_domain;
use crate::reference::ReferenceData;

use super::common::{
    check_currency, check_game_id, check_protocol, check_required, check_required_slashes,
    check_structure, check_unknown_params, components, extract_payload, parse, path_game_id,
    subdomain_game_id,
};
use super::outcome::{OutcomeBuilder, ValidationOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GameIdSource {
    PathSegment,
    Subdomain,
}

/// Validates a production launch URL.
///
/// The URL must start with `https://launch.` followed by a production-family
/// domain (the primary domain, the redirector, or a numeric `.click` mirror)
/// and a `/`, compared case-insensitively. Anything else is rejected without
/// components. The game id is the first path segment.
pub fn validate_prod_launch(raw: &str, reference: &ReferenceData) -> ValidationOutcome {
    let raw = raw.trim();
    if !has_production_launch_prefix(raw) {
        return ValidationOutcome::rejected(format!("URL must start with {PROD_LAUNCH_PREFIX}"));
    }
    validate_launch(raw, reference, GameIdSource::PathSegment)
}

/// Validates a stage launch URL. The game id is the first host label.
pub fn validate_stage_launch(raw: &str, reference: &ReferenceData) -> ValidationOutcome {
    validate_launch(raw.trim(), reference, GameIdSource::Subdomain)
}

/// Validates any http(s) launch URL with a path-based game id and no domain
/// gate, using the production parameter rules.
pub fn validate_generic_launch(raw: &str, reference: &ReferenceData) -> ValidationOutcome {
    validate_launch(raw.trim(), reference, GameIdSource::PathSegment)
}

/// Scheme and host compare case-insensitively; an explicit port is allowed.
fn has_production_launch_prefix(raw: &str) -> bool {
    let split = PROD_LAUNCH_SCHEME_AND_SUBDOMAIN.len();
    let Some(head) = raw.get(..split) else {
        return false;
    };
    if !head.eq_ignore_ascii_case(PROD_LAUNCH_SCHEME_AND_SUBDOMAIN) {
        return false;
    }
    raw[split..]
        .split_once('/')
        .map(|(authority, _)| authority.split_once(':').map_or(authority, |(host, _)| host))
        .is_some_and(is_production_domain)
}

fn validate_launch(raw: &str, reference: &ReferenceData, source: GameIdSource) -> ValidationOutcome {
    let mut outcome = OutcomeBuilder::default();

    check_protocol(raw, &mut outcome);
    check_structure(raw, source == GameIdSource::PathSegment, &mut outcome);
    let Some(url) = parse(raw, &mut outcome) else {
        return outcome.finish(None);
    };

    let payload = extract_payload(&url);
    let game_id = match source {
        GameIdSource::PathSegment => path_game_id(&url),
        GameIdSource::Subdomain => subdomain_game_id(&url),
    };
    if outcome.has_errors() && game_id.is_empty() {
        return outcome.finish(None);
    }
    let components = components(&url, game_id, payload);

    check_unknown_params(&components.payload, reference, &mut outcome);
    check_game_id(&components.game_id, reference, &mut outcome);
    check_required(
        &components.payload,
        reference.required_params().iter().map(String::as_str),
        &mut outcome,
    );
    check_required_slashes(&components.payload, reference, &mut outcome);
    check_currency(&components.payload, reference, &mut outcome);

    outcome.finish(Some(components))
}
