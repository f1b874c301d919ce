//! Round-details URL validator.
//!
//! Round-details links are served from a fixed set of regional hosts and carry
//! the game id in the `game` query parameter. When the mandatory parameters
//! are all well-formed, the game's provider is cross-checked against the
//! catalog.

use crate::config::{ROUND_DETAILS_DOMAINS, ROUND_DETAILS_MANDATORY_PARAMS, ROUND_DETAILS_REGION_HINTS};
use crate::reference::ReferenceData;

use super::common::{
    check_currency, check_protocol, check_required, check_structure, components, extract_payload,
    is_blank, parse,
};
use super::outcome::{OutcomeBuilder, ParsedUrlComponents, ValidationOutcome};

const GAME_PARAM: &str = "game";
const PROVIDER_PARAM: &str = "provider";

/// Validates a round-details URL.
pub fn validate_round_details(raw: &str, reference: &ReferenceData) -> ValidationOutcome {
    let raw = raw.trim();
    let mut outcome = OutcomeBuilder::default();

    check_protocol(raw, &mut outcome);
    check_structure(raw, false, &mut outcome);
    let Some(url) = parse(raw, &mut outcome) else {
        return outcome.finish(None);
    };

    let payload = extract_payload(&url);
    let game_id = payload.get(GAME_PARAM).unwrap_or_default().trim().to_string();
    if outcome.has_errors() && game_id.is_empty() {
        return outcome.finish(None);
    }
    let components = components(&url, game_id, payload);

    check_currency(&components.payload, reference, &mut outcome);
    check_domain(&components.host, &mut outcome);

    let before = outcome.error_count();
    check_required(
        &components.payload,
        ROUND_DETAILS_MANDATORY_PARAMS.iter().copied(),
        &mut outcome,
    );
    check_whitespace(&components, &mut outcome);
    if outcome.error_count() == before {
        check_provider(&components, reference, &mut outcome);
    }

    outcome.finish(Some(components))
}

fn check_domain(host: &str, outcome: &mut OutcomeBuilder) {
    if ROUND_DETAILS_DOMAINS.iter().any(|(_, domain)| *domain == host) {
        return;
    }

    let allowed: Vec<&str> = ROUND_DETAILS_DOMAINS.iter().map(|(_, d)| *d).collect();
    let mut message = format!(
        "Invalid round details domain '{host}'. Expected one of: {}",
        allowed.join(", ")
    );
    if let Some(suggestion) = suggest_domain(host) {
        message.push_str(&format!(". Did you mean {suggestion}?"));
    }
    outcome.error(message);
}

/// Allow-listed domain for the first region hint found in `host`.
fn suggest_domain(host: &str) -> Option<&'static str> {
    let (_, region) = ROUND_DETAILS_REGION_HINTS
        .iter()
        .find(|(hint, _)| host.contains(hint))?;
    ROUND_DETAILS_DOMAINS
        .iter()
        .find(|(label, _)| label == region)
        .map(|(_, domain)| *domain)
}

fn check_whitespace(components: &ParsedUrlComponents, outcome: &mut OutcomeBuilder) {
    for name in ROUND_DETAILS_MANDATORY_PARAMS {
        let Some(value) = components.payload.get(name) else {
            continue;
        };
        if !is_blank(value) && value.chars().any(char::is_whitespace) {
            outcome.error(format!("Parameter '{name}' must not contain whitespace"));
        }
    }
}

fn check_provider(
    components: &ParsedUrlComponents,
    reference: &ReferenceData,
    outcome: &mut OutcomeBuilder,
) {
    let provider = components.payload.get(PROVIDER_PARAM).unwrap_or_default();
    match reference.game(&components.game_id) {
        None => outcome.warning(format!(
            "Game '{}' is not in the catalog; provider '{provider}' was not verified",
            components.game_id
        )),
        Some(entry) if !entry.provider_id.eq_ignore_ascii_case(provider) => {
            outcome.error(format!(
                "Provider '{provider}' does not match game '{}' (expected '{}')",
                components.game_id, entry.provider_id
            ))
        }
        Some(_) => {}
    }
}
