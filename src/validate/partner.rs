//! Partner-integration launch URL validator.
//!
//! Partner platforms use their own parameter names and may send a numeric
//! game code instead of a catalog id. The game id is checked for presence only.

use crate::config::{
    PARTNER_DEMO_MODE, PARTNER_GAME_ID_PARAMS, PARTNER_MODE_PARAM, PARTNER_OPERATOR_PARAM,
    PARTNER_SESSION_PARAM, CURRENCY_PARAM, JURISDICTION_PARAM,
};
use crate::reference::ReferenceData;

use super::common::{
    check_currency, check_protocol, check_required, check_structure, components, extract_payload,
    is_blank, parse,
};
use super::outcome::{OutcomeBuilder, Payload, ValidationOutcome};

/// Validates a partner-integration launch URL.
pub fn validate_partner_integration(raw: &str, reference: &ReferenceData) -> ValidationOutcome {
    let raw = raw.trim();
    let mut outcome = OutcomeBuilder::default();

    check_protocol(raw, &mut outcome);
    check_structure(raw, false, &mut outcome);
    let Some(url) = parse(raw, &mut outcome) else {
        return outcome.finish(None);
    };

    let payload = extract_payload(&url);
    let game_id = partner_game_id(&payload, reference);
    if outcome.has_errors() && game_id.is_empty() {
        return outcome.finish(None);
    }
    let components = components(&url, game_id, payload);

    if components.game_id.is_empty() {
        outcome.error(format!(
            "Missing game id (expected one of: {})",
            PARTNER_GAME_ID_PARAMS.join(", ")
        ));
    }

    let demo = components
        .payload
        .get(PARTNER_MODE_PARAM)
        .is_some_and(|mode| mode.trim().eq_ignore_ascii_case(PARTNER_DEMO_MODE));
    let mut required = vec![PARTNER_OPERATOR_PARAM];
    if !demo {
        required.extend([CURRENCY_PARAM, PARTNER_SESSION_PARAM]);
    }
    check_required(&components.payload, required, &mut outcome);

    check_currency(&components.payload, reference, &mut outcome);
    check_jurisdiction(&components.payload, reference, &mut outcome);

    outcome.finish(Some(components))
}

/// First non-blank game id parameter, translated through the partner code
/// table when it is a known code.
fn partner_game_id(payload: &Payload, reference: &ReferenceData) -> String {
    let Some(value) = PARTNER_GAME_ID_PARAMS
        .iter()
        .filter_map(|name| payload.get(name))
        .map(str::trim)
        .find(|value| !value.is_empty())
    else {
        return String::new();
    };
    reference
        .translate_partner_code(value)
        .unwrap_or(value)
        .to_string()
}

fn check_jurisdiction(payload: &Payload, reference: &ReferenceData, outcome: &mut OutcomeBuilder) {
    let Some(jurisdiction) = payload.get(JURISDICTION_PARAM).filter(|j| !is_blank(j)) else {
        return;
    };
    if !reference.is_valid_jurisdiction(jurisdiction.trim()) {
        outcome.error(format!(
            "Invalid jurisdiction '{jurisdiction}'. Allowed: {}",
            reference.jurisdictions().join(", ")
        ));
    }
}
