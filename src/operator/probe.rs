//! A single config endpoint probe.

use serde_json::Value;
use url::Url;

use crate::error_handling::{categorize_reqwest_error, categorize_status, ProbeFailure};
use crate::reference::ReferenceData;

use super::payload::{extract_location, game_keys};
use super::region::infer_region;
use super::{CategoryLayout, ConfigCategory, EndpointProbe, Environment, ProbeStatus};

/// Fetches `url` and decodes the body as JSON.
///
/// Never fails the caller: every failure becomes a [`ProbeFailure`] that the
/// probe reports as disabled.
pub(crate) async fn fetch_payload(client: &reqwest::Client, url: Url) -> Result<Value, ProbeFailure> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| categorize_reqwest_error(&e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(categorize_status(status));
    }

    response
        .json::<Value>()
        .await
        .map_err(|e| categorize_reqwest_error(&e))
}

/// Builds the probe record from a fetched payload, or from the failure.
pub(crate) fn build_probe(
    environment: Environment,
    category: &ConfigCategory,
    fetched: Result<Value, ProbeFailure>,
    reference: &ReferenceData,
) -> EndpointProbe {
    let (status, payload) = match fetched {
        Ok(payload) => (ProbeStatus::Active, Some(payload)),
        Err(failure) => {
            log::debug!(
                "{environment}/{} disabled: {failure}",
                category.name
            );
            (ProbeStatus::Disabled, None)
        }
    };

    let location = payload
        .as_ref()
        .map(|p| extract_location(p, category.primary_key()))
        .unwrap_or_default();
    let region = infer_region(location.host.as_deref());

    let (available_games, unavailable_games) = match category.layout {
        CategoryLayout::PerGame(game_category) => {
            let available = payload.as_ref().map(game_keys).unwrap_or_default();
            let unavailable = reference
                .master_list(game_category)
                .into_iter()
                .filter(|id| !available.contains(id))
                .collect();
            (available, unavailable)
        }
        CategoryLayout::SingleGame { .. } => (Vec::new(), Vec::new()),
    };

    EndpointProbe {
        environment,
        category: category.name.to_string(),
        status,
        host: location.host,
        zone: location.zone,
        region,
        raw_payload: payload,
        available_games,
        unavailable_games,
    }
}
