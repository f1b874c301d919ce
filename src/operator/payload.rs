//! Reading host, zone and game keys out of config payloads.
//!
//! Three payload shapes are recognised:
//! `{"games": {"<id>": {"host", "zone"}}}`, `{"servers": [{"host", "zone"}]}`
//! and `{"ws": {"host", "zone"}}`. Anything else yields no endpoint.

use serde_json::{Map, Value};

/// Host and zone of a config payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct EndpointLocation {
    pub(crate) host: Option<String>,
    pub(crate) zone: Option<String>,
}

/// Looks for an endpoint in `games`, then `servers[0]`, then `ws`.
///
/// Within `games` the entry named `primary_key` is preferred, else the first
/// entry in document order.
pub(crate) fn extract_location(payload: &Value, primary_key: Option<&str>) -> EndpointLocation {
    games_entry(payload, primary_key)
        .or_else(|| payload.get("servers").and_then(|s| s.get(0)))
        .or_else(|| payload.get("ws"))
        .map(location_of)
        .unwrap_or_default()
}

fn games_entry<'a>(payload: &'a Value, primary_key: Option<&str>) -> Option<&'a Value> {
    let games = payload.get("games")?.as_object()?;
    primary_key
        .and_then(|key| games.get(key))
        .or_else(|| games.values().next())
}

fn location_of(entry: &Value) -> EndpointLocation {
    EndpointLocation {
        host: string_field(entry, "host"),
        zone: string_field(entry, "zone"),
    }
}

fn string_field(entry: &Value, name: &str) -> Option<String> {
    match entry.get(name)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Sorted keys of the payload's `games` map; empty if there is none.
pub(crate) fn game_keys(payload: &Value) -> Vec<String> {
    let mut keys: Vec<String> = payload
        .get("games")
        .and_then(Value::as_object)
        .map(Map::keys)
        .into_iter()
        .flatten()
        .cloned()
        .collect();
    keys.sort();
    keys
}
