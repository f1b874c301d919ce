use super::probe::build_probe;
use super::*;
use crate::config::Config;
use crate::error_handling::ProbeFailure;
use crate::reference::ReferenceData;
use serde_json::json;
use std::sync::Arc;

fn category(name: &str) -> &'static ConfigCategory {
    CONFIG_CATEGORIES
        .iter()
        .find(|c| c.name == name)
        .unwrap()
}

#[test]
fn test_active_single_game_probe() {
    let reference = ReferenceData::builtin();
    let payload = json!({"games": {"aviator": {"host": "aviator-eu-central-1.spribegaming.com", "zone": "eu1"}}});
    let probe = build_probe(
        Environment::Production,
        category("aviator"),
        Ok(payload.clone()),
        &reference,
    );
    assert!(probe.is_active());
    assert_eq!(probe.host.as_deref(), Some("aviator-eu-central-1.spribegaming.com"));
    assert_eq!(probe.zone.as_deref(), Some("eu1"));
    assert_eq!(probe.region, Region::Eu);
    assert_eq!(probe.raw_payload, Some(payload));
    assert!(probe.available_games.is_empty());
    assert!(probe.unavailable_games.is_empty());
}

#[test]
fn test_per_game_probe_splits_master_list() {
    let reference = ReferenceData::builtin();
    let payload = json!({"games": {"mines": {"host": "apac.example"}, "dice": {"host": "apac.example"}}});
    let probe = build_probe(Environment::Stage, category("turbo"), Ok(payload), &reference);
    assert_eq!(probe.available_games, vec!["dice", "mines"]);
    assert!(!probe.unavailable_games.contains(&"dice".to_string()));
    assert!(probe.unavailable_games.contains(&"plinko".to_string()));
    assert_eq!(
        probe.available_games.len() + probe.unavailable_games.len(),
        reference.master_list(crate::reference::GameCategory::Turbo).len()
    );
    let mut sorted = probe.unavailable_games.clone();
    sorted.sort();
    assert_eq!(sorted, probe.unavailable_games);
}

#[test]
fn test_disabled_per_game_probe_lists_whole_master_list() {
    let reference = ReferenceData::builtin();
    let probe = build_probe(
        Environment::Production,
        category("slots"),
        Err(ProbeFailure::NotFound),
        &reference,
    );
    assert_eq!(probe.status, ProbeStatus::Disabled);
    assert!(probe.available_games.is_empty());
    assert_eq!(
        probe.unavailable_games,
        reference.master_list(crate::reference::GameCategory::Slots)
    );
    assert_eq!(probe.host, None);
    assert_eq!(probe.region, Region::Unknown);
}

#[test]
fn test_disabled_single_game_probe_has_no_game_lists() {
    let reference = ReferenceData::builtin();
    let probe = build_probe(
        Environment::Stage,
        category("multiplayer"),
        Err(ProbeFailure::Timeout),
        &reference,
    );
    assert!(!probe.is_active());
    assert!(probe.available_games.is_empty());
    assert!(probe.unavailable_games.is_empty());
    assert!(probe.raw_payload.is_none());
}

#[test]
fn test_endpoint_url_shape() {
    let config = Config {
        prod_config_base: "https://config.example.com/v2/".to_string(),
        ..Default::default()
    };
    let resolver = OperatorConfigResolver::new(
        reqwest::Client::new(),
        &config,
        Arc::new(ReferenceData::builtin()),
    )
    .unwrap();
    let url = resolver.endpoint_url(Environment::Production, category("turbo"), "op-1");
    assert_eq!(url.path(), "/v2/turbo/op-1.json");
    let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].0, "t");
    assert!(pairs[0].1.parse::<i64>().is_ok());

    let stage = resolver.endpoint_url(Environment::Stage, category("aviator"), "op-1");
    assert_eq!(stage.host_str(), Some("config.staging.spribe.dev"));
    assert_eq!(stage.path(), "/aviator/op-1.json");
}

#[test]
fn test_invalid_base_rejected() {
    let config = Config {
        stage_config_base: "mailto:ops@example.com".to_string(),
        ..Default::default()
    };
    let err = OperatorConfigResolver::new(
        reqwest::Client::new(),
        &config,
        Arc::new(ReferenceData::builtin()),
    )
    .unwrap_err();
    assert!(matches!(err, crate::error_handling::ResolveError::InvalidEndpoint { .. }));
}

#[tokio::test]
async fn test_blank_operator_key() {
    let resolver = OperatorConfigResolver::new(
        reqwest::Client::new(),
        &Config::default(),
        Arc::new(ReferenceData::builtin()),
    )
    .unwrap();
    assert_eq!(
        resolver.resolve("   ").await.unwrap_err(),
        crate::error_handling::ResolveError::BlankOperatorKey
    );
}

#[test]
fn test_category_primary_keys() {
    assert_eq!(category("aviator").primary_key(), Some("aviator"));
    assert_eq!(category("turbo").primary_key(), None);
    assert_eq!(category("multiplayer").primary_key(), None);
}

#[test]
fn test_status_and_environment_labels() {
    assert_eq!(ProbeStatus::Active.to_string(), "active");
    assert_eq!(Environment::Production.to_string(), "Production");
    let value = serde_json::to_value(ProbeStatus::Disabled).unwrap();
    assert_eq!(value, "disabled");
}
