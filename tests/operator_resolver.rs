//! Integration tests for the operator configuration resolver.
//!
//! A single mock server stands in for both environments: production config
//! lives under `/prod`, stage config under `/stage`. Unmatched requests get
//! wiremock's default 404.

use std::sync::Arc;
use std::time::{Duration, Instant};

use launch_inspector::config::Command;
use launch_inspector::initialization::init_client;
use launch_inspector::operator::{Environment, OperatorConfigResolver, ProbeStatus, Region};
use launch_inspector::reference::{GameCategory, ReferenceData};
use launch_inspector::{run_command, Config, LogFormat, LogLevel, ResolveError};
use serde_json::json;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_test_config(server: &MockServer, timeout_seconds: u64) -> Config {
    Config {
        log_level: LogLevel::Error,
        log_format: LogFormat::Plain,
        timeout_seconds,
        user_agent: "launch_inspector_test/1.0".to_string(),
        reference_path: None,
        prod_config_base: format!("{}/prod", server.uri()),
        stage_config_base: format!("{}/stage", server.uri()),
    }
}

fn resolver(config: &Config) -> OperatorConfigResolver {
    let client = init_client(config).expect("Failed to build client");
    OperatorConfigResolver::new(client, config, Arc::new(ReferenceData::builtin()))
        .expect("Failed to build resolver")
}

async fn mount_json(server: &MockServer, route: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_all_probes_disabled_is_operator_not_found() {
    let server = MockServer::start().await;
    let config = create_test_config(&server, 5);

    let err = resolver(&config).resolve("ghost").await.unwrap_err();
    assert_eq!(err, ResolveError::OperatorNotFound("ghost".to_string()));

    // every matrix cell was still probed
    let requests = server.received_requests().await.unwrap_or_default();
    assert_eq!(requests.len(), 8);
    assert!(requests
        .iter()
        .all(|r| r.url.query_pairs().any(|(k, _)| k == "t")));
}

#[tokio::test]
async fn test_single_active_probe_keeps_only_its_environment() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/prod/aviator/op1.json",
        json!({"games": {"aviator": {"host": "aviator-eu-central-1.spribegaming.com", "zone": "eu1"}}}),
    )
    .await;
    let config = create_test_config(&server, 5);

    let snapshot = resolver(&config).resolve("op1").await.unwrap();
    assert_eq!(snapshot.operator_key, "op1");
    assert_eq!(snapshot.environments.len(), 1);
    assert!(snapshot.probes(Environment::Stage).is_empty());

    let probes = snapshot.probes(Environment::Production);
    assert_eq!(probes.len(), 4);
    assert_eq!(snapshot.active_count(Environment::Production), 1);

    let aviator = &probes[0];
    assert_eq!(aviator.category, "aviator");
    assert_eq!(aviator.status, ProbeStatus::Active);
    assert_eq!(aviator.host.as_deref(), Some("aviator-eu-central-1.spribegaming.com"));
    assert_eq!(aviator.zone.as_deref(), Some("eu1"));
    assert_eq!(aviator.region, Region::Eu);

    let turbo = probes.iter().find(|p| p.category == "turbo").unwrap();
    assert_eq!(turbo.status, ProbeStatus::Disabled);
    assert!(turbo.available_games.is_empty());
    assert_eq!(
        turbo.unavailable_games,
        ReferenceData::builtin().master_list(GameCategory::Turbo)
    );
    assert_eq!(turbo.region, Region::Unknown);
}

#[tokio::test]
async fn test_per_game_availability_from_stage() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/stage/turbo/op2.json",
        json!({"games": {
            "mines": {"host": "turbo.staging.spribe.dev", "zone": "s1"},
            "dice": {"host": "turbo.staging.spribe.dev", "zone": "s1"}
        }}),
    )
    .await;
    mount_json(
        &server,
        "/stage/multiplayer/op2.json",
        json!({"ws": {"host": "mp.dev-test.internal", "zone": "mp"}}),
    )
    .await;
    let config = create_test_config(&server, 5);

    let snapshot = resolver(&config).resolve("op2").await.unwrap();
    assert_eq!(
        snapshot.environments.keys().copied().collect::<Vec<_>>(),
        vec![Environment::Stage]
    );

    let probes = snapshot.probes(Environment::Stage);
    let turbo = probes.iter().find(|p| p.category == "turbo").unwrap();
    assert_eq!(turbo.available_games, vec!["dice", "mines"]);
    assert!(!turbo.unavailable_games.contains(&"mines".to_string()));
    assert_eq!(turbo.host.as_deref(), Some("turbo.staging.spribe.dev"));
    assert_eq!(turbo.region, Region::Stage);

    let multiplayer = probes.iter().find(|p| p.category == "multiplayer").unwrap();
    assert!(multiplayer.is_active());
    assert_eq!(multiplayer.region, Region::Stage);
    assert!(multiplayer.available_games.is_empty());
    assert!(multiplayer.unavailable_games.is_empty());
}

#[tokio::test]
async fn test_failures_are_isolated_per_probe() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/prod/slots/op3.json",
        json!({"servers": [{"host": "slots.games.example", "zone": "x"}]}),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/prod/aviator/op3.json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/prod/turbo/op3.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/prod/multiplayer/op3.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"ws": {"host": "late.example"}}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;
    let config = create_test_config(&server, 1);

    let snapshot = resolver(&config).resolve("op3").await.unwrap();
    let probes = snapshot.probes(Environment::Production);
    let status_of = |category: &str| {
        probes
            .iter()
            .find(|p| p.category == category)
            .map(|p| p.status)
            .unwrap()
    };
    assert_eq!(status_of("slots"), ProbeStatus::Active);
    assert_eq!(status_of("aviator"), ProbeStatus::Disabled);
    assert_eq!(status_of("turbo"), ProbeStatus::Disabled);
    assert_eq!(status_of("multiplayer"), ProbeStatus::Disabled);

    let slots = probes.iter().find(|p| p.category == "slots").unwrap();
    assert_eq!(slots.region, Region::Custom);
    assert!(slots.available_games.is_empty());
    assert_eq!(
        slots.unavailable_games,
        ReferenceData::builtin().master_list(GameCategory::Slots)
    );
}

#[tokio::test]
async fn test_snapshot_serializes_for_json_output() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/prod/aviator/op4.json",
        json!({"games": {"aviator": {"host": "apac.spribegaming.com"}}}),
    )
    .await;
    let config = create_test_config(&server, 5);

    let report = run_command(
        &config,
        &Command::Resolve {
            operator: "op4".to_string(),
            json: true,
        },
    )
    .await
    .unwrap();
    assert!(report.success);

    let value: serde_json::Value = serde_json::from_str(&report.output).unwrap();
    let production = &value["environments"]["Production"];
    assert_eq!(production[0]["status"], "active");
    assert_eq!(production[0]["region"], "APAC");
    assert_eq!(production[0]["rawPayload"]["games"]["aviator"]["host"], "apac.spribegaming.com");
    assert_eq!(production[1]["status"], "disabled");
    assert!(value["environments"].get("Stage").is_none());
}

#[tokio::test]
async fn test_resolve_command_reports_unknown_operator() {
    let server = MockServer::start().await;
    let config = create_test_config(&server, 5);

    let report = run_command(
        &config,
        &Command::Resolve {
            operator: "ghost".to_string(),
            json: false,
        },
    )
    .await
    .unwrap();
    assert!(!report.success);
    assert_eq!(report.output, "operator 'ghost' not found in any environment");
}

/// Every endpoint answers after the same delay. Issuing all probes before
/// awaiting any keeps the run close to one delay instead of eight.
#[tokio::test]
async fn test_probes_run_concurrently() {
    let server = MockServer::start().await;
    let delay = Duration::from_millis(800);
    Mock::given(method("GET"))
        .and(path_regex(r"^/(prod|stage)/[a-z]+/op6\.json$"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"ws": {"host": "ws.eu-central-1.example"}}))
                .set_delay(delay),
        )
        .mount(&server)
        .await;
    let config = create_test_config(&server, 10);
    let resolver = resolver(&config);

    let start = Instant::now();
    let snapshot = resolver.resolve("op6").await.unwrap();
    let elapsed = start.elapsed();

    assert_eq!(server.received_requests().await.unwrap_or_default().len(), 8);
    assert_eq!(snapshot.active_count(Environment::Production), 4);
    assert_eq!(snapshot.active_count(Environment::Stage), 4);
    assert!(
        elapsed < delay * 3,
        "8 delayed probes took {elapsed:?}; expected roughly one delay of {delay:?}"
    );
}
