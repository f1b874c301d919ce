//! Integration tests for certification dataset loading.

use std::io::Write;

use launch_inspector::availability::{load_certifications, MatchKind};
use launch_inspector::config::Command;
use launch_inspector::{run_command, CertificationError, Config};
use tempfile::NamedTempFile;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const DATASET: &str = "Game Name,Certificates,Provider\r\n\
aviator,\"MT; UK\",spribe\r\n\
mines,\"RO\nSE\",spribe\r\n\
dice,-,spribe\r\n";

fn write_dataset(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes()).expect("Failed to write dataset");
    file.flush().expect("Failed to flush file");
    file
}

#[tokio::test]
async fn test_load_from_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/certs.csv"))
        .respond_with(ResponseTemplate::new(200).set_body_string(DATASET))
        .mount(&server)
        .await;

    let client = reqwest::Client::new();
    let index = load_certifications(&client, &format!("{}/certs.csv", server.uri()))
        .await
        .unwrap();
    assert_eq!(index.game_count(), 3);
    assert_eq!(index.certificates_for_game("mines"), vec!["RO", "SE"]);

    let all = index.games_for_certificate("Curacao");
    assert_eq!(all.len(), 3);
    assert!(all.iter().all(|m| m.kind == MatchKind::AllAllowed));
}

#[tokio::test]
async fn test_unreachable_url_yields_empty_index() {
    let server = MockServer::start().await;
    let client = reqwest::Client::new();

    // unmatched path answers 404
    let index = load_certifications(&client, &format!("{}/missing.csv", server.uri()))
        .await
        .unwrap();
    assert!(index.is_empty());
    assert_eq!(index.certificates(), vec!["Curacao"]);
}

#[tokio::test]
async fn test_load_from_file() {
    let file = write_dataset(DATASET);
    let client = reqwest::Client::new();
    let index = load_certifications(&client, &file.path().to_string_lossy())
        .await
        .unwrap();
    assert_eq!(index.certificates(), vec!["Curacao", "MT", "RO", "SE", "UK"]);
    let uk: Vec<String> = index
        .games_for_certificate("UK")
        .into_iter()
        .map(|m| m.game)
        .collect();
    assert_eq!(uk, vec!["aviator"]);
}

#[tokio::test]
async fn test_missing_file_is_an_error() {
    let client = reqwest::Client::new();
    let err = load_certifications(&client, "/nonexistent/certs.csv")
        .await
        .unwrap_err();
    assert!(matches!(err, CertificationError::Io(_)));
}

#[tokio::test]
async fn test_dataset_without_certificate_column_is_fatal() {
    let file = write_dataset("Game,Notes\naviator,x\n");
    let client = reqwest::Client::new();
    let err = load_certifications(&client, &file.path().to_string_lossy())
        .await
        .unwrap_err();
    assert!(matches!(err, CertificationError::MissingCertificateColumn));
}

#[tokio::test]
async fn test_certs_command_game_query() {
    let file = write_dataset(DATASET);
    let report = run_command(
        &Config::default(),
        &Command::Certs {
            source: file.path().to_string_lossy().into_owned(),
            certificate: None,
            game: Some("aviator".to_string()),
        },
    )
    .await
    .unwrap();
    assert!(report.success);
    assert!(report.output.starts_with("2 certificate(s) for aviator:"));
    assert!(report.output.contains("Provider: spribe"));
}

#[tokio::test]
async fn test_certs_command_lists_universe() {
    let file = write_dataset(DATASET);
    let report = run_command(
        &Config::default(),
        &Command::Certs {
            source: file.path().to_string_lossy().into_owned(),
            certificate: None,
            game: None,
        },
    )
    .await
    .unwrap();
    assert!(report.output.starts_with("3 game(s), 5 certificate(s):"));
}
