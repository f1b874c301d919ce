//! Plain-text rendering of results for the CLI.

use std::collections::BTreeMap;
use std::fmt::Write;

use crate::availability::GameMatch;
use crate::operator::{EndpointProbe, OperatorConfigSnapshot};
use crate::validate::{Scheme, ValidationOutcome};

const NONE: &str = "-";

pub fn render_detection(scheme: Option<Scheme>) -> String {
    scheme.map_or_else(|| "unknown".to_string(), |s| s.to_string())
}

pub fn render_outcome(scheme: Scheme, outcome: &ValidationOutcome) -> String {
    let mut out = String::new();
    let verdict = if outcome.is_valid() { "VALID" } else { "INVALID" };
    let _ = writeln!(out, "{scheme}: {verdict}");

    if !outcome.errors.is_empty() {
        let _ = writeln!(out, "Errors ({}):", outcome.errors.len());
        for error in &outcome.errors {
            let _ = writeln!(out, "  - {error}");
        }
    }
    if !outcome.warnings.is_empty() {
        let _ = writeln!(out, "Warnings ({}):", outcome.warnings.len());
        for warning in &outcome.warnings {
            let _ = writeln!(out, "  - {warning}");
        }
    }

    match &outcome.components {
        Some(components) => {
            let game_id = if components.game_id.is_empty() {
                NONE
            } else {
                components.game_id.as_str()
            };
            let _ = writeln!(out, "Components:");
            let _ = writeln!(out, "  protocol: {}", components.protocol);
            let _ = writeln!(out, "  host:     {}", components.host);
            let _ = writeln!(out, "  gameId:   {game_id}");
            let _ = writeln!(out, "  payload:");
            for (key, value) in components.payload.iter() {
                let _ = writeln!(out, "    {key} = {value}");
            }
        }
        None => {
            let _ = writeln!(out, "Components: unavailable");
        }
    }
    out
}

pub fn render_snapshot(snapshot: &OperatorConfigSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Operator {}", snapshot.operator_key);
    for (environment, probes) in &snapshot.environments {
        let _ = writeln!(
            out,
            "{environment} ({}/{} active)",
            snapshot.active_count(*environment),
            probes.len()
        );
        for probe in probes {
            render_probe(&mut out, probe);
        }
    }
    out
}

fn render_probe(out: &mut String, probe: &EndpointProbe) {
    let _ = writeln!(
        out,
        "  {:<12} {:<8} host={} zone={} region={}",
        probe.category,
        probe.status,
        probe.host.as_deref().unwrap_or(NONE),
        probe.zone.as_deref().unwrap_or(NONE),
        probe.region
    );
    if !probe.available_games.is_empty() {
        let _ = writeln!(out, "    available:   {}", probe.available_games.join(", "));
    }
    if !probe.unavailable_games.is_empty() {
        let _ = writeln!(out, "    unavailable: {}", probe.unavailable_games.join(", "));
    }
}

pub fn render_game_matches(certificate: &str, matches: &[GameMatch]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} game(s) for certificate {certificate}:", matches.len());
    for game in matches {
        let _ = writeln!(out, "  {} ({})", game.game, game.kind);
    }
    out
}

pub fn render_game_certificates(
    game: &str,
    certificates: &[String],
    attributes: Option<&BTreeMap<String, String>>,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} certificate(s) for {game}:", certificates.len());
    for certificate in certificates {
        let _ = writeln!(out, "  {certificate}");
    }
    if let Some(attributes) = attributes.filter(|a| !a.is_empty()) {
        let _ = writeln!(out, "Attributes:");
        for (name, value) in attributes {
            let _ = writeln!(out, "  {name}: {value}");
        }
    }
    out
}

pub fn render_certificate_list(game_count: usize, certificates: &[String]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{game_count} game(s), {} certificate(s):",
        certificates.len()
    );
    for certificate in certificates {
        let _ = writeln!(out, "  {certificate}");
    }
    out
}
