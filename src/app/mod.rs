//! Command execution for the CLI.
//!
//! Each subcommand runs against the library and produces a [`CommandReport`]:
//! rendered output plus whether the command succeeded. The binary only prints
//! the report and maps `success` to the exit code.

pub mod render;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::availability::load_certifications;
use crate::config::{Command, Config};
use crate::detect::detect_scheme;
use crate::error_handling::ResolveError;
use crate::initialization::{init_client, init_reference};
use crate::operator::OperatorConfigResolver;
use crate::validate::{validate_url, Scheme, ValidationOutcome};

use render::{
    render_certificate_list, render_detection, render_game_certificates, render_game_matches,
    render_outcome, render_snapshot,
};

/// Rendered result of one subcommand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandReport {
    /// Text to print on stdout
    pub output: String,
    /// False when the command found problems (exit code 1)
    pub success: bool,
}

impl CommandReport {
    fn ok(output: String) -> Self {
        Self {
            output,
            success: true,
        }
    }
}

#[derive(Serialize)]
struct ValidationReport<'a> {
    scheme: Scheme,
    #[serde(flatten)]
    outcome: &'a ValidationOutcome,
}

/// Runs one subcommand.
///
/// # Errors
///
/// Returns an error for setup failures (client, reference tables), unusable
/// certification datasets, invalid endpoint bases and JSON serialization.
/// Validation findings and an unknown operator are reported with
/// `success: false` instead.
pub async fn run_command(config: &Config, command: &Command) -> Result<CommandReport> {
    match command {
        Command::Detect { url } => Ok(CommandReport::ok(render_detection(detect_scheme(url)))),
        Command::Validate { url, scheme, json } => {
            let reference = init_reference(config).context("Failed to load reference tables")?;
            let Some(scheme) = scheme.or_else(|| detect_scheme(url)) else {
                return Ok(CommandReport {
                    output: "No launch scheme detected for this URL; pass --scheme".to_string(),
                    success: false,
                });
            };
            let outcome = validate_url(scheme, url, &reference);
            let output = if *json {
                serde_json::to_string_pretty(&ValidationReport {
                    scheme,
                    outcome: &outcome,
                })
                .context("Failed to serialize validation outcome")?
            } else {
                render_outcome(scheme, &outcome)
            };
            Ok(CommandReport {
                output,
                success: outcome.is_valid(),
            })
        }
        Command::Resolve { operator, json } => {
            let reference = init_reference(config).context("Failed to load reference tables")?;
            let client = init_client(config).context("Failed to initialize HTTP client")?;
            let resolver = OperatorConfigResolver::new(client, config, reference)?;
            match resolver.resolve(operator).await {
                Ok(snapshot) => {
                    let output = if *json {
                        serde_json::to_string_pretty(&snapshot)
                            .context("Failed to serialize operator snapshot")?
                    } else {
                        render_snapshot(&snapshot)
                    };
                    Ok(CommandReport::ok(output))
                }
                Err(e @ (ResolveError::OperatorNotFound(_) | ResolveError::BlankOperatorKey)) => {
                    Ok(CommandReport {
                        output: e.to_string(),
                        success: false,
                    })
                }
                Err(e) => Err(e.into()),
            }
        }
        Command::Certs {
            source,
            certificate,
            game,
        } => {
            let client = init_client(config).context("Failed to initialize HTTP client")?;
            let index = load_certifications(&client, source)
                .await
                .with_context(|| format!("Failed to load certification dataset {source}"))?;
            let output = match (certificate, game) {
                (Some(certificate), _) => {
                    render_game_matches(certificate, &index.games_for_certificate(certificate))
                }
                (None, Some(game)) => render_game_certificates(
                    game,
                    &index.certificates_for_game(game),
                    index.attributes(game),
                ),
                (None, None) => render_certificate_list(index.game_count(), &index.certificates()),
            };
            Ok(CommandReport::ok(output))
        }
    }
}
