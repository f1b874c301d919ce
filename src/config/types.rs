//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use thiserror::Error;

use crate::config::constants::{
    DEFAULT_PROD_CONFIG_BASE, DEFAULT_STAGE_CONFIG_BASE, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};
use crate::validate::Scheme;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// A configuration field that failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {field}: {message}")]
pub struct ConfigValidationError {
    /// Name of the offending field
    pub field: &'static str,
    /// What is wrong with it
    pub message: String,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use launch_inspector::Config;
///
/// let config = Config {
///     timeout_seconds: 5,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Optional JSON document replacing the bundled reference tables
    pub reference_path: Option<PathBuf>,

    /// Base URL of the production config endpoints
    pub prod_config_base: String,

    /// Base URL of the stage config endpoints
    pub stage_config_base: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            reference_path: None,
            prod_config_base: DEFAULT_PROD_CONFIG_BASE.to_string(),
            stage_config_base: DEFAULT_STAGE_CONFIG_BASE.to_string(),
        }
    }
}

impl Config {
    /// Checks field values that clap cannot express as types.
    ///
    /// # Errors
    ///
    /// Returns the first field that is out of range or malformed.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.timeout_seconds == 0 {
            return Err(ConfigValidationError {
                field: "timeout_seconds",
                message: "must be greater than 0".to_string(),
            });
        }
        for (field, base) in [
            ("prod_config_base", &self.prod_config_base),
            ("stage_config_base", &self.stage_config_base),
        ] {
            match url::Url::parse(base) {
                Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
                Ok(parsed) => {
                    return Err(ConfigValidationError {
                        field,
                        message: format!(
                            "scheme '{}' is not supported (expected http or https)",
                            parsed.scheme()
                        ),
                    })
                }
                Err(e) => {
                    return Err(ConfigValidationError {
                        field,
                        message: format!("'{base}' is not a valid URL: {e}"),
                    })
                }
            }
        }
        Ok(())
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// launch_inspector validate 'https://launch.spribegaming.com/aviator?user=u&token=t&currency=USD&operator=op'
/// launch_inspector resolve my-operator --log-level debug
/// launch_inspector certs ./certificates.csv --certificate MGA
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "launch_inspector",
    about = "Validates launch URLs and resolves operator configuration."
)]
pub struct Opt {
    /// Log level: error|warn|info|debug|trace
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Per-request timeout in seconds
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// JSON file replacing the bundled reference tables
    #[arg(long, global = true)]
    pub reference: Option<PathBuf>,

    /// Base URL of the production config endpoints
    #[arg(long, global = true, default_value = DEFAULT_PROD_CONFIG_BASE)]
    pub prod_config_base: String,

    /// Base URL of the stage config endpoints
    #[arg(long, global = true, default_value = DEFAULT_STAGE_CONFIG_BASE)]
    pub stage_config_base: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print which scheme a URL belongs to
    Detect {
        /// Raw launch URL
        url: String,
    },
    /// Validate a launch URL
    Validate {
        /// Raw launch URL
        url: String,
        /// Validate against this scheme instead of detecting one
        #[arg(long, value_enum)]
        scheme: Option<Scheme>,
        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },
    /// Resolve an operator's configuration across environments
    Resolve {
        /// Operator key
        operator: String,
        /// Print the snapshot as JSON
        #[arg(long)]
        json: bool,
    },
    /// Query a certification dataset (file path or http(s) URL)
    Certs {
        /// CSV file path or URL
        source: String,
        /// List games certified for this certificate
        #[arg(long, conflicts_with = "game")]
        certificate: Option<String>,
        /// List certificates held by this game
        #[arg(long)]
        game: Option<String>,
    },
}

impl From<&Opt> for Config {
    fn from(opt: &Opt) -> Self {
        Self {
            log_level: opt.log_level.clone(),
            log_format: opt.log_format.clone(),
            timeout_seconds: opt.timeout_seconds,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            reference_path: opt.reference.clone(),
            prod_config_base: opt.prod_config_base.clone(),
            stage_config_base: opt.stage_config_base.clone(),
        }
    }
}
