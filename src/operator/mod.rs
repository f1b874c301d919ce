//! Operator configuration resolution.
//!
//! For one operator key, every {environment × config category} endpoint is
//! probed concurrently. Each probe independently ends up `active` or
//! `disabled`; the run only fails when no environment has an active probe.
//!
//! ```no_run
//! use std::sync::Arc;
//! use launch_inspector::operator::OperatorConfigResolver;
//! use launch_inspector::reference::ReferenceData;
//! use launch_inspector::Config;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = Config::default();
//! let client = reqwest::Client::new();
//! let resolver = OperatorConfigResolver::new(client, &config, Arc::new(ReferenceData::builtin()))?;
//! let snapshot = resolver.resolve("my-operator").await?;
//! for (environment, probes) in &snapshot.environments {
//!     println!("{environment}: {} probes", probes.len());
//! }
//! # Ok(())
//! # }
//! ```

mod payload;
mod probe;
mod region;
mod resolver;

use std::collections::BTreeMap;

use serde::Serialize;
use strum_macros::{Display, EnumIter};

use crate::reference::GameCategory;

pub use region::{infer_region, Region};
pub use resolver::OperatorConfigResolver;

/// Deployment environment probed by the resolver.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Display, EnumIter,
)]
pub enum Environment {
    Production,
    Stage,
}

/// Whether a config endpoint answered for the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ProbeStatus {
    Active,
    /// Non-2xx answer, unreadable body, or transport failure
    Disabled,
}

/// How a config category lists its games.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryLayout {
    /// One game per category; presence is the probe status. The primary key,
    /// if any, is the `games` entry to read host and zone from.
    SingleGame { primary_key: Option<&'static str> },
    /// The `games` map lists which catalog games of this category are enabled.
    PerGame(GameCategory),
}

/// One config endpoint family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigCategory {
    /// Path segment of the endpoint URL
    pub name: &'static str,
    pub layout: CategoryLayout,
}

impl ConfigCategory {
    pub fn primary_key(&self) -> Option<&'static str> {
        match self.layout {
            CategoryLayout::SingleGame { primary_key } => primary_key,
            CategoryLayout::PerGame(_) => None,
        }
    }
}

/// Categories probed in every environment, in display order.
pub const CONFIG_CATEGORIES: &[ConfigCategory] = &[
    ConfigCategory {
        name: "aviator",
        layout: CategoryLayout::SingleGame {
            primary_key: Some("aviator"),
        },
    },
    ConfigCategory {
        name: "turbo",
        layout: CategoryLayout::PerGame(GameCategory::Turbo),
    },
    ConfigCategory {
        name: "slots",
        layout: CategoryLayout::PerGame(GameCategory::Slots),
    },
    ConfigCategory {
        name: "multiplayer",
        layout: CategoryLayout::SingleGame { primary_key: None },
    },
];

/// Outcome of probing one {environment, category} endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointProbe {
    pub environment: Environment,
    pub category: String,
    pub status: ProbeStatus,
    pub host: Option<String>,
    pub zone: Option<String>,
    pub region: Region,
    pub raw_payload: Option<serde_json::Value>,
    pub available_games: Vec<String>,
    pub unavailable_games: Vec<String>,
}

impl EndpointProbe {
    pub fn is_active(&self) -> bool {
        self.status == ProbeStatus::Active
    }
}

/// Probes of every environment that had at least one active probe.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatorConfigSnapshot {
    pub operator_key: String,
    pub environments: BTreeMap<Environment, Vec<EndpointProbe>>,
}

impl OperatorConfigSnapshot {
    pub fn probes(&self, environment: Environment) -> &[EndpointProbe] {
        self.environments
            .get(&environment)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn active_count(&self, environment: Environment) -> usize {
        self.probes(environment)
            .iter()
            .filter(|probe| probe.is_active())
            .count()
    }
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
