//! Concurrent fan-out over the config endpoint matrix.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use futures::future::join_all;
use strum::IntoEnumIterator;
use url::Url;

use crate::config::{Config, CACHE_BUST_PARAM};
use crate::error_handling::ResolveError;
use crate::reference::ReferenceData;

use super::probe::{build_probe, fetch_payload};
use super::{ConfigCategory, EndpointProbe, Environment, OperatorConfigSnapshot, CONFIG_CATEGORIES};

/// Resolves operator configuration across environments.
///
/// Holds no per-run state; every [`resolve`](Self::resolve) call starts from
/// scratch. The client's timeout bounds each probe.
#[derive(Debug, Clone)]
pub struct OperatorConfigResolver {
    client: reqwest::Client,
    prod_base: Url,
    stage_base: Url,
    reference: Arc<ReferenceData>,
}

impl OperatorConfigResolver {
    /// # Errors
    ///
    /// Returns [`ResolveError::InvalidEndpoint`] if either config base is not
    /// a URL that can carry path segments.
    pub fn new(
        client: reqwest::Client,
        config: &Config,
        reference: Arc<ReferenceData>,
    ) -> Result<Self, ResolveError> {
        Ok(Self {
            client,
            prod_base: parse_base(&config.prod_config_base)?,
            stage_base: parse_base(&config.stage_config_base)?,
            reference,
        })
    }

    fn base(&self, environment: Environment) -> &Url {
        match environment {
            Environment::Production => &self.prod_base,
            Environment::Stage => &self.stage_base,
        }
    }

    /// `{base}/{category}/{operator_key}.json?t={millis}`
    pub fn endpoint_url(
        &self,
        environment: Environment,
        category: &ConfigCategory,
        operator_key: &str,
    ) -> Url {
        let mut url = self.base(environment).clone();
        // parse_base already rejected bases that cannot hold segments
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .push(category.name)
                .push(&format!("{operator_key}.json"));
        }
        url.query_pairs_mut().clear().append_pair(
            CACHE_BUST_PARAM,
            &chrono::Utc::now().timestamp_millis().to_string(),
        );
        url
    }

    /// Probes every endpoint for `operator_key` and keeps the environments
    /// with at least one active probe.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::BlankOperatorKey`] for an empty or whitespace key
    /// - [`ResolveError::OperatorNotFound`] if no probe anywhere was active
    pub async fn resolve(&self, operator_key: &str) -> Result<OperatorConfigSnapshot, ResolveError> {
        let operator_key = operator_key.trim();
        if operator_key.is_empty() {
            return Err(ResolveError::BlankOperatorKey);
        }

        let probes = self.probe_all(operator_key).await;
        let active: BTreeSet<Environment> = probes
            .iter()
            .filter(|probe| probe.is_active())
            .map(|probe| probe.environment)
            .collect();

        if active.is_empty() {
            log::info!(
                "Operator {operator_key}: all {} probes disabled",
                probes.len()
            );
            return Err(ResolveError::OperatorNotFound(operator_key.to_string()));
        }

        let mut environments: BTreeMap<Environment, Vec<EndpointProbe>> = BTreeMap::new();
        for probe in probes {
            if active.contains(&probe.environment) {
                environments.entry(probe.environment).or_default().push(probe);
            }
        }

        let snapshot = OperatorConfigSnapshot {
            operator_key: operator_key.to_string(),
            environments,
        };
        for environment in snapshot.environments.keys() {
            log::info!(
                "Operator {operator_key}: {environment} has {}/{} active categories",
                snapshot.active_count(*environment),
                snapshot.probes(*environment).len()
            );
        }
        Ok(snapshot)
    }

    /// Issues every probe before awaiting any, and joins them as one unit.
    async fn probe_all(&self, operator_key: &str) -> Vec<EndpointProbe> {
        let targets: Vec<(Environment, &ConfigCategory)> = Environment::iter()
            .flat_map(|environment| CONFIG_CATEGORIES.iter().map(move |c| (environment, c)))
            .collect();

        let probes = targets.into_iter().map(|(environment, category)| {
            let url = self.endpoint_url(environment, category, operator_key);
            async move {
                log::debug!("Probing {url}");
                let fetched = fetch_payload(&self.client, url).await;
                build_probe(environment, category, fetched, &self.reference)
            }
        });

        join_all(probes).await
    }
}

fn parse_base(base: &str) -> Result<Url, ResolveError> {
    let invalid = |reason: String| ResolveError::InvalidEndpoint {
        base: base.to_string(),
        reason,
    };
    let url = Url::parse(base.trim()).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    if url.cannot_be_a_base() {
        return Err(invalid("cannot hold path segments".to_string()));
    }
    Ok(url)
}
