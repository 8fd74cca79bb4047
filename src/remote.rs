//! Blocking client for the localization statistics service.
use crate::config::WorkflowConfig;
use crate::error::WorkflowError;
use crate::stats::{parse_stats_xml, ModuleStats};
use std::time::Instant;

/// Fetches per-module statistics for a release set and language.
#[derive(Clone)]
pub struct StatsClient {
    agent: ureq::Agent,
    service_url: String,
}

impl StatsClient {
    pub fn new(config: &WorkflowConfig) -> Self {
        let agent_config = ureq::Agent::config_builder()
            .timeout_global(Some(config.timeout))
            .build();
        StatsClient {
            agent: ureq::Agent::new_with_config(agent_config),
            service_url: config.service_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn stats_url(&self, release_set: &str, language: &str) -> String {
        format!(
            "{}/languages/{language}/{release_set}/xml",
            self.service_url
        )
    }

    /// GET and parse the stats document. Any failure is fatal to the caller.
    pub fn fetch_stats(
        &self,
        release_set: &str,
        language: &str,
    ) -> Result<ModuleStats, WorkflowError> {
        let url = self.stats_url(release_set, language);
        tracing::debug!(%url, "fetching stats");
        let start = Instant::now();

        let mut response = self
            .agent
            .get(url.as_str())
            .call()
            .map_err(|err| WorkflowError::remote(release_set, language, err.to_string()))?;
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|err| WorkflowError::remote(release_set, language, err.to_string()))?;
        let stats = parse_stats_xml(&body)
            .map_err(|err| WorkflowError::remote(release_set, language, format!("{err:#}")))?;

        tracing::info!(
            %url,
            elapsed_ms = start.elapsed().as_millis(),
            module_count = stats.len(),
            "stats fetch complete"
        );
        Ok(stats)
    }
}
