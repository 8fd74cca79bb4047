//! Configuration loading and merging.
//!
//! The on-disk `config.yaml` supplies defaults; command-line overrides win.
//! The merged [`WorkflowConfig`] is built once per invocation and handed to
//! the workflow by value, nothing reads configuration from ambient state.
use crate::error::WorkflowError;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILE_NAME: &str = "config.yaml";
/// Environment variable naming an alternate configuration file.
pub const CONFIG_ENV_VAR: &str = "L10N_WORKFLOW_CONFIG";
pub const DEFAULT_SERVICE_URL: &str = "https://l10n.gnome.org";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Raw contents of `config.yaml`. Every key is optional at this layer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub release_set: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub service_url: Option<String>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub steps: StepCommands,
}

/// Command templates for the delegated per-module steps.
///
/// Templates are split like a shell command line; `{module}` and `{branch}`
/// are substituted inside each argument.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StepCommands {
    #[serde(default)]
    pub translate: Option<String>,
    #[serde(default)]
    pub commit: Option<String>,
    #[serde(default)]
    pub push: Option<String>,
}

/// Values passed on the command line that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub release_set: Option<String>,
    pub language: Option<String>,
}

/// Fully merged, immutable configuration for one invocation.
#[derive(Debug, Clone)]
pub struct WorkflowConfig {
    pub release_set: String,
    pub language: String,
    pub service_url: String,
    pub timeout: Duration,
    pub steps: StepCommands,
}

impl WorkflowConfig {
    /// Merge file values with overrides and check required keys.
    pub fn resolve(file: ConfigFile, overrides: Overrides) -> Result<Self, WorkflowError> {
        let release_set = pick("release_set", overrides.release_set, file.release_set)?;
        let language = pick("language", overrides.language, file.language)?;
        let service_url = file
            .service_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_SERVICE_URL.to_string());
        let timeout_secs = file.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(WorkflowError::ConfigInvalid(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }

        Ok(WorkflowConfig {
            release_set,
            language,
            service_url,
            timeout: Duration::from_secs(timeout_secs),
            steps: file.steps,
        })
    }
}

fn pick(
    key: &str,
    preferred: Option<String>,
    fallback: Option<String>,
) -> Result<String, WorkflowError> {
    [preferred, fallback]
        .into_iter()
        .flatten()
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
        .ok_or_else(|| {
            WorkflowError::ConfigInvalid(format!(
                "{key} is not set in the config file or on the command line"
            ))
        })
}

/// Load `config.yaml`; its absence means the tool is not configured.
pub fn load_config_file(path: &Path) -> Result<ConfigFile, WorkflowError> {
    if !path.is_file() {
        return Err(WorkflowError::ConfigMissing {
            path: path.to_path_buf(),
        });
    }
    let text = fs::read_to_string(path).map_err(|err| {
        WorkflowError::ConfigInvalid(format!("read {}: {err}", path.display()))
    })?;
    if text.trim().is_empty() {
        return Ok(ConfigFile::default());
    }
    serde_yaml::from_str(&text)
        .map_err(|err| WorkflowError::ConfigInvalid(format!("parse {}: {err}", path.display())))
}

/// Resolve the config path: explicit flag, then [`CONFIG_ENV_VAR`], then
/// `config.yaml` beside the executable, then the per-user config directory.
///
/// When nothing exists the executable-relative path is returned so the
/// missing-config error names the expected location.
pub fn resolve_config_path(explicit: Option<&Path>) -> PathBuf {
    let from_env = env::var_os(CONFIG_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from);
    let beside_exe = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(CONFIG_FILE_NAME)));
    let user_dir = dirs::config_dir().map(|dir| dir.join("l10n-workflow").join(CONFIG_FILE_NAME));
    choose_config_path(explicit, from_env, beside_exe, user_dir)
}

fn choose_config_path(
    explicit: Option<&Path>,
    from_env: Option<PathBuf>,
    beside_exe: Option<PathBuf>,
    user_dir: Option<PathBuf>,
) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    if let Some(path) = from_env {
        return path;
    }
    if let Some(path) = beside_exe.as_ref().filter(|p| p.is_file()) {
        return path.clone();
    }
    if let Some(path) = user_dir.filter(|p| p.is_file()) {
        return path;
    }
    beside_exe.unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
