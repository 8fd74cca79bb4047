//! Error taxonomy for the workflow.
//!
//! Every variant is fatal for the invocation. Invalid menu input is not an
//! error: it is handled by re-prompting in [`crate::selection`].
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum WorkflowError {
    #[error("not configured: {} does not exist", path.display())]
    ConfigMissing { path: PathBuf },

    #[error("invalid configuration: {0}")]
    ConfigInvalid(String),

    #[error("release set '{release_set}' or language '{language}' not valid: {reason}")]
    RemoteFetch {
        release_set: String,
        language: String,
        reason: String,
    },

    #[error("prompt failed")]
    Prompt(#[from] std::io::Error),
}

impl WorkflowError {
    pub(crate) fn remote(release_set: &str, language: &str, reason: impl Into<String>) -> Self {
        WorkflowError::RemoteFetch {
            release_set: release_set.to_string(),
            language: language.to_string(),
            reason: reason.into(),
        }
    }
}
