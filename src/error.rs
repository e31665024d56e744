use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::parser::ConfigError),

    #[error("{failed} of {total} transfer attempts did not confirm")]
    AttemptsFailed { failed: usize, total: usize },

    #[error("Failed to render report: {0}")]
    Report(#[from] serde_json::Error),
}
