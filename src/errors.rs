use thiserror::Error;

/// Error type that captures configuration and bundle loading failures.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid value: {0}")]
    Invalid(String),
}
