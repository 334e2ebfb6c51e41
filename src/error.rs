use reqwest::StatusCode;
use thiserror::Error;

pub type ZetaResult<T> = Result<T, ZetaError>;

/// Fallback message when the execution service rejects a request without a readable `detail`.
pub const EXECUTION_FAILED: &str = "Execution failed";

#[derive(Error, Debug)]
pub enum ZetaError {
    #[error("Failed to talk to agent (HTTP {0})")]
    Agent(StatusCode),

    #[error("{0}")]
    Execution(String),

    #[error("Agent parse error: {0}")]
    ParseRejected(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML decode error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ZetaError {
    pub fn execution<T: Into<String>>(msg: T) -> Self {
        ZetaError::Execution(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        ZetaError::Config(msg.into())
    }

    pub fn invalid_input<T: Into<String>>(msg: T) -> Self {
        ZetaError::InvalidInput(msg.into())
    }
}
