//! Error types used throughout the client layer

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for JobBoard infrastructure seams
///
/// Transport and storage adapters convert their native errors into this type
/// before the API client classifies them further.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum JobBoardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl JobBoardError {
    /// Inner message without the variant prefix
    pub fn message(&self) -> &str {
        match self {
            Self::Config(message)
            | Self::Network(message)
            | Self::Timeout(message)
            | Self::Storage(message)
            | Self::InvalidInput(message)
            | Self::Internal(message) => message,
        }
    }
}

/// Result type alias for JobBoard operations
pub type Result<T> = std::result::Result<T, JobBoardError>;
