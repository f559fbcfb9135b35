use thiserror::Error;

use crate::services::embedding::EmbeddingError;

/// Custom error types for the QA bot
#[derive(Error, Debug)]
pub enum QaBotError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),

    #[error("Validation error: {field}: {message}")]
    Validation { field: String, message: String },
}

impl QaBotError {
    /// Create an invalid configuration error
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation<S: Into<String>>(field: S, message: S) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            QaBotError::Io(_) => "io",
            QaBotError::InvalidConfig { .. } => "config",
            QaBotError::Embedding(_) => "embedding",
            QaBotError::TaskJoin(_) => "task",
            QaBotError::Validation { .. } => "validation",
        }
    }
}

/// Result type alias for the QA bot
pub type Result<T> = std::result::Result<T, QaBotError>;
