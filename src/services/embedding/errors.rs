use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error("Rate limit exceeded: {message}")]
    RateLimitExceeded { message: String },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Network error: {source}")]
    NetworkError { source: reqwest::Error },

    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    #[error("Model unavailable: {message}")]
    ModelUnavailable { message: String },

    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    #[error("Invalid response: {0}")]
    Decode(#[from] DecodeError),

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },
}

/// Why a feature-extraction response body could not become a single vector
#[derive(Debug, Error, PartialEq)]
pub enum DecodeError {
    #[error("response is neither a vector nor a singleton-wrapped vector: {message}")]
    UnexpectedShape { message: String },

    #[error("expected exactly one vector, got {count}")]
    NotSingleton { count: usize },

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

impl EmbeddingError {
    pub fn is_authentication_error(&self) -> bool {
        matches!(self, EmbeddingError::AuthenticationFailed { .. })
    }

    pub fn is_timeout_error(&self) -> bool {
        matches!(self, EmbeddingError::Timeout { .. })
    }

    pub fn is_network_error(&self) -> bool {
        matches!(self, EmbeddingError::NetworkError { .. })
    }

    pub fn is_decode_error(&self) -> bool {
        matches!(self, EmbeddingError::Decode(_))
    }

    pub fn is_server_error(&self) -> bool {
        matches!(
            self,
            EmbeddingError::ServerError { .. } | EmbeddingError::ModelUnavailable { .. }
        )
    }

    pub fn from_reqwest_error(error: reqwest::Error, timeout_ms: u64) -> Self {
        if error.is_timeout() {
            EmbeddingError::Timeout { timeout_ms }
        } else if let Some(status) = error.status() {
            let status_code = status.as_u16();
            let message = error.to_string();

            match status_code {
                401 | 403 => EmbeddingError::AuthenticationFailed { message },
                429 => EmbeddingError::RateLimitExceeded { message },
                500..=599 => EmbeddingError::ServerError {
                    status: status_code,
                    message,
                },
                _ => EmbeddingError::InvalidRequest { message },
            }
        } else {
            EmbeddingError::NetworkError { source: error }
        }
    }

    pub fn from_status_and_body(status: reqwest::StatusCode, body: &str) -> Self {
        let status_code = status.as_u16();

        // The inference API reports failures as {"error": "..."}
        let error_message =
            if let Ok(error_response) = serde_json::from_str::<serde_json::Value>(body) {
                error_response
                    .get("error")
                    .and_then(|e| e.as_str().or_else(|| e.get("message")?.as_str()))
                    .unwrap_or(body)
                    .to_string()
            } else {
                body.to_string()
            };

        match status_code {
            401 | 403 => EmbeddingError::AuthenticationFailed {
                message: error_message,
            },
            429 => EmbeddingError::RateLimitExceeded {
                message: error_message,
            },
            503 => EmbeddingError::ModelUnavailable {
                message: error_message,
            },
            500..=599 => EmbeddingError::ServerError {
                status: status_code,
                message: error_message,
            },
            _ => EmbeddingError::InvalidRequest {
                message: format!("HTTP {status_code}: {error_message}"),
            },
        }
    }
}
