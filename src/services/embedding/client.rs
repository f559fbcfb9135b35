use async_trait::async_trait;
use reqwest::{Client, Response};
use std::env;
use std::time::Duration;
use tokio::time::timeout;

use super::errors::EmbeddingError;
use super::models::{FeatureExtractionRequest, FeatureExtractionResponse};
use super::provider::EmbeddingProvider;
use crate::env::apis as env_vars;

pub const DEFAULT_BASE_URL: &str = "https://router.huggingface.co/hf-inference/models";
pub const DEFAULT_MODEL: &str = "sentence-transformers/all-MiniLM-L6-v2";
pub const DEFAULT_DIMENSION: usize = 384;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct EmbeddingConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
    pub dimension: usize,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            dimension: DEFAULT_DIMENSION,
        }
    }
}

impl EmbeddingConfig {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            ..Default::default()
        }
    }

    /// Read the inference API settings from the environment.
    ///
    /// Returns `Ok(None)` when no API token is set, which turns semantic
    /// matching off.
    pub fn from_env() -> Result<Option<Self>, EmbeddingError> {
        let api_key = match env::var(env_vars::HF_API_TOKEN) {
            Ok(key) if !key.trim().is_empty() => key.trim().to_string(),
            _ => return Ok(None),
        };

        let mut config = Self::new(api_key);

        if let Ok(model) = env::var(env_vars::EMBEDDING_MODEL) {
            config.model = model;
        }

        if let Ok(url) = env::var(env_vars::EMBEDDING_URL) {
            config.base_url = url;
        }

        if let Ok(secs) = env::var(env_vars::EMBEDDING_TIMEOUT) {
            let secs = secs
                .trim()
                .parse::<u64>()
                .map_err(|e| EmbeddingError::ConfigurationError {
                    message: format!("invalid embedding timeout '{secs}': {e}"),
                })?;
            config.timeout = Duration::from_secs(secs);
        }

        config.validate()?;
        Ok(Some(config))
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_dimension(mut self, dimension: usize) -> Self {
        self.dimension = dimension;
        self
    }

    pub fn validate(&self) -> Result<(), EmbeddingError> {
        if self.api_key.is_empty() {
            return Err(EmbeddingError::ConfigurationError {
                message: "Inference API token is required".to_string(),
            });
        }

        if self.base_url.is_empty() {
            return Err(EmbeddingError::ConfigurationError {
                message: "Base URL cannot be empty".to_string(),
            });
        }

        if self.model.is_empty() {
            return Err(EmbeddingError::ConfigurationError {
                message: "Model name cannot be empty".to_string(),
            });
        }

        if self.dimension == 0 {
            return Err(EmbeddingError::ConfigurationError {
                message: "Embedding dimension must be positive".to_string(),
            });
        }

        Ok(())
    }

    pub fn endpoint_url(&self) -> String {
        format!(
            "{}/{}/pipeline/feature-extraction",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }

    fn timeout_ms(&self) -> u64 {
        self.timeout.as_millis() as u64
    }
}

/// Feature-extraction client for a hosted inference API
#[derive(Clone)]
pub struct InferenceApiProvider {
    config: EmbeddingConfig,
    client: Client,
}

impl InferenceApiProvider {
    pub fn new(config: EmbeddingConfig) -> Result<Self, EmbeddingError> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| EmbeddingError::ConfigurationError {
                message: format!("Failed to create HTTP client: {e}"),
            })?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &EmbeddingConfig {
        &self.config
    }

    async fn embed_once(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let request = FeatureExtractionRequest::new(text);

        let response = timeout(
            self.config.timeout,
            self.client
                .post(self.config.endpoint_url())
                .bearer_auth(&self.config.api_key)
                .json(&request)
                .send(),
        )
        .await
        .map_err(|_| EmbeddingError::Timeout {
            timeout_ms: self.config.timeout_ms(),
        })?
        .map_err(|e| EmbeddingError::from_reqwest_error(e, self.config.timeout_ms()))?;

        self.handle_response(response).await
    }

    async fn handle_response(&self, response: Response) -> Result<Vec<f32>, EmbeddingError> {
        let status = response.status();

        let body = response
            .text()
            .await
            .map_err(|e| EmbeddingError::from_reqwest_error(e, self.config.timeout_ms()))?;

        if !status.is_success() {
            return Err(EmbeddingError::from_status_and_body(status, &body));
        }

        let vector = FeatureExtractionResponse::parse(&body)?.into_vector(self.config.dimension)?;
        Ok(vector)
    }
}

#[async_trait]
impl EmbeddingProvider for InferenceApiProvider {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        self.embed_once(text).await
    }

    fn dimension(&self) -> usize {
        self.config.dimension
    }
}
