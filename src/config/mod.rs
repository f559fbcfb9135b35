use std::env;
use std::path::PathBuf;

use crate::env::server as env_vars;
use crate::error::{QaBotError, Result};
use crate::services::embedding::EmbeddingConfig;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_DATA_DIR: &str = "data";

/// Process-level configuration assembled from the environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub data_dir: PathBuf,
    /// `None` disables the semantic matching stage
    pub embedding: Option<EmbeddingConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            embedding: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(host) = env::var(env_vars::HOST) {
            if !host.trim().is_empty() {
                config.host = host.trim().to_string();
            }
        }

        if let Ok(port) = env::var(env_vars::PORT) {
            config.port = parse_port(&port)?;
        }

        if let Ok(dir) = env::var(env_vars::DATA_DIR) {
            if !dir.trim().is_empty() {
                config.data_dir = PathBuf::from(dir.trim());
            }
        }

        config.embedding = EmbeddingConfig::from_env()?;

        Ok(config)
    }

    pub fn with_host(mut self, host: String) -> Self {
        self.host = host;
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_data_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.data_dir = dir.into();
        self
    }

    pub fn without_embeddings(mut self) -> Self {
        self.embedding = None;
        self
    }

    pub fn semantic_enabled(&self) -> bool {
        self.embedding.is_some()
    }
}

pub fn parse_port(value: &str) -> Result<u16> {
    value
        .trim()
        .parse::<u16>()
        .map_err(|e| QaBotError::invalid_config(format!("invalid port '{value}': {e}")))
}
