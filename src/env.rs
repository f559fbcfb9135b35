//! Environment variable constants used throughout the application
//!
//! This module centralizes all environment variable names to ensure consistency
//! and make it easier to manage configuration across the codebase.

/// Logging configuration
pub mod logging {
    /// Log level configuration (e.g., "debug", "info", "warn", "error")
    pub const LOG_LEVEL: &str = "QABOT_LOG_LEVEL";

    /// Disable colored output (follows the NO_COLOR standard)
    pub const NO_COLOR: &str = "NO_COLOR";
}

/// HTTP server configuration
pub mod server {
    /// Address the server binds to
    pub const HOST: &str = "QABOT_HOST";

    /// Listen port
    pub const PORT: &str = "PORT";

    /// Directory containing the question/answer CSV files
    pub const DATA_DIR: &str = "QABOT_DATA_DIR";
}

/// External API configuration
pub mod apis {
    /// Inference API token; semantic matching is disabled when unset
    pub const HF_API_TOKEN: &str = "HF_API_TOKEN";

    /// Feature-extraction model name
    pub const EMBEDDING_MODEL: &str = "QABOT_EMBEDDING_MODEL";

    /// Base URL of the inference API
    pub const EMBEDDING_URL: &str = "QABOT_EMBEDDING_URL";

    /// Per-request timeout for embedding calls (seconds)
    pub const EMBEDDING_TIMEOUT: &str = "QABOT_EMBEDDING_TIMEOUT_SECS";
}
