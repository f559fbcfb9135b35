use anyhow::Result;
use std::env;
use tracing::Level;
use tracing_subscriber::{
    filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer, Registry,
};

use crate::env::logging as env_vars;

/// Logging configuration for the QA bot
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    pub level: Level,
    /// Whether to use ANSI colors
    pub use_colors: bool,
    /// Whether to include the event target
    pub with_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            use_colors: true,
            with_target: true,
        }
    }
}

impl LoggingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the log level
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Enable/disable ANSI colors
    pub fn with_colors(mut self, enabled: bool) -> Self {
        self.use_colors = enabled;
        self
    }

    /// Create config from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(level_str) = env::var(env_vars::LOG_LEVEL) {
            config.level = parse_level(&level_str);
        }

        if env::var(env_vars::NO_COLOR).is_ok() {
            config.use_colors = false;
        }

        config
    }
}

/// Map a level name to a tracing level, defaulting to INFO
pub fn parse_level(value: &str) -> Level {
    match value.trim().to_lowercase().as_str() {
        "error" => Level::ERROR,
        "warn" => Level::WARN,
        "info" => Level::INFO,
        "debug" => Level::DEBUG,
        "trace" => Level::TRACE,
        _ => Level::INFO,
    }
}

/// Initialize logging with the given configuration
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    let layer = fmt::layer()
        .with_ansi(config.use_colors)
        .with_level(true)
        .with_target(config.with_target)
        .with_filter(LevelFilter::from_level(config.level));

    Registry::default().with(layer).try_init()?;

    tracing::debug!(level = ?config.level, "Logging initialized");

    Ok(())
}

/// Initialize logging from environment variables
pub fn init_from_env() -> Result<()> {
    init_logging(LoggingConfig::from_env())
}
