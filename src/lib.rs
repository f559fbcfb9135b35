pub mod cli;
pub mod config;
pub mod models;
pub mod services;
pub mod web;

pub mod env;
pub mod error;
pub mod logging;

pub use error::{QaBotError, Result};
pub use logging::{init_logging, LoggingConfig};
