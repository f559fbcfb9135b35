pub mod ask;
pub mod inspect;
pub mod serve;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Runtime;

use crate::config::AppConfig;
use crate::services::{CorpusLoader, FailOpenEmbedder, InferenceApiProvider, Matcher};

#[derive(Parser)]
#[command(name = "qabot")]
#[command(about = "Answer questions from curated CSV question/answer pairs")]
#[command(version = "0.1.0")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP chat server
    Serve {
        /// Address to bind (default: $QABOT_HOST or 0.0.0.0)
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on (default: $PORT or 5000)
        #[arg(short, long)]
        port: Option<u16>,
        /// Directory containing CSV files (default: $QABOT_DATA_DIR or ./data)
        #[arg(short, long)]
        data_dir: Option<PathBuf>,
    },
    /// Answer a single question and exit
    Ask {
        /// The question to answer
        question: String,
        /// Directory containing CSV files
        #[arg(short, long)]
        data_dir: Option<PathBuf>,
    },
    /// Load the data directory and report what was found
    Inspect {
        /// Directory containing CSV files
        #[arg(short, long)]
        data_dir: Option<PathBuf>,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let rt = Runtime::new()?;

        rt.block_on(async {
            let config = AppConfig::from_env().context("Failed to read configuration")?;

            match self.command {
                Commands::Serve {
                    host,
                    port,
                    data_dir,
                } => {
                    let mut config = apply_data_dir(config, data_dir);
                    if let Some(host) = host {
                        config = config.with_host(host);
                    }
                    if let Some(port) = port {
                        config = config.with_port(port);
                    }
                    serve::handle_serve_command(config).await
                }
                Commands::Ask { question, data_dir } => {
                    ask::handle_ask_command(apply_data_dir(config, data_dir), question).await
                }
                Commands::Inspect { data_dir } => {
                    inspect::handle_inspect_command(apply_data_dir(config, data_dir)).await
                }
            }
        })
    }
}

fn apply_data_dir(config: AppConfig, data_dir: Option<PathBuf>) -> AppConfig {
    match data_dir {
        Some(dir) => config.with_data_dir(dir),
        None => config,
    }
}

/// Build the matcher and loader for a configuration, sharing one embedder.
pub fn build_services(config: &AppConfig) -> Result<(Matcher, CorpusLoader)> {
    let embedder = match &config.embedding {
        Some(embedding) => {
            let provider = InferenceApiProvider::new(embedding.clone())
                .context("Failed to create embedding client")?;
            Some(FailOpenEmbedder::new(Arc::new(provider)))
        }
        None => None,
    };

    let mut loader = CorpusLoader::new(&config.data_dir);
    if let Some(embedder) = &embedder {
        loader = loader.with_embedder(embedder.clone());
    }

    Ok((Matcher::new(embedder), loader))
}
