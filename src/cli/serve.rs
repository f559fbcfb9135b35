use anyhow::Result;
use tracing::{info, warn};

use super::build_services;
use crate::config::AppConfig;
use crate::web::{run_server, AppState};

pub async fn handle_serve_command(config: AppConfig) -> Result<()> {
    if !config.semantic_enabled() {
        warn!("No inference API token configured; semantic matching is disabled");
    }

    let (matcher, loader) = build_services(&config)?;
    let loaded = loader.load().await?;

    info!(
        entries = loaded.corpus.len(),
        data_dir = %config.data_dir.display(),
        "Starting QA bot"
    );

    let state = AppState::new(loaded.corpus, matcher, loader).shared();
    run_server(&config.host, config.port, state).await
}
