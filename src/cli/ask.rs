use anyhow::{bail, Result};

use super::build_services;
use crate::config::AppConfig;
use crate::models::EMPTY_QUESTION_RESPONSE;
use crate::services::MatchError;

pub async fn handle_ask_command(config: AppConfig, question: String) -> Result<()> {
    let (matcher, loader) = build_services(&config)?;
    let loaded = loader.load().await?;

    match matcher.answer(&loaded.corpus, &question).await {
        Ok(result) => {
            if let Some(stage) = result.stage() {
                eprintln!("(matched by {stage})");
            }
            println!("{}", result.into_response_text());
            Ok(())
        }
        Err(MatchError::EmptyQuestion) => bail!(EMPTY_QUESTION_RESPONSE),
        Err(e) => Err(e.into()),
    }
}
