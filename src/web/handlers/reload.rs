use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use super::error::AppError;
use crate::web::SharedState;

#[derive(Debug, Serialize, Deserialize)]
pub struct ReloadResponse {
    pub entries: usize,
    pub files_loaded: usize,
    pub files_skipped: usize,
    pub semantic: bool,
}

pub async fn reload_corpus(
    State(state): State<SharedState>,
) -> Result<Json<ReloadResponse>, AppError> {
    let summary = state
        .reload()
        .await
        .map_err(|e| AppError::Internal(format!("Failed to reload corpus: {e}")))?;

    Ok(Json(ReloadResponse {
        entries: summary.entries,
        files_loaded: summary.report.files_loaded,
        files_skipped: summary.report.files_skipped,
        semantic: summary.semantic,
    }))
}
