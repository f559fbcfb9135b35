use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use super::error::AppError;
use crate::models::{AnswerResult, EMPTY_QUESTION_RESPONSE};
use crate::services::MatchError;
use crate::web::SharedState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

pub async fn chat(
    State(state): State<SharedState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let corpus = state.snapshot().await;
    let message = request.message.unwrap_or_default();

    match state.matcher().answer(&corpus, &message).await {
        Ok(result) => {
            if let AnswerResult::Matched { stage, .. } = &result {
                debug!(%stage, "Answered question");
            }
            Ok(Json(ChatResponse {
                response: result.into_response_text(),
            }))
        }
        Err(MatchError::EmptyQuestion) => {
            Err(AppError::BadRequest(EMPTY_QUESTION_RESPONSE.to_string()))
        }
        Err(e) => {
            error!(error = %e, "Matching failed");
            Err(AppError::Internal(e.to_string()))
        }
    }
}
