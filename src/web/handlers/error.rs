use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::chat::ChatResponse;

/// Errors rendered with the same `{"response": ...}` body the chat endpoint uses
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(ChatResponse { response: message })).into_response()
    }
}
