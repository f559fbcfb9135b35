use axum::{
    routing::{get, post},
    Router,
};

use crate::web::{handlers, SharedState};

pub fn create_routes(state: SharedState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/ping", get(handlers::ping))
        .route("/chat", post(handlers::chat))
        .route("/reload", post(handlers::reload_corpus))
        .with_state(state)
}
