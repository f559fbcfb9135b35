use anyhow::Result;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::web::{routes, SharedState};

pub fn build_app(state: SharedState) -> Router {
    routes::create_routes(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

pub async fn run_server(host: &str, port: u16, state: SharedState) -> Result<()> {
    let app = build_app(state);

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(%addr, "QA bot listening");
    println!("🌐 QA bot running at http://{addr}");
    println!("💬 Chat endpoint: POST http://{addr}/chat");
    println!();
    println!("Press Ctrl+C to stop the server");

    axum::serve(listener, app).await?;

    Ok(())
}
