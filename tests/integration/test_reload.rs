use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use qabot::models::AnswerResult;
use qabot::services::{CorpusLoader, Matcher};
use qabot::web::handlers::ReloadResponse;
use qabot::web::{build_app, AppState};
use std::fs;
use tempfile::TempDir;
use tower::ServiceExt;

const ORIGINAL: &[u8] = b"question,answer\nwhat is the deadline,May 1\nhow do i apply,Online portal\n";
const EXTRA: &[u8] = b"question,answer\nwhere is the library,Building C\n";

async fn state_for(dir: &TempDir) -> AppState {
    let loader = CorpusLoader::new(dir.path());
    let loaded = loader.load().await.unwrap();
    AppState::new(loaded.corpus, Matcher::default(), loader)
}

#[tokio::test]
async fn test_superset_reload_preserves_answers() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.csv"), ORIGINAL).unwrap();
    let state = state_for(&dir).await;

    let queries = ["what is the deadline", "apply", "What is the deadline?"];
    let mut before = Vec::new();
    for query in queries {
        let corpus = state.snapshot().await;
        before.push(state.matcher().answer(&corpus, query).await.unwrap());
    }

    fs::write(dir.path().join("b.csv"), EXTRA).unwrap();
    let summary = state.reload().await.unwrap();
    assert_eq!(summary.entries, 3);
    assert_eq!(summary.report.files_loaded, 2);
    assert!(!summary.semantic);

    for (query, expected) in queries.iter().zip(before) {
        let corpus = state.snapshot().await;
        assert_eq!(state.matcher().answer(&corpus, query).await.unwrap(), expected);
    }

    let corpus = state.snapshot().await;
    let result = state
        .matcher()
        .answer(&corpus, "where is the library")
        .await
        .unwrap();
    assert_eq!(result.answer(), Some("Building C"));
}

#[tokio::test]
async fn test_held_snapshot_is_unaffected_by_reload() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.csv"), ORIGINAL).unwrap();
    let state = state_for(&dir).await;

    let old = state.snapshot().await;

    fs::remove_file(dir.path().join("a.csv")).unwrap();
    fs::write(dir.path().join("b.csv"), EXTRA).unwrap();
    state.reload().await.unwrap();

    // The request that grabbed the old snapshot still sees the old data in full
    assert_eq!(old.len(), 2);
    let result = state.matcher().answer(&old, "how do i apply").await.unwrap();
    assert_eq!(result.answer(), Some("Online portal"));

    let new = state.snapshot().await;
    assert_eq!(new.len(), 1);
    assert_eq!(
        state.matcher().answer(&new, "how do i apply").await.unwrap(),
        AnswerResult::NoMatch
    );
}

#[tokio::test]
async fn test_reload_endpoint() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.csv"), ORIGINAL).unwrap();
    fs::write(dir.path().join("broken.csv"), b"nothing,useful\n").unwrap();
    let app = build_app(state_for(&dir).await.shared());

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/reload")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: ReloadResponse = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body.entries, 2);
    assert_eq!(body.files_loaded, 1);
    assert_eq!(body.files_skipped, 1);
    assert!(!body.semantic);
}
