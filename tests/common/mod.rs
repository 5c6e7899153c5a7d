#![allow(dead_code)]

use axum_test::TestServer;
use linkshort::infrastructure::persistence::InMemoryLinkRepository;
use linkshort::routes::app_router;
use linkshort::state::AppState;
use serde_json::{Value, json};
use sqlx::PgPool;
use std::sync::Arc;

pub fn create_test_state() -> AppState {
    AppState::new(Arc::new(InMemoryLinkRepository::new()))
}

/// Full application router over an empty in-memory store.
pub fn make_server() -> TestServer {
    make_server_with_state(create_test_state())
}

pub fn make_server_with_state(state: AppState) -> TestServer {
    let app = app_router(state, None).unwrap();
    TestServer::new(app).unwrap()
}

/// Creates a link through the API and returns its JSON representation.
pub async fn create_link(server: &TestServer, target: &str, code: Option<&str>) -> Value {
    let body = match code {
        Some(code) => json!({ "target": target, "code": code }),
        None => json!({ "target": target }),
    };

    let response = server.post("/api/links").json(&body).await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()
}

pub async fn create_test_link(pool: &PgPool, code: &str, target: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO links (code, target) VALUES ($1, $2) RETURNING id")
        .bind(code)
        .bind(target)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_deleted_link(pool: &PgPool, code: &str, target: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO links (code, target, deleted) VALUES ($1, $2, TRUE) RETURNING id",
    )
    .bind(code)
    .bind(target)
    .fetch_one(pool)
    .await
    .unwrap()
}
