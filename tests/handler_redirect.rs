mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn test_redirect_success() {
    let server = common::make_server();
    common::create_link(&server, "https://example.com/path?x=1", Some("redir1")).await;

    let response = server.get("/redir1").await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://example.com/path?x=1");
}

#[tokio::test]
async fn test_redirect_records_click() {
    let server = common::make_server();
    common::create_link(&server, "https://example.com", Some("redir1")).await;

    server.get("/redir1").await.assert_status(StatusCode::FOUND);

    let link = server.get("/api/links/redir1").await.json::<Value>();
    assert_eq!(link["total_clicks"], 1);
    assert!(link["last_clicked"].is_string());
}

#[tokio::test]
async fn test_redirect_counts_every_click() {
    let server = common::make_server();
    common::create_link(&server, "https://example.com", Some("count1")).await;

    for _ in 0..3 {
        server.get("/count1").await.assert_status(StatusCode::FOUND);
    }

    let link = server.get("/api/links/count1").await.json::<Value>();
    assert_eq!(link["total_clicks"], 3);
}

#[tokio::test]
async fn test_redirect_not_found() {
    let server = common::make_server();

    let response = server.get("/nothere").await;

    response.assert_status_not_found();
    response.assert_json(&json!({ "error": "Not found" }));
}

#[tokio::test]
async fn test_redirect_deleted_link() {
    let server = common::make_server();
    common::create_link(&server, "https://example.com", Some("gone01")).await;
    server.delete("/api/links/gone01").await.assert_status_ok();

    let response = server.get("/gone01").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_unknown_code_leaves_other_links_untouched() {
    let server = common::make_server();
    common::create_link(&server, "https://example.com", Some("stay01")).await;

    server.get("/stay02").await.assert_status_not_found();

    let link = server.get("/api/links/stay01").await.json::<Value>();
    assert_eq!(link["total_clicks"], 0);
    assert!(link["last_clicked"].is_null());
}

#[tokio::test]
async fn test_healthz_is_not_a_short_code() {
    let server = common::make_server();

    let response = server.get("/healthz").await;

    response.assert_status_ok();
    assert!(response.maybe_header("location").is_none());
}
