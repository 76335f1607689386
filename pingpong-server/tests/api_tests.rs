//! Integration tests for the Pingpong Server API

use axum::http::StatusCode;
use axum_test::TestServer;
use pingpong_server::config::ServerConfig;
use pingpong_server::routes::create_router;
use serde_json::{json, Value};

/// Create a test server
fn create_test_server() -> TestServer {
    let app = create_router(&ServerConfig::default());
    TestServer::new(app).expect("Failed to create test server")
}

fn fixed_response() -> Value {
    json!({"ping": "ping", "pong": "pong"})
}

/// Assert a 422 whose detail has an entry located at `["body", field]`
fn assert_field_error(body: &Value, field: &str, kind: &str) {
    let detail = body["detail"].as_array().expect("detail should be a list");
    assert!(
        detail
            .iter()
            .any(|e| e["loc"] == json!(["body", field]) && e["type"] == kind),
        "no {} error for {} in {}",
        kind,
        field,
        body
    );
}

#[tokio::test]
async fn test_get_ping() {
    let server = create_test_server();

    let response = server.get("/ping").await;

    response.assert_status_ok();
    response.assert_json(&fixed_response());
}

#[tokio::test]
async fn test_get_ping_ignores_body() {
    let server = create_test_server();

    let response = server.get("/ping").json(&json!({"ping": 1})).await;

    response.assert_status_ok();
    response.assert_json(&fixed_response());
}

#[tokio::test]
async fn test_post_ping() {
    let server = create_test_server();

    let response = server
        .post("/ping")
        .json(&json!({"ping": "x", "pong": "y"}))
        .await;

    response.assert_status_ok();
    response.assert_json(&fixed_response());
}

#[tokio::test]
async fn test_put_ping() {
    let server = create_test_server();

    let response = server
        .put("/ping")
        .json(&json!({"ping": "anything", "pong": ""}))
        .await;

    response.assert_status_ok();
    response.assert_json(&fixed_response());
}

#[tokio::test]
async fn test_delete_ping() {
    let server = create_test_server();

    let response = server
        .delete("/ping")
        .json(&json!({"ping": "ping_example", "pong": "pong_example"}))
        .await;

    response.assert_status_ok();
    response.assert_json(&fixed_response());
}

#[tokio::test]
async fn test_response_ignores_request_values() {
    let server = create_test_server();

    for (ping, pong) in [("", ""), ("pong", "ping"), ("ünïcödé", "🏓")] {
        let response = server
            .post("/ping")
            .json(&json!({"ping": ping, "pong": pong}))
            .await;

        response.assert_status_ok();
        response.assert_json(&fixed_response());
    }
}

#[tokio::test]
async fn test_post_missing_field() {
    let server = create_test_server();

    let response = server.post("/ping").json(&json!({"ping": "x"})).await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_field_error(&body, "pong", "missing");
    assert_eq!(body["detail"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_wrong_type_on_every_method() {
    let server = create_test_server();
    let bad = json!({"ping": 42, "pong": ["y"]});

    for response in [
        server.post("/ping").json(&bad).await,
        server.put("/ping").json(&bad).await,
        server.delete("/ping").json(&bad).await,
    ] {
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = response.json();
        assert_field_error(&body, "ping", "string_type");
        assert_field_error(&body, "pong", "string_type");
    }
}

#[tokio::test]
async fn test_missing_body() {
    let server = create_test_server();

    let response = server.delete("/ping").await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(body["detail"][0]["loc"], json!(["body"]));
    assert_eq!(body["detail"][0]["type"], "missing");
}

#[tokio::test]
async fn test_malformed_json() {
    let server = create_test_server();

    let response = server.post("/ping").text("{\"ping\": \"x\",").await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(body["detail"][0]["type"], "json_invalid");
    assert_eq!(body["detail"][0]["loc"][0], "body");
    assert_eq!(body["detail"][0]["msg"], "JSON decode error");
}

#[tokio::test]
async fn test_non_object_body() {
    let server = create_test_server();

    let response = server.put("/ping").json(&json!("ping")).await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(body["detail"][0]["type"], "model_attributes_type");
}

#[tokio::test]
async fn test_large_valid_body() {
    let server = create_test_server();

    // Above axum's 2 MB default limit
    let response = server
        .post("/ping")
        .json(&json!({"ping": "x".repeat(3 << 20), "pong": "y"}))
        .await;

    response.assert_status_ok();
    response.assert_json(&fixed_response());
}

#[tokio::test]
async fn test_body_over_limit() {
    let config = ServerConfig {
        body_limit: 64,
        ..ServerConfig::default()
    };
    let server = TestServer::new(create_router(&config)).expect("Failed to create test server");

    let response = server
        .put("/ping")
        .json(&json!({"ping": "x".repeat(128), "pong": "y"}))
        .await;

    response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
    assert!(!response.text().contains("Field required"));
}
