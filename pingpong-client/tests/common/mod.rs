//! Shared helpers for the client integration tests

#![allow(dead_code)]

use axum::{http::StatusCode, routing::any, Json, Router};
use pingpong_core::{HttpValidationError, ValidationError};
use pingpong_server::{config::ServerConfig, routes::create_router};

/// Serve `app` on an ephemeral port from a background runtime and return its base URL
pub fn spawn_server(app: Router) -> String {
    let listener =
        std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind test listener");
    listener.set_nonblocking(true).unwrap();
    let addr = listener.local_addr().unwrap();

    std::thread::spawn(move || {
        let runtime = tokio::runtime::Runtime::new().expect("Failed to build runtime");
        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::from_std(listener).unwrap();
            axum::serve(listener, app).await.unwrap();
        });
    });

    format!("http://{}", addr)
}

/// The real service with default configuration
pub fn spawn_ping_server() -> String {
    spawn_server(create_router(&ServerConfig::default()))
}

/// A service that answers every `/ping` call with a 422 about `pong`
pub fn spawn_rejecting_server() -> String {
    async fn reject() -> (StatusCode, Json<HttpValidationError>) {
        let detail = vec![ValidationError::new(
            vec!["body".into(), "pong".into()],
            "Field required",
            "missing",
        )];
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(HttpValidationError::new(detail)),
        )
    }

    spawn_server(Router::new().route("/ping", any(reject)))
}
