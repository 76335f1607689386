//! API routes

use crate::config::{CorsOrigins, ServerConfig};
use crate::handlers;
use axum::{extract::DefaultBodyLimit, http::HeaderValue, routing::get, Router};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

const LOCALHOST_ORIGINS: &[&str] = &[
    "http://localhost:8000",
    "http://localhost:3000",
    "http://127.0.0.1:8000",
    "http://127.0.0.1:3000",
];

fn cors_layer(origins: &CorsOrigins) -> CorsLayer {
    let allow_origin = match origins {
        CorsOrigins::Any => AllowOrigin::any(),
        CorsOrigins::List(list) => AllowOrigin::list(
            list.iter()
                .filter_map(|origin| match origin.parse::<HeaderValue>() {
                    Ok(value) => Some(value),
                    Err(_) => {
                        tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                        None
                    }
                }),
        ),
        CorsOrigins::Localhost => AllowOrigin::list(
            LOCALHOST_ORIGINS
                .iter()
                .map(|origin| HeaderValue::from_static(origin)),
        ),
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Create the application router
pub fn create_router(config: &ServerConfig) -> Router {
    Router::new()
        .route(
            "/ping",
            get(handlers::get_ping)
                .post(handlers::post_ping)
                .put(handlers::put_ping)
                .delete(handlers::delete_ping),
        )
        .layer(DefaultBodyLimit::max(config.body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.cors_origins))
}
