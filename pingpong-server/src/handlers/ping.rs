//! `/ping` handlers
//!
//! Every operation answers with the same fixed body. The request body is
//! validated for POST, PUT and DELETE and then ignored.

use crate::extract::ValidatedJson;
use axum::Json;
use pingpong_core::{PingRequest, PingResponse};

/// `GET /ping`
pub async fn get_ping() -> Json<PingResponse> {
    tracing::debug!("GET /ping");
    Json(PingResponse::pong())
}

/// `POST /ping`
pub async fn post_ping(ValidatedJson(request): ValidatedJson<PingRequest>) -> Json<PingResponse> {
    tracing::debug!(ping = %request.ping, pong = %request.pong, "POST /ping");
    Json(PingResponse::pong())
}

/// `PUT /ping`, same behavior as POST
pub async fn put_ping(ValidatedJson(request): ValidatedJson<PingRequest>) -> Json<PingResponse> {
    tracing::debug!(ping = %request.ping, pong = %request.pong, "PUT /ping");
    Json(PingResponse::pong())
}

/// `DELETE /ping`
pub async fn delete_ping(
    ValidatedJson(request): ValidatedJson<PingRequest>,
) -> Json<PingResponse> {
    tracing::debug!(ping = %request.ping, pong = %request.pong, "DELETE /ping");
    Json(PingResponse::pong())
}
