//! HTTP error responses

use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pingpong_core::HttpValidationError;
use thiserror::Error;

/// Errors a `/ping` handler can return
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] HttpValidationError),

    /// The body could not be read (too large, connection dropped)
    #[error(transparent)]
    Body(#[from] BytesRejection),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Body(rejection) => rejection.status(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            ApiError::Validation(err) => {
                tracing::warn!(
                    status = status.as_u16(),
                    errors = err.detail.len(),
                    "Rejected request body"
                );
                (status, Json(err)).into_response()
            }
            ApiError::Body(rejection) => {
                tracing::warn!(
                    status = status.as_u16(),
                    error = %rejection.body_text(),
                    "Failed to read request body"
                );
                rejection.into_response()
            }
        }
    }
}
