//! Error types for the client

use pingpong_core::HttpValidationError;
use reqwest::StatusCode;
use thiserror::Error;

/// Result type alias using ClientError
pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The service answered with a non-2xx status
    #[error("API error ({status}): {body}")]
    Api { status: StatusCode, body: String },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A 2xx body that is not a PingResponse
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// HTTP status, if the service responded at all
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Transport(e) => e.status(),
            ClientError::Decode(_) => None,
        }
    }

    /// Structured detail for a 422 response
    pub fn validation_detail(&self) -> Option<HttpValidationError> {
        match self {
            ClientError::Api { status, body } if *status == StatusCode::UNPROCESSABLE_ENTITY => {
                serde_json::from_str(body).ok()
            }
            _ => None,
        }
    }
}
