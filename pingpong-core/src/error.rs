//! Error types for Pingpong Core

use crate::types::ValidationError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias using HttpValidationError
pub type Result<T> = std::result::Result<T, HttpValidationError>;

/// Request body failed schema validation; serialized as the 422 payload
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[error("request validation failed with {} error(s)", .detail.len())]
pub struct HttpValidationError {
    pub detail: Vec<ValidationError>,
}

impl HttpValidationError {
    pub fn new(detail: Vec<ValidationError>) -> Self {
        Self { detail }
    }

    /// Whether any entry points at the given body field
    pub fn mentions(&self, field: &str) -> bool {
        self.detail.iter().any(|e| e.refers_to(field))
    }
}
