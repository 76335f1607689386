//! Pingpong Core Library
//!
//! Wire types shared by the ping service and its client, plus the request
//! body validation that produces structured 422 payloads.

pub mod error;
pub mod schema;
pub mod types;

pub use error::{HttpValidationError, Result};
pub use schema::{parse_body, Schema};
pub use types::{Location, PingRequest, PingResponse, ValidationError};
