//! Request and response bodies

use crate::schema::Schema;
use serde::{Deserialize, Serialize};

/// Body accepted by `POST`, `PUT` and `DELETE /ping`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PingRequest {
    pub ping: String,
    pub pong: String,
}

impl PingRequest {
    pub fn new(ping: impl Into<String>, pong: impl Into<String>) -> Self {
        Self {
            ping: ping.into(),
            pong: pong.into(),
        }
    }
}

impl Schema for PingRequest {
    const REQUIRED_STRINGS: &'static [&'static str] = &["ping", "pong"];
}

/// Body returned by every `/ping` operation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PingResponse {
    pub ping: String,
    pub pong: String,
}

impl PingResponse {
    /// The fixed reply, independent of whatever the caller sent
    pub fn pong() -> Self {
        Self {
            ping: "ping".to_string(),
            pong: "pong".to_string(),
        }
    }
}
