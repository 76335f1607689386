//! Pingpong Client Library
//!
//! A thin typed wrapper over `reqwest` with one method per `/ping` operation.

pub mod client;
pub mod config;
pub mod error;

pub use client::PingClient;
pub use config::Configuration;
pub use error::{ClientError, Result};
pub use pingpong_core::{HttpValidationError, PingRequest, PingResponse};
