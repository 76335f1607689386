//! Wire types for the `/ping` endpoint

mod ping;
mod validation;

pub use ping::{PingRequest, PingResponse};
pub use validation::{Location, ValidationError};
