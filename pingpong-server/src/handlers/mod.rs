//! Request handlers

mod ping;

pub use ping::*;
