//! Validation error entries (one per offending location)

use serde::{Deserialize, Serialize};

/// One segment of an error location, e.g. `["body", "pong"]` or `["body", 7]`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Location {
    Index(usize),
    Field(String),
}

impl From<&str> for Location {
    fn from(field: &str) -> Self {
        Location::Field(field.to_string())
    }
}

impl From<usize> for Location {
    fn from(index: usize) -> Self {
        Location::Index(index)
    }
}

/// A single schema-validation failure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationError {
    /// Path to the offending value, rooted at `"body"`
    pub loc: Vec<Location>,

    /// Human-readable message
    pub msg: String,

    /// Machine-readable error kind (`missing`, `string_type`, ...)
    #[serde(rename = "type")]
    pub kind: String,
}

impl ValidationError {
    pub fn new(loc: Vec<Location>, msg: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            loc,
            msg: msg.into(),
            kind: kind.into(),
        }
    }

    /// Whether this error points at the given body field
    pub fn refers_to(&self, field: &str) -> bool {
        matches!(self.loc.last(), Some(Location::Field(f)) if f == field)
    }
}
