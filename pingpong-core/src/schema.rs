//! Request body validation
//!
//! Bodies are parsed to a JSON value first so that every problem can be
//! reported with its location, instead of stopping at the first serde error.

use crate::error::{HttpValidationError, Result};
use crate::types::{Location, ValidationError};
use serde::de::DeserializeOwned;
use serde_json::Value;

const BODY: &str = "body";

/// A JSON object body with required string fields
pub trait Schema: DeserializeOwned {
    const REQUIRED_STRINGS: &'static [&'static str];
}

/// Parse and validate a raw request body
pub fn parse_body<T: Schema>(bytes: &[u8]) -> Result<T> {
    if bytes.is_empty() {
        return Err(single(vec![BODY.into()], "Field required", "missing"));
    }

    let value: Value = serde_json::from_slice(bytes).map_err(|e| {
        single(
            vec![BODY.into(), error_offset(bytes, e.line(), e.column()).into()],
            "JSON decode error",
            "json_invalid",
        )
    })?;

    let Value::Object(fields) = &value else {
        return Err(single(
            vec![BODY.into()],
            "Input should be a valid dictionary or object to extract fields from",
            "model_attributes_type",
        ));
    };

    let detail: Vec<ValidationError> = T::REQUIRED_STRINGS
        .iter()
        .filter_map(|&name| match fields.get(name) {
            None => Some(ValidationError::new(
                vec![BODY.into(), name.into()],
                "Field required",
                "missing",
            )),
            Some(Value::String(_)) => None,
            Some(_) => Some(ValidationError::new(
                vec![BODY.into(), name.into()],
                "Input should be a valid string",
                "string_type",
            )),
        })
        .collect();

    if !detail.is_empty() {
        return Err(HttpValidationError::new(detail));
    }

    serde_json::from_value(value)
        .map_err(|e| single(vec![BODY.into()], e.to_string(), "value_error"))
}

/// Character offset into the body for a 1-based line and column
fn error_offset(bytes: &[u8], line: usize, column: usize) -> usize {
    let line_start: usize = bytes
        .split(|&b| b == b'\n')
        .take(line.saturating_sub(1))
        .map(|l| l.len() + 1)
        .sum();
    let end = (line_start + column.saturating_sub(1)).min(bytes.len());

    match std::str::from_utf8(&bytes[..end]) {
        Ok(prefix) => prefix.chars().count(),
        Err(_) => end,
    }
}

fn single(loc: Vec<Location>, msg: impl Into<String>, kind: &str) -> HttpValidationError {
    HttpValidationError::new(vec![ValidationError::new(loc, msg, kind)])
}
