//! Status/body pair produced by every handler.

use serde::Serialize;
use serde_json::{json, Value};

#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: u16,
    pub body: Value,
}

impl Response {
    pub fn ok(body: Value) -> Self {
        Self { status: 200, body }
    }

    /// Success with a `null` body, the shape of every mutating endpoint.
    pub fn ok_empty() -> Self {
        Self::ok(Value::Null)
    }

    /// Success with a serialized body. A response type failing to
    /// serialize is an internal error.
    pub fn json(body: impl Serialize) -> Self {
        match serde_json::to_value(body) {
            Ok(value) => Self::ok(value),
            Err(err) => Self::internal_error(err),
        }
    }

    pub fn bad_request(message: &str) -> Self {
        Self {
            status: 400,
            body: json!({ "error": message }),
        }
    }

    pub fn internal_error(err: impl std::fmt::Display) -> Self {
        Self {
            status: 500,
            body: json!({ "error": err.to_string() }),
        }
    }
}
