//! Structured payload attached to a log call
//!
//! The optional `data` argument of a log call is an explicit tagged variant
//! rather than a runtime type test: a scalar is appended inline after the
//! message, a structured value is rendered as an indented block on the
//! following lines. Absence is expressed as `Option<Payload>` at call sites.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// A plain string-like value, appended after a single space
    Scalar(String),
    /// A record/sequence value, appended as pretty-printed JSON on new lines
    Structured(serde_json::Value),
}

impl Payload {
    /// Build a structured payload from any serializable value.
    ///
    /// Serialization failure never propagates: a value that cannot be
    /// converted to JSON falls back to its scalar string representation, so
    /// the surrounding log call still succeeds.
    pub fn structured<T: Serialize + fmt::Debug>(value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(json) => Payload::Structured(json),
            Err(_) => Payload::Scalar(format!("{:?}", value)),
        }
    }

    /// Render this payload the way the formatter appends it to a message.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Payload::Scalar(s) => format!(" {}", s),
            Payload::Structured(value) => {
                // to_string_pretty on an in-memory Value cannot fail, but the
                // fallback keeps logging total regardless.
                match serde_json::to_string_pretty(value) {
                    Ok(pretty) => format!("\n{}", pretty),
                    Err(_) => format!(" {}", value),
                }
            }
        }
    }
}

impl From<&str> for Payload {
    fn from(s: &str) -> Self {
        Payload::Scalar(s.to_string())
    }
}

impl From<String> for Payload {
    fn from(s: String) -> Self {
        Payload::Scalar(s)
    }
}

impl From<serde_json::Value> for Payload {
    fn from(value: serde_json::Value) -> Self {
        Payload::Structured(value)
    }
}
