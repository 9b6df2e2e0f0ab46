//! Purpose: Parse boundary from raw payload bytes to a JSON value tree.
//! Exports: `MediaType`, `Kind`, `parse`.
//! Role: Centralizes serde_json usage and node-kind tagging for diagnostics.
//! Invariants: Parsing is deterministic and never mutates the input bytes.
//! Invariants: Duplicate object keys resolve to the last occurrence.

use std::fmt;

use serde_json::Value;

use crate::core::error::{Error, ErrorKind};

/// Media types the decoding pipeline understands. Only the JSON shape is in
/// scope; anything else is refused at the parse boundary.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MediaType {
    Json,
}

impl MediaType {
    /// Accepts a content-type string, ignoring parameters such as `charset`.
    pub fn parse(content_type: &str) -> Result<Self, Error> {
        let essence = content_type.split(';').next().unwrap_or_default().trim();
        if essence.eq_ignore_ascii_case("application/json") {
            Ok(Self::Json)
        } else {
            Err(Error::new(ErrorKind::UnsupportedMedia)
                .with_message(format!("cannot decode media type '{essence}'")))
        }
    }
}

/// Node kind of a parsed value, used for error reporting.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Kind {
    Object,
    Array,
    String,
    Number,
    Bool,
    Null,
}

impl Kind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Object(_) => Self::Object,
            Value::Array(_) => Self::Array,
            Value::String(_) => Self::String,
            Value::Number(_) => Self::Number,
            Value::Bool(_) => Self::Bool,
            Value::Null => Self::Null,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Object => "object",
            Self::Array => "array",
            Self::String => "string",
            Self::Number => "number",
            Self::Bool => "bool",
            Self::Null => "null",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses payload bytes into a value tree. One tree per inbound payload; the
/// tree is read-only from here on.
pub fn parse(bytes: &[u8], media: MediaType) -> Result<Value, Error> {
    match media {
        MediaType::Json => serde_json::from_slice(bytes).map_err(|err| {
            Error::new(ErrorKind::Parse)
                .with_message("payload is not well-formed JSON")
                .with_source(err)
        }),
    }
}
