//! Purpose: Path segments and the left-to-right tree walk.
//! Exports: `Segment`, `resolve`, and the `path!` construction macro.
//! Role: Addressing layer between a parsed tree and typed extraction.
//! Invariants: Resolution short-circuits on the first failing segment.
//! Invariants: Key lookup is exact and case-sensitive.

use std::fmt;

use serde_json::Value;

use crate::core::error::{Error, ErrorKind};
use crate::core::value::Kind;

/// One step of descent into a value tree: an object key or an array index.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Segment {
    Key(String),
    Index(usize),
}

impl From<&str> for Segment {
    fn from(key: &str) -> Self {
        Self::Key(key.to_string())
    }
}

impl From<String> for Segment {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

impl From<usize> for Segment {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => write!(f, "'{key}'"),
            Self::Index(index) => write!(f, "[{index}]"),
        }
    }
}

/// Builds a `[Segment; N]` from mixed string keys and integer indices, so
/// call sites read like the framework's variadic `get(at: ...)`.
#[macro_export]
macro_rules! path {
    ($($segment:expr),* $(,)?) => {
        [$($crate::core::path::Segment::from($segment)),*]
    };
}

/// Walks `path` from the root, returning the addressed node. The empty path
/// resolves to the root itself. On failure the error carries the position of
/// the failing segment; later segments are never inspected.
pub fn resolve<'tree>(root: &'tree Value, path: &[Segment]) -> Result<&'tree Value, Error> {
    let mut current = root;
    for (position, segment) in path.iter().enumerate() {
        current = match (segment, current) {
            (Segment::Key(key), Value::Object(map)) => map.get(key).ok_or_else(|| {
                Error::new(ErrorKind::KeyNotFound)
                    .with_key(key.clone())
                    .with_segment(position)
            })?,
            (Segment::Key(_), other) => {
                return Err(Error::new(ErrorKind::TypeMismatch)
                    .with_expected(Kind::Object.as_str())
                    .with_found(Kind::of(other))
                    .with_segment(position));
            }
            (Segment::Index(index), Value::Array(items)) => {
                items.get(*index).ok_or_else(|| {
                    Error::new(ErrorKind::IndexOutOfBounds)
                        .with_index(*index)
                        .with_len(items.len())
                        .with_segment(position)
                })?
            }
            (Segment::Index(_), other) => {
                return Err(Error::new(ErrorKind::TypeMismatch)
                    .with_expected(Kind::Array.as_str())
                    .with_found(Kind::of(other))
                    .with_segment(position));
            }
        };
    }
    Ok(current)
}
