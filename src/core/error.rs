//! Purpose: Structured error model for parse, path, and coercion failures.
//! Exports: `Error`, `ErrorKind`.
//! Role: Single error type shared by the decoding core and the HTTP boundary.
//! Invariants: A path failure identifies exactly one segment, never the whole tree.
//! Invariants: `reason()` wording is stable; the wire envelope is built from it.

use std::error::Error as StdError;
use std::fmt;

use crate::core::value::Kind;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// Payload bytes are not well-formed for the declared media type.
    Parse,
    /// The declared media type is not decodable.
    UnsupportedMedia,
    /// A key segment was applied to an object that lacks the key.
    KeyNotFound,
    /// An index segment was applied past the end of an array.
    IndexOutOfBounds,
    /// A segment was applied to a node of the wrong kind.
    TypeMismatch,
    /// A resolved node could not be converted to the requested type.
    Coercion,
}

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: Option<String>,
    segment: Option<usize>,
    key: Option<String>,
    index: Option<usize>,
    len: Option<usize>,
    expected: Option<&'static str>,
    found: Option<Kind>,
    source: Option<Box<dyn StdError + Send + Sync>>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
            segment: None,
            key: None,
            index: None,
            len: None,
            expected: None,
            found: None,
            source: None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn segment(&self) -> Option<usize> {
        self.segment
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn len(&self) -> Option<usize> {
        self.len
    }

    pub fn expected(&self) -> Option<&'static str> {
        self.expected
    }

    pub fn found(&self) -> Option<Kind> {
        self.found
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_segment(mut self, segment: usize) -> Self {
        self.segment = Some(segment);
        self
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    pub fn with_len(mut self, len: usize) -> Self {
        self.len = Some(len);
        self
    }

    pub fn with_expected(mut self, expected: &'static str) -> Self {
        self.expected = Some(expected);
        self
    }

    pub fn with_found(mut self, found: Kind) -> Self {
        self.found = Some(found);
        self
    }

    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// User-facing failure description. Explicit messages win; otherwise the
    /// wording is derived from the structured context.
    pub fn reason(&self) -> String {
        if let Some(message) = &self.message {
            return message.clone();
        }
        match self.kind {
            ErrorKind::Parse => "payload is not well-formed for its media type".to_string(),
            ErrorKind::UnsupportedMedia => "unsupported media type".to_string(),
            ErrorKind::KeyNotFound => match &self.key {
                Some(key) => format!("key '{key}' not found"),
                None => "key not found".to_string(),
            },
            ErrorKind::IndexOutOfBounds => match (self.index, self.len) {
                (Some(index), Some(len)) => {
                    format!("index {index} out of bounds for array of length {len}")
                }
                _ => "index out of bounds".to_string(),
            },
            ErrorKind::TypeMismatch => match (self.expected, self.found) {
                (Some(expected), Some(found)) => format!("expected {expected}, found {found}"),
                _ => "type mismatch".to_string(),
            },
            ErrorKind::Coercion => match (self.expected, self.found) {
                (Some(expected), Some(found)) => format!("cannot coerce {found} to {expected}"),
                _ => "coercion failed".to_string(),
            },
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.reason())?;
        if let Some(segment) = self.segment {
            write!(f, " (segment: {segment})")?;
        }
        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|source| source.as_ref() as &(dyn StdError + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::{Error, ErrorKind};
    use crate::core::value::Kind;

    #[test]
    fn explicit_message_wins_over_derived_wording() {
        let err = Error::new(ErrorKind::KeyNotFound)
            .with_key("hello")
            .with_message("custom wording");
        assert_eq!(err.reason(), "custom wording");
    }

    #[test]
    fn derived_wording_is_stable() {
        let cases = [
            (
                Error::new(ErrorKind::KeyNotFound).with_key("hello"),
                "key 'hello' not found",
            ),
            (
                Error::new(ErrorKind::IndexOutOfBounds)
                    .with_index(7)
                    .with_len(4),
                "index 7 out of bounds for array of length 4",
            ),
            (
                Error::new(ErrorKind::TypeMismatch)
                    .with_expected(Kind::Object.as_str())
                    .with_found(Kind::Array),
                "expected object, found array",
            ),
            (
                Error::new(ErrorKind::Coercion)
                    .with_expected("Int")
                    .with_found(Kind::String),
                "cannot coerce string to Int",
            ),
        ];

        for (err, reason) in cases {
            assert_eq!(err.reason(), reason);
        }
    }

    #[test]
    fn display_appends_failing_segment_position() {
        let err = Error::new(ErrorKind::KeyNotFound)
            .with_key("batter")
            .with_segment(2);
        assert_eq!(
            err.to_string(),
            "KeyNotFound: key 'batter' not found (segment: 2)"
        );
    }
}
