//! Purpose: Per-request payload handle mirroring the framework's content API.
//! Exports: `Content`, `Document`.
//! Role: Tie raw body bytes, declared media type, and the parsed tree together.
//! Invariants: A payload is parsed once; the resulting tree is read-only.
//! Invariants: Nothing here is shared across requests.

use bytes::Bytes;
use serde_json::Value;

use crate::core::decode::{DecodeFields, Leaf, coerce, decode_at, extract};
use crate::core::error::Error;
use crate::core::path::{Segment, resolve};
use crate::core::value::{MediaType, parse};

/// Raw request content: body bytes plus the declared media type.
#[derive(Clone, Debug)]
pub struct Content {
    bytes: Bytes,
    media: MediaType,
}

impl Content {
    pub fn new(bytes: impl Into<Bytes>, media: MediaType) -> Self {
        Self {
            bytes: bytes.into(),
            media,
        }
    }

    /// Convenience constructor for the only in-scope media type.
    pub fn json(bytes: impl Into<Bytes>) -> Self {
        Self::new(bytes, MediaType::Json)
    }

    pub fn media(&self) -> MediaType {
        self.media
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Parses the payload into a document. Callers hold the document for the
    /// life of the request and address it repeatedly without re-parsing.
    pub fn decode(&self) -> Result<Document, Error> {
        parse(&self.bytes, self.media).map(Document::new)
    }
}

/// A parsed payload, addressed by path.
#[derive(Clone, Debug)]
pub struct Document {
    root: Value,
}

impl Document {
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Returns the subtree at `path`; the empty path yields the whole body.
    pub fn resolve(&self, path: &[Segment]) -> Result<&Value, Error> {
        resolve(&self.root, path)
    }

    /// Typed fetch: resolve `path`, then convert the node to `T`.
    pub fn get<T: Leaf>(&self, path: &[Segment]) -> Result<T, Error> {
        extract(&self.root, path)
    }

    /// Decodes the subtree at `path` as a record.
    pub fn decode_at<T: DecodeFields>(&self, path: &[Segment]) -> Result<T, Error> {
        decode_at(&self.root, path)
    }

    /// Decodes the whole body as a record.
    pub fn decode_as<T: DecodeFields>(&self) -> Result<T, Error> {
        T::decode_fields(&self.root)
    }

    /// Coerces the root itself, for scalar payloads.
    pub fn as_leaf<T: Leaf>(&self) -> Result<T, Error> {
        coerce(&self.root)
    }
}
