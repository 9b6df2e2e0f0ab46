//! Purpose: Define the stable public boundary for the decoding pipeline.
//! Exports: Content/query types and operations needed by framework callers.
//! Role: Public, additive-only surface over the core modules.
//! Invariants: This module is the only path callers need; core stays an implementation detail.

mod content;
mod reject;

pub use crate::core::decode::{DecodeFields, Leaf, coerce, decode_at, extract, required_field};
pub use crate::core::error::{Error, ErrorKind};
pub use crate::core::path::{Segment, resolve};
pub use crate::core::query::Query;
pub use crate::core::value::{Kind, MediaType, parse};
pub use content::{Content, Document};
pub use reject::{ErrorEnvelope, status_for};
