//! Purpose: Path-addressed JSON content decoding used by HTTP request pipelines.
//! Exports: `api` (stable public boundary) and `core` (decoding internals).
//! Role: Library an external HTTP framework calls to decode bodies and queries.
//! Invariants: Core operations are pure, synchronous, and reentrant; no I/O below the API.
//! Invariants: Wire-facing error wording is stable; see `api::reject`.
pub mod api;
pub mod core;
