//! Purpose: Map decode failures onto the fixed HTTP error envelope.
//! Exports: `ErrorEnvelope`, `status_for`; `IntoResponse` for `Error`.
//! Role: Response-side contract consumed by the framework's formatting layer.
//! Invariants: Decode failures serialize exactly as `{"error":true,"reason":"..."}`.
//! Invariants: Unsupported media maps to 415; every other failure to 400.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::core::error::{Error, ErrorKind};

/// The wire error body. Field order matters: consumers match the serialized
/// form byte-for-byte.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub error: bool,
    pub reason: String,
}

impl ErrorEnvelope {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            error: true,
            reason: reason.into(),
        }
    }
}

pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::UnsupportedMedia => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        ErrorKind::Parse
        | ErrorKind::KeyNotFound
        | ErrorKind::IndexOutOfBounds
        | ErrorKind::TypeMismatch
        | ErrorKind::Coercion => StatusCode::BAD_REQUEST,
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = status_for(self.kind());
        tracing::debug!(kind = ?self.kind(), status = %status, "decode failure became error response");
        (status, Json(ErrorEnvelope::new(self.reason()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::{ErrorEnvelope, status_for};
    use crate::core::error::ErrorKind;
    use axum::http::StatusCode;

    #[test]
    fn envelope_serialization_is_byte_exact() {
        let envelope = ErrorEnvelope::new("Value of type 'Int' required for key 'bar'.");
        assert_eq!(
            serde_json::to_string(&envelope).unwrap(),
            r#"{"error":true,"reason":"Value of type 'Int' required for key 'bar'."}"#
        );
    }

    #[test]
    fn status_mapping_is_stable() {
        let cases = [
            (ErrorKind::Parse, StatusCode::BAD_REQUEST),
            (ErrorKind::UnsupportedMedia, StatusCode::UNSUPPORTED_MEDIA_TYPE),
            (ErrorKind::KeyNotFound, StatusCode::BAD_REQUEST),
            (ErrorKind::IndexOutOfBounds, StatusCode::BAD_REQUEST),
            (ErrorKind::TypeMismatch, StatusCode::BAD_REQUEST),
            (ErrorKind::Coercion, StatusCode::BAD_REQUEST),
        ];

        for (kind, status) in cases {
            assert_eq!(status_for(kind), status);
        }
    }
}
