//! The `{ "data": ... }` envelope every successful handler returns.
//!
//! Success bodies are wrapped so clients can distinguish payloads from the
//! `{ "error": ..., "code": ... }` shape that [`crate::error::AppError`]
//! produces. Handlers return [`DataResponse`] rather than hand-built
//! `serde_json::json!` maps so the payload type stays visible in signatures.

use serde::Serialize;

/// Success envelope: serializes as `{ "data": T }`.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
