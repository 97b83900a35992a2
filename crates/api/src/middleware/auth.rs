//! Caller identity extractor for Axum handlers.
//!
//! Authentication itself is owned by the upstream gateway; by the time a
//! request reaches this service it carries the authenticated actor's id in
//! the `x-user-id` header. This extractor only reads "who is calling" for
//! audit logging on mutations.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use callsheet_core::types::DbId;

use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user identity forwarded by the gateway.
///
/// Use this as an extractor parameter in any handler that mutates state:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The caller's internal database id.
    pub user_id: DbId,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get("x-user-id")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::Unauthorized("Missing x-user-id header".into()))?;

        let user_id: DbId = header
            .parse()
            .map_err(|_| AppError::Unauthorized("Invalid x-user-id header".into()))?;

        Ok(AuthUser { user_id })
    }
}
