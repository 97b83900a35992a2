//! Route definitions for the read-only `/categories` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::category;
use crate::state::AppState;

/// Routes mounted at `/categories`.
///
/// ```text
/// GET /                 -> list
/// GET /{id}             -> get_by_id
/// GET /{id}/templates   -> get_templates (all three collections)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(category::list))
        .route("/{id}", get(category::get_by_id))
        .route("/{id}/templates", get(category::get_templates))
}
