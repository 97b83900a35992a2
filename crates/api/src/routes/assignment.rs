//! Route definitions for assignment mutations addressed by assignment id.

use axum::routing::patch;
use axum::Router;

use crate::handlers::staffing;
use crate::state::AppState;

/// Routes mounted at `/assignments`.
///
/// ```text
/// PATCH  /{id}   -> update_assignment (note/status)
/// DELETE /{id}   -> remove_assignment
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        patch(staffing::update_assignment).delete(staffing::remove_assignment),
    )
}
