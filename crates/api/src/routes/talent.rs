//! Route definitions for the read-only `/talents` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::talent;
use crate::state::AppState;

/// Routes mounted at `/talents`.
///
/// ```text
/// GET / -> list (with computed taxonomy paths)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(talent::list))
}
