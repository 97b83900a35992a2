pub mod assignment;
pub mod category;
pub mod health;
pub mod production;
pub mod talent;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /categories      read-only categories + template bundles
/// /talents         read-only talents with taxonomy paths
/// /productions     production CRUD, snapshot collections, staffing
/// /assignments     assignment update/delete by id
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/categories", category::router())
        .nest("/talents", talent::router())
        .nest("/productions", production::router())
        .nest("/assignments", assignment::router())
}
