//! Route definitions for the `/productions` resource.
//!
//! Also mounts the production-scoped snapshot collections and staffing
//! routes under `/productions/{id}/...`.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::{production, staffing};
use crate::state::AppState;

/// Routes mounted at `/productions`.
///
/// ```text
/// GET    /                         -> list
/// POST   /                         -> create (optional template apply)
/// GET    /{id}                     -> get_by_id
/// PUT    /{id}                     -> update
/// DELETE /{id}                     -> delete
///
/// GET    /{id}/demand              -> list_demand
/// POST   /{id}/demand              -> add_demand
/// DELETE /{id}/demand/{demand_id}  -> delete_demand
/// GET    /{id}/plan                -> list_plan
/// GET    /{id}/check-ins           -> list_check_ins
///
/// GET    /{id}/staffing            -> list_staffing (derived fulfillment)
/// POST   /{id}/assignments         -> add_assignment
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(production::list).post(production::create))
        .route(
            "/{id}",
            get(production::get_by_id)
                .put(production::update)
                .delete(production::delete),
        )
        .route(
            "/{id}/demand",
            get(production::list_demand).post(production::add_demand),
        )
        .route(
            "/{id}/demand/{demand_id}",
            delete(production::delete_demand),
        )
        .route("/{id}/plan", get(production::list_plan))
        .route("/{id}/check-ins", get(production::list_check_ins))
        .route("/{id}/staffing", get(staffing::list_staffing))
        .route("/{id}/assignments", post(staffing::add_assignment))
}
