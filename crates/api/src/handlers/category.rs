//! Read-only handlers for event categories and their template collections.
//!
//! Category authoring is owned by an upstream collaborator; this service
//! reads categories to drive template instantiation and to show what a
//! category would stamp onto a new production.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use callsheet_core::error::CoreError;
use callsheet_core::types::DbId;
use callsheet_db::models::category::Category;
use callsheet_db::repositories::{CategoryRepo, TemplateRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Verify that a category exists, returning the full row.
async fn ensure_category_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<Category> {
    CategoryRepo::find_by_id(pool, id).await?.ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        })
    })
}

// ---------------------------------------------------------------------------
// GET /categories
// ---------------------------------------------------------------------------

/// List all event categories.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = CategoryRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// GET /categories/{id}
// ---------------------------------------------------------------------------

/// Get a single category by ID.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let category = ensure_category_exists(&state.pool, id).await?;
    Ok(Json(DataResponse { data: category }))
}

// ---------------------------------------------------------------------------
// GET /categories/{id}/templates
// ---------------------------------------------------------------------------

/// Get all three template collections for a category.
pub async fn get_templates(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_category_exists(&state.pool, id).await?;
    let bundle = TemplateRepo::load_bundle(&state.pool, id).await?;
    Ok(Json(DataResponse { data: bundle }))
}
