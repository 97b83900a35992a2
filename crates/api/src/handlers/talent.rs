//! Read handlers for talents and their taxonomy display paths.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use callsheet_core::taxonomy;
use callsheet_db::models::talent::TalentWithPath;
use callsheet_db::repositories::{TalentCategoryRepo, TalentRepo};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /talents
// ---------------------------------------------------------------------------

/// List all talents with their computed taxonomy paths.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let talents = TalentRepo::list(&state.pool).await?;
    let snapshot = TalentCategoryRepo::list_all(&state.pool).await?;
    let nodes: Vec<_> = snapshot.iter().map(|c| c.to_path_node()).collect();

    let mut items = Vec::with_capacity(talents.len());
    for talent in talents {
        let category_path = match talent.category_id {
            Some(category_id) => taxonomy::category_path(&nodes, category_id)?,
            None => String::new(),
        };
        items.push(TalentWithPath {
            talent,
            category_path,
        });
    }

    Ok(Json(DataResponse { data: items }))
}
