//! Handlers for productions and their snapshot collections.
//!
//! Creation optionally instantiates a category's templates into the new
//! production as one atomic write; the demand collection can also be
//! populated manually afterwards.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use callsheet_core::error::CoreError;
use callsheet_core::types::DbId;
use callsheet_db::models::demand::{AddDemandRequest, NewTalentDemand};
use callsheet_db::models::production::{
    CreateProduction, CreateProductionRequest, Production, UpdateProduction,
};
use callsheet_db::repositories::{
    CategoryRepo, CheckInRepo, DemandRepo, InstantiationSummary, PlanRepo, ProductionRepo,
    TalentCategoryRepo, TalentRepo,
};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Response payload for production creation.
#[derive(Debug, Serialize)]
pub struct ProductionCreated {
    pub production: Production,
    /// Present only when templates were applied.
    pub instantiation: Option<InstantiationSummary>,
}

/// Verify that a production exists, returning the full row.
async fn ensure_production_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<Production> {
    ProductionRepo::find_by_id(pool, id).await?.ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "Production",
            id,
        })
    })
}

// ---------------------------------------------------------------------------
// POST /productions
// ---------------------------------------------------------------------------

/// Create a new production.
///
/// With `apply_template: true` and a `category_id`, the category's demand,
/// plan, and check-in templates are instantiated into the production inside
/// the same transaction as the production row itself: the creation either
/// fully succeeds or leaves nothing behind.
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<CreateProductionRequest>,
) -> AppResult<impl IntoResponse> {
    let input = CreateProduction {
        name: body.name.clone(),
        starts_at: body.starts_at,
        description: body.description.clone(),
        location: body.location.clone(),
    };

    let created = if body.apply_template {
        let category_id = body.category_id.ok_or_else(|| {
            AppError::Core(CoreError::Validation(
                "apply_template requires a category_id".to_string(),
            ))
        })?;

        let (production, summary) =
            ProductionRepo::create_with_template(&state.pool, &input, category_id).await?;

        tracing::info!(
            production_id = production.id,
            category_id,
            demand_count = summary.demand_count,
            plan_node_count = summary.plan_node_count,
            check_in_count = summary.check_in_count,
            user_id = auth.user_id,
            "Production created from template"
        );

        ProductionCreated {
            production,
            instantiation: Some(summary),
        }
    } else {
        // The location may still default from the category even when no
        // template is applied.
        let mut input = input;
        if input.location.is_none() {
            if let Some(category_id) = body.category_id {
                input.location = CategoryRepo::find_by_id(&state.pool, category_id)
                    .await?
                    .and_then(|c| c.default_location);
            }
        }

        let production = ProductionRepo::create(&state.pool, &input).await?;
        tracing::info!(
            production_id = production.id,
            user_id = auth.user_id,
            "Production created without template"
        );

        ProductionCreated {
            production,
            instantiation: None,
        }
    };

    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

// ---------------------------------------------------------------------------
// GET /productions
// ---------------------------------------------------------------------------

/// List all productions, soonest start first.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = ProductionRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// GET /productions/{id}
// ---------------------------------------------------------------------------

/// Get a single production by ID.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let production = ensure_production_exists(&state.pool, id).await?;
    Ok(Json(DataResponse { data: production }))
}

// ---------------------------------------------------------------------------
// PUT /productions/{id}
// ---------------------------------------------------------------------------

/// Update a production's mutable fields.
///
/// Check-in entries keep their original absolute instants even when
/// `starts_at` changes.
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    Json(body): Json<UpdateProduction>,
) -> AppResult<impl IntoResponse> {
    let production = ProductionRepo::update(&state.pool, id, &body)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Production",
                id,
            })
        })?;

    tracing::info!(production_id = id, user_id = auth.user_id, "Production updated");
    Ok(Json(DataResponse { data: production }))
}

// ---------------------------------------------------------------------------
// DELETE /productions/{id}
// ---------------------------------------------------------------------------

/// Delete a production. Snapshot collections and assignments cascade.
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !ProductionRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Production",
            id,
        }));
    }
    tracing::info!(production_id = id, user_id = auth.user_id, "Production deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// GET /productions/{id}/demand
// ---------------------------------------------------------------------------

/// List a production's talent demand rows.
pub async fn list_demand(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_production_exists(&state.pool, id).await?;
    let items = DemandRepo::list_by_production(&state.pool, id).await?;
    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// POST /productions/{id}/demand
// ---------------------------------------------------------------------------

/// Manually add a demand row to a production (the path used when no
/// template was applied at creation).
pub async fn add_demand(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    Json(body): Json<AddDemandRequest>,
) -> AppResult<impl IntoResponse> {
    ensure_production_exists(&state.pool, id).await?;

    if body.required_count < 1 {
        return Err(AppError::Core(CoreError::Validation(format!(
            "required_count must be >= 1, got {}",
            body.required_count
        ))));
    }

    let talent = TalentRepo::find_by_id(&state.pool, body.talent_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Talent",
                id: body.talent_id,
            })
        })?;

    let category_path = match talent.category_id {
        Some(category_id) => {
            let snapshot = TalentCategoryRepo::list_all(&state.pool).await?;
            let nodes: Vec<_> = snapshot.iter().map(|c| c.to_path_node()).collect();
            callsheet_core::taxonomy::category_path(&nodes, category_id)?
        }
        None => String::new(),
    };

    let demand = DemandRepo::insert(
        &state.pool,
        &NewTalentDemand {
            production_id: id,
            talent_id: Some(talent.id),
            talent_name: talent.name,
            talent_category_path: category_path,
            required_count: body.required_count,
            note: body.note,
        },
    )
    .await?;

    tracing::info!(
        production_id = id,
        demand_id = demand.id,
        user_id = auth.user_id,
        "Demand added"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: demand })))
}

// ---------------------------------------------------------------------------
// DELETE /productions/{id}/demand/{demand_id}
// ---------------------------------------------------------------------------

/// Remove a demand row from a production.
pub async fn delete_demand(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((id, demand_id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    if !DemandRepo::delete(&state.pool, id, demand_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "TalentDemand",
            id: demand_id,
        }));
    }
    tracing::info!(
        production_id = id,
        demand_id,
        user_id = auth.user_id,
        "Demand removed"
    );
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// GET /productions/{id}/plan
// ---------------------------------------------------------------------------

/// List a production's plan nodes, headings first, siblings in order.
pub async fn list_plan(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_production_exists(&state.pool, id).await?;
    let items = PlanRepo::list_by_production(&state.pool, id).await?;
    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// GET /productions/{id}/check-ins
// ---------------------------------------------------------------------------

/// List a production's check-in entries in display order.
pub async fn list_check_ins(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_production_exists(&state.pool, id).await?;
    let items = CheckInRepo::list_by_production(&state.pool, id).await?;
    Ok(Json(DataResponse { data: items }))
}
