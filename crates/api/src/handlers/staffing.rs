//! Handlers for staffing a production: assignments plus derived fulfillment.
//!
//! Fulfillment is recomputed from live rows on every read and never
//! persisted. The "needs attention" and "fully staffed" views are two
//! partitions of the same slot set, not separate computations.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use callsheet_core::error::CoreError;
use callsheet_core::fulfillment::{
    self, AssignmentStatus, GroupStatus, SlotStatus,
};
use callsheet_core::types::DbId;
use callsheet_db::models::assignment::{
    CreateAssignmentRequest, NewStaffAssignment, StaffAssignment, UpdateStaffAssignment,
};
use callsheet_db::repositories::{
    AssignmentRepo, DemandRepo, ProductionRepo, TalentCategoryRepo, TalentRepo,
};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Staffing view of one production: raw assignments plus derived fulfillment.
#[derive(Debug, Serialize)]
pub struct StaffingResponse {
    pub assignments: Vec<StaffAssignment>,
    pub slots: Vec<SlotStatus>,
    /// Slots with `is_filled == false`.
    pub needs_attention: Vec<SlotStatus>,
    /// Slots with `is_filled == true`.
    pub fully_staffed: Vec<SlotStatus>,
    pub groups: Vec<GroupStatus>,
}

/// Verify that a production exists.
async fn ensure_production_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<()> {
    ProductionRepo::find_by_id(pool, id)
        .await?
        .map(|_| ())
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Production",
                id,
            })
        })
}

/// Parse an optional status string, defaulting to Planned.
fn parse_status(value: Option<&str>) -> AppResult<AssignmentStatus> {
    match value {
        None => Ok(AssignmentStatus::Planned),
        Some(raw) => AssignmentStatus::parse(raw).ok_or_else(|| {
            AppError::Core(CoreError::Validation(format!(
                "status must be one of planned/confirmed/cancelled, got '{raw}'"
            )))
        }),
    }
}

// ---------------------------------------------------------------------------
// GET /productions/{id}/staffing
// ---------------------------------------------------------------------------

/// Full staffing view: assignments, per-slot fulfillment, both partitions,
/// and category-group aggregates.
pub async fn list_staffing(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_production_exists(&state.pool, id).await?;

    let demands = DemandRepo::list_by_production(&state.pool, id).await?;
    let assignments = AssignmentRepo::list_by_production(&state.pool, id).await?;

    let slots = fulfillment::compute_fulfillment(
        &demands.iter().map(|d| d.to_slot()).collect::<Vec<_>>(),
        &assignments.iter().map(|a| a.to_record()).collect::<Vec<_>>(),
    );
    let groups = fulfillment::group_fulfillment(&slots);

    let needs_attention: Vec<SlotStatus> =
        slots.iter().filter(|s| !s.is_filled).cloned().collect();
    let fully_staffed: Vec<SlotStatus> = slots.iter().filter(|s| s.is_filled).cloned().collect();

    tracing::debug!(
        production_id = id,
        slot_count = slots.len(),
        open_slots = needs_attention.len(),
        "Computed staffing fulfillment"
    );

    Ok(Json(DataResponse {
        data: StaffingResponse {
            assignments,
            slots,
            needs_attention,
            fully_staffed,
            groups,
        },
    }))
}

// ---------------------------------------------------------------------------
// POST /productions/{id}/assignments
// ---------------------------------------------------------------------------

/// Assign a person to a talent slot on a production.
///
/// The talent name and category path are snapshotted as plain text. A second
/// assignment for the same (production, person, talent name) triple is
/// rejected with 409 `DUPLICATE_ASSIGNMENT` by the storage layer's unique
/// constraint; under a race, exactly one of two concurrent calls succeeds.
pub async fn add_assignment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    Json(body): Json<CreateAssignmentRequest>,
) -> AppResult<impl IntoResponse> {
    ensure_production_exists(&state.pool, id).await?;

    let status = parse_status(body.status.as_deref())?;

    let (talent_id, talent_name, category_path) = match body.talent_id {
        Some(talent_id) => {
            let talent = TalentRepo::find_by_id(&state.pool, talent_id)
                .await?
                .ok_or_else(|| {
                    AppError::Core(CoreError::NotFound {
                        entity: "Talent",
                        id: talent_id,
                    })
                })?;
            let path = match talent.category_id {
                Some(category_id) => {
                    let snapshot = TalentCategoryRepo::list_all(&state.pool).await?;
                    let nodes: Vec<_> = snapshot.iter().map(|c| c.to_path_node()).collect();
                    callsheet_core::taxonomy::category_path(&nodes, category_id)?
                }
                None => String::new(),
            };
            (Some(talent.id), talent.name, path)
        }
        None => {
            let name = body.talent_name.clone().ok_or_else(|| {
                AppError::Core(CoreError::Validation(
                    "either talent_id or talent_name is required".to_string(),
                ))
            })?;
            (None, name, body.talent_category_path.clone().unwrap_or_default())
        }
    };

    let assignment = AssignmentRepo::create(
        &state.pool,
        &NewStaffAssignment {
            production_id: id,
            person_id: body.person_id,
            talent_id,
            talent_name,
            talent_category_path: category_path,
            note: body.note,
            status,
        },
    )
    .await?;

    tracing::info!(
        production_id = id,
        assignment_id = assignment.id,
        person_id = body.person_id,
        user_id = auth.user_id,
        "Assignment created"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: assignment })))
}

// ---------------------------------------------------------------------------
// PATCH /assignments/{id}
// ---------------------------------------------------------------------------

/// Update an assignment's note and/or status.
pub async fn update_assignment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    Json(body): Json<UpdateStaffAssignment>,
) -> AppResult<impl IntoResponse> {
    if let Some(raw) = body.status.as_deref() {
        // Reject unknown statuses before they reach the CHECK constraint.
        parse_status(Some(raw))?;
    }

    let assignment = AssignmentRepo::update(&state.pool, id, &body)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "StaffAssignment",
                id,
            })
        })?;

    tracing::info!(assignment_id = id, user_id = auth.user_id, "Assignment updated");
    Ok(Json(DataResponse { data: assignment }))
}

// ---------------------------------------------------------------------------
// DELETE /assignments/{id}
// ---------------------------------------------------------------------------

/// Remove an assignment. Sibling assignments are unaffected.
pub async fn remove_assignment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !AssignmentRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "StaffAssignment",
            id,
        }));
    }
    tracing::info!(assignment_id = id, user_id = auth.user_id, "Assignment removed");
    Ok(StatusCode::NO_CONTENT)
}
