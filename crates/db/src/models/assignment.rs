//! Staff assignment entity model and DTOs.
//!
//! Assignments snapshot the talent name and taxonomy path as plain text so
//! they survive talent renames and deletions; fulfillment matches them to
//! demands by id first, name second. One (production, person, talent name)
//! triple at most, enforced by
//! `uq_staff_assignments_production_person_talent`.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use callsheet_core::fulfillment::{AssignmentRecord, AssignmentStatus};
use callsheet_core::types::{DbId, Timestamp};

/// An assignment row from the `staff_assignments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StaffAssignment {
    pub id: DbId,
    pub production_id: DbId,
    pub person_id: DbId,
    pub talent_id: Option<DbId>,
    pub talent_name: String,
    pub talent_category_path: String,
    pub note: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl StaffAssignment {
    /// Project this row into the fulfillment calculator's input shape.
    ///
    /// An unrecognized stored status is treated as Cancelled so it can never
    /// inflate fill counts.
    pub fn to_record(&self) -> AssignmentRecord {
        AssignmentRecord {
            assignment_id: self.id,
            talent_id: self.talent_id,
            talent_name: self.talent_name.clone(),
            status: AssignmentStatus::parse(&self.status).unwrap_or(AssignmentStatus::Cancelled),
        }
    }
}

/// Fully-resolved insert DTO.
#[derive(Debug, Clone)]
pub struct NewStaffAssignment {
    pub production_id: DbId,
    pub person_id: DbId,
    pub talent_id: Option<DbId>,
    pub talent_name: String,
    pub talent_category_path: String,
    pub note: Option<String>,
    pub status: AssignmentStatus,
}

/// API request for assigning a person to a production's talent slot.
///
/// Either `talent_id` (resolved to a name/path snapshot at insert time) or a
/// raw `talent_name` must be supplied.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAssignmentRequest {
    pub person_id: DbId,
    pub talent_id: Option<DbId>,
    pub talent_name: Option<String>,
    /// Used verbatim when no `talent_id` is given; otherwise recomputed from
    /// the live taxonomy.
    pub talent_category_path: Option<String>,
    pub note: Option<String>,
    pub status: Option<String>,
}

/// DTO for updating an assignment. Only note and status are editable.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStaffAssignment {
    pub note: Option<String>,
    pub status: Option<String>,
}
