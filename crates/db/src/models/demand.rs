//! Talent demand entity model and DTOs.
//!
//! A demand is a snapshot owned by its production: `talent_name` and
//! `talent_category_path` are plain text copies, and `talent_id` is a
//! best-effort fast-path key that the database nulls when the talent row is
//! deleted.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use callsheet_core::fulfillment::DemandSlot;
use callsheet_core::types::{DbId, Timestamp};

/// A demand row from the `talent_demands` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TalentDemand {
    pub id: DbId,
    pub production_id: DbId,
    pub talent_id: Option<DbId>,
    pub talent_name: String,
    pub talent_category_path: String,
    pub required_count: i32,
    pub note: Option<String>,
    pub created_at: Timestamp,
}

impl TalentDemand {
    /// Project this row into the fulfillment calculator's input shape.
    pub fn to_slot(&self) -> DemandSlot {
        DemandSlot {
            demand_id: self.id,
            talent_id: self.talent_id,
            talent_name: self.talent_name.clone(),
            talent_category_path: self.talent_category_path.clone(),
            required_count: self.required_count,
        }
    }
}

/// Fully-resolved insert DTO, built by the instantiator or the manual-add
/// handler after snapshotting the talent's name and taxonomy path.
#[derive(Debug, Clone)]
pub struct NewTalentDemand {
    pub production_id: DbId,
    pub talent_id: Option<DbId>,
    pub talent_name: String,
    pub talent_category_path: String,
    pub required_count: i32,
    pub note: Option<String>,
}

/// API request for manually adding a demand to a production.
#[derive(Debug, Clone, Deserialize)]
pub struct AddDemandRequest {
    pub talent_id: DbId,
    pub required_count: i32,
    pub note: Option<String>,
}
