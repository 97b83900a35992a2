//! Plan node entity model and insert DTO.
//!
//! Same shape as a plan template node, but `parent_id` points at sibling
//! `plan_nodes` rows of the same production, never back at template rows.

use serde::Serialize;
use sqlx::FromRow;

use callsheet_core::types::{DbId, Timestamp};

/// A plan node row from the `plan_nodes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PlanNode {
    pub id: DbId,
    pub production_id: DbId,
    pub kind: String,
    pub name: String,
    pub duration_minutes: Option<i32>,
    pub parent_id: Option<DbId>,
    pub sort_order: i32,
    pub created_at: Timestamp,
}

/// Insert DTO with the parent reference already translated to a new row id.
#[derive(Debug, Clone)]
pub struct NewPlanNode {
    pub production_id: DbId,
    pub kind: String,
    pub name: String,
    pub duration_minutes: Option<i32>,
    pub parent_id: Option<DbId>,
    pub sort_order: i32,
}
