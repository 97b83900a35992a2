//! Check-in entry entity model and insert DTO.
//!
//! `call_at` is an absolute instant computed at instantiation time; it is a
//! snapshot and is not recomputed when the production's start time changes.

use serde::Serialize;
use sqlx::FromRow;

use callsheet_core::types::{DbId, Timestamp};

/// A check-in row from the `check_in_entries` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CheckInEntry {
    pub id: DbId,
    pub production_id: DbId,
    pub name: String,
    pub note: Option<String>,
    pub call_at: Timestamp,
    pub sort_order: i32,
    pub created_at: Timestamp,
}

/// Insert DTO with the absolute call time already computed.
#[derive(Debug, Clone)]
pub struct NewCheckInEntry {
    pub production_id: DbId,
    pub name: String,
    pub note: Option<String>,
    pub call_at: Timestamp,
    pub sort_order: i32,
}
