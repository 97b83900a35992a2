//! Production entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use callsheet_core::types::{DbId, Timestamp};

/// A production row from the `productions` table.
///
/// Carries no category foreign key: the originating category is consumed at
/// creation time only, so its later deletion cannot affect the production.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Production {
    pub id: DbId,
    pub name: String,
    pub starts_at: Timestamp,
    pub description: Option<String>,
    pub location: Option<String>,
    pub is_published: bool,
    /// Optional plan grouping reference into this production's own plan.
    pub plan_heading_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Insert DTO for the production row itself.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProduction {
    pub name: String,
    pub starts_at: Timestamp,
    pub description: Option<String>,
    pub location: Option<String>,
}

/// API request for creating a production, optionally instantiating a
/// category's templates into it.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProductionRequest {
    pub name: String,
    pub starts_at: Timestamp,
    pub description: Option<String>,
    /// Defaults from the category's `default_location` when omitted and a
    /// category id is supplied.
    pub location: Option<String>,
    pub category_id: Option<DbId>,
    /// Templates are applied only on explicit opt-in.
    #[serde(default)]
    pub apply_template: bool,
}

/// DTO for updating an existing production. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProduction {
    pub name: Option<String>,
    pub starts_at: Option<Timestamp>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub is_published: Option<bool>,
    pub plan_heading_id: Option<DbId>,
}
