//! Event category entity model and DTOs.
//!
//! A category is the authoring-time blueprint productions are instantiated
//! from. This engine only reads categories; authoring is owned upstream, but
//! the repository keeps create/delete so integration tests can build
//! fixtures.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use callsheet_core::types::{DbId, Timestamp};

/// A category row from the `categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub default_location: Option<String>,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new category.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategory {
    pub name: String,
    pub default_location: Option<String>,
    pub description: Option<String>,
}
