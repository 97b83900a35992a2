//! Talent and talent-category entity models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use callsheet_core::taxonomy::PathNode;
use callsheet_core::types::{DbId, Timestamp};

/// A row from the `talent_categories` taxonomy table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TalentCategory {
    pub id: DbId,
    pub name: String,
    pub parent_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TalentCategory {
    /// Project this row into the taxonomy path builder's input shape.
    pub fn to_path_node(&self) -> PathNode {
        PathNode {
            id: self.id,
            parent_id: self.parent_id,
            name: self.name.clone(),
        }
    }
}

/// DTO for creating a taxonomy node.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTalentCategory {
    pub name: String,
    pub parent_id: Option<DbId>,
}

/// A row from the `talents` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Talent {
    pub id: DbId,
    pub name: String,
    pub category_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a talent.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTalent {
    pub name: String,
    pub category_id: Option<DbId>,
}

/// A talent enriched with its computed taxonomy display path.
#[derive(Debug, Clone, Serialize)]
pub struct TalentWithPath {
    #[serde(flatten)]
    pub talent: Talent,
    pub category_path: String,
}
