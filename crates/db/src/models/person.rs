//! Person entity model. People are owned by an upstream collaborator; this
//! is the minimal projection assignments need for referential integrity.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use callsheet_core::types::{DbId, Timestamp};

/// A person row from the `people` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Person {
    pub id: DbId,
    pub full_name: String,
    pub email: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a person.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePerson {
    pub full_name: String,
    pub email: Option<String>,
}
