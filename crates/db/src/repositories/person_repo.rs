//! Repository for the `people` table.

use sqlx::PgPool;

use callsheet_core::types::DbId;

use crate::models::person::{CreatePerson, Person};

const COLUMNS: &str = "id, full_name, email, created_at, updated_at";

/// Provides operations on person rows.
pub struct PersonRepo;

impl PersonRepo {
    /// Insert a person.
    pub async fn create(pool: &PgPool, input: &CreatePerson) -> Result<Person, sqlx::Error> {
        let query = format!(
            "INSERT INTO people (full_name, email) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Person>(&query)
            .bind(&input.full_name)
            .bind(&input.email)
            .fetch_one(pool)
            .await
    }

    /// Find a person by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Person>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM people WHERE id = $1");
        sqlx::query_as::<_, Person>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
