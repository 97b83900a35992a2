//! Repository for the `categories` table.
//!
//! Category authoring is owned by an upstream collaborator; this engine
//! reads categories when instantiating productions. Create/delete exist for
//! fixtures and administrative tooling.

use sqlx::PgPool;

use callsheet_core::types::DbId;

use crate::models::category::{Category, CreateCategory};

const COLUMNS: &str = "id, name, default_location, description, created_at, updated_at";

/// Provides read and fixture operations for event categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a new category, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCategory) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (name, default_location, description) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(&input.name)
            .bind(&input.default_location)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a category by ID.
    pub async fn find_by_id<'e, E>(executor: E, id: DbId) -> Result<Option<Category>, sqlx::Error>
    where
        E: sqlx::PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// List all categories ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY name ASC");
        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }

    /// Delete a category by ID. Template rows cascade; productions already
    /// instantiated from it are unaffected.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
