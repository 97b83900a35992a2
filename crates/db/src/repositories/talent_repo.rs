//! Repository for the `talents` table.

use sqlx::PgPool;

use callsheet_core::types::DbId;

use crate::models::talent::{CreateTalent, Talent};

const COLUMNS: &str = "id, name, category_id, created_at, updated_at";

/// Provides operations on talent rows.
pub struct TalentRepo;

impl TalentRepo {
    /// Insert a talent.
    pub async fn create(pool: &PgPool, input: &CreateTalent) -> Result<Talent, sqlx::Error> {
        let query = format!(
            "INSERT INTO talents (name, category_id) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Talent>(&query)
            .bind(&input.name)
            .bind(input.category_id)
            .fetch_one(pool)
            .await
    }

    /// Find a talent by ID.
    pub async fn find_by_id<'e, E>(executor: E, id: DbId) -> Result<Option<Talent>, sqlx::Error>
    where
        E: sqlx::PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM talents WHERE id = $1");
        sqlx::query_as::<_, Talent>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// List all talents ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Talent>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM talents ORDER BY name ASC");
        sqlx::query_as::<_, Talent>(&query).fetch_all(pool).await
    }

    /// Delete a talent by ID. Demand and assignment snapshots keep their
    /// name/path text; their `talent_id` is nulled by the database.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM talents WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
