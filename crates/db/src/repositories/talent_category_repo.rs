//! Repository for the `talent_categories` taxonomy table.

use sqlx::PgPool;

use crate::models::talent::{CreateTalentCategory, TalentCategory};

const COLUMNS: &str = "id, name, parent_id, created_at, updated_at";

/// Provides operations on the talent taxonomy tree.
pub struct TalentCategoryRepo;

impl TalentCategoryRepo {
    /// Insert a taxonomy node.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTalentCategory,
    ) -> Result<TalentCategory, sqlx::Error> {
        let query = format!(
            "INSERT INTO talent_categories (name, parent_id) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TalentCategory>(&query)
            .bind(&input.name)
            .bind(input.parent_id)
            .fetch_one(pool)
            .await
    }

    /// Load the whole taxonomy. Path computation walks parent pointers over
    /// this in-memory snapshot instead of issuing per-level self-joins.
    pub async fn list_all<'e, E>(executor: E) -> Result<Vec<TalentCategory>, sqlx::Error>
    where
        E: sqlx::PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM talent_categories ORDER BY id ASC");
        sqlx::query_as::<_, TalentCategory>(&query)
            .fetch_all(executor)
            .await
    }
}
