//! Repository for the `talent_demands` table.

use sqlx::PgPool;

use callsheet_core::types::DbId;

use crate::models::demand::{NewTalentDemand, TalentDemand};

const COLUMNS: &str = "id, production_id, talent_id, talent_name, talent_category_path, \
     required_count, note, created_at";

/// Provides operations on a production's demand snapshot rows.
pub struct DemandRepo;

impl DemandRepo {
    /// Insert a demand row. Executor-generic so the instantiator can insert
    /// inside its transaction.
    pub async fn insert<'e, E>(
        executor: E,
        input: &NewTalentDemand,
    ) -> Result<TalentDemand, sqlx::Error>
    where
        E: sqlx::PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO talent_demands \
                (production_id, talent_id, talent_name, talent_category_path, required_count, note) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TalentDemand>(&query)
            .bind(input.production_id)
            .bind(input.talent_id)
            .bind(&input.talent_name)
            .bind(&input.talent_category_path)
            .bind(input.required_count)
            .bind(&input.note)
            .fetch_one(executor)
            .await
    }

    /// List a production's demand rows in insertion order.
    pub async fn list_by_production(
        pool: &PgPool,
        production_id: DbId,
    ) -> Result<Vec<TalentDemand>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM talent_demands \
             WHERE production_id = $1 ORDER BY id ASC"
        );
        sqlx::query_as::<_, TalentDemand>(&query)
            .bind(production_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a demand row scoped to its production.
    pub async fn delete(
        pool: &PgPool,
        production_id: DbId,
        demand_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM talent_demands WHERE id = $1 AND production_id = $2")
            .bind(demand_id)
            .bind(production_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
