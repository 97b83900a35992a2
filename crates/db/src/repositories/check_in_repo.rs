//! Repository for the `check_in_entries` table.

use sqlx::PgPool;

use callsheet_core::types::DbId;

use crate::models::check_in::{CheckInEntry, NewCheckInEntry};

const COLUMNS: &str = "id, production_id, name, note, call_at, sort_order, created_at";

/// Provides operations on a production's check-in snapshot rows.
pub struct CheckInRepo;

impl CheckInRepo {
    /// Insert a check-in entry. Executor-generic so the instantiator can
    /// insert inside its transaction.
    pub async fn insert<'e, E>(
        executor: E,
        input: &NewCheckInEntry,
    ) -> Result<CheckInEntry, sqlx::Error>
    where
        E: sqlx::PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO check_in_entries (production_id, name, note, call_at, sort_order) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CheckInEntry>(&query)
            .bind(input.production_id)
            .bind(&input.name)
            .bind(&input.note)
            .bind(input.call_at)
            .bind(input.sort_order)
            .fetch_one(executor)
            .await
    }

    /// List a production's check-ins in display order.
    pub async fn list_by_production(
        pool: &PgPool,
        production_id: DbId,
    ) -> Result<Vec<CheckInEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM check_in_entries \
             WHERE production_id = $1 ORDER BY sort_order ASC, id ASC"
        );
        sqlx::query_as::<_, CheckInEntry>(&query)
            .bind(production_id)
            .fetch_all(pool)
            .await
    }
}
