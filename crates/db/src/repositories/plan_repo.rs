//! Repository for the `plan_nodes` table.

use sqlx::PgPool;

use callsheet_core::types::DbId;

use crate::models::plan_node::{NewPlanNode, PlanNode};

const COLUMNS: &str =
    "id, production_id, kind, name, duration_minutes, parent_id, sort_order, created_at";

/// Provides operations on a production's plan snapshot rows.
pub struct PlanRepo;

impl PlanRepo {
    /// Insert a plan node, returning the created row (with its fresh id, so
    /// the instantiator can record old->new translations).
    pub async fn insert<'e, E>(executor: E, input: &NewPlanNode) -> Result<PlanNode, sqlx::Error>
    where
        E: sqlx::PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO plan_nodes \
                (production_id, kind, name, duration_minutes, parent_id, sort_order) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PlanNode>(&query)
            .bind(input.production_id)
            .bind(&input.kind)
            .bind(&input.name)
            .bind(input.duration_minutes)
            .bind(input.parent_id)
            .bind(input.sort_order)
            .fetch_one(executor)
            .await
    }

    /// List a production's plan nodes, headings first, siblings ordered by
    /// `sort_order` with ties broken by insertion (id).
    pub async fn list_by_production(
        pool: &PgPool,
        production_id: DbId,
    ) -> Result<Vec<PlanNode>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM plan_nodes \
             WHERE production_id = $1 \
             ORDER BY parent_id ASC NULLS FIRST, sort_order ASC, id ASC"
        );
        sqlx::query_as::<_, PlanNode>(&query)
            .bind(production_id)
            .fetch_all(pool)
            .await
    }
}
