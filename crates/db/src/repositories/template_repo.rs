//! Repository for the three per-category template collections.
//!
//! Reads are executor-generic so the instantiator can take its single
//! point-in-time read inside the production-creation transaction.

use sqlx::PgPool;

use callsheet_core::types::DbId;

use crate::models::template::{
    CheckInTemplate, CreateCheckInTemplate, CreatePlanTemplateNode, CreateTalentDemandTemplate,
    PlanTemplateNode, TalentDemandTemplate, TemplateBundle,
};

const DEMAND_COLUMNS: &str = "id, category_id, talent_id, required_count, note, created_at";
const PLAN_COLUMNS: &str =
    "id, category_id, kind, name, duration_minutes, parent_id, sort_order, created_at";
const CHECK_IN_COLUMNS: &str =
    "id, category_id, name, note, minutes_before_start, sort_order, created_at";

/// Provides read and authoring operations for category templates.
pub struct TemplateRepo;

impl TemplateRepo {
    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    /// Demand templates for a category, in authoring order.
    pub async fn demand_templates<'e, E>(
        executor: E,
        category_id: DbId,
    ) -> Result<Vec<TalentDemandTemplate>, sqlx::Error>
    where
        E: sqlx::PgExecutor<'e>,
    {
        let query = format!(
            "SELECT {DEMAND_COLUMNS} FROM talent_demand_templates \
             WHERE category_id = $1 ORDER BY id ASC"
        );
        sqlx::query_as::<_, TalentDemandTemplate>(&query)
            .bind(category_id)
            .fetch_all(executor)
            .await
    }

    /// Plan template nodes for a category. Siblings are ordered by
    /// `sort_order` with ties broken by insertion (id).
    pub async fn plan_template_nodes<'e, E>(
        executor: E,
        category_id: DbId,
    ) -> Result<Vec<PlanTemplateNode>, sqlx::Error>
    where
        E: sqlx::PgExecutor<'e>,
    {
        let query = format!(
            "SELECT {PLAN_COLUMNS} FROM plan_template_nodes \
             WHERE category_id = $1 ORDER BY sort_order ASC, id ASC"
        );
        sqlx::query_as::<_, PlanTemplateNode>(&query)
            .bind(category_id)
            .fetch_all(executor)
            .await
    }

    /// Check-in templates for a category, in display order.
    pub async fn check_in_templates<'e, E>(
        executor: E,
        category_id: DbId,
    ) -> Result<Vec<CheckInTemplate>, sqlx::Error>
    where
        E: sqlx::PgExecutor<'e>,
    {
        let query = format!(
            "SELECT {CHECK_IN_COLUMNS} FROM check_in_templates \
             WHERE category_id = $1 ORDER BY sort_order ASC, id ASC"
        );
        sqlx::query_as::<_, CheckInTemplate>(&query)
            .bind(category_id)
            .fetch_all(executor)
            .await
    }

    /// All three template collections for a category.
    pub async fn load_bundle(
        pool: &PgPool,
        category_id: DbId,
    ) -> Result<TemplateBundle, sqlx::Error> {
        Ok(TemplateBundle {
            demand_templates: Self::demand_templates(pool, category_id).await?,
            plan_template_nodes: Self::plan_template_nodes(pool, category_id).await?,
            check_in_templates: Self::check_in_templates(pool, category_id).await?,
        })
    }

    // -----------------------------------------------------------------------
    // Authoring (fixtures / administrative tooling)
    // -----------------------------------------------------------------------

    /// Insert a demand template.
    pub async fn create_demand_template(
        pool: &PgPool,
        input: &CreateTalentDemandTemplate,
    ) -> Result<TalentDemandTemplate, sqlx::Error> {
        let query = format!(
            "INSERT INTO talent_demand_templates (category_id, talent_id, required_count, note) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {DEMAND_COLUMNS}"
        );
        sqlx::query_as::<_, TalentDemandTemplate>(&query)
            .bind(input.category_id)
            .bind(input.talent_id)
            .bind(input.required_count)
            .bind(&input.note)
            .fetch_one(pool)
            .await
    }

    /// Insert a plan template node.
    pub async fn create_plan_template_node(
        pool: &PgPool,
        input: &CreatePlanTemplateNode,
    ) -> Result<PlanTemplateNode, sqlx::Error> {
        let query = format!(
            "INSERT INTO plan_template_nodes \
                (category_id, kind, name, duration_minutes, parent_id, sort_order) \
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, 0)) \
             RETURNING {PLAN_COLUMNS}"
        );
        sqlx::query_as::<_, PlanTemplateNode>(&query)
            .bind(input.category_id)
            .bind(&input.kind)
            .bind(&input.name)
            .bind(input.duration_minutes)
            .bind(input.parent_id)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    /// Insert a check-in template.
    pub async fn create_check_in_template(
        pool: &PgPool,
        input: &CreateCheckInTemplate,
    ) -> Result<CheckInTemplate, sqlx::Error> {
        let query = format!(
            "INSERT INTO check_in_templates \
                (category_id, name, note, minutes_before_start, sort_order) \
             VALUES ($1, $2, $3, $4, COALESCE($5, 0)) \
             RETURNING {CHECK_IN_COLUMNS}"
        );
        sqlx::query_as::<_, CheckInTemplate>(&query)
            .bind(input.category_id)
            .bind(&input.name)
            .bind(&input.note)
            .bind(input.minutes_before_start)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }
}
