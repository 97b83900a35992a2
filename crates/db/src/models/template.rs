//! Template collection entities: talent demand, plan outline, check-in
//! offsets. All three are scoped to a category and copied into a production
//! as independent snapshots at instantiation time.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use callsheet_core::types::{DbId, Timestamp};

/// A row from `talent_demand_templates`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TalentDemandTemplate {
    pub id: DbId,
    pub category_id: DbId,
    /// Nulled by the database if the talent is deleted after authoring;
    /// instantiation treats that as a hard failure.
    pub talent_id: Option<DbId>,
    pub required_count: i32,
    pub note: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for authoring a demand template.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTalentDemandTemplate {
    pub category_id: DbId,
    pub talent_id: DbId,
    pub required_count: i32,
    pub note: Option<String>,
}

/// A row from `plan_template_nodes`.
///
/// `kind` is `heading` (no parent, no duration) or `event` (parent heading,
/// duration in minutes). The schema nests two levels today; the remapper
/// does not rely on that.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PlanTemplateNode {
    pub id: DbId,
    pub category_id: DbId,
    pub kind: String,
    pub name: String,
    pub duration_minutes: Option<i32>,
    pub parent_id: Option<DbId>,
    pub sort_order: i32,
    pub created_at: Timestamp,
}

/// DTO for authoring a plan template node.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlanTemplateNode {
    pub category_id: DbId,
    pub kind: String,
    pub name: String,
    pub duration_minutes: Option<i32>,
    pub parent_id: Option<DbId>,
    pub sort_order: Option<i32>,
}

/// A row from `check_in_templates`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CheckInTemplate {
    pub id: DbId,
    pub category_id: DbId,
    pub name: String,
    pub note: Option<String>,
    pub minutes_before_start: i32,
    pub sort_order: i32,
    pub created_at: Timestamp,
}

/// DTO for authoring a check-in template.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCheckInTemplate {
    pub category_id: DbId,
    pub name: String,
    pub note: Option<String>,
    pub minutes_before_start: i32,
    pub sort_order: Option<i32>,
}

/// All three template collections for a category, read at one point in time.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateBundle {
    pub demand_templates: Vec<TalentDemandTemplate>,
    pub plan_template_nodes: Vec<PlanTemplateNode>,
    pub check_in_templates: Vec<CheckInTemplate>,
}
