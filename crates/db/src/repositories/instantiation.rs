//! Template instantiation: copies a category's three template collections
//! into a production as independent snapshots.
//!
//! The whole copy rides the caller's transaction. Any failure after the
//! point-in-time template read (a vanished talent, a malformed plan
//! hierarchy, a storage error) aborts the transaction, so a production is
//! never left half-populated.

use std::collections::HashMap;

use serde::Serialize;
use sqlx::{Postgres, Transaction};

use callsheet_core::error::CoreError;
use callsheet_core::remap::{plan_remap, RemapNode};
use callsheet_core::types::{DbId, Timestamp};
use callsheet_core::{checkin, taxonomy};

use crate::models::check_in::NewCheckInEntry;
use crate::models::demand::NewTalentDemand;
use crate::models::plan_node::NewPlanNode;
use crate::models::talent::TalentCategory;
use crate::repositories::{
    CheckInRepo, DemandRepo, PlanRepo, TalentCategoryRepo, TalentRepo, TemplateRepo,
};

/// Row counts produced by one instantiation.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct InstantiationSummary {
    pub demand_count: usize,
    pub plan_node_count: usize,
    pub check_in_count: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum InstantiationError {
    /// The category vanished between the create request and the template
    /// read (template deletion races with instantiation).
    #[error("Category {category_id} not found")]
    TemplateNotFound { category_id: DbId },

    /// A demand template's talent was deleted after authoring.
    #[error("Demand template {template_id} references a deleted talent")]
    MissingTalent { template_id: DbId },

    /// Structural corruption in the template plan or the talent taxonomy.
    #[error(transparent)]
    Hierarchy(#[from] CoreError),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Copies template collections into a production inside one transaction.
pub struct Instantiator;

impl Instantiator {
    /// Populate `production_id`'s demand, plan, and check-in collections
    /// from `category_id`'s templates.
    ///
    /// Takes a single point-in-time read of all three collections; template
    /// edits that interleave with this read are resolved as last-read-wins.
    pub async fn apply(
        tx: &mut Transaction<'_, Postgres>,
        category_id: DbId,
        production_id: DbId,
        starts_at: Timestamp,
    ) -> Result<InstantiationSummary, InstantiationError> {
        let demand_templates = TemplateRepo::demand_templates(&mut **tx, category_id).await?;
        let plan_templates = TemplateRepo::plan_template_nodes(&mut **tx, category_id).await?;
        let check_in_templates = TemplateRepo::check_in_templates(&mut **tx, category_id).await?;
        let taxonomy_snapshot = TalentCategoryRepo::list_all(&mut **tx).await?;

        let demand_count =
            Self::copy_demands(tx, production_id, &demand_templates, &taxonomy_snapshot).await?;
        let plan_node_count = Self::copy_plan(tx, production_id, &plan_templates).await?;
        let check_in_count =
            Self::copy_check_ins(tx, production_id, starts_at, &check_in_templates).await?;

        tracing::debug!(
            category_id,
            production_id,
            demand_count,
            plan_node_count,
            check_in_count,
            "Instantiated template collections"
        );

        Ok(InstantiationSummary {
            demand_count,
            plan_node_count,
            check_in_count,
        })
    }

    /// Copy demand templates 1:1, snapshotting each talent's name and
    /// taxonomy path. A template whose talent no longer exists is a hard
    /// failure, not a skip.
    async fn copy_demands(
        tx: &mut Transaction<'_, Postgres>,
        production_id: DbId,
        templates: &[crate::models::template::TalentDemandTemplate],
        taxonomy_snapshot: &[TalentCategory],
    ) -> Result<usize, InstantiationError> {
        let path_nodes: Vec<_> = taxonomy_snapshot
            .iter()
            .map(TalentCategory::to_path_node)
            .collect();

        for template in templates {
            let talent_id = template
                .talent_id
                .ok_or(InstantiationError::MissingTalent {
                    template_id: template.id,
                })?;
            let talent = TalentRepo::find_by_id(&mut **tx, talent_id)
                .await?
                .ok_or(InstantiationError::MissingTalent {
                    template_id: template.id,
                })?;

            let category_path = match talent.category_id {
                Some(category_id) => taxonomy::category_path(&path_nodes, category_id)?,
                None => String::new(),
            };

            DemandRepo::insert(
                &mut **tx,
                &NewTalentDemand {
                    production_id,
                    talent_id: Some(talent.id),
                    talent_name: talent.name,
                    talent_category_path: category_path,
                    required_count: template.required_count,
                    note: template.note.clone(),
                },
            )
            .await?;
        }

        Ok(templates.len())
    }

    /// Copy plan template nodes with fresh identities, translating parent
    /// references through an old->new map and preserving order keys
    /// verbatim. Parents are inserted before children per the remap plan.
    async fn copy_plan(
        tx: &mut Transaction<'_, Postgres>,
        production_id: DbId,
        templates: &[crate::models::template::PlanTemplateNode],
    ) -> Result<usize, InstantiationError> {
        let remap_nodes: Vec<RemapNode> = templates
            .iter()
            .map(|t| RemapNode {
                id: t.id,
                parent_id: t.parent_id,
            })
            .collect();
        let plan = plan_remap(&remap_nodes)?;

        let mut id_map: HashMap<DbId, DbId> = HashMap::with_capacity(templates.len());
        let mut inserted = 0usize;

        for level in &plan.levels {
            for &idx in level {
                let template = &templates[idx];
                let parent_id = match template.parent_id {
                    Some(old_parent) => Some(*id_map.get(&old_parent).ok_or(
                        // Unreachable once plan_remap succeeded; kept as a
                        // structural-integrity backstop.
                        CoreError::MalformedHierarchy {
                            node_id: template.id,
                        },
                    )?),
                    None => None,
                };

                let created = PlanRepo::insert(
                    &mut **tx,
                    &NewPlanNode {
                        production_id,
                        kind: template.kind.clone(),
                        name: template.name.clone(),
                        duration_minutes: template.duration_minutes,
                        parent_id,
                        sort_order: template.sort_order,
                    },
                )
                .await?;

                id_map.insert(template.id, created.id);
                inserted += 1;
            }
        }

        Ok(inserted)
    }

    /// Materialize check-in templates as absolute instants relative to the
    /// production start.
    async fn copy_check_ins(
        tx: &mut Transaction<'_, Postgres>,
        production_id: DbId,
        starts_at: Timestamp,
        templates: &[crate::models::template::CheckInTemplate],
    ) -> Result<usize, InstantiationError> {
        for template in templates {
            checkin::validate_minutes_before_start(template.minutes_before_start)?;
            CheckInRepo::insert(
                &mut **tx,
                &NewCheckInEntry {
                    production_id,
                    name: template.name.clone(),
                    note: template.note.clone(),
                    call_at: checkin::call_time(starts_at, template.minutes_before_start),
                    sort_order: template.sort_order,
                },
            )
            .await?;
        }

        Ok(templates.len())
    }
}
