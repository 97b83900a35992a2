//! Staffing fulfillment calculation.
//!
//! Pure functions over in-memory demand and assignment records; fulfillment
//! is derived on every read and never persisted. A malformed pair simply
//! contributes zero matches, so computation itself cannot fail.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::taxonomy;
use crate::types::DbId;

/// Group label for demands whose talent has no category path.
pub const UNCATEGORIZED_GROUP: &str = "Uncategorized";

// ---------------------------------------------------------------------------
// Assignment status
// ---------------------------------------------------------------------------

/// Lifecycle status of a staff assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentStatus {
    Planned,
    Confirmed,
    Cancelled,
}

impl AssignmentStatus {
    /// Parse the storage representation (`planned`/`confirmed`/`cancelled`).
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "planned" => Some(Self::Planned),
            "confirmed" => Some(Self::Confirmed),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// Storage representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Planned => "planned",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Whether an assignment in this status counts toward a slot's
    /// `filled_count`. Cancelled assignments remain visible on the slot but
    /// do not fill it.
    pub fn counts_toward_fill(self) -> bool {
        !matches!(self, Self::Cancelled)
    }
}

// ---------------------------------------------------------------------------
// Calculator inputs
// ---------------------------------------------------------------------------

/// A talent demand row projected for fulfillment computation.
#[derive(Debug, Clone)]
pub struct DemandSlot {
    pub demand_id: DbId,
    /// Fast-path matching key; `None` once the talent row is gone.
    pub talent_id: Option<DbId>,
    pub talent_name: String,
    pub talent_category_path: String,
    pub required_count: i32,
}

/// A staff assignment row projected for fulfillment computation.
#[derive(Debug, Clone)]
pub struct AssignmentRecord {
    pub assignment_id: DbId,
    pub talent_id: Option<DbId>,
    pub talent_name: String,
    pub status: AssignmentStatus,
}

// ---------------------------------------------------------------------------
// Calculator outputs
// ---------------------------------------------------------------------------

/// Per-demand fill state, recomputed from live assignments.
#[derive(Debug, Clone, Serialize)]
pub struct SlotStatus {
    pub demand_id: DbId,
    pub talent_name: String,
    /// Last segment of the talent's category path; grouping key.
    pub group: String,
    pub required_count: i32,
    /// Matching assignments that count toward fill (Planned + Confirmed).
    pub filled_count: i32,
    pub is_filled: bool,
    /// `min(100, 100 * filled / required)`.
    pub fill_percent: i32,
    /// Every matching assignment, including Cancelled ones, for display.
    pub assignment_ids: Vec<DbId>,
}

/// Aggregate fill state for one talent-category group.
#[derive(Debug, Clone, Serialize)]
pub struct GroupStatus {
    pub group: String,
    pub filled_count: i32,
    pub required_count: i32,
    pub fill_percent: i32,
}

// ---------------------------------------------------------------------------
// Matching
// ---------------------------------------------------------------------------

/// Whether an assignment fills (part of) a demand.
///
/// Matches on the stable talent id when both sides still carry one, falling
/// back to exact, case-sensitive name equality so assignments survive talent
/// renames and deletions.
fn matches_demand(demand: &DemandSlot, assignment: &AssignmentRecord) -> bool {
    if let (Some(did), Some(aid)) = (demand.talent_id, assignment.talent_id) {
        return did == aid;
    }
    demand.talent_name == assignment.talent_name
}

// ---------------------------------------------------------------------------
// Computation
// ---------------------------------------------------------------------------

/// Compute per-slot fulfillment for every demand.
///
/// Output order follows the input demand order. Assignments may match more
/// than one demand only if two demands share a talent, which the demand
/// schema does not produce but which this function tolerates.
pub fn compute_fulfillment(
    demands: &[DemandSlot],
    assignments: &[AssignmentRecord],
) -> Vec<SlotStatus> {
    demands
        .iter()
        .map(|demand| {
            let matching: Vec<&AssignmentRecord> = assignments
                .iter()
                .filter(|a| matches_demand(demand, a))
                .collect();

            let filled_count = matching
                .iter()
                .filter(|a| a.status.counts_toward_fill())
                .count() as i32;

            let required = demand.required_count.max(0);
            let is_filled = filled_count >= required;
            let fill_percent = if required > 0 {
                (100 * filled_count / required).min(100)
            } else {
                100
            };

            let group = match taxonomy::last_segment(&demand.talent_category_path) {
                Some(segment) => segment.to_string(),
                None => UNCATEGORIZED_GROUP.to_string(),
            };

            SlotStatus {
                demand_id: demand.demand_id,
                talent_name: demand.talent_name.clone(),
                group,
                required_count: demand.required_count,
                filled_count,
                is_filled,
                fill_percent,
                assignment_ids: matching.iter().map(|a| a.assignment_id).collect(),
            }
        })
        .collect()
}

/// Aggregate slot statuses by talent-category group, sorted by group name.
pub fn group_fulfillment(slots: &[SlotStatus]) -> Vec<GroupStatus> {
    let mut groups: BTreeMap<&str, (i32, i32)> = BTreeMap::new();
    for slot in slots {
        let entry = groups.entry(slot.group.as_str()).or_insert((0, 0));
        entry.0 += slot.filled_count;
        entry.1 += slot.required_count;
    }

    groups
        .into_iter()
        .map(|(group, (filled, required))| GroupStatus {
            group: group.to_string(),
            filled_count: filled,
            required_count: required,
            fill_percent: if required > 0 {
                100 * filled / required
            } else {
                0
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demand(id: DbId, talent_id: Option<DbId>, name: &str, path: &str, required: i32) -> DemandSlot {
        DemandSlot {
            demand_id: id,
            talent_id,
            talent_name: name.to_string(),
            talent_category_path: path.to_string(),
            required_count: required,
        }
    }

    fn assignment(id: DbId, talent_id: Option<DbId>, name: &str, status: AssignmentStatus) -> AssignmentRecord {
        AssignmentRecord {
            assignment_id: id,
            talent_id,
            talent_name: name.to_string(),
            status,
        }
    }

    // -----------------------------------------------------------------------
    // Fill math
    // -----------------------------------------------------------------------

    #[test]
    fn unfilled_slot_reports_partial_percent() {
        let demands = [demand(1, None, "FOH Sound", "Sound → Live Production", 2)];
        let assignments = [assignment(10, None, "FOH Sound", AssignmentStatus::Planned)];

        let slots = compute_fulfillment(&demands, &assignments);
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].filled_count, 1);
        assert!(!slots[0].is_filled);
        assert_eq!(slots[0].fill_percent, 50);
        assert_eq!(slots[0].assignment_ids, vec![10]);
    }

    #[test]
    fn overstaffed_slot_caps_percent_at_100() {
        let demands = [demand(1, None, "Rigger", "", 1)];
        let assignments = [
            assignment(10, None, "Rigger", AssignmentStatus::Planned),
            assignment(11, None, "Rigger", AssignmentStatus::Confirmed),
            assignment(12, None, "Rigger", AssignmentStatus::Confirmed),
        ];

        let slots = compute_fulfillment(&demands, &assignments);
        assert_eq!(slots[0].filled_count, 3);
        assert!(slots[0].is_filled);
        assert_eq!(slots[0].fill_percent, 100);
    }

    /// Pins the Cancelled semantics: a Cancelled assignment stays attached to
    /// the slot for display but does not count toward `filled_count`.
    #[test]
    fn cancelled_assignments_do_not_fill_slots() {
        let demands = [demand(1, None, "FOH Sound", "Sound → Live Production", 2)];
        let assignments = [
            assignment(10, None, "FOH Sound", AssignmentStatus::Planned),
            assignment(11, None, "FOH Sound", AssignmentStatus::Cancelled),
        ];

        let slots = compute_fulfillment(&demands, &assignments);
        assert_eq!(slots[0].filled_count, 1);
        assert!(!slots[0].is_filled);
        // Both assignments remain listed for display.
        assert_eq!(slots[0].assignment_ids, vec![10, 11]);
    }

    #[test]
    fn no_assignments_yields_zero_fill() {
        let demands = [demand(1, None, "Camera Op", "Video", 3)];
        let slots = compute_fulfillment(&demands, &[]);
        assert_eq!(slots[0].filled_count, 0);
        assert_eq!(slots[0].fill_percent, 0);
        assert!(!slots[0].is_filled);
        assert!(slots[0].assignment_ids.is_empty());
    }

    // -----------------------------------------------------------------------
    // Matching
    // -----------------------------------------------------------------------

    #[test]
    fn name_matching_is_case_sensitive() {
        let demands = [demand(1, None, "FOH Sound", "", 1)];
        let assignments = [assignment(10, None, "foh sound", AssignmentStatus::Planned)];

        let slots = compute_fulfillment(&demands, &assignments);
        assert_eq!(slots[0].filled_count, 0);
    }

    #[test]
    fn id_match_wins_over_name_mismatch() {
        // The talent was renamed after the demand snapshot was taken; the
        // stable id still links the assignment to the demand.
        let demands = [demand(1, Some(7), "FOH Sound", "", 1)];
        let assignments = [assignment(10, Some(7), "Front of House", AssignmentStatus::Confirmed)];

        let slots = compute_fulfillment(&demands, &assignments);
        assert_eq!(slots[0].filled_count, 1);
        assert!(slots[0].is_filled);
    }

    #[test]
    fn id_mismatch_blocks_name_fallback() {
        // Both sides carry ids and they differ: a same-named but distinct
        // talent must not fill the slot.
        let demands = [demand(1, Some(7), "Host", "", 1)];
        let assignments = [assignment(10, Some(8), "Host", AssignmentStatus::Planned)];

        let slots = compute_fulfillment(&demands, &assignments);
        assert_eq!(slots[0].filled_count, 0);
    }

    #[test]
    fn name_fallback_applies_when_either_id_is_gone() {
        let demands = [demand(1, Some(7), "Host", "", 1)];
        let assignments = [assignment(10, None, "Host", AssignmentStatus::Planned)];

        let slots = compute_fulfillment(&demands, &assignments);
        assert_eq!(slots[0].filled_count, 1);
    }

    // -----------------------------------------------------------------------
    // Grouping
    // -----------------------------------------------------------------------

    #[test]
    fn groups_by_last_path_segment() {
        let demands = [
            demand(1, None, "FOH Sound", "Sound → Live Production", 2),
            demand(2, None, "Monitor Tech", "Sound → Live Production", 1),
            demand(3, None, "Camera Op", "Video", 2),
        ];
        let assignments = [
            assignment(10, None, "FOH Sound", AssignmentStatus::Planned),
            assignment(11, None, "Camera Op", AssignmentStatus::Confirmed),
            assignment(12, None, "Camera Op", AssignmentStatus::Confirmed),
        ];

        let slots = compute_fulfillment(&demands, &assignments);
        assert_eq!(slots[0].group, "Live Production");

        let groups = group_fulfillment(&slots);
        assert_eq!(groups.len(), 2);
        // BTreeMap ordering: "Live Production" < "Video".
        assert_eq!(groups[0].group, "Live Production");
        assert_eq!(groups[0].filled_count, 1);
        assert_eq!(groups[0].required_count, 3);
        assert_eq!(groups[0].fill_percent, 33);
        assert_eq!(groups[1].group, "Video");
        assert_eq!(groups[1].fill_percent, 100);
    }

    #[test]
    fn empty_path_groups_under_uncategorized() {
        let demands = [demand(1, None, "Runner", "", 1)];
        let slots = compute_fulfillment(&demands, &[]);
        assert_eq!(slots[0].group, UNCATEGORIZED_GROUP);
    }

    #[test]
    fn zero_required_group_reports_zero_percent() {
        let slots = [SlotStatus {
            demand_id: 1,
            talent_name: "Observer".into(),
            group: "Extras".into(),
            required_count: 0,
            filled_count: 0,
            is_filled: true,
            fill_percent: 100,
            assignment_ids: vec![],
        }];
        let groups = group_fulfillment(&slots);
        assert_eq!(groups[0].fill_percent, 0);
    }
}
