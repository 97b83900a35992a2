//! Generic parent-pointer tree remapping.
//!
//! Copying a template plan into a production requires fresh row identities
//! while preserving the parent/child structure. The planner here is
//! deliberately N-level safe even though the current plan schema only nests
//! two levels (heading -> event): it computes topological levels over
//! `{id, parent_id}` pairs so the persistence layer can insert parents
//! before children and translate parent references through an old->new map.

use std::collections::HashSet;

use crate::error::CoreError;
use crate::types::DbId;

/// A node's identity and optional parent reference, as read from storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemapNode {
    pub id: DbId,
    pub parent_id: Option<DbId>,
}

/// Insertion order for a tree copy: `levels[0]` are the roots, `levels[k]`
/// are nodes whose parent sits in an earlier level. Values are indices into
/// the input slice, preserving input order within each level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemapPlan {
    pub levels: Vec<Vec<usize>>,
}

impl RemapPlan {
    /// Total number of nodes covered by the plan.
    pub fn node_count(&self) -> usize {
        self.levels.iter().map(Vec::len).sum()
    }
}

/// Compute a parents-before-children insertion plan for `nodes`.
///
/// Iterates to a fixpoint: level 0 is every node without a parent, each
/// subsequent level is every remaining node whose parent was placed earlier.
/// If a pass places nothing while nodes remain (a node pointing at a
/// non-root sibling that itself never resolves, a dangling parent id, or a
/// cycle), the first leftover node is reported as
/// [`CoreError::MalformedHierarchy`]. Nodes are never silently dropped.
pub fn plan_remap(nodes: &[RemapNode]) -> Result<RemapPlan, CoreError> {
    let mut placed: HashSet<DbId> = HashSet::with_capacity(nodes.len());
    let mut remaining: Vec<usize> = (0..nodes.len()).collect();
    let mut levels: Vec<Vec<usize>> = Vec::new();

    while !remaining.is_empty() {
        let mut level: Vec<usize> = Vec::new();
        let mut next_remaining: Vec<usize> = Vec::new();

        for &idx in &remaining {
            match nodes[idx].parent_id {
                None => level.push(idx),
                Some(parent) if placed.contains(&parent) => level.push(idx),
                Some(_) => next_remaining.push(idx),
            }
        }

        if level.is_empty() {
            // No progress: whatever is left has an unresolvable parent.
            let node_id = nodes[next_remaining[0]].id;
            return Err(CoreError::MalformedHierarchy { node_id });
        }

        for &idx in &level {
            placed.insert(nodes[idx].id);
        }
        levels.push(level);
        remaining = next_remaining;
    }

    Ok(RemapPlan { levels })
}
