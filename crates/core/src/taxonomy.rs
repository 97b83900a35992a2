//! Talent taxonomy display paths.
//!
//! Talent categories form a self-referencing tree of unbounded depth. The
//! UI shows a talent's category as a root-first breadcrumb
//! (`"Sound → Live Production"`); fulfillment groups slots by the last
//! segment of that breadcrumb.

use std::collections::HashMap;

use crate::error::CoreError;
use crate::types::DbId;

/// Separator between path segments.
pub const PATH_SEPARATOR: &str = " → ";

/// One taxonomy row projected for path computation.
#[derive(Debug, Clone)]
pub struct PathNode {
    pub id: DbId,
    pub parent_id: Option<DbId>,
    pub name: String,
}

/// Build the root-first display path for `leaf_id` over an in-memory
/// taxonomy snapshot.
///
/// Walks parent pointers to the root rather than a fixed number of joins, so
/// depth is unbounded. A missing parent row or a cycle is stored-data
/// corruption and fails with [`CoreError::MalformedHierarchy`].
pub fn category_path(categories: &[PathNode], leaf_id: DbId) -> Result<String, CoreError> {
    let by_id: HashMap<DbId, &PathNode> = categories.iter().map(|c| (c.id, c)).collect();

    let mut segments: Vec<&str> = Vec::new();
    let mut current = Some(leaf_id);
    while let Some(id) = current {
        // A walk longer than the snapshot means we revisited a node.
        if segments.len() > categories.len() {
            return Err(CoreError::MalformedHierarchy { node_id: id });
        }
        let node = by_id
            .get(&id)
            .ok_or(CoreError::MalformedHierarchy { node_id: id })?;
        segments.push(node.name.as_str());
        current = node.parent_id;
    }

    segments.reverse();
    Ok(segments.join(PATH_SEPARATOR))
}

/// Last segment of a display path, or `None` for an empty path.
pub fn last_segment(path: &str) -> Option<&str> {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.rsplit(PATH_SEPARATOR).next().unwrap_or(trimmed))
}
