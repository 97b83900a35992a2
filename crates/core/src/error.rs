use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// A parent-pointer structure could not be topologically resolved.
    ///
    /// This indicates stored-data corruption (a node whose parent is not a
    /// valid ancestor, or a cycle), never a recoverable user error.
    #[error("Malformed hierarchy: node {node_id} has an unresolvable parent")]
    MalformedHierarchy { node_id: DbId },

    #[error("Internal error: {0}")]
    Internal(String),
}
