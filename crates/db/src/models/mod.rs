//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod assignment;
pub mod category;
pub mod check_in;
pub mod demand;
pub mod person;
pub mod plan_node;
pub mod production;
pub mod talent;
pub mod template;
