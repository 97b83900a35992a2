//! Domain logic for the callsheet staffing platform.
//!
//! This crate has zero internal dependencies so the persistence layer, the
//! API server, and any future CLI tooling can all share the same template
//! instantiation and staffing fulfillment logic.

pub mod checkin;
pub mod error;
pub mod fulfillment;
pub mod remap;
pub mod taxonomy;
pub mod types;
