//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Methods that must run inside
//! the instantiation transaction take a generic `PgExecutor` instead.

pub mod assignment_repo;
pub mod category_repo;
pub mod check_in_repo;
pub mod demand_repo;
pub mod instantiation;
pub mod person_repo;
pub mod plan_repo;
pub mod production_repo;
pub mod talent_category_repo;
pub mod talent_repo;
pub mod template_repo;

pub use assignment_repo::AssignmentRepo;
pub use category_repo::CategoryRepo;
pub use check_in_repo::CheckInRepo;
pub use demand_repo::DemandRepo;
pub use instantiation::{InstantiationError, InstantiationSummary, Instantiator};
pub use person_repo::PersonRepo;
pub use plan_repo::PlanRepo;
pub use production_repo::ProductionRepo;
pub use talent_category_repo::TalentCategoryRepo;
pub use talent_repo::TalentRepo;
pub use template_repo::TemplateRepo;
