pub mod category;
pub mod production;
pub mod staffing;
pub mod talent;
