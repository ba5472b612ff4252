//! Domain services

pub mod claims;
pub mod load_plan;

pub use claims::CarrierClaims;
pub use load_plan::{generate_load_report, plan_load, LoadOutcome, LoadPlan, LoadPlanEntry};
