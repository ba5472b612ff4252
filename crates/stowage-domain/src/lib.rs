//! Domain layer for stowage: carriers, fleet registries, load planning

pub mod model;
pub mod service;

pub use model::{Carrier, FleetRegistry};
pub use service::{
    generate_load_report, plan_load, CarrierClaims, LoadOutcome, LoadPlan, LoadPlanEntry,
};
