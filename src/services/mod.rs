//! Service layer for business logic and orchestration.
//!
//! Services sit between the catalog repository and the outer surfaces (HTTP
//! handlers, CLI), resolving catalogs and running the placement engine.

pub mod advisor;

pub mod planner;

pub use advisor::{plan_digest, PlanDigest, TermDigest};
pub use planner::{
    generate_plan, list_majors, PlanOutcome, PlanRequest, PlanServiceError, DEFAULT_MAX_CREDITS,
};
