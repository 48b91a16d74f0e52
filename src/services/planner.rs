//! Plan generation service.
//!
//! Orchestrates a planning request: fetch the catalog, validate the start
//! term, run the placement engine. The engine itself is pure; everything
//! fallible happens here at the boundary.

use std::collections::HashSet;

use thiserror::Error;

use crate::api::{CatalogSummary, PlanResult, TermLabel};
use crate::catalogs::{CatalogError, CatalogRepository, CatalogResult};
use crate::models::InvalidTermFormat;
use crate::scheduler::{self, DEFAULT_HORIZON};

/// Default per-term credit cap used when a request does not carry one.
pub const DEFAULT_MAX_CREDITS: u32 = 15;

/// Error type for plan generation: either the catalog boundary failed or
/// the start term did not parse. Unplaceable courses are *not* errors; they
/// come back as warnings on the result.
#[derive(Debug, Error)]
pub enum PlanServiceError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    InvalidTerm(#[from] InvalidTermFormat),
}

/// A planning request as received from a collaborator surface (HTTP, CLI).
#[derive(Debug, Clone)]
pub struct PlanRequest {
    pub major_id: String,
    /// Start term label string, e.g. `Fall-2025`; validated here.
    pub start: String,
    pub completed: HashSet<String>,
    pub max_credits_per_term: u32,
    pub horizon: usize,
}

impl PlanRequest {
    pub fn new(major_id: impl Into<String>, start: impl Into<String>) -> Self {
        Self {
            major_id: major_id.into(),
            start: start.into(),
            completed: HashSet::new(),
            max_credits_per_term: DEFAULT_MAX_CREDITS,
            horizon: DEFAULT_HORIZON,
        }
    }
}

/// A generated plan together with the catalog identity it was planned from.
#[derive(Debug, Clone)]
pub struct PlanOutcome {
    pub major_id: String,
    pub catalog_year: String,
    pub start: TermLabel,
    pub result: PlanResult,
}

/// Generate a degree plan for a request.
///
/// # Arguments
/// * `repo` - Catalog repository to resolve `major_id` against
/// * `request` - The planning request
///
/// # Returns
/// * `Ok(PlanOutcome)` - A complete plan; partial placement is reported via
///   the result's warnings, never as an error
/// * `Err(PlanServiceError)` - Unknown major or malformed start term
pub async fn generate_plan(
    repo: &dyn CatalogRepository,
    request: &PlanRequest,
) -> Result<PlanOutcome, PlanServiceError> {
    let start: TermLabel = request.start.parse()?;
    let catalog = repo.fetch_catalog(&request.major_id).await?;

    let result = scheduler::schedule_plan(
        &catalog,
        start,
        &request.completed,
        request.max_credits_per_term,
        request.horizon,
    );

    log::info!(
        "planned {} from {}: {} credits over {} terms, {} warning(s)",
        catalog.major_id,
        start,
        result.total_credits,
        result.terms.len(),
        result.warnings.len()
    );

    Ok(PlanOutcome {
        major_id: catalog.major_id,
        catalog_year: catalog.catalog_year,
        start,
        result,
    })
}

/// List the majors available for planning.
pub async fn list_majors(repo: &dyn CatalogRepository) -> CatalogResult<Vec<CatalogSummary>> {
    repo.list_majors().await
}
