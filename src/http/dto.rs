//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! Plan and catalog value types are re-exported from the api module since
//! they already derive Serialize/Deserialize.

use serde::{Deserialize, Serialize};

// Re-export existing DTOs that are already serializable
pub use crate::api::{CatalogSummary, DegreeCatalog, PlacedCourse, TermPlan};

use crate::scheduler::DEFAULT_HORIZON;
use crate::services::{PlanOutcome, PlanRequest, DEFAULT_MAX_CREDITS};

fn default_max_credits() -> u32 {
    DEFAULT_MAX_CREDITS
}

fn default_horizon() -> usize {
    DEFAULT_HORIZON
}

/// Request body for generating a degree plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRequestDto {
    /// Major identifier, e.g. `CS_BS_2021_2022`
    pub major_id: String,
    /// Start term label, e.g. `Fall-2025`
    pub start: String,
    /// Course codes already completed (default: none)
    #[serde(default)]
    pub completed: Vec<String>,
    /// Per-term credit cap (default: 15)
    #[serde(default = "default_max_credits")]
    pub max_credits_per_term: u32,
    /// Number of terms to plan into (default: 8)
    #[serde(default = "default_horizon")]
    pub horizon: usize,
}

impl From<PlanRequestDto> for PlanRequest {
    fn from(dto: PlanRequestDto) -> Self {
        PlanRequest {
            major_id: dto.major_id,
            start: dto.start,
            completed: dto.completed.into_iter().collect(),
            max_credits_per_term: dto.max_credits_per_term,
            horizon: dto.horizon,
        }
    }
}

/// Response body for a generated degree plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanResponseDto {
    pub major_id: String,
    pub catalog_year: String,
    pub start: String,
    /// One entry per term in the horizon, used or not
    pub terms: Vec<TermPlan>,
    pub total_credits: u32,
    pub warnings: Vec<String>,
    /// Advisor notes attached by a separate text-generation collaborator;
    /// never produced by this service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advisor_notes: Option<String>,
    /// RFC 3339 timestamp of plan generation
    pub generated_at: String,
}

impl PlanResponseDto {
    pub fn from_outcome(outcome: PlanOutcome) -> Self {
        Self {
            major_id: outcome.major_id,
            catalog_year: outcome.catalog_year,
            start: outcome.start.to_string(),
            terms: outcome.result.terms,
            total_credits: outcome.result.total_credits,
            warnings: outcome.result.warnings,
            advisor_notes: None,
            generated_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Attach advisor notes produced by an external collaborator.
    pub fn with_advisor_notes(mut self, notes: impl Into<String>) -> Self {
        self.advisor_notes = Some(notes.into());
        self
    }
}

/// Majors listing response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MajorListResponse {
    /// List of loaded catalogs
    pub majors: Vec<CatalogSummary>,
    /// Total count
    pub total: usize,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Number of catalogs loaded
    pub catalogs: usize,
    /// RFC 3339 timestamp of the check
    pub timestamp: String,
}
