//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use axum::{
    extract::{Path, State},
    Json,
};

use super::dto::{
    DegreeCatalog, HealthResponse, MajorListResponse, PlanRequestDto, PlanResponseDto,
};
use super::error::AppError;
use super::state::AppState;
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and catalogs are
/// loaded.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let (status, catalogs) = match state.repository.catalog_count().await {
        Ok(count) => ("ok".to_string(), count),
        Err(e) => (format!("error: {}", e), 0),
    };

    Ok(Json(HealthResponse {
        status,
        version: "v1".to_string(),
        catalogs,
        timestamp: chrono::Utc::now().to_rfc3339(),
    }))
}

// =============================================================================
// Majors
// =============================================================================

/// GET /v1/majors
///
/// List all majors with a loaded catalog.
pub async fn list_majors(State(state): State<AppState>) -> HandlerResult<MajorListResponse> {
    let majors = services::list_majors(state.repository.as_ref()).await?;
    let total = majors.len();

    Ok(Json(MajorListResponse { majors, total }))
}

/// GET /v1/majors/{major_id}/catalog
///
/// Get the full degree catalog for a major.
pub async fn get_catalog(
    State(state): State<AppState>,
    Path(major_id): Path<String>,
) -> HandlerResult<DegreeCatalog> {
    let catalog = state.repository.fetch_catalog(&major_id).await?;
    Ok(Json(catalog))
}

// =============================================================================
// Plan Generation
// =============================================================================

/// POST /v1/plans
///
/// Generate a degree plan for a major, start term, and set of completed
/// courses. Always answers with a complete plan for valid input; courses
/// that could not be placed are reported in `warnings`.
pub async fn create_plan(
    State(state): State<AppState>,
    Json(request): Json<PlanRequestDto>,
) -> HandlerResult<PlanResponseDto> {
    if request.max_credits_per_term == 0 {
        return Err(AppError::BadRequest(
            "max_credits_per_term must be a positive integer".to_string(),
        ));
    }
    if request.horizon == 0 {
        return Err(AppError::BadRequest(
            "horizon must be a positive integer".to_string(),
        ));
    }

    let outcome =
        services::generate_plan(state.repository.as_ref(), &request.into()).await?;

    Ok(Json(PlanResponseDto::from_outcome(outcome)))
}
