//! Plain-data plan summary for an external advisor collaborator.
//!
//! Natural-language plan explanation is produced by a separate
//! text-generation service, not by this crate. This module only defines the
//! data that service consumes: a compact digest of the plan with per-term
//! course codes and credit sums.

use serde::{Deserialize, Serialize};

use crate::api::{PlanResult, TermLabel};

/// One term of a [`PlanDigest`]: label, course codes, credit sum.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermDigest {
    pub label: String,
    pub courses: Vec<String>,
    pub credits: u32,
}

/// The advisor-facing summary of a generated plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanDigest {
    pub start: String,
    pub warnings: Vec<String>,
    pub terms: Vec<TermDigest>,
}

/// Build the advisor digest for a plan.
pub fn plan_digest(start: TermLabel, result: &PlanResult) -> PlanDigest {
    PlanDigest {
        start: start.to_string(),
        warnings: result.warnings.clone(),
        terms: result
            .terms
            .iter()
            .map(|term| TermDigest {
                label: term.label.to_string(),
                courses: term.courses.iter().map(|c| c.code.clone()).collect(),
                credits: term.credits(),
            })
            .collect(),
    }
}
