//! Placement engine: greedy assignment of catalog courses to terms.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;

use crate::api::{DegreeCatalog, PlacedCourse, PlanResult, TermPlan};
use crate::models::TermLabel;

use super::sequence::generate_terms;

/// Default planning horizon: a 4-year, two-terms-per-year degree plan.
pub const DEFAULT_HORIZON: usize = 8;

/// Course codes look like `COSC 1336`: 3-4 uppercase letters, optional
/// whitespace, exactly 4 digits.
static COURSE_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{3,4}\s*\d{4}$").expect("course code regex"));

/// Whether `code` has the canonical course-code shape.
pub fn is_course_code(code: &str) -> bool {
    COURSE_CODE_RE.is_match(code)
}

/// Assign the catalog's recommended courses to terms.
///
/// A single deterministic greedy pass with no backtracking: terms are
/// visited in sequence order and, within each term, candidates in their
/// recommended-order position. That iteration order is part of the
/// contract: earlier-listed courses get first claim on a term's limited
/// credit capacity.
///
/// Courses that never fit the horizon are reported through one summary
/// warning; a post-placement audit appends an ordering warning for every
/// placed prerequisite that landed in a later term than its dependent.
/// The engine never fails for well-typed input: unknown prerequisite codes
/// are simply never satisfiable and push their dependents to the leftovers.
///
/// # Arguments
///
/// * `catalog` - Degree catalog; read-only, never mutated
/// * `start` - First term of the plan
/// * `completed` - Course codes already completed; read-only, copied internally
/// * `max_credits_per_term` - Per-term credit cap
/// * `horizon` - Number of terms to plan into (callers default to [`DEFAULT_HORIZON`])
///
/// # Returns
///
/// A [`PlanResult`] whose `terms` always has exactly `horizon` entries,
/// whether used or not.
pub fn schedule_plan(
    catalog: &DegreeCatalog,
    start: TermLabel,
    completed: &HashSet<String>,
    max_credits_per_term: u32,
    horizon: usize,
) -> PlanResult {
    // Candidate list: recommended order, minus completed courses and
    // malformed codes. Duplicates survive; the placed-map check below keeps
    // a code from ever being placed twice.
    let candidates: Vec<&str> = catalog
        .recommended_order
        .iter()
        .map(String::as_str)
        .filter(|code| !completed.contains(*code) && is_course_code(code))
        .collect();

    let mut terms: Vec<TermPlan> = generate_terms(start, horizon)
        .into_iter()
        .map(TermPlan::new)
        .collect();

    let mut satisfied: HashSet<String> = completed.clone();
    let mut placed: HashMap<String, usize> = HashMap::new();
    let mut total_credits = 0u32;
    let mut warnings: Vec<String> = Vec::new();

    for (term_idx, term) in terms.iter_mut().enumerate() {
        let mut term_credits = 0u32;
        for &code in &candidates {
            if placed.contains_key(code) {
                continue;
            }
            let Some(course) = catalog.courses.get(code) else {
                continue;
            };
            let prereqs_met = course
                .prerequisites
                .iter()
                .all(|prereq| satisfied.contains(prereq));
            if prereqs_met && term_credits + course.credits <= max_credits_per_term {
                term.courses.push(PlacedCourse {
                    code: code.to_string(),
                    credits: course.credits,
                });
                term_credits += course.credits;
                placed.insert(code.to_string(), term_idx);
                satisfied.insert(code.to_string());
            }
        }
        total_credits += term_credits;
    }

    let leftovers: Vec<&str> = candidates
        .iter()
        .copied()
        .filter(|code| !placed.contains_key(*code))
        .collect();
    if !leftovers.is_empty() {
        let preview = leftovers
            .iter()
            .take(6)
            .copied()
            .collect::<Vec<_>>()
            .join(", ");
        warnings.push(format!(
            "{} course(s) not placed within {} terms: {}...",
            leftovers.len(),
            terms.len(),
            preview
        ));
        log::debug!(
            "plan for {} left {} course(s) unplaced",
            catalog.major_id,
            leftovers.len()
        );
    }

    warnings.extend(audit_prerequisite_order(catalog, &terms, &placed));

    PlanResult {
        terms,
        total_credits,
        warnings,
    }
}

/// Check every placed course's declared prerequisites against the placement.
///
/// Emits one warning per placed prerequisite that landed in a strictly later
/// term than its dependent, in placement order so the warning sequence is
/// deterministic. Placement itself cannot produce a violation for
/// catalog-resident prerequisites; this catches inconsistent arrangements
/// built by callers that bypass the engine.
pub(crate) fn audit_prerequisite_order(
    catalog: &DegreeCatalog,
    terms: &[TermPlan],
    placed: &HashMap<String, usize>,
) -> Vec<String> {
    let mut warnings = Vec::new();
    for (term_idx, term) in terms.iter().enumerate() {
        for course in &term.courses {
            if let Some(definition) = catalog.courses.get(&course.code) {
                for prereq in &definition.prerequisites {
                    if let Some(&prereq_idx) = placed.get(prereq) {
                        if prereq_idx > term_idx {
                            warnings.push(format!(
                                "Prerequisite order issue: {} should be before {}.",
                                prereq, course.code
                            ));
                        }
                    }
                }
            }
        }
    }
    warnings
}
