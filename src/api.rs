//! Public data model for the degree planner.
//!
//! This file consolidates the types shared by the placement engine, the
//! catalog repository, and the HTTP API. All types derive
//! Serialize/Deserialize for JSON serialization.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub use crate::models::{Season, TermLabel};

fn default_category() -> String {
    "major".to_string()
}

/// A single course as defined by a degree catalog.
///
/// Immutable once loaded. `prerequisites` may reference codes outside the
/// catalog; such prerequisites are never satisfiable by placement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseDefinition {
    /// Course code, unique within a catalog (e.g. `COSC 1336`)
    pub code: String,
    /// Display name, if the catalog carries one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Credit weight of the course
    pub credits: u32,
    /// Course codes that must be satisfied before this course
    #[serde(default, rename = "prereqs")]
    pub prerequisites: Vec<String>,
    /// Free-form classification tag ("core", "elective", ...). Informational
    /// only; placement ignores it.
    #[serde(default = "default_category")]
    pub category: String,
}

impl CourseDefinition {
    pub fn new(code: impl Into<String>, credits: u32, prerequisites: Vec<String>) -> Self {
        Self {
            code: code.into(),
            name: None,
            credits,
            prerequisites,
            category: default_category(),
        }
    }
}

/// A degree catalog: the full course map plus the recommended completion
/// order for one major and catalog year.
///
/// `recommended_order` is caller-supplied data and is tolerated, not
/// trusted: it may contain duplicates or codes absent from `courses`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DegreeCatalog {
    /// Opaque major identifier (e.g. `CS_BS_2021_2022`)
    pub major_id: String,
    /// Opaque catalog year label (e.g. `2021-2022`)
    pub catalog_year: String,
    /// SHA256 checksum of the catalog source JSON
    #[serde(default)]
    pub checksum: String,
    /// Courses by code
    pub courses: HashMap<String, CourseDefinition>,
    /// Suggested completion sequence, flattened
    pub recommended_order: Vec<String>,
}

impl DegreeCatalog {
    pub fn new(
        major_id: impl Into<String>,
        catalog_year: impl Into<String>,
        courses: HashMap<String, CourseDefinition>,
        recommended_order: Vec<String>,
    ) -> Self {
        Self {
            major_id: major_id.into(),
            catalog_year: catalog_year.into(),
            checksum: String::new(),
            courses,
            recommended_order,
        }
    }
}

/// A course placed into a term: a snapshot of (code, credits), decoupled
/// from the catalog after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedCourse {
    pub code: String,
    pub credits: u32,
}

/// One academic term in a plan, with the courses placed into it in
/// placement order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermPlan {
    pub label: TermLabel,
    #[serde(default)]
    pub courses: Vec<PlacedCourse>,
}

impl TermPlan {
    pub fn new(label: TermLabel) -> Self {
        Self {
            label,
            courses: Vec::new(),
        }
    }

    /// Sum of credits placed into this term.
    pub fn credits(&self) -> u32 {
        self.courses.iter().map(|c| c.credits).sum()
    }
}

/// Result of a planning run: one entry per term in the horizon (whether
/// used or not), the total placed credits, and advisory warnings in
/// emission order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanResult {
    pub terms: Vec<TermPlan>,
    pub total_credits: u32,
    #[serde(default)]
    pub warnings: Vec<String>,
}

impl PlanResult {
    /// Codes of all placed courses, in placement order.
    pub fn placed_codes(&self) -> Vec<&str> {
        self.terms
            .iter()
            .flat_map(|t| t.courses.iter().map(|c| c.code.as_str()))
            .collect()
    }
}

/// Lightweight catalog descriptor for the majors listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSummary {
    pub major_id: String,
    pub catalog_year: String,
    pub course_count: usize,
    pub checksum: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn term(label: &str) -> TermLabel {
        label.parse().unwrap()
    }

    #[test]
    fn test_course_definition_new() {
        let course = CourseDefinition::new("COSC 1336", 3, vec![]);
        assert_eq!(course.code, "COSC 1336");
        assert_eq!(course.credits, 3);
        assert!(course.prerequisites.is_empty());
        assert_eq!(course.category, "major");
    }

    #[test]
    fn test_course_definition_deserialize_prereqs_field() {
        let course: CourseDefinition = serde_json::from_str(
            r#"{"code": "ENGL 1302", "credits": 3, "prereqs": ["ENGL 1301"]}"#,
        )
        .unwrap();
        assert_eq!(course.prerequisites, vec!["ENGL 1301".to_string()]);
        assert!(course.name.is_none());
    }

    #[test]
    fn test_term_plan_credits() {
        let mut plan = TermPlan::new(term("Fall-2025"));
        assert_eq!(plan.credits(), 0);

        plan.courses.push(PlacedCourse {
            code: "ENGL 1301".to_string(),
            credits: 3,
        });
        plan.courses.push(PlacedCourse {
            code: "MATH 2413".to_string(),
            credits: 4,
        });
        assert_eq!(plan.credits(), 7);
    }

    #[test]
    fn test_term_plan_serializes_label_as_string() {
        let plan = TermPlan::new(term("Spring-2026"));
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["label"], "Spring-2026");
        assert!(json["courses"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_plan_result_placed_codes() {
        let mut first = TermPlan::new(term("Fall-2025"));
        first.courses.push(PlacedCourse {
            code: "ENGL 1301".to_string(),
            credits: 3,
        });
        let mut second = TermPlan::new(term("Spring-2026"));
        second.courses.push(PlacedCourse {
            code: "ENGL 1302".to_string(),
            credits: 3,
        });

        let result = PlanResult {
            terms: vec![first, second],
            total_credits: 6,
            warnings: vec![],
        };
        assert_eq!(result.placed_codes(), vec!["ENGL 1301", "ENGL 1302"]);
    }

    #[test]
    fn test_degree_catalog_checksum_defaults_empty() {
        let catalog: DegreeCatalog = serde_json::from_str(
            r#"{
                "major_id": "CS_BS",
                "catalog_year": "2021-2022",
                "courses": {},
                "recommended_order": []
            }"#,
        )
        .unwrap();
        assert!(catalog.checksum.is_empty());
        assert!(catalog.courses.is_empty());
    }
}
