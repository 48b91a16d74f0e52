// ============================================================================
// Catalog JSON Parsing Functions
// ============================================================================
//
// Degree catalogs are persisted as JSON with an array-form `courses` list;
// these functions deserialize that format into the keyed `DegreeCatalog`
// the placement engine works with.

use anyhow::{Context, Result};
use std::collections::HashMap;

use crate::api::{CourseDefinition, DegreeCatalog};

#[derive(serde::Deserialize)]
struct CatalogInput {
    pub major_id: String,
    pub catalog_year: String,
    #[serde(default)]
    pub checksum: String,
    pub courses: Vec<CourseDefinition>,
    pub recommended_order: Vec<String>,
}

fn validate_input_catalog(catalog_json: &str) -> Result<()> {
    let value: serde_json::Value =
        serde_json::from_str(catalog_json).context("Invalid catalog JSON")?;
    let obj = value
        .as_object()
        .context("Catalog JSON must be an object")?;
    if obj.get("courses").is_none() {
        anyhow::bail!("Missing required 'courses' field");
    }
    if obj.get("recommended_order").is_none() {
        anyhow::bail!("Missing required 'recommended_order' field");
    }
    Ok(())
}

/// Parse a degree catalog from a JSON string.
///
/// Deserializes the persisted catalog format (`major_id`, `catalog_year`,
/// `courses[]`, `recommended_order[]`) using Serde and keys the course list
/// by code. Duplicate codes keep the last definition, matching the source
/// data's behavior, and are logged. A checksum over the source JSON is
/// computed when the file does not carry one.
///
/// # Arguments
///
/// * `catalog_json` - Catalog JSON (snake_case format matching the schema)
///
/// # Returns
///
/// A fully populated `DegreeCatalog` with a computed checksum.
pub fn parse_catalog_json_str(catalog_json: &str) -> Result<DegreeCatalog> {
    validate_input_catalog(catalog_json)?;

    let input: CatalogInput = serde_json::from_str(catalog_json)
        .context("Failed to deserialize catalog JSON using Serde")?;

    let mut courses: HashMap<String, CourseDefinition> = HashMap::with_capacity(input.courses.len());
    for course in input.courses {
        if let Some(previous) = courses.insert(course.code.clone(), course) {
            log::warn!(
                "catalog {}: duplicate course definition for {}, keeping the last one",
                input.major_id,
                previous.code
            );
        }
    }

    let mut catalog = DegreeCatalog {
        major_id: input.major_id,
        catalog_year: input.catalog_year,
        checksum: input.checksum,
        courses,
        recommended_order: input.recommended_order,
    };

    // Compute checksum if not provided
    if catalog.checksum.is_empty() {
        catalog.checksum = compute_catalog_checksum(catalog_json);
    }

    Ok(catalog)
}

/// Compute a checksum for the catalog JSON
fn compute_catalog_checksum(json_str: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(json_str.as_bytes());
    let result = hasher.finalize();
    hex::encode(result)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL_CATALOG: &str = r#"{
        "major_id": "CS_BS_2021_2022",
        "catalog_year": "2021-2022",
        "courses": [
            { "code": "ENGL 1301", "name": "First Year Writing I", "credits": 3, "prereqs": [] },
            { "code": "ENGL 1302", "credits": 3, "prereqs": ["ENGL 1301"] }
        ],
        "recommended_order": ["ENGL 1301", "ENGL 1302"]
    }"#;

    #[test]
    fn test_parse_minimal_catalog() {
        let result = parse_catalog_json_str(MINIMAL_CATALOG);
        assert!(result.is_ok(), "Should parse minimal catalog: {:?}", result.err());

        let catalog = result.unwrap();
        assert_eq!(catalog.major_id, "CS_BS_2021_2022");
        assert_eq!(catalog.catalog_year, "2021-2022");
        assert_eq!(catalog.courses.len(), 2);
        assert_eq!(catalog.recommended_order.len(), 2);

        let writing = &catalog.courses["ENGL 1302"];
        assert_eq!(writing.credits, 3);
        assert_eq!(writing.prerequisites, vec!["ENGL 1301".to_string()]);
    }

    #[test]
    fn test_parse_computes_checksum_when_absent() {
        let catalog = parse_catalog_json_str(MINIMAL_CATALOG).unwrap();
        assert_eq!(catalog.checksum.len(), 64, "expected hex-encoded SHA256");

        // Same bytes in, same checksum out.
        let again = parse_catalog_json_str(MINIMAL_CATALOG).unwrap();
        assert_eq!(catalog.checksum, again.checksum);
    }

    #[test]
    fn test_parse_keeps_provided_checksum() {
        let json = r#"{
            "major_id": "X",
            "catalog_year": "Y",
            "checksum": "precomputed",
            "courses": [],
            "recommended_order": []
        }"#;
        let catalog = parse_catalog_json_str(json).unwrap();
        assert_eq!(catalog.checksum, "precomputed");
    }

    #[test]
    fn test_parse_duplicate_course_codes_last_wins() {
        let json = r#"{
            "major_id": "X",
            "catalog_year": "Y",
            "courses": [
                { "code": "COSC 1336", "credits": 3, "prereqs": [] },
                { "code": "COSC 1336", "credits": 4, "prereqs": [] }
            ],
            "recommended_order": ["COSC 1336"]
        }"#;
        let catalog = parse_catalog_json_str(json).unwrap();
        assert_eq!(catalog.courses.len(), 1);
        assert_eq!(catalog.courses["COSC 1336"].credits, 4);
    }

    #[test]
    fn test_missing_courses_key() {
        let json = r#"{"major_id": "X", "catalog_year": "Y", "recommended_order": []}"#;
        let result = parse_catalog_json_str(json);
        assert!(result.is_err(), "Should fail without courses key");
    }

    #[test]
    fn test_missing_recommended_order_key() {
        let json = r#"{"major_id": "X", "catalog_year": "Y", "courses": []}"#;
        let result = parse_catalog_json_str(json);
        assert!(result.is_err(), "Should fail without recommended_order key");
    }

    #[test]
    fn test_invalid_json() {
        let result = parse_catalog_json_str("not valid json {");
        assert!(result.is_err(), "Should fail with invalid JSON");
    }

    #[test]
    fn test_non_object_json() {
        let result = parse_catalog_json_str("[1, 2, 3]");
        assert!(result.is_err(), "Should fail when the top level is not an object");
    }
}
