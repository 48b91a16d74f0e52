//! Tests against the committed CS catalog fixture under `data/maps`.

use std::collections::HashSet;
use std::path::PathBuf;

use gradplan_rust::catalogs::{CatalogRepository, LocalRepository};
use gradplan_rust::services::{self, PlanRequest};

const MAJOR_ID: &str = "CS_BS_2021_2022";

fn repo_data_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/maps")
}

fn load_real_catalogs() -> LocalRepository {
    LocalRepository::from_dir(repo_data_path()).expect("Failed to load repository catalog fixtures")
}

#[tokio::test]
async fn test_fixture_catalog_loads() {
    let repo = load_real_catalogs();
    assert_eq!(repo.catalog_count().await.unwrap(), 1);

    let catalog = repo.fetch_catalog(MAJOR_ID).await.unwrap();
    assert_eq!(catalog.catalog_year, "2021-2022");
    assert_eq!(catalog.courses.len(), 31, "Unexpected course count");
    assert_eq!(
        catalog.recommended_order.len(),
        32,
        "recommended_order keeps its duplicate entry"
    );
    assert_eq!(catalog.checksum.len(), 64, "checksum computed at load");

    let intro = &catalog.courses["COSC 1336"];
    assert_eq!(intro.credits, 3);
    assert!(intro.prerequisites.is_empty());
    assert_eq!(intro.name.as_deref(), Some("Computer Science and Programming"));

    let os = &catalog.courses["COSC 3360"];
    assert_eq!(os.prerequisites, vec!["COSC 3320".to_string()]);
}

#[tokio::test]
async fn test_full_cs_plan_fits_eight_terms() {
    let repo = load_real_catalogs();
    let request = PlanRequest::new(MAJOR_ID, "Fall-2025");

    let outcome = services::generate_plan(&repo, &request).await.unwrap();
    let result = &outcome.result;

    assert_eq!(result.terms.len(), 8);
    assert!(result.warnings.is_empty(), "warnings: {:?}", result.warnings);
    assert_eq!(result.total_credits, 98);

    // Every catalog course appears exactly once, despite the duplicated
    // recommended_order entry.
    let placed = result.placed_codes();
    assert_eq!(placed.len(), 31);
    let unique: HashSet<&str> = placed.iter().copied().collect();
    assert_eq!(unique.len(), 31);

    // Per-term credit cap holds everywhere.
    for term in &result.terms {
        assert!(
            term.credits() <= 15,
            "{} holds {} credits",
            term.label,
            term.credits()
        );
    }
}

#[tokio::test]
async fn test_cs_plan_prerequisites_never_in_later_terms() {
    let repo = load_real_catalogs();
    let catalog = repo.fetch_catalog(MAJOR_ID).await.unwrap();
    let request = PlanRequest::new(MAJOR_ID, "Fall-2025");

    let outcome = services::generate_plan(&repo, &request).await.unwrap();

    let mut term_of = std::collections::HashMap::new();
    for (idx, term) in outcome.result.terms.iter().enumerate() {
        for placed in &term.courses {
            term_of.insert(placed.code.clone(), idx);
        }
    }
    for (code, idx) in &term_of {
        for prereq in &catalog.courses[code.as_str()].prerequisites {
            if let Some(prereq_idx) = term_of.get(prereq) {
                assert!(
                    prereq_idx <= idx,
                    "{} scheduled after its dependent {}",
                    prereq,
                    code
                );
            }
        }
    }
}

#[tokio::test]
async fn test_transfer_student_plan() {
    let repo = load_real_catalogs();
    let mut request = PlanRequest::new(MAJOR_ID, "Spring-2026");
    // A transfer student arriving with the whole first year done.
    request.completed = [
        "ENGL 1301", "HIST 1301", "MATH 1324", "COSC 1336", "ENGL 1302", "HIST 1302",
        "GOVT 2305", "COSC 1437",
    ]
    .iter()
    .map(|c| c.to_string())
    .collect();

    let outcome = services::generate_plan(&repo, &request).await.unwrap();
    let result = &outcome.result;

    assert!(result.warnings.is_empty(), "warnings: {:?}", result.warnings);
    // The completed first year carries 25 credits (7 three-credit courses
    // plus COSC 1437 at four).
    assert_eq!(result.placed_codes().len(), 31 - 8);
    assert_eq!(result.total_credits, 98 - 25);
    for completed in &request.completed {
        assert!(!result.placed_codes().contains(&completed.as_str()));
    }
}
