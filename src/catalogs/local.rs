//! In-memory catalog repository.
//!
//! Catalogs are small JSON documents, so the whole store lives in memory:
//! either populated programmatically (tests, embedding callers) or loaded
//! once from a directory of `*.json` catalog files at startup.

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use parking_lot::RwLock;

use super::error::{CatalogError, CatalogResult};
use super::repository::CatalogRepository;
use crate::api::{CatalogSummary, DegreeCatalog};
use crate::models::catalog::parse_catalog_json_str;

/// In-memory implementation of [`CatalogRepository`].
#[derive(Default)]
pub struct LocalRepository {
    catalogs: RwLock<HashMap<String, DegreeCatalog>>,
}

impl LocalRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert (or replace) a catalog, keyed by its major id.
    pub fn insert_catalog(&self, catalog: DegreeCatalog) {
        self.catalogs
            .write()
            .insert(catalog.major_id.clone(), catalog);
    }

    /// Load every `*.json` catalog file in `dir` into a new repository.
    ///
    /// A file that fails to load is logged and skipped; it never aborts
    /// loading of its siblings. Only the directory read itself is fatal.
    pub fn from_dir(dir: impl AsRef<Path>) -> CatalogResult<Self> {
        let dir = dir.as_ref();
        let repo = Self::new();
        let mut loaded = 0usize;

        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            match load_catalog_file(&path) {
                Ok(catalog) => {
                    log::info!(
                        "loaded catalog {} ({} courses) from {:?}",
                        catalog.major_id,
                        catalog.courses.len(),
                        path.file_name().unwrap_or_default()
                    );
                    repo.insert_catalog(catalog);
                    loaded += 1;
                }
                Err(e) => {
                    log::warn!("skipping catalog file: {}", e);
                }
            }
        }

        log::info!("catalog directory {:?}: {} catalog(s) loaded", dir, loaded);
        Ok(repo)
    }
}

/// Load a single catalog JSON file.
///
/// # Returns
/// * `Ok(DegreeCatalog)` - The parsed catalog, checksum filled in
/// * `Err(CatalogError::Malformed)` - If the file does not parse or fails
///   validation
/// * `Err(CatalogError::Io)` - If the file cannot be read
pub fn load_catalog_file(path: impl AsRef<Path>) -> CatalogResult<DegreeCatalog> {
    let path = path.as_ref();
    let source_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("<non-utf8 file name>")
        .to_string();

    let json = std::fs::read_to_string(path)?;
    parse_catalog_json_str(&json)
        .map_err(|e| CatalogError::malformed(source_name, format!("{:#}", e)))
}

#[async_trait]
impl CatalogRepository for LocalRepository {
    async fn list_majors(&self) -> CatalogResult<Vec<CatalogSummary>> {
        let mut majors: Vec<CatalogSummary> = self
            .catalogs
            .read()
            .values()
            .map(|catalog| CatalogSummary {
                major_id: catalog.major_id.clone(),
                catalog_year: catalog.catalog_year.clone(),
                course_count: catalog.courses.len(),
                checksum: catalog.checksum.clone(),
            })
            .collect();
        majors.sort_by(|a, b| a.major_id.cmp(&b.major_id));
        Ok(majors)
    }

    async fn fetch_catalog(&self, major_id: &str) -> CatalogResult<DegreeCatalog> {
        self.catalogs
            .read()
            .get(major_id)
            .cloned()
            .ok_or_else(|| CatalogError::not_found(major_id))
    }

    async fn catalog_count(&self) -> CatalogResult<usize> {
        Ok(self.catalogs.read().len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::CourseDefinition;

    fn minimal_catalog(major_id: &str) -> DegreeCatalog {
        let mut catalog = DegreeCatalog::new(
            major_id,
            "2021-2022",
            HashMap::from([(
                "ENGL 1301".to_string(),
                CourseDefinition::new("ENGL 1301", 3, vec![]),
            )]),
            vec!["ENGL 1301".to_string()],
        );
        catalog.checksum = format!("checksum-{}", major_id);
        catalog
    }

    #[tokio::test]
    async fn test_insert_and_fetch() {
        let repo = LocalRepository::new();
        repo.insert_catalog(minimal_catalog("CS_BS"));

        let catalog = repo.fetch_catalog("CS_BS").await.unwrap();
        assert_eq!(catalog.major_id, "CS_BS");
        assert_eq!(catalog.courses.len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_unknown_major() {
        let repo = LocalRepository::new();
        let err = repo.fetch_catalog("MIS_BBA").await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound { ref major_id } if major_id == "MIS_BBA"));
    }

    #[tokio::test]
    async fn test_list_majors_sorted() {
        let repo = LocalRepository::new();
        repo.insert_catalog(minimal_catalog("MIS_BBA"));
        repo.insert_catalog(minimal_catalog("CIS_BS"));
        repo.insert_catalog(minimal_catalog("CS_BS"));

        let majors = repo.list_majors().await.unwrap();
        let ids: Vec<&str> = majors.iter().map(|m| m.major_id.as_str()).collect();
        assert_eq!(ids, vec!["CIS_BS", "CS_BS", "MIS_BBA"]);
        assert_eq!(majors[0].course_count, 1);
        assert_eq!(majors[0].checksum, "checksum-CIS_BS");
    }

    #[tokio::test]
    async fn test_insert_replaces_existing() {
        let repo = LocalRepository::new();
        repo.insert_catalog(minimal_catalog("CS_BS"));

        let mut updated = minimal_catalog("CS_BS");
        updated.catalog_year = "2022-2023".to_string();
        repo.insert_catalog(updated);

        assert_eq!(repo.catalog_count().await.unwrap(), 1);
        let catalog = repo.fetch_catalog("CS_BS").await.unwrap();
        assert_eq!(catalog.catalog_year, "2022-2023");
    }

    #[tokio::test]
    async fn test_from_dir_loads_valid_and_skips_malformed() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("cs.json"),
            r#"{
                "major_id": "CS_BS",
                "catalog_year": "2021-2022",
                "courses": [{ "code": "COSC 1336", "credits": 3, "prereqs": [] }],
                "recommended_order": ["COSC 1336"]
            }"#,
        )
        .unwrap();
        std::fs::write(dir.path().join("broken.json"), "not valid json {").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let repo = LocalRepository::from_dir(dir.path()).unwrap();
        assert_eq!(repo.catalog_count().await.unwrap(), 1);
        assert!(repo.fetch_catalog("CS_BS").await.is_ok());
    }

    #[test]
    fn test_from_dir_missing_directory_is_fatal() {
        let result = LocalRepository::from_dir("/definitely/not/a/real/dir");
        assert!(matches!(result, Err(CatalogError::Io(_))));
    }

    #[test]
    fn test_load_catalog_file_reports_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, r#"{"major_id": "X"}"#).unwrap();

        let err = load_catalog_file(&path).unwrap_err();
        match err {
            CatalogError::Malformed { source_name, .. } => {
                assert_eq!(source_name, "broken.json");
            }
            other => panic!("expected Malformed, got {:?}", other),
        }
    }
}
