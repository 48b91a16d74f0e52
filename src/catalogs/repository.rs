//! Catalog repository trait.

use async_trait::async_trait;

use super::error::CatalogResult;
use crate::api::{CatalogSummary, DegreeCatalog};

/// Repository trait for degree catalog access.
///
/// Catalogs are constructed once from external data and read-only
/// thereafter; the repository hands out owned copies so the placement
/// engine never shares mutable state with the store.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// List the loaded majors, ordered by major id.
    ///
    /// # Returns
    /// * `Ok(Vec<CatalogSummary>)` - One summary per loaded catalog
    /// * `Err(CatalogError)` - If the listing fails
    async fn list_majors(&self) -> CatalogResult<Vec<CatalogSummary>>;

    /// Fetch the full catalog for a major.
    ///
    /// # Arguments
    /// * `major_id` - The major identifier, e.g. `CS_BS_2021_2022`
    ///
    /// # Returns
    /// * `Ok(DegreeCatalog)` - An owned copy of the stored catalog
    /// * `Err(CatalogError::NotFound)` - If no catalog is loaded for the id
    async fn fetch_catalog(&self, major_id: &str) -> CatalogResult<DegreeCatalog>;

    /// Number of catalogs currently loaded.
    async fn catalog_count(&self) -> CatalogResult<usize>;
}
