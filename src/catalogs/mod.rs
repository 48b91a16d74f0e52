//! Catalog storage for degree planning.
//!
//! This module provides abstractions for catalog access via the Repository
//! pattern, keeping the placement engine decoupled from where catalogs
//! actually come from.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (REST API, CLI)                      │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services::planner) - Business Logic     │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Trait (repository.rs) - Abstract Interface  │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌──────────────────────────────────────────────┐
//!     │             Local Repository                  │
//!     │      (in-memory, JSON-directory loader)       │
//!     └──────────────────────────────────────────────┘
//! ```
//!
//! The placement engine never reaches into this module: catalogs are fetched
//! here and passed to the engine as plain values.

pub mod error;
pub mod local;
pub mod repository;

pub use error::{CatalogError, CatalogResult};
pub use local::{load_catalog_file, LocalRepository};
pub use repository::CatalogRepository;
