//! Error types for catalog repository operations.

use thiserror::Error;

/// Result type for catalog repository operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Error type for catalog repository operations.
///
/// This is the `UnknownMajorOrMalformedCatalog` class of failures: they occur
/// at the caller boundary, before a plan request ever reaches the placement
/// engine.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No catalog is loaded for the requested major.
    #[error("Unknown major: {major_id}")]
    NotFound { major_id: String },

    /// The catalog source could not be parsed or failed validation.
    #[error("Malformed catalog '{source_name}': {message}")]
    Malformed {
        source_name: String,
        message: String,
    },

    /// Filesystem errors while reading catalog sources.
    #[error("Catalog I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CatalogError {
    /// Create a not-found error for a major id.
    pub fn not_found(major_id: impl Into<String>) -> Self {
        Self::NotFound {
            major_id: major_id.into(),
        }
    }

    /// Create a malformed-catalog error naming the offending source.
    pub fn malformed(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Malformed {
            source_name: source_name.into(),
            message: message.into(),
        }
    }
}
