//! Catalog error types.

use thiserror::Error;

/// Errors raised while loading or querying catalog data.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Listing not found.
    #[error("Listing not found: {0}")]
    ListingNotFound(String),

    /// Category not registered.
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// Embedded or remote data failed to parse.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::SerializationError(e.to_string())
    }
}
