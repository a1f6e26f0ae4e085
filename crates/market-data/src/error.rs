//! Error types for fetches and listing lookups.

use market_catalog::CatalogError;

/// Error type for fetch operations.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP error: {status} for {url}")]
    Http { status: u16, url: String },

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Request error: {0}")]
    Request(String),
}

impl FetchError {
    /// Whether the remote answered 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::Http { status: 404, .. })
    }
}

/// Error raised by a listing source.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_detection() {
        let miss = FetchError::Http { status: 404, url: "u".into() };
        let down = FetchError::Http { status: 503, url: "u".into() };
        assert!(miss.is_not_found());
        assert!(!down.is_not_found());
        assert!(!FetchError::Connection("refused".into()).is_not_found());
    }

    #[test]
    fn test_resolve_error_display_is_transparent() {
        let err: ResolveError = FetchError::Request("bad uri".into()).into();
        assert_eq!(err.to_string(), "Request error: bad uri");
    }
}
