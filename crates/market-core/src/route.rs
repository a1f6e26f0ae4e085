//! Marketplace route parsing.

use crate::context::percent_decode;

/// First path segments that never start an SEO listing path.
const RESERVED_SEGMENTS: &[&str] = &["listing", "transport", "category", "api", "static", "images"];

/// A parsed request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Legacy listing URL addressed by identifier.
    ListingById { id: String },
    /// SEO listing URL addressed by category slug and title slug.
    ListingBySlug {
        category_slug: String,
        title_slug: String,
    },
    /// Transport grid, optionally narrowed to one category.
    TransportResults { category: Option<String> },
    /// Anything else.
    NotFound,
}

impl Route {
    /// Parse a request path (query string already stripped or not).
    pub fn parse(path: &str) -> Self {
        let path = path.split('?').next().unwrap_or_default();
        let segments: Vec<String> = path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(percent_decode)
            .collect();

        match segments.as_slice() {
            [listing, id] if listing == "listing" => Route::ListingById { id: id.clone() },
            [transport] if transport == "transport" => Route::TransportResults { category: None },
            [transport, category] if transport == "transport" => Route::TransportResults {
                category: Some(category.clone()),
            },
            [transport, _category, id] if transport == "transport" => {
                Route::ListingById { id: id.clone() }
            }
            [category_slug, title_slug] if !RESERVED_SEGMENTS.contains(&category_slug.as_str()) => {
                Route::ListingBySlug {
                    category_slug: category_slug.clone(),
                    title_slug: title_slug.clone(),
                }
            }
            _ => Route::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_legacy_id() {
        assert_eq!(
            Route::parse("/listing/abc-1"),
            Route::ListingById { id: "abc-1".into() }
        );
    }

    #[test]
    fn test_parse_seo_path() {
        assert_eq!(
            Route::parse("/electronics/iphone-13-pro?lang=kk"),
            Route::ListingBySlug {
                category_slug: "electronics".into(),
                title_slug: "iphone-13-pro".into(),
            }
        );
    }

    #[test]
    fn test_parse_transport() {
        assert_eq!(Route::parse("/transport/"), Route::TransportResults { category: None });
        assert_eq!(
            Route::parse("/transport/cars"),
            Route::TransportResults { category: Some("cars".into()) }
        );
        assert_eq!(
            Route::parse("/transport/cars/t-1"),
            Route::ListingById { id: "t-1".into() }
        );
    }

    #[test]
    fn test_reserved_segments() {
        assert_eq!(Route::parse("/category/electronics"), Route::NotFound);
        assert_eq!(Route::parse("/"), Route::NotFound);
        assert_eq!(Route::parse("/a/b/c"), Route::NotFound);
    }
}
