//! How a detail page addresses its listing.

use market_core::Route;

/// Slug pair or raw identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LookupKey {
    /// `/{category}/{title}` SEO path, matched against the mock collection.
    Slug { category: String, title: String },
    /// Raw identifier, looked up remotely first.
    Id(String),
}

impl LookupKey {
    /// Key for a parsed route; `None` for routes that are not a listing.
    pub fn from_route(route: &Route) -> Option<Self> {
        match route {
            Route::ListingBySlug {
                category_slug,
                title_slug,
            } => Some(LookupKey::Slug {
                category: category_slug.clone(),
                title: title_slug.clone(),
            }),
            Route::ListingById { id } => Some(LookupKey::Id(id.clone())),
            Route::TransportResults { .. } | Route::NotFound => None,
        }
    }

    /// Short description for logs.
    pub fn describe(&self) -> String {
        match self {
            LookupKey::Slug { category, title } => format!("slug:{}/{}", category, title),
            LookupKey::Id(id) => format!("id:{}", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_route() {
        assert_eq!(
            LookupKey::from_route(&Route::parse("/electronics/iphone")),
            Some(LookupKey::Slug {
                category: "electronics".into(),
                title: "iphone".into()
            })
        );
        assert_eq!(
            LookupKey::from_route(&Route::parse("/listing/42")),
            Some(LookupKey::Id("42".into()))
        );
        assert_eq!(LookupKey::from_route(&Route::parse("/transport")), None);
    }

    #[test]
    fn test_transport_card_path_is_id_key() {
        assert_eq!(
            LookupKey::from_route(&Route::parse("/transport/cars/t-1")),
            Some(LookupKey::Id("t-1".into()))
        );
    }

    #[test]
    fn test_describe() {
        assert_eq!(LookupKey::Id("7".into()).describe(), "id:7");
        assert_eq!(
            LookupKey::Slug { category: "home".into(), title: "stol".into() }.describe(),
            "slug:home/stol"
        );
    }
}
