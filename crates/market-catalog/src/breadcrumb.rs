//! Breadcrumb trail for listing pages.

use market_core::Language;
use serde::Serialize;

use crate::category::CategoryRegistry;
use crate::listing::Listing;

/// One navigational ancestor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreadcrumbItem {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl BreadcrumbItem {
    /// Create an item that links somewhere.
    pub fn linked(label: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            link: Some(link.into()),
        }
    }
}

/// Ancestors of the current page plus the current page label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    pub items: Vec<BreadcrumbItem>,
    pub current: String,
}

impl Breadcrumb {
    /// Build the trail for a listing: home, then its category when registered.
    pub fn for_listing(listing: &Listing, registry: &CategoryRegistry, language: Language) -> Self {
        let mut items = vec![BreadcrumbItem::linked(
            language.pick("Главная", "Басты бет"),
            "/",
        )];

        if let Some(category) = registry.get(&listing.category_id) {
            items.push(BreadcrumbItem::linked(
                category.label(language),
                format!("/category/{}", listing.category_id),
            ));
        }

        Self {
            items,
            current: listing.title_text(language).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::tests::listing;

    #[test]
    fn test_trail_with_category() {
        let registry = CategoryRegistry::builtin();
        let l = listing("1", "electronics");
        let crumbs = Breadcrumb::for_listing(&l, &registry, Language::Ru);

        assert_eq!(crumbs.items.len(), 2);
        assert_eq!(crumbs.items[0], BreadcrumbItem::linked("Главная", "/"));
        assert_eq!(
            crumbs.items[1],
            BreadcrumbItem::linked("Электроника", "/category/electronics")
        );
        assert_eq!(crumbs.current, "Объявление 1");
    }

    #[test]
    fn test_trail_kazakh() {
        let registry = CategoryRegistry::builtin();
        let l = listing("1", "animals");
        let crumbs = Breadcrumb::for_listing(&l, &registry, Language::Kk);
        assert_eq!(crumbs.items[0].label, "Басты бет");
        assert_eq!(crumbs.items[1].label, "Жануарлар");
        assert_eq!(crumbs.current, "Хабарландыру 1");
    }

    #[test]
    fn test_unregistered_category_has_no_crumb() {
        let registry = CategoryRegistry::builtin();
        let l = listing("1", "unknown");
        let crumbs = Breadcrumb::for_listing(&l, &registry, Language::Ru);
        assert_eq!(crumbs.items.len(), 1);
    }
}
