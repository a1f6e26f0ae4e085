//! Embedded mock data standing in for the listing store.

use crate::category::CategoryRegistry;
use crate::error::CatalogError;
use crate::listing::Listing;
use crate::similar::similar_listings;
use crate::slug;
use crate::transport::TransportListing;

const MOCK_LISTINGS: &str = include_str!("../data/mock_listings.json");
const MOCK_TRANSPORT: &str = include_str!("../data/mock_transport.json");

/// The local listing collection.
///
/// Used for slug lookups, as the fallback for id lookups and as the source
/// of similar listings.
#[derive(Debug, Clone, Default)]
pub struct MockCollection {
    listings: Vec<Listing>,
}

impl MockCollection {
    /// Parse the embedded collection.
    pub fn load() -> Result<Self, CatalogError> {
        let listings: Vec<Listing> = serde_json::from_str(MOCK_LISTINGS)?;
        Ok(Self { listings })
    }

    /// Wrap an existing set of listings.
    pub fn from_listings(listings: Vec<Listing>) -> Self {
        Self { listings }
    }

    pub fn all(&self) -> &[Listing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Listing with exactly this id.
    pub fn find_by_id(&self, id: &str) -> Option<&Listing> {
        self.listings.iter().find(|l| l.id.as_str() == id)
    }

    /// First listing addressed by `/{category_slug}/{title_slug}`.
    pub fn find_by_slug(
        &self,
        registry: &CategoryRegistry,
        category_slug: &str,
        title_slug: &str,
    ) -> Option<&Listing> {
        slug::find_by_slug(&self.listings, registry, category_slug, title_slug)
    }

    /// Listings in the same category as `listing`, excluding it.
    pub fn similar_to(&self, listing: &Listing, limit: usize) -> Vec<&Listing> {
        similar_listings(listing, &self.listings, limit)
    }
}

/// Vehicle listings shown on the transport results page.
#[derive(Debug, Clone, Default)]
pub struct TransportCatalog {
    listings: Vec<TransportListing>,
}

impl TransportCatalog {
    /// Parse the embedded vehicle listings.
    pub fn load() -> Result<Self, CatalogError> {
        let listings: Vec<TransportListing> = serde_json::from_str(MOCK_TRANSPORT)?;
        Ok(Self { listings })
    }

    pub fn from_listings(listings: Vec<TransportListing>) -> Self {
        Self { listings }
    }

    pub fn all(&self) -> &[TransportListing] {
        &self.listings
    }

    /// Listings in a transport category, or all of them for `None`.
    pub fn in_category(&self, category: Option<&str>) -> Vec<&TransportListing> {
        self.listings
            .iter()
            .filter(|t| category.map_or(true, |c| t.category == c))
            .collect()
    }

    /// Vehicle listing by id.
    pub fn find_by_id(&self, id: &str) -> Option<&TransportListing> {
        self.listings.iter().find(|t| t.id.as_str() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::similar::SIMILAR_LIMIT;
    use crate::slug::title_slug;

    #[test]
    fn test_embedded_collection_parses() {
        let mock = MockCollection::load().unwrap();
        assert!(mock.len() >= 10);
        assert!(mock.all().iter().any(|l| l.price == 0));
    }

    #[test]
    fn test_every_listing_resolves_by_own_slug() {
        let registry = CategoryRegistry::builtin();
        let mock = MockCollection::load().unwrap();
        for listing in mock.all() {
            let found = mock
                .find_by_slug(
                    &registry,
                    registry.slug_for(&listing.category_id),
                    &title_slug(listing),
                )
                .unwrap();
            assert_eq!(found.id, listing.id);
        }
    }

    #[test]
    fn test_find_by_id() {
        let mock = MockCollection::load().unwrap();
        assert_eq!(mock.find_by_id("1").unwrap().category_id.as_str(), "electronics");
        assert!(mock.find_by_id("does-not-exist").is_none());
    }

    #[test]
    fn test_similar_capped_for_large_category() {
        let mock = MockCollection::load().unwrap();
        let current = mock.find_by_id("1").unwrap();
        let similar = mock.similar_to(current, SIMILAR_LIMIT);
        assert_eq!(similar.len(), SIMILAR_LIMIT);
        assert!(similar.iter().all(|l| l.id != current.id));
    }

    #[test]
    fn test_transport_catalog() {
        let catalog = TransportCatalog::load().unwrap();
        assert!(!catalog.all().is_empty());
        let moto = catalog.in_category(Some("moto"));
        assert!(moto.iter().all(|t| t.category == "moto"));
        assert_eq!(catalog.in_category(None).len(), catalog.all().len());
        assert!(catalog.find_by_id("t-2").is_some());
    }
}
