//! Two-step listing resolution for the detail page.

use market_catalog::slug::listing_path;
use market_catalog::{Breadcrumb, CategoryRegistry, Listing, MockCollection, TransportCatalog};
use market_core::{Language, Route};
use market_observability::StructuredLogger;

use crate::lookup::LookupKey;
use crate::source::{encode_segment, ListingSource};

/// Where a resolved listing came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedFrom {
    Remote,
    Mock,
    /// The bundled vehicle catalog behind the transport grid.
    Transport,
}

impl ResolvedFrom {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolvedFrom::Remote => "remote",
            ResolvedFrom::Mock => "mock",
            ResolvedFrom::Transport => "transport",
        }
    }
}

/// A listing found for a lookup key.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    pub listing: Listing,
    pub source: ResolvedFrom,
}

/// Resolves lookup keys to listings.
///
/// Slug keys only consult the mock collection. Id keys ask the remote source
/// first; a miss or a remote failure falls back to the mock collection, then
/// to the vehicle catalog when one is attached.
pub struct ListingResolver {
    remote: Option<Box<dyn ListingSource>>,
    mock: MockCollection,
    transport: Option<TransportCatalog>,
    registry: CategoryRegistry,
    similar_limit: usize,
    logger: StructuredLogger,
}

impl ListingResolver {
    /// Resolver without a remote source.
    pub fn new(mock: MockCollection, registry: CategoryRegistry, logger: StructuredLogger) -> Self {
        Self {
            remote: None,
            mock,
            transport: None,
            registry,
            similar_limit: market_catalog::similar::SIMILAR_LIMIT,
            logger,
        }
    }

    /// Consult `source` for id lookups before the mock collection.
    pub fn with_remote(mut self, source: impl ListingSource + 'static) -> Self {
        self.remote = Some(Box::new(source));
        self
    }

    /// Resolve vehicle ids (`/transport/:category/:id`) against `catalog`.
    pub fn with_transport_catalog(mut self, catalog: TransportCatalog) -> Self {
        self.transport = Some(catalog);
        self
    }

    /// Cap the similar listings. Never raised above `SIMILAR_LIMIT`.
    pub fn with_similar_limit(mut self, limit: usize) -> Self {
        self.similar_limit = limit.min(market_catalog::similar::SIMILAR_LIMIT);
        self
    }

    /// Resolve a key. `None` means the page is not found.
    pub async fn resolve(&self, key: &LookupKey) -> Option<Resolved> {
        let resolved = match key {
            LookupKey::Slug { category, title } => self
                .mock
                .find_by_slug(&self.registry, category, title)
                .map(|listing| Resolved {
                    listing: listing.clone(),
                    source: ResolvedFrom::Mock,
                }),
            LookupKey::Id(id) => self.resolve_id(id).await,
        };

        match &resolved {
            Some(r) => self
                .logger
                .debug_builder("Listing resolved")
                .field("key", key.describe())
                .field("source", r.source.as_str())
                .emit(),
            None => self
                .logger
                .info_builder("Listing not found")
                .field("key", key.describe())
                .emit(),
        }
        resolved
    }

    /// Resolve an optional key; no key is not found.
    pub async fn resolve_opt(&self, key: Option<&LookupKey>) -> Option<Resolved> {
        match key {
            Some(key) => self.resolve(key).await,
            None => None,
        }
    }

    async fn resolve_id(&self, id: &str) -> Option<Resolved> {
        if let Some(remote) = &self.remote {
            match remote.get_by_id(id).await {
                Ok(Some(listing)) => {
                    return Some(Resolved {
                        listing,
                        source: ResolvedFrom::Remote,
                    })
                }
                Ok(None) => {}
                Err(e) => self
                    .logger
                    .warn_builder("Remote lookup failed, falling back to mock data")
                    .field("source", remote.name())
                    .field("id", id)
                    .field("error", e.to_string())
                    .emit(),
            }
        }

        if let Some(listing) = self.mock.find_by_id(id) {
            return Some(Resolved {
                listing: listing.clone(),
                source: ResolvedFrom::Mock,
            });
        }

        self.transport
            .as_ref()
            .and_then(|catalog| catalog.find_by_id(id))
            .map(|vehicle| Resolved {
                listing: vehicle.to_listing(),
                source: ResolvedFrom::Transport,
            })
    }

    /// Path that resolves back to `listing`.
    ///
    /// The SEO slug path when it parses as a slug route and the mock
    /// collection answers it with this listing, otherwise `/listing/{id}`.
    pub fn canonical_path(&self, listing: &Listing) -> String {
        let seo = listing_path(listing, &self.registry);
        let addressable = match Route::parse(&seo) {
            Route::ListingBySlug {
                category_slug,
                title_slug,
            } => self
                .mock
                .find_by_slug(&self.registry, &category_slug, &title_slug)
                .map_or(false, |found| found.id == listing.id),
            _ => false,
        };

        if addressable {
            seo
        } else {
            format!("/listing/{}", encode_segment(listing.id.as_str()))
        }
    }

    /// Same-category listings from the mock collection, excluding `listing`.
    pub fn similar(&self, listing: &Listing) -> Vec<&Listing> {
        self.mock.similar_to(listing, self.similar_limit)
    }

    /// Breadcrumb trail for `listing` in `language`.
    pub fn breadcrumb(&self, listing: &Listing, language: Language) -> Breadcrumb {
        Breadcrumb::for_listing(listing, &self.registry, language)
    }

    pub fn registry(&self) -> &CategoryRegistry {
        &self.registry
    }

    pub fn mock(&self) -> &MockCollection {
        &self.mock
    }
}
