//! View-model of the listing detail page.

use market_catalog::format::{format_date, format_price_in};
use market_catalog::{Breadcrumb, Listing};
use market_core::Language;
use market_data::{ListingResolver, Resolved, ResolvedFrom};

use crate::view::{DetailViewState, SharePayload};

/// Year shown as "member since" for every seller.
pub const MEMBER_SINCE: &str = "2022";

/// Compact view of a similar listing.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarItem {
    pub title: String,
    pub city: String,
    pub price: String,
    pub image: Option<String>,
    pub href: String,
}

/// Everything the detail sections render, localized and formatted.
#[derive(Debug, Clone)]
pub struct DetailPage {
    pub language: Language,
    pub listing: Listing,
    pub source: ResolvedFrom,
    pub title: String,
    pub city: String,
    pub description: String,
    /// Current price, formatted.
    pub price: String,
    /// Original price when above the current one, formatted.
    pub original_price: Option<String>,
    pub discount: Option<u8>,
    /// Publication date, formatted.
    pub date: String,
    pub images: Vec<String>,
    /// Path that resolves back to this listing: the SEO slug path when the
    /// slug lookup finds it, `/listing/{id}` otherwise.
    pub path: String,
    pub breadcrumb: Breadcrumb,
    pub similar: Vec<SimilarItem>,
    pub view: DetailViewState,
    pub share: SharePayload,
}

impl DetailPage {
    /// Build the page for a resolved listing. `site_url` prefixes the share URL.
    pub fn assemble(
        resolved: Resolved,
        resolver: &ListingResolver,
        language: Language,
        site_url: &str,
    ) -> Self {
        let Resolved { listing, source } = resolved;

        let title = listing.title_text(language).to_string();
        let path = resolver.canonical_path(&listing);
        let share = SharePayload::new(
            title.clone(),
            format!("{}{}", site_url.trim_end_matches('/'), path),
        );

        let similar = resolver
            .similar(&listing)
            .into_iter()
            .map(|other| SimilarItem {
                title: other.title_text(language).to_string(),
                city: other.city_text(language).to_string(),
                price: format_price_in(other.current_price(), other.currency, language),
                image: other.gallery().first().map(|s| s.to_string()),
                href: resolver.canonical_path(other),
            })
            .collect();

        Self {
            language,
            title,
            city: listing.city_text(language).to_string(),
            description: listing.description_text(language).to_string(),
            price: format_price_in(listing.current_price(), listing.currency, language),
            original_price: listing
                .original_price
                .filter(|_| listing.is_discounted())
                .map(|p| format_price_in(p, listing.currency, language)),
            discount: listing.discount.filter(|d| *d > 0),
            date: format_date(&listing.created_at, language),
            images: listing.gallery().into_iter().map(str::to_string).collect(),
            path,
            breadcrumb: resolver.breadcrumb(&listing, language),
            similar,
            view: DetailViewState::new(),
            share,
            source,
            listing,
        }
    }

    /// Localized `<title>` of the page.
    pub fn page_title(&self) -> String {
        format!("{} | {}", self.title, self.price)
    }

    /// Phone number as currently displayed.
    pub fn displayed_phone(&self) -> String {
        if self.view.is_phone_visible {
            self.listing.seller.phone.clone()
        } else {
            self.listing.seller.masked_phone()
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use futures::executor::block_on;
    use market_catalog::{CategoryRegistry, MockCollection, TransportCatalog};
    use market_core::{RequestId, Route};
    use market_data::LookupKey;
    use market_observability::{LogSink, StructuredLogger};

    pub(crate) fn resolver() -> ListingResolver {
        let logger = StructuredLogger::new(RequestId::from_string("t")).with_sink(LogSink::memory());
        ListingResolver::new(MockCollection::load().unwrap(), CategoryRegistry::builtin(), logger)
            .with_transport_catalog(TransportCatalog::load().unwrap())
    }

    pub(crate) fn page(id: &str, language: Language) -> DetailPage {
        let resolver = resolver();
        let resolved = block_on(resolver.resolve(&LookupKey::Id(id.into()))).unwrap();
        DetailPage::assemble(resolved, &resolver, language, "https://market.kz/")
    }

    #[test]
    fn test_discounted_listing() {
        let page = page("1", Language::Ru);
        assert_eq!(page.price, "395 000 ₸");
        assert_eq!(page.original_price.as_deref(), Some("420 000 ₸"));
        assert_eq!(page.discount, Some(6));
        assert_eq!(page.images.len(), 3);
        assert_eq!(page.path, "/electronics/iphone-13-pro-256-gb");
        assert_eq!(page.share.url, "https://market.kz/electronics/iphone-13-pro-256-gb");
        assert_eq!(page.share.title, "iPhone 13 Pro 256 ГБ");
    }

    #[test]
    fn test_similar_items() {
        let page = page("1", Language::Kk);
        assert_eq!(page.similar.len(), 4);
        assert!(page.similar.iter().all(|s| s.href.starts_with("/electronics/")));
        assert!(page.similar.iter().all(|s| s.href != page.path));
    }

    #[test]
    fn test_free_listing_and_kazakh_fields() {
        let page = page("10", Language::Kk);
        assert_eq!(page.price, "Тегін");
        assert!(page.original_price.is_none());
        assert_eq!(page.title, "Диванды тегін беремін");
        assert_eq!(page.breadcrumb.items[0].label, "Басты бет");
    }

    #[test]
    fn test_plain_string_fields_used_as_is() {
        let page = page("12", Language::Kk);
        assert_eq!(page.title, "Щенки хаски");
        assert_eq!(page.city, "Костанай");
    }

    #[test]
    fn test_single_image_url_gallery() {
        let page = page("2", Language::Ru);
        assert_eq!(page.images, vec!["/images/listings/2.jpg".to_string()]);
    }

    #[test]
    fn test_phone_masked_until_shown() {
        let mut page = page("6", Language::Ru);
        assert_eq!(page.displayed_phone(), "+7 777 *** ** **");
        page.view.show_phone();
        assert_eq!(page.displayed_phone(), "+7 777 123 45 67");
    }

    #[test]
    fn test_remote_only_listing_links_by_id() {
        let resolver = resolver();
        let listing: Listing = serde_json::from_str(
            r#"{
                "id": "r-42",
                "title": "Холодильник Bosch",
                "city": "Алматы",
                "price": 90000,
                "categoryId": "electronics",
                "seller": {"name": "Ерлан", "phone": "+7 700 000 00 00"},
                "createdAt": "2024-03-01T10:00:00Z"
            }"#,
        )
        .unwrap();
        let resolved = Resolved {
            listing,
            source: ResolvedFrom::Remote,
        };
        let page = DetailPage::assemble(resolved, &resolver, Language::Ru, "https://market.kz");

        assert_eq!(page.path, "/listing/r-42");
        assert_eq!(page.share.url, "https://market.kz/listing/r-42");
        assert_eq!(
            LookupKey::from_route(&Route::parse(&page.path)),
            Some(LookupKey::Id("r-42".into()))
        );
    }

    #[test]
    fn test_similar_links_resolve() {
        let page = page("6", Language::Ru);
        assert!(!page.similar.is_empty());
        let resolver = resolver();
        for item in &page.similar {
            let key = LookupKey::from_route(&Route::parse(&item.href)).unwrap();
            assert!(block_on(resolver.resolve(&key)).is_some(), "{}", item.href);
        }
    }

    #[test]
    fn test_vehicle_page_keeps_currency() {
        let page = page("t-2", Language::Ru);
        assert_eq!(page.source, ResolvedFrom::Transport);
        assert_eq!(page.price, "42 000 $");
        assert_eq!(page.path, "/listing/t-2");
        assert_eq!(page.title, "Hyundai Tucson");
    }
}
