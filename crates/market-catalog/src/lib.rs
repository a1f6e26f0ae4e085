//! Classifieds domain types and logic.
//!
//! - **Listings**: bilingual listing records, sellers, transport listings
//! - **Categories**: the category registry used for breadcrumbs and SEO paths
//! - **Slugs**: SEO path building and slug-based lookup
//! - **Formatting**: prices, grouped numbers, dates, relative post time
//! - **Navigation**: breadcrumbs and similar listings
//! - **Mock data**: the in-memory collection standing in for the store

pub mod breadcrumb;
pub mod category;
pub mod error;
pub mod format;
pub mod ids;
pub mod listing;
pub mod mock;
pub mod similar;
pub mod slug;
pub mod text;
pub mod transport;

pub use breadcrumb::{Breadcrumb, BreadcrumbItem};
pub use category::{CategoryConfig, CategoryRegistry};
pub use error::CatalogError;
pub use ids::*;
pub use listing::{Coordinates, Listing, Seller};
pub use mock::{MockCollection, TransportCatalog};
pub use text::LocalizedText;
pub use transport::{
    Condition, Currency, Engine, SellerType, TransportListing, TransportSeller, TRANSPORT_CATEGORY,
};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::breadcrumb::{Breadcrumb, BreadcrumbItem};
    pub use crate::category::{CategoryConfig, CategoryRegistry};
    pub use crate::error::CatalogError;
    pub use crate::format::{
        format_date, format_number, format_price, format_price_in, relative_time, ru_plural,
    };
    pub use crate::ids::*;
    pub use crate::listing::{Coordinates, Listing, Seller};
    pub use crate::mock::{MockCollection, TransportCatalog};
    pub use crate::similar::similar_listings;
    pub use crate::slug::{listing_path, slugify};
    pub use crate::text::LocalizedText;
    pub use crate::transport::{Condition, Currency, TransportListing};
    pub use market_core::Language;
}
