//! Listing lookup for the detail page.
//!
//! This crate provides:
//! - `FetchClient` - Outbound JSON fetches over a pluggable `HttpTransport`
//! - `ListingSource` - Lookup-by-id seam, implemented by the remote store
//! - `LookupKey` - Slug pair or raw id, derived from the route
//! - `ListingResolver` - Slug lookup against the mock collection, id lookup
//!   against the remote store with mock fallback
//! - `PageSession` - Discards resolutions of superseded navigations

mod client;
mod error;
mod lookup;
mod resolver;
mod session;
mod source;

pub use client::*;
pub use error::*;
pub use lookup::*;
pub use resolver::*;
pub use session::*;
pub use source::*;
