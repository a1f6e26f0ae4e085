//! Listing sources addressed by id.

use async_trait::async_trait;
use market_catalog::Listing;

use crate::client::{FetchClient, HttpTransport, SpinTransport};
use crate::error::ResolveError;

/// Looks a listing up by its identifier.
///
/// `Ok(None)` is a clean miss; `Err` means the source could not answer.
#[async_trait(?Send)]
pub trait ListingSource {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    async fn get_by_id(&self, id: &str) -> Result<Option<Listing>, ResolveError>;
}

/// The remote listing store (`GET {api_base}/listings/{id}`).
pub struct RemoteListingSource<T: HttpTransport = SpinTransport> {
    client: FetchClient<T>,
    api_base: String,
}

impl<T: HttpTransport> RemoteListingSource<T> {
    pub fn new(client: FetchClient<T>, api_base: impl Into<String>) -> Self {
        Self {
            client,
            api_base: api_base.into(),
        }
    }

    /// URL of one listing.
    pub fn listing_url(&self, id: &str) -> String {
        format!(
            "{}/listings/{}",
            self.api_base.trim_end_matches('/'),
            encode_segment(id)
        )
    }
}

#[async_trait(?Send)]
impl<T: HttpTransport> ListingSource for RemoteListingSource<T> {
    fn name(&self) -> &'static str {
        "remote"
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Listing>, ResolveError> {
        let url = self.listing_url(id);
        Ok(self.client.fetch_optional::<Listing>(&url).await?)
    }
}

/// Percent-encode a path segment (RFC 3986 unreserved characters pass through).
pub(crate) fn encode_segment(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for b in segment.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => out.push(b as char),
            _ => out.push_str(&format!("%{:02X}", b)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::CannedTransport;
    use futures::executor::block_on;
    use market_core::RequestId;

    const LISTING_JSON: &str = r#"{
        "id": "r-42",
        "title": {"ru": "Холодильник", "kk": "Тоңазытқыш"},
        "city": "Алматы",
        "price": 90000,
        "categoryId": "home",
        "seller": {"name": "Ерлан", "phone": "+7 700 000 00 00", "rating": 4.5},
        "views": 12,
        "createdAt": "2024-03-01T10:00:00Z"
    }"#;

    fn remote(transport: CannedTransport) -> RemoteListingSource<CannedTransport> {
        let client = FetchClient::with_transport(RequestId::generate(), transport);
        RemoteListingSource::new(client, "http://store/v1/")
    }

    #[test]
    fn test_remote_hit() {
        let source = remote(
            CannedTransport::default().with("http://store/v1/listings/r-42", 200, LISTING_JSON),
        );
        let listing = block_on(source.get_by_id("r-42")).unwrap().unwrap();
        assert_eq!(listing.id.as_str(), "r-42");
        assert_eq!(listing.seller.deals(), 0);
    }

    #[test]
    fn test_remote_404_is_miss() {
        let source = remote(CannedTransport::default().with("http://store/v1/listings/nope", 404, ""));
        assert!(block_on(source.get_by_id("nope")).unwrap().is_none());
    }

    #[test]
    fn test_remote_failure_is_error() {
        let source = remote(CannedTransport::default());
        assert!(block_on(source.get_by_id("r-42")).is_err());
    }

    #[test]
    fn test_listing_url_encodes_id() {
        let source = remote(CannedTransport::default());
        assert_eq!(source.listing_url("a b/c"), "http://store/v1/listings/a%20b%2Fc");
    }
}
