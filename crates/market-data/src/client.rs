//! Outbound fetch client.

use async_trait::async_trait;
use market_core::RequestId;
use serde::de::DeserializeOwned;

use crate::error::FetchError;

/// Raw response returned by a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is 2xx.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends GET requests. The Spin host is the production transport.
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn get(&self, url: &str, headers: &[(String, String)]) -> Result<HttpResponse, FetchError>;
}

/// Outbound HTTP through the Spin host.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpinTransport;

#[async_trait(?Send)]
impl HttpTransport for SpinTransport {
    #[cfg(target_arch = "wasm32")]
    async fn get(&self, url: &str, headers: &[(String, String)]) -> Result<HttpResponse, FetchError> {
        use spin_sdk::http::{Method, Request, Response};

        let mut builder = Request::builder();
        builder.method(Method::Get).uri(url);
        for (name, value) in headers {
            builder.header(name.as_str(), value.as_str());
        }
        let request = builder.build();

        let response: Response = spin_sdk::http::send(request)
            .await
            .map_err(|e| FetchError::Connection(e.to_string()))?;

        Ok(HttpResponse::new(*response.status(), response.body().to_vec()))
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn get(&self, url: &str, _headers: &[(String, String)]) -> Result<HttpResponse, FetchError> {
        Err(FetchError::Connection(format!(
            "outbound HTTP is only available inside a Spin component ({})",
            url
        )))
    }
}

/// JSON fetch client scoped to one request.
pub struct FetchClient<T: HttpTransport = SpinTransport> {
    transport: T,
    request_id: RequestId,
    default_headers: Vec<(String, String)>,
}

impl FetchClient<SpinTransport> {
    /// Create a client using the Spin host transport.
    pub fn new(request_id: RequestId) -> Self {
        Self::with_transport(request_id, SpinTransport)
    }
}

impl<T: HttpTransport> FetchClient<T> {
    /// Create a client over an explicit transport.
    pub fn with_transport(request_id: RequestId, transport: T) -> Self {
        let default_headers = vec![
            ("accept".to_string(), "application/json".to_string()),
            ("x-request-id".to_string(), request_id.to_string()),
        ];
        Self {
            transport,
            request_id,
            default_headers,
        }
    }

    /// Add a header sent with every request.
    pub fn with_default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    /// GET `url` and decode the JSON body. Any non-2xx status is an error.
    pub async fn fetch<D: DeserializeOwned>(&self, url: &str) -> Result<D, FetchError> {
        let response = self.transport.get(url, &self.default_headers).await?;
        if !response.is_success() {
            return Err(FetchError::Http {
                status: response.status,
                url: url.to_string(),
            });
        }
        serde_json::from_slice(&response.body).map_err(|e| FetchError::Deserialization(e.to_string()))
    }

    /// Like [`fetch`](Self::fetch), but a 404 is `Ok(None)`.
    pub async fn fetch_optional<D: DeserializeOwned>(&self, url: &str) -> Result<Option<D>, FetchError> {
        match self.fetch(url).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Get the request ID.
    pub fn request_id(&self) -> &RequestId {
        &self.request_id
    }
}
