//! Request context: method, path, query, headers and cookies.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};

use crate::language::Language;
use crate::lifecycle::TimingContext;

/// Unique request identifier for tracing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestId(pub String);

impl RequestId {
    /// Generate a new request ID.
    pub fn generate() -> Self {
        static COUNTER: AtomicU32 = AtomicU32::new(0);

        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let seq = COUNTER.fetch_add(1, Ordering::Relaxed);
        let mixed = seq.wrapping_mul(1103515245).wrapping_add(12345);

        Self(format!("{:x}-{:x}-{:x}", nanos, seq, mixed))
    }

    /// Create from an existing ID string.
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Query string parameters.
pub type QueryParams = HashMap<String, String>;

/// HTTP headers.
pub type Headers = HashMap<String, String>;

/// HTTP method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Head,
    Post,
    Other,
}

impl Method {
    /// Map a method name onto the methods the workloads care about.
    pub fn parse(name: &str) -> Self {
        match name.to_ascii_uppercase().as_str() {
            "GET" => Self::Get,
            "HEAD" => Self::Head,
            "POST" => Self::Post,
            _ => Self::Other,
        }
    }

    /// Whether the method only reads.
    pub fn is_read(&self) -> bool {
        matches!(self, Self::Get | Self::Head)
    }

    /// Whether a response to this method carries a body. HEAD gets headers only.
    pub fn sends_body(&self) -> bool {
        !matches!(self, Self::Head)
    }
}

/// Typed request context passed to workload handlers.
#[derive(Debug)]
pub struct RequestContext {
    /// Unique request identifier.
    pub request_id: RequestId,
    /// HTTP method.
    pub method: Method,
    /// Request path without the query string.
    pub path: String,
    /// Query string parameters.
    pub query: QueryParams,
    /// HTTP headers.
    pub headers: Headers,
    /// Timing context for observability.
    pub timing: TimingContext,
}

impl RequestContext {
    /// Create a new request context from a path that may carry a query string.
    pub fn new(method: Method, path_with_query: impl AsRef<str>) -> Self {
        let raw = path_with_query.as_ref();
        let (path, query) = match raw.split_once('?') {
            Some((path, query)) => (path, parse_query(query)),
            None => (raw, HashMap::new()),
        };

        Self {
            request_id: RequestId::generate(),
            method,
            path: if path.is_empty() { "/".to_string() } else { path.to_string() },
            query,
            headers: HashMap::new(),
            timing: TimingContext::new(),
        }
    }

    /// Attach a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Get a query parameter by name.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(|s| s.as_str())
    }

    /// Get a header value by name (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Get a cookie value from the `Cookie` header.
    pub fn cookie(&self, name: &str) -> Option<&str> {
        self.header("cookie")?
            .split(';')
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v)
    }

    /// Resolve the UI language for this request.
    pub fn language(&self, default: Language) -> Language {
        Language::negotiate(
            self.query_param("lang"),
            self.cookie("lang"),
            self.header("accept-language"),
        )
        .unwrap_or(default)
    }
}

/// Parse a query string into key/value pairs. Later keys win.
pub fn parse_query(query: &str) -> QueryParams {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((k, v)) => (percent_decode(k), percent_decode(v)),
            None => (percent_decode(pair), String::new()),
        })
        .collect()
}

/// Decode `%XX` escapes and `+` in a URL component. Invalid escapes are kept verbatim.
pub fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                let hex = std::str::from_utf8(&bytes[i + 1..i + 3])
                    .ok()
                    .and_then(|h| u8::from_str_radix(h, 16).ok());
                match hex {
                    Some(b) => {
                        out.push(b);
                        i += 3;
                    }
                    None => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_splits_query() {
        let ctx = RequestContext::new(Method::Get, "/listing/42?lang=kk&ref=home");
        assert_eq!(ctx.path, "/listing/42");
        assert_eq!(ctx.query_param("lang"), Some("kk"));
        assert_eq!(ctx.query_param("ref"), Some("home"));
    }

    #[test]
    fn test_context_empty_path() {
        let ctx = RequestContext::new(Method::Get, "?lang=ru");
        assert_eq!(ctx.path, "/");
    }

    #[test]
    fn test_header_case_insensitive() {
        let ctx = RequestContext::new(Method::Get, "/").with_header("Accept-Language", "kk-KZ");
        assert_eq!(ctx.header("accept-language"), Some("kk-KZ"));
    }

    #[test]
    fn test_cookie_lookup() {
        let ctx = RequestContext::new(Method::Get, "/").with_header("Cookie", "a=1; lang=kk; b=2");
        assert_eq!(ctx.cookie("lang"), Some("kk"));
        assert_eq!(ctx.cookie("missing"), None);
    }

    #[test]
    fn test_language_query_wins() {
        let ctx = RequestContext::new(Method::Get, "/?lang=kk").with_header("Cookie", "lang=ru");
        assert_eq!(ctx.language(Language::Ru), Language::Kk);
    }

    #[test]
    fn test_language_default() {
        let ctx = RequestContext::new(Method::Get, "/");
        assert_eq!(ctx.language(Language::Ru), Language::Ru);
    }

    #[test]
    fn test_percent_decode() {
        assert_eq!(percent_decode("a%20b+c"), "a b c");
        assert_eq!(percent_decode("%D0%B0"), "а");
        assert_eq!(percent_decode("100%"), "100%");
        assert_eq!(percent_decode("%zz"), "%zz");
    }

    #[test]
    fn test_request_ids_unique() {
        assert_ne!(RequestId::generate(), RequestId::generate());
    }

    #[test]
    fn test_method_parse() {
        assert_eq!(Method::parse("get"), Method::Get);
        assert!(Method::parse("HEAD").is_read());
        assert!(!Method::parse("DELETE").is_read());
    }

    #[test]
    fn test_head_sends_no_body() {
        assert!(Method::Head.is_read());
        assert!(!Method::Head.sends_body());
        assert!(Method::Get.sends_body());
        assert!(Method::parse("head") == Method::Head);
    }
}
