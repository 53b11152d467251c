//! Incoming HTTP request type.

use std::borrow::Cow;
use std::collections::HashMap;

use bytes::Bytes;
use http::HeaderMap;

/// An incoming HTTP request as forwarded by the Functions host.
///
/// The body is fully buffered before the handler runs; HTTP trigger payloads
/// are small and the host already enforces its own size limits.
pub struct Request {
    path: String,
    headers: HeaderMap,
    body: Bytes,
    params: HashMap<String, String>,
}

impl Request {
    pub(crate) fn from_parts(
        parts: http::request::Parts,
        body: Bytes,
        params: HashMap<String, String>,
    ) -> Self {
        Self {
            path: parts.uri.path().to_owned(),
            headers: parts.headers,
            body,
            params,
        }
    }

    pub fn path(&self) -> &str { &self.path }
    pub fn body(&self) -> &[u8] { &self.body }

    /// Case-insensitive header lookup.
    ///
    /// Bytes outside ASCII are decoded as UTF-8, with invalid sequences
    /// replaced by U+FFFD. Only the first occurrence of `name` is read; the
    /// Functions host delivers each identity header as a single line.
    pub fn header(&self, name: &str) -> Option<Cow<'_, str>> {
        self.headers.get(name).map(|v| String::from_utf8_lossy(v.as_bytes()))
    }

    /// Returns a named path parameter.
    ///
    /// For a route `/api/{function}`, `req.param("function")` on `/api/HttpTrigger`
    /// returns `Some("HttpTrigger")`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}

#[cfg(test)]
pub(crate) fn test_request(headers: &[(&str, &str)]) -> Request {
    let mut builder = http::Request::builder().method("GET").uri("/api/HttpTrigger");
    for (name, value) in headers {
        builder = builder.header(*name, http::HeaderValue::from_bytes(value.as_bytes()).unwrap());
    }
    let (parts, ()) = builder.body(()).unwrap().into_parts();
    Request::from_parts(parts, Bytes::new(), HashMap::new())
}

#[cfg(test)]
mod tests {
    use super::test_request;

    #[test]
    fn header_lookup_ignores_case() {
        let req = test_request(&[("X-Request-Id", "abc")]);
        assert_eq!(req.header("x-request-id").as_deref(), Some("abc"));
        assert_eq!(req.header("X-REQUEST-ID").as_deref(), Some("abc"));
        assert_eq!(req.header("x-missing"), None);
    }

    #[test]
    fn utf8_header_value_is_decoded() {
        let req = test_request(&[("x-name", "José")]);
        assert_eq!(req.header("x-name").as_deref(), Some("José"));
    }

    #[test]
    fn invalid_utf8_is_replaced_not_dropped() {
        let (mut parts, ()) = http::Request::builder().body(()).unwrap().into_parts();
        parts.headers.insert("x-name", http::HeaderValue::from_bytes(b"Jos\xe9").unwrap());
        let req = super::Request::from_parts(parts, bytes::Bytes::new(), Default::default());
        assert_eq!(req.header("x-name").as_deref(), Some("Jos\u{FFFD}"));
    }

    #[test]
    fn repeated_header_yields_first_value() {
        let req = test_request(&[("x-tag", "one"), ("x-tag", "two")]);
        assert_eq!(req.header("x-tag").as_deref(), Some("one"));
    }

    #[test]
    fn path_excludes_query() {
        let (parts, ()) = http::Request::builder()
            .uri("/api/HttpTrigger?name=x")
            .body(())
            .unwrap()
            .into_parts();
        let req = super::Request::from_parts(parts, bytes::Bytes::new(), Default::default());
        assert_eq!(req.path(), "/api/HttpTrigger");
        assert!(req.body().is_empty());
    }
}
