//! Outgoing HTTP response type.
//!
//! Handlers build a [`Response`] and return it; the server turns it into a
//! hyper response on the way out.

use bytes::Bytes;
use http::header::{CONTENT_TYPE, HeaderValue};
use http_body_util::Full;

use crate::status::Status;

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

// ── Response ─────────────────────────────────────────────────────────────────

/// An outgoing HTTP response.
///
/// ```rust
/// use hello_principal::{Response, Status};
///
/// Response::text("Hello, abc-123!");
/// Response::status(Status::NotFound);
/// Response::builder()
///     .status(Status::Unauthorized)
///     .text("Unauthorized user");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    body: Vec<u8>,
    content_type: Option<&'static str>,
    status: Status,
}

impl Response {
    /// `200 OK` with `text/plain; charset=utf-8`.
    pub fn text(body: impl Into<String>) -> Self {
        Self::builder().text(body)
    }

    /// Response with no body.
    pub fn status(code: Status) -> Self {
        Self { body: Vec::new(), content_type: None, status: code }
    }

    /// Builder for responses that need a non-200 status and a body.
    pub fn builder() -> ResponseBuilder {
        ResponseBuilder { status: Status::Ok }
    }

    pub fn status_code(&self) -> u16 { self.status.into() }
    pub fn body(&self) -> &[u8] { &self.body }
    pub fn content_type(&self) -> Option<&str> { self.content_type }

    pub(crate) fn into_inner(self) -> http::Response<Full<Bytes>> {
        let mut res = http::Response::new(Full::new(Bytes::from(self.body)));
        *res.status_mut() = self.status.into();
        if let Some(content_type) = self.content_type {
            res.headers_mut().insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        }
        res
    }
}

// ── ResponseBuilder ───────────────────────────────────────────────────────────

/// Fluent builder for [`Response`].
///
/// Obtain via [`Response::builder()`]. Defaults to `Status::Ok` (200).
pub struct ResponseBuilder {
    status: Status,
}

impl ResponseBuilder {
    pub fn status(mut self, code: Status) -> Self {
        self.status = code;
        self
    }

    /// Terminate with a plain-text body (`text/plain; charset=utf-8`).
    pub fn text(self, body: impl Into<String>) -> Response {
        Response {
            body: body.into().into_bytes(),
            content_type: Some(TEXT_PLAIN),
            status: self.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_sets_content_type_and_ok() {
        let res = Response::text("hi");
        assert_eq!(res.status_code(), 200);
        assert_eq!(res.content_type(), Some(TEXT_PLAIN));
        assert_eq!(res.body(), b"hi");
    }

    #[test]
    fn into_inner_carries_status_and_headers() {
        let res = Response::builder()
            .status(Status::Unauthorized)
            .text("nope")
            .into_inner();

        assert_eq!(res.status(), http::StatusCode::UNAUTHORIZED);
        assert_eq!(res.headers().get(CONTENT_TYPE).unwrap(), TEXT_PLAIN);
    }

    #[test]
    fn bare_status_has_no_content_type() {
        let res = Response::status(Status::NotFound).into_inner();
        assert_eq!(res.status(), http::StatusCode::NOT_FOUND);
        assert!(res.headers().get(CONTENT_TYPE).is_none());
    }
}
