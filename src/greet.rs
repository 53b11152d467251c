//! The `HttpTrigger` function.

use crate::principal::ClientPrincipal;
use crate::request::Request;
use crate::response::Response;
use crate::status::Status;

/// Body returned when no principal is present.
pub const UNAUTHORIZED_BODY: &str = "Unauthorized user";

/// Greets the authenticated caller, or answers `401` when there is none.
///
/// | Identity header | Status | Body |
/// |---|---|---|
/// | missing or empty | 401 | `Unauthorized user` |
/// | `U` | 200 | `Hello, U!` |
pub async fn http_trigger(req: Request) -> Response {
    match ClientPrincipal::from_request(&req) {
        Some(principal) => Response::text(format!("Hello, {}!", principal.id())),
        None => Response::builder()
            .status(Status::Unauthorized)
            .text(UNAUTHORIZED_BODY),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::principal::PRINCIPAL_ID_HEADER;
    use crate::request::test_request;

    #[tokio::test]
    async fn missing_header_is_unauthorized() {
        let res = http_trigger(test_request(&[])).await;
        assert_eq!(res.status_code(), 401);
        assert_eq!(res.body(), b"Unauthorized user");
    }

    #[tokio::test]
    async fn present_header_is_greeted() {
        let res = http_trigger(test_request(&[(PRINCIPAL_ID_HEADER, "abc-123")])).await;
        assert_eq!(res.status_code(), 200);
        assert_eq!(res.body(), b"Hello, abc-123!");
        assert_eq!(res.content_type(), Some("text/plain; charset=utf-8"));
    }

    #[tokio::test]
    async fn empty_header_is_unauthorized() {
        let res = http_trigger(test_request(&[(PRINCIPAL_ID_HEADER, "")])).await;
        assert_eq!(res.status_code(), 401);
        assert_eq!(res.body(), b"Unauthorized user");
    }

    #[tokio::test]
    async fn non_ascii_id_is_greeted() {
        let res = http_trigger(test_request(&[(PRINCIPAL_ID_HEADER, "José")])).await;
        assert_eq!(res.status_code(), 200);
        assert_eq!(res.body(), "Hello, José!".as_bytes());
    }

    #[tokio::test]
    async fn value_is_relayed_verbatim() {
        let id = "<script>alert(1)</script>";
        let res = http_trigger(test_request(&[(PRINCIPAL_ID_HEADER, id)])).await;
        assert_eq!(res.body(), format!("Hello, {id}!").as_bytes());
    }

    #[tokio::test]
    async fn repeated_calls_are_identical() {
        for headers in [&[][..], &[(PRINCIPAL_ID_HEADER, "abc-123")][..]] {
            let first = http_trigger(test_request(headers)).await;
            let second = http_trigger(test_request(headers)).await;
            assert_eq!(first, second);
        }
    }
}
