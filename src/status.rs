//! HTTP status codes the handler emits.
//!
//! ```rust
//! use hello_principal::{Response, Status};
//!
//! Response::status(Status::NotFound);
//!
//! Response::builder()
//!     .status(Status::Unauthorized)
//!     .text("Unauthorized user");
//! ```

/// Status codes produced by this crate.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Status {
    Ok,               // 200
    BadRequest,       // 400
    Unauthorized,     // 401
    NotFound,         // 404
    MethodNotAllowed, // 405
}

impl From<Status> for u16 {
    fn from(s: Status) -> u16 {
        match s {
            Status::Ok               => 200,
            Status::BadRequest       => 400,
            Status::Unauthorized     => 401,
            Status::NotFound         => 404,
            Status::MethodNotAllowed => 405,
        }
    }
}

impl From<Status> for http::StatusCode {
    fn from(s: Status) -> http::StatusCode {
        match s {
            Status::Ok               => http::StatusCode::OK,
            Status::BadRequest       => http::StatusCode::BAD_REQUEST,
            Status::Unauthorized     => http::StatusCode::UNAUTHORIZED,
            Status::NotFound         => http::StatusCode::NOT_FOUND,
            Status::MethodNotAllowed => http::StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}
