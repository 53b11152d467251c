//! # hello-principal
//!
//! An Azure Functions custom handler that greets the authenticated caller.
//!
//! ## The contract
//!
//! The Functions host owns authentication. When it is enabled, the host
//! validates the caller and forwards the request with the caller's id in
//! `x-ms-client-principal-id`. This crate relays that id and nothing more:
//!
//! | Identity header | Status | Body |
//! |---|---|---|
//! | missing or empty | 401 | `Unauthorized user` |
//! | `U` | 200 | `Hello, U!` |
//!
//! What the host already owns and this crate ignores: TLS, token
//! validation, scaling, retries, request timeouts.
//!
//! ## Running
//!
//! ```rust,no_run
//! use hello_principal::{Config, Server};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), hello_principal::Error> {
//!     let addr = Config::load()?.socket_addr()?;
//!     Server::bind(addr).await?.serve(hello_principal::app()).await
//! }
//! ```

mod config;
mod error;
mod greet;
mod handler;
mod method;
mod principal;
mod request;
mod response;
mod router;
mod server;
mod status;

pub use self::config::Config;
pub use error::Error;
pub use greet::{UNAUTHORIZED_BODY, http_trigger};
pub use handler::{Handler, HandlerFuture};
pub use method::Method;
pub use principal::{ClientPrincipal, PRINCIPAL_ID_HEADER};
pub use request::Request;
pub use response::{Response, ResponseBuilder};
pub use router::Router;
pub use server::Server;
pub use status::Status;

/// Route the host forwards the `HttpTrigger` function to.
pub const HTTP_TRIGGER_ROUTE: &str = "/api/HttpTrigger";

/// The application router: `GET` and `POST` on [`HTTP_TRIGGER_ROUTE`],
/// matching the methods declared in `HttpTrigger/function.json`.
pub fn app() -> Router {
    Router::new()
        .get(HTTP_TRIGGER_ROUTE, http_trigger)
        .post(HTTP_TRIGGER_ROUTE, http_trigger)
}
