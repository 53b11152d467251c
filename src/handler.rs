//! Route handlers.
//!
//! A handler is any `async fn(Request) -> Response`. The router keeps them
//! as `Arc<dyn Handler>` so one table can hold several functions; each call
//! boxes the returned future.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::request::Request;
use crate::response::Response;

/// The future a handler returns, boxed so handlers can live behind `dyn`.
pub type HandlerFuture = Pin<Box<dyn Future<Output = Response> + Send + 'static>>;

/// Something that turns a [`Request`] into a [`Response`].
///
/// Implemented for every `Fn(Request) -> impl Future<Output = Response>`,
/// which covers plain `async fn` items such as
/// [`http_trigger`](crate::http_trigger).
pub trait Handler: Send + Sync + 'static {
    fn call(&self, req: Request) -> HandlerFuture;
}

impl<F, Fut> Handler for F
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Response> + Send + 'static,
{
    fn call(&self, req: Request) -> HandlerFuture {
        Box::pin((self)(req))
    }
}

pub(crate) type SharedHandler = Arc<dyn Handler>;
