//! The caller identity injected by the platform's authentication layer.
//!
//! When App Service / Functions authentication is enabled the host strips
//! any client-supplied `x-ms-client-principal-*` headers and sets its own,
//! once per request. The value is trusted as-is.

use crate::request::Request;

/// Header carrying the authenticated principal's identifier.
pub const PRINCIPAL_ID_HEADER: &str = "x-ms-client-principal-id";

/// An authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientPrincipal {
    id: String,
}

impl ClientPrincipal {
    /// Reads the principal from the identity header.
    ///
    /// Only a missing or empty header means "no principal"; any other value,
    /// including non-ASCII text, is relayed.
    pub fn from_request(req: &Request) -> Option<Self> {
        req.header(PRINCIPAL_ID_HEADER)
            .filter(|id| !id.is_empty())
            .map(|id| Self { id: id.into_owned() })
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}
