//! Unified error type.

use std::fmt;

/// The error type returned by the crate's fallible operations.
///
/// An unauthenticated caller is not an `Error`; it is a `401` [`Response`](crate::Response).
/// This type covers the infrastructure around the handler: reading the
/// listening address from the environment, binding the port, accepting
/// connections.
#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Config(config::ConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e)     => write!(f, "io: {e}"),
            Self::Config(e) => write!(f, "config: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e)     => Some(e),
            Self::Config(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<config::ConfigError> for Error {
    fn from(e: config::ConfigError) -> Self {
        Self::Config(e)
    }
}
