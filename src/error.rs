//! Crate-level error type.

use thiserror::Error;

use crate::config::loader::ConfigError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to load TLS material: {0}")]
    Tls(#[source] std::io::Error),

    #[error("invalid bind address {address:?}: {source}")]
    BindAddress {
        address: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("route {method} {path} registered twice")]
    DuplicateRoute { method: String, path: String },

    #[error("method {0} cannot be routed")]
    UnsupportedMethod(String),

    #[error("failed to install log subscriber: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
