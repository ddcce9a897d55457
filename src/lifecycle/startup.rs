//! Startup orchestration.
//!
//! # Responsibilities
//! - Resolve the configuration from file and CLI overrides
//! - Build the server and its route table
//! - Bind the plain or TLS listener and serve until shutdown
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Listener binds last (traffic only when ready)

use std::net::SocketAddr;
use std::path::Path;

use tokio::net::TcpListener;

use crate::config::{self, EchoConfig};
use crate::error::Error;
use crate::http::HttpServer;
use crate::lifecycle::{signals, Shutdown};
use crate::net::tls;

/// Load the configuration file when given, then apply a bind override.
///
/// The result is validated after the override so a bad `--bind` value is
/// reported the same way as a bad file entry.
pub fn resolve_config(path: Option<&Path>, bind_override: Option<&str>) -> Result<EchoConfig, Error> {
    let mut config = match path {
        Some(path) => config::load_config(path)?,
        None => EchoConfig::default(),
    };

    if let Some(bind) = bind_override {
        config.listener.bind_address = bind.to_string();
    }

    config::validate_config(&config).map_err(config::ConfigError::Validation)?;
    Ok(config)
}

/// Run the service until a termination signal arrives.
pub async fn serve(config: EchoConfig) -> Result<(), Error> {
    match std::env::current_dir() {
        Ok(dir) => tracing::info!(working_dir = %dir.display(), "Current working directory"),
        Err(e) => tracing::warn!(error = %e, "Working directory unavailable"),
    }

    tracing::info!(
        bind_address = %config.listener.bind_address,
        tls = config.listener.tls.is_some(),
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let addr: SocketAddr = config
        .listener
        .bind_address
        .parse()
        .map_err(|source| Error::BindAddress {
            address: config.listener.bind_address.clone(),
            source,
        })?;
    let tls_config = config.listener.tls.clone();

    let server = HttpServer::new(config)?;
    for entry in server.routes().entries() {
        tracing::info!(method = %entry.method(), path = entry.path(), "Serving route");
    }

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    signals::spawn_signal_listener(shutdown);

    match tls_config {
        Some(tls_config) => {
            let rustls = tls::load_from_config(&tls_config)
                .await
                .map_err(Error::Tls)?;
            server.run_tls(addr, rustls, server_shutdown).await?;
        }
        None => {
            let listener = TcpListener::bind(addr).await?;
            tracing::info!(address = %listener.local_addr()?, "Listening for connections");
            server.run(listener, server_shutdown).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file() {
        let config = resolve_config(None, None).unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
    }

    #[test]
    fn test_bind_override_applied() {
        let config = resolve_config(None, Some("127.0.0.1:9000")).unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:9000");
    }

    #[test]
    fn test_bad_bind_override_rejected() {
        let err = resolve_config(None, Some("not-an-address")).unwrap_err();
        assert!(matches!(
            err,
            Error::Config(config::ConfigError::Validation(ref errors)) if errors.len() == 1
        ));
    }

    #[test]
    fn test_missing_config_file() {
        let err = resolve_config(Some(Path::new("/nonexistent/echo.toml")), None).unwrap_err();
        assert!(matches!(err, Error::Config(config::ConfigError::Io(_))));
    }
}
