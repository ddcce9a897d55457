//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Build the axum app from the route table
//! - Tag every request with the listener's transport security
//! - Wire up middleware (tracing, request timeout)
//! - Serve on a plain TCP listener or over TLS
//! - Drain in-flight requests on shutdown

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{Extension, Router};
use axum_server::{tls_rustls::RustlsConfig, Handle};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::clock::{Clock, SystemClock};
use crate::config::EchoConfig;
use crate::error::Error;
use crate::http::request::TransportSecurity;
use crate::lifecycle::shutdown;
use crate::routing::RouteTable;

/// Application state injected into handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    pub clock: Arc<dyn Clock>,
    pub trust_forwarded_proto: bool,
}

/// HTTP server for the echo service.
pub struct HttpServer {
    routes: RouteTable,
    state: AppState,
    config: EchoConfig,
}

impl HttpServer {
    /// Create a server reading the system clock.
    pub fn new(config: EchoConfig) -> Result<Self, Error> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create a server reading time from `clock`.
    pub fn with_clock(config: EchoConfig, clock: Arc<dyn Clock>) -> Result<Self, Error> {
        let routes = RouteTable::standard()?;
        for entry in routes.entries() {
            tracing::debug!(method = %entry.method(), path = entry.path(), "Route registered");
        }

        let state = AppState {
            clock,
            trust_forwarded_proto: config.listener.trust_forwarded_proto,
        };

        Ok(Self {
            routes,
            state,
            config,
        })
    }

    /// Get a reference to the route table.
    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &EchoConfig {
        &self.config
    }

    /// Build the axum app for a listener with the given transport security.
    #[allow(deprecated)]
    pub fn into_app(self, transport: TransportSecurity) -> Router {
        self.routes
            .into_router()
            .with_state(self.state)
            .layer(Extension(transport))
            .layer(TimeoutLayer::new(Duration::from_secs(
                self.config.timeouts.request_secs,
            )))
            .layer(TraceLayer::new_for_http())
    }

    /// Serve plain HTTP on `listener` until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, secure = false, "HTTP server starting");

        let app = self.into_app(TransportSecurity::Plain);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown::wait(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Serve HTTPS on `addr` until `shutdown` fires.
    ///
    /// In-flight requests get `timeouts.shutdown_grace_secs` to finish.
    pub async fn run_tls(
        self,
        addr: SocketAddr,
        tls: RustlsConfig,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        tracing::info!(address = %addr, secure = true, "HTTPS server starting");

        let grace = Duration::from_secs(self.config.timeouts.shutdown_grace_secs);
        let handle = Handle::new();
        let drain = handle.clone();
        tokio::spawn(async move {
            shutdown::wait(shutdown).await;
            drain.graceful_shutdown(Some(grace));
        });

        let app = self.into_app(TransportSecurity::Secure);

        axum_server::bind_rustls(addr, tls)
            .handle(handle)
            .serve(app.into_make_service())
            .await?;

        tracing::info!("HTTPS server stopped");
        Ok(())
    }
}
