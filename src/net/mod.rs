//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming TCP connection
//!     → plain listener (tokio TcpListener, axum::serve)
//!       or TLS listener (axum-server + rustls, certificates from tls.rs)
//!     → Hand off to HTTP layer, tagged Plain or Secure
//! ```
//!
//! # Design Decisions
//! - One listener per process; TLS is chosen by configuration
//! - The listener, not the request, decides transport security

pub mod tls;
