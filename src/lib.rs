//! Hello echo service.
//!
//! A single `GET /` endpoint that answers with the server's local time,
//! whether the connection is secure, and every request header.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ net (plain TCP or rustls) ──▶ http::server ──▶ routing table
//!                                                                        │
//!                                                                        ▼
//!     Client Response                                             http::handler
//!     ◀────────────── text/plain body ◀──────── render(RequestView) ◀── clock
//!
//!     Cross-cutting: config, observability, lifecycle (startup/shutdown)
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;
pub mod routing;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::EchoConfig;
pub use error::Error;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
