//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP/TLS connection
//!     → server.rs (axum app, listener tagged Plain/Secure)
//!     → routing table (GET / → echo handler)
//!     → request.rs (RequestView: clock reading, secure flag, headers)
//!     → handler.rs (render plain-text body)
//!     → Send to client
//! ```

pub mod handler;
pub mod request;
pub mod server;

pub use handler::{echo_handler, render};
pub use request::{RequestView, TransportSecurity};
pub use server::{AppState, HttpServer};
