//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     RouteTable::standard()
//!     → (method, path) → endpoint entries
//!     → into_router() freezes them into an axum Router
//!
//! Per request:
//!     axum matches path, then method
//!     → endpoint, 404 (unknown path) or 405 (unknown method)
//! ```

pub mod router;

pub use router::{RouteEntry, RouteTable, ROOT_PATH};
