//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events with structured fields
//!     → tower-http TraceLayer spans per request
//!
//! Consumers:
//!     → logging.rs subscriber (stdout, pretty or compact)
//! ```

pub mod logging;

pub use logging::init_logging;
