//! Request metadata snapshot.
//!
//! # Responsibilities
//! - Capture the handling-time timestamp from the injected clock
//! - Resolve whether the request arrived over a secure transport
//! - Copy header name/value pairs in the order the transport exposes them
//!
//! # Design Decisions
//! - A `RequestView` is built once per request and never mutated
//! - Duplicate header names stay separate entries, never comma-joined
//! - Non UTF-8 header values are rendered lossily instead of rejected

use axum::http::{HeaderMap, HeaderValue};
use chrono::NaiveDateTime;

/// Header consulted when `trust_forwarded_proto` is enabled.
pub const X_FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Whether the listener that accepted a request terminates TLS.
///
/// Attached to every request as an extension by the listener's router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportSecurity {
    Plain,
    Secure,
}

impl TransportSecurity {
    pub fn is_secure(self) -> bool {
        matches!(self, TransportSecurity::Secure)
    }

    /// Resolve the effective security of one request.
    ///
    /// A plain listener only reports `Secure` when forwarded-proto trust is
    /// enabled and the first `X-Forwarded-Proto` value is `https`.
    pub fn resolve(self, headers: &HeaderMap, trust_forwarded_proto: bool) -> Self {
        if self.is_secure() || !trust_forwarded_proto {
            return self;
        }

        let forwarded_https = headers
            .get(X_FORWARDED_PROTO)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(|proto| proto.trim().eq_ignore_ascii_case("https"))
            .unwrap_or(false);

        if forwarded_https {
            TransportSecurity::Secure
        } else {
            TransportSecurity::Plain
        }
    }
}

/// Immutable view of one request: handling time, security flag and headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestView {
    timestamp: NaiveDateTime,
    is_secure: bool,
    headers: Vec<(String, String)>,
}

impl RequestView {
    pub fn new(timestamp: NaiveDateTime, is_secure: bool, headers: Vec<(String, String)>) -> Self {
        Self {
            timestamp,
            is_secure,
            headers,
        }
    }

    /// Build a view from a parsed header map.
    ///
    /// `HeaderMap` yields every value of a repeated name as its own item, so
    /// duplicates survive as separate pairs.
    pub fn from_headers(timestamp: NaiveDateTime, is_secure: bool, headers: &HeaderMap) -> Self {
        let headers = headers
            .iter()
            .map(|(name, value)| (name.as_str().to_string(), header_value_text(value)))
            .collect();
        Self::new(timestamp, is_secure, headers)
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn is_secure(&self) -> bool {
        self.is_secure
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }
}

fn header_value_text(value: &HeaderValue) -> String {
    match value.to_str() {
        Ok(text) => text.to_string(),
        Err(_) => String::from_utf8_lossy(value.as_bytes()).into_owned(),
    }
}
