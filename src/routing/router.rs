//! Route table and dispatch.
//!
//! # Responsibilities
//! - Store (method, path) → endpoint entries registered at startup
//! - Reject duplicate registrations
//! - Freeze the table into an axum `Router`
//!
//! # Design Decisions
//! - Immutable after conversion (thread-safe without locks)
//! - Exact path matching only; unknown paths fall through to 404
//! - Known path with an unregistered method yields 405

use axum::{
    handler::Handler,
    http::Method,
    routing::{on, MethodFilter, MethodRouter},
    Router,
};

use crate::error::Error;
use crate::http::handler::echo_handler;
use crate::http::server::AppState;

/// Path served by the echo handler.
pub const ROOT_PATH: &str = "/";

/// One registered route.
#[derive(Debug)]
pub struct RouteEntry {
    method: Method,
    path: &'static str,
    endpoint: MethodRouter<AppState>,
}

impl RouteEntry {
    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &'static str {
        self.path
    }
}

/// Explicit routing table, built once at process startup.
#[derive(Debug, Default)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The service's table: `GET /` → echo handler.
    pub fn standard() -> Result<Self, Error> {
        Self::new().route(Method::GET, ROOT_PATH, echo_handler)
    }

    /// Register `handler` for `method` on `path`.
    pub fn route<H, T>(mut self, method: Method, path: &'static str, handler: H) -> Result<Self, Error>
    where
        H: Handler<T, AppState>,
        T: 'static,
    {
        if self
            .entries
            .iter()
            .any(|e| e.method == method && e.path == path)
        {
            return Err(Error::DuplicateRoute {
                method: method.to_string(),
                path: path.to_string(),
            });
        }

        let filter = MethodFilter::try_from(method.clone())
            .map_err(|_| Error::UnsupportedMethod(method.to_string()))?;

        self.entries.push(RouteEntry {
            method,
            path,
            endpoint: on(filter, handler),
        });
        Ok(self)
    }

    /// Registered routes, in registration order.
    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Freeze the table into an axum router.
    ///
    /// Entries sharing a path are merged into one method router.
    pub fn into_router(self) -> Router<AppState> {
        self.entries
            .into_iter()
            .fold(Router::new(), |router, entry| {
                router.route(entry.path, entry.endpoint)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn other_handler() -> &'static str {
        "other"
    }

    #[test]
    fn test_standard_table() {
        let table = RouteTable::standard().unwrap();
        assert_eq!(table.len(), 1);

        let entry = &table.entries()[0];
        assert_eq!(entry.method(), &Method::GET);
        assert_eq!(entry.path(), "/");
    }

    #[test]
    fn test_duplicate_route_rejected() {
        let result = RouteTable::standard()
            .unwrap()
            .route(Method::GET, ROOT_PATH, other_handler);

        match result {
            Err(Error::DuplicateRoute { method, path }) => {
                assert_eq!(method, "GET");
                assert_eq!(path, "/");
            }
            other => panic!("expected duplicate route error, got {:?}", other.map(|t| t.len())),
        }
    }

    #[test]
    fn test_same_path_different_method_allowed() {
        let table = RouteTable::standard()
            .unwrap()
            .route(Method::POST, ROOT_PATH, other_handler)
            .unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_extension_method_unsupported() {
        let method = Method::from_bytes(b"PURGE").unwrap();
        let result = RouteTable::new().route(method, "/cache", other_handler);
        assert!(matches!(result, Err(Error::UnsupportedMethod(m)) if m == "PURGE"));
    }
}
