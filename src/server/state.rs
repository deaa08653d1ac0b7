//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds the shared resources needed by
//! request handlers. The state is initialized once during startup and then cloned for
//! each request handler through Axum's state extraction. Everything in it is read-only
//! after startup.

use sea_orm::DatabaseConnection;

use crate::server::config::{AuthConfig, PaginationConfig};

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `AuthConfig` holds a single short string
/// - `PaginationConfig` is `Copy`
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Shared secret checked by the bearer authenticator.
    pub auth: AuthConfig,

    /// Default and maximum page sizes for list endpoints.
    pub pagination: PaginationConfig,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `auth` - Bearer authentication settings
    /// - `pagination` - Pagination limits
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, auth: AuthConfig, pagination: PaginationConfig) -> Self {
        Self {
            db,
            auth,
            pagination,
        }
    }
}
