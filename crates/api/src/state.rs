use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Built once at startup and injected everywhere; no handler reaches for a
/// global client. Cheaply cloneable (the pool is an `Arc` internally).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: civik_db::DbPool,
    /// Server configuration (JWT secret, timeouts, CORS origins).
    pub config: Arc<ServerConfig>,
}
