use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// The pool is constructed once in `main` and injected here; handlers never
/// reach for a process-wide client.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: newswire_db::DbPool,
    /// Server configuration (port, CORS, item delete policy).
    pub config: Arc<ServerConfig>,
}
