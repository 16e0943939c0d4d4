use std::sync::Arc;

use foundry_core::upload::UploadStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, opened once at start-up.
    pub pool: foundry_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Managed attachment directory.
    pub uploads: Arc<UploadStore>,
}
