//! Liveness endpoint for process supervisors.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Readiness of the two stores every page depends on.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok` when both stores are usable, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    /// The record store answers queries.
    pub database: bool,
    /// The managed upload directory exists and is a directory.
    pub uploads: bool,
}

/// GET /health
///
/// Always 200; callers read `status` to decide. The upload directory is
/// created at start-up, so its absence means it was removed underneath the
/// running server.
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = foundry_db::health_check(&state.pool).await.is_ok();
    let uploads = tokio::fs::metadata(state.uploads.root())
        .await
        .is_ok_and(|meta| meta.is_dir());

    if !(database && uploads) {
        tracing::warn!(database, uploads, "Health check degraded");
    }

    Json(HealthResponse {
        status: if database && uploads { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        database,
        uploads,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
