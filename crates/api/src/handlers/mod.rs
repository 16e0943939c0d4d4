//! Request handlers.
//!
//! Each submodule provides async handler functions for a single entity
//! type. Handlers delegate to the corresponding repository in `foundry_db`
//! and map errors via [`AppError`].

pub mod document;
pub mod manufacturing_plan;
pub mod material;
pub mod milestone;
pub mod project;
pub mod team_member;

use axum::response::Redirect;
use foundry_core::error::CoreError;
use foundry_core::types::DbId;
use foundry_db::repositories::ProjectRepo;
use foundry_db::DbPool;

use crate::error::{AppError, AppResult};

/// Fail with 404 unless the project exists. Child inserts check this first
/// so a stale form gets "not found" rather than a constraint failure.
pub(crate) async fn ensure_project_exists(pool: &DbPool, project_id: DbId) -> AppResult<()> {
    if ProjectRepo::exists(pool, project_id).await? {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }))
    }
}

/// 404 for a child row that is missing or belongs to a different project.
pub(crate) fn record_not_found(entity: &'static str, id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity, id })
}

/// 303 redirect back to a project's detail page.
pub(crate) fn redirect_to_project(project_id: DbId) -> Redirect {
    Redirect::to(&format!("/projects/{project_id}"))
}
