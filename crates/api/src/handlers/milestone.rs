//! Handler for adding milestones to a project.
//!
//! Milestones are listed on the detail page in the order they were added.

use axum::extract::State;
use axum::response::Redirect;
use axum::Form;
use foundry_db::repositories::MilestoneRepo;

use crate::error::AppResult;
use crate::extract::{ChildRecordPath, ProjectId};
use crate::forms::MilestoneForm;
use crate::handlers::{ensure_project_exists, record_not_found, redirect_to_project};
use crate::state::AppState;

/// POST /projects/{id}/milestones
pub async fn create(
    State(state): State<AppState>,
    ProjectId(project_id): ProjectId,
    Form(form): Form<MilestoneForm>,
) -> AppResult<Redirect> {
    let input = form.into_create()?;
    ensure_project_exists(&state.pool, project_id).await?;

    let created = MilestoneRepo::create(&state.pool, project_id, &input).await?;
    tracing::info!(project_id, milestone_id = created.id, "Milestone created");

    Ok(redirect_to_project(project_id))
}

/// POST /projects/{id}/milestones/{record_id}/delete
pub async fn delete(
    State(state): State<AppState>,
    ChildRecordPath {
        project_id,
        record_id,
    }: ChildRecordPath,
) -> AppResult<Redirect> {
    match MilestoneRepo::find_by_id(&state.pool, record_id).await? {
        Some(row) if row.project_id == project_id => {}
        _ => return Err(record_not_found("Milestone", record_id)),
    }

    MilestoneRepo::delete(&state.pool, record_id).await?;
    tracing::info!(project_id, milestone_id = record_id, "Milestone deleted");

    Ok(redirect_to_project(project_id))
}
