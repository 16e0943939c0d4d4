//! Handler for adding team members to a project.

use axum::extract::State;
use axum::response::Redirect;
use axum::Form;
use foundry_db::repositories::TeamMemberRepo;

use crate::error::AppResult;
use crate::extract::{ChildRecordPath, ProjectId};
use crate::forms::TeamMemberForm;
use crate::handlers::{ensure_project_exists, record_not_found, redirect_to_project};
use crate::state::AppState;

/// POST /projects/{id}/team-members
pub async fn create(
    State(state): State<AppState>,
    ProjectId(project_id): ProjectId,
    Form(form): Form<TeamMemberForm>,
) -> AppResult<Redirect> {
    let input = form.into_create()?;
    ensure_project_exists(&state.pool, project_id).await?;

    let created = TeamMemberRepo::create(&state.pool, project_id, &input).await?;
    tracing::info!(project_id, team_member_id = created.id, "Team member created");

    Ok(redirect_to_project(project_id))
}

/// POST /projects/{id}/team-members/{record_id}/delete
pub async fn delete(
    State(state): State<AppState>,
    ChildRecordPath {
        project_id,
        record_id,
    }: ChildRecordPath,
) -> AppResult<Redirect> {
    match TeamMemberRepo::find_by_id(&state.pool, record_id).await? {
        Some(row) if row.project_id == project_id => {}
        _ => return Err(record_not_found("Team member", record_id)),
    }

    TeamMemberRepo::delete(&state.pool, record_id).await?;
    tracing::info!(project_id, team_member_id = record_id, "Team member deleted");

    Ok(redirect_to_project(project_id))
}
