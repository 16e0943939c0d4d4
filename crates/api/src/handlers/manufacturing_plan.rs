//! Handler for adding manufacturing plans to a project.

use axum::extract::State;
use axum::response::Redirect;
use axum::Form;
use foundry_db::repositories::ManufacturingPlanRepo;

use crate::error::AppResult;
use crate::extract::{ChildRecordPath, ProjectId};
use crate::forms::ManufacturingPlanForm;
use crate::handlers::{ensure_project_exists, record_not_found, redirect_to_project};
use crate::state::AppState;

/// POST /projects/{id}/manufacturing-plans
pub async fn create(
    State(state): State<AppState>,
    ProjectId(project_id): ProjectId,
    Form(form): Form<ManufacturingPlanForm>,
) -> AppResult<Redirect> {
    let input = form.into_create()?;
    ensure_project_exists(&state.pool, project_id).await?;

    let created = ManufacturingPlanRepo::create(&state.pool, project_id, &input).await?;
    tracing::info!(project_id, plan_id = created.id, "Manufacturing plan created");

    Ok(redirect_to_project(project_id))
}

/// POST /projects/{id}/manufacturing-plans/{record_id}/delete
pub async fn delete(
    State(state): State<AppState>,
    ChildRecordPath {
        project_id,
        record_id,
    }: ChildRecordPath,
) -> AppResult<Redirect> {
    match ManufacturingPlanRepo::find_by_id(&state.pool, record_id).await? {
        Some(row) if row.project_id == project_id => {}
        _ => return Err(record_not_found("Manufacturing plan", record_id)),
    }

    ManufacturingPlanRepo::delete(&state.pool, record_id).await?;
    tracing::info!(project_id, plan_id = record_id, "Manufacturing plan deleted");

    Ok(redirect_to_project(project_id))
}
