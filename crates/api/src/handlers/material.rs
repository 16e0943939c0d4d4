//! Handler for adding materials to a project.

use axum::extract::State;
use axum::response::Redirect;
use axum::Form;
use foundry_db::repositories::MaterialRepo;

use crate::error::AppResult;
use crate::extract::{ChildRecordPath, ProjectId};
use crate::forms::MaterialForm;
use crate::handlers::{ensure_project_exists, record_not_found, redirect_to_project};
use crate::state::AppState;

/// POST /projects/{id}/materials
pub async fn create(
    State(state): State<AppState>,
    ProjectId(project_id): ProjectId,
    Form(form): Form<MaterialForm>,
) -> AppResult<Redirect> {
    let input = form.into_create()?;
    ensure_project_exists(&state.pool, project_id).await?;

    let created = MaterialRepo::create(&state.pool, project_id, &input).await?;
    tracing::info!(
        project_id,
        material_id = created.id,
        quantity = ?created.quantity,
        "Material created",
    );

    Ok(redirect_to_project(project_id))
}

/// POST /projects/{id}/materials/{record_id}/delete
pub async fn delete(
    State(state): State<AppState>,
    ChildRecordPath {
        project_id,
        record_id,
    }: ChildRecordPath,
) -> AppResult<Redirect> {
    match MaterialRepo::find_by_id(&state.pool, record_id).await? {
        Some(row) if row.project_id == project_id => {}
        _ => return Err(record_not_found("Material", record_id)),
    }

    MaterialRepo::delete(&state.pool, record_id).await?;
    tracing::info!(project_id, material_id = record_id, "Material deleted");

    Ok(redirect_to_project(project_id))
}
