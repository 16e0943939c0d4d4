//! Handlers for project pages and forms.

use axum::extract::{Multipart, State};
use axum::response::{Html, Redirect};
use foundry_core::error::CoreError;
use foundry_core::upload::UploadKind;
use foundry_db::repositories::{ProjectDetailRepo, ProjectRepo};
use serde_json::json;

use crate::error::{AppError, AppResult};
use crate::extract::ProjectId;
use crate::forms::ProjectForm;
use crate::handlers::{ensure_project_exists, redirect_to_project};
use crate::multipart::MultipartForm;
use crate::state::AppState;
use crate::views;

fn project_not_found(id: i64) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Project",
        id,
    })
}

/// GET /
pub async fn list(State(state): State<AppState>) -> AppResult<Html<String>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    views::render("index", &json!({ "projects": projects }))
}

/// GET /projects/new
pub async fn new_form() -> AppResult<Html<String>> {
    views::render("project_new", &json!({}))
}

/// POST /projects
///
/// Multipart form with a required `name` and an optional `cover_image`.
/// The name is checked before the image is stored so a rejected form leaves
/// nothing on disk.
pub async fn create(State(state): State<AppState>, multipart: Multipart) -> AppResult<Redirect> {
    let mut form =
        MultipartForm::read(multipart, UploadKind::CoverImage.field_name()).await?;
    let fields = ProjectForm::from_multipart(&form)?;

    let cover = match form.take_file() {
        Some(upload) => Some(state.uploads.save(UploadKind::CoverImage, &upload).await?),
        None => None,
    };

    let input = fields.into_create(cover.as_ref().map(|c| c.path.clone()));
    let project = match ProjectRepo::create(&state.pool, &input).await {
        Ok(project) => project,
        Err(e) => {
            if let Some(cover) = &cover {
                state.uploads.discard(&cover.path).await;
            }
            return Err(e.into());
        }
    };

    tracing::info!(
        project_id = project.id,
        name = %project.name,
        has_cover = project.cover_image.is_some(),
        "Project created",
    );

    Ok(Redirect::to("/"))
}

/// GET /projects/{id}
///
/// Project detail page with every child collection.
pub async fn show(
    State(state): State<AppState>,
    ProjectId(id): ProjectId,
) -> AppResult<Html<String>> {
    let detail = ProjectDetailRepo::load(&state.pool, id)
        .await?
        .ok_or_else(|| project_not_found(id))?;
    views::render("project_show", &detail)
}

/// GET /projects/{id}/edit
pub async fn edit_form(
    State(state): State<AppState>,
    ProjectId(id): ProjectId,
) -> AppResult<Html<String>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| project_not_found(id))?;
    views::render("project_edit", &json!({ "project": project }))
}

/// POST /projects/{id}
///
/// Partial update. A new `cover_image` replaces the stored path; without
/// one the existing path is kept. The replaced file is left in place.
pub async fn update(
    State(state): State<AppState>,
    ProjectId(id): ProjectId,
    multipart: Multipart,
) -> AppResult<Redirect> {
    ensure_project_exists(&state.pool, id).await?;

    let mut form =
        MultipartForm::read(multipart, UploadKind::CoverImage.field_name()).await?;
    let fields = ProjectForm::from_multipart(&form)?;

    let cover = match form.take_file() {
        Some(upload) => Some(state.uploads.save(UploadKind::CoverImage, &upload).await?),
        None => None,
    };

    let input = fields.into_update(cover.as_ref().map(|c| c.path.clone()));
    let updated = match ProjectRepo::update(&state.pool, id, &input).await {
        Ok(updated) => updated,
        Err(e) => {
            if let Some(cover) = &cover {
                state.uploads.discard(&cover.path).await;
            }
            return Err(e.into());
        }
    };

    let Some(project) = updated else {
        // Deleted between the existence check and the update.
        if let Some(cover) = &cover {
            state.uploads.discard(&cover.path).await;
        }
        return Err(project_not_found(id));
    };

    tracing::info!(
        project_id = project.id,
        cover_replaced = cover.is_some(),
        "Project updated",
    );

    Ok(redirect_to_project(id))
}

/// POST /projects/{id}/delete
///
/// Deletes the project; child rows cascade. Attachment files stay on disk.
pub async fn delete(State(state): State<AppState>, ProjectId(id): ProjectId) -> AppResult<Redirect> {
    if !ProjectRepo::delete(&state.pool, id).await? {
        return Err(project_not_found(id));
    }
    tracing::info!(project_id = id, "Project deleted");
    Ok(Redirect::to("/"))
}
