//! Handler for attaching documents to a project.

use axum::extract::{Multipart, State};
use axum::response::Redirect;
use foundry_core::upload::UploadKind;
use foundry_core::validation::{optional_text, require_non_empty};
use foundry_db::models::document::CreateDocument;
use foundry_db::repositories::DocumentRepo;

use crate::error::AppResult;
use crate::extract::{ChildRecordPath, ProjectId};
use crate::handlers::{ensure_project_exists, record_not_found, redirect_to_project};
use crate::multipart::MultipartForm;
use crate::state::AppState;

/// POST /projects/{id}/documents
///
/// Multipart form with a required `title`, optional `status` and an
/// optional `document` file of any media type.
pub async fn create(
    State(state): State<AppState>,
    ProjectId(project_id): ProjectId,
    multipart: Multipart,
) -> AppResult<Redirect> {
    let mut form = MultipartForm::read(multipart, UploadKind::Document.field_name()).await?;
    let title = require_non_empty("title", form.text("title"))?;
    let status = optional_text(form.owned("status"));

    ensure_project_exists(&state.pool, project_id).await?;

    let stored = match form.take_file() {
        Some(upload) => Some(state.uploads.save(UploadKind::Document, &upload).await?),
        None => None,
    };

    let input = CreateDocument {
        title,
        file_path: stored.as_ref().map(|s| s.path.clone()),
        status,
    };

    let document = match DocumentRepo::create(&state.pool, project_id, &input).await {
        Ok(document) => document,
        Err(e) => {
            if let Some(stored) = &stored {
                state.uploads.discard(&stored.path).await;
            }
            return Err(e.into());
        }
    };

    tracing::info!(
        project_id,
        document_id = document.id,
        size_bytes = stored.as_ref().map_or(0, |s| s.size_bytes),
        "Document created",
    );

    Ok(redirect_to_project(project_id))
}

/// POST /projects/{id}/documents/{record_id}/delete
///
/// The attachment file, if any, stays in the upload directory.
pub async fn delete(
    State(state): State<AppState>,
    ChildRecordPath {
        project_id,
        record_id,
    }: ChildRecordPath,
) -> AppResult<Redirect> {
    match DocumentRepo::find_by_id(&state.pool, record_id).await? {
        Some(row) if row.project_id == project_id => {}
        _ => return Err(record_not_found("Document", record_id)),
    }

    DocumentRepo::delete(&state.pool, record_id).await?;
    tracing::info!(project_id, document_id = record_id, "Document deleted");

    Ok(redirect_to_project(project_id))
}
