//! Custom extractors shared by handlers.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use foundry_core::types::DbId;

use crate::error::AppError;

/// The `{id}` path segment of `/projects/{id}/...`, parsed as a [`DbId`].
///
/// Non-numeric ids are rejected with [`AppError::BadRequest`] so they get
/// the regular error page instead of axum's plain-text rejection.
#[derive(Debug, Clone, Copy)]
pub struct ProjectId(pub DbId);

impl<S> FromRequestParts<S> for ProjectId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        parse_id("project", &raw).map(ProjectId)
    }
}

/// `/projects/{id}/<collection>/{record_id}/...`: the owning project and one
/// of its child rows.
#[derive(Debug, Clone, Copy)]
pub struct ChildRecordPath {
    pub project_id: DbId,
    pub record_id: DbId,
}

impl<S> FromRequestParts<S> for ChildRecordPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path((project, record)) = Path::<(String, String)>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        Ok(ChildRecordPath {
            project_id: parse_id("project", &project)?,
            record_id: parse_id("record", &record)?,
        })
    }
}

fn parse_id(kind: &str, raw: &str) -> Result<DbId, AppError> {
    raw.parse::<DbId>()
        .map_err(|_| AppError::BadRequest(format!("Invalid {kind} id '{raw}'")))
}
