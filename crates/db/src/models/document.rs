//! Document entity model and DTOs.

use foundry_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A document row from the `documents` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Document {
    pub id: DbId,
    pub project_id: DbId,
    pub title: String,
    /// Upload store path of the attached file, if one was uploaded.
    pub file_path: Option<String>,
    pub status: Option<String>,
    pub uploaded_at: Timestamp,
}

/// DTO for creating a document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateDocument {
    pub title: String,
    pub file_path: Option<String>,
    pub status: Option<String>,
}
