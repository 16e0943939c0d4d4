//! Milestone entity model and DTOs.

use foundry_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A milestone row from the `milestones` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Milestone {
    pub id: DbId,
    pub project_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<String>,
    pub status: Option<String>,
}

/// DTO for creating a milestone. The owning project is passed separately.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateMilestone {
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<String>,
    pub status: Option<String>,
}
