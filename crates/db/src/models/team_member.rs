//! Team member entity model and DTOs.

use foundry_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A team member row from the `team_members` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TeamMember {
    pub id: DbId,
    pub project_id: DbId,
    pub name: String,
    pub role: Option<String>,
    pub email: Option<String>,
}

/// DTO for adding a team member.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTeamMember {
    pub name: String,
    pub role: Option<String>,
    pub email: Option<String>,
}
