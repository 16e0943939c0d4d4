//! Material entity model and DTOs.

use foundry_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A material row from the `materials` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Material {
    pub id: DbId,
    pub project_id: DbId,
    pub name: String,
    pub quantity: Option<i64>,
    pub unit: Option<String>,
    pub status: Option<String>,
}

/// DTO for creating a material.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateMaterial {
    pub name: String,
    pub quantity: Option<i64>,
    pub unit: Option<String>,
    pub status: Option<String>,
}
