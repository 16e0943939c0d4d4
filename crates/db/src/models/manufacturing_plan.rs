//! Manufacturing plan entity model and DTOs.

use foundry_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A manufacturing plan row from the `manufacturing_plans` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ManufacturingPlan {
    pub id: DbId,
    pub project_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub status: Option<String>,
}

/// DTO for creating a manufacturing plan.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateManufacturingPlan {
    pub title: String,
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub status: Option<String>,
}
