//! Repository for the `manufacturing_plans` table.

use foundry_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::manufacturing_plan::{CreateManufacturingPlan, ManufacturingPlan};

const COLUMNS: &str = "id, project_id, title, description, start_date, end_date, status";

/// Provides CRUD operations for manufacturing plans.
pub struct ManufacturingPlanRepo;

impl ManufacturingPlanRepo {
    /// Insert a manufacturing plan for `project_id`, returning the created row.
    pub async fn create(
        pool: &SqlitePool,
        project_id: DbId,
        input: &CreateManufacturingPlan,
    ) -> Result<ManufacturingPlan, sqlx::Error> {
        let query = format!(
            "INSERT INTO manufacturing_plans
                (project_id, title, description, start_date, end_date, status)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ManufacturingPlan>(&query)
            .bind(project_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.start_date)
            .bind(&input.end_date)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<ManufacturingPlan>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM manufacturing_plans WHERE id = ?");
        sqlx::query_as::<_, ManufacturingPlan>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a project's manufacturing plans in insertion order.
    pub async fn list_by_project(
        pool: &SqlitePool,
        project_id: DbId,
    ) -> Result<Vec<ManufacturingPlan>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM manufacturing_plans WHERE project_id = ? ORDER BY id");
        sqlx::query_as::<_, ManufacturingPlan>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM manufacturing_plans WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
