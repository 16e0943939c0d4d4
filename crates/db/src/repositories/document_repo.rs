//! Repository for the `documents` table.

use foundry_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::document::{CreateDocument, Document};

const COLUMNS: &str = "id, project_id, title, file_path, status, uploaded_at";

/// Provides CRUD operations for documents.
///
/// Rows only reference attachment files by path; the files themselves are
/// owned by the upload store.
pub struct DocumentRepo;

impl DocumentRepo {
    /// Insert a document for `project_id`, returning the created row.
    pub async fn create(
        pool: &SqlitePool,
        project_id: DbId,
        input: &CreateDocument,
    ) -> Result<Document, sqlx::Error> {
        let query = format!(
            "INSERT INTO documents (project_id, title, file_path, status)
             VALUES (?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Document>(&query)
            .bind(project_id)
            .bind(&input.title)
            .bind(&input.file_path)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Document>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM documents WHERE id = ?");
        sqlx::query_as::<_, Document>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a project's documents in upload order.
    pub async fn list_by_project(
        pool: &SqlitePool,
        project_id: DbId,
    ) -> Result<Vec<Document>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM documents WHERE project_id = ? ORDER BY id");
        sqlx::query_as::<_, Document>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM documents WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
