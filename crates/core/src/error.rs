use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// An attachment failed the upload policy (media type or size).
    #[error("Upload rejected: {0}")]
    UploadRejected(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
