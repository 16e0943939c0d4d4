//! Attachment upload policy and the managed upload directory.
//!
//! Accepted files are written under a single directory with generated
//! names of the form `<unix-millis>-<token>[.<ext>]`. The returned path
//! (`uploads/<name>`) is stored on the owning record and doubles as the URL
//! suffix the static file service exposes.
//!
//! Replaced or deleted attachments are not reclaimed here; callers decide
//! whether to [`UploadStore::discard`] a file.

use std::path::{Path, PathBuf};

use rand::Rng;
use tokio::io::AsyncWriteExt;

use crate::error::CoreError;
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum accepted attachment size (5 MiB), for every upload kind.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Public URL prefix under which stored attachments are served.
pub const UPLOADS_URL_PREFIX: &str = "uploads";

/// Media types accepted for project cover images.
pub const COVER_IMAGE_MEDIA_TYPES: &[&str] = &["image/jpeg", "image/png", "image/gif", "image/webp"];

/// Length of the random token in generated file names.
const TOKEN_LENGTH: usize = 10;

/// Longest original extension carried over into a generated name.
const MAX_EXTENSION_LENGTH: usize = 10;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Which record slot an attachment is destined for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    /// `Project.cover_image`: raster images only.
    CoverImage,
    /// `Document.file_path`: any media type.
    Document,
}

impl UploadKind {
    /// Multipart form field carrying this kind of attachment.
    pub fn field_name(self) -> &'static str {
        match self {
            UploadKind::CoverImage => "cover_image",
            UploadKind::Document => "document",
        }
    }

    /// Whether a declared media type is allowed for this kind.
    pub fn accepts(self, content_type: Option<&str>) -> bool {
        match self {
            UploadKind::Document => true,
            UploadKind::CoverImage => content_type
                .map(media_essence)
                .is_some_and(|essence| COVER_IMAGE_MEDIA_TYPES.contains(&essence.as_str())),
        }
    }
}

/// An attachment as received from the client, before validation.
#[derive(Debug, Clone)]
pub struct IncomingUpload {
    pub original_name: String,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

/// An attachment accepted and written to the managed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredUpload {
    /// Generated file name inside the managed directory.
    pub file_name: String,
    /// Relative path recorded on the owning row (`uploads/<file_name>`).
    pub path: String,
    pub size_bytes: u64,
}

// ---------------------------------------------------------------------------
// Policy
// ---------------------------------------------------------------------------

/// Check an incoming attachment against the policy for `kind`.
pub fn validate_upload(kind: UploadKind, upload: &IncomingUpload) -> Result<(), CoreError> {
    if upload.data.len() > MAX_UPLOAD_BYTES {
        return Err(CoreError::UploadRejected(format!(
            "File '{}' is {} bytes; the limit is {MAX_UPLOAD_BYTES} bytes (5 MiB)",
            upload.original_name,
            upload.data.len()
        )));
    }

    if !kind.accepts(upload.content_type.as_deref()) {
        let declared = upload.content_type.as_deref().unwrap_or("unknown");
        return Err(CoreError::UploadRejected(format!(
            "Media type '{declared}' is not allowed for {}. Allowed: {}",
            kind.field_name(),
            COVER_IMAGE_MEDIA_TYPES.join(", ")
        )));
    }

    Ok(())
}

/// Strip parameters from a media type and lower-case it
/// (`"Image/PNG; q=1"` -> `"image/png"`).
fn media_essence(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

/// Extension of the original file name, if it is short and alphanumeric.
pub fn file_extension(original_name: &str) -> Option<String> {
    let (stem, ext) = original_name.rsplit_once('.')?;
    if stem.is_empty()
        || ext.is_empty()
        || ext.len() > MAX_EXTENSION_LENGTH
        || !ext.chars().all(|c| c.is_ascii_alphanumeric())
    {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Generate a stored file name: timestamp, random token, original extension.
pub fn generate_file_name(original_name: &str, now: Timestamp) -> String {
    let token: String = rand::rng()
        .sample_iter(&rand::distr::Alphanumeric)
        .take(TOKEN_LENGTH)
        .map(char::from)
        .collect();

    match file_extension(original_name) {
        Some(ext) => format!("{}-{token}.{ext}", now.timestamp_millis()),
        None => format!("{}-{token}", now.timestamp_millis()),
    }
}

// ---------------------------------------------------------------------------
// Managed directory
// ---------------------------------------------------------------------------

/// Writes accepted attachments into the managed upload directory.
#[derive(Debug, Clone)]
pub struct UploadStore {
    root: PathBuf,
}

impl UploadStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Filesystem location of the managed directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Filesystem location for a stored record path (`uploads/<name>`).
    ///
    /// Returns `None` for paths that were not produced by this store.
    pub fn resolve(&self, stored_path: &str) -> Option<PathBuf> {
        let file_name = stored_path
            .strip_prefix(UPLOADS_URL_PREFIX)?
            .strip_prefix('/')?;
        if file_name.is_empty() || file_name.contains(['/', '\\']) || file_name.starts_with('.') {
            return None;
        }
        Some(self.root.join(file_name))
    }

    /// Validate and persist an attachment.
    ///
    /// Rejections happen before anything touches the disk. The directory is
    /// created on demand, and the target is opened create-new so a name
    /// collision fails instead of overwriting another upload.
    pub async fn save(
        &self,
        kind: UploadKind,
        upload: &IncomingUpload,
    ) -> Result<StoredUpload, CoreError> {
        validate_upload(kind, upload)?;

        tokio::fs::create_dir_all(&self.root).await.map_err(|e| {
            CoreError::Internal(format!(
                "Failed to create upload directory {}: {e}",
                self.root.display()
            ))
        })?;

        let file_name = generate_file_name(&upload.original_name, chrono::Utc::now());
        let target = self.root.join(&file_name);

        let mut file = tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&target)
            .await
            .map_err(|e| CoreError::Internal(format!("Failed to create {file_name}: {e}")))?;

        let written = async {
            file.write_all(&upload.data).await?;
            file.flush().await
        }
        .await;

        if let Err(e) = written {
            drop(file);
            let _ = tokio::fs::remove_file(&target).await;
            return Err(CoreError::Internal(format!("Failed to write {file_name}: {e}")));
        }

        tracing::debug!(
            file_name = %file_name,
            original_name = %upload.original_name,
            size_bytes = upload.data.len(),
            "Stored upload",
        );

        Ok(StoredUpload {
            path: format!("{UPLOADS_URL_PREFIX}/{file_name}"),
            file_name,
            size_bytes: upload.data.len() as u64,
        })
    }

    /// Best-effort removal of a stored attachment. Returns `true` if a file
    /// was removed.
    pub async fn discard(&self, stored_path: &str) -> bool {
        let Some(path) = self.resolve(stored_path) else {
            return false;
        };
        match tokio::fs::remove_file(&path).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to remove upload");
                false
            }
        }
    }
}
