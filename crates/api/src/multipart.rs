//! Reading `multipart/form-data` bodies with at most one attachment.

use std::collections::HashMap;

use axum::extract::multipart::MultipartError;
use axum::extract::Multipart;
use axum::http::StatusCode;
use foundry_core::error::CoreError;
use foundry_core::upload::{IncomingUpload, MAX_UPLOAD_BYTES};

use crate::error::{AppError, AppResult};

/// Text fields plus the (optional) attachment of a multipart form.
#[derive(Debug, Default)]
pub struct MultipartForm {
    fields: HashMap<String, String>,
    file: Option<IncomingUpload>,
}

impl MultipartForm {
    /// Drain `multipart`, keeping text fields and the part named `file_field`.
    ///
    /// A file part with no name and no bytes (the browser's "no file chosen")
    /// counts as no attachment. Unknown file parts are ignored.
    pub async fn read(mut multipart: Multipart, file_field: &str) -> AppResult<Self> {
        let mut form = MultipartForm::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(multipart_error)?
        {
            let name = field.name().unwrap_or("").to_string();

            if name == file_field {
                let original_name = field.file_name().unwrap_or("").to_string();
                let content_type = field.content_type().map(str::to_string);
                let data = field
                    .bytes()
                    .await
                    .map_err(multipart_error)?;

                if original_name.is_empty() && data.is_empty() {
                    continue;
                }
                form.file = Some(IncomingUpload {
                    original_name,
                    content_type,
                    data: data.to_vec(),
                });
            } else if field.file_name().is_none() {
                let text = field
                    .text()
                    .await
                    .map_err(multipart_error)?;
                form.fields.insert(name, text);
            }
        }

        Ok(form)
    }

    /// Raw value of a text field.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Owned copy of a text field, for optional-field normalization.
    pub fn owned(&self, name: &str) -> Option<String> {
        self.fields.get(name).cloned()
    }

    /// Take the attachment, if one was submitted.
    pub fn take_file(&mut self) -> Option<IncomingUpload> {
        self.file.take()
    }
}

/// A body cut off by the request size limit is reported as a rejected
/// upload, the same as a file that fails the size policy.
fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::Core(CoreError::UploadRejected(format!(
            "Request body is too large; attachments are limited to {MAX_UPLOAD_BYTES} bytes (5 MiB)"
        )))
    } else {
        AppError::BadRequest(err.body_text())
    }
}
