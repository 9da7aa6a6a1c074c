//! Streaming multipart intake for the upload handler

use axum::extract::Multipart;
use pinrelay_core::constants::FILE_FIELD_NAME;
use pinrelay_core::AppError;
use pinrelay_storage::{StagedFile, UploadStaging};

use crate::error::HttpAppError;

/// The single file part of an upload, already written to the staging directory.
#[derive(Debug)]
pub struct IncomingFile {
    pub staged: StagedFile,
    pub original_filename: String,
    pub content_type: Option<String>,
}

/// Stream the `file` part of `multipart` into `staging`.
///
/// Returns `Ok(None)` when the form carries no file part. Fields with other names and
/// plain text fields named `file` are skipped. At most `max_size` bytes are accepted;
/// on any error the partially written file is removed when it is dropped.
pub async fn stage_multipart_file(
    mut multipart: Multipart,
    staging: &UploadStaging,
    max_size: usize,
) -> Result<Option<IncomingFile>, HttpAppError> {
    let mut incoming: Option<IncomingFile> = None;

    while let Some(mut field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD_NAME) {
            continue;
        }

        let Some(original_filename) = field.file_name().map(str::to_string) else {
            continue;
        };

        if incoming.is_some() {
            return Err(AppError::InvalidInput(
                "Multiple file fields are not allowed; send exactly one field named 'file'"
                    .to_string(),
            )
            .into());
        }

        let content_type = field.content_type().map(str::to_string);
        let mut staged = staging.create(&original_filename).await?;

        while let Some(chunk) = field.chunk().await? {
            validate_file_size(staged.len() + chunk.len() as u64, max_size)?;
            staged.write_chunk(&chunk).await?;
        }
        staged.finish().await?;

        incoming = Some(IncomingFile {
            staged,
            original_filename,
            content_type,
        });
    }

    Ok(incoming)
}

/// Validate file size
pub fn validate_file_size(file_size: u64, max_size: usize) -> Result<(), AppError> {
    if file_size > max_size as u64 {
        return Err(AppError::PayloadTooLarge(format!(
            "File size exceeds maximum allowed size of {} MB",
            max_size / 1024 / 1024
        )));
    }
    Ok(())
}
