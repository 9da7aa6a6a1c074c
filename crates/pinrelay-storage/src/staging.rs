use crate::error::{StagingError, StagingResult};
use crate::filename::sanitize_filename;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

/// Staging directory for inbound uploads
#[derive(Clone, Debug)]
pub struct UploadStaging {
    dir: PathBuf,
}

impl UploadStaging {
    /// Create a new UploadStaging instance
    ///
    /// # Arguments
    /// * `dir` - Directory for staged files (e.g., "uploads"), created if missing
    pub async fn new(dir: impl Into<PathBuf>) -> StagingResult<Self> {
        let dir = dir.into();
        Self::ensure_dir(&dir).await?;
        Ok(UploadStaging { dir })
    }

    /// Open a new, empty staged file for `original_filename`.
    pub async fn create(&self, original_filename: &str) -> StagingResult<StagedFile> {
        // The directory may have been removed by an operator since start-up.
        Self::ensure_dir(&self.dir).await?;

        let name = format!("{}-{}", Uuid::new_v4(), sanitize_filename(original_filename));
        let path = self.dir.join(name);

        let file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
            .map_err(|source| StagingError::Write {
                path: path.display().to_string(),
                source,
            })?;

        tracing::debug!(path = %path.display(), "Staged file created");

        Ok(StagedFile {
            path,
            file: Some(file),
            len: 0,
            removed: false,
        })
    }

    async fn ensure_dir(dir: &Path) -> StagingResult<()> {
        fs::create_dir_all(dir)
            .await
            .map_err(|source| StagingError::Directory {
                path: dir.display().to_string(),
                source,
            })
    }
}

/// A file in the staging directory.
///
/// Removal is explicit through [`StagedFile::remove`]. If the value is dropped
/// without that (request cancelled, early return, panic) the file is removed
/// synchronously on drop.
#[derive(Debug)]
pub struct StagedFile {
    path: PathBuf,
    file: Option<fs::File>,
    len: u64,
    removed: bool,
}

impl StagedFile {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Bytes written so far
    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub async fn write_chunk(&mut self, chunk: &[u8]) -> StagingResult<()> {
        let path = &self.path;
        let file = self
            .file
            .as_mut()
            .ok_or_else(|| StagingError::Closed(path.display().to_string()))?;

        file.write_all(chunk)
            .await
            .map_err(|source| StagingError::Write {
                path: path.display().to_string(),
                source,
            })?;

        self.len += chunk.len() as u64;
        Ok(())
    }

    /// Flush and close the write handle. Further writes fail with `Closed`.
    pub async fn finish(&mut self) -> StagingResult<()> {
        if let Some(mut file) = self.file.take() {
            let path = self.path.display().to_string();
            file.flush().await.map_err(|source| StagingError::Write {
                path: path.clone(),
                source,
            })?;
            file.sync_all()
                .await
                .map_err(|source| StagingError::Write { path, source })?;
        }
        Ok(())
    }

    /// Delete the staged file. A file that is already gone counts as removed.
    pub async fn remove(mut self) -> StagingResult<()> {
        self.file.take();

        match fs::remove_file(&self.path).await {
            Ok(()) => {
                self.removed = true;
                tracing::debug!(path = %self.path.display(), "Staged file removed");
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                self.removed = true;
                Ok(())
            }
            Err(source) => Err(StagingError::Remove {
                path: self.path.display().to_string(),
                source,
            }),
        }
    }
}

impl Drop for StagedFile {
    fn drop(&mut self) {
        if self.removed {
            return;
        }
        self.file.take();

        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), "Staged file removed on drop");
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {}
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "Failed to remove staged file on drop"
                );
            }
        }
    }
}
