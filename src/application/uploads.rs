//! File side effects around the persistence of photos and avatars.
use std::sync::Arc;

use crate::application::{
    dto::StoredFileView,
    error::{ApplicationError, ApplicationResult},
    ports::storage::{FileStorage, UploadedFile},
};
use crate::domain::errors::DomainError;
use crate::domain::media::{StoredFileName, validate_image};

pub struct UploadListener {
    storage: Arc<dyn FileStorage>,
}

impl UploadListener {
    pub fn new(storage: Arc<dyn FileStorage>) -> Self {
        Self { storage }
    }

    /// Validates the upload and writes it to storage before the row is saved.
    pub async fn pre_persist(&self, upload: &UploadedFile) -> ApplicationResult<StoredFileName> {
        let format = validate_image(upload.content_type.as_deref(), &upload.bytes).map_err(
            |err| match err {
                DomainError::Validation(msg) => ApplicationError::invalid_field("file", msg),
                other => ApplicationError::from(other),
            },
        )?;
        let stored = self.storage.store(format.extension(), &upload.bytes).await?;
        tracing::debug!(
            file = %stored,
            original = upload.original_name.as_deref().unwrap_or("-"),
            "stored upload"
        );
        Ok(stored)
    }

    /// Rehydrates a stored name into its public location.
    pub fn post_load(&self, name: &StoredFileName) -> StoredFileView {
        StoredFileView {
            file: name.to_string(),
            url: self.storage.public_url(name),
        }
    }

    /// Deletes the file of a removed (or replaced) record. Failures are logged only,
    /// since the database change has already happened.
    pub async fn post_remove(&self, name: &StoredFileName) {
        if let Err(err) = self.storage.remove(name).await {
            tracing::warn!(file = %name, error = %err, "failed to remove stored file");
        }
    }
}
