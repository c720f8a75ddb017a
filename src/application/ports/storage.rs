use crate::application::ApplicationResult;
use crate::domain::media::StoredFileName;
use async_trait::async_trait;
use bytes::Bytes;
use std::path::PathBuf;

/// A file received from a multipart upload.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub original_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

#[async_trait]
pub trait FileStorage: Send + Sync {
    /// Writes `bytes` under a freshly generated name with the given extension.
    async fn store(&self, extension: &str, bytes: &[u8]) -> ApplicationResult<StoredFileName>;

    /// Deletes a stored file. Removing a file that is already gone succeeds.
    async fn remove(&self, name: &StoredFileName) -> ApplicationResult<()>;

    fn public_url(&self, name: &StoredFileName) -> String;

    fn path_of(&self, name: &StoredFileName) -> PathBuf;
}
