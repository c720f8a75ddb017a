//! Upload directory on the local filesystem.
use crate::application::{
    ApplicationResult,
    error::ApplicationError,
    ports::storage::FileStorage,
};
use crate::domain::media::StoredFileName;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct LocalFileStorage {
    root: PathBuf,
    public_prefix: String,
}

impl LocalFileStorage {
    /// `public_prefix` is the URL path the directory is served under, e.g. `/uploads`.
    pub fn new(root: impl Into<PathBuf>, public_prefix: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_prefix: public_prefix.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    async fn ensure_root(&self) -> ApplicationResult<()> {
        fs::create_dir_all(&self.root).await.map_err(|err| {
            ApplicationError::infrastructure(format!(
                "failed to create upload directory {}: {err}",
                self.root.display()
            ))
        })
    }
}

#[async_trait]
impl FileStorage for LocalFileStorage {
    async fn store(&self, extension: &str, bytes: &[u8]) -> ApplicationResult<StoredFileName> {
        self.ensure_root().await?;

        let name = StoredFileName::new(format!("{}.{extension}", Uuid::new_v4().simple()))?;
        let path = self.path_of(&name);
        fs::write(&path, bytes).await.map_err(|err| {
            ApplicationError::infrastructure(format!("failed to write {}: {err}", path.display()))
        })?;

        Ok(name)
    }

    async fn remove(&self, name: &StoredFileName) -> ApplicationResult<()> {
        match fs::remove_file(self.path_of(name)).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(ApplicationError::infrastructure(format!(
                "failed to remove {name}: {err}"
            ))),
        }
    }

    fn public_url(&self, name: &StoredFileName) -> String {
        format!("{}/{}", self.public_prefix, name)
    }

    fn path_of(&self, name: &StoredFileName) -> PathBuf {
        self.root.join(name.as_str())
    }
}
