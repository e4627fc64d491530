//! Local JSON file loader, for offline use and fixtures.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use stok_core::{Dataset, DatasetLoader, FetchError};

/// Loads the dataset from a JSON export on disk.
#[derive(Debug, Clone)]
pub struct FileLoader {
    path: PathBuf,
}

impl FileLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DatasetLoader for FileLoader {
    async fn load(&self) -> Result<Dataset, FetchError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| FetchError::Io {
                path: self.path.clone(),
                source,
            })?;
        crate::decode_dataset(&bytes)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
