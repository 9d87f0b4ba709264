use async_trait::async_trait;
use quiz_core::model::{ImageId, ListedEntry};
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::source::{ImageSource, StorageError};

/// Image source backed by one directory on disk.
#[derive(Debug, Clone)]
pub struct DirectoryImageSource {
    root: PathBuf,
}

impl DirectoryImageSource {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn unreadable(&self, err: &std::io::Error) -> StorageError {
        StorageError::Unreadable {
            path: self.root.display().to_string(),
            message: err.to_string(),
        }
    }

    // Only plain names that live directly in `root` may be read.
    fn resolve(&self, image: &ImageId) -> Option<PathBuf> {
        let name = image.as_str();
        let plain = !name.is_empty()
            && name != "."
            && name != ".."
            && !name.contains(['/', '\\']);
        plain.then(|| self.root.join(name))
    }
}

#[async_trait]
impl ImageSource for DirectoryImageSource {
    fn location(&self) -> String {
        self.root.display().to_string()
    }

    async fn list_entries(&self) -> Result<Vec<ListedEntry>, StorageError> {
        let mut dir = tokio::fs::read_dir(&self.root)
            .await
            .map_err(|e| self.unreadable(&e))?;

        let mut entries = Vec::new();
        while let Some(entry) = dir.next_entry().await.map_err(|e| self.unreadable(&e))? {
            // Names that are not valid UTF-8 cannot be answered; skip them.
            let Ok(name) = entry.file_name().into_string() else {
                continue;
            };
            let is_dir = entry
                .file_type()
                .await
                .map_err(|e| self.unreadable(&e))?
                .is_dir();
            entries.push(ListedEntry { name, is_dir });
        }
        Ok(entries)
    }

    async fn read_image(&self, image: &ImageId) -> Result<Vec<u8>, StorageError> {
        let path = self
            .resolve(image)
            .ok_or_else(|| StorageError::NotFound(image.to_string()))?;
        tokio::fs::read(&path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => StorageError::NotFound(image.to_string()),
            _ => StorageError::Io(format!("{}: {e}", path.display())),
        })
    }
}
