use async_trait::async_trait;
use quiz_core::model::{ImageId, ListedEntry};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;

/// Errors surfaced by image sources.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("cannot read image directory {path}: {message}")]
    Unreadable { path: String, message: String },

    #[error("image not found: {0}")]
    NotFound(String),

    #[error("io error: {0}")]
    Io(String),
}

/// Where quiz images come from.
///
/// Listing is non-recursive and reports directories so callers can skip them.
#[async_trait]
pub trait ImageSource: Send + Sync {
    /// Human-readable location, used in logs and error messages.
    fn location(&self) -> String;

    /// List the entries directly inside the source.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Unreadable` if the source cannot be listed.
    async fn list_entries(&self) -> Result<Vec<ListedEntry>, StorageError>;

    /// Read the bytes of one image by name.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if no file has that name, or
    /// `StorageError::Io` on read failures.
    async fn read_image(&self, image: &ImageId) -> Result<Vec<u8>, StorageError>;
}

#[derive(Debug, Default)]
struct InMemoryState {
    files: BTreeMap<String, Vec<u8>>,
    dirs: Vec<String>,
    unreadable: bool,
}

/// Simple in-memory image source for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryImageSource {
    state: Arc<Mutex<InMemoryState>>,
}

impl InMemoryImageSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Source holding the given filenames, each with placeholder bytes.
    #[must_use]
    pub fn with_files<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let files = names
            .into_iter()
            .map(|name| {
                let name = name.into();
                let bytes = name.as_bytes().to_vec();
                (name, bytes)
            })
            .collect();
        Self {
            state: Arc::new(Mutex::new(InMemoryState {
                files,
                ..InMemoryState::default()
            })),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, InMemoryState>, StorageError> {
        self.state.lock().map_err(|e| StorageError::Io(e.to_string()))
    }

    /// # Errors
    ///
    /// Returns `StorageError::Io` if the state lock is poisoned.
    pub fn insert_file(
        &self,
        name: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Result<(), StorageError> {
        self.lock()?.files.insert(name.into(), bytes);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `StorageError::Io` if the state lock is poisoned.
    pub fn insert_dir(&self, name: impl Into<String>) -> Result<(), StorageError> {
        self.lock()?.dirs.push(name.into());
        Ok(())
    }

    /// Make every subsequent listing fail, as a missing directory would.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the state lock is poisoned.
    pub fn set_unreadable(&self, unreadable: bool) -> Result<(), StorageError> {
        self.lock()?.unreadable = unreadable;
        Ok(())
    }
}

#[async_trait]
impl ImageSource for InMemoryImageSource {
    fn location(&self) -> String {
        "memory".to_string()
    }

    async fn list_entries(&self) -> Result<Vec<ListedEntry>, StorageError> {
        let guard = self.lock()?;
        if guard.unreadable {
            return Err(StorageError::Unreadable {
                path: self.location(),
                message: "source marked unreadable".to_string(),
            });
        }
        let mut entries: Vec<ListedEntry> = guard.files.keys().map(ListedEntry::file).collect();
        entries.extend(guard.dirs.iter().map(ListedEntry::dir));
        Ok(entries)
    }

    async fn read_image(&self, image: &ImageId) -> Result<Vec<u8>, StorageError> {
        let guard = self.lock()?;
        guard
            .files
            .get(image.as_str())
            .cloned()
            .ok_or_else(|| StorageError::NotFound(image.to_string()))
    }
}
