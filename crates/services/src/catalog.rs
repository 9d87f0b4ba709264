use rand::rngs::StdRng;
use std::sync::Arc;

use quiz_core::choices::DEFAULT_MAX_CHOICES;
use quiz_core::model::{DEFAULT_MAX_IMAGES, ImageCatalog};
use storage::ImageSource;

use crate::error::QuizError;

/// Size limits applied to every session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizLimits {
    max_images: usize,
    max_choices: usize,
}

impl QuizLimits {
    /// Both limits are raised to at least one.
    #[must_use]
    pub fn new(max_images: usize, max_choices: usize) -> Self {
        Self {
            max_images: max_images.max(1),
            max_choices: max_choices.max(1),
        }
    }

    #[must_use]
    pub fn max_images(&self) -> usize {
        self.max_images
    }

    #[must_use]
    pub fn max_choices(&self) -> usize {
        self.max_choices
    }
}

impl Default for QuizLimits {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_IMAGES, DEFAULT_MAX_CHOICES)
    }
}

/// Builds shuffled, capped catalogs from an image source.
#[derive(Clone)]
pub struct CatalogLoader {
    source: Arc<dyn ImageSource>,
    max_images: usize,
}

impl CatalogLoader {
    #[must_use]
    pub fn new(source: Arc<dyn ImageSource>, max_images: usize) -> Self {
        Self { source, max_images }
    }

    #[must_use]
    pub fn source(&self) -> &Arc<dyn ImageSource> {
        &self.source
    }

    /// List the source and build a fresh catalog.
    ///
    /// A readable source without images yields an empty catalog; callers
    /// decide whether that is an error.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::DirectoryUnreadable` if the source cannot be listed.
    pub async fn load(&self, rng: &mut StdRng) -> Result<ImageCatalog, QuizError> {
        let entries = self
            .source
            .list_entries()
            .await
            .map_err(QuizError::DirectoryUnreadable)?;
        Ok(ImageCatalog::from_listing(entries, self.max_images, rng))
    }
}
