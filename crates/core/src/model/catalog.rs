use rand::Rng;
use rand::seq::SliceRandom;

use super::image::{ImageId, ListedEntry};

/// Default number of images kept per session.
pub const DEFAULT_MAX_IMAGES: usize = 30;

/// Ordered, capped list of images for one session.
///
/// The order is fixed once built; a session walks it front to back.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImageCatalog {
    images: Vec<ImageId>,
}

impl ImageCatalog {
    /// Build a catalog from a directory listing.
    ///
    /// Directories and files outside the image extension allow-list are
    /// dropped. The survivors are shuffled uniformly with `rng` and then
    /// truncated to `max_images`.
    pub fn from_listing<R>(
        entries: impl IntoIterator<Item = ListedEntry>,
        max_images: usize,
        rng: &mut R,
    ) -> Self
    where
        R: Rng + ?Sized,
    {
        let mut images: Vec<ImageId> = entries
            .into_iter()
            .filter(|entry| !entry.is_dir)
            .map(|entry| ImageId::new(entry.name))
            .filter(ImageId::has_image_extension)
            .collect();

        images.as_mut_slice().shuffle(rng);
        images.truncate(max_images);

        Self { images }
    }

    /// Wrap an already-ordered list of images.
    #[must_use]
    pub fn from_ordered(images: Vec<ImageId>) -> Self {
        Self { images }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ImageId> {
        self.images.get(index)
    }

    #[must_use]
    pub fn contains(&self, image: &ImageId) -> bool {
        self.images.contains(image)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[ImageId] {
        &self.images
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageId> {
        self.images.iter()
    }
}
