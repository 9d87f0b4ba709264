use serde::{Deserialize, Serialize};
use std::fmt;

use crate::answer;

/// File extensions (lowercase, without the dot) accepted as quiz images.
pub const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];

/// Identifier of a quiz image: its filename inside the image directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageId(String);

impl ImageId {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Final extension segment without the dot, as written.
    #[must_use]
    pub fn extension(&self) -> Option<&str> {
        self.0.rfind('.').map(|idx| &self.0[idx + 1..])
    }

    /// Returns true if the extension is in [`IMAGE_EXTENSIONS`], ignoring case.
    #[must_use]
    pub fn has_image_extension(&self) -> bool {
        self.extension().is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(ext))
        })
    }

    /// MIME type for the image bytes, derived from the extension.
    #[must_use]
    pub fn mime_type(&self) -> &'static str {
        match self.extension().map(str::to_ascii_lowercase).as_deref() {
            Some("jpg" | "jpeg") => "image/jpeg",
            Some("png") => "image/png",
            Some("gif") => "image/gif",
            Some("webp") => "image/webp",
            _ => "application/octet-stream",
        }
    }

    /// The ground-truth answer for this image.
    #[must_use]
    pub fn canonical_answer(&self) -> &str {
        answer::canonical_answer(self)
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One entry of a non-recursive directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedEntry {
    pub name: String,
    pub is_dir: bool,
}

impl ListedEntry {
    #[must_use]
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
        }
    }

    #[must_use]
    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
        }
    }
}
