//! Canonical answers and answer checking.
//!
//! The answer for an image is its filename stem. Both functions here are pure
//! so they can be exercised without touching a file system.

use crate::model::ImageId;

/// Returns the filename with its final extension segment removed.
///
/// No case or whitespace normalization is applied: `"Golden Gate.JPG"`
/// yields `"Golden Gate"`.
#[must_use]
pub fn canonical_answer(image: &ImageId) -> &str {
    let name = image.as_str();
    match name.rfind('.') {
        Some(idx) => &name[..idx],
        None => name,
    }
}

/// Judges a submitted answer against the canonical answer for `image`.
///
/// Both sides are trimmed and compared case-insensitively. There is no partial
/// credit: anything but an exact match after trimming is wrong.
#[must_use]
pub fn evaluate(image: &ImageId, user_input: &str) -> bool {
    let expected = canonical_answer(image).trim();
    let given = user_input.trim();
    expected
        .chars()
        .flat_map(char::to_lowercase)
        .eq(given.chars().flat_map(char::to_lowercase))
}
