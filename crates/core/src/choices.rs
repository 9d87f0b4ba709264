//! Answer options for multiple-choice questions.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::model::ImageCatalog;

/// Default number of options offered per question.
pub const DEFAULT_MAX_CHOICES: usize = 4;

/// Build the options for the question at `index`.
///
/// The correct answer is always present. Distractors are the canonical answers
/// of other catalog images, picked in random order and deduplicated by string,
/// so a catalog with fewer than `max_choices` distinct stems yields a shorter
/// list. The final order is shuffled.
///
/// Returns `None` if `index` is outside the catalog.
pub fn generate_choices<R>(
    catalog: &ImageCatalog,
    index: usize,
    max_choices: usize,
    rng: &mut R,
) -> Option<Vec<String>>
where
    R: Rng + ?Sized,
{
    let correct = catalog.get(index)?.canonical_answer();
    let limit = max_choices.max(1);

    let mut choices = vec![correct.to_string()];

    let mut pool: Vec<usize> = (0..catalog.len()).filter(|&pos| pos != index).collect();
    pool.as_mut_slice().shuffle(rng);

    for pos in pool {
        if choices.len() >= limit {
            break;
        }
        let Some(image) = catalog.get(pos) else {
            continue;
        };
        let candidate = image.canonical_answer();
        if !choices.iter().any(|existing| existing == candidate) {
            choices.push(candidate.to_string());
        }
    }

    choices.as_mut_slice().shuffle(rng);
    Some(choices)
}
