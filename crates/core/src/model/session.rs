use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::answer;

use super::catalog::ImageCatalog;
use super::image::ImageId;
use super::mode::Mode;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizStateError {
    #[error("no images available for a quiz")]
    EmptyCatalog,

    #[error("the current question was already answered")]
    AlreadyAnswered,

    #[error("the current question has not been answered yet")]
    NotAnswered,

    #[error("quiz already completed")]
    Completed,
}

/// Record of one incorrect answer. Never changed once logged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrongItem {
    pub image_id: ImageId,
    pub answer: String,
    pub user_input: String,
}

/// Outcome of answering the current question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub image_id: ImageId,
    pub is_correct: bool,
    pub canonical_answer: String,
    pub user_input: String,
}

/// Where a session stands between operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// The current question waits for an answer.
    Awaiting,
    /// The current question has an outcome; the caller should advance.
    Answered,
    /// Every question has been consumed.
    Done,
}

/// One quiz run over a fixed catalog.
///
/// Every judged position has exactly one outcome: `score + wrong.len()` equals
/// [`QuizSession::judged`]. Between an answer and the following advance the
/// position at `current` is judged but not yet stepped past.
pub struct QuizSession {
    catalog: ImageCatalog,
    mode: Mode,
    current: usize,
    score: usize,
    wrong: Vec<WrongItem>,
    answered: Option<bool>,
}

impl QuizSession {
    /// Create a session positioned at the first image.
    ///
    /// # Errors
    ///
    /// Returns `QuizStateError::EmptyCatalog` if the catalog has no images.
    pub fn new(catalog: ImageCatalog, mode: Mode) -> Result<Self, QuizStateError> {
        if catalog.is_empty() {
            return Err(QuizStateError::EmptyCatalog);
        }

        Ok(Self {
            catalog,
            mode,
            current: 0,
            score: 0,
            wrong: Vec::new(),
            answered: None,
        })
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn catalog(&self) -> &ImageCatalog {
        &self.catalog
    }

    /// Index of the current position, `0..=total`.
    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.catalog.len()
    }

    /// Correct answers recorded so far.
    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    /// Incorrect answers recorded so far, in the order given.
    #[must_use]
    pub fn wrong(&self) -> &[WrongItem] {
        &self.wrong
    }

    /// Number of positions with a recorded outcome.
    ///
    /// Equals `current`, plus one while the current position is answered but
    /// not yet stepped past.
    #[must_use]
    pub fn judged(&self) -> usize {
        self.current + usize::from(self.answered.is_some())
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.current >= self.catalog.len()
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        if self.is_done() {
            SessionPhase::Done
        } else if self.answered.is_some() {
            SessionPhase::Answered
        } else {
            SessionPhase::Awaiting
        }
    }

    #[must_use]
    pub fn current_image(&self) -> Option<&ImageId> {
        self.catalog.get(self.current)
    }

    /// Percentage of positions already stepped past, rounded down.
    #[must_use]
    pub fn progress_percent(&self) -> u32 {
        percent(self.current, self.total())
    }

    /// Judge `user_input` against the current image.
    ///
    /// Does not move to the next position; call [`QuizSession::advance`].
    ///
    /// # Errors
    ///
    /// Returns `QuizStateError::Completed` once every position is consumed and
    /// `QuizStateError::AlreadyAnswered` if the current position has an outcome.
    pub fn answer(&mut self, user_input: &str) -> Result<AnswerOutcome, QuizStateError> {
        if self.answered.is_some() {
            return Err(QuizStateError::AlreadyAnswered);
        }
        let image_id = self
            .current_image()
            .cloned()
            .ok_or(QuizStateError::Completed)?;

        let is_correct = answer::evaluate(&image_id, user_input);
        let canonical_answer = image_id.canonical_answer().to_string();

        if is_correct {
            self.score += 1;
        } else {
            self.wrong.push(WrongItem {
                image_id: image_id.clone(),
                answer: canonical_answer.clone(),
                user_input: user_input.to_string(),
            });
        }
        self.answered = Some(is_correct);

        Ok(AnswerOutcome {
            image_id,
            is_correct,
            canonical_answer,
            user_input: user_input.to_string(),
        })
    }

    /// Step past the answered position.
    ///
    /// Returns the new phase: `Awaiting` for the next question or `Done`.
    ///
    /// # Errors
    ///
    /// Returns `QuizStateError::Completed` if the session is finished and
    /// `QuizStateError::NotAnswered` if the current position has no outcome.
    pub fn advance(&mut self) -> Result<SessionPhase, QuizStateError> {
        if self.is_done() {
            return Err(QuizStateError::Completed);
        }
        if self.answered.is_none() {
            return Err(QuizStateError::NotAnswered);
        }

        self.answered = None;
        self.current += 1;
        Ok(self.phase())
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("mode", &self.mode)
            .field("catalog_len", &self.catalog.len())
            .field("current", &self.current)
            .field("score", &self.score)
            .field("wrong_len", &self.wrong.len())
            .field("answered", &self.answered)
            .finish_non_exhaustive()
    }
}

pub(crate) fn percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    let value = part.saturating_mul(100) / whole;
    u32::try_from(value).unwrap_or(u32::MAX)
}
