use std::fmt;

use quiz_core::model::{ImageId, Mode, QuizResult, SessionId, SessionPhase};

use super::progress::StatusView;
use super::store::LiveSession;

/// What a front end needs after starting or moving through a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionView {
    pub session_id: SessionId,
    pub mode: Mode,
    pub status: StatusView,
    pub is_done: bool,
}

impl From<&LiveSession> for SessionView {
    fn from(live: &LiveSession) -> Self {
        Self {
            session_id: live.id,
            mode: live.session.mode(),
            status: StatusView::from(&live.session),
            is_done: live.session.is_done(),
        }
    }
}

/// The question at the current position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    pub image_id: ImageId,
    /// Zero-based index into the catalog.
    pub position: usize,
    pub total: usize,
    pub score: usize,
    pub wrong_count: usize,
    pub progress_percent: u32,
    /// The current position already has an outcome; the next step is advance.
    pub answered: bool,
    /// Present only in multiple-choice mode.
    pub choices: Option<Vec<String>>,
}

impl QuestionView {
    /// One-based question number for display.
    #[must_use]
    pub fn number(&self) -> usize {
        self.position + 1
    }

    pub(crate) fn from_live(live: &LiveSession, image_id: ImageId) -> Self {
        let session = &live.session;
        Self {
            image_id,
            position: session.current(),
            total: session.total(),
            score: session.score(),
            wrong_count: session.wrong().len(),
            progress_percent: session.progress_percent(),
            answered: session.phase() == SessionPhase::Answered,
            choices: live.choices.clone(),
        }
    }
}

/// Judgement of a submitted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub image_id: ImageId,
    pub is_correct: bool,
    pub canonical_answer: String,
    pub user_input: String,
    pub status: StatusView,
}

/// Where an advance landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvanceOutcome {
    Next(SessionView),
    Finished(QuizResult),
}

impl AdvanceOutcome {
    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self, AdvanceOutcome::Finished(_))
    }
}

/// Image bytes ready for display.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageAsset {
    pub image_id: ImageId,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl fmt::Debug for ImageAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageAsset")
            .field("image_id", &self.image_id)
            .field("mime", &self.mime)
            .field("bytes_len", &self.bytes.len())
            .finish()
    }
}
