use quiz_core::model::QuizStateError;
use services::{AnswerFeedback, QuestionView, QuizError, QuizService};

use super::image_src::load_image_src;
use crate::views::ViewError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub image_id: String,
    pub image_src: Option<String>,
    pub number: usize,
    pub total: usize,
    pub score: usize,
    pub wrong_count: usize,
    pub progress_percent: u32,
    pub answered: bool,
    pub choices: Option<Vec<String>>,
}

impl QuestionVm {
    #[must_use]
    pub fn from_view(view: &QuestionView, image_src: Option<String>) -> Self {
        Self {
            image_id: view.image_id.to_string(),
            image_src,
            number: view.number(),
            total: view.total,
            score: view.score,
            wrong_count: view.wrong_count,
            progress_percent: view.progress_percent,
            answered: view.answered,
            choices: view.choices.clone(),
        }
    }

    #[must_use]
    pub fn position_label(&self) -> String {
        format!("{} / {}", self.number, self.total)
    }

    #[must_use]
    pub fn progress_style(&self) -> String {
        format!("width: {}%;", self.progress_percent.min(100))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizScreen {
    Question(QuestionVm),
    Finished,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub is_correct: bool,
    pub canonical_answer: String,
    pub user_input: String,
}

impl FeedbackVm {
    #[must_use]
    pub fn headline(&self) -> String {
        if self.is_correct {
            format!("Correct! It is \"{}\".", self.canonical_answer)
        } else {
            format!("Wrong. The answer is \"{}\".", self.canonical_answer)
        }
    }

    #[must_use]
    pub fn class(&self) -> &'static str {
        if self.is_correct {
            "result-box correct"
        } else {
            "result-box wrong"
        }
    }
}

impl From<&AnswerFeedback> for FeedbackVm {
    fn from(feedback: &AnswerFeedback) -> Self {
        Self {
            is_correct: feedback.is_correct,
            canonical_answer: feedback.canonical_answer.clone(),
            user_input: feedback.user_input.clone(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NextStep {
    Question,
    Finished,
}

/// # Errors
///
/// Returns the `ViewError` matching the service failure.
pub async fn load_quiz_screen(quiz: &QuizService) -> Result<QuizScreen, ViewError> {
    let view = match quiz.current_question().await {
        Ok(view) => view,
        Err(QuizError::InvalidState(QuizStateError::Completed)) => return Ok(QuizScreen::Finished),
        Err(err) => return Err(ViewError::from_quiz(&err)),
    };
    let image_src = load_image_src(quiz, &view.image_id).await;
    Ok(QuizScreen::Question(QuestionVm::from_view(&view, image_src)))
}

/// # Errors
///
/// Returns the `ViewError` matching the service failure.
pub async fn submit_answer(quiz: &QuizService, input: &str) -> Result<FeedbackVm, ViewError> {
    quiz.submit_answer(input)
        .await
        .map(|feedback| FeedbackVm::from(&feedback))
        .map_err(|err| ViewError::from_quiz(&err))
}

/// # Errors
///
/// Returns the `ViewError` matching the service failure.
pub async fn advance_quiz(quiz: &QuizService) -> Result<NextStep, ViewError> {
    quiz.advance()
        .await
        .map(|outcome| {
            if outcome.is_finished() {
                NextStep::Finished
            } else {
                NextStep::Question
            }
        })
        .map_err(|err| ViewError::from_quiz(&err))
}
