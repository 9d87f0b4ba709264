use quiz_core::model::Mode;
use services::QuizService;

use crate::views::ViewError;

#[must_use]
pub fn mode_label(mode: Mode) -> &'static str {
    match mode {
        Mode::Subject => "Subject",
        Mode::Multiple => "Multiple choice",
    }
}

/// A live, unfinished quiz the player can return to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResumeVm {
    pub mode: Mode,
    pub number: usize,
    pub total: usize,
}

impl ResumeVm {
    #[must_use]
    pub fn label(&self) -> String {
        format!(
            "Continue {} quiz ({} / {})",
            mode_label(self.mode),
            self.number,
            self.total
        )
    }
}

pub async fn load_resume(quiz: &QuizService) -> Option<ResumeVm> {
    let view = quiz.session().await?;
    if view.is_done {
        return None;
    }
    Some(ResumeVm {
        mode: view.mode,
        number: view.status.position + 1,
        total: view.status.total,
    })
}

/// # Errors
///
/// Returns the `ViewError` matching the service failure.
pub async fn start_quiz(quiz: &QuizService, mode: Mode) -> Result<(), ViewError> {
    quiz.start_session(mode)
        .await
        .map(|_| ())
        .map_err(|err| ViewError::from_quiz(&err))
}

/// # Errors
///
/// Returns the `ViewError` matching the service failure.
pub async fn restart_quiz(quiz: &QuizService) -> Result<(), ViewError> {
    quiz.restart_session()
        .await
        .map(|_| ())
        .map_err(|err| ViewError::from_quiz(&err))
}
