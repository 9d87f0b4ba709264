use quiz_core::model::{Mode, QuizResult, WrongItem};
use services::QuizService;

use super::image_src::load_image_src;
use super::session_vm::mode_label;
use crate::views::ViewError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WrongItemVm {
    pub image_id: String,
    pub image_src: Option<String>,
    pub answer: String,
    pub user_input: String,
}

impl WrongItemVm {
    #[must_use]
    pub fn user_input_label(&self) -> String {
        if self.user_input.trim().is_empty() {
            "(no answer)".to_string()
        } else {
            self.user_input.clone()
        }
    }
}

impl From<&WrongItem> for WrongItemVm {
    fn from(item: &WrongItem) -> Self {
        Self {
            image_id: item.image_id.to_string(),
            image_src: None,
            answer: item.answer.clone(),
            user_input: item.user_input.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultVm {
    pub score: usize,
    pub total: usize,
    pub rate_percent: u32,
    /// Every question answered, all of them correctly.
    pub is_perfect: bool,
    pub mode: Option<Mode>,
    pub wrong_items: Vec<WrongItemVm>,
}

impl ResultVm {
    #[must_use]
    pub fn score_label(&self) -> String {
        format!("{} / {}", self.score, self.total)
    }

    #[must_use]
    pub fn rate_label(&self) -> String {
        format!("{}%", self.rate_percent)
    }

    #[must_use]
    pub fn mode_label(&self) -> Option<&'static str> {
        self.mode.map(mode_label)
    }
}

impl From<&QuizResult> for ResultVm {
    fn from(result: &QuizResult) -> Self {
        Self {
            score: result.score,
            total: result.total,
            rate_percent: result.rate_percent,
            is_perfect: result.is_perfect(),
            mode: None,
            wrong_items: result.wrong_items.iter().map(WrongItemVm::from).collect(),
        }
    }
}

/// Load the result with thumbnails for every missed image.
///
/// # Errors
///
/// Returns the `ViewError` matching the service failure.
pub async fn load_result(quiz: &QuizService) -> Result<ResultVm, ViewError> {
    let result = quiz
        .get_result()
        .await
        .map_err(|err| ViewError::from_quiz(&err))?;

    let mut vm = ResultVm::from(&result);
    vm.mode = quiz.mode().await;
    for (vm_item, item) in vm.wrong_items.iter_mut().zip(&result.wrong_items) {
        vm_item.image_src = load_image_src(quiz, &item.image_id).await;
    }
    Ok(vm)
}
