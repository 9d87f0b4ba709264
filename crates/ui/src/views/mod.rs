mod mode_select;
mod quiz;
mod result;
mod state;

#[cfg(test)]
mod view_smoke;

pub use mode_select::ModeSelectView;
pub use quiz::{FeedbackBanner, ProgressHeader, QuizView};
pub use result::{ResultView, ScoreCard, WrongReview};
pub use state::{ViewError, ViewState, view_state_from_resource};
