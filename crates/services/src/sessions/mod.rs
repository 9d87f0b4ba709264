mod progress;
mod store;
mod view;
mod workflow;

// Public API of the session subsystem.
pub use crate::error::QuizError;
pub use progress::StatusView;
pub use store::{LiveSession, SessionStore};
pub use view::{AdvanceOutcome, AnswerFeedback, ImageAsset, QuestionView, SessionView};
pub use workflow::QuizService;
