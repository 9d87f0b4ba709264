#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod sessions;

pub use quiz_core::Entropy;
pub use sessions as session;

pub use catalog::{CatalogLoader, QuizLimits};
pub use error::QuizError;

pub use sessions::{
    AdvanceOutcome, AnswerFeedback, ImageAsset, QuestionView, QuizService, SessionView,
    StatusView,
};
