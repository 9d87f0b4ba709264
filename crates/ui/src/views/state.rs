use dioxus::prelude::*;
use services::QuizError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    DirectoryUnreadable,
    EmptyCatalog,
    NoSession,
    InvalidState,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn from_quiz(err: &QuizError) -> Self {
        match err {
            QuizError::DirectoryUnreadable(_) => Self::DirectoryUnreadable,
            QuizError::EmptyCatalog => Self::EmptyCatalog,
            QuizError::NoActiveSession => Self::NoSession,
            QuizError::InvalidState(_) => Self::InvalidState,
            _ => Self::Unknown,
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::DirectoryUnreadable => "The image folder could not be read.",
            Self::EmptyCatalog => "The image folder has no images to quiz on.",
            Self::NoSession => "No quiz is running. Pick a mode to start one.",
            Self::InvalidState => "That step is not available right now.",
            Self::Unknown => "Something went wrong. Please try again.",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}
