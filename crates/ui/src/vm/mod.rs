mod image_src;
mod quiz_vm;
mod result_vm;
mod session_vm;

pub use image_src::{data_url, load_image_src};
pub use quiz_vm::{
    FeedbackVm, NextStep, QuestionVm, QuizScreen, advance_quiz, load_quiz_screen, submit_answer,
};
pub use result_vm::{ResultVm, WrongItemVm, load_result};
pub use session_vm::{ResumeVm, load_resume, mode_label, restart_quiz, start_quiz};
