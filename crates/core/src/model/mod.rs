mod catalog;
mod ids;
mod image;
mod mode;
mod result;
mod session;

pub use catalog::{DEFAULT_MAX_IMAGES, ImageCatalog};
pub use ids::SessionId;
pub use image::{IMAGE_EXTENSIONS, ImageId, ListedEntry};
pub use mode::Mode;
pub use result::{QuizResult, summarize};
pub use session::{AnswerOutcome, QuizSession, QuizStateError, SessionPhase, WrongItem};
