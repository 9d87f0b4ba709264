use serde::Serialize;

use quiz_core::model::QuizSession;

/// Side-effect-free snapshot of session counters.
///
/// Serializes as `{"current", "total", "score", "wrong"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusView {
    #[serde(rename = "current")]
    pub position: usize,
    pub total: usize,
    pub score: usize,
    #[serde(rename = "wrong")]
    pub wrong_count: usize,
}

impl From<&QuizSession> for StatusView {
    fn from(session: &QuizSession) -> Self {
        Self {
            position: session.current(),
            total: session.total(),
            score: session.score(),
            wrong_count: session.wrong().len(),
        }
    }
}
