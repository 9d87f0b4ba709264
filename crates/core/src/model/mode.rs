use serde::{Deserialize, Serialize};
use std::fmt;

/// How questions are answered during a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Free-text answer.
    #[default]
    Subject,
    /// Pick one of a small set of choices.
    Multiple,
}

impl Mode {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Subject => "subject",
            Mode::Multiple => "multiple",
        }
    }

    #[must_use]
    pub fn has_choices(&self) -> bool {
        matches!(self, Mode::Multiple)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
