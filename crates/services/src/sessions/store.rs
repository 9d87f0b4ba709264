use std::collections::HashMap;

use quiz_core::model::{QuizSession, SessionId};

/// A session plus per-position presentation state.
#[derive(Debug)]
pub struct LiveSession {
    pub id: SessionId,
    pub session: QuizSession,
    /// Choices for the current position, kept stable across repeated reads.
    pub choices: Option<Vec<String>>,
}

impl LiveSession {
    #[must_use]
    pub fn new(session: QuizSession) -> Self {
        Self {
            id: SessionId::new(),
            session,
            choices: None,
        }
    }
}

/// Sessions keyed by id, with one of them marked active.
///
/// The quiz is single-tenant: activating a new session discards the previous
/// active one.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: HashMap<SessionId, LiveSession>,
    active: Option<SessionId>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `live` and make it the active session, dropping the old one.
    pub fn activate(&mut self, live: LiveSession) -> SessionId {
        if let Some(previous) = self.active.take() {
            self.sessions.remove(&previous);
        }
        let id = live.id;
        self.sessions.insert(id, live);
        self.active = Some(id);
        id
    }

    #[must_use]
    pub fn active(&self) -> Option<&LiveSession> {
        self.active.and_then(|id| self.sessions.get(&id))
    }

    pub fn active_mut(&mut self) -> Option<&mut LiveSession> {
        let id = self.active?;
        self.sessions.get_mut(&id)
    }

    #[must_use]
    pub(crate) fn len(&self) -> usize {
        self.sessions.len()
    }
}
