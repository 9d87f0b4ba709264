use rand::rngs::StdRng;
use std::fmt;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use quiz_core::Entropy;
use quiz_core::choices::generate_choices;
use quiz_core::model::{ImageId, Mode, QuizResult, QuizSession, QuizStateError, summarize};
use storage::{ImageSource, StorageError};

use super::progress::StatusView;
use super::store::{LiveSession, SessionStore};
use super::view::{AdvanceOutcome, AnswerFeedback, ImageAsset, QuestionView, SessionView};
use crate::catalog::{CatalogLoader, QuizLimits};
use crate::error::QuizError;

struct QuizState {
    rng: StdRng,
    store: SessionStore,
}

/// Serialized entry point for every quiz operation.
///
/// All reads and writes go through one async lock, so each operation sees and
/// leaves the session in a consistent state. Failed operations change nothing.
pub struct QuizService {
    loader: CatalogLoader,
    limits: QuizLimits,
    entropy: Entropy,
    state: Mutex<QuizState>,
}

impl QuizService {
    #[must_use]
    pub fn new(source: Arc<dyn ImageSource>, limits: QuizLimits, entropy: Entropy) -> Self {
        Self {
            loader: CatalogLoader::new(source, limits.max_images()),
            limits,
            entropy,
            state: Mutex::new(QuizState {
                rng: entropy.rng(),
                store: SessionStore::new(),
            }),
        }
    }

    #[must_use]
    pub fn location(&self) -> String {
        self.loader.source().location()
    }

    /// Check that the image source yields a usable catalog, without starting
    /// a session. Returns the catalog size.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::DirectoryUnreadable` or `QuizError::EmptyCatalog`.
    pub async fn preflight(&self) -> Result<usize, QuizError> {
        let mut state = self.state.lock().await;
        let catalog = self.loader.load(&mut state.rng).await?;
        if catalog.is_empty() {
            return Err(QuizError::EmptyCatalog);
        }
        Ok(catalog.len())
    }

    /// Start a fresh session in `mode`, replacing any live one.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::DirectoryUnreadable` or `QuizError::EmptyCatalog`;
    /// the previous session stays untouched in that case.
    pub async fn start_session(&self, mode: Mode) -> Result<SessionView, QuizError> {
        let mut state = self.state.lock().await;
        let view = self.begin(&mut state, mode).await?;
        info!(session_id = %view.session_id, %mode, total = view.status.total, "quiz session started");
        Ok(view)
    }

    /// Reload the catalog and start over in the mode of the live session.
    ///
    /// Without a live session this starts a `Subject` session.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::DirectoryUnreadable` or `QuizError::EmptyCatalog`.
    pub async fn restart_session(&self) -> Result<SessionView, QuizError> {
        let mut state = self.state.lock().await;
        let mode = state
            .store
            .active()
            .map_or_else(Mode::default, |live| live.session.mode());
        let view = self.begin(&mut state, mode).await?;
        info!(session_id = %view.session_id, %mode, total = view.status.total, "quiz session restarted");
        Ok(view)
    }

    async fn begin(&self, state: &mut QuizState, mode: Mode) -> Result<SessionView, QuizError> {
        let catalog = match self.loader.load(&mut state.rng).await {
            Ok(catalog) => catalog,
            Err(err) => {
                warn!(location = %self.location(), error = %err, "could not load image catalog");
                return Err(err);
            }
        };
        let session = QuizSession::new(catalog, mode).inspect_err(|_| {
            warn!(location = %self.location(), "image directory has no quiz images");
        })?;

        let mut live = LiveSession::new(session);
        live.choices = self.choices_for(&live.session, &mut state.rng);
        let view = SessionView::from(&live);
        state.store.activate(live);
        debug!(stored = state.store.len(), "session store updated");
        Ok(view)
    }

    fn choices_for(&self, session: &QuizSession, rng: &mut StdRng) -> Option<Vec<String>> {
        if !session.mode().has_choices() {
            return None;
        }
        generate_choices(
            session.catalog(),
            session.current(),
            self.limits.max_choices(),
            rng,
        )
    }

    /// The question at the current position.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NoActiveSession` without a session and
    /// `QuizError::InvalidState` once the session is done.
    pub async fn current_question(&self) -> Result<QuestionView, QuizError> {
        let mut guard = self.state.lock().await;
        let QuizState { rng, store } = &mut *guard;
        let live = store.active_mut().ok_or(QuizError::NoActiveSession)?;
        let image_id = live
            .session
            .current_image()
            .cloned()
            .ok_or(QuizError::InvalidState(QuizStateError::Completed))?;

        if live.choices.is_none() {
            live.choices = self.choices_for(&live.session, rng);
        }
        Ok(QuestionView::from_live(live, image_id))
    }

    /// Judge `user_input` against the current image.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NoActiveSession` without a session and
    /// `QuizError::InvalidState` if the position is already answered or the
    /// session is done.
    pub async fn submit_answer(&self, user_input: &str) -> Result<AnswerFeedback, QuizError> {
        let mut state = self.state.lock().await;
        let live = state.store.active_mut().ok_or(QuizError::NoActiveSession)?;
        let outcome = live.session.answer(user_input).inspect_err(|err| {
            warn!(session_id = %live.id, error = %err, "answer rejected");
        })?;

        debug!(
            session_id = %live.id,
            image = %outcome.image_id,
            correct = outcome.is_correct,
            "answer recorded"
        );

        Ok(AnswerFeedback {
            image_id: outcome.image_id,
            is_correct: outcome.is_correct,
            canonical_answer: outcome.canonical_answer,
            user_input: outcome.user_input,
            status: StatusView::from(&live.session),
        })
    }

    /// Move past the answered position.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NoActiveSession` without a session and
    /// `QuizError::InvalidState` if the position has no answer yet or the
    /// session is done.
    pub async fn advance(&self) -> Result<AdvanceOutcome, QuizError> {
        let mut guard = self.state.lock().await;
        let QuizState { rng, store } = &mut *guard;
        let live = store.active_mut().ok_or(QuizError::NoActiveSession)?;
        live.session.advance().inspect_err(|err| {
            warn!(session_id = %live.id, error = %err, "advance rejected");
        })?;

        if live.session.is_done() {
            live.choices = None;
            let result = summarize(&live.session);
            info!(
                session_id = %live.id,
                score = result.score,
                total = result.total,
                rate = result.rate_percent,
                "quiz session finished"
            );
            return Ok(AdvanceOutcome::Finished(result));
        }

        live.choices = self.choices_for(&live.session, rng);
        debug!(session_id = %live.id, position = live.session.current(), "advanced");
        Ok(AdvanceOutcome::Next(SessionView::from(&*live)))
    }

    /// Score, rate and the wrong-answer review of the live session.
    ///
    /// Available at any point; before the end it reflects answers so far.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NoActiveSession` without a session.
    pub async fn get_result(&self) -> Result<QuizResult, QuizError> {
        let state = self.state.lock().await;
        let live = state.store.active().ok_or(QuizError::NoActiveSession)?;
        Ok(summarize(&live.session))
    }

    /// Counters of the live session.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NoActiveSession` without a session.
    pub async fn get_status(&self) -> Result<StatusView, QuizError> {
        let state = self.state.lock().await;
        let live = state.store.active().ok_or(QuizError::NoActiveSession)?;
        Ok(StatusView::from(&live.session))
    }

    /// Summary view of the live session, if any.
    pub async fn session(&self) -> Option<SessionView> {
        let state = self.state.lock().await;
        state.store.active().map(SessionView::from)
    }

    /// Mode of the live session, if any.
    pub async fn mode(&self) -> Option<Mode> {
        let state = self.state.lock().await;
        state.store.active().map(|live| live.session.mode())
    }

    /// Bytes of an image that belongs to the live catalog.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NoActiveSession` without a session,
    /// `QuizError::ImageNotFound` for images outside the catalog, or
    /// `QuizError::Storage` if the bytes cannot be read.
    pub async fn image(&self, image_id: &ImageId) -> Result<ImageAsset, QuizError> {
        {
            let state = self.state.lock().await;
            let live = state.store.active().ok_or(QuizError::NoActiveSession)?;
            if !live.session.catalog().contains(image_id) {
                return Err(QuizError::ImageNotFound(image_id.to_string()));
            }
        }

        // Reading bytes does not touch session state; do it outside the lock.
        let bytes = self
            .loader
            .source()
            .read_image(image_id)
            .await
            .map_err(|err| match err {
                StorageError::NotFound(name) => QuizError::ImageNotFound(name),
                other => QuizError::Storage(other),
            })?;

        Ok(ImageAsset {
            image_id: image_id.clone(),
            mime: image_id.mime_type(),
            bytes,
        })
    }
}

impl fmt::Debug for QuizService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizService")
            .field("location", &self.location())
            .field("limits", &self.limits)
            .field("entropy", &self.entropy)
            .finish_non_exhaustive()
    }
}
