use std::sync::Arc;

use services::QuizService;

pub trait UiApp: Send + Sync {
    fn quiz(&self) -> Arc<QuizService>;

    /// Where images are read from, shown on the start screen.
    fn images_location(&self) -> String;
}

#[derive(Clone)]
pub struct AppContext {
    quiz: Arc<QuizService>,
    images_location: String,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            quiz: app.quiz(),
            images_location: app.images_location(),
        }
    }

    #[must_use]
    pub fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }

    #[must_use]
    pub fn images_location(&self) -> &str {
        &self.images_location
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
