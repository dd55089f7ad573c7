use std::sync::Arc;

use quiz_core::{Clock, QuizSettings};
use services::QuizSession;

/// What the composition root hands the UI.
pub trait UiApp: Send + Sync {
    fn settings(&self) -> QuizSettings;
    fn clock(&self) -> Clock;
    /// Fixed problem sequence; `None` draws from the OS.
    fn seed(&self) -> Option<u64>;
    fn debug_panel(&self) -> bool;
}

#[derive(Clone)]
pub struct AppContext {
    settings: QuizSettings,
    clock: Clock,
    seed: Option<u64>,
    debug_panel: bool,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            settings: app.settings(),
            clock: app.clock(),
            seed: app.seed(),
            debug_panel: app.debug_panel(),
        }
    }

    #[must_use]
    pub fn settings(&self) -> QuizSettings {
        self.settings
    }

    #[must_use]
    pub fn debug_panel(&self) -> bool {
        self.debug_panel
    }

    /// Mounts a fresh quiz session with the configured settings.
    #[must_use]
    pub fn new_session(&self) -> QuizSession {
        match self.seed {
            Some(seed) => QuizSession::seeded(self.settings, self.clock, seed),
            None => QuizSession::new(self.settings, self.clock),
        }
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
