use chrono::Duration;
use thiserror::Error;

/// Default time the feedback banner stays visible after a submit.
pub const DEFAULT_FEEDBACK_CLEAR_MS: u32 = 2_000;
/// Default pause between a correct answer and the next problem.
pub const DEFAULT_AUTO_ADVANCE_MS: u32 = 2_000;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("feedback clear delay must be greater than zero")]
    ZeroFeedbackDelay,
    #[error("auto-advance delay must be greater than zero")]
    ZeroAdvanceDelay,
}

/// Timing knobs for a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizSettings {
    feedback_clear_ms: u32,
    auto_advance_ms: u32,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            feedback_clear_ms: DEFAULT_FEEDBACK_CLEAR_MS,
            auto_advance_ms: DEFAULT_AUTO_ADVANCE_MS,
        }
    }
}

impl QuizSettings {
    /// # Errors
    ///
    /// Returns `SettingsError::ZeroFeedbackDelay` or `SettingsError::ZeroAdvanceDelay`
    /// when either delay is zero.
    pub fn new(feedback_clear_ms: u32, auto_advance_ms: u32) -> Result<Self, SettingsError> {
        if feedback_clear_ms == 0 {
            return Err(SettingsError::ZeroFeedbackDelay);
        }
        if auto_advance_ms == 0 {
            return Err(SettingsError::ZeroAdvanceDelay);
        }
        Ok(Self {
            feedback_clear_ms,
            auto_advance_ms,
        })
    }

    #[must_use]
    pub fn feedback_clear_ms(&self) -> u32 {
        self.feedback_clear_ms
    }

    #[must_use]
    pub fn auto_advance_ms(&self) -> u32 {
        self.auto_advance_ms
    }

    #[must_use]
    pub fn feedback_clear_delay(&self) -> Duration {
        Duration::milliseconds(i64::from(self.feedback_clear_ms))
    }

    #[must_use]
    pub fn auto_advance_delay(&self) -> Duration {
        Duration::milliseconds(i64::from(self.auto_advance_ms))
    }
}
