//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted by `QuizSession` transitions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("quiz has not been started")]
    NotStarted,
}
