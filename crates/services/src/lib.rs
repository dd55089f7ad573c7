#![forbid(unsafe_code)]

pub mod error;
pub mod quiz;

pub use quiz_core::{Clock, QuizSettings};

pub use error::SessionError;
pub use quiz::{
    NewProblemOutcome, QuizPhase, QuizSession, ScheduledTimer, SessionSnapshot, SessionState,
    SubmitOutcome, TimerKind, TimerOutcome, TimerSlots, TimerTicket,
};
