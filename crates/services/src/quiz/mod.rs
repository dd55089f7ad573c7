mod session;
mod snapshot;
mod state;
mod timers;

// Public API of the quiz subsystem.
pub use crate::error::SessionError;
pub use session::{NewProblemOutcome, QuizSession, SubmitOutcome, TimerOutcome};
pub use snapshot::SessionSnapshot;
pub use state::{QuizPhase, SessionState};
pub use timers::{ScheduledTimer, TimerKind, TimerSlots, TimerTicket};
