use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use quiz_core::model::Feedback;
use quiz_core::{Clock, ProblemGenerator, QuizSettings, evaluate_response};

use super::snapshot::SessionSnapshot;
use super::state::{QuizPhase, SessionState};
use super::timers::{ScheduledTimer, TimerKind, TimerSlots, TimerTicket};
use crate::error::SessionError;

/// Result of a submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Evaluated(Feedback),
    /// A correct answer is already waiting for auto-advance.
    IgnoredPendingAdvance,
}

/// Result of a manual new-problem request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewProblemOutcome {
    Replaced,
    IgnoredPendingAdvance,
}

/// Effect of delivering a timer ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerOutcome {
    FeedbackCleared,
    Advanced,
    /// The ticket was superseded or cancelled; nothing changed.
    Stale,
}

/// The quiz state machine: owns the session state and the timers guarding it.
///
/// Transitions run to completion synchronously. Delayed effects are exposed as
/// `ScheduledTimer`s; whoever drives the session sleeps until a deadline and then
/// hands the ticket back through `fire`, or calls `tick` to fire everything due.
pub struct QuizSession {
    state: SessionState,
    timers: TimerSlots,
    settings: QuizSettings,
    clock: Clock,
    generator: ProblemGenerator,
    rng: StdRng,
}

impl QuizSession {
    /// Mounts a session with an OS-seeded random source.
    #[must_use]
    pub fn new(settings: QuizSettings, clock: Clock) -> Self {
        Self::with_rng(settings, clock, StdRng::from_os_rng())
    }

    /// Mounts a session whose problem sequence is fixed by `seed`.
    #[must_use]
    pub fn seeded(settings: QuizSettings, clock: Clock, seed: u64) -> Self {
        Self::with_rng(settings, clock, StdRng::seed_from_u64(seed))
    }

    fn with_rng(settings: QuizSettings, clock: Clock, mut rng: StdRng) -> Self {
        let generator = ProblemGenerator::new();
        let problem = generator.generate(&mut rng);
        debug!(expression = %problem.expression(), "quiz session mounted");
        Self {
            state: SessionState::new(problem),
            timers: TimerSlots::default(),
            settings,
            clock,
            generator,
            rng,
        }
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.state.phase()
    }

    #[must_use]
    pub fn settings(&self) -> QuizSettings {
        self.settings
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// Lets callers move a fixed clock forward before calling `tick`.
    pub fn clock_mut(&mut self) -> &mut Clock {
        &mut self.clock
    }

    /// Shows the quiz. Starting twice is a no-op.
    pub fn start(&mut self) {
        if self.state.game_started {
            return;
        }
        self.state.game_started = true;
        debug!("quiz started");
    }

    /// Stores the response text verbatim. Nothing else changes until submit.
    pub fn edit_response(&mut self, text: impl Into<String>) {
        self.state.response_text = text.into();
    }

    /// Evaluates the current response and arms the delayed effects.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotStarted` before `start`.
    pub fn submit(&mut self) -> Result<SubmitOutcome, SessionError> {
        if !self.state.game_started {
            return Err(SessionError::NotStarted);
        }
        if self.state.correct_answer_pending {
            debug!("submit ignored while auto-advance is pending");
            return Ok(SubmitOutcome::IgnoredPendingAdvance);
        }

        let evaluation = evaluate_response(&self.state.current_problem, &self.state.response_text);
        self.state
            .current_problem
            .attach_submission(evaluation.candidate);
        self.state.feedback_kind = Some(evaluation.feedback);
        self.state.feedback_visible = true;
        debug!(
            expression = %self.state.current_problem.expression(),
            response = %self.state.response_text,
            feedback = ?evaluation.feedback,
            "answer evaluated"
        );

        let now = self.clock.now();
        self.arm(TimerKind::ClearFeedback, now + self.settings.feedback_clear_delay());
        if evaluation.feedback.is_correct() {
            self.state.correct_answer_pending = true;
            self.arm(TimerKind::AutoAdvance, now + self.settings.auto_advance_delay());
        }

        Ok(SubmitOutcome::Evaluated(evaluation.feedback))
    }

    /// Replaces the problem unless a correct answer is waiting to auto-advance.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotStarted` before `start`.
    pub fn request_new_problem(&mut self) -> Result<NewProblemOutcome, SessionError> {
        if !self.state.game_started {
            return Err(SessionError::NotStarted);
        }
        if self.state.correct_answer_pending {
            debug!("new problem ignored while auto-advance is pending");
            return Ok(NewProblemOutcome::IgnoredPendingAdvance);
        }
        self.replace_problem();
        Ok(NewProblemOutcome::Replaced)
    }

    /// Delivers a timer ticket. Superseded or cancelled tickets are no-ops.
    pub fn fire(&mut self, ticket: TimerTicket) -> TimerOutcome {
        if !self.timers.take_if_current(ticket) {
            debug!(
                timer = ticket.kind().label(),
                generation = ticket.generation(),
                "stale timer ignored"
            );
            return TimerOutcome::Stale;
        }
        debug!(timer = ticket.kind().label(), "timer fired");
        match ticket.kind() {
            TimerKind::ClearFeedback => {
                self.state.feedback_visible = false;
                TimerOutcome::FeedbackCleared
            }
            TimerKind::AutoAdvance => {
                self.state.correct_answer_pending = false;
                self.replace_problem();
                TimerOutcome::Advanced
            }
        }
    }

    /// Fires every timer whose deadline has passed on the session clock.
    pub fn tick(&mut self) -> Vec<TimerOutcome> {
        let now = self.clock.now();
        self.timers
            .due(now)
            .into_iter()
            .map(|ticket| self.fire(ticket))
            .collect()
    }

    /// Currently armed timers, earliest deadline first.
    #[must_use]
    pub fn scheduled_timers(&self) -> Vec<ScheduledTimer> {
        self.timers.scheduled()
    }

    /// Disarms both timers, e.g. when the widget unmounts.
    pub fn cancel_timers(&mut self) {
        self.timers.cancel_all();
    }

    /// Typed diagnostic dump stamped with the session clock.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::capture(&self.state, self.clock.now())
    }

    fn arm(&mut self, kind: TimerKind, due_at: chrono::DateTime<chrono::Utc>) {
        let timer = self.timers.arm(kind, due_at);
        debug!(
            timer = kind.label(),
            generation = timer.ticket.generation(),
            due_at = %timer.due_at,
            "timer armed"
        );
    }

    fn replace_problem(&mut self) {
        self.state.feedback_kind = None;
        self.state.response_text.clear();
        self.state.current_problem = self.generator.generate(&mut self.rng);
        self.state.feedback_visible = false;
        self.timers.cancel(TimerKind::ClearFeedback);
        debug!(expression = %self.state.current_problem.expression(), "new problem");
    }
}
