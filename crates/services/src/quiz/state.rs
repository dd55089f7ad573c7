use quiz_core::model::{Feedback, Problem};

/// Coarse state of the quiz, derived from `SessionState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    NotStarted,
    /// Started, no banner showing.
    Active,
    /// Banner showing for a non-correct result, or for a correct one whose
    /// auto-advance already ran.
    Feedback(Feedback),
    /// A correct answer was submitted; the next problem is on its way.
    CorrectPendingAdvance,
}

/// Everything a quiz widget instance knows. Lives for one mount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub(super) current_problem: Problem,
    pub(super) response_text: String,
    pub(super) feedback_kind: Option<Feedback>,
    pub(super) feedback_visible: bool,
    pub(super) correct_answer_pending: bool,
    pub(super) game_started: bool,
}

impl SessionState {
    pub(super) fn new(problem: Problem) -> Self {
        Self {
            current_problem: problem,
            response_text: String::new(),
            feedback_kind: None,
            feedback_visible: false,
            correct_answer_pending: false,
            game_started: false,
        }
    }

    #[must_use]
    pub fn current_problem(&self) -> &Problem {
        &self.current_problem
    }

    #[must_use]
    pub fn response_text(&self) -> &str {
        &self.response_text
    }

    /// Result of the latest submit on the current problem, if any.
    #[must_use]
    pub fn feedback_kind(&self) -> Option<Feedback> {
        self.feedback_kind
    }

    #[must_use]
    pub fn feedback_visible(&self) -> bool {
        self.feedback_visible
    }

    #[must_use]
    pub fn correct_answer_pending(&self) -> bool {
        self.correct_answer_pending
    }

    #[must_use]
    pub fn game_started(&self) -> bool {
        self.game_started
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        if !self.game_started {
            return QuizPhase::NotStarted;
        }
        if self.correct_answer_pending {
            return QuizPhase::CorrectPendingAdvance;
        }
        match (self.feedback_visible, self.feedback_kind) {
            (true, Some(kind)) => QuizPhase::Feedback(kind),
            _ => QuizPhase::Active,
        }
    }
}
