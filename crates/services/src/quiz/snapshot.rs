use std::fmt;

use chrono::{DateTime, Utc};

use quiz_core::model::{Answer, Feedback};

use super::state::SessionState;

/// Point-in-time copy of every `SessionState` field, for developer inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub taken_at: DateTime<Utc>,
    pub expression: String,
    pub correct_answer: Answer,
    pub submitted_answer: Option<Answer>,
    pub response_text: String,
    pub feedback: Option<Feedback>,
    pub feedback_visible: bool,
    pub correct_answer_pending: bool,
    pub game_started: bool,
}

impl SessionSnapshot {
    #[must_use]
    pub fn capture(state: &SessionState, taken_at: DateTime<Utc>) -> Self {
        let problem = state.current_problem();
        Self {
            taken_at,
            expression: problem.expression(),
            correct_answer: problem.correct_answer(),
            submitted_answer: problem.submitted_answer(),
            response_text: state.response_text().to_string(),
            feedback: state.feedback_kind(),
            feedback_visible: state.feedback_visible(),
            correct_answer_pending: state.correct_answer_pending(),
            game_started: state.game_started(),
        }
    }
}

impl fmt::Display for SessionSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let submitted = self
            .submitted_answer
            .map_or_else(|| "none".to_string(), |answer| format!("\"{answer}\""));
        let feedback = self
            .feedback
            .map_or_else(|| "none".to_string(), |kind| format!("\"{}\"", kind.message()));

        writeln!(f, "States as of {}", self.taken_at.format("%H:%M:%S UTC"))?;
        writeln!(
            f,
            "problem = {{expression: \"{}\", answer: \"{}\", submitted: {submitted}}}",
            self.expression, self.correct_answer
        )?;
        writeln!(f, "response = {:?}", self.response_text)?;
        writeln!(f, "feedback = {feedback}")?;
        writeln!(f, "feedback_visible = {}", self.feedback_visible)?;
        writeln!(f, "correct_answer_pending = {}", self.correct_answer_pending)?;
        write!(f, "game_started = {}", self.game_started)
    }
}
