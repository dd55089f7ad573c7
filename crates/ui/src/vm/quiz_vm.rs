use chrono::{DateTime, Utc};
use services::{
    NewProblemOutcome, QuizPhase, QuizSession, ScheduledTimer, SessionSnapshot, SessionState,
    SubmitOutcome, TimerOutcome, TimerTicket,
};
use tracing::{debug, warn};

/// User events the quiz view dispatches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Start,
    EditResponse(String),
    Submit,
    NewProblem,
}

/// Everything the quiz markup needs, read off the session state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizRender {
    pub show_title: bool,
    pub game_started: bool,
    pub expression: Option<String>,
    pub response_text: String,
    pub input_class: String,
    pub banner_class: String,
    pub banner_message: Option<&'static str>,
    pub controls_disabled: bool,
}

/// Pure projection of the session state to the quiz markup.
#[must_use]
pub fn project(state: &SessionState) -> QuizRender {
    let started = state.game_started();
    let feedback = state.feedback_kind();

    let mut input_class = if started {
        String::new()
    } else {
        "hidden ".to_string()
    };
    if feedback.is_some_and(|kind| kind.is_correct()) {
        input_class.push_str("input-accepted");
    }
    let input_class = input_class.trim_end().to_string();

    let banner_class = match feedback {
        Some(kind) => format!("message-container {}", kind.css_class()),
        None => "message-container".to_string(),
    };
    let banner_message = feedback
        .filter(|_| state.feedback_visible())
        .map(|kind| kind.message());

    QuizRender {
        show_title: !started,
        game_started: started,
        expression: started.then(|| state.current_problem().expression()),
        response_text: state.response_text().to_string(),
        input_class,
        banner_class,
        banner_message,
        controls_disabled: state.correct_answer_pending(),
    }
}

pub struct QuizVm {
    session: QuizSession,
}

impl QuizVm {
    #[must_use]
    pub fn new(session: QuizSession) -> Self {
        Self { session }
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        self.session.state()
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.session.phase()
    }

    #[must_use]
    pub fn render(&self) -> QuizRender {
        project(self.session.state())
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.session.snapshot()
    }

    #[must_use]
    pub fn scheduled_timers(&self) -> Vec<ScheduledTimer> {
        self.session.scheduled_timers()
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        self.session.clock().now()
    }

    pub fn apply(&mut self, intent: QuizIntent) {
        match intent {
            QuizIntent::Start => self.session.start(),
            QuizIntent::EditResponse(text) => self.session.edit_response(text),
            QuizIntent::Submit => match self.session.submit() {
                Ok(SubmitOutcome::Evaluated(feedback)) => {
                    debug!(?feedback, "submit evaluated");
                }
                Ok(SubmitOutcome::IgnoredPendingAdvance) => {}
                Err(err) => warn!(%err, "submit rejected"),
            },
            QuizIntent::NewProblem => match self.session.request_new_problem() {
                Ok(NewProblemOutcome::Replaced | NewProblemOutcome::IgnoredPendingAdvance) => {}
                Err(err) => warn!(%err, "new problem rejected"),
            },
        }
    }

    pub fn fire(&mut self, ticket: TimerTicket) -> TimerOutcome {
        self.session.fire(ticket)
    }

    pub fn cancel_timers(&mut self) {
        self.session.cancel_timers();
    }
}
