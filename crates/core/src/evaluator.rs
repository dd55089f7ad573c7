//! Classifies a submitted answer against the current problem.

use std::cmp::Ordering;

use crate::model::{Answer, Feedback, Problem};

/// A parsed response together with its classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub candidate: Option<Answer>,
    pub feedback: Feedback,
}

/// Compares `candidate` with the problem's answer at two decimal places.
///
/// A missing candidate (the response was not numeric) is `Feedback::Invalid`.
#[must_use]
pub fn evaluate(problem: &Problem, candidate: Option<Answer>) -> Feedback {
    let Some(candidate) = candidate else {
        return Feedback::Invalid;
    };
    match candidate.cmp(&problem.correct_answer()) {
        Ordering::Less => Feedback::TooLow,
        Ordering::Greater => Feedback::TooHigh,
        Ordering::Equal => Feedback::Correct,
    }
}

/// Parses raw response text and evaluates it.
#[must_use]
pub fn evaluate_response(problem: &Problem, raw: &str) -> Evaluation {
    let candidate = Answer::parse(raw).ok();
    Evaluation {
        candidate,
        feedback: evaluate(problem, candidate),
    }
}
