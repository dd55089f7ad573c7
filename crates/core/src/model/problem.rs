use thiserror::Error;

use crate::model::{Answer, Operator};

/// Largest operand a problem may use. Operands range over `0..=MAX_OPERAND`.
pub const MAX_OPERAND: u8 = 10;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProblemError {
    #[error("operand {value} is outside 0..={MAX_OPERAND}")]
    OperandOutOfRange { value: u8 },
    #[error("division by zero")]
    ZeroDivisor,
}

/// One arithmetic problem plus its precomputed answer.
///
/// Only `submitted_answer` changes after construction; a new problem replaces
/// the old one wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    first: u8,
    operator: Operator,
    second: u8,
    correct_answer: Answer,
    submitted_answer: Option<Answer>,
}

impl Problem {
    /// Builds a problem from explicit operands.
    ///
    /// # Errors
    ///
    /// Returns `ProblemError::OperandOutOfRange` if an operand exceeds `MAX_OPERAND`.
    /// Returns `ProblemError::ZeroDivisor` for a division by zero.
    pub fn from_parts(first: u8, operator: Operator, second: u8) -> Result<Self, ProblemError> {
        for value in [first, second] {
            if value > MAX_OPERAND {
                return Err(ProblemError::OperandOutOfRange { value });
            }
        }
        if operator == Operator::Divide && second == 0 {
            return Err(ProblemError::ZeroDivisor);
        }
        Ok(Self::assemble(first, operator, second))
    }

    /// Builds a problem whose operands are already known to be valid.
    pub(crate) fn assemble(first: u8, operator: Operator, second: u8) -> Self {
        debug_assert!(!(operator == Operator::Divide && second == 0));
        let raw = operator.apply(first.into(), second.into());
        Self {
            first,
            operator,
            second,
            correct_answer: Answer::from_decimal(raw),
            submitted_answer: None,
        }
    }

    #[must_use]
    pub fn first(&self) -> u8 {
        self.first
    }

    #[must_use]
    pub fn operator(&self) -> Operator {
        self.operator
    }

    #[must_use]
    pub fn second(&self) -> u8 {
        self.second
    }

    /// Text shown to the player, e.g. `"3 + 4 ="`.
    #[must_use]
    pub fn expression(&self) -> String {
        format!("{} {} {} =", self.first, self.operator.symbol(), self.second)
    }

    #[must_use]
    pub fn correct_answer(&self) -> Answer {
        self.correct_answer
    }

    #[must_use]
    pub fn submitted_answer(&self) -> Option<Answer> {
        self.submitted_answer
    }

    /// Records the most recent submitted answer (`None` when it was not numeric).
    pub fn attach_submission(&mut self, answer: Option<Answer>) {
        self.submitted_answer = answer;
    }
}
