//! Random problem generation.

use std::ops::RangeInclusive;

use rand::Rng;

use crate::model::{MAX_OPERAND, Operator, Problem};

/// Range both operands are drawn from.
pub const OPERAND_RANGE: RangeInclusive<u8> = 0..=MAX_OPERAND;
/// Range a divisor is redrawn from when zero comes up for a division.
pub const DIVISOR_REDRAW_RANGE: RangeInclusive<u8> = 1..=9;

/// Draws uniformly distributed arithmetic problems.
///
/// The random source is passed in so callers decide between an OS-seeded and a
/// seeded generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProblemGenerator;

impl ProblemGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Draws `first`, the operator, then `second`. A zero divisor is redrawn from
    /// `DIVISOR_REDRAW_RANGE`, so generation never fails.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Problem {
        let first = rng.random_range(OPERAND_RANGE);
        let operator = Operator::ALL[rng.random_range(0..Operator::ALL.len())];
        let mut second = rng.random_range(OPERAND_RANGE);
        if operator == Operator::Divide && second == 0 {
            second = rng.random_range(DIVISOR_REDRAW_RANGE);
        }
        Problem::assemble(first, operator, second)
    }
}
