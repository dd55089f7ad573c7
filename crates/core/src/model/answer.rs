use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Number of fractional digits every answer is rounded and compared at.
pub const ANSWER_SCALE: u32 = 2;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnswerError {
    #[error("response is empty")]
    Empty,
    #[error("response is not a number: {raw:?}")]
    NotNumeric { raw: String },
}

/// A numeric answer held as a fixed-point decimal with exactly two fractional digits.
///
/// Both the correct answer of a problem and a parsed response use this type, so
/// comparisons never mix representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Answer(Decimal);

impl Answer {
    /// Rounds `value` to two places (midpoint away from zero).
    #[must_use]
    pub fn from_decimal(value: Decimal) -> Self {
        let mut rounded =
            value.round_dp_with_strategy(ANSWER_SCALE, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(ANSWER_SCALE);
        // -0.001 rounds to a signed zero; display it as "0.00".
        if rounded.is_zero() {
            rounded.set_sign_positive(true);
        }
        Self(rounded)
    }

    #[must_use]
    pub fn from_integer(value: i64) -> Self {
        Self::from_decimal(Decimal::from(value))
    }

    /// Parses a typed response.
    ///
    /// Surrounding whitespace is ignored and scientific notation is accepted.
    /// Magnitudes beyond `Decimal`'s range saturate at `±10^26`; magnitudes below
    /// `1e-10` read as zero.
    ///
    /// # Errors
    ///
    /// Returns `AnswerError::Empty` for blank input and `AnswerError::NotNumeric`
    /// for anything that is not a plain decimal literal (`inf`, `NaN`, `1_000`, ...).
    pub fn parse(raw: &str) -> Result<Self, AnswerError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AnswerError::Empty);
        }
        let not_numeric = || AnswerError::NotNumeric {
            raw: raw.to_string(),
        };
        if !is_decimal_literal(trimmed) {
            return Err(not_numeric());
        }
        Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .ok()
            .or_else(|| trimmed.parse::<f64>().ok().and_then(saturating_decimal))
            .map(|value| Self::from_decimal(clamp_magnitude(value)))
            .ok_or_else(not_numeric)
    }

    #[must_use]
    pub fn value(&self) -> Decimal {
        self.0
    }
}

/// Largest magnitude a parsed response keeps; anything beyond saturates here.
const SATURATION_EXPONENT: u32 = 26;
const SATURATION_LIMIT: f64 = 1e26;
/// Below this a response is treated as zero.
const ZERO_THRESHOLD: f64 = 1e-10;

/// `[+-]digits[.digits][(e|E)[+-]digits]`, with at least one mantissa digit.
fn is_decimal_literal(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut pos = 0;
    let digits_from = |pos: &mut usize| {
        let start = *pos;
        while bytes.get(*pos).is_some_and(u8::is_ascii_digit) {
            *pos += 1;
        }
        *pos - start
    };

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }
    let mut mantissa_digits = digits_from(&mut pos);
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        mantissa_digits += digits_from(&mut pos);
    }
    if mantissa_digits == 0 {
        return false;
    }
    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        pos += 1;
        if matches!(bytes.get(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        if digits_from(&mut pos) == 0 {
            return false;
        }
    }
    pos == bytes.len()
}

fn saturation_limit() -> Decimal {
    Decimal::from_i128_with_scale(10_i128.pow(SATURATION_EXPONENT), 0)
}

/// Keeps room for two fractional digits.
fn clamp_magnitude(value: Decimal) -> Decimal {
    let limit = saturation_limit();
    value.clamp(-limit, limit)
}

/// Converts a value `Decimal` cannot parse exactly, clamping out-of-range magnitudes.
fn saturating_decimal(value: f64) -> Option<Decimal> {
    if value.is_nan() {
        return None;
    }
    if value.abs() >= SATURATION_LIMIT {
        let limit = saturation_limit();
        return Some(if value.is_sign_negative() {
            -limit
        } else {
            limit
        });
    }
    if value.abs() < ZERO_THRESHOLD {
        return Some(Decimal::ZERO);
    }
    Decimal::try_from(value).ok()
}

impl FromStr for Answer {
    type Err = AnswerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(raw: &str) -> Decimal {
        Decimal::from_str(raw).unwrap()
    }

    #[test]
    fn integers_display_with_two_places() {
        assert_eq!(Answer::from_integer(7).to_string(), "7.00");
        assert_eq!(Answer::from_integer(-4).to_string(), "-4.00");
        assert_eq!(Answer::from_integer(0).to_string(), "0.00");
    }

    #[test]
    fn rounding_is_midpoint_away_from_zero() {
        assert_eq!(Answer::from_decimal(dec("2.345")).to_string(), "2.35");
        assert_eq!(Answer::from_decimal(dec("-2.345")).to_string(), "-2.35");
        assert_eq!(Answer::from_decimal(dec("3.3333")).to_string(), "3.33");
    }

    #[test]
    fn tiny_negative_values_round_to_unsigned_zero() {
        assert_eq!(Answer::from_decimal(dec("-0.001")).to_string(), "0.00");
    }

    #[test]
    fn parse_trims_and_rounds() {
        let answer = Answer::parse("  4.999 ").unwrap();
        assert_eq!(answer, Answer::from_integer(5));
        assert_eq!(Answer::parse("-4").unwrap().to_string(), "-4.00");
    }

    #[test]
    fn parse_accepts_scientific_notation() {
        assert_eq!(Answer::parse("1e1").unwrap(), Answer::from_integer(10));
    }

    #[test]
    fn huge_exponents_saturate_instead_of_failing() {
        let huge = Answer::parse("1e30").unwrap();
        let negative = Answer::parse("-1e30").unwrap();
        assert!(huge > Answer::from_integer(100));
        assert!(negative < Answer::from_integer(-10));
        assert_eq!(Answer::parse("1e400").unwrap(), huge);
        assert_eq!(Answer::parse("1e27").unwrap(), huge);
        assert_eq!(huge.to_string(), "100000000000000000000000000.00");
    }

    #[test]
    fn tiny_exponents_match_their_plain_form() {
        let plain = Answer::parse("0.000000000000000000000000000001").unwrap();
        assert_eq!(Answer::parse("1e-30").unwrap(), plain);
        assert_eq!(Answer::parse("-1e-30").unwrap().to_string(), "0.00");
        assert_eq!(Answer::parse("25e-1").unwrap().to_string(), "2.50");
    }

    #[test]
    fn parse_accepts_bare_fractions_and_signs() {
        assert_eq!(Answer::parse(".5").unwrap().to_string(), "0.50");
        assert_eq!(Answer::parse("5.").unwrap(), Answer::from_integer(5));
        assert_eq!(Answer::parse("+3").unwrap(), Answer::from_integer(3));
        assert_eq!(Answer::parse("2E2").unwrap(), Answer::from_integer(200));
    }

    #[test]
    fn parse_rejects_non_literal_spellings() {
        for raw in ["1_000", "inf", "-Infinity", "0x10", "1e", "e5", ".", "-", "1.2.3", "1 000"] {
            assert!(
                matches!(Answer::parse(raw), Err(AnswerError::NotNumeric { .. })),
                "{raw:?}"
            );
        }
    }

    #[test]
    fn parse_rejects_blank_and_garbage() {
        assert_eq!(Answer::parse("   ").unwrap_err(), AnswerError::Empty);
        assert!(matches!(
            Answer::parse("seven"),
            Err(AnswerError::NotNumeric { .. })
        ));
        assert!(matches!(
            Answer::parse("NaN"),
            Err(AnswerError::NotNumeric { .. })
        ));
    }

    #[test]
    fn equal_values_with_different_scales_compare_equal() {
        assert_eq!(Answer::parse("3.5").unwrap(), Answer::parse("3.50").unwrap());
    }
}
