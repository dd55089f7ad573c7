use chrono::{DateTime, Duration, Utc};

/// Source of "now" for timer deadlines and diagnostic timestamps.
///
/// `Fixed` lets tests drive timers by advancing time explicitly instead of sleeping.
#[derive(Debug, Clone, Copy, Default)]
pub enum Clock {
    #[default]
    System,
    Fixed(DateTime<Utc>),
}

impl Clock {
    /// Returns a clock that follows the system time.
    #[must_use]
    pub fn system() -> Self {
        Self::System
    }

    /// Returns a clock frozen at the given timestamp.
    #[must_use]
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self::Fixed(at)
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            Clock::Fixed(t) => *t,
        }
    }

    /// Moves a fixed clock forward. Has no effect on `Clock::System`.
    pub fn advance(&mut self, delta: Duration) {
        if let Clock::Fixed(t) = self {
            *t += delta;
        }
    }

    /// Moves a fixed clock forward by whole milliseconds.
    pub fn advance_millis(&mut self, millis: u32) {
        self.advance(Duration::milliseconds(i64::from(millis)));
    }

    #[must_use]
    pub fn is_fixed(&self) -> bool {
        matches!(self, Clock::Fixed(_))
    }
}

/// Unix seconds the quiz fixtures freeze their clock at (22:13:20 UTC).
pub const FIXED_TEST_TIMESTAMP: i64 = 1_700_000_000;

/// Instant used by snapshot and timer fixtures.
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(FIXED_TEST_TIMESTAMP, 0).unwrap_or_default()
}

/// A frozen clock; move it with `Clock::advance_millis` and then `tick` the session.
#[must_use]
pub fn fixed_clock() -> Clock {
    Clock::fixed(fixed_now())
}
