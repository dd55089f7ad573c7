use std::time::Duration;

use chrono::{DateTime, Utc};

/// The two delayed effects a quiz session can have pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Hides the feedback banner.
    ClearFeedback,
    /// Moves on to a new problem after a correct answer.
    AutoAdvance,
}

impl TimerKind {
    pub const ALL: [TimerKind; 2] = [TimerKind::ClearFeedback, TimerKind::AutoAdvance];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            TimerKind::ClearFeedback => "clear-feedback",
            TimerKind::AutoAdvance => "auto-advance",
        }
    }
}

/// Identity of one arming of a timer slot.
///
/// Generations only grow, so a ticket from an earlier arming never matches the
/// slot again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerTicket {
    kind: TimerKind,
    generation: u64,
}

impl TimerTicket {
    #[must_use]
    pub fn kind(&self) -> TimerKind {
        self.kind
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// An armed timer and when it is due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTimer {
    pub ticket: TimerTicket,
    pub due_at: DateTime<Utc>,
}

impl ScheduledTimer {
    #[must_use]
    pub fn kind(&self) -> TimerKind {
        self.ticket.kind
    }

    /// Time left until the deadline; zero once it has passed.
    #[must_use]
    pub fn remaining(&self, now: DateTime<Utc>) -> Duration {
        (self.due_at - now).to_std().unwrap_or_default()
    }

    #[must_use]
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.due_at <= now
    }
}

/// One slot per `TimerKind`; arming a slot replaces whatever it held.
#[derive(Debug, Clone, Default)]
pub struct TimerSlots {
    clear_feedback: Option<ScheduledTimer>,
    auto_advance: Option<ScheduledTimer>,
    next_generation: u64,
}

impl TimerSlots {
    fn slot(&self, kind: TimerKind) -> &Option<ScheduledTimer> {
        match kind {
            TimerKind::ClearFeedback => &self.clear_feedback,
            TimerKind::AutoAdvance => &self.auto_advance,
        }
    }

    fn slot_mut(&mut self, kind: TimerKind) -> &mut Option<ScheduledTimer> {
        match kind {
            TimerKind::ClearFeedback => &mut self.clear_feedback,
            TimerKind::AutoAdvance => &mut self.auto_advance,
        }
    }

    /// Arms `kind` for `due_at`, replacing any previous arming.
    pub fn arm(&mut self, kind: TimerKind, due_at: DateTime<Utc>) -> ScheduledTimer {
        self.next_generation += 1;
        let timer = ScheduledTimer {
            ticket: TimerTicket {
                kind,
                generation: self.next_generation,
            },
            due_at,
        };
        *self.slot_mut(kind) = Some(timer);
        timer
    }

    /// Disarms `kind`, returning what was armed.
    pub fn cancel(&mut self, kind: TimerKind) -> Option<ScheduledTimer> {
        self.slot_mut(kind).take()
    }

    pub fn cancel_all(&mut self) {
        self.clear_feedback = None;
        self.auto_advance = None;
    }

    #[must_use]
    pub fn get(&self, kind: TimerKind) -> Option<ScheduledTimer> {
        *self.slot(kind)
    }

    #[must_use]
    pub fn is_armed(&self, kind: TimerKind) -> bool {
        self.slot(kind).is_some()
    }

    /// Empties the slot if `ticket` is the one currently armed there.
    ///
    /// Returns `false` for superseded or cancelled tickets.
    pub fn take_if_current(&mut self, ticket: TimerTicket) -> bool {
        let slot = self.slot_mut(ticket.kind);
        if slot.is_some_and(|armed| armed.ticket == ticket) {
            *slot = None;
            true
        } else {
            false
        }
    }

    /// Armed timers ordered by deadline.
    #[must_use]
    pub fn scheduled(&self) -> Vec<ScheduledTimer> {
        let mut timers: Vec<_> = TimerKind::ALL
            .iter()
            .filter_map(|kind| self.get(*kind))
            .collect();
        timers.sort_by_key(|timer| timer.due_at);
        timers
    }

    /// Tickets whose deadline is at or before `now`, earliest first.
    #[must_use]
    pub fn due(&self, now: DateTime<Utc>) -> Vec<TimerTicket> {
        self.scheduled()
            .into_iter()
            .filter(|timer| timer.is_due(now))
            .map(|timer| timer.ticket)
            .collect()
    }
}
