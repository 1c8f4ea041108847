//! Animation tick scheduling
//!
//! The next tick is an absolute deadline. Key presses that arrive in between
//! only shorten the wait for input; they never push the tick back.

use std::time::{Duration, Instant};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TickClock {
    deadline: Option<Instant>,
}

impl TickClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a tick `delay` after `now` unless one is already pending
    pub fn arm(&mut self, now: Instant, delay: Option<Duration>) {
        match delay {
            Some(delay) if self.deadline.is_none() => self.deadline = Some(now + delay),
            Some(_) => {}
            None => self.deadline = None,
        }
    }

    /// Replace the deadline once a tick has run
    pub fn rearm(&mut self, now: Instant, delay: Option<Duration>) {
        self.deadline = delay.map(|delay| now + delay);
    }

    /// How long to wait for input before the next tick, or `idle` when no
    /// animation is running
    pub fn timeout(&self, now: Instant, idle: Duration) -> Duration {
        self.deadline
            .map_or(idle, |deadline| deadline.saturating_duration_since(now))
    }

    pub fn is_due(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| now >= deadline)
    }
}
