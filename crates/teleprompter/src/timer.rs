//! Frame-polled timers.
//!
//! egui repaints on demand, so nothing fires in the background. Each timer
//! stores its next deadline and is polled with the current `Instant` from
//! the update loop. Dropping a timer cancels it; there are no callbacks that
//! can outlive the view that owns them.

use std::time::{Duration, Instant};

/// A repeating task with a fixed interval, like `setInterval`.
///
/// The first tick is due one full interval after arming.
#[derive(Debug, Clone)]
pub struct RepeatingTask {
    interval: Duration,
    next_due: Instant,
}

impl RepeatingTask {
    pub fn start(interval: Duration, now: Instant) -> Self {
        // A zero interval would make `poll` spin forever.
        let interval = interval.max(Duration::from_millis(1));
        Self {
            interval,
            next_due: now + interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Number of ticks that have come due since the last poll.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let mut ticks = 0;
        while now >= self.next_due {
            ticks += 1;
            self.next_due += self.interval;
        }
        ticks
    }

    /// Time left until the next tick, for repaint scheduling.
    pub fn until_next(&self, now: Instant) -> Duration {
        self.next_due.saturating_duration_since(now)
    }
}

/// A one-shot delayed action that can be pushed back, like a debounced
/// `setTimeout` that is cleared and set again on every activity event.
#[derive(Debug, Clone, Default)]
pub struct DelayedAction {
    deadline: Option<Instant>,
}

impl DelayedAction {
    pub fn new() -> Self {
        Self { deadline: None }
    }

    /// Cancel any pending deadline and arm a new one `delay` from `now`.
    pub fn restart(&mut self, delay: Duration, now: Instant) {
        self.deadline = Some(now + delay);
    }

    /// Returns true exactly once, on the first poll at or after the deadline.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn until_due(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|d| d.saturating_duration_since(now))
    }
}
