//! Fixed-interval tick source for dynamics mode.
//!
//! The host feeds wall-clock time in with `poll` and runs one dynamics step
//! per returned tick. Pausing stops time from accumulating; `cancel`
//! deregisters the source until `register` is called again.

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct TickSource {
    interval: Duration,
    accumulated: Duration,
    registered: bool,
    max_catch_up: u32, // cap on ticks returned by one poll
}

impl TickSource {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            accumulated: Duration::ZERO,
            registered: true,
            max_catch_up: 8,
        }
    }

    pub fn with_max_catch_up(mut self, max: u32) -> Self {
        self.max_catch_up = max;
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_registered(&self) -> bool {
        self.registered
    }

    /// Number of ticks due after `elapsed` more time.
    /// Backlog beyond `max_catch_up` ticks is dropped
    pub fn poll(&mut self, elapsed: Duration, paused: bool) -> u32 {
        if !self.registered || paused || self.interval.is_zero() {
            return 0;
        }

        self.accumulated += elapsed;
        let mut due = 0;
        while self.accumulated >= self.interval {
            self.accumulated -= self.interval;
            due += 1;
            if due == self.max_catch_up {
                self.accumulated = Duration::ZERO;
                break;
            }
        }
        due
    }

    pub fn cancel(&mut self) {
        self.registered = false;
        self.accumulated = Duration::ZERO;
    }

    pub fn register(&mut self) {
        self.registered = true;
    }
}
