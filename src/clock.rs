//! Frame clock for the terminal loop.
//!
//! Converts wall-clock time into whole milliseconds for
//! [`GameStateMachine::tick`](crate::core::GameStateMachine::tick). Only the
//! milliseconds handed out are consumed, so a late frame passes its overshoot
//! to the game and sub-millisecond remainders roll into the next frame.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    last: Instant,
    step: Duration,
}

impl FrameClock {
    pub fn new(step: Duration, now: Instant) -> Self {
        Self { last: now, step }
    }

    /// How long to wait for input before the next frame is due.
    pub fn timeout(&self, now: Instant) -> Duration {
        self.step
            .checked_sub(now.saturating_duration_since(self.last))
            .unwrap_or(Duration::ZERO)
    }

    /// Milliseconds elapsed since the last frame, once at least one step has passed.
    pub fn advance(&mut self, now: Instant) -> Option<u32> {
        let elapsed = now.saturating_duration_since(self.last);
        if elapsed < self.step {
            return None;
        }
        let ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
        self.last += Duration::from_millis(u64::from(ms));
        Some(ms)
    }
}
