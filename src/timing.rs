//! Frame-rate cap.
//!
//! [`FrameClock::tick`] is called once at the top of every frame. It sleeps
//! until at least [`FRAME_TIME`] has passed since the previous tick, then
//! reports how long the frame actually took. That elapsed time drives the
//! title animation clock and the loading countdown.

use std::thread;
use std::time::{Duration, Instant};

use crate::config::FRAME_TIME;

/// Fixed-interval frame clock.
#[derive(Debug)]
pub struct FrameClock {
    target: Duration,
    last_tick: Instant,
}

impl FrameClock {
    /// Clock capped at [`FRAME_TIME`]. The first tick measures from now.
    pub fn new() -> Self {
        Self::with_target(FRAME_TIME)
    }

    /// Clock capped at an arbitrary frame interval.
    pub fn with_target(target: Duration) -> Self {
        Self {
            target,
            last_tick: Instant::now(),
        }
    }

    /// Sleep out the remainder of the frame and return the elapsed frame time in
    /// whole milliseconds.
    pub fn tick(&mut self) -> u32 {
        let busy = self.last_tick.elapsed();
        if let Some(remaining) = self.target.checked_sub(busy) {
            thread::sleep(remaining);
        }
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_tick);
        self.last_tick = now;
        u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX)
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
