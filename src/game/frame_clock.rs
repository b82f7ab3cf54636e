use std::ops::Add;
use std::time::{Duration, Instant};

use super::mechanics::TICKS_PER_SECOND;

/// Maximum ticks replayed per host frame to prevent a spiral of death after a stall
pub const MAX_TICKS_PER_FRAME: u32 = 8;

/// Fixed-timestep pacing: tells the host how many game ticks are due.
pub struct FrameClock {
    tick_duration: Duration,
    next_tick_time: Instant,
}

impl FrameClock {
    pub fn new(now: Instant) -> Self {
        Self::with_tick_duration(now, Duration::from_secs(1) / TICKS_PER_SECOND)
    }

    pub fn with_tick_duration(now: Instant, tick_duration: Duration) -> Self {
        Self {
            tick_duration,
            next_tick_time: now,
        }
    }

    /// number of ticks to run now; when more than [`MAX_TICKS_PER_FRAME`] are overdue the rest is dropped
    pub fn due_ticks(&mut self, now: Instant) -> u32 {
        let mut ticks = 0;
        while now.ge(&self.next_tick_time) {
            if ticks == MAX_TICKS_PER_FRAME {
                log::debug!("frame clock lagging behind, skipping ahead");
                self.next_tick_time = now.add(self.tick_duration);
                break;
            }
            self.next_tick_time = self.next_tick_time.add(self.tick_duration);
            ticks += 1;
        }
        ticks
    }

    pub fn until_next_tick(&self, now: Instant) -> Duration {
        self.next_tick_time.saturating_duration_since(now)
    }
}
