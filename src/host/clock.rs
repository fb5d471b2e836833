//! Clocks and the frame-rate governor

use std::time::{Duration, Instant};

use super::Clock;

/// Wall clock that sleeps out the rest of each frame budget
#[derive(Debug)]
pub struct SystemClock {
    epoch: Instant,
    frame_start: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            epoch: now,
            frame_start: now,
        }
    }
}

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        self.epoch.elapsed().as_millis() as u64
    }

    fn frame_delay(&mut self, target_fps: u32) {
        let budget = Duration::from_secs_f64(1.0 / f64::from(target_fps.max(1)));
        let spent = self.frame_start.elapsed();
        if let Some(rest) = budget.checked_sub(spent) {
            std::thread::sleep(rest);
        }
        self.frame_start = Instant::now();
    }
}

/// Simulated clock: every frame advances time by exactly one frame budget and never sleeps
#[derive(Debug, Clone, Default)]
pub struct FixedStepClock {
    now_ms: u64,
    /// Sub-millisecond remainder carried between frames
    carry: f64,
}

impl FixedStepClock {
    pub fn starting_at(now_ms: u64) -> Self {
        Self { now_ms, carry: 0.0 }
    }
}

impl Clock for FixedStepClock {
    fn now_millis(&self) -> u64 {
        self.now_ms
    }

    fn frame_delay(&mut self, target_fps: u32) {
        self.carry += 1000.0 / f64::from(target_fps.max(1));
        let whole = self.carry.floor();
        self.carry -= whole;
        self.now_ms += whole as u64;
    }
}
