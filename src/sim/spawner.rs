//! Time-driven world generation and difficulty ramp
//!
//! Both timers count from the last death. Platform intervals shrink as the
//! player survives longer; cloud intervals never change.

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// World scroll-speed multiplier after `survival_ms` of survival. 1.0 at birth, never decreasing.
pub fn scroll_speed(survival_ms: u64) -> f32 {
    1.0 + survival_ms as f32 / SCROLL_RAMP_DIVISOR
}

/// Bounds (ms) of the uniform draw for the next platform interval.
///
/// Both bounds shrink by 1 ms per 10 s survived and are clamped to a floor,
/// so the range can neither go negative nor invert.
pub fn platform_interval_range(survival_ms: u64) -> (f32, f32) {
    let ramp = survival_ms as f32 / SPAWN_RAMP_DIVISOR;
    let lo = (PLATFORM_SPAWN_INTERVAL_MS * 0.5 - ramp).max(PLATFORM_SPAWN_FLOOR_MS);
    let hi = (PLATFORM_SPAWN_INTERVAL_MS - ramp).max(PLATFORM_SPAWN_FLOOR_MS);
    (lo, hi.max(lo))
}

/// What the spawner wants created this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpawnOrders {
    /// Spawn one platform together with one cloud
    pub platform: bool,
    /// Spawn an extra cloud from the independent cloud timer
    pub cloud: bool,
}

/// Platform and cloud spawn timers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spawner {
    /// Survival time of the last platform spawn (ms)
    pub last_platform_ms: u64,
    /// Survival time of the last cloud-timer spawn (ms)
    pub last_cloud_ms: u64,
    /// Current platform interval draw (ms)
    pub platform_interval_ms: f32,
    /// Current cloud interval draw (ms)
    pub cloud_interval_ms: f32,
}

impl Spawner {
    /// Fresh timers for a new life
    pub fn new(rng: &mut Pcg32) -> Self {
        Self {
            last_platform_ms: 0,
            last_cloud_ms: 0,
            platform_interval_ms: draw_platform_interval(0, rng),
            cloud_interval_ms: draw_cloud_interval(rng),
        }
    }

    /// Check both timers; each one that elapsed is restarted with a fresh interval draw
    pub fn poll(&mut self, survival_ms: u64, rng: &mut Pcg32) -> SpawnOrders {
        let mut orders = SpawnOrders::default();

        let since_platform = survival_ms.saturating_sub(self.last_platform_ms) as f32;
        if since_platform > self.platform_interval_ms {
            orders.platform = true;
            self.last_platform_ms = survival_ms;
            self.platform_interval_ms = draw_platform_interval(survival_ms, rng);
        }

        let since_cloud = survival_ms.saturating_sub(self.last_cloud_ms) as f32;
        if since_cloud > self.cloud_interval_ms {
            orders.cloud = true;
            self.last_cloud_ms = survival_ms;
            self.cloud_interval_ms = draw_cloud_interval(rng);
        }

        orders
    }
}

fn draw_platform_interval(survival_ms: u64, rng: &mut Pcg32) -> f32 {
    let (lo, hi) = platform_interval_range(survival_ms);
    rng.random_range(lo..=hi)
}

fn draw_cloud_interval(rng: &mut Pcg32) -> f32 {
    rng.random_range(CLOUD_SPAWN_MIN_MS..=CLOUD_SPAWN_MAX_MS)
}
