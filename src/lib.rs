//! Only Jump! - an endless vertical platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player physics, collisions, spawning, game state)
//! - `renderer`: Render hand-off to a host drawing surface
//! - `audio`: Sound catalogue and fire-and-forget playback
//! - `host`: Clock and input abstraction
//! - `app`: Cooperative frame loop tying the above together
//! - `settings`: Runtime configuration

pub mod app;
pub mod audio;
pub mod host;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use app::App;
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Window title
    pub const TITLE: &str = "Only Jump!";

    /// Screen dimensions (pixels)
    pub const SCREEN_WIDTH: f32 = 600.0;
    pub const SCREEN_HEIGHT: f32 = 1000.0;

    /// Frame-rate governor target
    pub const TARGET_FPS: u32 = 60;

    /// Downward acceleration (pixels/frame²)
    pub const GRAVITY: f32 = 0.5;
    /// Horizontal step per frame while a move key is held
    pub const PLAYER_SPEED: f32 = 5.0;
    /// Vertical velocity applied by a jump (negative is up)
    pub const JUMP_IMPULSE: f32 = -10.0;
    /// Horizontal velocity during a dash
    pub const DASH_SPEED: f32 = 15.0;
    /// How long a dash lasts (ms)
    pub const DASH_DURATION_MS: u64 = 200;
    /// Minimum time between dash starts (ms)
    pub const DASH_COOLDOWN_MS: u64 = 1000;

    /// Player sprite frame size
    pub const PLAYER_SIZE: f32 = 48.0;
    /// Collision probe size (narrower than the sprite)
    pub const PROBE_WIDTH: f32 = 30.0;
    pub const PROBE_HEIGHT: f32 = 41.0;
    /// Probe bottom sits this far above the sprite bottom
    pub const PROBE_OFFSET: f32 = 5.0;

    /// One-time launch velocity when the player dies
    pub const DEATH_LAUNCH_VX: f32 = 2.0;
    pub const DEATH_LAUNCH_VY: f32 = -18.0;
    /// Animation advance per frame
    pub const ANIM_RATE: f32 = 0.15;
    pub const DEATH_ANIM_RATE: f32 = 0.25;

    /// Platform block cell size
    pub const BLOCK_SIZE: f32 = 20.0;
    /// Block count of the start platform
    pub const START_PLATFORM_BLOCKS: u32 = 5;
    /// Block count range of spawned platforms
    pub const MIN_PLATFORM_BLOCKS: u32 = 1;
    pub const MAX_PLATFORM_BLOCKS: u32 = 10;
    /// Platform descent per frame at scroll speed 1.0
    pub const PLATFORM_FALL_SPEED: f32 = 2.0;
    /// Cloud descent per frame (not scaled by scroll speed)
    pub const CLOUD_FALL_SPEED: f32 = 1.5;

    /// Nominal platform spawn interval (ms)
    pub const PLATFORM_SPAWN_INTERVAL_MS: f32 = 3000.0;
    /// Lower clamp for both bounds of the shrinking spawn range (ms)
    pub const PLATFORM_SPAWN_FLOOR_MS: f32 = 250.0;
    /// Survival ms that shave one ms off the spawn interval
    pub const SPAWN_RAMP_DIVISOR: f32 = 10_000.0;
    /// Cloud spawn interval range (ms)
    pub const CLOUD_SPAWN_MIN_MS: f32 = 4000.0;
    pub const CLOUD_SPAWN_MAX_MS: f32 = 15_000.0;
    /// Survival ms that add 1.0 to the scroll speed multiplier
    pub const SCROLL_RAMP_DIVISOR: f32 = 100_000.0;

    /// Distance below the screen where platforms are culled and the player dies
    pub const FALL_MARGIN: f32 = 100.0;
    /// Distance below the screen the dying player must fall before restart is offered
    pub const DEATH_FALL_MARGIN: f32 = 500.0;

    /// One-shot sound volume
    pub const SOUND_VOLUME: f32 = 0.3;
}
