//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per frame, time only from `TickInput::now_ms`
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering, audio or host dependencies; side effects leave as `GameEvent`s

pub mod collision;
pub mod platform;
pub mod player;
pub mod rect;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{CollisionSide, classify, resolve_platform_collisions};
pub use platform::{Background, BlockKind, CloudKind, Entity, Platform, PlatformId, cull_below};
pub use player::{Action, Facing, JumpKind, Player, PlayerImage};
pub use rect::Rect;
pub use spawner::{SpawnOrders, Spawner, platform_interval_range, scroll_speed};
pub use state::{GameEvent, GamePhase, GameState, WorldState};
pub use tick::{TickInput, tick};
