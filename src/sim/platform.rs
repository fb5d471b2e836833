//! Scrolling world entities: platforms and background clouds

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::player::Player;
use super::rect::Rect;
use crate::consts::*;

/// Capabilities shared by everything that scrolls down the screen
pub trait Entity {
    /// Advance one frame at the given world scroll speed
    fn update(&mut self, scroll_speed: f32);
    fn bounding_box(&self) -> Rect;
}

/// Remove entities whose top edge has passed `limit`; returns how many were dropped
pub fn cull_below<E: Entity>(entities: &mut Vec<E>, limit: f32) -> usize {
    let before = entities.len();
    entities.retain(|e| e.bounding_box().top() <= limit);
    before - entities.len()
}

/// Stable handle to a live platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlatformId(pub u32);

/// Block image used for one platform cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockKind {
    Brick,
    Question,
}

/// Block image table; bricks are four times as likely as question blocks
const BLOCK_TABLE: [BlockKind; 5] = [
    BlockKind::Brick,
    BlockKind::Brick,
    BlockKind::Brick,
    BlockKind::Brick,
    BlockKind::Question,
];

fn roll_blocks(count: u32, rng: &mut Pcg32) -> Vec<BlockKind> {
    (0..count)
        .map(|_| BLOCK_TABLE[rng.random_range(0..BLOCK_TABLE.len())])
        .collect()
}

/// A row of blocks the player can stand on
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Platform {
    pub id: PlatformId,
    pub rect: Rect,
    /// Cell images left to right
    pub blocks: Vec<BlockKind>,
    /// The platform under the player at spawn: never scrolls, never scores
    pub is_start: bool,
    /// Score already awarded for this platform
    pub scored: bool,
}

impl Platform {
    /// The start platform, centered under the player's feet
    pub fn start(id: PlatformId, player: &Player, rng: &mut Pcg32) -> Self {
        let blocks = roll_blocks(START_PLATFORM_BLOCKS, rng);
        let width = blocks.len() as f32 * BLOCK_SIZE;
        let anchor = player.rect.midbottom() + Vec2::new(0.0, PROBE_OFFSET);
        Self {
            id,
            rect: Rect::from_midbottom(anchor, width, BLOCK_SIZE),
            blocks,
            is_start: true,
            scored: false,
        }
    }

    /// A new platform just above the top edge, fully inside the screen horizontally
    pub fn spawn(id: PlatformId, block_count: u32, rng: &mut Pcg32) -> Self {
        let blocks = roll_blocks(block_count.max(1), rng);
        let width = blocks.len() as f32 * BLOCK_SIZE;
        let max_x = (SCREEN_WIDTH - width).max(0.0) as u32;
        let x = rng.random_range(0..=max_x) as f32;
        Self {
            id,
            rect: Rect::new(x, -BLOCK_SIZE, width, BLOCK_SIZE),
            blocks,
            is_start: false,
            scored: false,
        }
    }

    /// Vertical distance this platform moves per frame
    pub fn fall_delta(&self, scroll_speed: f32) -> f32 {
        if self.is_start {
            0.0
        } else {
            PLATFORM_FALL_SPEED * scroll_speed
        }
    }

    /// Award one point the first time the player's sprite touches this platform
    pub fn handle_collision_with_player(&mut self, player: &Player) -> u64 {
        if self.is_start || self.scored {
            return 0;
        }
        if self.rect.overlaps(&player.rect) {
            self.scored = true;
            return 1;
        }
        0
    }

    /// Destination rectangle of each cell, left to right
    pub fn cells(&self) -> impl Iterator<Item = (BlockKind, Rect)> + '_ {
        self.blocks.iter().enumerate().map(|(i, kind)| {
            let x = self.rect.x + i as f32 * BLOCK_SIZE;
            (*kind, Rect::new(x, self.rect.y, BLOCK_SIZE, BLOCK_SIZE))
        })
    }
}

impl Entity for Platform {
    fn update(&mut self, scroll_speed: f32) {
        self.rect.y += self.fall_delta(scroll_speed);
    }

    fn bounding_box(&self) -> Rect {
        self.rect
    }
}

/// Cloud image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CloudKind {
    Small,
    Large,
}

impl CloudKind {
    /// Image size in pixels
    pub fn size(self) -> (f32, f32) {
        match self {
            CloudKind::Small => (64.0, 32.0),
            CloudKind::Large => (96.0, 48.0),
        }
    }
}

/// Cosmetic parallax cloud; never interacts with the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Background {
    pub id: u32,
    pub rect: Rect,
    pub kind: CloudKind,
}

impl Background {
    pub fn spawn(id: u32, rng: &mut Pcg32) -> Self {
        let kind = if rng.random_bool(0.5) {
            CloudKind::Small
        } else {
            CloudKind::Large
        };
        let (w, h) = kind.size();
        let x = rng.random_range(0..=(SCREEN_WIDTH - w) as u32) as f32;
        Self {
            id,
            rect: Rect::new(x, -h, w, h),
            kind,
        }
    }
}

impl Entity for Background {
    /// Clouds drift at a fixed rate regardless of scroll speed
    fn update(&mut self, _scroll_speed: f32) {
        self.rect.y += CLOUD_FALL_SPEED;
    }

    fn bounding_box(&self) -> Rect {
        self.rect
    }
}
