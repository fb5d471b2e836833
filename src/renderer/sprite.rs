//! Sprite descriptors
//!
//! A `Sprite` names an image (and animation frame) the host must draw. Asset
//! paths follow the game's data directory layout.

use crate::sim::{Action, BlockKind, CloudKind, PlayerImage};

/// Something the host can draw from its loaded image set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    /// One frame of a player animation sheet
    Player(PlayerImage),
    /// One platform cell
    Block(BlockKind),
    /// Background cloud
    Cloud(CloudKind),
    /// Game-over banner
    GameOver,
}

impl Sprite {
    /// Image file backing this sprite
    pub fn asset_path(&self) -> &'static str {
        match self {
            Sprite::Player(image) => match image.action {
                Action::Idle => "data/images/player/idle.png",
                Action::Run => "data/images/player/run.png",
                Action::Jump => "data/images/player/jump.png",
                Action::WallSlide => "data/images/player/wall_slide.png",
                Action::AirSpin | Action::Dash => "data/images/player/air_spin.png",
            },
            Sprite::Block(BlockKind::Brick) => "data/images/player/Brick_Block.png",
            Sprite::Block(BlockKind::Question) => "data/images/player/Question_Block_NSMB.png",
            Sprite::Cloud(CloudKind::Small) => "data/images/player/cloud_1.png",
            Sprite::Cloud(CloudKind::Large) => "data/images/player/cloud_2.png",
            Sprite::GameOver => "data/images/player/game_over.png",
        }
    }
}
