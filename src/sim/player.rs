//! The player sprite: movement, jumping, dashing and the animation state machine
//!
//! Positions are in screen pixels, velocities in pixels per frame. The render
//! box is the 48×48 sprite; the probe box is the narrower rectangle used for
//! collisions and always hangs off the render box's bottom-center.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::platform::PlatformId;
use super::rect::Rect;
use crate::consts::*;

/// Horizontal facing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// -1.0 for left, 1.0 for right
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// Animation the player sprite is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Action {
    #[default]
    Idle,
    Run,
    Jump,
    WallSlide,
    AirSpin,
    Dash,
}

impl Action {
    /// Frames in the sprite sheet for this animation
    pub fn frame_count(self) -> usize {
        match self {
            Action::Idle => 11,
            Action::Run => 12,
            Action::Jump => 1,
            Action::WallSlide => 5,
            // Dash reuses the air spin sheet
            Action::AirSpin | Action::Dash => 6,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Action::Idle => "idle",
            Action::Run => "run",
            Action::Jump => "jump",
            Action::WallSlide => "wall_slide",
            Action::AirSpin => "air_spin",
            Action::Dash => "dash",
        }
    }
}

/// Which jump fired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpKind {
    Ground,
    Double,
}

/// The animation frame to draw this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlayerImage {
    pub action: Action,
    pub frame: usize,
    /// Mirror horizontally (facing left)
    pub flipped: bool,
}

/// The player entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Sprite rectangle
    pub rect: Rect,
    /// Collision rectangle
    pub probe: Rect,
    pub vel: Vec2,
    pub facing: Facing,

    pub on_ground: bool,
    pub double_jump_used: bool,
    pub on_wall: bool,
    pub is_jumping: bool,
    pub is_moving: bool,
    pub is_dashing: bool,
    pub is_dead: bool,

    pub action: Action,
    /// Fractional frame accumulator, wraps at the action's frame count
    pub frame_index: f32,
    pub image: PlayerImage,

    /// Timestamp of the last dash start (ms)
    pub last_dash_ms: u64,

    /// Platform the player is standing on (lookup handle, never owning)
    pub riding: Option<PlatformId>,
}

impl Player {
    /// Spawn at the center of the screen, at rest and airborne
    pub fn new(now_ms: u64) -> Self {
        let rect = Rect::from_center(
            Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0),
            PLAYER_SIZE,
            PLAYER_SIZE,
        );
        let mut player = Self {
            rect,
            probe: Rect::new(0.0, 0.0, PROBE_WIDTH, PROBE_HEIGHT),
            vel: Vec2::ZERO,
            facing: Facing::Right,
            on_ground: false,
            double_jump_used: false,
            on_wall: false,
            is_jumping: false,
            is_moving: false,
            is_dashing: false,
            is_dead: false,
            action: Action::Idle,
            frame_index: 0.0,
            image: PlayerImage::default(),
            last_dash_ms: now_ms,
            riding: None,
        };
        player.sync_probe();
        player
    }

    /// Hang the probe off the render box's bottom-center
    pub fn sync_probe(&mut self) {
        self.probe
            .set_midbottom(self.rect.midbottom() - Vec2::new(0.0, PROBE_OFFSET));
    }

    /// Move the render box so it sits on the probe again
    pub fn sync_rect_to_probe(&mut self) {
        self.rect
            .set_midbottom(self.probe.midbottom() + Vec2::new(0.0, PROBE_OFFSET));
    }

    pub fn apply_gravity(&mut self) {
        if !self.on_ground {
            self.vel.y += GRAVITY;
        }
    }

    /// Ground jump, else double jump, else nothing
    pub fn jump(&mut self) -> Option<JumpKind> {
        if self.is_dashing {
            return None;
        }
        if self.on_ground {
            self.vel.y = JUMP_IMPULSE;
            self.on_ground = false;
            self.riding = None;
            self.set_action(Action::Jump);
            Some(JumpKind::Ground)
        } else if !self.double_jump_used {
            self.vel.y = JUMP_IMPULSE;
            self.double_jump_used = true;
            self.set_action(Action::AirSpin);
            Some(JumpKind::Double)
        } else {
            None
        }
    }

    /// Start a dash in the facing direction. Returns false while dashing or cooling down.
    pub fn dash(&mut self, now_ms: u64) -> bool {
        let cooled = now_ms.saturating_sub(self.last_dash_ms) > DASH_COOLDOWN_MS;
        if !cooled || self.is_dashing {
            return false;
        }
        self.is_dashing = true;
        self.last_dash_ms = now_ms;
        self.vel.x = DASH_SPEED * self.facing.sign();
        self.set_action(Action::Dash);
        true
    }

    /// Step horizontally by one walking stride
    pub fn walk(&mut self, direction: Facing) {
        if self.is_dashing {
            return;
        }
        self.is_moving = true;
        self.rect.x += direction.sign() * PLAYER_SPEED;
        self.facing = direction;
    }

    /// Drop any standing contact; gravity resumes next update
    pub fn leave_ground(&mut self) {
        self.on_ground = false;
        self.riding = None;
    }

    /// Advance one frame. `ride_delta` is how far the ridden platform moved
    /// this frame. Returns true once a dead player has fallen far enough for
    /// the restart prompt.
    pub fn update(&mut self, now_ms: u64, ride_delta: f32, game_over: bool) -> bool {
        if game_over {
            return self.update_dying();
        }
        self.update_playing(now_ms, ride_delta);
        false
    }

    fn update_dying(&mut self) -> bool {
        if !self.is_dead {
            self.vel = Vec2::new(DEATH_LAUNCH_VX, DEATH_LAUNCH_VY);
            self.is_dead = true;
            self.riding = None;
            self.on_ground = false;
        }
        self.action = Action::AirSpin;
        self.vel.y += GRAVITY;
        self.rect.translate(self.vel);
        self.advance_frame(DEATH_ANIM_RATE);
        self.select_image();

        self.rect.top() > SCREEN_HEIGHT + DEATH_FALL_MARGIN
    }

    fn update_playing(&mut self, now_ms: u64, ride_delta: f32) {
        self.sync_probe();

        if self.is_dashing {
            self.action = Action::Dash;
            if now_ms.saturating_sub(self.last_dash_ms) > DASH_DURATION_MS {
                self.is_dashing = false;
                self.vel.x = 0.0;
            }
        } else if self.double_jump_used {
            self.action = Action::AirSpin;
        } else if self.is_jumping {
            self.action = Action::Jump;
        } else if self.on_wall {
            self.action = Action::WallSlide;
        } else if self.is_moving {
            self.action = Action::Run;
        } else {
            self.action = Action::Idle;
        }

        self.apply_gravity();

        if self.riding.is_some() {
            self.rect.y += ride_delta;
        }

        self.rect.translate(self.vel);
        self.wrap_horizontal();

        self.advance_frame(ANIM_RATE);
        self.select_image();

        self.is_jumping = !self.on_ground;
        self.is_moving = self.vel.x != 0.0 && self.on_ground;
    }

    /// Leaving one side of the screen re-enters at the other
    fn wrap_horizontal(&mut self) {
        if self.rect.right() > SCREEN_WIDTH {
            self.rect.set_left(0.0);
        } else if self.rect.left() < 0.0 {
            self.rect.set_right(SCREEN_WIDTH);
        }
    }

    fn set_action(&mut self, action: Action) {
        self.action = action;
        self.frame_index = 0.0;
    }

    fn advance_frame(&mut self, rate: f32) {
        self.frame_index += rate;
        if self.frame_index >= self.action.frame_count() as f32 {
            self.frame_index = 0.0;
        }
    }

    fn select_image(&mut self) {
        self.image = PlayerImage {
            action: self.action,
            frame: (self.frame_index as usize).min(self.action.frame_count() - 1),
            flipped: self.facing == Facing::Left,
        };
    }
}
