//! Computer player for headless and demo runs
//!
//! Steers toward the lowest platform above the player's feet that a jump can
//! still reach, jumps when lined up, and spends the double jump when falling.
//! Presses a key to restart after a game over.

use super::{InputEvent, InputSource, Key};
use crate::sim::{GamePhase, GameState, Platform};

/// How far above the feet a platform may be and still count as reachable (px)
const REACH: f32 = 180.0;
/// Horizontal slack before steering kicks in (px)
const STEER_DEADZONE: f32 = 8.0;

#[derive(Debug, Default)]
pub struct AutoPilot {
    pending: Vec<InputEvent>,
    left: bool,
    right: bool,
    frames: u64,
    frame_limit: Option<u64>,
}

impl AutoPilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Quit after observing `frames` frames
    pub fn with_frame_limit(frames: u64) -> Self {
        Self {
            frame_limit: Some(frames),
            ..Self::default()
        }
    }

    fn press(&mut self, key: Key) {
        self.pending.push(InputEvent::KeyDown(key));
    }

    fn steer(&mut self, state: &GameState) {
        let player = &state.player;
        let feet = player.probe.bottom();

        let target = state
            .platforms
            .iter()
            .filter(|p| !p.is_start && Some(p.id) != player.riding)
            .filter(|p| p.rect.top() < feet && feet - p.rect.top() < REACH)
            .max_by(|a, b| a.rect.top().total_cmp(&b.rect.top()));

        let Some(target) = target else {
            // Nothing to aim for: burn the double jump rather than fall off the world
            if !player.on_ground && player.vel.y > 2.0 && !player.double_jump_used {
                let below = state.platforms.iter().any(|p| is_below(p, feet));
                if !below {
                    self.press(Key::Z);
                }
            }
            return;
        };

        let dx = target.rect.center_x() - player.rect.center_x();
        if dx < -STEER_DEADZONE {
            self.left = true;
        } else if dx > STEER_DEADZONE {
            self.right = true;
        }

        let lined_up = dx.abs() < target.rect.w / 2.0 + player.rect.w;
        let jump = if player.on_ground {
            lined_up
        } else {
            !player.double_jump_used && player.vel.y > 0.0
        };
        if jump {
            self.press(Key::Z);
        }
    }
}

fn is_below(platform: &Platform, feet: f32) -> bool {
    platform.rect.top() >= feet
}

impl InputSource for AutoPilot {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.pending)
    }

    fn is_key_held(&self, key: Key) -> bool {
        match key {
            Key::Left => self.left,
            Key::Right => self.right,
            _ => false,
        }
    }

    fn observe(&mut self, state: &GameState) {
        self.left = false;
        self.right = false;
        self.frames += 1;

        if self.frame_limit.is_some_and(|limit| self.frames > limit) {
            self.pending.push(InputEvent::Quit);
            return;
        }

        match state.world.phase {
            GamePhase::AwaitingRestart => self.press(Key::Other),
            GamePhase::Dying => {}
            GamePhase::Playing => self.steer(state),
        }
    }
}
