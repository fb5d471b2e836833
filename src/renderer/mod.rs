//! Render hand-off
//!
//! The game never rasterizes anything itself. Each frame it walks the state
//! and hands sprite and text draw calls to a host `Renderer`.

pub mod frame;
pub mod sprite;

pub use frame::{Draw, render_frame};
pub use sprite::Sprite;

use glam::Vec2;

use crate::sim::Rect;

/// Sky color behind everything
pub const SKY_COLOR: [u8; 3] = [69, 193, 255];
/// HUD text color
pub const TEXT_COLOR: [u8; 3] = [255, 255, 255];
/// HUD font size
pub const FONT_SIZE: u32 = 55;

/// Host drawing surface. No call feeds anything back into the game.
pub trait Renderer {
    /// Fill the whole screen
    fn clear(&mut self, color: [u8; 3]);
    /// Draw a sprite scaled into `dest`
    fn draw_sprite(&mut self, sprite: Sprite, dest: Rect);
    /// Draw text centered on `center`
    fn draw_text(&mut self, text: &str, center: Vec2, size: u32, color: [u8; 3]);
    /// Show the finished frame
    fn present(&mut self);
}

/// Renderer that counts draw calls and logs a per-frame summary, for headless runs
#[derive(Debug, Default)]
pub struct LogRenderer {
    pub frames: u64,
    pub sprites: usize,
    pub texts: usize,
}

impl Renderer for LogRenderer {
    fn clear(&mut self, _color: [u8; 3]) {
        self.sprites = 0;
        self.texts = 0;
    }

    fn draw_sprite(&mut self, _sprite: Sprite, _dest: Rect) {
        self.sprites += 1;
    }

    fn draw_text(&mut self, text: &str, _center: Vec2, _size: u32, _color: [u8; 3]) {
        self.texts += 1;
        log::trace!("text {:?}", text);
    }

    fn present(&mut self) {
        self.frames += 1;
        log::trace!(
            "frame {}: {} sprites, {} texts",
            self.frames,
            self.sprites,
            self.texts
        );
    }
}
