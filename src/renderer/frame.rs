//! Per-frame draw order

use glam::Vec2;

use super::{FONT_SIZE, Renderer, SKY_COLOR, Sprite, TEXT_COLOR};
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::sim::{Background, GamePhase, GameState, Platform, Player, Rect};

/// Game-over banner size after its 2× scale-up
const GAME_OVER_SIZE: (f32, f32) = (384.0, 192.0);

/// Anything that knows how to submit itself to a renderer
pub trait Draw {
    fn draw(&self, renderer: &mut dyn Renderer);
}

impl Draw for Platform {
    fn draw(&self, renderer: &mut dyn Renderer) {
        for (kind, cell) in self.cells() {
            renderer.draw_sprite(Sprite::Block(kind), cell);
        }
    }
}

impl Draw for Background {
    fn draw(&self, renderer: &mut dyn Renderer) {
        renderer.draw_sprite(Sprite::Cloud(self.kind), self.rect);
    }
}

impl Draw for Player {
    fn draw(&self, renderer: &mut dyn Renderer) {
        renderer.draw_sprite(Sprite::Player(self.image), self.rect);
    }
}

/// Submit one complete frame: sky, score, then either the world or the game-over screen
pub fn render_frame(state: &GameState, renderer: &mut dyn Renderer) {
    renderer.clear(SKY_COLOR);

    let score = format!("Score\n{}", state.world.score);
    renderer.draw_text(&score, Vec2::new(SCREEN_WIDTH / 2.0, 80.0), FONT_SIZE, TEXT_COLOR);

    if state.world.phase == GamePhase::AwaitingRestart {
        renderer.draw_text(
            "Press any key to restart",
            Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0),
            FONT_SIZE,
            TEXT_COLOR,
        );
        let banner = Rect::from_center(
            Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 4.0 + 100.0),
            GAME_OVER_SIZE.0,
            GAME_OVER_SIZE.1,
        );
        renderer.draw_sprite(Sprite::GameOver, banner);
    } else {
        for background in &state.backgrounds {
            background.draw(renderer);
        }
        for platform in &state.platforms {
            platform.draw(renderer);
        }
        state.player.draw(renderer);
    }

    renderer.present();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        sprites: Vec<Sprite>,
        texts: Vec<String>,
        presented: usize,
    }

    impl Renderer for Recorder {
        fn clear(&mut self, _color: [u8; 3]) {}

        fn draw_sprite(&mut self, sprite: Sprite, _dest: Rect) {
            self.sprites.push(sprite);
        }

        fn draw_text(&mut self, text: &str, _center: Vec2, _size: u32, _color: [u8; 3]) {
            self.texts.push(text.to_string());
        }

        fn present(&mut self) {
            self.presented += 1;
        }
    }

    #[test]
    fn test_playing_frame_draws_world() {
        let state = GameState::new(3, 0);
        let mut r = Recorder::default();
        render_frame(&state, &mut r);

        // Five start-platform cells plus the player
        assert_eq!(r.sprites.len(), 6);
        assert!(matches!(r.sprites.last(), Some(Sprite::Player(_))));
        assert_eq!(r.texts, vec!["Score\n0".to_string()]);
        assert_eq!(r.presented, 1);
    }

    #[test]
    fn test_restart_frame_hides_world() {
        let mut state = GameState::new(3, 0);
        state.world.phase = GamePhase::AwaitingRestart;
        let mut r = Recorder::default();
        render_frame(&state, &mut r);

        assert_eq!(r.sprites, vec![Sprite::GameOver]);
        assert!(r.texts.iter().any(|t| t == "Press any key to restart"));
    }
}
