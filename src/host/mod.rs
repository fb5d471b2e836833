//! Host abstraction layer
//!
//! Handles the outside world the game loop consumes:
//! - Time (monotonic ms clock and frame-rate governor)
//! - Input events and held keys

pub mod autopilot;
pub mod clock;

pub use autopilot::AutoPilot;
pub use clock::{FixedStepClock, SystemClock};

use crate::sim::{GameState, TickInput};

/// Keys the game distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Z,
    X,
    /// Anything else; still counts for "press any key"
    Other,
}

/// Discrete input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    KeyDown(Key),
}

/// Source of player input
pub trait InputSource {
    /// Events since the last poll
    fn poll_events(&mut self) -> Vec<InputEvent>;
    /// Whether a key is currently held
    fn is_key_held(&self, key: Key) -> bool;
    /// Look at the state before polling. Only computer players need this.
    fn observe(&mut self, _state: &GameState) {}
}

/// Monotonic time source
pub trait Clock {
    fn now_millis(&self) -> u64;
    /// Block until the next frame boundary for `target_fps`
    fn frame_delay(&mut self, target_fps: u32);
}

/// Translate this frame's events and held keys into simulation commands.
/// Returns `None` when a quit was requested.
pub fn collect_input(now_ms: u64, input: &mut dyn InputSource) -> Option<TickInput> {
    let mut tick = TickInput {
        now_ms,
        ..Default::default()
    };
    for event in input.poll_events() {
        match event {
            InputEvent::Quit => return None,
            InputEvent::KeyDown(key) => {
                tick.any_key = true;
                match key {
                    Key::Z | Key::Up => tick.jump = true,
                    Key::X => tick.dash = true,
                    _ => {}
                }
            }
        }
    }
    tick.move_left = input.is_key_held(Key::Left);
    tick.move_right = input.is_key_held(Key::Right);
    Some(tick)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Script {
        events: Vec<InputEvent>,
        held: Vec<Key>,
    }

    impl InputSource for Script {
        fn poll_events(&mut self) -> Vec<InputEvent> {
            std::mem::take(&mut self.events)
        }

        fn is_key_held(&self, key: Key) -> bool {
            self.held.contains(&key)
        }
    }

    #[test]
    fn test_key_bindings() {
        let mut script = Script {
            events: vec![InputEvent::KeyDown(Key::Up), InputEvent::KeyDown(Key::X)],
            held: vec![Key::Left],
        };
        let tick = collect_input(10, &mut script).unwrap();
        assert!(tick.jump && tick.dash && tick.any_key && tick.move_left);
        assert!(!tick.move_right);
        assert_eq!(tick.now_ms, 10);
    }

    #[test]
    fn test_other_key_only_counts_as_any_key() {
        let mut script = Script {
            events: vec![InputEvent::KeyDown(Key::Other)],
            held: vec![],
        };
        let tick = collect_input(0, &mut script).unwrap();
        assert!(tick.any_key);
        assert!(!tick.jump && !tick.dash);
    }

    #[test]
    fn test_quit_wins() {
        let mut script = Script {
            events: vec![InputEvent::KeyDown(Key::Z), InputEvent::Quit],
            held: vec![],
        };
        assert!(collect_input(0, &mut script).is_none());
    }
}
