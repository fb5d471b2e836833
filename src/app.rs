//! Cooperative frame loop
//!
//! One frame: observe → poll input → tick → play sounds → render → wait for
//! the frame boundary. Everything runs on the calling thread; the loop ends
//! when the input source reports a quit.

use crate::audio::{AudioManager, AudioPlayer};
use crate::host::{Clock, InputSource, collect_input};
use crate::renderer::{Renderer, render_frame};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, tick};

/// Game instance holding all state and host collaborators
pub struct App<C: Clock, I: InputSource, R: Renderer, A: AudioPlayer> {
    state: GameState,
    clock: C,
    input: I,
    renderer: R,
    audio: AudioManager<A>,
    target_fps: u32,
    play_music: bool,
    frames: u64,
    lives: u64,
    best_score: u64,
}

impl<C: Clock, I: InputSource, R: Renderer, A: AudioPlayer> App<C, I, R, A> {
    pub fn new(seed: u64, settings: &Settings, clock: C, input: I, renderer: R, audio: A) -> Self {
        let state = GameState::new(seed, clock.now_millis());
        log::info!("Game initialized with seed: {}", seed);
        Self {
            state,
            clock,
            input,
            renderer,
            audio: AudioManager::new(audio, settings),
            target_fps: settings.target_fps,
            play_music: settings.music,
            frames: 0,
            lives: 1,
            best_score: 0,
        }
    }

    /// Run one frame. Returns false once the player asked to quit.
    pub fn step(&mut self) -> bool {
        if self.frames == 0 && self.play_music {
            self.audio.start_music();
        }

        self.input.observe(&self.state);
        let now = self.clock.now_millis();
        let Some(input) = collect_input(now, &mut self.input) else {
            log::info!("Quit requested after {} frames", self.frames);
            return false;
        };

        tick(&mut self.state, &input);

        let events = self.state.drain_events();
        self.audio.handle_events(&events);
        self.track(&events);

        render_frame(&self.state, &mut self.renderer);
        self.clock.frame_delay(self.target_fps);
        self.frames += 1;
        true
    }

    /// Loop until quit or until `max_frames` frames ran. Returns the frame count.
    pub fn run(&mut self, max_frames: Option<u64>) -> u64 {
        while max_frames.is_none_or(|max| self.frames < max) {
            if !self.step() {
                break;
            }
        }
        self.frames
    }

    fn track(&mut self, events: &[GameEvent]) {
        for event in events {
            match event {
                GameEvent::Scored { score } => self.best_score = self.best_score.max(*score),
                GameEvent::Restarted => self.lives += 1,
                _ => {}
            }
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn audio(&self) -> &A {
        self.audio.player()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Lives started, including the current one
    pub fn lives(&self) -> u64 {
        self.lives
    }

    /// Highest score reached in any life this session
    pub fn best_score(&self) -> u64 {
        self.best_score
    }
}
