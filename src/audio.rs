//! Audio system
//!
//! The game only names sounds; actually producing them is the host's job
//! behind the `AudioPlayer` trait. `AudioManager` owns volume policy and turns
//! simulation events into fire-and-forget playback calls.

use serde::{Deserialize, Serialize};

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect catalogue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundEffect {
    /// Jump voices
    Ya,
    Yo,
    Hoo,
    Hoo2,
    /// Dash voice
    WhooHoo,
    /// Death voices
    Owowowow,
    Owowowow2,
    /// Background music loop
    WalkingThePlains,
}

impl SoundEffect {
    /// Voices a jump picks from
    pub const JUMPS: [SoundEffect; 4] = [
        SoundEffect::Ya,
        SoundEffect::Yo,
        SoundEffect::Hoo,
        SoundEffect::Hoo2,
    ];

    /// Voices a death picks from
    pub const DEATHS: [SoundEffect; 2] = [SoundEffect::Owowowow, SoundEffect::Owowowow2];

    pub const DASH: SoundEffect = SoundEffect::WhooHoo;
    pub const MUSIC: SoundEffect = SoundEffect::WalkingThePlains;

    /// Asset path relative to the game's data directory
    pub fn asset_path(self) -> &'static str {
        match self {
            SoundEffect::Ya => "data/sounds/ya.wav",
            SoundEffect::Yo => "data/sounds/yo.wav",
            SoundEffect::Hoo => "data/sounds/hoo.wav",
            SoundEffect::Hoo2 => "data/sounds/hoo2.wav",
            SoundEffect::WhooHoo => "data/sounds/whoohoo2.wav",
            SoundEffect::Owowowow => "data/sounds/owowowow.wav",
            SoundEffect::Owowowow2 => "data/sounds/owowowow2.wav",
            SoundEffect::WalkingThePlains => "data/sounds/Walking the Plains.mp3",
        }
    }

    pub fn is_music(self) -> bool {
        self == SoundEffect::WalkingThePlains
    }
}

/// Host audio output. Calls never block and never report back.
pub trait AudioPlayer {
    fn play_one_shot(&mut self, effect: SoundEffect, volume: f32);
    fn play_looping(&mut self, effect: SoundEffect, volume: f32);
}

/// Audio manager for the game
pub struct AudioManager<P: AudioPlayer> {
    player: P,
    master_volume: f32,
    sfx_volume: f32,
    music_volume: f32,
    muted: bool,
    music_started: bool,
}

impl<P: AudioPlayer> AudioManager<P> {
    pub fn new(player: P, settings: &Settings) -> Self {
        Self {
            player,
            master_volume: settings.master_volume.clamp(0.0, 1.0),
            sfx_volume: settings.sfx_volume.clamp(0.0, 1.0),
            music_volume: settings.music_volume.clamp(0.0, 1.0),
            muted: settings.muted,
            music_started: false,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self, effect: SoundEffect) -> f32 {
        if self.muted {
            return 0.0;
        }
        let channel = if effect.is_music() {
            self.music_volume
        } else {
            self.sfx_volume
        };
        self.master_volume * channel
    }

    /// Play a sound effect once
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume(effect);
        if vol <= 0.0 {
            return;
        }
        log::trace!("Playing {:?} at {:.2}", effect, vol);
        self.player.play_one_shot(effect, vol);
    }

    /// Start the background loop; later calls do nothing
    pub fn start_music(&mut self) {
        if self.music_started {
            return;
        }
        self.music_started = true;
        let vol = self.effective_volume(SoundEffect::MUSIC);
        log::info!("Starting music at {:.2}", vol);
        self.player.play_looping(SoundEffect::MUSIC, vol);
    }

    /// Play every sound event in a drained event batch
    pub fn handle_events(&mut self, events: &[GameEvent]) {
        for event in events {
            if let GameEvent::Sound(effect) = event {
                self.play(*effect);
            }
        }
    }

    pub fn player(&self) -> &P {
        &self.player
    }
}

/// Audio output that only logs, for headless runs
#[derive(Debug, Default)]
pub struct LogAudio {
    pub played: u64,
}

impl AudioPlayer for LogAudio {
    fn play_one_shot(&mut self, effect: SoundEffect, volume: f32) {
        self.played += 1;
        log::debug!("sfx {} ({:.2})", effect.asset_path(), volume);
    }

    fn play_looping(&mut self, effect: SoundEffect, volume: f32) {
        log::debug!("loop {} ({:.2})", effect.asset_path(), volume);
    }
}
