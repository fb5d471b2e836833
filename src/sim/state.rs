//! Game state and core simulation types
//!
//! Everything one life of the game needs lives in `GameState`; `restart`
//! rebuilds it deterministically.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::platform::{Background, Platform, PlatformId};
use super::player::Player;
use super::spawner::Spawner;
use crate::audio::SoundEffect;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Player in control
    #[default]
    Playing,
    /// Player fell out of the world and is tumbling off screen
    Dying,
    /// Fall finished, waiting for any key
    AwaitingRestart,
}

/// Side effects produced by a tick, drained by the host each frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Fire-and-forget sound
    Sound(SoundEffect),
    /// A platform was touched for the first time
    Scored { score: u64 },
    /// The phase changed
    PhaseChanged { from: GamePhase, to: GamePhase },
    /// A full reset happened
    Restarted,
}

/// Per-life global values the whole world reads
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldState {
    /// Platforms first touched this life
    pub score: u64,
    /// Platform descent multiplier
    pub scroll_speed: f32,
    /// Clock reading when this life started (ms)
    pub death_epoch_ms: u64,
    /// Time survived this life (ms)
    pub survival_ms: u64,
    pub phase: GamePhase,
}

impl WorldState {
    pub fn new(now_ms: u64) -> Self {
        Self {
            score: 0,
            scroll_speed: 1.0,
            death_epoch_ms: now_ms,
            survival_ms: 0,
            phase: GamePhase::Playing,
        }
    }
}

/// Complete game state (deterministic given seed and inputs)
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    #[serde(skip)]
    pub rng: Pcg32,
    pub world: WorldState,
    pub spawner: Spawner,
    pub player: Player,
    /// Live platforms in spawn order
    pub platforms: Vec<Platform>,
    /// Live clouds in spawn order
    pub backgrounds: Vec<Background>,
    /// Start platform handle until the first jump removes it
    pub start_platform: Option<PlatformId>,
    /// Events produced since the last drain
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new game state with the given seed, starting the clock at `now_ms`
    pub fn new(seed: u64, now_ms: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let spawner = Spawner::new(&mut rng);
        let mut state = Self {
            seed,
            rng,
            world: WorldState::new(now_ms),
            spawner,
            player: Player::new(now_ms),
            platforms: Vec::new(),
            backgrounds: Vec::new(),
            start_platform: None,
            events: Vec::new(),
            next_id: 1,
        };
        state.spawn_start_platform();
        state
    }

    /// Full reset after game over. The RNG stream carries on so every life differs.
    pub fn restart(&mut self, now_ms: u64) {
        let from = self.world.phase;
        self.world = WorldState::new(now_ms);
        self.spawner = Spawner::new(&mut self.rng);
        self.player = Player::new(now_ms);
        self.platforms.clear();
        self.backgrounds.clear();
        self.start_platform = None;
        self.spawn_start_platform();

        self.events.push(GameEvent::PhaseChanged {
            from,
            to: GamePhase::Playing,
        });
        self.events.push(GameEvent::Restarted);
        log::info!("Game restarted at {} ms", now_ms);
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn spawn_start_platform(&mut self) {
        let id = PlatformId(self.next_entity_id());
        let platform = Platform::start(id, &self.player, &mut self.rng);
        self.platforms.push(platform);
        self.start_platform = Some(id);
    }

    pub fn platform(&self, id: PlatformId) -> Option<&Platform> {
        self.platforms.iter().find(|p| p.id == id)
    }

    /// Remove a platform, detaching the player if it was standing on it
    pub fn remove_platform(&mut self, id: PlatformId) -> Option<Platform> {
        let index = self.platforms.iter().position(|p| p.id == id)?;
        if self.player.riding == Some(id) {
            self.player.leave_ground();
        }
        Some(self.platforms.remove(index))
    }

    /// Pick one sound uniformly from `choices` and queue it
    pub fn play_random(&mut self, choices: &[SoundEffect]) {
        if choices.is_empty() {
            return;
        }
        let effect = choices[self.rng.random_range(0..choices.len())];
        self.events.push(GameEvent::Sound(effect));
    }

    pub fn set_phase(&mut self, to: GamePhase) {
        let from = self.world.phase;
        if from == to {
            return;
        }
        self.world.phase = to;
        self.events.push(GameEvent::PhaseChanged { from, to });
        log::info!("Phase {:?} -> {:?} (score {})", from, to, self.world.score);
    }

    /// Take the events produced since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
