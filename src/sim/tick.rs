//! Per-frame simulation step
//!
//! Frame order: commands → spawn → scroll → player physics → collisions →
//! scoring → culling → fall check.

use super::collision::resolve_platform_collisions;
use super::platform::{Background, Entity, Platform, PlatformId, cull_below};
use super::player::Facing;
use super::spawner::scroll_speed;
use super::state::{GameEvent, GamePhase, GameState};
use crate::audio::SoundEffect;
use crate::consts::*;
use rand::Rng;

/// Input commands for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Monotonic clock reading (ms)
    pub now_ms: u64,
    /// Jump key pressed this frame
    pub jump: bool,
    /// Dash key pressed this frame
    pub dash: bool,
    /// Left held
    pub move_left: bool,
    /// Right held
    pub move_right: bool,
    /// Any key pressed this frame (restart trigger)
    pub any_key: bool,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    let now = input.now_ms;

    match state.world.phase {
        GamePhase::AwaitingRestart => {
            if input.any_key {
                state.restart(now);
            }
            return;
        }
        GamePhase::Playing => apply_commands(state, input),
        GamePhase::Dying => {}
    }

    let survival = now.saturating_sub(state.world.death_epoch_ms);
    state.world.survival_ms = survival;

    spawn(state, survival);

    state.world.scroll_speed = scroll_speed(survival);
    let speed = state.world.scroll_speed;
    for background in &mut state.backgrounds {
        background.update(speed);
    }
    for platform in &mut state.platforms {
        platform.update(speed);
    }

    let ride_delta = state
        .player
        .riding
        .and_then(|id| state.platform(id))
        .map_or(0.0, |p| p.fall_delta(speed));
    let game_over = state.world.phase != GamePhase::Playing;
    let ready_to_restart = state.player.update(now, ride_delta, game_over);

    if !game_over {
        resolve_platform_collisions(&mut state.player, &state.platforms);
        award_score(state);
    }

    cull(state);

    match state.world.phase {
        GamePhase::Playing if state.player.rect.top() > SCREEN_HEIGHT + FALL_MARGIN => {
            state.set_phase(GamePhase::Dying);
            state.play_random(&SoundEffect::DEATHS);
        }
        GamePhase::Dying if ready_to_restart => {
            state.set_phase(GamePhase::AwaitingRestart);
        }
        _ => {}
    }
}

fn apply_commands(state: &mut GameState, input: &TickInput) {
    if input.jump {
        if state.player.jump().is_some() {
            state.play_random(&SoundEffect::JUMPS);
        }
        // The start platform disappears on the first jump press, one way
        if let Some(id) = state.start_platform.take() {
            state.remove_platform(id);
            log::debug!("Start platform removed");
        }
    }
    if input.dash && state.player.dash(input.now_ms) {
        state.events.push(GameEvent::Sound(SoundEffect::DASH));
    }
    if input.move_left {
        state.player.walk(Facing::Left);
    }
    if input.move_right {
        state.player.walk(Facing::Right);
    }
}

fn spawn(state: &mut GameState, survival: u64) {
    let orders = state.spawner.poll(survival, &mut state.rng);

    if orders.platform {
        let id = PlatformId(state.next_entity_id());
        let blocks = state
            .rng
            .random_range(MIN_PLATFORM_BLOCKS..=MAX_PLATFORM_BLOCKS);
        let platform = Platform::spawn(id, blocks, &mut state.rng);
        log::debug!(
            "Spawned platform {} ({} blocks at x={}) after {} ms",
            id.0,
            blocks,
            platform.rect.x,
            survival
        );
        state.platforms.push(platform);
        spawn_cloud(state);
    }
    if orders.cloud {
        spawn_cloud(state);
    }
}

fn spawn_cloud(state: &mut GameState) {
    let id = state.next_entity_id();
    let cloud = Background::spawn(id, &mut state.rng);
    state.backgrounds.push(cloud);
}

fn award_score(state: &mut GameState) {
    let mut gained = 0;
    for platform in &mut state.platforms {
        gained += platform.handle_collision_with_player(&state.player);
    }
    if gained > 0 {
        state.world.score += gained;
        state.events.push(GameEvent::Scored {
            score: state.world.score,
        });
        log::debug!("Score {}", state.world.score);
    }
}

fn cull(state: &mut GameState) {
    let limit = SCREEN_HEIGHT + FALL_MARGIN;
    if let Some(id) = state.player.riding {
        let gone = state
            .platform(id)
            .is_none_or(|p| p.bounding_box().top() > limit);
        if gone {
            state.player.leave_ground();
        }
    }
    cull_below(&mut state.platforms, limit);
    cull_below(&mut state.backgrounds, SCREEN_HEIGHT);
}
