//! End-to-end frame scenarios through the public simulation API

use only_jump::audio::{LogAudio, SoundEffect};
use only_jump::consts::*;
use only_jump::host::{AutoPilot, FixedStepClock, InputSource};
use only_jump::renderer::LogRenderer;
use only_jump::sim::{
    GameEvent, GamePhase, GameState, Platform, PlatformId, TickInput, tick,
};
use only_jump::{App, Settings};

fn at(now_ms: u64) -> TickInput {
    TickInput {
        now_ms,
        ..Default::default()
    }
}

fn any_key(now_ms: u64) -> TickInput {
    TickInput {
        now_ms,
        any_key: true,
        ..Default::default()
    }
}

fn without_start_platform(state: &mut GameState) {
    if let Some(id) = state.start_platform.take() {
        state.remove_platform(id);
    }
}

/// Drive a fresh state into the restart prompt by dropping the player out of the world
fn fall_to_restart_prompt(state: &mut GameState, mut now: u64) -> (u64, Vec<GameEvent>) {
    state.player.rect.set_top(SCREEN_HEIGHT + FALL_MARGIN + 1.0);
    let mut events = Vec::new();
    while state.world.phase != GamePhase::AwaitingRestart {
        now += 16;
        tick(state, &at(now));
        events.extend(state.drain_events());
        assert!(now < 60_000, "dying player never reached the restart prompt");
    }
    (now, events)
}

#[test]
fn test_landing_on_platform_under_falling_player() {
    let mut state = GameState::new(21, 0);
    without_start_platform(&mut state);

    let id = PlatformId(state.next_entity_id());
    let mut platform = Platform::spawn(id, 5, &mut state.rng);
    platform.rect.set_midbottom(state.player.rect.midbottom());
    // Top two pixels above the probe so the frame's scroll brings it level
    platform.rect.set_top(state.player.probe.bottom() - 2.0);
    platform.scored = true;
    state.platforms.push(platform);
    state.player.vel.y = 5.0;

    tick(&mut state, &at(16));

    assert!(state.player.on_ground);
    assert_eq!(state.player.vel.y, 0.0);
    assert_eq!(state.player.riding, Some(id));
    assert!(!state.player.double_jump_used);
    assert_eq!(state.world.score, 0);
}

#[test]
fn test_first_touch_scores_once() {
    let mut state = GameState::new(21, 0);
    without_start_platform(&mut state);
    let id = PlatformId(state.next_entity_id());
    let mut platform = Platform::spawn(id, 5, &mut state.rng);
    platform.rect.set_top(state.player.probe.bottom() - 2.0);
    platform.rect.x = state.player.rect.center_x() - platform.rect.w / 2.0;
    state.platforms.push(platform);
    state.player.vel.y = 5.0;

    tick(&mut state, &at(16));
    assert_eq!(state.world.score, 1);
    for f in 2..20 {
        tick(&mut state, &at(f * 16));
    }
    assert_eq!(state.world.score, 1);
    let scored = state
        .drain_events()
        .into_iter()
        .filter(|e| matches!(e, GameEvent::Scored { .. }))
        .count();
    assert_eq!(scored, 1);
}

#[test]
fn test_fall_triggers_single_death() {
    let mut state = GameState::new(8, 0);
    tick(&mut state, &at(16));
    state.drain_events();

    let (_, events) = fall_to_restart_prompt(&mut state, 16);

    let deaths = events
        .iter()
        .filter(|e| matches!(e, GameEvent::Sound(s) if SoundEffect::DEATHS.contains(s)))
        .count();
    let into_dying = events
        .iter()
        .filter(|e| {
            matches!(
                e,
                GameEvent::PhaseChanged {
                    to: GamePhase::Dying,
                    ..
                }
            )
        })
        .count();
    assert_eq!(deaths, 1);
    assert_eq!(into_dying, 1);
    assert!(state.player.is_dead);
    assert!(state.player.rect.top() > SCREEN_HEIGHT + DEATH_FALL_MARGIN);
}

#[test]
fn test_restart_resets_everything() {
    let mut state = GameState::new(8, 0);
    for f in 1..300 {
        tick(&mut state, &at(f * 16));
    }
    state.world.score = 7;
    let (now, _) = fall_to_restart_prompt(&mut state, 300 * 16);
    assert!(state.world.scroll_speed > 1.0);

    // A frame without input keeps waiting
    tick(&mut state, &at(now + 16));
    assert_eq!(state.world.phase, GamePhase::AwaitingRestart);

    tick(&mut state, &any_key(now + 32));

    assert_eq!(state.world.phase, GamePhase::Playing);
    assert_eq!(state.world.score, 0);
    assert_eq!(state.world.scroll_speed, 1.0);
    assert_eq!(state.world.death_epoch_ms, now + 32);
    assert!(state.backgrounds.is_empty());
    assert_eq!(state.platforms.len(), 1);
    let start = &state.platforms[0];
    assert!(start.is_start);
    assert_eq!(Some(start.id), state.start_platform);
    assert_eq!(start.rect.bottom(), state.player.rect.bottom() + PROBE_OFFSET);
    assert_eq!(start.rect.center_x(), state.player.rect.center_x());
    assert!(!state.player.is_dead);
    assert!(state.drain_events().contains(&GameEvent::Restarted));
}

#[test]
fn test_riding_platform_carries_player_down() {
    let mut state = GameState::new(3, 0);
    tick(&mut state, &at(16));
    // Jump off the start platform, then land on a scrolling one
    tick(
        &mut state,
        &TickInput {
            now_ms: 32,
            jump: true,
            any_key: true,
            ..Default::default()
        },
    );
    let id = PlatformId(state.next_entity_id());
    let mut platform = Platform::spawn(id, 6, &mut state.rng);
    platform.rect.x = state.player.rect.center_x() - platform.rect.w / 2.0;
    platform.rect.set_top(state.player.probe.bottom() + 40.0);
    state.platforms.push(platform);

    let mut now = 32;
    while state.player.riding != Some(id) {
        now += 16;
        tick(&mut state, &at(now));
        assert!(now < 5_000, "player never landed");
    }

    let gap = |s: &GameState| s.platform(id).unwrap().rect.top() - s.player.probe.bottom();
    for _ in 0..30 {
        now += 16;
        tick(&mut state, &at(now));
        assert!(state.player.on_ground);
        assert!(gap(&state).abs() < 1e-3);
    }
}

#[test]
fn test_walking_off_platform_edge_falls() {
    let mut state = GameState::new(3, 0);
    tick(&mut state, &at(16));
    assert!(state.player.on_ground);

    let mut now = 16;
    for _ in 0..40 {
        now += 16;
        tick(
            &mut state,
            &TickInput {
                now_ms: now,
                move_right: true,
                ..Default::default()
            },
        );
    }
    assert!(!state.player.on_ground);
    assert!(state.player.vel.y > 0.0);
}

#[test]
fn test_autopilot_session_is_deterministic() {
    let run = || {
        let mut app = App::new(
            1234,
            &Settings::default(),
            FixedStepClock::default(),
            AutoPilot::with_frame_limit(2_000),
            LogRenderer::default(),
            LogAudio::default(),
        );
        let frames = app.run(None);
        (
            frames,
            app.state().world.score,
            app.state().player.rect,
            app.state().platforms.len(),
        )
    };
    let a = run();
    let b = run();
    assert_eq!(a.0, 2_000);
    assert_eq!(a, b);
}

#[test]
fn test_score_never_drops_within_a_life() {
    let mut state = GameState::new(77, 0);
    let mut pilot = AutoPilot::new();
    let mut last_score = 0;
    let mut now = 0;
    for _ in 0..6_000 {
        now += 16;
        pilot.observe(&state);
        let input =
            only_jump::host::collect_input(now, &mut pilot).expect("autopilot never quits");
        tick(&mut state, &input);
        for event in state.drain_events() {
            if event == GameEvent::Restarted {
                last_score = 0;
            }
        }
        assert!(state.world.score >= last_score);
        last_score = state.world.score;
    }
}
