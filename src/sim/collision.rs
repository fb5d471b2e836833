//! Player vs platform collision resolution
//!
//! Axis-separated: each overlapping platform is classified as exactly one of
//! top / bottom / left side / right side, guarded by the sign of the player's
//! velocity so a fast probe cannot be pushed out the wrong way.

use glam::Vec2;

use super::platform::{Platform, PlatformId};
use super::player::Player;
use super::rect::Rect;

/// Which face of the platform the probe hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionSide {
    /// Landed on the platform
    Top,
    /// Bumped the platform from below
    Bottom,
    /// Walked into the platform's left face
    Left,
    /// Walked into the platform's right face
    Right,
}

#[inline]
fn within(value: f32, lo: f32, hi: f32) -> bool {
    value >= lo && value <= hi
}

/// Classify an overlap between `probe` (moving at `vel`) and `platform`
pub fn classify(probe: &Rect, vel: Vec2, platform: &Rect) -> Option<CollisionSide> {
    if vel.y >= 0.0 && within(probe.bottom(), platform.top(), platform.bottom()) {
        Some(CollisionSide::Top)
    } else if vel.y < 0.0 && within(probe.top(), platform.top(), platform.bottom()) {
        Some(CollisionSide::Bottom)
    } else if vel.x >= 0.0
        && within(probe.right(), platform.left(), platform.right())
        && probe.overlaps_vertically(platform)
    {
        Some(CollisionSide::Left)
    } else if vel.x <= 0.0
        && within(probe.left(), platform.left(), platform.right())
        && probe.overlaps_vertically(platform)
    {
        Some(CollisionSide::Right)
    } else {
        None
    }
}

/// Push the player out of every overlapping platform. Stops at the first
/// landing. Returns the platform landed on, if any.
pub fn resolve_platform_collisions(player: &mut Player, platforms: &[Platform]) -> Option<PlatformId> {
    player.sync_probe();

    let mut landed = None;
    for platform in platforms {
        if !player.probe.overlaps(&platform.rect) {
            continue;
        }

        let side = classify(&player.probe, player.vel, &platform.rect);
        match side {
            Some(CollisionSide::Top) => {
                player.probe.set_bottom(platform.rect.top());
                player.vel.y = 0.0;
                player.on_ground = true;
                player.double_jump_used = false;
            }
            Some(CollisionSide::Bottom) => {
                player.probe.set_top(platform.rect.bottom());
                player.vel.y = 0.0;
            }
            Some(CollisionSide::Left) => {
                player.probe.set_right(platform.rect.left());
                player.vel.x = 0.0;
            }
            Some(CollisionSide::Right) => {
                player.probe.set_left(platform.rect.right());
                player.vel.x = 0.0;
            }
            None => {}
        }

        player.sync_rect_to_probe();

        if side == Some(CollisionSide::Top) {
            player.riding = Some(platform.id);
            landed = Some(platform.id);
            break;
        }
    }

    release_if_walked_off(player, platforms);
    landed
}

/// Drop ground contact when the ridden platform no longer sits under the sprite
fn release_if_walked_off(player: &mut Player, platforms: &[Platform]) {
    let Some(id) = player.riding else { return };
    if player.is_jumping {
        return;
    }
    let still_under = platforms
        .iter()
        .find(|p| p.id == id)
        .is_some_and(|p| p.rect.overlaps_horizontally(&player.rect));
    if !still_under {
        log::debug!("Player walked off platform {}", id.0);
        player.leave_ground();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::platform::BlockKind;

    fn platform_at(id: u32, rect: Rect) -> Platform {
        Platform {
            id: PlatformId(id),
            rect,
            blocks: vec![BlockKind::Brick; (rect.w / BLOCK_SIZE) as usize],
            is_start: false,
            scored: false,
        }
    }

    /// A 100×20 platform whose top is 5px above the probe bottom
    fn platform_under(player: &Player, id: u32) -> Platform {
        let top = player.probe.bottom() - 5.0;
        platform_at(id, Rect::new(player.rect.center_x() - 50.0, top, 100.0, 20.0))
    }

    #[test]
    fn test_landing_snaps_and_grounds() {
        let mut player = Player::new(0);
        player.vel.y = 5.0;
        player.double_jump_used = true;
        let platforms = vec![platform_under(&player, 3)];

        let landed = resolve_platform_collisions(&mut player, &platforms);

        assert_eq!(landed, Some(PlatformId(3)));
        assert!(player.on_ground);
        assert_eq!(player.vel.y, 0.0);
        assert!(!player.double_jump_used);
        assert_eq!(player.riding, Some(PlatformId(3)));
        assert_eq!(player.probe.bottom(), platforms[0].rect.top());
        assert_eq!(player.rect.bottom(), platforms[0].rect.top() + PROBE_OFFSET);
    }

    #[test]
    fn test_head_bump() {
        let mut player = Player::new(0);
        player.vel.y = -8.0;
        let rect = Rect::new(
            player.rect.center_x() - 50.0,
            player.probe.top() - 15.0,
            100.0,
            20.0,
        );
        let platforms = vec![platform_at(1, rect)];

        let landed = resolve_platform_collisions(&mut player, &platforms);

        assert_eq!(landed, None);
        assert_eq!(player.vel.y, 0.0);
        assert_eq!(player.probe.top(), rect.bottom());
        assert!(!player.on_ground);
    }

    #[test]
    fn test_side_hits_zero_horizontal_velocity() {
        let mut player = Player::new(0);
        player.vel = Vec2::new(4.0, -1.0);
        // Block whose left face cuts into the probe's right edge, level with the torso
        let block = Rect::new(player.probe.right() - 3.0, player.probe.top() + 10.0, 20.0, 20.0);
        let probe = player.probe;
        assert_eq!(classify(&probe, player.vel, &block), Some(CollisionSide::Left));

        let platforms = vec![platform_at(1, block)];
        resolve_platform_collisions(&mut player, &platforms);
        assert_eq!(player.vel.x, 0.0);
        assert_eq!(player.probe.right(), block.left());
    }

    #[test]
    fn test_right_face_when_moving_left() {
        let probe = Rect::new(100.0, 100.0, 30.0, 41.0);
        let block = Rect::new(80.0, 110.0, 23.0, 20.0);
        assert_eq!(
            classify(&probe, Vec2::new(-3.0, -1.0), &block),
            Some(CollisionSide::Right)
        );
    }

    #[test]
    fn test_landing_stops_scan() {
        let mut player = Player::new(0);
        player.vel.y = 5.0;
        let first = platform_under(&player, 1);
        let second = platform_under(&player, 2);
        let platforms = vec![first, second];

        let landed = resolve_platform_collisions(&mut player, &platforms);
        assert_eq!(landed, Some(PlatformId(1)));
    }

    #[test]
    fn test_probe_stays_aligned_after_resolution() {
        let mut player = Player::new(0);
        player.vel.y = 5.0;
        let platforms = vec![platform_under(&player, 1)];
        resolve_platform_collisions(&mut player, &platforms);

        let offset = player.rect.midbottom() - player.probe.midbottom();
        assert_eq!(offset, Vec2::new(0.0, PROBE_OFFSET));
    }

    #[test]
    fn test_walking_off_edge_releases_ground() {
        let mut player = Player::new(0);
        player.on_ground = true;
        player.riding = Some(PlatformId(9));
        let far = platform_at(9, Rect::new(0.0, 900.0, 40.0, 20.0));

        resolve_platform_collisions(&mut player, &[far]);
        assert!(!player.on_ground);
        assert_eq!(player.riding, None);
    }

    #[test]
    fn test_ridden_platform_gone_releases_ground() {
        let mut player = Player::new(0);
        player.on_ground = true;
        player.riding = Some(PlatformId(9));

        resolve_platform_collisions(&mut player, &[]);
        assert!(!player.on_ground);
    }

    #[test]
    fn test_standing_on_platform_keeps_ground() {
        let mut player = Player::new(0);
        player.on_ground = true;
        player.riding = Some(PlatformId(4));
        let under = platform_at(
            4,
            Rect::new(player.rect.center_x() - 50.0, player.probe.bottom(), 100.0, 20.0),
        );

        resolve_platform_collisions(&mut player, &[under]);
        assert!(player.on_ground);
        assert_eq!(player.riding, Some(PlatformId(4)));
    }
}
