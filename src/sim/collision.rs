//! Velocity integration and axis-separated collision resolution
//!
//! The resolver moves the player rect one axis at a time, X before Y. The
//! ordering is load-bearing: diagonal motion into a concave corner must stop
//! horizontally first so the vertical pass tests the already-corrected rect.

use glam::Vec2;

use crate::config::PhysicsConfig;
use crate::sim::grid::Tile;
use crate::sim::state::Aabb;

/// Candidate velocity for this frame.
///
/// A nonzero input replaces both prior velocity and gravity outright; there
/// is no additive blending. Gravity is a per-frame increment. The result's
/// magnitude never exceeds `cfg.max_speed`.
pub fn integrate_velocity(prior: Vec2, input: Vec2, cfg: &PhysicsConfig) -> Vec2 {
    let v = if input != Vec2::ZERO {
        input
    } else {
        prior + cfg.gravity
    };
    v.clamp_length_max(cfg.max_speed)
}

/// Outcome of one resolution pass over both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    pub rect: Aabb,
    pub velocity: Vec2,
    pub on_ground: bool,
}

/// Translate `rect` by `velocity * delta` one axis at a time, correcting
/// against the sampled neighbor tiles.
///
/// Each pass stops at the first overlapping tile, so the sampler's iteration
/// order decides which tile wins when several overlap at once. A stationary
/// axis (`velocity` component exactly zero) never snaps.
///
/// Landing (downward contact) zeroes the whole velocity vector, not just the
/// vertical component; an upward head bump zeroes only `velocity.y`. This
/// stick-on-landing asymmetry is kept as observed gameplay behavior.
pub fn resolve(rect: Aabb, velocity: Vec2, delta: f32, tiles: &[Tile]) -> Resolution {
    let mut rect = rect;
    let mut v = velocity;
    let mut on_ground = false;

    // X pass
    rect.pos.x += v.x * delta;
    for tile in tiles {
        if !rect.overlaps(&tile.rect) {
            continue;
        }
        if v.x > 0.0 {
            rect.pos.x = tile.rect.left() - rect.size.x;
            v.x = 0.0;
            break;
        } else if v.x < 0.0 {
            rect.pos.x = tile.rect.right();
            v.x = 0.0;
            break;
        }
    }

    // Y pass, against the rect the X pass produced
    rect.pos.y += v.y * delta;
    for tile in tiles {
        if !rect.overlaps(&tile.rect) {
            continue;
        }
        if v.y > 0.0 {
            rect.pos.y = tile.rect.top() - rect.size.y;
            on_ground = true;
            v = Vec2::ZERO;
            break;
        } else if v.y < 0.0 {
            rect.pos.y = tile.rect.bottom();
            v.y = 0.0;
            break;
        }
    }

    Resolution {
        rect,
        velocity: v,
        on_ground,
    }
}
