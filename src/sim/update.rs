//! The per-frame update entry point.

use glam::Vec2;

use crate::config::PhysicsConfig;
use crate::sim::collision::{integrate_velocity, resolve};
use crate::sim::grid::{OutOfBounds, TileGrid};
use crate::sim::state::Player;

/// Advance the player by one frame.
///
/// Integrates velocity, locates the player's center cell, samples the 3x3
/// tile neighborhood and resolves collisions axis by axis. Returns a new
/// `Player`; the prior state is never mutated.
///
/// Fails when the player's center maps to a cell outside the grid. That is
/// a precondition violation (the player escaped the level) and is surfaced
/// to the caller rather than clamped; the frame produced no new state.
pub fn update_player(
    player: &Player,
    input_velocity: Vec2,
    grid: &TileGrid,
    delta: f32,
    cfg: &PhysicsConfig,
) -> Result<Player, OutOfBounds> {
    let velocity = integrate_velocity(player.velocity, input_velocity, cfg);

    let idx = grid
        .checked_index_of(player.rect.center())
        .inspect_err(|err| log::warn!("player out of bounds: {err}"))?;

    let tiles = grid.neighbors(idx);
    let res = resolve(player.rect, velocity, delta, &tiles);

    Ok(Player {
        rect: res.rect,
        velocity: res.velocity,
        on_ground: res.on_ground,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::grid::GridIndex;

    fn cfg() -> PhysicsConfig {
        PhysicsConfig {
            tile_size: 10.0,
            grid_width: 8,
            grid_height: 6,
            gravity: Vec2::new(0.0, 2.0),
            max_speed: 50.0,
            player_size: Vec2::splat(8.0),
        }
    }

    /// Empty 8x6 grid with a solid floor along the bottom row.
    fn floored_grid(cfg: &PhysicsConfig) -> TileGrid {
        let mut grid = TileGrid::new(cfg.grid_width, cfg.grid_height, cfg.tile_size);
        for x in 0..cfg.grid_width {
            grid.fill(x, cfg.grid_height - 1);
        }
        grid
    }

    #[test]
    fn test_out_of_bounds_is_fatal() {
        let cfg = cfg();
        let grid = floored_grid(&cfg);
        let player = Player::new(Vec2::new(-30.0, 10.0), cfg.player_size);

        let err = update_player(&player, Vec2::ZERO, &grid, 1.0 / 60.0, &cfg).unwrap_err();
        assert_eq!(err.index, GridIndex::new(-3, 1));
    }

    #[test]
    fn test_zero_delta_keeps_position() {
        let cfg = cfg();
        let grid = floored_grid(&cfg);
        let player = Player::new(Vec2::new(20.0, 10.0), cfg.player_size);

        let next = update_player(&player, Vec2::ZERO, &grid, 0.0, &cfg).unwrap();
        // Gravity still accumulates into velocity, but nothing moves.
        assert_eq!(next.rect, player.rect);
        assert_eq!(next.velocity, cfg.gravity);
    }

    #[test]
    fn test_input_override_moves_player() {
        let cfg = cfg();
        let grid = floored_grid(&cfg);
        let player = Player {
            velocity: Vec2::new(-5.0, -5.0),
            ..Player::new(Vec2::new(20.0, 10.0), cfg.player_size)
        };

        let input = Vec2::new(6.0, 0.0);
        let next = update_player(&player, input, &grid, 0.5, &cfg).unwrap();
        assert_eq!(next.velocity, input);
        assert_eq!(next.rect.pos, player.rect.pos + input * 0.5);
    }

    #[test]
    fn test_falls_and_lands_on_floor() {
        let cfg = cfg();
        let grid = floored_grid(&cfg);
        let floor_top = (cfg.grid_height - 1) as f32 * cfg.tile_size;
        let mut player = Player::new(Vec2::new(20.0, 10.0), cfg.player_size);

        for _ in 0..600 {
            player = update_player(&player, Vec2::ZERO, &grid, 1.0 / 60.0, &cfg).unwrap();
            if player.on_ground {
                break;
            }
        }

        assert!(player.on_ground);
        assert_eq!(player.rect.bottom(), floor_top);
        assert_eq!(player.velocity, Vec2::ZERO);
    }

    #[test]
    fn test_grounded_flag_recomputed_each_frame() {
        let cfg = cfg();
        // No tiles at all: a previously-grounded player goes airborne.
        let grid = TileGrid::new(cfg.grid_width, cfg.grid_height, cfg.tile_size);
        let player = Player {
            on_ground: true,
            ..Player::new(Vec2::new(20.0, 10.0), cfg.player_size)
        };

        let next = update_player(&player, Vec2::ZERO, &grid, 1.0 / 60.0, &cfg).unwrap();
        assert!(!next.on_ground);
    }
}
