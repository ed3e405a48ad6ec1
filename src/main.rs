//! Headless demo: generate a seeded level, drop the player in and run a few
//! seconds of simulation with scripted input.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use tilestep::config::PhysicsConfig;
use tilestep::sim::{Player, TileGrid, update_player};

const DT: f32 = 1.0 / 60.0;
const FRAMES: u32 = 600;

fn main() {
    env_logger::init();
    log::info!("tilestep demo starting");

    let cfg = PhysicsConfig::default();
    let mut rng = Pcg32::seed_from_u64(7);
    let grid = generate_level(&cfg, &mut rng);

    let mut player = Player::new(cfg.tile_size * Vec2::new(2.0, 2.0), cfg.player_size);

    for frame in 0..FRAMES {
        // Hop up-right every two seconds once grounded; gravity does the rest.
        let input = if frame % 120 == 0 && player.on_ground {
            Vec2::new(cfg.max_speed * 0.4, -cfg.max_speed * 0.8)
        } else {
            Vec2::ZERO
        };

        player = match update_player(&player, input, &grid, DT, &cfg) {
            Ok(next) => next,
            Err(err) => {
                log::error!("frame {frame}: {err}");
                return;
            }
        };

        if frame % 60 == 0 {
            log::info!(
                "t={:>4.1}s pos=({:>6.1}, {:>6.1}) vel=({:>5.1}, {:>5.1}) grounded={}",
                frame as f32 * DT,
                player.rect.pos.x,
                player.rect.pos.y,
                player.velocity.x,
                player.velocity.y,
                player.on_ground,
            );
        }
    }

    log::info!("demo done after {FRAMES} frames");
}

/// Solid floor plus a scattering of ledges; deterministic for a given seed.
fn generate_level(cfg: &PhysicsConfig, rng: &mut Pcg32) -> TileGrid {
    let mut grid = TileGrid::new(cfg.grid_width, cfg.grid_height, cfg.tile_size);

    for x in 0..cfg.grid_width {
        grid.fill(x, cfg.grid_height - 1);
    }
    for _ in 0..24 {
        let x = rng.random_range(0..cfg.grid_width);
        let y = rng.random_range(4..cfg.grid_height - 2);
        grid.fill(x, y);
    }
    grid
}
