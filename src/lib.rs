//! tilestep - per-frame physics for a tile-grid 2D platformer
//!
//! Core modules:
//! - `sim`: deterministic physics (velocity integration, grid queries,
//!   axis-separated collision resolution)
//! - `config`: injected tuning constants
//!
//! The one public operation is [`sim::update_player`]: it takes the prior
//! player state, an input velocity, the level's tile grid and a frame delta,
//! and returns a new player state. The core never mutates its inputs and
//! holds no state of its own, so it can be called repeatedly and tested in
//! isolation.
//!
//! Coordinates are y-down: gravity has positive y, "moving down" means
//! `velocity.y > 0`.

pub mod config;
pub mod sim;

pub use config::PhysicsConfig;
pub use sim::{Aabb, OutOfBounds, Player, Tile, TileGrid, update_player};
