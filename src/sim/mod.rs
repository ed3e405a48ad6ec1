//! Deterministic platformer physics
//!
//! All simulation logic lives here. This module must stay pure and
//! deterministic:
//! - No rendering or platform dependencies
//! - Stable tile iteration order (the collision tie-break depends on it)
//! - Inputs are never mutated; each update returns a new player value

pub mod collision;
pub mod grid;
pub mod state;
pub mod update;

pub use collision::{Resolution, integrate_velocity, resolve};
pub use grid::{GridIndex, OutOfBounds, Tile, TileGrid};
pub use state::{Aabb, Player};
pub use update::update_player;
