//! Physics tuning constants
//!
//! Everything the sim consumes is injected through [`PhysicsConfig`] rather
//! than read from globals, so tests can vary tile size, gravity and speed
//! caps freely.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Fixed parameters for the physics update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// Edge length of one square tile, in world units.
    pub tile_size: f32,
    /// World width in tiles.
    pub grid_width: i32,
    /// World height in tiles.
    pub grid_height: i32,
    /// Per-frame velocity increment. Not scaled by delta: velocities are in
    /// world units per second, gravity accumulates once per update call.
    pub gravity: Vec2,
    /// Velocity magnitude cap applied after integration.
    pub max_speed: f32,
    /// Player bounding-box size.
    pub player_size: Vec2,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        // 1920-wide screen over 32 columns -> 60-unit tiles, 32x18 world.
        let tile_size = 60.0;
        let max_speed = tile_size - 1.0;
        Self {
            tile_size,
            grid_width: 32,
            grid_height: 18,
            gravity: Vec2::new(0.0, max_speed / 75.0),
            max_speed,
            player_size: Vec2::splat(tile_size * 0.75),
        }
    }
}

impl PhysicsConfig {
    /// World size in world units.
    pub fn world_size(&self) -> Vec2 {
        Vec2::new(self.grid_width as f32, self.grid_height as f32) * self.tile_size
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
