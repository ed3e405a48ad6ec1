//! Player state and rectangle math.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned box, anchored at its top-left corner (y-down coordinates).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Strict overlap test: boxes sharing only an edge do not collide.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// Player state for one frame.
///
/// Treated as an immutable value: the update produces a new `Player` rather
/// than mutating this one, so prior frames stay valid for comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub rect: Aabb,
    pub velocity: Vec2,
    /// True when the most recent update ended with a downward tile contact.
    /// Recomputed every frame, never carried over.
    pub on_ground: bool,
}

impl Player {
    /// Spawn at rest.
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            rect: Aabb::new(pos, size),
            velocity: Vec2::ZERO,
            on_ground: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_basic() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::splat(10.0));
        let b = Aabb::new(Vec2::new(5.0, 5.0), Vec2::splat(10.0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_overlap_separated() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::splat(10.0));
        let b = Aabb::new(Vec2::new(20.0, 0.0), Vec2::splat(10.0));
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_edge_touch_is_not_overlap() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::splat(10.0));
        let right = Aabb::new(Vec2::new(10.0, 0.0), Vec2::splat(10.0));
        let below = Aabb::new(Vec2::new(0.0, 10.0), Vec2::splat(10.0));
        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&below));
    }

    #[test]
    fn test_center() {
        let a = Aabb::new(Vec2::new(10.0, 20.0), Vec2::new(4.0, 8.0));
        assert_eq!(a.center(), Vec2::new(12.0, 24.0));
    }
}
