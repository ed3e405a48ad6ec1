//! Tile grid: world-to-cell indexing, bounds checks and neighbor sampling.

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use crate::sim::state::Aabb;

/// Integer (column, row) coordinate into the tile grid.
pub type GridIndex = IVec2;

/// One static solid cell. Tiles never move for the lifetime of a level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub rect: Aabb,
}

/// Precondition violation: the player's center cell left the grid.
///
/// Fatal for the frame. The update deliberately does not clamp or wrap,
/// because an escaped player indicates a logic error upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfBounds {
    pub index: GridIndex,
    pub width: i32,
    pub height: i32,
}

impl std::fmt::Display for OutOfBounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "grid index ({}, {}) outside {}x{} world",
            self.index.x, self.index.y, self.width, self.height
        )
    }
}

impl std::error::Error for OutOfBounds {}

/// Static level geometry: width x height optional tiles.
///
/// Read-only from the sim's perspective; the mutators exist for level
/// construction only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileGrid {
    width: i32,
    height: i32,
    tile_size: f32,
    /// Column-major: cell (x, y) lives at `x * height + y`.
    cells: Vec<Option<Tile>>,
}

impl TileGrid {
    pub fn new(width: i32, height: i32, tile_size: f32) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be positive");
        assert!(tile_size > 0.0, "tile size must be positive");
        Self {
            width,
            height,
            tile_size,
            cells: vec![None; (width * height) as usize],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    fn slot(&self, idx: GridIndex) -> usize {
        (idx.x * self.height + idx.y) as usize
    }

    /// Place a solid tile filling cell `(x, y)`.
    pub fn fill(&mut self, x: i32, y: i32) {
        let idx = GridIndex::new(x, y);
        assert!(self.contains(idx), "fill outside grid: ({x}, {y})");
        let rect = Aabb::new(
            Vec2::new(x as f32, y as f32) * self.tile_size,
            Vec2::splat(self.tile_size),
        );
        let slot = self.slot(idx);
        self.cells[slot] = Some(Tile { rect });
    }

    /// Empty cell `(x, y)`.
    pub fn clear(&mut self, x: i32, y: i32) {
        let idx = GridIndex::new(x, y);
        assert!(self.contains(idx), "clear outside grid: ({x}, {y})");
        let slot = self.slot(idx);
        self.cells[slot] = None;
    }

    pub fn get(&self, idx: GridIndex) -> Option<Tile> {
        if self.contains(idx) {
            self.cells[self.slot(idx)]
        } else {
            None
        }
    }

    pub fn contains(&self, idx: GridIndex) -> bool {
        idx.x >= 0 && idx.x < self.width && idx.y >= 0 && idx.y < self.height
    }

    /// Map a world-space point to its cell by flooring per component.
    /// A point exactly on a cell boundary belongs to the higher cell.
    pub fn index_of(&self, point: Vec2) -> GridIndex {
        GridIndex::new(
            (point.x / self.tile_size).floor() as i32,
            (point.y / self.tile_size).floor() as i32,
        )
    }

    /// Checked indexer: fails when the point's cell lies outside the grid.
    pub fn checked_index_of(&self, point: Vec2) -> Result<GridIndex, OutOfBounds> {
        let idx = self.index_of(point);
        if self.contains(idx) {
            Ok(idx)
        } else {
            Err(OutOfBounds {
                index: idx,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Tiles in the 3x3 block centered on `idx`, clipped to grid bounds,
    /// with empty cells skipped.
    ///
    /// Scan order is part of the collision contract: columns ascending,
    /// rows ascending within a column. The resolver stops at the first
    /// overlapping tile, so this order decides ties.
    pub fn neighbors(&self, idx: GridIndex) -> Vec<Tile> {
        let x0 = (idx.x - 1).max(0);
        let x1 = (idx.x + 1).min(self.width - 1);
        let y0 = (idx.y - 1).max(0);
        let y1 = (idx.y + 1).min(self.height - 1);

        let mut tiles = Vec::with_capacity(9);
        for x in x0..=x1 {
            for y in y0..=y1 {
                if let Some(tile) = self.cells[self.slot(GridIndex::new(x, y))] {
                    tiles.push(tile);
                }
            }
        }
        tiles
    }
}
