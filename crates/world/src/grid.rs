//! Grid module - static world storage
//!
//! Per-cell tile appearance and obstacle flags in a flat row-major array.
//! Built once by the map loader and immutable afterwards; the simulation
//! only ever reads it.
//!
//! Obstacle queries are bounds-checked and answer "no obstacle" outside the
//! map, so the collision step's fixed 5x5 neighborhood scan never needs its
//! own bounds handling.

use tui_crawl_types::CellCoord;

use crate::autotile::TileSpan;

/// The static world: tile appearance plus obstacle flag per cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    width: i32,
    height: i32,
    /// Appearance per cell, row-major (row * width + col).
    tiles: Vec<TileSpan>,
    /// Obstacle flag per cell, same layout.
    obstacles: Vec<bool>,
}

impl Grid {
    /// Build a grid from pre-classified cells in row-major order.
    ///
    /// The map loader guarantees `cells.len() == width * height`.
    pub(crate) fn from_cells(width: i32, height: i32, cells: Vec<(TileSpan, bool)>) -> Self {
        debug_assert_eq!(cells.len(), (width * height) as usize);
        let mut tiles = Vec::with_capacity(cells.len());
        let mut obstacles = Vec::with_capacity(cells.len());
        for (span, obstacle) in cells {
            tiles.push(span);
            obstacles.push(obstacle);
        }
        Self {
            width,
            height,
            tiles,
            obstacles,
        }
    }

    /// Calculate flat index from (col, row); `None` when out of bounds.
    #[inline(always)]
    fn index(&self, col: i32, row: i32) -> Option<usize> {
        if col < 0 || col >= self.width || row < 0 || row >= self.height {
            return None;
        }
        Some((row as usize) * (self.width as usize) + (col as usize))
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Appearance frames of a cell; `None` when out of bounds.
    pub fn appearance(&self, col: i32, row: i32) -> Option<&TileSpan> {
        self.index(col, row).map(|i| &self.tiles[i])
    }

    /// Whether a cell blocks movement. Out-of-bounds cells do not.
    pub fn is_obstacle(&self, col: i32, row: i32) -> bool {
        self.index(col, row)
            .map(|i| self.obstacles[i])
            .unwrap_or(false)
    }

    /// Convenience overload for cell coordinates.
    pub fn is_obstacle_at(&self, cell: CellCoord) -> bool {
        self.is_obstacle(cell.col, cell.row)
    }
}
