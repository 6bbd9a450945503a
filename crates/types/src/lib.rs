//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (world building, simulation, terminal rendering).
//!
//! # Units
//!
//! The world is measured in *pixels*: one map cell is `CELL_SIZE` pixels on a
//! side (a 16 px source tile times the `ASSET_SCALE` upscale). Actor positions
//! and velocities are continuous `f32` pixel values; the map grid is discrete.
//! `CellCoord::containing` is the single bridge between the two and is used
//! both at map-load time and in the per-tick collision step.
//!
//! # Timing constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `ANIMATION_PERIOD` | 15 | Ticks between sprite frame advances |
//! | `MAX_VELOCITY` | 280.0 | Speed cap per axis (px/s) |
//! | `MAX_ACCELERATION` | 1400.0 | Input acceleration (px/s²) |
//! | `DECELERATION` | 1680.0 | Flat per-tick speed decay with no input |

use std::ops::{Add, AddAssign, Mul, Sub};

/// Source tile edge length in sheet pixels.
pub const TILE_SIZE_PX: u32 = 16;

/// Integer upscale factor applied to every sheet.
pub const ASSET_SCALE: u32 = 4;

/// World-space edge length of one map cell, in pixels.
pub const CELL_SIZE: f32 = (TILE_SIZE_PX * ASSET_SCALE) as f32;

/// Fixed timestep interval in milliseconds.
pub const TICK_MS: u32 = 16;

/// Number of ticks between global animation frame advances.
pub const ANIMATION_PERIOD: u32 = 15;

/// Per-axis speed cap in pixels per second.
pub const MAX_VELOCITY: f32 = 280.0;

/// Acceleration applied per axis while movement intent is held (px/s²).
pub const MAX_ACCELERATION: f32 = MAX_VELOCITY * 5.0;

/// Flat per-tick speed decay on axes with no movement intent.
///
/// Deliberately not scaled by the tick delta; at six times the speed cap it
/// stops an actor within a single tick of the input being released.
pub const DECELERATION: f32 = MAX_VELOCITY * 6.0;

/// View size in world pixels.
pub const RESOLUTION: Vec2 = Vec2::new(1280.0, 768.0);

/// Minimum distance kept between the player and the view edge before the
/// camera scrolls.
pub const SCROLL_MARGIN: Vec2 = Vec2::new(300.0, 250.0);

/// Seed for the map-load tile variant chooser. Fixed so a given map text
/// always produces the same world.
pub const MAP_SEED: u32 = 100;

/// 2D vector in continuous pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2::new(0.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

/// Clamp a scalar to a closed interval.
pub fn clamp(x: f32, min: f32, max: f32) -> f32 {
    if x < min {
        min
    } else if x > max {
        max
    } else {
        x
    }
}

/// Axis-aligned rectangle, stored as position + size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds2 {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Bounds2 {
    pub const fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Build from opposite corners.
    pub fn from_min_max(min: Vec2, max: Vec2) -> Self {
        Self {
            pos: min,
            size: max - min,
        }
    }

    pub fn min(&self) -> Vec2 {
        self.pos
    }

    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    /// The same rectangle shifted by `offset`.
    pub fn translated(&self, offset: Vec2) -> Bounds2 {
        Bounds2::new(self.pos + offset, self.size)
    }
}

/// Discrete map cell coordinate (column, row), origin top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellCoord {
    pub col: i32,
    pub row: i32,
}

impl CellCoord {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// The cell containing a continuous world point.
    ///
    /// This is the only pixel-to-cell bridge; the classifier and the
    /// collision step must agree on it.
    pub fn containing(point: Vec2) -> Self {
        Self {
            col: (point.x / CELL_SIZE).floor() as i32,
            row: (point.y / CELL_SIZE).floor() as i32,
        }
    }

    /// World-space position of this cell's top-left corner.
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.col as f32 * CELL_SIZE, self.row as f32 * CELL_SIZE)
    }

    /// World-space rectangle covered by this cell.
    pub fn bounds(&self) -> Bounds2 {
        Bounds2::new(self.origin(), Vec2::new(CELL_SIZE, CELL_SIZE))
    }
}

/// Index into a sprite sheet: (column, row) of a fixed-size tile grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TileIndex {
    pub col: i32,
    pub row: i32,
}

impl TileIndex {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }
}

impl Add for TileIndex {
    type Output = TileIndex;
    fn add(self, rhs: TileIndex) -> TileIndex {
        TileIndex::new(self.col + rhs.col, self.row + rhs.row)
    }
}

/// Which logical sprite sheet a draw operation reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetKind {
    /// Static map tiles (floors, walls, doorways).
    Walls,
    /// Actor sprites and props.
    Props,
}

/// Per-axis movement intent in `{-1, 0, 1}`, sampled once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveIntent {
    pub x: i8,
    pub y: i8,
}

impl MoveIntent {
    pub const ZERO: MoveIntent = MoveIntent { x: 0, y: 0 };

    /// Combine four held-direction flags into an intent vector.
    /// Opposite directions cancel.
    pub fn from_held(left: bool, right: bool, up: bool, down: bool) -> Self {
        let mut intent = MoveIntent::ZERO;
        if left {
            intent.x -= 1;
        }
        if right {
            intent.x += 1;
        }
        if up {
            intent.y -= 1;
        }
        if down {
            intent.y += 1;
        }
        intent
    }

    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }
}

/// What an actor is, independent of where it sits in the actor list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Player,
    Priest,
    Skeleton,
    Ladder,
    Treasure,
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Deferred debug drawing command, collected during a tick and executed by
/// the renderer after the world has been drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    RectOutline { bounds: Bounds2, color: Rgb },
}
