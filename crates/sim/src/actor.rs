//! Actor module - mobile creatures and props
//!
//! Actors are created once at map load (player first, then map spawns) and
//! never destroyed. Position and velocity are continuous pixel values; the
//! grid only enters the picture through the collision step.

use tui_crawl_types::{Bounds2, CellCoord, MoveIntent, Role, TileIndex, Vec2, CELL_SIZE};
use tui_crawl_world::autotile::{single, tile_span, TileSpan};

/// The "solid" feet rectangle shared by all actors, relative to actor
/// position. Narrower and much shorter than the full sprite so actors can
/// overlap walls with their upper body, top-down style.
pub const SOLID_SHAPE: Bounds2 = Bounds2::new(
    Vec2::new(CELL_SIZE * (1.0 / 8.0), CELL_SIZE * (6.0 / 8.0)),
    Vec2::new(CELL_SIZE * (6.0 / 8.0), CELL_SIZE * (2.0 / 8.0)),
);

/// A mobile or placed entity in the world.
#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    pub role: Role,
    /// Top-left sprite corner in world pixels.
    pub position: Vec2,
    pub velocity: Vec2,
    /// Externally supplied movement intent; stays zero for actors with no
    /// intent source (everything but the player, for now).
    pub intent: MoveIntent,
    /// Sprite frame cycle on the prop sheet.
    pub appearance: TileSpan,
    /// Current index into `appearance`.
    pub frame: usize,
    /// Flat actors (ladders) draw beneath everything else.
    pub flat: bool,
}

impl Actor {
    /// Create an actor of the given role at a cell's top-left corner.
    pub fn spawn(role: Role, cell: CellCoord) -> Self {
        let (appearance, flat) = appearance_for(role);
        Self {
            role,
            position: cell.origin(),
            velocity: Vec2::ZERO,
            intent: MoveIntent::ZERO,
            appearance,
            frame: 0,
            flat,
        }
    }

    /// Step the sprite cycle by one frame, wrapping.
    pub fn advance_frame(&mut self) {
        self.frame = (self.frame + 1) % self.appearance.len();
    }

    /// The current sprite sheet index.
    pub fn tile(&self) -> TileIndex {
        self.appearance[self.frame]
    }
}

/// Prop-sheet appearance cycle and flatness per role.
fn appearance_for(role: Role) -> (TileSpan, bool) {
    let walk = TileIndex::new(1, 0);
    match role {
        Role::Player => (tile_span(TileIndex::new(0, 8), walk, 4), false),
        Role::Priest => (tile_span(TileIndex::new(0, 9), walk, 4), false),
        Role::Skeleton => (tile_span(TileIndex::new(0, 5), walk, 4), false),
        Role::Ladder => (single(TileIndex::new(3, 0)), true),
        Role::Treasure => (single(TileIndex::new(4, 3)), false),
    }
}
