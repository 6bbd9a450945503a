//! Map module - map text parsing and world construction
//!
//! Parses a rectangular block of map characters into a [`Grid`] plus a spawn
//! list. Leading/trailing blank lines and per-line whitespace are trimmed
//! first; after that every row must have the same length.
//!
//! Loading is all-or-nothing: ragged rows, an empty map, or a missing player
//! marker abort with a [`MapError`] and no partial world is produced.

use thiserror::Error;

use tui_crawl_types::{CellCoord, Role, MAP_SEED};

use crate::autotile::{classify, spawn_role, Neighbors, FLOOR_CHAR};
use crate::grid::Grid;
use crate::rng::SimpleRng;

/// Load-time fatal map errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapError {
    #[error("map is empty after trimming blank lines")]
    Empty,
    #[error("map row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("map has no player spawn marker '@'")]
    MissingPlayerSpawn,
}

/// An actor to create at load time, placed at a cell's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spawn {
    pub role: Role,
    pub cell: CellCoord,
}

/// A fully built world: immutable grid plus the actors it spawns.
///
/// `spawns[0]` is always the player; remaining spawns follow in map scan
/// order (top-to-bottom, left-to-right).
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedMap {
    pub grid: Grid,
    pub spawns: Vec<Spawn>,
}

/// Parse map text into a world, using the fixed variant seed.
pub fn load_map(text: &str) -> Result<LoadedMap, MapError> {
    load_map_seeded(text, MAP_SEED)
}

/// Parse map text with an explicit seed for the floor variant chooser.
pub fn load_map_seeded(text: &str, seed: u32) -> Result<LoadedMap, MapError> {
    let rows: Vec<Vec<char>> = text
        .split('\n')
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(|line| line.chars().collect())
        .collect();

    if rows.is_empty() {
        return Err(MapError::Empty);
    }
    let width = rows[0].len();
    for (row, cells) in rows.iter().enumerate() {
        if cells.len() != width {
            return Err(MapError::RaggedRow {
                row,
                expected: width,
                found: cells.len(),
            });
        }
    }
    let height = rows.len();

    let mut rng = SimpleRng::new(seed);
    let mut cells = Vec::with_capacity(width * height);
    let mut player: Option<CellCoord> = None;
    let mut others: Vec<Spawn> = Vec::new();

    let at = |col: i64, row: i64| -> char {
        if col < 0 || row < 0 || col >= width as i64 || row >= height as i64 {
            return FLOOR_CHAR;
        }
        rows[row as usize][col as usize]
    };

    for row in 0..height as i64 {
        for col in 0..width as i64 {
            let c = at(col, row);
            let neighbors = Neighbors::from_chars(
                at(col - 1, row),
                at(col + 1, row),
                at(col, row - 1),
                at(col, row + 1),
            );
            let class = classify(c, neighbors, &mut rng);
            cells.push((class.frames, class.obstacle));

            if let Some(role) = spawn_role(c) {
                let cell = CellCoord::new(col as i32, row as i32);
                if role == Role::Player {
                    // A later marker moves the player; only absence is fatal.
                    player = Some(cell);
                } else {
                    others.push(Spawn { role, cell });
                }
            }
        }
    }

    let player_cell = player.ok_or(MapError::MissingPlayerSpawn)?;
    let mut spawns = Vec::with_capacity(others.len() + 1);
    spawns.push(Spawn {
        role: Role::Player,
        cell: player_cell,
    });
    spawns.extend(others);

    Ok(LoadedMap {
        grid: Grid::from_cells(width as i32, height as i32, cells),
        spawns,
    })
}

/// The bundled demo map. Rooms of `W` walls on open ground, one doorway
/// `D`, and spawn markers for the player `@`, a priest `P`, skeletons `B`,
/// a ladder `L`, and treasure `T`.
pub const DEFAULT_MAP: &str = "
    ......................................
    ......................................
    ......................................
    ......................................
    ....WWWWWWWWWW...WWWWW................
    ....W--------WWWWW---W................
    ....WL@---P--------T-W................
    ....W--------WWWWW---W................
    ....WWWWWWWWWW...WW-WW................
    ..................W-W..WWWWWWWW.......
    ..................W-WWWW------WWWW....
    ..................W---B----------D....
    ..................WWWWWW----B----D....
    .......................W------WWWW....
    .......................WWWWWWWW.......
    ......................................
    ......................................
    ......................................
    ......................................
    ";

#[cfg(test)]
mod tests {
    use super::*;
    use tui_crawl_types::TileIndex;

    #[test]
    fn test_empty_map_fails() {
        assert_eq!(load_map(""), Err(MapError::Empty));
        assert_eq!(load_map("\n   \n\t\n"), Err(MapError::Empty));
    }

    #[test]
    fn test_ragged_rows_fail() {
        let err = load_map("...\n....\n...").unwrap_err();
        assert_eq!(
            err,
            MapError::RaggedRow {
                row: 1,
                expected: 3,
                found: 4
            }
        );
    }

    #[test]
    fn test_missing_player_fails() {
        assert_eq!(load_map("...\n...\n..."), Err(MapError::MissingPlayerSpawn));
    }

    #[test]
    fn test_blank_lines_and_indentation_are_trimmed() {
        let world = load_map("\n\n   .@.  \n   ...  \n\n").unwrap();
        assert_eq!(world.grid.width(), 3);
        assert_eq!(world.grid.height(), 2);
        assert_eq!(world.spawns[0].cell, CellCoord::new(1, 0));
    }

    #[test]
    fn test_player_is_first_spawn_even_when_marker_comes_last() {
        let world = load_map("P..\n..@").unwrap();
        assert_eq!(world.spawns.len(), 2);
        assert_eq!(world.spawns[0].role, Role::Player);
        assert_eq!(world.spawns[0].cell, CellCoord::new(2, 1));
        assert_eq!(world.spawns[1].role, Role::Priest);
        assert_eq!(world.spawns[1].cell, CellCoord::new(0, 0));
    }

    #[test]
    fn test_last_player_marker_wins() {
        let world = load_map("@.@").unwrap();
        assert_eq!(world.spawns.len(), 1);
        assert_eq!(world.spawns[0].cell, CellCoord::new(2, 0));
    }

    #[test]
    fn test_walls_are_obstacles_floors_are_not() {
        let world = load_map("WWW\nW@W\nWWW").unwrap();
        for (col, row) in [(0, 0), (1, 0), (2, 0), (0, 1), (2, 1), (1, 2)] {
            assert!(world.grid.is_obstacle(col, row), "({col},{row})");
        }
        assert!(!world.grid.is_obstacle(1, 1));
    }

    #[test]
    fn test_map_edges_read_as_open_space() {
        // A single wall row: nothing above or below, so the top-left cell is
        // a horizontal run (open above), not a corner.
        let world = load_map("WWW\n..@").unwrap();
        let span = world.grid.appearance(0, 0).unwrap();
        assert_eq!(span[0], TileIndex::new(1, 1));
        assert_eq!(span.len(), 4);
    }

    #[test]
    fn test_loading_is_idempotent() {
        let a = load_map(DEFAULT_MAP).unwrap();
        let b = load_map(DEFAULT_MAP).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_default_map_loads() {
        let world = load_map(DEFAULT_MAP).unwrap();
        assert_eq!(world.grid.width(), 38);
        assert_eq!(world.grid.height(), 19);
        assert_eq!(world.spawns[0].role, Role::Player);

        let roles: Vec<Role> = world.spawns.iter().map(|s| s.role).collect();
        assert_eq!(roles.iter().filter(|r| **r == Role::Skeleton).count(), 2);
        assert!(roles.contains(&Role::Priest));
        assert!(roles.contains(&Role::Ladder));
        assert!(roles.contains(&Role::Treasure));
    }
}
