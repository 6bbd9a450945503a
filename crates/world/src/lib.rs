//! World module - map text to simulated world, built once at load time
//!
//! This crate turns a rectangular block of map characters into the static
//! world the simulation runs against. It has no dependencies on UI or I/O:
//!
//! - **Deterministic**: a fixed seed makes tile variant choices reproducible,
//!   so the same map text always yields the same world
//! - **Immutable**: the grid is fully populated at load and never
//!   re-classified at runtime
//! - **Testable**: the autotile rule table is explicit data, evaluated
//!   top-to-bottom with first-match-wins priority
//!
//! # Module Structure
//!
//! - [`autotile`]: neighbor-driven tile classification rules
//! - [`grid`]: per-cell appearance and obstacle storage
//! - [`map`]: map text parsing, spawn collection, load-time validation
//! - [`rng`]: seeded LCG used for floor variant selection
//!
//! # Loading
//!
//! ```
//! use tui_crawl_world::map::{load_map, DEFAULT_MAP};
//!
//! let world = load_map(DEFAULT_MAP).expect("bundled map is valid");
//! assert!(world.grid.width() > 0);
//! // The first spawn is always the player.
//! assert_eq!(world.spawns[0].role, tui_crawl_types::Role::Player);
//! ```
//!
//! Malformed map text (empty, ragged rows, no player marker) is a fatal
//! load-time error; there is no partial world.

pub mod autotile;
pub mod grid;
pub mod map;
pub mod rng;

pub use autotile::{classify, spawn_role, CellClass, Neighbors, TileSpan, WALL_RULES};
pub use grid::Grid;
pub use map::{load_map, LoadedMap, MapError, Spawn, DEFAULT_MAP};
pub use rng::SimpleRng;
