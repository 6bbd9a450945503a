//! Tile-grid crawler (workspace facade crate).
//!
//! Re-exports the `tui_crawl::{world,sim,input,term,types}` public API while
//! the implementation lives in dedicated crates under `crates/`.

pub use tui_crawl_input as input;
pub use tui_crawl_sim as sim;
pub use tui_crawl_term as term;
pub use tui_crawl_types as types;
pub use tui_crawl_world as world;
