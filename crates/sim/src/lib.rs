//! Simulation module - per-tick world update, pure and deterministic
//!
//! One [`Simulation`] value owns everything that changes at runtime: the
//! actor list, the camera origin, and the animation timer. The static
//! [`Grid`](tui_crawl_world::Grid) is read-only. One `tick` call per rendered
//! frame runs the full deterministic sequence:
//!
//! acceleration → axis-separated collision → camera follow → frame advance
//!
//! There is no I/O anywhere in this crate; drawing is expressed as an
//! ordered list of draw operations plus deferred debug commands, both
//! consumed by an external renderer.
//!
//! # Module Structure
//!
//! - [`actor`]: creature state and per-role appearance
//! - [`physics`]: velocity integration and grid collision
//! - [`camera`]: scroll clamping to keep the player in view
//! - [`scheduler`]: animation timing and back-to-front draw order
//! - [`state`]: the `Simulation` struct tying it all together
//!
//! # Example
//!
//! ```
//! use tui_crawl_sim::Simulation;
//! use tui_crawl_types::{MoveIntent, TICK_MS};
//! use tui_crawl_world::DEFAULT_MAP;
//!
//! let mut sim = Simulation::from_map(DEFAULT_MAP).expect("bundled map is valid");
//! let dt = TICK_MS as f32 / 1000.0;
//! let report = sim.tick(dt, MoveIntent { x: 1, y: 0 });
//! assert!(!report.advanced_frame); // first advance comes later
//! assert!(sim.player().velocity.x > 0.0);
//! ```

pub mod actor;
pub mod camera;
pub mod physics;
pub mod scheduler;
pub mod state;

pub use actor::{Actor, SOLID_SHAPE};
pub use physics::step_actor;
pub use scheduler::{draw_order, AnimationTimer};
pub use state::{DrawOp, Simulation, TickReport};
