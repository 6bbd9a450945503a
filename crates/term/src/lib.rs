//! Terminal rendering layer.
//!
//! Deliberately not a widget toolkit: the simulation stays pure and this
//! crate renders it into a plain framebuffer that is diffed and flushed to a
//! terminal backend.
//!
//! Goals:
//! - Keep the simulation deterministic and testable
//! - A pipeline that feels like a game renderer, not a TUI layout engine
//! - Precise control over aspect ratio (2 columns per world cell)

pub mod fb;
pub mod renderer;
pub mod view;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use view::{Viewport, WorldView};
