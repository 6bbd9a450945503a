//! WorldView: maps simulation state into a terminal framebuffer.
//!
//! This module is pure (no I/O). It takes the simulation's resolved draw
//! list, applies the camera origin, converts world pixels to terminal cells
//! and picks a glyph per tile. One 64px world cell maps to 2x1 terminal
//! cells to compensate for glyph aspect ratio.

use tui_crawl_sim::Simulation;
use tui_crawl_types::{DrawCommand, Rgb, SheetKind, TileIndex, Vec2, CELL_SIZE};

use crate::fb::{Cell, CellStyle, FrameBuffer};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Renders the world into a framebuffer.
pub struct WorldView {
    /// Terminal columns per world cell.
    cell_w: u16,
    /// Terminal rows per world cell.
    cell_h: u16,
}

impl Default for WorldView {
    fn default() -> Self {
        Self { cell_w: 2, cell_h: 1 }
    }
}

impl WorldView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render into an existing framebuffer.
    ///
    /// This is the allocation-free hot path; callers reuse one framebuffer
    /// across frames. `debug` is the deferred overlay from the last tick.
    pub fn render_into(
        &self,
        sim: &Simulation,
        debug: &[DrawCommand],
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell {
            ch: ' ',
            style: backdrop_style(),
        });

        let origin = sim.origin();
        for op in sim.draw_list() {
            let Some((x, y)) = self.to_terminal(op.pos, origin, viewport) else {
                continue;
            };
            match op.sheet {
                SheetKind::Walls => {
                    let (ch, style) = wall_tile_visual(op.tile);
                    fb.fill_rect(x, y, self.cell_w, self.cell_h, ch, style);
                }
                SheetKind::Props => {
                    let (ch, style) = prop_tile_visual(op.tile);
                    fb.fill_rect(x, y, self.cell_w, self.cell_h, ' ', style);
                    fb.put_char(x, y, ch, style);
                }
            }
        }

        for command in debug {
            self.render_debug(command, origin, viewport, fb);
        }
    }

    /// Convenience helper that allocates a fresh framebuffer.
    pub fn render(
        &self,
        sim: &Simulation,
        debug: &[DrawCommand],
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(sim, debug, viewport, &mut fb);
        fb
    }

    /// World pixels -> terminal cell, or None when fully off screen.
    fn to_terminal(&self, pos: Vec2, origin: Vec2, viewport: Viewport) -> Option<(u16, u16)> {
        let screen = pos + origin;
        let x = (screen.x * self.cell_w as f32 / CELL_SIZE).floor();
        let y = (screen.y * self.cell_h as f32 / CELL_SIZE).floor();
        if x < 0.0 || y < 0.0 || x >= viewport.width as f32 || y >= viewport.height as f32 {
            return None;
        }
        Some((x as u16, y as u16))
    }

    fn render_debug(
        &self,
        command: &DrawCommand,
        origin: Vec2,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        let DrawCommand::RectOutline { bounds, color } = command;
        let min = bounds.min() + origin;
        let max = bounds.max() + origin;

        let scale_x = self.cell_w as f32 / CELL_SIZE;
        let scale_y = self.cell_h as f32 / CELL_SIZE;
        let x0 = (min.x * scale_x).floor().max(0.0) as u16;
        let y0 = (min.y * scale_y).floor().max(0.0) as u16;
        let x1 = ((max.x * scale_x).ceil().max(0.0) as u16).min(viewport.width);
        let y1 = ((max.y * scale_y).ceil().max(0.0) as u16).min(viewport.height);
        if x1 <= x0 || y1 <= y0 {
            return;
        }

        let style = CellStyle {
            fg: *color,
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        fb.outline_rect(x0, y0, x1 - x0, y1 - y0, '+', style);
    }
}

fn backdrop_style() -> CellStyle {
    CellStyle {
        fg: Rgb::new(60, 60, 70),
        bg: Rgb::new(0, 0, 0),
        bold: false,
        dim: true,
    }
}

/// Glyph and style for a map tile.
fn wall_tile_visual(tile: TileIndex) -> (char, CellStyle) {
    let floor = CellStyle {
        fg: Rgb::new(90, 90, 100),
        bg: Rgb::new(18, 18, 24),
        bold: false,
        dim: true,
    };
    let wall = CellStyle {
        fg: Rgb::new(170, 170, 180),
        bg: Rgb::new(30, 30, 40),
        bold: false,
        dim: false,
    };
    let door = CellStyle {
        fg: Rgb::new(190, 140, 70),
        bg: Rgb::new(18, 18, 24),
        bold: false,
        dim: false,
    };

    match (tile.col, tile.row) {
        (0, 0) => ('.', floor),
        (1, 0) => (',', floor),
        (2, 0) => ('■', wall),
        // Doorway animation frames, alternating shimmer.
        (col, 0) if col >= 4 => {
            let ch = if (col - 4) % 2 == 0 { '▒' } else { '░' };
            (ch, door)
        }
        (0, 1) => ('┌', wall),
        (5, 1) => ('┐', wall),
        (0, 5) => ('└', wall),
        (5, 5) => ('┘', wall),
        (8, 1) => ('┘', wall),
        (11, 1) => ('└', wall),
        (_, 1) | (_, 5) => ('─', wall),
        (0, _) | (5, _) => ('│', wall),
        _ => ('█', wall),
    }
}

/// Glyph and style for an actor sprite frame. Animation frames within a
/// cycle share one glyph; bold flickers on odd frames for a little life.
fn prop_tile_visual(tile: TileIndex) -> (char, CellStyle) {
    let on_floor = Rgb::new(18, 18, 24);
    let animated = tile.col % 2 == 1;

    let (ch, fg) = match (tile.col, tile.row) {
        (3, 0) => ('H', Rgb::new(180, 140, 90)),
        (4, 3) => ('$', Rgb::new(230, 190, 60)),
        (_, 5) => ('B', Rgb::new(180, 200, 170)),
        (_, 8) => ('@', Rgb::new(255, 255, 255)),
        (_, 9) => ('P', Rgb::new(230, 210, 120)),
        _ => ('?', Rgb::new(220, 80, 80)),
    };
    (
        ch,
        CellStyle {
            fg,
            bg: on_floor,
            bold: animated,
            dim: false,
        },
    )
}
