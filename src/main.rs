//! Terminal crawler runner (default binary).
//!
//! Uses crossterm for input and a custom framebuffer-based renderer
//! (no widget toolkit).

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_crawl::input::{direction_for, should_quit, toggles_debug, HeldKeys};
use tui_crawl::sim::Simulation;
use tui_crawl::term::{FrameBuffer, TerminalRenderer, Viewport, WorldView};
use tui_crawl::types::{DrawCommand, TICK_MS};
use tui_crawl::world::DEFAULT_MAP;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut sim = Simulation::from_map(DEFAULT_MAP)?;
    let view = WorldView::default();
    let mut held = HeldKeys::new();
    let mut fb = FrameBuffer::new(0, 0);
    let mut debug: Vec<DrawCommand> = Vec::new();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let dt = TICK_MS as f32 / 1000.0;

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&sim, &debug, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        if toggles_debug(key) && key.kind == KeyEventKind::Press {
                            sim.set_debug_collision(!sim.debug_collision());
                        }
                        if let Some(dir) = direction_for(key) {
                            held.press(dir);
                        }
                    }
                    KeyEventKind::Release => {
                        if let Some(dir) = direction_for(key) {
                            held.release(dir);
                        }
                    }
                },
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            let report = sim.tick(dt, held.intent());
            debug = report.debug;
        }
    }
}
