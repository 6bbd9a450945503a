//! Integration tests for the terminal view pipeline

use tui_crawl::sim::Simulation;
use tui_crawl::term::{encode_diff_into, encode_full_into, FrameBuffer, Viewport, WorldView};
use tui_crawl::types::MoveIntent;
use tui_crawl::world::DEFAULT_MAP;

const DT: f32 = 1.0 / 60.0;

#[test]
fn test_default_map_renders_into_viewport() {
    let sim = Simulation::from_map(DEFAULT_MAP).unwrap();
    let view = WorldView::default();
    let fb = view.render(&sim, &[], Viewport::new(80, 24));
    assert_eq!(fb.width(), 80);
    assert_eq!(fb.height(), 24);

    // Somewhere in the frame there is an actual glyph.
    let mut non_blank = 0;
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            if fb.get(x, y).map(|c| c.ch) != Some(' ') {
                non_blank += 1;
            }
        }
    }
    assert!(non_blank > 100);
}

#[test]
fn test_static_frames_diff_to_almost_nothing() {
    let mut sim = Simulation::from_map(DEFAULT_MAP).unwrap();
    let view = WorldView::default();
    let viewport = Viewport::new(80, 24);

    let before = view.render(&sim, &[], viewport);
    // One tick without input: nothing moves, no animation advance yet.
    sim.tick(DT, MoveIntent::ZERO);
    let after = view.render(&sim, &[], viewport);

    let mut diff = Vec::new();
    encode_diff_into(&before, &after, &mut diff).unwrap();
    let mut full = Vec::new();
    encode_full_into(&after, &mut full).unwrap();
    assert!(diff.len() < full.len() / 4);
}

#[test]
fn test_moving_player_changes_the_frame() {
    let mut sim = Simulation::from_map(DEFAULT_MAP).unwrap();
    let view = WorldView::default();
    let viewport = Viewport::new(80, 24);

    let before = view.render(&sim, &[], viewport);
    for _ in 0..30 {
        sim.tick(DT, MoveIntent { x: 1, y: 0 });
    }
    let after = view.render(&sim, &[], viewport);
    assert_ne!(before, after);
}

#[test]
fn test_debug_overlay_shows_up_in_the_frame() {
    let mut sim = Simulation::from_map(DEFAULT_MAP).unwrap();
    sim.set_debug_collision(true);
    let report = sim.tick(DT, MoveIntent::ZERO);
    assert!(!report.debug.is_empty());

    let view = WorldView::default();
    let viewport = Viewport::new(80, 24);
    let plain = view.render(&sim, &[], viewport);
    let overlaid = view.render(&sim, &report.debug, viewport);
    assert_ne!(plain, overlaid);
}

#[test]
fn test_render_into_reuses_buffer_across_resizes() {
    let sim = Simulation::from_map(DEFAULT_MAP).unwrap();
    let view = WorldView::default();
    let mut fb = FrameBuffer::new(0, 0);

    view.render_into(&sim, &[], Viewport::new(80, 24), &mut fb);
    assert_eq!((fb.width(), fb.height()), (80, 24));
    view.render_into(&sim, &[], Viewport::new(40, 12), &mut fb);
    assert_eq!((fb.width(), fb.height()), (40, 12));
}
