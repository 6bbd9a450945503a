//! Scheduler module - animation timing and draw order
//!
//! One global timer drives every animation, so all sprite cycles stay
//! frame-synchronized rather than phase-offset. Draw order implements a
//! painter's algorithm: flat actors first, then everything else by
//! ascending Y, with ties keeping input order.

use crate::actor::Actor;
use tui_crawl_types::ANIMATION_PERIOD;

/// Global animation clock: counts ticks and reports frame advances.
#[derive(Debug, Clone, Default)]
pub struct AnimationTimer {
    timer: u32,
    advances: u64,
}

impl AnimationTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one tick; returns true when a frame advance is due.
    pub fn tick(&mut self) -> bool {
        self.timer += 1;
        if self.timer >= ANIMATION_PERIOD {
            self.timer -= ANIMATION_PERIOD;
            self.advances += 1;
            return true;
        }
        false
    }

    /// Total frame advances so far; animated map tiles index their cycle
    /// with this.
    pub fn advances(&self) -> u64 {
        self.advances
    }
}

/// Back-to-front draw order as indices into the actor list.
pub fn draw_order(actors: &[Actor]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..actors.len()).collect();
    // Stable sort keeps input order on equal keys.
    order.sort_by(|&a, &b| {
        let key = |i: usize| (!actors[i].flat as u8, actors[i].position.y);
        let (fa, ya) = key(a);
        let (fb, yb) = key(b);
        fa.cmp(&fb).then(ya.total_cmp(&yb))
    });
    order
}
