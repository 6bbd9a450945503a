//! Held-key tracking for terminal environments.
//!
//! The simulation wants a per-tick "is this direction held" query, but most
//! terminals only deliver key *press* events, repeating while a key is down,
//! and never report releases. [`HeldKeys`] bridges the gap: a direction
//! counts as held from its last press event until a short timeout expires
//! without a repeat.

use std::time::{Duration, Instant};

use tui_crawl_types::MoveIntent;

pub mod map;

pub use map::{direction_for, should_quit, toggles_debug, Dir};

// Terminal key-repeat usually fires well within this window; anything older
// is treated as released.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u64 = 150;

/// Tracks which movement directions are currently held.
#[derive(Debug, Clone)]
pub struct HeldKeys {
    // Last press time per direction, indexed by `slot`.
    pressed: [Option<Instant>; 4],
    release_timeout: Duration,
}

fn slot(dir: Dir) -> usize {
    match dir {
        Dir::Left => 0,
        Dir::Right => 1,
        Dir::Up => 2,
        Dir::Down => 3,
    }
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::with_release_timeout(Duration::from_millis(DEFAULT_KEY_RELEASE_TIMEOUT_MS))
    }

    pub fn with_release_timeout(release_timeout: Duration) -> Self {
        Self {
            pressed: [None; 4],
            release_timeout,
        }
    }

    /// Record a press (or terminal auto-repeat) event.
    pub fn press(&mut self, dir: Dir) {
        self.pressed[slot(dir)] = Some(Instant::now());
    }

    /// Record an explicit release, for terminals that do report them.
    pub fn release(&mut self, dir: Dir) {
        self.pressed[slot(dir)] = None;
    }

    /// Drop every held direction.
    pub fn reset(&mut self) {
        self.pressed = [None; 4];
    }

    /// Sample the current movement intent, expiring stale presses.
    pub fn intent(&mut self) -> MoveIntent {
        self.intent_at(Instant::now())
    }

    fn intent_at(&mut self, now: Instant) -> MoveIntent {
        for entry in &mut self.pressed {
            if let Some(at) = entry {
                if now.duration_since(*at) > self.release_timeout {
                    *entry = None;
                }
            }
        }
        MoveIntent::from_held(
            self.pressed[0].is_some(),
            self.pressed[1].is_some(),
            self.pressed[2].is_some(),
            self.pressed[3].is_some(),
        )
    }
}

impl Default for HeldKeys {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_produces_intent() {
        let mut held = HeldKeys::new();
        held.press(Dir::Left);
        assert_eq!(held.intent(), MoveIntent { x: -1, y: 0 });

        held.press(Dir::Down);
        assert_eq!(held.intent(), MoveIntent { x: -1, y: 1 });
    }

    #[test]
    fn test_release_clears_direction() {
        let mut held = HeldKeys::new();
        held.press(Dir::Right);
        held.press(Dir::Up);
        held.release(Dir::Right);
        assert_eq!(held.intent(), MoveIntent { x: 0, y: -1 });
    }

    #[test]
    fn test_stale_press_auto_releases_after_timeout() {
        let mut held = HeldKeys::with_release_timeout(Duration::from_millis(50));
        held.press(Dir::Right);

        // Simulate no repeat events by sampling in the future.
        let later = Instant::now() + Duration::from_millis(51);
        assert_eq!(held.intent_at(later), MoveIntent::ZERO);
        // The expiry sticks.
        assert_eq!(held.intent(), MoveIntent::ZERO);
    }

    #[test]
    fn test_repeat_keeps_direction_alive() {
        let mut held = HeldKeys::with_release_timeout(Duration::from_millis(50));
        held.press(Dir::Right);
        held.press(Dir::Right); // terminal auto-repeat
        assert_eq!(held.intent(), MoveIntent { x: 1, y: 0 });
    }

    #[test]
    fn test_opposite_directions_cancel() {
        let mut held = HeldKeys::new();
        held.press(Dir::Left);
        held.press(Dir::Right);
        assert_eq!(held.intent(), MoveIntent::ZERO);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut held = HeldKeys::new();
        held.press(Dir::Left);
        held.press(Dir::Up);
        held.reset();
        assert_eq!(held.intent(), MoveIntent::ZERO);
    }
}
