//! Camera module - scroll clamping
//!
//! The camera origin is the offset added to world positions when drawing.
//! Each tick it is clamped so the player never gets closer than
//! `SCROLL_MARGIN` to the view edge; inside the margin band the camera does
//! not move at all.

use tui_crawl_types::{clamp, Vec2, CELL_SIZE, RESOLUTION, SCROLL_MARGIN};

/// Clamp `origin` so the player sprite stays inside the scroll margins.
pub fn follow(origin: &mut Vec2, player: Vec2) {
    origin.x = clamp(
        origin.x,
        -player.x + SCROLL_MARGIN.x,
        -(player.x + CELL_SIZE) + RESOLUTION.x - SCROLL_MARGIN.x,
    );
    origin.y = clamp(
        origin.y,
        -player.y + SCROLL_MARGIN.y,
        -(player.y + CELL_SIZE) + RESOLUTION.y - SCROLL_MARGIN.y,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_inside_margins_leaves_camera_alone() {
        let mut origin = Vec2::ZERO;
        // Comfortably inside the view.
        follow(&mut origin, Vec2::new(RESOLUTION.x / 2.0, RESOLUTION.y / 2.0));
        assert_eq!(origin, Vec2::ZERO);
    }

    #[test]
    fn test_camera_scrolls_to_keep_player_off_left_edge() {
        let mut origin = Vec2::ZERO;
        // Player far left of the current view (negative world x).
        follow(&mut origin, Vec2::new(-500.0, RESOLUTION.y / 2.0));
        // Origin shifts right so the player sits at the margin.
        assert_eq!(origin.x, 500.0 + SCROLL_MARGIN.x);
    }

    #[test]
    fn test_camera_scrolls_to_keep_player_off_right_edge() {
        let mut origin = Vec2::ZERO;
        let player_x = RESOLUTION.x + 200.0;
        follow(&mut origin, Vec2::new(player_x, RESOLUTION.y / 2.0));
        let expected = -(player_x + CELL_SIZE) + RESOLUTION.x - SCROLL_MARGIN.x;
        assert_eq!(origin.x, expected);
    }

    #[test]
    fn test_follow_is_idempotent_for_still_player() {
        let mut origin = Vec2::ZERO;
        let player = Vec2::new(2000.0, 1500.0);
        follow(&mut origin, player);
        let once = origin;
        follow(&mut origin, player);
        assert_eq!(origin, once);
    }
}
