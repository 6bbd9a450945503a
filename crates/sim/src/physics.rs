//! Physics module - velocity integration and grid collision
//!
//! Each tick, per actor: accelerate along the movement intent, clamp speed,
//! decay velocity on idle axes, then resolve the motion against nearby
//! obstacle cells.
//!
//! Collision reduces actor-vs-rectangle to point-vs-rectangle: every
//! obstacle cell's world rectangle is Minkowski-expanded by the actor's
//! solid shape, and the actor's position point is clamped against the
//! expanded rectangles. The X and Y axes resolve strictly in sequence, with
//! the Y pass reading the already X-resolved position; that ordering is what
//! keeps actors from cutting diagonally through corners.
//!
//! Edge comparisons are strict, with no epsilon. An actor is only clamped
//! when it starts outside a blocking edge and would cross it this tick, so
//! an actor that finds itself inside geometry can always walk out.

use tui_crawl_types::{
    clamp, Bounds2, CellCoord, DrawCommand, Rgb, Vec2, DECELERATION, MAX_ACCELERATION, MAX_VELOCITY,
};
use tui_crawl_world::Grid;

use crate::actor::{Actor, SOLID_SHAPE};

/// Obstacle cells are gathered from a fixed window around the actor's cell,
/// offsets -2..=+2 on both axes.
const SCAN_RADIUS: i32 = 2;

const DEBUG_OUTLINE: Rgb = Rgb::new(0, 200, 0);

/// Advance one actor by one tick against the static grid.
///
/// When `debug` is supplied, the candidate obstacle rectangles and the
/// actor's solid shape are appended as outline commands (world space).
pub fn step_actor(actor: &mut Actor, grid: &Grid, dt: f32, mut debug: Option<&mut Vec<DrawCommand>>) {
    // Accelerate along the intent, per axis, capped at the speed limit.
    actor.velocity += actor.intent.as_vec2() * MAX_ACCELERATION * dt;
    actor.velocity.x = clamp(actor.velocity.x, -MAX_VELOCITY, MAX_VELOCITY);
    actor.velocity.y = clamp(actor.velocity.y, -MAX_VELOCITY, MAX_VELOCITY);

    // Idle axes slow to a stop, a flat amount per tick, never past zero.
    if actor.intent.x == 0 {
        let speed = (actor.velocity.x.abs() - DECELERATION).max(0.0);
        actor.velocity.x = actor.velocity.x.signum() * speed;
    }
    if actor.intent.y == 0 {
        let speed = (actor.velocity.y.abs() - DECELERATION).max(0.0);
        actor.velocity.y = actor.velocity.y.signum() * speed;
    }

    let motion = actor.velocity * dt;
    let obstacles = gather_obstacles(actor.position, grid, debug.as_deref_mut());

    // X step.
    let position = actor.position;
    let mut new_x = position.x + motion.x;
    for bounds in &obstacles {
        let min = bounds.min();
        let max = bounds.max();
        let in_y_span = position.y > min.y && position.y < max.y;

        // Leftward: clamp to the rectangle's right edge.
        if motion.x < 0.0 && in_y_span {
            let limit = max.x;
            if position.x >= limit && new_x < limit {
                new_x = limit;
            }
        }
        // Rightward: clamp to the rectangle's left edge.
        if motion.x > 0.0 && in_y_span {
            let limit = min.x;
            if position.x <= limit && new_x > limit {
                new_x = limit;
            }
        }
    }
    actor.position.x = new_x;

    // Y step, against the X-resolved position.
    let position = actor.position;
    let mut new_y = position.y + motion.y;
    for bounds in &obstacles {
        let min = bounds.min();
        let max = bounds.max();
        let in_x_span = position.x > min.x && position.x < max.x;

        // Upward: clamp to the rectangle's bottom edge.
        if motion.y < 0.0 && in_x_span {
            let limit = max.y;
            if position.y >= limit && new_y < limit {
                new_y = limit;
            }
        }
        // Downward: clamp to the rectangle's top edge.
        if motion.y > 0.0 && in_x_span {
            let limit = min.y;
            if position.y <= limit && new_y > limit {
                new_y = limit;
            }
        }
    }
    actor.position.y = new_y;

    if let Some(commands) = debug {
        commands.push(DrawCommand::RectOutline {
            bounds: SOLID_SHAPE.translated(actor.position),
            color: DEBUG_OUTLINE,
        });
    }
}

/// Expanded collision rectangles for every obstacle cell near `position`.
///
/// The expansion folds the actor's solid shape into the obstacle rectangle
/// (obstacle.min - shape.max, obstacle.max - shape.min), so the collision
/// test against the actor becomes a point test.
fn gather_obstacles(
    position: Vec2,
    grid: &Grid,
    mut debug: Option<&mut Vec<DrawCommand>>,
) -> Vec<Bounds2> {
    let nearest = CellCoord::containing(position);
    let mut obstacles = Vec::new();

    for row in nearest.row - SCAN_RADIUS..=nearest.row + SCAN_RADIUS {
        for col in nearest.col - SCAN_RADIUS..=nearest.col + SCAN_RADIUS {
            if !grid.is_obstacle(col, row) {
                continue;
            }
            let cell_bounds = CellCoord::new(col, row).bounds();
            let min = cell_bounds.min() - SOLID_SHAPE.max();
            let max = cell_bounds.max() - SOLID_SHAPE.min();
            obstacles.push(Bounds2::from_min_max(min, max));

            if let Some(commands) = debug.as_deref_mut() {
                commands.push(DrawCommand::RectOutline {
                    bounds: cell_bounds,
                    color: DEBUG_OUTLINE,
                });
            }
        }
    }
    obstacles
}
