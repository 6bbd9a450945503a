//! State module - the simulation root
//!
//! [`Simulation`] owns all mutable runtime state as plain fields: actor
//! list, camera origin, animation timer, debug flags. Nothing is ambient or
//! global, so a simulation can be constructed in a test, ticked
//! deterministically, and inspected.

use tui_crawl_types::{CellCoord, DrawCommand, MoveIntent, Role, SheetKind, TileIndex, Vec2};
use tui_crawl_world::{load_map, Grid, LoadedMap, MapError};

use crate::actor::Actor;
use crate::camera;
use crate::physics;
use crate::scheduler::{draw_order, AnimationTimer};

/// One resolved draw operation: which sheet, which tile, where (world
/// pixels, before camera translation).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawOp {
    pub sheet: SheetKind,
    pub tile: TileIndex,
    pub pos: Vec2,
}

/// Result of one tick.
#[derive(Debug, Clone, Default)]
pub struct TickReport {
    /// True when sprite cycles advanced this tick.
    pub advanced_frame: bool,
    /// Deferred debug drawing, empty unless collision debugging is on.
    pub debug: Vec<DrawCommand>,
}

/// The whole running world: static grid plus every piece of mutable state.
#[derive(Debug, Clone)]
pub struct Simulation {
    grid: Grid,
    actors: Vec<Actor>,
    origin: Vec2,
    timer: AnimationTimer,
    debug_collision: bool,
}

impl Simulation {
    /// Load a map and spawn its actors.
    pub fn from_map(text: &str) -> Result<Self, MapError> {
        Ok(Self::new(load_map(text)?))
    }

    /// Build a simulation from an already-loaded map.
    pub fn new(world: LoadedMap) -> Self {
        let actors = world
            .spawns
            .iter()
            .map(|spawn| Actor::spawn(spawn.role, spawn.cell))
            .collect();
        Self {
            grid: world.grid,
            actors,
            origin: Vec2::ZERO,
            timer: AnimationTimer::new(),
            debug_collision: false,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn debug_collision(&self) -> bool {
        self.debug_collision
    }

    pub fn set_debug_collision(&mut self, on: bool) {
        self.debug_collision = on;
    }

    /// The player actor, identified by role.
    pub fn player(&self) -> &Actor {
        self.actors
            .iter()
            .find(|actor| actor.role == Role::Player)
            .expect("map loading guarantees a player spawn")
    }

    fn player_mut(&mut self) -> &mut Actor {
        self.actors
            .iter_mut()
            .find(|actor| actor.role == Role::Player)
            .expect("map loading guarantees a player spawn")
    }

    /// Run one simulation tick.
    ///
    /// `dt` is the elapsed time in seconds; `player_intent` is the sampled
    /// input for this tick. Actors without an intent source keep theirs at
    /// zero and simply coast to a stop.
    pub fn tick(&mut self, dt: f32, player_intent: MoveIntent) -> TickReport {
        let advanced_frame = self.timer.tick();
        self.player_mut().intent = player_intent;

        let mut debug = Vec::new();
        for actor in &mut self.actors {
            let wants_debug = self.debug_collision && actor.role == Role::Player;
            physics::step_actor(
                actor,
                &self.grid,
                dt,
                wants_debug.then_some(&mut debug),
            );
            if advanced_frame {
                actor.advance_frame();
            }
        }

        let player_pos = self.player().position;
        camera::follow(&mut self.origin, player_pos);

        TickReport {
            advanced_frame,
            debug,
        }
    }

    /// Everything to draw this frame, in order: the static map back layer,
    /// then actors back-to-front. Positions are world pixels; the renderer
    /// adds the camera origin.
    pub fn draw_list(&self) -> Vec<DrawOp> {
        let mut ops =
            Vec::with_capacity((self.grid.width() * self.grid.height()) as usize + self.actors.len());

        let cycle = self.timer.advances();
        for row in 0..self.grid.height() {
            for col in 0..self.grid.width() {
                if let Some(span) = self.grid.appearance(col, row) {
                    // Animated cells step on the global counter, in sync.
                    let frame = (cycle % span.len() as u64) as usize;
                    ops.push(DrawOp {
                        sheet: SheetKind::Walls,
                        tile: span[frame],
                        pos: CellCoord::new(col, row).origin(),
                    });
                }
            }
        }

        for index in draw_order(&self.actors) {
            let actor = &self.actors[index];
            ops.push(DrawOp {
                sheet: SheetKind::Props,
                tile: actor.tile(),
                pos: actor.position,
            });
        }
        ops
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_crawl_types::{ANIMATION_PERIOD, CELL_SIZE};
    use tui_crawl_world::DEFAULT_MAP;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_player_found_by_role_not_position() {
        let sim = Simulation::from_map("P..\n..@").unwrap();
        assert_eq!(sim.player().role, Role::Player);
        assert_eq!(sim.player().position, Vec2::new(2.0 * CELL_SIZE, CELL_SIZE));
    }

    #[test]
    fn test_frame_advances_by_one_after_exactly_one_period() {
        let mut sim = Simulation::from_map(DEFAULT_MAP).unwrap();
        for _ in 0..ANIMATION_PERIOD - 1 {
            let report = sim.tick(DT, MoveIntent::ZERO);
            assert!(!report.advanced_frame);
            assert_eq!(sim.player().frame, 0);
        }
        let report = sim.tick(DT, MoveIntent::ZERO);
        assert!(report.advanced_frame);
        assert_eq!(sim.player().frame, 1);
    }

    #[test]
    fn test_npcs_have_no_intent_and_stay_put() {
        let mut sim = Simulation::from_map("@.P").unwrap();
        let before = sim.actors()[1].position;
        for _ in 0..60 {
            sim.tick(DT, MoveIntent { x: 1, y: 0 });
        }
        assert_eq!(sim.actors()[1].position, before);
        assert!(sim.player().position.x > 0.0);
    }

    #[test]
    fn test_debug_commands_only_when_enabled() {
        let mut sim = Simulation::from_map("WWW\nW@W\nWWW").unwrap();
        let report = sim.tick(DT, MoveIntent::ZERO);
        assert!(report.debug.is_empty());

        sim.set_debug_collision(true);
        let report = sim.tick(DT, MoveIntent::ZERO);
        assert!(!report.debug.is_empty());
    }

    #[test]
    fn test_draw_list_tiles_then_actors() {
        let sim = Simulation::from_map("@.L").unwrap();
        let ops = sim.draw_list();
        // 3 tiles + 2 actors.
        assert_eq!(ops.len(), 5);
        assert!(ops[..3].iter().all(|op| op.sheet == SheetKind::Walls));
        // Flat ladder draws before the player.
        assert_eq!(ops[3].sheet, SheetKind::Props);
        assert_eq!(ops[3].pos, Vec2::new(2.0 * CELL_SIZE, 0.0));
        assert_eq!(ops[4].pos, Vec2::ZERO);
    }

    #[test]
    fn test_animated_tiles_step_with_global_counter() {
        let mut sim = Simulation::from_map("@D").unwrap();
        let door_before = sim.draw_list()[1].tile;
        for _ in 0..ANIMATION_PERIOD {
            sim.tick(DT, MoveIntent::ZERO);
        }
        let door_after = sim.draw_list()[1].tile;
        assert_eq!(door_before, TileIndex::new(4, 0));
        assert_eq!(door_after, TileIndex::new(5, 0));
    }

    #[test]
    fn test_deterministic_ticking() {
        let mut a = Simulation::from_map(DEFAULT_MAP).unwrap();
        let mut b = Simulation::from_map(DEFAULT_MAP).unwrap();
        let intent = MoveIntent { x: 1, y: -1 };
        for _ in 0..120 {
            a.tick(DT, intent);
            b.tick(DT, intent);
        }
        assert_eq!(a.player().position, b.player().position);
        assert_eq!(a.origin(), b.origin());
    }
}
