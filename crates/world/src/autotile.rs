//! Autotile module - neighbor-driven tile classification
//!
//! Given a map character and its four axis-neighbors, decide which sprite the
//! cell shows and whether it blocks movement. Wall appearance depends on the
//! wall/non-wall pattern of the neighbors: corners, straight runs, and an
//! isolated fallback.
//!
//! The wall rules live in [`WALL_RULES`], an ordered slice of
//! (predicate, tile span) entries evaluated top-to-bottom. Several predicates
//! can be true at once (a corner cell also looks like a straight run), so
//! **first match wins** and the slice order is a load-bearing contract:
//!
//! 1. four outer corner orientations
//! 2. two inner corner orientations (the only two reachable after rule 1)
//! 3. horizontal run, open above (4-frame cycle)
//! 4. horizontal run, open below (4-frame cycle)
//! 5. vertical run, open left (3-frame cycle)
//! 6. vertical run, open right (3-frame cycle)
//! 7. isolated wall fallback
//!
//! Spans with more than one frame are animated cycles; the draw layer steps
//! them on the global animation counter.

use arrayvec::ArrayVec;

use tui_crawl_types::{Role, TileIndex};

use crate::rng::SimpleRng;

/// Plain floor / empty space marker.
pub const FLOOR_CHAR: char = '.';
/// Wall marker.
pub const WALL_CHAR: char = 'W';
/// Doorway marker (animated, walkable).
pub const DOOR_CHAR: char = 'D';

/// A cell's appearance: one or more sheet indices. More than one frame
/// denotes an animated cycle. The longest span is the 12-step doorway.
pub type TileSpan = ArrayVec<TileIndex, 12>;

/// Arithmetic tile sequence: `first`, `first + step`, ...
pub fn tile_span(first: TileIndex, step: TileIndex, count: usize) -> TileSpan {
    let mut span = TileSpan::new();
    let mut tile = first;
    for _ in 0..count {
        span.push(tile);
        tile = tile + step;
    }
    span
}

/// Single-frame span.
pub fn single(only: TileIndex) -> TileSpan {
    let mut span = TileSpan::new();
    span.push(only);
    span
}

/// Wall-ness of the four axis-neighbors of a cell. Positions outside the
/// grid count as open floor, so map edges read as open space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Neighbors {
    pub left: bool,
    pub right: bool,
    pub above: bool,
    pub below: bool,
}

impl Neighbors {
    pub fn from_chars(left: char, right: char, above: char, below: char) -> Self {
        Self {
            left: left == WALL_CHAR,
            right: right == WALL_CHAR,
            above: above == WALL_CHAR,
            below: below == WALL_CHAR,
        }
    }
}

/// One entry of the ordered wall classification table.
pub struct WallRule {
    /// Rule identifier, used in tests and debugging output.
    pub name: &'static str,
    pub matches: fn(Neighbors) -> bool,
    pub first: TileIndex,
    pub step: TileIndex,
    pub frames: usize,
}

impl WallRule {
    pub fn span(&self) -> TileSpan {
        tile_span(self.first, self.step, self.frames)
    }
}

const NO_STEP: TileIndex = TileIndex::new(0, 0);
const RIGHT: TileIndex = TileIndex::new(1, 0);
const DOWN: TileIndex = TileIndex::new(0, 1);

/// Ordered wall rules; evaluated top-to-bottom, first match wins.
pub const WALL_RULES: &[WallRule] = &[
    // Outer corners: two adjacent walls, open on the far side.
    WallRule {
        name: "outer-top-left",
        matches: |n| n.below && n.right && !n.above,
        first: TileIndex::new(0, 1),
        step: NO_STEP,
        frames: 1,
    },
    WallRule {
        name: "outer-top-right",
        matches: |n| n.below && n.left && !n.above,
        first: TileIndex::new(5, 1),
        step: NO_STEP,
        frames: 1,
    },
    WallRule {
        name: "outer-bottom-left",
        matches: |n| n.above && n.right && !n.below,
        first: TileIndex::new(0, 5),
        step: NO_STEP,
        frames: 1,
    },
    WallRule {
        name: "outer-bottom-right",
        matches: |n| n.above && n.left && !n.below,
        first: TileIndex::new(5, 5),
        step: NO_STEP,
        frames: 1,
    },
    // Inner corners. Only these two orientations survive the outer-corner
    // rules above.
    WallRule {
        name: "inner-left",
        matches: |n| n.below && n.right && n.above,
        first: TileIndex::new(8, 1),
        step: NO_STEP,
        frames: 1,
    },
    WallRule {
        name: "inner-right",
        matches: |n| n.below && n.left && n.above,
        first: TileIndex::new(11, 1),
        step: NO_STEP,
        frames: 1,
    },
    // Straight runs. The open-above test also accepts a wall above when the
    // run continues sideways; that disambiguates a straight run from the
    // corners already handled.
    WallRule {
        name: "horizontal-open-above",
        matches: |n| !n.above || (n.above && (n.left || n.right)),
        first: TileIndex::new(1, 1),
        step: RIGHT,
        frames: 4,
    },
    WallRule {
        name: "horizontal-open-below",
        matches: |n| !n.below,
        first: TileIndex::new(1, 5),
        step: RIGHT,
        frames: 4,
    },
    WallRule {
        name: "vertical-open-left",
        matches: |n| !n.left,
        first: TileIndex::new(0, 2),
        step: DOWN,
        frames: 3,
    },
    WallRule {
        name: "vertical-open-right",
        matches: |n| !n.right,
        first: TileIndex::new(5, 2),
        step: DOWN,
        frames: 3,
    },
    WallRule {
        name: "isolated",
        matches: |_| true,
        first: TileIndex::new(2, 0),
        step: NO_STEP,
        frames: 1,
    },
];

/// Floor variant set. The plain-floor rule is the only one that picks its
/// base tile pseudo-randomly; each floor cell stores a single chosen frame.
pub const FLOOR_VARIANTS: &[TileIndex] = &[TileIndex::new(0, 0), TileIndex::new(1, 0)];

/// Doorway appearance: a 12-step animated cycle.
pub fn door_span() -> TileSpan {
    tile_span(TileIndex::new(4, 0), RIGHT, 12)
}

/// Classifier output for one cell.
#[derive(Debug, Clone, PartialEq)]
pub struct CellClass {
    pub frames: TileSpan,
    pub obstacle: bool,
}

/// Classify one map character given its neighbor context.
///
/// Wall cells run the [`WALL_RULES`] table and block movement. Doorways get
/// the animated cycle. Everything else — the floor marker, spawn markers,
/// and unrecognized characters — is open floor with a seeded random variant.
pub fn classify(c: char, neighbors: Neighbors, rng: &mut SimpleRng) -> CellClass {
    if c == WALL_CHAR {
        let rule = WALL_RULES
            .iter()
            .find(|rule| (rule.matches)(neighbors))
            .unwrap_or(&WALL_RULES[WALL_RULES.len() - 1]);
        return CellClass {
            frames: rule.span(),
            obstacle: true,
        };
    }
    if c == DOOR_CHAR {
        return CellClass {
            frames: door_span(),
            obstacle: false,
        };
    }
    CellClass {
        frames: single(*rng.choose(FLOOR_VARIANTS)),
        obstacle: false,
    }
}

/// Spawn marker lookup, independent of floor/wall classification.
/// Spawned actors always stand on a floor tile underneath.
pub fn spawn_role(c: char) -> Option<Role> {
    match c {
        '@' => Some(Role::Player),
        'P' => Some(Role::Priest),
        'B' => Some(Role::Skeleton),
        'L' => Some(Role::Ladder),
        'T' => Some(Role::Treasure),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walls(left: bool, right: bool, above: bool, below: bool) -> Neighbors {
        Neighbors {
            left,
            right,
            above,
            below,
        }
    }

    fn matched_rule(n: Neighbors) -> &'static str {
        WALL_RULES
            .iter()
            .find(|rule| (rule.matches)(n))
            .map(|rule| rule.name)
            .unwrap_or("none")
    }

    #[test]
    fn test_outer_corners_all_four_orientations() {
        assert_eq!(matched_rule(walls(false, true, false, true)), "outer-top-left");
        assert_eq!(matched_rule(walls(true, false, false, true)), "outer-top-right");
        assert_eq!(matched_rule(walls(false, true, true, false)), "outer-bottom-left");
        assert_eq!(matched_rule(walls(true, false, true, false)), "outer-bottom-right");
    }

    #[test]
    fn test_outer_corner_is_obstacle_with_corner_tile() {
        let mut rng = SimpleRng::new(1);
        let class = classify('W', walls(false, true, false, true), &mut rng);
        assert!(class.obstacle);
        assert_eq!(class.frames.as_slice(), &[TileIndex::new(0, 1)]);
    }

    #[test]
    fn test_corner_beats_horizontal_run() {
        // Open above plus wall below/right satisfies both the outer-top-left
        // corner and the horizontal-open-above run; priority keeps the corner.
        let n = walls(false, true, false, true);
        assert!((WALL_RULES[0].matches)(n), "corner predicate must match");
        let horizontal = WALL_RULES
            .iter()
            .find(|r| r.name == "horizontal-open-above")
            .unwrap();
        assert!((horizontal.matches)(n), "run predicate must also match");
        assert_eq!(matched_rule(n), "outer-top-left");
    }

    #[test]
    fn test_inner_corners() {
        assert_eq!(matched_rule(walls(false, true, true, true)), "inner-left");
        assert_eq!(matched_rule(walls(true, false, true, true)), "inner-right");
    }

    #[test]
    fn test_horizontal_runs_are_animated_cycles() {
        let mut rng = SimpleRng::new(1);
        // Mid-run: walls left and right, open above and below; open-above wins.
        let class = classify('W', walls(true, true, false, false), &mut rng);
        assert!(class.obstacle);
        assert_eq!(class.frames.len(), 4);
        assert_eq!(class.frames[0], TileIndex::new(1, 1));
        assert_eq!(class.frames[3], TileIndex::new(4, 1));

        // Wall above only: open below, no corner predicate applies.
        let class = classify('W', walls(false, false, true, false), &mut rng);
        assert_eq!(class.frames[0], TileIndex::new(1, 5));
    }

    #[test]
    fn test_vertical_runs() {
        // Walls above and below; open to the left.
        assert_eq!(matched_rule(walls(false, true, true, true)), "inner-left");
        assert_eq!(matched_rule(walls(false, false, true, true)), "vertical-open-left");
        assert_eq!(matched_rule(walls(true, false, true, true)), "inner-right");

        let mut rng = SimpleRng::new(1);
        let class = classify('W', walls(false, false, true, true), &mut rng);
        assert_eq!(class.frames.len(), 3);
        assert_eq!(class.frames[0], TileIndex::new(0, 2));
        assert_eq!(class.frames[2], TileIndex::new(0, 4));
    }

    #[test]
    fn test_surrounded_wall_falls_back_to_inner_corner_not_isolated() {
        // Fully surrounded: inner-left matches first.
        assert_eq!(matched_rule(walls(true, true, true, true)), "inner-left");
    }

    #[test]
    fn test_isolated_wall() {
        let mut rng = SimpleRng::new(1);
        // Side walls plus one above form a bottom-edge outer corner.
        assert_eq!(matched_rule(walls(true, true, true, false)), "outer-bottom-left");
        // Only a wall above: no corner applies, the open-below run wins.
        assert_eq!(matched_rule(walls(false, false, true, false)), "horizontal-open-below");
        // No neighbors at all: open above, horizontal run.
        assert_eq!(matched_rule(walls(false, false, false, false)), "horizontal-open-above");
        // The fallback is still exercised through the table's last entry.
        let class = classify('W', walls(false, false, false, false), &mut rng);
        assert!(class.obstacle);
        assert_eq!((WALL_RULES.last().unwrap().matches)(walls(true, true, true, true)), true);
        assert_eq!(class.frames[0], TileIndex::new(1, 1));
    }

    #[test]
    fn test_door_is_walkable_twelve_step_cycle() {
        let mut rng = SimpleRng::new(1);
        let class = classify('D', Neighbors::default(), &mut rng);
        assert!(!class.obstacle);
        assert_eq!(class.frames.len(), 12);
        assert_eq!(class.frames[0], TileIndex::new(4, 0));
        assert_eq!(class.frames[11], TileIndex::new(15, 0));
    }

    #[test]
    fn test_unrecognized_char_is_floor() {
        let mut rng = SimpleRng::new(1);
        let class = classify('Z', Neighbors::default(), &mut rng);
        assert!(!class.obstacle);
        assert_eq!(class.frames.len(), 1);
        assert!(FLOOR_VARIANTS.contains(&class.frames[0]));
        assert_eq!(spawn_role('Z'), None);
    }

    #[test]
    fn test_floor_variant_choice_is_seed_deterministic() {
        let mut a = SimpleRng::new(99);
        let mut b = SimpleRng::new(99);
        for _ in 0..64 {
            let ca = classify('.', Neighbors::default(), &mut a);
            let cb = classify('.', Neighbors::default(), &mut b);
            assert_eq!(ca, cb);
        }
    }

    #[test]
    fn test_spawn_roles() {
        assert_eq!(spawn_role('@'), Some(Role::Player));
        assert_eq!(spawn_role('P'), Some(Role::Priest));
        assert_eq!(spawn_role('B'), Some(Role::Skeleton));
        assert_eq!(spawn_role('L'), Some(Role::Ladder));
        assert_eq!(spawn_role('T'), Some(Role::Treasure));
        assert_eq!(spawn_role('.'), None);
        assert_eq!(spawn_role('W'), None);
    }
}
