//! Cellular automata update logic - per-type cell physics

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::{CellFactory, Grid, SimStats, WorldRng};
use crate::simulation::{Behavior, Cell, CellType, CellTypes};

/// Tunable parameters of the rule set
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    /// Diagonal moves also need the orthogonal side cell to be passable
    /// (air or liquid), so matter can't slip through a corner gap
    #[serde(default)]
    pub corner_blocking: bool,
}

type Candidates = SmallVec<[(usize, usize); 3]>;

/// Cellular automata updater - handles cell movement and area effects
pub struct CellularAutomataUpdater;

impl CellularAutomataUpdater {
    /// Whether `origin` may trade places with `target`
    ///
    /// This is the single movement law shared by every mover: neither cell
    /// moved this tick, the types differ, and the target is air or a lighter
    /// cell where at least one side is liquid.
    pub fn can_swap(types: &CellTypes, origin: &Cell, target: &Cell) -> bool {
        if origin.active || target.active || origin.cell_type == target.cell_type {
            return false;
        }

        if target.cell_type == CellType::Air {
            return true;
        }

        let origin_props = types.get(origin.cell_type);
        let target_props = types.get(target.cell_type);
        let has_liquid = origin_props.liquid || target_props.liquid;

        has_liquid && target_props.density < origin_props.density
    }

    /// Run the rule for whatever sits at (x, y)
    pub fn update_cell<R: WorldRng>(
        grid: &mut Grid,
        types: &CellTypes,
        rules: &RuleSet,
        x: usize,
        y: usize,
        stats: &mut dyn SimStats,
        rng: &mut R,
    ) {
        let cell = grid.get(x, y);
        match types.get(cell.cell_type).behavior {
            Behavior::Inert => {}
            Behavior::Powder => Self::update_powder(grid, types, rules, x, y, stats, rng),
            Behavior::Liquid => Self::update_liquid(grid, types, rules, x, y, stats, rng),
            Behavior::Generator => Self::update_generator(grid, types, x, y, stats, rng),
            Behavior::Destroyer => Self::update_destroyer(grid, types, x, y, stats, rng),
        }
    }

    /// Update powder (falls straight down, otherwise slides to a random open diagonal)
    pub fn update_powder<R: WorldRng>(
        grid: &mut Grid,
        types: &CellTypes,
        rules: &RuleSet,
        x: usize,
        y: usize,
        stats: &mut dyn SimStats,
        rng: &mut R,
    ) {
        let origin = grid.get(x, y);

        // Straight down always wins
        if let Some((tx, ty)) = Self::target(grid, types, &origin, x, y, 0, 1) {
            grid.swap(x, y, tx, ty);
            stats.record_swap();
            return;
        }

        let mut candidates = Candidates::new();
        for dx in [-1, 1] {
            if let Some(pos) = Self::diagonal_target(grid, types, rules, &origin, x, y, dx) {
                candidates.push(pos);
            }
        }

        Self::swap_with_random(grid, x, y, &candidates, stats, rng);
    }

    /// Update liquid (random pick among open downward cells, else among open sides)
    pub fn update_liquid<R: WorldRng>(
        grid: &mut Grid,
        types: &CellTypes,
        rules: &RuleSet,
        x: usize,
        y: usize,
        stats: &mut dyn SimStats,
        rng: &mut R,
    ) {
        let origin = grid.get(x, y);
        let mut candidates = Candidates::new();

        if let Some(pos) = Self::target(grid, types, &origin, x, y, 0, 1) {
            candidates.push(pos);
        }
        for dx in [1, -1] {
            if let Some(pos) = Self::diagonal_target(grid, types, rules, &origin, x, y, dx) {
                candidates.push(pos);
            }
        }

        // Lateral flow only when nothing below is open. The bottom row has
        // nothing below at all, so water resting on the floor still spreads
        // sideways rather than being skipped.
        if candidates.is_empty() {
            for dx in [1, -1] {
                if let Some(pos) = Self::target(grid, types, &origin, x, y, dx, 0) {
                    candidates.push(pos);
                }
            }
        }

        Self::swap_with_random(grid, x, y, &candidates, stats, rng);
    }

    /// Fill every empty neighbour with fresh water
    pub fn update_generator<R: WorldRng>(
        grid: &mut Grid,
        types: &CellTypes,
        x: usize,
        y: usize,
        stats: &mut dyn SimStats,
        rng: &mut R,
    ) {
        for (nx, ny) in grid.neighbors8(x, y) {
            if grid.get(nx, ny).is_air() {
                grid.set(nx, ny, CellFactory::spawn(types, CellType::Water, rng));
                stats.record_spawn();
            }
        }
    }

    /// Replace every neighbour that isn't a black hole with fresh air
    pub fn update_destroyer<R: WorldRng>(
        grid: &mut Grid,
        types: &CellTypes,
        x: usize,
        y: usize,
        stats: &mut dyn SimStats,
        rng: &mut R,
    ) {
        for (nx, ny) in grid.neighbors8(x, y) {
            let target = grid.get(nx, ny);
            if target.cell_type == CellType::BlackHole {
                continue;
            }
            if !target.is_air() {
                stats.record_destroy();
            }
            grid.set(nx, ny, CellFactory::spawn(types, CellType::Air, rng));
        }
    }

    /// Offset position if it exists and `origin` may swap into it
    fn target(
        grid: &Grid,
        types: &CellTypes,
        origin: &Cell,
        x: usize,
        y: usize,
        dx: i32,
        dy: i32,
    ) -> Option<(usize, usize)> {
        let (tx, ty) = grid.offset(x, y, dx, dy)?;
        Self::can_swap(types, origin, &grid.get(tx, ty)).then_some((tx, ty))
    }

    /// Down-left (`dx = -1`) or down-right (`dx = 1`) target
    fn diagonal_target(
        grid: &Grid,
        types: &CellTypes,
        rules: &RuleSet,
        origin: &Cell,
        x: usize,
        y: usize,
        dx: i32,
    ) -> Option<(usize, usize)> {
        let pos = Self::target(grid, types, origin, x, y, dx, 1)?;

        if rules.corner_blocking {
            let (sx, sy) = grid.offset(x, y, dx, 0)?;
            let side = grid.get(sx, sy);
            if !side.is_air() && !types.is_liquid(side.cell_type) {
                return None;
            }
        }

        Some(pos)
    }

    /// Swap with one candidate chosen uniformly; returns whether a move happened
    fn swap_with_random<R: WorldRng>(
        grid: &mut Grid,
        x: usize,
        y: usize,
        candidates: &[(usize, usize)],
        stats: &mut dyn SimStats,
        rng: &mut R,
    ) -> bool {
        let (tx, ty) = match candidates.len() {
            0 => return false,
            1 => candidates[0],
            len => candidates[rng.gen_index(len)],
        };

        grid.swap(x, y, tx, ty);
        stats.record_swap();
        true
    }
}
