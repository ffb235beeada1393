//! World - owns the grid and exposes the engine API to the host loop

use super::ca_update::RuleSet;
use super::scheduler::UpdateScheduler;
use super::{Brush, CellFactory, Grid, SeedPattern, SimStats, WorldRng};
use crate::simulation::{Cell, CellType, CellTypes};

/// The simulated world: one square grid plus the rules that evolve it
///
/// All mutation goes through `&mut self` (`step`, `paint`, `reset`), so a
/// renderer holding `&World` can never observe a half-finished tick.
#[derive(Clone, Debug)]
pub struct World {
    grid: Grid,

    /// Cell type definitions
    types: CellTypes,

    rules: RuleSet,

    /// Completed ticks since creation or the last reset
    tick: u64,
}

impl World {
    /// Create a world of `size × size` air cells
    pub fn new(size: usize, rules: RuleSet) -> Self {
        log::debug!(
            "Creating {size}x{size} world (corner blocking: {})",
            rules.corner_blocking
        );
        Self {
            grid: Grid::new(size),
            types: CellTypes::new(),
            rules,
            tick: 0,
        }
    }

    /// Create a world and seed it with `pattern`
    pub fn with_pattern<R: WorldRng>(
        size: usize,
        rules: RuleSet,
        pattern: SeedPattern,
        rng: &mut R,
    ) -> Self {
        let mut world = Self::new(size, rules);
        world.reset(pattern, rng);
        world
    }

    /// Reinitialise every cell from `pattern` and restart the tick counter
    ///
    /// Every cell is freshly constructed, so the whole grid is active and the
    /// next frame redraws everything.
    pub fn reset<R: WorldRng>(&mut self, pattern: SeedPattern, rng: &mut R) {
        let size = self.grid.size();
        let types = &self.types;
        self.grid.fill_with(|x, y| {
            CellFactory::spawn(types, pattern.cell_type_at(x, y, size), rng)
        });
        self.tick = 0;

        log::debug!(
            "World reset to `{pattern}` pattern: {:?}",
            self.type_counts()
        );
    }

    /// Advance the simulation by one tick
    pub fn step<R: WorldRng>(&mut self, stats: &mut dyn SimStats, rng: &mut R) {
        UpdateScheduler::run_tick(&mut self.grid, &self.types, &self.rules, stats, rng);
        self.tick += 1;

        log::trace!(
            "Tick {} done, {} cells changed",
            self.tick,
            self.grid.count_active()
        );
    }

    /// Paint a square brush centred on (cx, cy), returning the cells written
    ///
    /// The centre may lie off the grid; only the overlapping part is painted.
    pub fn paint<R: WorldRng>(
        &mut self,
        cx: i32,
        cy: i32,
        radius: u32,
        cell_type: CellType,
        rng: &mut R,
    ) -> usize {
        self.apply_brush(&Brush::new(cell_type, radius), cx, cy, rng)
    }

    pub fn apply_brush<R: WorldRng>(
        &mut self,
        brush: &Brush,
        cx: i32,
        cy: i32,
        rng: &mut R,
    ) -> usize {
        let written = brush.apply(&mut self.grid, &self.types, cx, cy, rng);
        log::trace!(
            "Painted {written} {} cells at ({cx}, {cy}) r={}",
            brush.cell_type,
            brush.radius
        );
        written
    }

    /// Snapshot of the cell at (x, y); panics when out of range
    pub fn cell_at(&self, x: usize, y: usize) -> Cell {
        self.grid.get(x, y)
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn types(&self) -> &CellTypes {
        &self.types
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn count(&self, cell_type: CellType) -> usize {
        self.grid.count(cell_type)
    }

    /// Whether row `y` is completely filled with non-air cells
    pub fn is_row_filled(&self, y: usize) -> bool {
        self.grid.is_row_filled(y)
    }

    /// Per-type cell counts, in [`CellType::ALL`] order
    pub fn type_counts(&self) -> Vec<(CellType, usize)> {
        CellType::ALL
            .into_iter()
            .zip(self.grid.type_histogram())
            .collect()
    }
}
