//! Square cell grid owned by the world

use smallvec::SmallVec;

use super::neighbor_queries::NeighborQueries;
use crate::simulation::{Cell, CellType};

/// Fixed-size `size × size` grid of cells, row-major
///
/// Accessors panic on out-of-range coordinates: every caller clips to
/// bounds first, so a miss means a broken invariant, not bad input.
#[derive(Clone, Debug)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid filled with (active) air, so the first frame draws everything
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "grid size must be non-zero");
        Self {
            size,
            cells: vec![
                Cell {
                    active: true,
                    ..Cell::AIR
                };
                size * size
            ],
        }
    }

    /// Side length in cells
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.size && y < self.size,
            "cell ({x}, {y}) outside {0}x{0} grid",
            self.size
        );
        y * self.size + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.cells[self.index(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        let idx = self.index(x, y);
        self.cells[idx] = cell;
    }

    /// Exchange two cells and mark both positions as updated this tick
    pub fn swap(&mut self, ax: usize, ay: usize, bx: usize, by: usize) {
        let idx_a = self.index(ax, ay);
        let idx_b = self.index(bx, by);
        self.cells.swap(idx_a, idx_b);
        self.cells[idx_a].active = true;
        self.cells[idx_b].active = true;
    }

    /// Check signed coordinates against the grid
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.size && (y as usize) < self.size
    }

    /// Up-to-8 surrounding positions, clipped to the grid
    pub fn neighbors8(&self, x: usize, y: usize) -> SmallVec<[(usize, usize); 8]> {
        NeighborQueries::neighbors8(self.size, x, y)
    }

    /// Apply an offset to a position, `None` when it leaves the grid
    pub fn offset(&self, x: usize, y: usize, dx: i32, dy: i32) -> Option<(usize, usize)> {
        NeighborQueries::offset(self.size, x, y, dx, dy)
    }

    /// Forget which cells moved last tick
    pub fn clear_active(&mut self) {
        for cell in &mut self.cells {
            cell.active = false;
        }
    }

    pub fn count(&self, cell_type: CellType) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.cell_type == cell_type)
            .count()
    }

    pub fn count_active(&self) -> usize {
        self.cells.iter().filter(|cell| cell.active).count()
    }

    /// Number of cells of each type, indexed like [`CellType::ALL`]
    pub fn type_histogram(&self) -> [usize; CellType::COUNT] {
        let mut histogram = [0; CellType::COUNT];
        for cell in &self.cells {
            histogram[cell.cell_type as usize] += 1;
        }
        histogram
    }

    /// True when every cell of row `y` holds matter
    pub fn is_row_filled(&self, y: usize) -> bool {
        self.row(y).iter().all(|cell| !cell.is_air())
    }

    pub fn row(&self, y: usize) -> &[Cell] {
        let start = self.index(0, y);
        &self.cells[start..start + self.size]
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Positions and cells that moved or spawned since the last clear
    pub fn active_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.active)
            .map(move |(idx, cell)| (idx % size, idx / size, *cell))
    }

    /// Overwrite every cell with whatever `make` returns for its position
    pub fn fill_with<F>(&mut self, mut make: F)
    where
        F: FnMut(usize, usize) -> Cell,
    {
        let size = self.size;
        for (idx, cell) in self.cells.iter_mut().enumerate() {
            *cell = make(idx % size, idx / size);
        }
    }
}
