//! Paint tool

use serde::{Deserialize, Serialize};

use super::{CellFactory, Grid, WorldRng};
use crate::simulation::{CellType, CellTypes};

/// A square brush: type plus Chebyshev radius
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brush {
    pub radius: u32,
    pub cell_type: CellType,
}

impl Brush {
    pub fn new(cell_type: CellType, radius: u32) -> Self {
        Self { radius, cell_type }
    }

    /// In-bounds positions within `radius` of (cx, cy)
    ///
    /// The centre itself may lie outside the grid; only the part of the
    /// square that overlaps the grid is returned.
    pub fn footprint(&self, size: usize, cx: i32, cy: i32) -> impl Iterator<Item = (usize, usize)> {
        let r = i64::from(self.radius);
        let limit = size as i64 - 1;
        let (cx, cy) = (i64::from(cx), i64::from(cy));

        let x_range = (cx - r).max(0)..=(cx + r).min(limit);
        let y_range = (cy - r).max(0)..=(cy + r).min(limit);

        y_range.flat_map(move |y| {
            x_range
                .clone()
                .map(move |x| (x as usize, y as usize))
        })
    }

    /// Paint onto the grid, returning how many cells were written
    ///
    /// Air erases anything. Every other type only fills air, so painting never
    /// destroys existing matter.
    pub fn apply<R: WorldRng>(
        &self,
        grid: &mut Grid,
        types: &CellTypes,
        cx: i32,
        cy: i32,
        rng: &mut R,
    ) -> usize {
        let erasing = self.cell_type == CellType::Air;
        let mut written = 0;

        for (x, y) in self.footprint(grid.size(), cx, cy) {
            if erasing || grid.get(x, y).is_air() {
                grid.set(x, y, CellFactory::spawn(types, self.cell_type, rng));
                written += 1;
            }
        }

        written
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;

    fn rng() -> Xoshiro256StarStar {
        Xoshiro256StarStar::seed_from_u64(21)
    }

    #[test]
    fn test_footprint_radius_zero_is_single_cell() {
        let brush = Brush::new(CellType::Sand, 0);
        let cells: Vec<_> = brush.footprint(10, 4, 7).collect();
        assert_eq!(cells, vec![(4, 7)]);
    }

    #[test]
    fn test_footprint_is_square() {
        let brush = Brush::new(CellType::Sand, 2);
        let cells: Vec<_> = brush.footprint(10, 5, 5).collect();
        assert_eq!(cells.len(), 25);
        assert!(cells.contains(&(3, 3)));
        assert!(cells.contains(&(7, 7)));
        assert!(!cells.contains(&(8, 5)));
    }

    #[test]
    fn test_footprint_clipped_at_edges() {
        let brush = Brush::new(CellType::Water, 1);
        assert_eq!(brush.footprint(10, 0, 0).count(), 4);
        assert_eq!(brush.footprint(10, 9, 5).count(), 6);

        // Centre off the grid, square still overlaps one column
        let cells: Vec<_> = brush.footprint(10, -1, 5).collect();
        assert_eq!(cells, vec![(0, 4), (0, 5), (0, 6)]);
    }

    #[test]
    fn test_footprint_entirely_outside() {
        let brush = Brush::new(CellType::Sand, 3);
        assert_eq!(brush.footprint(10, -10, 2).count(), 0);
        assert_eq!(brush.footprint(10, 4, 40).count(), 0);
    }

    #[test]
    fn test_apply_fills_air() {
        let types = CellTypes::new();
        let mut grid = Grid::new(8);

        let written = Brush::new(CellType::Sand, 1).apply(&mut grid, &types, 3, 3, &mut rng());

        assert_eq!(written, 9);
        assert_eq!(grid.count(CellType::Sand), 9);
        assert!(grid.get(2, 2).active);
    }

    #[test]
    fn test_apply_never_overwrites_matter() {
        let types = CellTypes::new();
        let mut grid = Grid::new(8);
        let mut rng = rng();
        Brush::new(CellType::Metal, 0).apply(&mut grid, &types, 3, 3, &mut rng);

        let written = Brush::new(CellType::Water, 1).apply(&mut grid, &types, 3, 3, &mut rng);

        assert_eq!(written, 8);
        assert_eq!(grid.get(3, 3).cell_type, CellType::Metal);
        assert_eq!(grid.count(CellType::Water), 8);
    }

    #[test]
    fn test_apply_air_erases_everything() {
        let types = CellTypes::new();
        let mut grid = Grid::new(8);
        let mut rng = rng();
        Brush::new(CellType::Metal, 2).apply(&mut grid, &types, 4, 4, &mut rng);

        let written = Brush::new(CellType::Air, 1).apply(&mut grid, &types, 4, 4, &mut rng);

        assert_eq!(written, 9);
        assert_eq!(grid.count(CellType::Metal), 16);
        assert!(grid.get(4, 4).is_air());
    }
}
