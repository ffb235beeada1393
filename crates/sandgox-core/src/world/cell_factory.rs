//! Fresh cell construction

use super::WorldRng;
use crate::simulation::{Cell, CellType, CellTypes};

/// Builds new cells with a colour drawn from their type's palette
pub struct CellFactory;

impl CellFactory {
    /// Construct an active cell of `cell_type`
    ///
    /// Single-colour types never consume randomness, so seeded runs stay
    /// reproducible regardless of how much air gets created.
    pub fn spawn<R: WorldRng>(types: &CellTypes, cell_type: CellType, rng: &mut R) -> Cell {
        let palette = types.get(cell_type).palette;
        let color = match palette.len() {
            1 => palette[0],
            len => palette[rng.gen_index(len)],
        };
        Cell::new(cell_type, color)
    }
}
