//! Cell values
//!
//! Foundational types for the grid-based simulation.

use crate::CellType;
use serde::{Deserialize, Serialize};

/// An opaque RGB colour
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// RGBA bytes with full opacity
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

/// A single cell in the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// What this cell is made of
    pub cell_type: CellType,
    /// Display colour, fixed at construction
    pub color: Rgb,
    /// Moved or spawned this tick (must not move again until the next tick)
    pub active: bool,
}

impl Cell {
    pub const AIR: Cell = Cell {
        cell_type: CellType::Air,
        color: Rgb::BLACK,
        active: false,
    };

    /// Freshly constructed cell; new cells are always active so they get drawn
    pub fn new(cell_type: CellType, color: Rgb) -> Self {
        Self {
            cell_type,
            color,
            active: true,
        }
    }

    pub fn is_air(&self) -> bool {
        self.cell_type == CellType::Air
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::AIR
    }
}
