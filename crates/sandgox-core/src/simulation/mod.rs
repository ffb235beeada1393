//! Simulation data - cell types, properties and cell values

// Re-export from sandgox-simulation so engine users need a single dependency
pub use sandgox_simulation::{
    Behavior, Cell, CellType, CellTypes, ParseCellTypeError, Rgb, TypeProperties,
};
