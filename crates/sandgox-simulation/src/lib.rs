//! Cell simulation data for sandgox
//!
//! This crate provides the foundational data types for the cell engine:
//! - Cell type definitions (CellType, Behavior, TypeProperties, CellTypes)
//! - Cell values (Cell, Rgb)

mod cell;
mod cell_types;

pub use cell::{Cell, Rgb};
pub use cell_types::{Behavior, CellType, CellTypes, ParseCellTypeError, TypeProperties};
