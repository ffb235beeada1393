//! # Sandgox - 2D Falling Sand Cellular Automaton
//!
//! A square grid of sand, water, metal, water generators and black holes,
//! stepped one tick at a time and rendered to a pixel buffer.

pub mod config;
pub mod headless;
pub mod screenshot;

pub use sandgox_core::simulation;
pub use sandgox_core::world;

/// Common imports for internal use
pub mod prelude {
    pub use crate::config::{RenderConfig, SandgoxConfig};
    pub use crate::simulation::{Cell, CellType, CellTypes};
    pub use crate::world::{Brush, RuleSet, SeedPattern, World};
}
