//! World management - grid, rules, scheduling, painting

mod brush;
mod ca_update;
mod cell_factory;
mod grid;
mod neighbor_queries;
pub mod rng_trait;
mod scheduler;
mod seed;
pub mod stats;
#[allow(clippy::module_inception)]
mod world;

pub use brush::Brush;
pub use ca_update::{CellularAutomataUpdater, RuleSet};
pub use cell_factory::CellFactory;
pub use grid::Grid;
pub use neighbor_queries::{NEIGHBOR_OFFSETS, NeighborQueries};
pub use rng_trait::WorldRng;
pub use scheduler::UpdateScheduler;
pub use seed::{SeedPattern, SeedPatternError};
pub use stats::{NoopStats, SimStats, TickStats};
pub use world::World;
