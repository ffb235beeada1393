//! Named starting layouts for the grid

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::simulation::CellType;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown seed pattern `{0}` (expected `empty` or `benchmark`)")]
pub struct SeedPatternError(pub String);

/// Initial grid contents
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedPattern {
    /// All air
    #[default]
    Empty,
    /// Sand sky, a water pool, a metal shelf, a black-hole shelf and a
    /// generator, laid out relative to the grid size
    Benchmark,
}

impl SeedPattern {
    /// Cell type at (x, y) on a `size × size` grid
    pub fn cell_type_at(self, x: usize, y: usize, size: usize) -> CellType {
        match self {
            SeedPattern::Empty => CellType::Air,
            SeedPattern::Benchmark => Self::benchmark_cell(x, y, size),
        }
    }

    // Proportions match the classic 100×100 benchmark board
    fn benchmark_cell(x: usize, y: usize, size: usize) -> CellType {
        let pct = |p: usize| size * p / 100;

        if y < pct(10) {
            CellType::Sand
        } else if y > pct(80) && x > pct(40) && x < pct(60) {
            CellType::Water
        } else if y == pct(50) && x > pct(20) && x < pct(40) {
            CellType::Metal
        } else if y == pct(50) && x > pct(60) && x < pct(95) {
            CellType::BlackHole
        } else if y == pct(30) && x > pct(74) && x < pct(78) {
            CellType::WaterGenerator
        } else {
            CellType::Air
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SeedPattern::Empty => "empty",
            SeedPattern::Benchmark => "benchmark",
        }
    }
}

impl fmt::Display for SeedPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SeedPattern {
    type Err = SeedPatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "empty" | "air" => Ok(SeedPattern::Empty),
            "benchmark" | "bench" => Ok(SeedPattern::Benchmark),
            _ => Err(SeedPatternError(s.to_string())),
        }
    }
}
