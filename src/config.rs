//! Sandbox configuration with layered loading
//!
//! Configuration is loaded from multiple sources (lowest to highest priority):
//! 1. Compiled defaults
//! 2. `config.ron` file (if exists)
//! 3. Environment variables prefixed with `SANDGOX_`
//!
//! Example environment variable: `SANDGOX_SCREEN__CELL_SIZE=4`

use anyhow::{ensure, Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use sandgox_core::simulation::CellType;
use sandgox_core::world::RuleSet;

/// Main sandbox configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SandgoxConfig {
    #[serde(default)]
    pub screen: ScreenConfig,

    #[serde(default)]
    pub brush: BrushConfig,

    #[serde(default)]
    pub rules: RuleSet,

    #[serde(default)]
    pub render: RenderConfig,

    #[serde(default)]
    pub benchmark: BenchmarkConfig,
}

/// Grid geometry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenConfig {
    /// Width (and height) of the drawn area in pixels
    pub width: u32,
    /// Pixels per cell along each axis
    pub cell_size: u32,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: 500,
            cell_size: 5,
        }
    }
}

/// Paint tool settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrushConfig {
    /// Radius used when none is given on the command line
    pub default_radius: u32,
    /// Largest radius the brush accepts
    pub max_radius: u32,
    pub default_cell_type: CellType,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            default_radius: 0,
            max_radius: 20,
            default_cell_type: CellType::Sand,
        }
    }
}

/// Presentation toggles for the pixel renderer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Draw every cell in its type's base colour instead of its own shade
    pub single_color: bool,
    /// Only cells changed this tick are drawn; everything else is black
    pub show_only_updated: bool,
}

/// Benchmark run limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkConfig {
    /// Stop after this many ticks
    pub max_ticks: u64,
    /// Stop early once this row is completely filled
    #[serde(default)]
    pub stop_row: Option<usize>,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            max_ticks: 100,
            stop_row: None,
        }
    }
}

impl SandgoxConfig {
    /// Load configuration with layered priority:
    /// 1. Compiled defaults (lowest priority)
    /// 2. `config.ron` file (if exists)
    /// 3. Environment variables prefixed with `SANDGOX_` (highest priority)
    pub fn load() -> Result<Self> {
        Self::load_from("config")
    }

    /// Same as [`SandgoxConfig::load`] with a custom file name (extension optional)
    pub fn load_from(file_name: &str) -> Result<Self> {
        let builder = Config::builder()
            // Layer 1: Compiled defaults
            .set_default("screen.width", 500_i64)?
            .set_default("screen.cell_size", 5_i64)?
            .set_default("brush.default_radius", 0_i64)?
            .set_default("brush.max_radius", 20_i64)?
            .set_default("brush.default_cell_type", "sand")?
            .set_default("rules.corner_blocking", false)?
            .set_default("render.single_color", false)?
            .set_default("render.show_only_updated", false)?
            .set_default("benchmark.max_ticks", 100_i64)?
            // Layer 2: Config file (optional, won't error if missing)
            .add_source(
                File::with_name(file_name)
                    .format(config::FileFormat::Ron)
                    .required(false),
            )
            // Layer 3: Environment variables (SANDGOX_SCREEN__WIDTH, etc.)
            .add_source(Environment::with_prefix("SANDGOX").separator("__"));

        let config = builder.build().context("Failed to build configuration")?;

        let config: Self = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Check the values that other parts of the program rely on
    pub fn validate(&self) -> Result<()> {
        ensure!(self.screen.cell_size > 0, "screen.cell_size must be positive");
        ensure!(
            self.screen.width >= self.screen.cell_size,
            "screen.width ({}) must be at least one cell ({})",
            self.screen.width,
            self.screen.cell_size
        );
        ensure!(
            self.brush.default_radius <= self.brush.max_radius,
            "brush.default_radius ({}) exceeds brush.max_radius ({})",
            self.brush.default_radius,
            self.brush.max_radius
        );
        ensure!(self.benchmark.max_ticks > 0, "benchmark.max_ticks must be positive");
        if let Some(row) = self.benchmark.stop_row {
            ensure!(
                row < self.grid_size(),
                "benchmark.stop_row ({row}) is outside the {0}x{0} grid",
                self.grid_size()
            );
        }
        Ok(())
    }

    /// Cells along each side of the grid
    pub fn grid_size(&self) -> usize {
        (self.screen.width / self.screen.cell_size) as usize
    }
}
