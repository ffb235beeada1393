//! Benchmark mode - seeded board, fixed tick budget, timing report

use std::fmt;
use std::time::{Duration, Instant};

use sandgox_core::world::{RuleSet, SeedPattern, TickStats, World, WorldRng};

use crate::config::BenchmarkConfig;

/// Why a benchmark run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Ran the configured number of ticks
    TickLimit,
    /// The watched row filled up
    RowFilled(usize),
}

/// Outcome of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkReport {
    pub ticks: u64,
    pub elapsed: Duration,
    pub stats: TickStats,
    pub stop_reason: StopReason,
}

impl BenchmarkReport {
    /// Mean wall time per tick
    pub fn per_tick(&self) -> Duration {
        if self.ticks == 0 {
            return Duration::ZERO;
        }
        self.elapsed.div_f64(self.ticks as f64)
    }

    pub fn ticks_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs == 0.0 {
            return 0.0;
        }
        self.ticks as f64 / secs
    }
}

impl fmt::Display for BenchmarkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self.stop_reason {
            StopReason::TickLimit => "tick limit".to_string(),
            StopReason::RowFilled(row) => format!("row {row} filled"),
        };
        write!(
            f,
            "{} ticks in {:.2?} ({:.2?}/tick, {:.1} ticks/s), {} events ({} swaps, {} spawns, {} destroyed), stopped on {}",
            self.ticks,
            self.elapsed,
            self.per_tick(),
            self.ticks_per_second(),
            self.stats.total_events(),
            self.stats.swaps,
            self.stats.spawns,
            self.stats.destroys,
            reason
        )
    }
}

/// Runs the benchmark board until a stop condition hits
pub struct BenchmarkRunner {
    world: World,
    config: BenchmarkConfig,
}

impl BenchmarkRunner {
    pub fn new<R: WorldRng>(
        grid_size: usize,
        rules: RuleSet,
        config: BenchmarkConfig,
        rng: &mut R,
    ) -> Self {
        let world = World::with_pattern(grid_size, rules, SeedPattern::Benchmark, rng);
        Self { world, config }
    }

    /// Tick until `max_ticks` or until `stop_row` is full, whichever comes first
    pub fn run<R: WorldRng>(&mut self, rng: &mut R) -> BenchmarkReport {
        log::info!(
            "Benchmark: {0}x{0} grid, up to {1} ticks{2}",
            self.world.size(),
            self.config.max_ticks,
            self.config
                .stop_row
                .map(|row| format!(", stopping when row {row} fills"))
                .unwrap_or_default()
        );

        let mut stats = TickStats::default();
        let mut stop_reason = StopReason::TickLimit;
        let start = Instant::now();

        while self.world.tick() < self.config.max_ticks {
            self.world.step(&mut stats, rng);

            if let Some(row) = self.config.stop_row {
                if self.world.is_row_filled(row) {
                    stop_reason = StopReason::RowFilled(row);
                    break;
                }
            }
        }

        let report = BenchmarkReport {
            ticks: self.world.tick(),
            elapsed: start.elapsed(),
            stats,
            stop_reason,
        };
        log::info!("Benchmark finished: {report}");
        report
    }

    pub fn world(&self) -> &World {
        &self.world
    }
}
