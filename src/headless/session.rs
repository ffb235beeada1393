//! Headless session - the host loop without a window
//!
//! Each tick steps the world, samples the (simulated) pointer once and paints,
//! then redraws the cells flagged active. Painting after the step keeps fresh
//! cells flagged until the frame that draws them.

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

use sandgox_core::world::{Brush, RuleSet, SeedPattern, TickStats, World, WorldRng};

use super::PixelRenderer;
use crate::config::{RenderConfig, SandgoxConfig};
use crate::screenshot;

/// Everything a headless run needs besides the RNG
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub grid_size: usize,
    pub cell_size: usize,
    pub rules: RuleSet,
    pub render: RenderConfig,
    pub pattern: SeedPattern,
    pub ticks: u64,
    /// Brush held down at the top centre for the whole run
    pub brush: Option<Brush>,
    pub snapshot: Option<PathBuf>,
    pub show_progress: bool,
}

impl SessionConfig {
    pub fn from_config(config: &SandgoxConfig, pattern: SeedPattern, ticks: u64) -> Self {
        Self {
            grid_size: config.grid_size(),
            cell_size: config.screen.cell_size as usize,
            rules: config.rules,
            render: config.render,
            pattern,
            ticks,
            brush: None,
            snapshot: None,
            show_progress: false,
        }
    }

    /// Where the simulated pointer rests: top centre of the grid
    pub fn pointer(&self) -> (i32, i32) {
        ((self.grid_size / 2) as i32, 0)
    }
}

/// Summary of a finished session
#[derive(Debug, Clone)]
pub struct SessionSummary {
    pub ticks: u64,
    pub painted: usize,
    pub stats: TickStats,
    /// Cells redrawn across all frames
    pub cells_drawn: usize,
}

/// Runs a headless session
pub struct HeadlessSession {
    config: SessionConfig,
    world: World,
    renderer: PixelRenderer,
}

impl HeadlessSession {
    pub fn new<R: WorldRng>(config: SessionConfig, rng: &mut R) -> Self {
        let world = World::with_pattern(config.grid_size, config.rules, config.pattern, rng);
        let renderer = PixelRenderer::new(config.grid_size, config.cell_size, config.render);
        Self {
            config,
            world,
            renderer,
        }
    }

    fn progress_style() -> Result<ProgressStyle> {
        Ok(ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ticks {msg}",
            )?
            .progress_chars("=>-"))
    }

    /// Run the configured number of ticks
    pub fn run<R: WorldRng>(&mut self, rng: &mut R) -> Result<SessionSummary> {
        let pb = if self.config.show_progress {
            let pb = ProgressBar::new(self.config.ticks);
            pb.set_style(Self::progress_style()?);
            pb
        } else {
            ProgressBar::hidden()
        };

        log::info!(
            "Headless run: {0}x{0} grid, `{1}` pattern, {2} ticks",
            self.config.grid_size,
            self.config.pattern,
            self.config.ticks
        );
        if let Some(brush) = &self.config.brush {
            log::info!(
                "Painting {} (radius {}) at {:?} every tick",
                brush.cell_type,
                brush.radius,
                self.config.pointer()
            );
        }

        // First frame draws everything
        self.renderer.render_full(&self.world);

        let mut stats = TickStats::default();
        let mut painted = 0;
        let mut cells_drawn = self.config.grid_size * self.config.grid_size;
        let (px, py) = self.config.pointer();

        for _ in 0..self.config.ticks {
            self.world.step(&mut stats, rng);
            if let Some(brush) = &self.config.brush {
                painted += self.world.apply_brush(brush, px, py, rng);
            }
            cells_drawn += self.renderer.render_changed(&self.world);
            pb.inc(1);
        }

        pb.finish_with_message(format!("{} swaps", stats.swaps));
        log::info!(
            "Finished after {} ticks: {} swaps, {} spawns, {} destroyed, {} cells painted",
            self.world.tick(),
            stats.swaps,
            stats.spawns,
            stats.destroys,
            painted
        );
        log::debug!("Final cell counts: {:?}", self.world.type_counts());

        if let Some(path) = &self.config.snapshot {
            screenshot::capture_world_snapshot(
                &self.world,
                self.config.cell_size,
                self.config.render,
                path,
            )?;
        }

        Ok(SessionSummary {
            ticks: self.world.tick(),
            painted,
            stats,
            cells_drawn,
        })
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn renderer(&self) -> &PixelRenderer {
        &self.renderer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;
    use sandgox_core::simulation::CellType;

    fn session_config(ticks: u64) -> SessionConfig {
        let mut config =
            SessionConfig::from_config(&SandgoxConfig::default(), SeedPattern::Empty, ticks);
        config.grid_size = 20;
        config.cell_size = 2;
        config
    }

    #[test]
    fn test_session_without_brush_stays_empty() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(1);
        let mut session = HeadlessSession::new(session_config(10), &mut rng);

        let summary = session.run(&mut rng).expect("run");

        assert_eq!(summary.ticks, 10);
        assert_eq!(summary.painted, 0);
        assert_eq!(summary.stats.swaps, 0);
        assert_eq!(session.world().count(CellType::Air), 400);
    }

    #[test]
    fn test_session_brush_pours_sand() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(2);
        let mut config = session_config(30);
        config.brush = Some(Brush::new(CellType::Sand, 1));
        let mut session = HeadlessSession::new(config, &mut rng);

        let summary = session.run(&mut rng).expect("run");

        let sand = session.world().count(CellType::Sand);
        assert_eq!(sand, summary.painted);
        assert!(sand > 0);
        assert!(summary.stats.swaps > 0);
        assert!(summary.cells_drawn > 400);
    }

    #[test]
    fn test_incremental_frames_match_full_render() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(4);
        let mut config = session_config(40);
        config.pattern = SeedPattern::Benchmark;
        config.brush = Some(Brush::new(CellType::Water, 2));
        let mut session = HeadlessSession::new(config.clone(), &mut rng);

        session.run(&mut rng).expect("run");

        let mut fresh = PixelRenderer::new(config.grid_size, config.cell_size, config.render);
        fresh.render_full(session.world());
        assert!(session.renderer().buffer == fresh.buffer);
    }

    #[test]
    fn test_session_writes_snapshot() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("final.png");
        let mut rng = Xoshiro256StarStar::seed_from_u64(3);
        let mut config = session_config(5);
        config.snapshot = Some(path.clone());

        HeadlessSession::new(config, &mut rng)
            .run(&mut rng)
            .expect("run");

        assert!(path.exists());
    }
}
