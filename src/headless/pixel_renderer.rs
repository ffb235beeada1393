//! CPU-based pixel buffer renderer for headless snapshots
//!
//! Renders the grid to an RGBA buffer without GPU dependencies. Each cell
//! becomes a `cell_size × cell_size` block.

use sandgox_core::simulation::Cell;
use sandgox_core::world::World;

use crate::config::RenderConfig;

/// CPU-based renderer that outputs to a pixel buffer
pub struct PixelRenderer {
    /// Cells per side of the grid being drawn
    pub grid_size: usize,
    /// Pixels per cell along each axis
    pub cell_size: usize,
    /// Width and height of the buffer in pixels
    pub side: usize,
    /// RGBA pixel buffer (4 bytes per pixel)
    pub buffer: Vec<u8>,
    pub config: RenderConfig,
}

impl PixelRenderer {
    /// Create a black buffer for a `grid_size × grid_size` grid
    pub fn new(grid_size: usize, cell_size: usize, config: RenderConfig) -> Self {
        let side = grid_size * cell_size;
        let mut buffer = vec![0u8; side * side * 4];
        for pixel in buffer.chunks_exact_mut(4) {
            pixel[3] = 255;
        }
        Self {
            grid_size,
            cell_size,
            side,
            buffer,
            config,
        }
    }

    /// Redraw every cell
    ///
    /// With `show_only_updated` set, cells that didn't change this tick are
    /// drawn black.
    pub fn render_full(&mut self, world: &World) {
        debug_assert_eq!(world.size(), self.grid_size);

        for y in 0..self.grid_size {
            for x in 0..self.grid_size {
                let cell = world.cell_at(x, y);
                let color = if self.config.show_only_updated && !cell.active {
                    [0, 0, 0, 255]
                } else {
                    self.cell_color(world, &cell)
                };
                self.fill_cell(x, y, color);
            }
        }
    }

    /// Redraw only the cells flagged active by the last tick or paint
    ///
    /// Everything else keeps whatever the buffer held before. Returns how
    /// many cells were drawn.
    pub fn render_changed(&mut self, world: &World) -> usize {
        debug_assert_eq!(world.size(), self.grid_size);

        if self.config.show_only_updated {
            self.clear();
        }

        let mut drawn = 0;
        for (x, y, cell) in world.grid().active_cells() {
            let color = self.cell_color(world, &cell);
            self.fill_cell(x, y, color);
            drawn += 1;
        }
        drawn
    }

    fn cell_color(&self, world: &World, cell: &Cell) -> [u8; 4] {
        if self.config.single_color {
            world.types().get(cell.cell_type).base_color().to_rgba()
        } else {
            cell.color.to_rgba()
        }
    }

    fn clear(&mut self) {
        for pixel in self.buffer.chunks_exact_mut(4) {
            pixel.copy_from_slice(&[0, 0, 0, 255]);
        }
    }

    fn fill_cell(&mut self, x: usize, y: usize, color: [u8; 4]) {
        let x0 = x * self.cell_size;
        let y0 = y * self.cell_size;

        for py in y0..y0 + self.cell_size {
            let start = (py * self.side + x0) * 4;
            let end = start + self.cell_size * 4;
            for pixel in self.buffer[start..end].chunks_exact_mut(4) {
                pixel.copy_from_slice(&color);
            }
        }
    }

    /// RGBA of the pixel at buffer coordinates (px, py)
    pub fn pixel(&self, px: usize, py: usize) -> [u8; 4] {
        let idx = (py * self.side + px) * 4;
        [
            self.buffer[idx],
            self.buffer[idx + 1],
            self.buffer[idx + 2],
            self.buffer[idx + 3],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;
    use sandgox_core::simulation::CellType;
    use sandgox_core::world::{NoopStats, RuleSet};

    fn rng() -> Xoshiro256StarStar {
        Xoshiro256StarStar::seed_from_u64(17)
    }

    #[test]
    fn test_pixel_renderer_creation() {
        let renderer = PixelRenderer::new(10, 5, RenderConfig::default());
        assert_eq!(renderer.side, 50);
        assert_eq!(renderer.buffer.len(), 50 * 50 * 4);
        assert_eq!(renderer.pixel(49, 49), [0, 0, 0, 255]);
    }

    #[test]
    fn test_render_full_draws_cell_blocks() {
        let mut world = World::new(4, RuleSet::default());
        let mut rng = rng();
        world.paint(1, 2, 0, CellType::Metal, &mut rng);

        let mut renderer = PixelRenderer::new(4, 3, RenderConfig::default());
        renderer.render_full(&world);

        let metal = world.types().get(CellType::Metal).base_color().to_rgba();
        assert_eq!(renderer.pixel(3, 6), metal);
        assert_eq!(renderer.pixel(5, 8), metal);
        assert_eq!(renderer.pixel(6, 6), [0, 0, 0, 255]);
    }

    #[test]
    fn test_single_color_uses_base_color() {
        let mut world = World::new(6, RuleSet::default());
        let mut rng = rng();
        world.paint(3, 3, 2, CellType::Sand, &mut rng);

        let config = RenderConfig {
            single_color: true,
            show_only_updated: false,
        };
        let mut renderer = PixelRenderer::new(6, 1, config);
        renderer.render_full(&world);

        let base = world.types().get(CellType::Sand).base_color().to_rgba();
        for y in 1..6 {
            for x in 1..6 {
                assert_eq!(renderer.pixel(x, y), base);
            }
        }
    }

    #[test]
    fn test_render_changed_only_touches_active_cells() {
        let mut world = World::new(5, RuleSet::default());
        let mut rng = rng();
        let mut renderer = PixelRenderer::new(5, 1, RenderConfig::default());
        renderer.render_full(&world);

        world.step(&mut NoopStats, &mut rng);
        world.paint(2, 0, 0, CellType::Sand, &mut rng);
        // Scribble over a pixel the next frame must leave alone
        renderer.buffer[..4].copy_from_slice(&[9, 9, 9, 255]);

        assert_eq!(renderer.render_changed(&world), 1);
        assert_eq!(renderer.pixel(2, 0), world.cell_at(2, 0).color.to_rgba());
        assert_eq!(renderer.pixel(0, 0), [9, 9, 9, 255]);
    }

    #[test]
    fn test_show_only_updated_blanks_resting_cells() {
        let mut world = World::new(5, RuleSet::default());
        let mut rng = rng();
        world.paint(0, 4, 0, CellType::Metal, &mut rng);
        world.paint(2, 0, 0, CellType::Sand, &mut rng);
        world.step(&mut NoopStats, &mut rng);

        let config = RenderConfig {
            single_color: false,
            show_only_updated: true,
        };
        let mut renderer = PixelRenderer::new(5, 1, config);
        renderer.render_full(&world);

        // Metal never moves, so it isn't drawn; the falling grain is
        assert_eq!(renderer.pixel(0, 4), [0, 0, 0, 255]);
        assert_eq!(renderer.pixel(2, 1), world.cell_at(2, 1).color.to_rgba());
    }
}
