//! PNG snapshots of the grid

use anyhow::{Context, Result};
use std::path::Path;

use sandgox_core::world::World;

use crate::config::RenderConfig;
use crate::headless::PixelRenderer;

/// Render `world` and write it to `output_path` as PNG
pub fn capture_world_snapshot(
    world: &World,
    cell_size: usize,
    render: RenderConfig,
    output_path: impl AsRef<Path>,
) -> Result<()> {
    let output_path = output_path.as_ref();
    log::info!(
        "Capturing {0}x{0} snapshot at tick {1}",
        world.size() * cell_size,
        world.tick()
    );

    let mut renderer = PixelRenderer::new(world.size(), cell_size, render);
    renderer.render_full(world);

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    save_buffer_as_png(&renderer.buffer, renderer.side, renderer.side, output_path)?;
    log::info!("Snapshot saved to {}", output_path.display());
    Ok(())
}

/// Save RGBA buffer as PNG
pub fn save_buffer_as_png(
    buffer: &[u8],
    width: usize,
    height: usize,
    path: impl AsRef<Path>,
) -> Result<()> {
    use image::{ImageBuffer, Rgba};

    let path = path.as_ref();
    let img: ImageBuffer<Rgba<u8>, _> =
        ImageBuffer::from_raw(width as u32, height as u32, buffer.to_vec())
            .ok_or_else(|| anyhow::anyhow!("Failed to create image buffer"))?;

    img.save(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
