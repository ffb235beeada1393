//! Headless runs without a window
//!
//! This module provides the pieces a windowless host loop needs:
//! - Pixel buffer rendering of the grid
//! - A session runner that steps, paints and redraws each tick
//! - The fixed-budget benchmark mode

mod benchmark;
mod pixel_renderer;
mod session;

pub use benchmark::{BenchmarkReport, BenchmarkRunner, StopReason};
pub use pixel_renderer::PixelRenderer;
pub use session::{HeadlessSession, SessionConfig, SessionSummary};
