//! Triangle rasterization.
//!
//! The [`Rasterizer`] trait is the seam between the frame loop and the
//! per-triangle fill. The crate ships one implementation,
//! [`ScanlineRasterizer`]; tests and benchmarks plug in their own to observe
//! or replace it.

mod scanline;

pub use scanline::ScanlineRasterizer;

use super::framebuffer::FrameBuffer;
use crate::projection::ScreenVertex;
use crate::texture::Texture;

/// A triangle ready for rasterization in screen space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub vertices: [ScreenVertex; 3],
}

impl Triangle {
    pub fn new(a: ScreenVertex, b: ScreenVertex, c: ScreenVertex) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    /// Builds a triangle only if none of its vertices were clipped.
    pub fn from_projected(
        a: Option<ScreenVertex>,
        b: Option<ScreenVertex>,
        c: Option<ScreenVertex>,
    ) -> Option<Self> {
        Some(Self::new(a?, b?, c?))
    }
}

/// Trait for triangle rasterization algorithms.
pub trait Rasterizer {
    /// Fill a textured triangle into the frame buffer.
    ///
    /// # Arguments
    /// * `triangle` - Screen-space triangle with depth and UV per vertex
    /// * `texture` - Image sampled for the fill color
    /// * `buffer` - The frame buffer to draw into (depth tested)
    fn fill_triangle(&self, triangle: &Triangle, texture: &Texture, buffer: &mut FrameBuffer);
}
