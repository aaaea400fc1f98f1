//! Scanline-based textured triangle rasterization.
//!
//! # Algorithm Overview
//!
//! 1. **Sort vertices** by screen Y (stable, so ties keep input order)
//! 2. **Walk scanlines** from the top vertex to the bottom vertex
//! 3. **Find the span** on each scanline by intersecting two edges:
//!
//! ```text
//!        top
//!        /\
//!       /  \        above mid.y: (top -> mid) and (top -> bottom)
//!      /    \
//!   mid ----- \     at/below mid.y: (mid -> bottom) and (top -> bottom)
//!        \     \
//!          \    \
//!            \   \
//!              bottom
//! ```
//!
//! 4. **Fill the span** pixel by pixel, interpolating depth and UV between
//!    the two edge points, depth testing and sampling the texture.
//!
//! Every attribute is interpolated linearly in screen space (affine). There is
//! no division by depth, so textures visibly warp on oblique triangles.
//!
//! # Coverage
//!
//! Scanline `y` is drawn when `top.y <= y <= bottom.y`; pixel `x` on a span
//! is drawn when `left <= x <= right`. Both ranges are clipped to the buffer
//! before any pixel is visited.
//!
//! # Degenerate Edges
//!
//! The interpolation parameter along an edge (or a span) whose endpoints share
//! the same coordinate is taken as `0`, so horizontal edges, zero-height
//! triangles and zero-width spans never divide by zero.

use super::{Rasterizer, Triangle};
use crate::colors;
use crate::math::inverse_lerp;
use crate::projection::ScreenVertex;
use crate::render::framebuffer::FrameBuffer;
use crate::texture::Texture;

/// Scanline-based triangle rasterizer with depth testing and texture mapping.
///
/// # Characteristics
///
/// - **Cache-friendly**: Processes pixels in row order
/// - **Affine**: depth and UV are linear in screen space
/// - **Order independent**: with the strict depth test, overlapping
///   triangles at different depths give the same image in any draw order
#[derive(Debug, Default, Clone, Copy)]
pub struct ScanlineRasterizer;

impl ScanlineRasterizer {
    /// Creates a new scanline rasterizer instance.
    pub fn new() -> Self {
        Self
    }

    /// Sorts the three vertices by Y (ascending: top to bottom in screen space).
    ///
    /// The sort is stable, so vertices on the same row keep their input order.
    fn sort_by_y(mut vertices: [ScreenVertex; 3]) -> [ScreenVertex; 3] {
        vertices.sort_by(|a, b| a.y.total_cmp(&b.y));
        vertices
    }

    /// Point on edge `start -> end` at scanline `y`.
    #[inline]
    fn edge_at(start: ScreenVertex, end: ScreenVertex, y: f32) -> ScreenVertex {
        start.lerp(end, inverse_lerp(start.y, end.y, y))
    }

    /// Fills one horizontal span between two edge points on row `y`.
    fn draw_span(
        y: i32,
        a: ScreenVertex,
        b: ScreenVertex,
        texture: &Texture,
        buffer: &mut FrameBuffer,
    ) {
        let (left, right) = if a.x <= b.x { (a, b) } else { (b, a) };

        let x_start = (left.x.ceil() as i32).max(0);
        let x_end = (right.x.floor() as i32).min(buffer.width() as i32 - 1);

        for x in x_start..=x_end {
            let t = inverse_lerp(left.x, right.x, x as f32);
            let fragment = left.lerp(right, t);

            buffer.set_pixel_with_depth(x, y, fragment.depth, || {
                colors::opaque(texture.sample(fragment.uv.x, fragment.uv.y))
            });
        }
    }
}

impl Rasterizer for ScanlineRasterizer {
    /// Fills a textured triangle using the scanline algorithm.
    ///
    /// # Algorithm Steps
    ///
    /// 1. Sort vertices so that `top.y <= mid.y <= bottom.y`
    /// 2. For each covered row, intersect the long edge (top -> bottom) and
    ///    the short edge on the current side of `mid.y`
    /// 3. Fill the span between the intersections with depth-tested texels
    fn fill_triangle(&self, triangle: &Triangle, texture: &Texture, buffer: &mut FrameBuffer) {
        if !triangle.vertices.iter().all(ScreenVertex::is_finite) {
            return;
        }

        let [top, mid, bottom] = Self::sort_by_y(triangle.vertices);

        let y_start = (top.y.ceil() as i32).max(0);
        let y_end = (bottom.y.floor() as i32).min(buffer.height() as i32 - 1);

        for y in y_start..=y_end {
            let row = y as f32;
            let long = Self::edge_at(top, bottom, row);
            let short = if row < mid.y {
                Self::edge_at(top, mid, row)
            } else {
                Self::edge_at(mid, bottom, row)
            };
            Self::draw_span(y, short, long, texture, buffer);
        }
    }
}
