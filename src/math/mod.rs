//! Small vector types used by the pipeline.
//!
//! Rotations are expressed as chained per-axis operations on [`Vec3`] rather
//! than as matrices, so there is no matrix type here.

pub mod vec2;
pub mod vec3;

pub use vec2::Vec2;
pub use vec3::Vec3;

/// Linear interpolation between two scalars.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Interpolation parameter of `value` within `[start, end]`.
///
/// Returns `0.0` when the range is empty so that horizontal edges and
/// zero-width spans never divide by zero.
#[inline]
pub fn inverse_lerp(start: f32, end: f32, value: f32) -> f32 {
    let span = end - start;
    if span == 0.0 {
        0.0
    } else {
        (value - start) / span
    }
}
