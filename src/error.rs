//! Setup errors.
//!
//! Rendering itself never fails once a scene is valid; everything here is a
//! caller mistake caught when meshes, cameras, textures or the renderer are
//! built.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SceneError>;

#[derive(Debug, Error)]
pub enum SceneError {
    /// Mesh data that the rasterizer cannot index safely.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Field of view outside the open interval (0, 180) degrees.
    #[error("field of view must be in (0, 180) degrees, got {0}")]
    InvalidFov(f32),

    /// Camera target coincides with its position, or `up` is parallel to the view direction.
    #[error("degenerate camera basis: {0}")]
    DegenerateCamera(&'static str),

    #[error("invalid texture: {0}")]
    InvalidTexture(String),

    #[error("invalid resolution {width}x{height} (stride {stride})")]
    InvalidResolution { width: u32, height: u32, stride: u32 },

    #[error("failed to load image: {0}")]
    Image(#[from] image::ImageError),

    #[error("failed to load OBJ model: {0}")]
    Obj(#[from] tobj::LoadError),
}
