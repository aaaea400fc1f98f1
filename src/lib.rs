//! A CPU-based software renderer for textured triangle meshes.
//!
//! Each frame is produced by a single call to [`Renderer::render`]: meshes are
//! transformed to screen space, triangles crossing the near plane are dropped
//! whole, and the rest are scanline-filled with a depth test and
//! nearest-neighbor texture sampling. SDL2 is used only by the [`window`]
//! module to present the result.
//!
//! # Quick Start
//!
//! ```ignore
//! use softcube::prelude::*;
//!
//! let texture = Arc::new(Texture::from_file("crate.png")?);
//! let mut cube = Mesh::cube(1.2, texture);
//! cube.transform_mut().set_position_xyz(0.0, 0.0, 4.0);
//!
//! let mut scene = Scene::new(Camera::looking_at(Vec3::ZERO, Vec3::FORWARD)?);
//! scene.add_mesh(cube);
//!
//! let mut renderer = Renderer::new(800, 600)?;
//! renderer.render(&scene)?;
//! let bgra: &[u8] = renderer.as_bytes();
//! ```

pub mod camera;
pub mod colors;
pub mod config;
pub mod error;
pub mod math;
pub mod mesh;
pub mod projection;
pub mod render;
pub mod scene;
pub mod texture;
pub mod transform;
pub mod window;

pub use camera::{Camera, CameraBasis};
pub use config::RendererConfig;
pub use error::{Result, SceneError};
pub use mesh::{Face, Mesh};
pub use projection::{Projection, ScreenVertex};
pub use render::{FrameStats, Renderer};
pub use scene::Scene;
pub use texture::Texture;
pub use transform::Transform;

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use softcube::prelude::*;
/// ```
pub mod prelude {
    pub use std::sync::Arc;

    pub use crate::camera::Camera;
    pub use crate::config::RendererConfig;
    pub use crate::error::{Result, SceneError};
    pub use crate::math::{Vec2, Vec3};
    pub use crate::mesh::{Face, Mesh};
    pub use crate::render::{FrameStats, Rasterizer, Renderer, ScanlineRasterizer};
    pub use crate::scene::Scene;
    pub use crate::texture::Texture;
    pub use crate::transform::Transform;
    pub use crate::window::{FrameLimiter, Window, WindowEvent};
}
