//! Frame orchestration.
//!
//! [`Renderer`] owns the color and depth buffers for the fixed output
//! resolution and drives one frame at a time: clear, project every mesh,
//! rasterize every triangle whose three vertices survived the near plane.

use log::{debug, info, trace};

use super::framebuffer::{DirtyRect, FrameBuffer, FAR_DEPTH};
use super::rasterizer::{Rasterizer, ScanlineRasterizer, Triangle};
use crate::config::RendererConfig;
use crate::error::Result;
use crate::projection::{Projection, ScreenVertex};
use crate::scene::Scene;

/// Counters for one rendered frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub meshes: usize,
    /// Triangles considered, i.e. every triangle of every mesh.
    pub triangles: usize,
    /// Triangles handed to the rasterizer.
    pub rasterized: usize,
    /// Triangles dropped because a vertex was at or behind the near plane.
    pub culled: usize,
}

pub struct Renderer {
    color_buffer: Vec<u32>,
    depth_buffer: Vec<f32>,
    config: RendererConfig,
    dirty: Option<DirtyRect>,
    // Reused per mesh to avoid reallocating every frame
    projected: Vec<Option<ScreenVertex>>,
}

impl Renderer {
    /// Creates a renderer with the default configuration at `width` x `height`.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::with_config(RendererConfig::new(width, height))
    }

    pub fn with_config(config: RendererConfig) -> Result<Self> {
        config.validate()?;
        let color_len = config.stride() as usize * config.height as usize;
        let depth_len = config.width as usize * config.height as usize;
        info!(
            "Renderer created: {}x{} (stride {} px)",
            config.width,
            config.height,
            config.stride()
        );
        Ok(Self {
            color_buffer: vec![config.background; color_len],
            depth_buffer: vec![FAR_DEPTH; depth_len],
            config,
            dirty: None,
            projected: Vec::new(),
        })
    }

    pub fn width(&self) -> u32 {
        self.config.width
    }

    pub fn height(&self) -> u32 {
        self.config.height
    }

    /// Row pitch in pixels.
    pub fn stride(&self) -> u32 {
        self.config.stride()
    }

    /// Row pitch in bytes.
    pub fn pitch(&self) -> usize {
        self.config.stride() as usize * 4
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    /// Acquires exclusive write access to the buffers.
    ///
    /// The returned view marks the whole surface dirty when dropped.
    pub fn lock(&mut self) -> FrameBuffer<'_> {
        FrameBuffer::new(
            &mut self.color_buffer,
            &mut self.depth_buffer,
            self.config.width,
            self.config.height,
            self.config.stride(),
            &mut self.dirty,
        )
    }

    /// Renders one frame with the built-in [`ScanlineRasterizer`].
    pub fn render(&mut self, scene: &Scene) -> Result<FrameStats> {
        self.render_with(scene, &ScanlineRasterizer::new())
    }

    /// Renders one frame, handing every unclipped triangle to `rasterizer`.
    ///
    /// The camera basis is derived before the buffers are touched, so a
    /// degenerate camera leaves the previous frame intact.
    pub fn render_with<R>(&mut self, scene: &Scene, rasterizer: &R) -> Result<FrameStats>
    where
        R: Rasterizer + ?Sized,
    {
        let projection = Projection::new(scene.camera(), self.config.width, self.config.height)?;
        let background = self.config.background;
        let mut projected = std::mem::take(&mut self.projected);
        let mut stats = FrameStats::default();

        {
            let mut fb = self.lock();
            fb.clear_depth();
            fb.clear(background);

            for mesh in scene.meshes() {
                stats.meshes += 1;
                projection.transform_mesh(mesh, &mut projected);

                for (index, face) in mesh.faces().iter().enumerate() {
                    stats.triangles += 1;
                    let triangle = Triangle::from_projected(
                        projected[face.a],
                        projected[face.b],
                        projected[face.c],
                    );
                    match triangle {
                        Some(triangle) => {
                            rasterizer.fill_triangle(&triangle, mesh.texture(), &mut fb);
                            stats.rasterized += 1;
                        }
                        None => {
                            trace!("Mesh '{}' triangle {index} crosses the near plane", mesh.name());
                            stats.culled += 1;
                        }
                    }
                }
            }
        }

        self.projected = projected;
        debug!(
            "Frame: {} meshes, {} triangles ({} rasterized, {} culled)",
            stats.meshes, stats.triangles, stats.rasterized, stats.culled
        );
        Ok(stats)
    }

    /// Returns and clears the region modified since the last call.
    pub fn take_dirty(&mut self) -> Option<DirtyRect> {
        self.dirty.take()
    }

    /// Color at (x, y) in ARGB8888, or None if out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        (x < self.config.width && y < self.config.height)
            .then(|| self.color_buffer[y as usize * self.stride() as usize + x as usize])
    }

    /// Depth at (x, y); [`FAR_DEPTH`] where nothing was drawn.
    pub fn depth(&self, x: u32, y: u32) -> Option<f32> {
        (x < self.config.width && y < self.config.height)
            .then(|| self.depth_buffer[y as usize * self.config.width as usize + x as usize])
    }

    /// Packed pixels, `stride` per row.
    pub fn pixels(&self) -> &[u32] {
        &self.color_buffer
    }

    /// The color buffer as bytes: BGRA order in memory, `pitch()` bytes per row.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.color_buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Camera;
    use crate::colors;
    use crate::error::SceneError;
    use crate::math::Vec3;
    use crate::mesh::Mesh;
    use crate::texture::Texture;
    use std::sync::Arc;

    fn cube_scene() -> Scene {
        let texture = Arc::new(Texture::from_argb(1, 1, vec![0xFF80_8080]).unwrap());
        let mut cube = Mesh::cube(1.2, texture);
        cube.transform_mut().set_position_xyz(0.0, 0.0, 4.0);
        let mut scene = Scene::new(Camera::looking_at(Vec3::ZERO, Vec3::FORWARD).unwrap());
        scene.add_mesh(cube);
        scene
    }

    #[test]
    fn render_clears_and_draws_cube() {
        let mut renderer = Renderer::new(80, 60).unwrap();
        let stats = renderer.render(&cube_scene()).unwrap();

        assert_eq!(stats.triangles, 12);
        assert_eq!(stats.rasterized, 12);
        assert_eq!(renderer.pixel(40, 30), Some(0xFF80_8080));
        assert_eq!(renderer.pixel(0, 0), Some(colors::BLACK));
        assert_eq!(renderer.depth(0, 0), Some(FAR_DEPTH));
        // The front face of the cube is 3.4 units away
        let depth = renderer.depth(40, 30).unwrap();
        assert!((3.39..3.41).contains(&depth), "depth {depth}");
    }

    #[test]
    fn render_reports_full_surface_dirty() {
        let mut renderer = Renderer::new(32, 16).unwrap();
        assert_eq!(renderer.take_dirty(), None);
        renderer.render(&cube_scene()).unwrap();
        assert_eq!(renderer.take_dirty(), Some(DirtyRect::full(32, 16)));
        assert_eq!(renderer.take_dirty(), None);
    }

    #[test]
    fn degenerate_camera_fails_before_touching_buffers() {
        let mut renderer = Renderer::new(80, 60).unwrap();
        let mut scene = cube_scene();
        renderer.render(&scene).unwrap();
        renderer.take_dirty();
        let before = renderer.pixels().to_vec();

        scene.camera_mut().set_target(Vec3::ZERO);
        let err = renderer.render(&scene).unwrap_err();
        assert!(matches!(err, SceneError::DegenerateCamera(_)));
        assert_eq!(renderer.pixels(), &before[..]);
        assert_eq!(renderer.take_dirty(), None);
    }

    #[test]
    fn padded_stride_keeps_padding_untouched() {
        let config = RendererConfig::new(8, 6).with_stride(10);
        let mut renderer = Renderer::with_config(config).unwrap();
        {
            let mut fb = renderer.lock();
            fb.clear(colors::WHITE);
        }
        assert_eq!(renderer.pitch(), 40);
        assert_eq!(renderer.as_bytes().len(), 10 * 6 * 4);
        for row in renderer.pixels().chunks_exact(10) {
            assert!(row[..8].iter().all(|&c| c == colors::WHITE));
            assert!(row[8..].iter().all(|&c| c == colors::BLACK));
        }
    }

    #[test]
    fn bytes_are_bgra() {
        let config = RendererConfig::new(1, 1).with_background(colors::pack(1, 2, 3, 255));
        let renderer = Renderer::with_config(config).unwrap();
        assert_eq!(renderer.as_bytes(), &[3, 2, 1, 255]);
    }

    #[test]
    fn zero_resolution_is_rejected() {
        assert!(Renderer::new(0, 600).is_err());
    }
}
