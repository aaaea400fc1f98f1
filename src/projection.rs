//! Vertex transform stage.
//!
//! The [`Projection`] struct captures everything needed to take a model-space
//! vertex to the screen for one frame: the camera's position and basis, the
//! perspective scale and the viewport size. It is rebuilt every frame from
//! the [`Camera`], so no derived state outlives a camera edit.
//!
//! Per vertex:
//!
//! 1. Model transform (scale, rotate X/Y/Z, translate) via [`Transform::apply`]
//! 2. View transform: offset from the camera projected onto right/up/forward
//! 3. Near-plane test: `cz <= NEAR_PLANE` clips the vertex
//! 4. Perspective divide: `nx = cx * f / aspect / cz`, `ny = cy * f / cz`
//! 5. Screen mapping: `sx = (nx + 1) / 2 * width`, `sy = (1 - ny) / 2 * height`

use crate::camera::{Camera, CameraBasis};
use crate::config::NEAR_PLANE;
use crate::error::Result;
use crate::math::{lerp, Vec2, Vec3};
use crate::mesh::Mesh;
use crate::transform::Transform;

/// A vertex after projection: screen position, camera-space depth and UV.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenVertex {
    pub x: f32,
    pub y: f32,
    /// Camera-space distance along the view direction (`cz`); smaller is closer.
    pub depth: f32,
    pub uv: Vec2,
}

impl ScreenVertex {
    pub const fn new(x: f32, y: f32, depth: f32, uv: Vec2) -> Self {
        Self { x, y, depth, uv }
    }

    /// Affine interpolation of every attribute towards `other`.
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self {
            x: lerp(self.x, other.x, t),
            y: lerp(self.y, other.y, t),
            depth: lerp(self.depth, other.depth, t),
            uv: self.uv.lerp(other.uv, t),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.depth.is_finite()
    }
}

/// Per-frame view and perspective parameters.
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    eye: Vec3,
    basis: CameraBasis,
    focal_factor: f32,
    aspect_ratio: f32,
    width: f32,
    height: f32,
}

impl Projection {
    /// Derives the frame's projection from the camera and viewport size.
    ///
    /// Fails only if the camera has been mutated into a degenerate pose.
    pub fn new(camera: &Camera, width: u32, height: u32) -> Result<Self> {
        Ok(Self {
            eye: camera.position(),
            basis: camera.basis()?,
            focal_factor: camera.focal_factor(),
            aspect_ratio: width as f32 / height as f32,
            width: width as f32,
            height: height as f32,
        })
    }

    pub fn basis(&self) -> &CameraBasis {
        &self.basis
    }

    pub fn focal_factor(&self) -> f32 {
        self.focal_factor
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    /// World space to camera space.
    #[inline]
    pub fn to_camera_space(&self, world: Vec3) -> Vec3 {
        self.basis.to_camera_space(world - self.eye)
    }

    /// Projects a camera-space point, or returns `None` if it is at or behind
    /// the near plane.
    #[inline]
    pub fn project(&self, camera_space: Vec3, uv: Vec2) -> Option<ScreenVertex> {
        let Vec3 { x: cx, y: cy, z: cz } = camera_space;
        if cz <= NEAR_PLANE {
            return None;
        }

        let nx = (cx * self.focal_factor / self.aspect_ratio) / cz;
        let ny = (cy * self.focal_factor) / cz;

        // Device +Y is up; screen Y grows downward
        let sx = (nx + 1.0) * 0.5 * self.width;
        let sy = (1.0 - ny) * 0.5 * self.height;
        Some(ScreenVertex::new(sx, sy, cz, uv))
    }

    /// Runs one model-space vertex through the whole stage.
    #[inline]
    pub fn transform_vertex(
        &self,
        transform: &Transform,
        position: Vec3,
        uv: Vec2,
    ) -> Option<ScreenVertex> {
        let world = transform.apply(position);
        self.project(self.to_camera_space(world), uv)
    }

    /// Transforms every vertex of `mesh` into `out`, in vertex order.
    ///
    /// `out` is cleared first so the caller can reuse its allocation across
    /// meshes and frames. `None` entries mark clipped vertices.
    pub fn transform_mesh(&self, mesh: &Mesh, out: &mut Vec<Option<ScreenVertex>>) {
        let transform = mesh.transform();
        out.clear();
        out.extend(
            mesh.vertices()
                .iter()
                .zip(mesh.uvs())
                .map(|(&position, &uv)| self.transform_vertex(transform, position, uv)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texture::Texture;
    use approx::assert_relative_eq;
    use std::sync::Arc;

    fn default_camera() -> Camera {
        Camera::new(Vec3::ZERO, Vec3::FORWARD, Vec3::UP, 60.0).unwrap()
    }

    #[test]
    fn reference_vertex_projects_to_known_pixel() {
        let projection = Projection::new(&default_camera(), 800, 600).unwrap();
        let v = projection
            .transform_vertex(&Transform::default(), Vec3::new(-0.6, -0.6, 3.4), Vec2::ZERO)
            .expect("vertex in front of the camera");

        assert_relative_eq!(v.x, 491.7, epsilon = 0.1);
        assert_relative_eq!(v.y, 391.7, epsilon = 0.1);
        assert_relative_eq!(v.depth, 3.4, epsilon = 1e-5);
    }

    #[test]
    fn camera_space_uses_basis() {
        let projection = Projection::new(&default_camera(), 800, 600).unwrap();
        let c = projection.to_camera_space(Vec3::new(-0.6, -0.6, 3.4));
        assert_relative_eq!(c.x, 0.6, epsilon = 1e-6);
        assert_relative_eq!(c.y, -0.6, epsilon = 1e-6);
        assert_relative_eq!(c.z, 3.4, epsilon = 1e-6);
    }

    #[test]
    fn near_plane_is_inclusive() {
        let projection = Projection::new(&default_camera(), 800, 600).unwrap();
        assert!(projection.project(Vec3::new(0.0, 0.0, NEAR_PLANE), Vec2::ZERO).is_none());
        assert!(projection.project(Vec3::new(0.0, 0.0, -1.0), Vec2::ZERO).is_none());
        assert!(projection.project(Vec3::new(0.0, 0.0, 0.02), Vec2::ZERO).is_some());
    }

    #[test]
    fn point_on_axis_lands_in_centre() {
        let projection = Projection::new(&default_camera(), 800, 600).unwrap();
        let v = projection.project(Vec3::new(0.0, 0.0, 5.0), Vec2::ONE).unwrap();
        assert_relative_eq!(v.x, 400.0);
        assert_relative_eq!(v.y, 300.0);
        assert_eq!(v.uv, Vec2::ONE);
    }

    #[test]
    fn transform_mesh_keeps_vertex_order_and_reuses_buffer() {
        let texture = Arc::new(Texture::from_argb(1, 1, vec![0]).unwrap());
        let mut cube = Mesh::cube(1.2, texture);
        cube.transform_mut().set_position_xyz(0.0, 0.0, 4.0);
        let projection = Projection::new(&default_camera(), 800, 600).unwrap();

        let mut out = vec![None; 32];
        projection.transform_mesh(&cube, &mut out);
        assert_eq!(out.len(), 8);
        assert!(out.iter().all(Option::is_some));
        assert_eq!(out[0].unwrap().uv, Vec2::new(0.0, 1.0));
        assert_relative_eq!(out[0].unwrap().depth, 3.4, epsilon = 1e-5);
    }

    #[test]
    fn vertices_behind_camera_are_clipped() {
        let texture = Arc::new(Texture::from_argb(1, 1, vec![0]).unwrap());
        let cube = Mesh::cube(1.2, texture); // straddles the camera at the origin
        let projection = Projection::new(&default_camera(), 800, 600).unwrap();

        let mut out = Vec::new();
        projection.transform_mesh(&cube, &mut out);
        assert_eq!(out.iter().filter(|v| v.is_none()).count(), 4);
    }
}
