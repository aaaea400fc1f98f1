//! Look-at camera.
//!
//! The camera stores only what the caller controls: position, target, an up
//! hint and a vertical field of view. The orthonormal basis is derived from
//! those fields on every call to [`Camera::basis`], so they can be changed
//! freely between frames.
//!
//! # Handedness
//!
//! `right = forward × up`. With the default pose (looking down +Z, up +Y)
//! this makes `right` point along -X, and screen X grows toward -X in world
//! space.

use crate::error::{Result, SceneError};
use crate::math::Vec3;

/// Orthonormal view basis derived from a [`Camera`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraBasis {
    pub right: Vec3,
    pub up: Vec3,
    pub forward: Vec3,
}

impl CameraBasis {
    /// Projects a world-space offset from the camera onto the basis axes.
    #[inline]
    pub fn to_camera_space(&self, relative: Vec3) -> Vec3 {
        Vec3::new(
            relative.dot(self.right),
            relative.dot(self.up),
            relative.dot(self.forward),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    position: Vec3,
    target: Vec3,
    up: Vec3,
    fov_degrees: f32,
}

impl Camera {
    /// Creates a camera, failing fast on an invalid FOV or a degenerate pose.
    pub fn new(position: Vec3, target: Vec3, up: Vec3, fov_degrees: f32) -> Result<Self> {
        let camera = Self {
            position,
            target,
            up,
            fov_degrees: validate_fov(fov_degrees)?,
        };
        camera.basis()?;
        Ok(camera)
    }

    /// Camera at `position` looking at `target` with +Y up and a 60° FOV.
    pub fn looking_at(position: Vec3, target: Vec3) -> Result<Self> {
        Self::new(position, target, Vec3::UP, 60.0)
    }

    /// Derives the right/up/forward basis.
    ///
    /// Fails with [`SceneError::DegenerateCamera`] when `target == position`
    /// or when `up` is parallel to the view direction.
    pub fn basis(&self) -> Result<CameraBasis> {
        let forward = (self.target - self.position)
            .try_normalize()
            .ok_or(SceneError::DegenerateCamera("target coincides with position"))?;
        let right = forward
            .cross(self.up)
            .try_normalize()
            .ok_or(SceneError::DegenerateCamera("up is parallel to the view direction"))?;
        let up = right
            .cross(forward)
            .try_normalize()
            .ok_or(SceneError::DegenerateCamera("basis collapsed"))?;
        Ok(CameraBasis { right, up, forward })
    }

    /// `1 / tan(fov / 2)`: the projection scale factor.
    pub fn focal_factor(&self) -> f32 {
        1.0 / (self.fov_degrees.to_radians() / 2.0).tan()
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn set_up(&mut self, up: Vec3) {
        self.up = up;
    }

    pub fn fov_degrees(&self) -> f32 {
        self.fov_degrees
    }

    pub fn set_fov_degrees(&mut self, fov_degrees: f32) -> Result<()> {
        self.fov_degrees = validate_fov(fov_degrees)?;
        Ok(())
    }
}

fn validate_fov(fov_degrees: f32) -> Result<f32> {
    // The negated form also rejects NaN
    if !(fov_degrees > 0.0 && fov_degrees < 180.0) {
        return Err(SceneError::InvalidFov(fov_degrees));
    }
    Ok(fov_degrees)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_pose_basis() {
        let camera = Camera::looking_at(Vec3::ZERO, Vec3::FORWARD).unwrap();
        let basis = camera.basis().unwrap();
        assert_eq!(basis.right, Vec3::new(-1.0, 0.0, 0.0));
        assert_eq!(basis.up, Vec3::UP);
        assert_eq!(basis.forward, Vec3::FORWARD);
    }

    #[test]
    fn basis_is_orthonormal_for_oblique_pose() {
        let camera =
            Camera::new(Vec3::new(3.0, 2.0, -1.0), Vec3::ZERO, Vec3::new(0.2, 1.0, 0.0), 45.0)
                .unwrap();
        let b = camera.basis().unwrap();
        assert_relative_eq!(b.right.magnitude(), 1.0, epsilon = 1e-5);
        assert_relative_eq!(b.up.magnitude(), 1.0, epsilon = 1e-5);
        assert_relative_eq!(b.right.dot(b.up), 0.0, epsilon = 1e-5);
        assert_relative_eq!(b.right.dot(b.forward), 0.0, epsilon = 1e-5);
        assert_relative_eq!(b.up.dot(b.forward), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn coincident_target_is_degenerate() {
        let err = Camera::looking_at(Vec3::ONE, Vec3::ONE).unwrap_err();
        assert!(matches!(err, SceneError::DegenerateCamera(_)));
    }

    #[test]
    fn up_parallel_to_forward_is_degenerate() {
        let err = Camera::looking_at(Vec3::ZERO, Vec3::new(0.0, 5.0, 0.0)).unwrap_err();
        assert!(matches!(err, SceneError::DegenerateCamera(_)));
    }

    #[test]
    fn mutation_after_construction_is_caught_by_basis() {
        let mut camera = Camera::looking_at(Vec3::ZERO, Vec3::FORWARD).unwrap();
        camera.set_target(Vec3::ZERO);
        assert!(camera.basis().is_err());
    }

    #[test]
    fn fov_bounds_are_exclusive() {
        for fov in [0.0, 180.0, -10.0, f32::NAN] {
            assert!(Camera::new(Vec3::ZERO, Vec3::FORWARD, Vec3::UP, fov).is_err());
        }
        let mut camera = Camera::looking_at(Vec3::ZERO, Vec3::FORWARD).unwrap();
        assert!(camera.set_fov_degrees(179.0).is_ok());
        assert!(camera.set_fov_degrees(200.0).is_err());
        assert_eq!(camera.fov_degrees(), 179.0);
    }

    #[test]
    fn sixty_degree_focal_factor() {
        let camera = Camera::looking_at(Vec3::ZERO, Vec3::FORWARD).unwrap();
        assert_relative_eq!(camera.focal_factor(), 3.0_f32.sqrt(), epsilon = 1e-5);
    }
}
