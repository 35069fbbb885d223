/// Capability traits: what scene code can ask of a camera-like object
/// without knowing its concrete type.

use glam::{Affine3A, Vec3};
use crate::bounds::AABB;
use super::camera::Camera;
use super::frustum::{Frustum, FrustumTest};

/// Something with a world-space pose.
pub trait Transformable {
    /// Pose in world space
    fn transform(&self) -> &Affine3A;

    /// Replace the pose
    fn set_transform(&mut self, transform: Affine3A);

    /// Position in world space
    fn position(&self) -> Vec3 {
        self.transform().translation.into()
    }

    /// Move, keeping the orientation
    fn set_position(&mut self, position: Vec3);
}

/// Something that exposes a world-space frustum for visibility tests.
pub trait FrustumSource {
    /// World-space frustum
    fn frustum(&self) -> &Frustum;

    /// `true` when the box is certainly outside the frustum
    fn cull_box(&self, aabb: &AABB) -> bool {
        self.frustum().classify_aabb(aabb) == FrustumTest::Outside
    }

    /// `true` when the sphere is certainly outside the frustum
    fn cull_sphere(&self, center: Vec3, radius: f32) -> bool {
        !self.frustum().intersects_sphere(center, radius)
    }

    /// Indices of the boxes that survive culling, in input order.
    fn visible_indices(&self, boxes: &[AABB]) -> Vec<usize> {
        let frustum = self.frustum();
        boxes
            .iter()
            .enumerate()
            .filter(|(_, aabb)| frustum.classify_aabb(aabb) != FrustumTest::Outside)
            .map(|(i, _)| i)
            .collect()
    }
}

impl Transformable for Camera {
    fn transform(&self) -> &Affine3A {
        Camera::transform(self)
    }

    fn set_transform(&mut self, transform: Affine3A) {
        Camera::set_transform(self, transform);
    }

    fn position(&self) -> Vec3 {
        Camera::position(self)
    }

    fn set_position(&mut self, position: Vec3) {
        Camera::set_position(self, position);
    }
}

impl FrustumSource for Camera {
    fn frustum(&self) -> &Frustum {
        Camera::frustum(self)
    }

    fn cull_box(&self, aabb: &AABB) -> bool {
        Camera::cull_box(self, aabb)
    }

    fn cull_sphere(&self, center: Vec3, radius: f32) -> bool {
        Camera::cull_sphere(self, center, radius)
    }
}

/// A bare frustum can be used directly, e.g. a light's shadow volume.
impl FrustumSource for Frustum {
    fn frustum(&self) -> &Frustum {
        self
    }
}

#[cfg(test)]
#[path = "capabilities_tests.rs"]
mod tests;
