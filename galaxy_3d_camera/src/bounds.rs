//! Bounding volumes used by camera culling and picking.

use glam::{Mat3, Mat4, Vec3};

// ===== AABB =====

/// Axis-Aligned Bounding Box
///
/// Used for frustum culling. Callers holding a local-space box
/// transform it with `transformed()` before calling `Camera::cull_box`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    /// Minimum corner (x, y, z)
    pub min: Vec3,
    /// Maximum corner (x, y, z)
    pub max: Vec3,
}

impl AABB {
    /// Build a box from its center and half-extents.
    pub fn from_center_extent(center: Vec3, extent: Vec3) -> AABB {
        AABB { min: center - extent, max: center + extent }
    }

    /// Center point.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Half-extents along each axis.
    pub fn extent(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// Transform this AABB by a matrix, returning a new AABB.
    ///
    /// Uses the Arvo method: projects each matrix axis onto the AABB extents
    /// for an exact (tight) result without transforming all 8 corners.
    pub fn transformed(&self, matrix: &Mat4) -> AABB {
        let translation = matrix.col(3).truncate();
        let mut new_min = translation;
        let mut new_max = translation;

        for i in 0..3 {
            let axis = matrix.col(i).truncate();
            let a = axis * self.min[i];
            let b = axis * self.max[i];
            new_min += a.min(b);
            new_max += a.max(b);
        }

        AABB { min: new_min, max: new_max }
    }
}

// ===== ORIENTED BOX =====

/// Oriented bounding box: a center, an orthonormal basis and half-extents
/// along each basis axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientedBox {
    pub center: Vec3,
    /// Columns are the box's local X, Y and Z axes in world space
    pub basis: Mat3,
    pub extent: Vec3,
}

impl OrientedBox {
    pub fn new(center: Vec3, basis: Mat3, extent: Vec3) -> Self {
        Self { center, basis, extent }
    }

    /// The 8 corners, iterating -/+ extent along X fastest, then Y, then Z.
    pub fn corners(&self) -> [Vec3; 8] {
        let mut corners = [Vec3::ZERO; 8];
        for (i, corner) in corners.iter_mut().enumerate() {
            let sx = if i & 1 == 0 { -1.0 } else { 1.0 };
            let sy = if i & 2 == 0 { -1.0 } else { 1.0 };
            let sz = if i & 4 == 0 { -1.0 } else { 1.0 };
            *corner = self.center
                + self.basis.x_axis * (sx * self.extent.x)
                + self.basis.y_axis * (sy * self.extent.y)
                + self.basis.z_axis * (sz * self.extent.z);
        }
        corners
    }

    /// Test whether a world-space point lies inside (or on) the box.
    pub fn contains_point(&self, point: Vec3) -> bool {
        let d = point - self.center;
        d.dot(self.basis.x_axis).abs() <= self.extent.x
            && d.dot(self.basis.y_axis).abs() <= self.extent.y
            && d.dot(self.basis.z_axis).abs() <= self.extent.z
    }

    /// Smallest world-space AABB enclosing this box.
    pub fn to_aabb(&self) -> AABB {
        let world_extent = self.basis.x_axis.abs() * self.extent.x
            + self.basis.y_axis.abs() * self.extent.y
            + self.basis.z_axis.abs() * self.extent.z;
        AABB::from_center_extent(self.center, world_extent)
    }
}

// ===== RAY =====

/// Half-line used for picking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit length
    pub direction: Vec3,
}

impl Ray {
    /// Point at parametric distance `t` along the ray.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

#[cfg(test)]
#[path = "bounds_tests.rs"]
mod tests;
