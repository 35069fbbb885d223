/// View plane: the field-of-view rectangle at unit distance in front of
/// the camera, in camera space.
///
/// Scaling it by the near distance gives the near-clip rectangle of a
/// perspective camera; an orthographic camera uses it unscaled.

use glam::Vec2;

/// Rectangle on the camera-space plane z = -1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewPlane {
    pub min: Vec2,
    pub max: Vec2,
}

impl ViewPlane {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Symmetric view plane from a horizontal and vertical full-angle FOV (radians).
    pub fn from_fov(hfov: f32, vfov: f32) -> Self {
        Self::from_half_extents((hfov * 0.5).tan(), (vfov * 0.5).tan())
    }

    /// Symmetric view plane from its half-width and half-height.
    pub fn from_half_extents(width_half: f32, height_half: f32) -> Self {
        Self {
            min: Vec2::new(-width_half, -height_half),
            max: Vec2::new(width_half, height_half),
        }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Width over height.
    pub fn aspect_ratio(&self) -> f32 {
        self.width() / self.height()
    }

    /// Map a point from [-1, 1]² onto the rectangle.
    pub fn map_normalized(&self, point: Vec2) -> Vec2 {
        self.min + (self.max - self.min) * (point + Vec2::ONE) * 0.5
    }

    /// Full horizontal field of view in radians.
    pub fn horizontal_fov(&self) -> f32 {
        2.0 * (self.width() * 0.5).atan()
    }

    /// Full vertical field of view in radians.
    pub fn vertical_fov(&self) -> f32 {
        2.0 * (self.height() * 0.5).atan()
    }

    /// Non-empty and finite.
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
            && self.width() > 0.0 && self.height() > 0.0
    }
}

#[cfg(test)]
#[path = "view_plane_tests.rs"]
mod tests;
