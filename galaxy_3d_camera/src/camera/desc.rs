/// Camera descriptor: validated construction path.
///
/// The setters on `Camera` treat bad input as a programming error. A
/// descriptor is meant for configuration that comes from outside the
/// program (scene files, user settings): `Camera::from_desc` checks every
/// field and reports the first problem as an `Error`.

use std::f32::consts::PI;
use glam::Affine3A;
use crate::error::{Error, Result};
use super::camera::{
    Camera, DEFAULT_ASPECT_RATIO, DEFAULT_FAR, DEFAULT_HORIZONTAL_FOV_DEGREES, DEFAULT_NEAR,
};
use super::projection::ProjectionMode;
use super::view_plane::ViewPlane;
use super::viewport::{DepthRange, ViewportRect};

/// Full camera configuration
#[derive(Debug, Clone, PartialEq)]
pub struct CameraDesc {
    /// Camera pose in world space
    pub transform: Affine3A,
    /// Perspective or orthographic
    pub projection_mode: ProjectionMode,
    /// Horizontal field of view in radians (ignored when `view_plane` is set)
    pub horizontal_fov: f32,
    /// Vertical field of view in radians; `None` derives it from `aspect_ratio`
    pub vertical_fov: Option<f32>,
    /// Explicit view plane rectangle, overrides the field of view
    pub view_plane: Option<ViewPlane>,
    /// Width / height
    pub aspect_ratio: f32,
    /// Near clip distance
    pub near: f32,
    /// Far clip distance
    pub far: f32,
    /// Normalized viewport rectangle
    pub viewport: ViewportRect,
    /// Depth range
    pub depth_range: DepthRange,
}

impl Default for CameraDesc {
    fn default() -> Self {
        Self {
            transform: Affine3A::IDENTITY,
            projection_mode: ProjectionMode::Perspective,
            horizontal_fov: DEFAULT_HORIZONTAL_FOV_DEGREES.to_radians(),
            vertical_fov: None,
            view_plane: None,
            aspect_ratio: DEFAULT_ASPECT_RATIO,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
            viewport: ViewportRect::FULL,
            depth_range: DepthRange::FULL,
        }
    }
}

fn is_valid_fov(fov: f32) -> bool {
    fov > 0.0 && fov < PI
}

impl CameraDesc {
    /// Check every field, returning the first invalid one.
    pub fn validate(&self) -> Result<()> {
        if !(self.aspect_ratio.is_finite() && self.aspect_ratio > 0.0) {
            return Err(Error::InvalidAspectRatio(format!(
                "aspect ratio must be positive and finite, got {}",
                self.aspect_ratio
            )));
        }

        match self.view_plane {
            Some(view_plane) => {
                if !view_plane.is_valid() {
                    return Err(Error::InvalidViewPlane(format!(
                        "empty view plane {:?}..{:?}",
                        view_plane.min, view_plane.max
                    )));
                }
            }
            None => {
                if !is_valid_fov(self.horizontal_fov) {
                    return Err(Error::InvalidViewPlane(format!(
                        "horizontal fov must be in (0, π), got {}",
                        self.horizontal_fov
                    )));
                }
                if let Some(vfov) = self.vertical_fov {
                    if !is_valid_fov(vfov) {
                        return Err(Error::InvalidViewPlane(format!(
                            "vertical fov must be in (0, π), got {}",
                            vfov
                        )));
                    }
                }
            }
        }

        if !(self.near > 0.0 && self.far > self.near) {
            return Err(Error::InvalidClipPlanes(format!(
                "expected 0 < near < far, got near {} far {}",
                self.near, self.far
            )));
        }

        if !self.viewport.is_valid() {
            return Err(Error::InvalidViewport(format!(
                "viewport {:?}..{:?} must be non-empty and inside [0, 1]",
                self.viewport.min, self.viewport.max
            )));
        }

        if !self.depth_range.is_valid() {
            return Err(Error::InvalidDepthRange(format!(
                "depth range {}..{} must be ordered and inside [0, 1]",
                self.depth_range.min, self.depth_range.max
            )));
        }

        Ok(())
    }
}

impl Camera {
    /// Build a camera from a descriptor, validating it first.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field as an `Error` (also logged).
    pub fn from_desc(desc: CameraDesc) -> Result<Camera> {
        desc.validate().map_err(log_and_return_error)?;

        let mut camera = Camera::new();
        camera.set_transform(desc.transform);
        camera.set_projection_mode(desc.projection_mode);
        // Aspect first so a horizontal-only fov picks it up
        camera.set_aspect_ratio(desc.aspect_ratio);
        match desc.view_plane {
            Some(view_plane) => camera.set_view_plane(view_plane.min, view_plane.max),
            None => camera.set_view_plane_fov(desc.horizontal_fov, desc.vertical_fov),
        }
        camera.set_clip_planes(desc.near, desc.far);
        camera.set_viewport(desc.viewport);
        camera.set_depth_range(desc.depth_range);

        crate::camera_debug!(
            "galaxy3d::Camera",
            "Camera created: {:?}, near {} far {}",
            desc.projection_mode, desc.near, desc.far
        );

        Ok(camera)
    }

    /// Snapshot of the current configuration as a descriptor.
    ///
    /// The view plane is stored explicitly so the round trip is exact.
    pub fn to_desc(&self) -> CameraDesc {
        let (near, far) = self.clip_planes();
        CameraDesc {
            transform: *self.transform(),
            projection_mode: self.projection_mode(),
            horizontal_fov: self.horizontal_fov(),
            vertical_fov: Some(self.vertical_fov()),
            view_plane: Some(self.view_plane()),
            aspect_ratio: self.aspect_ratio(),
            near,
            far,
            viewport: *self.viewport(),
            depth_range: *self.depth_range(),
        }
    }
}

fn log_and_return_error(error: Error) -> Error {
    crate::camera_error!("galaxy3d::Camera", "Camera creation failed: {}", error);
    error
}

#[cfg(test)]
#[path = "desc_tests.rs"]
mod tests;
