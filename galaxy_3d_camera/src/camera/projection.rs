/// Projection matrices and point classification.
///
/// Matrices follow the OpenGL convention: camera looks down -Z, and a
/// point between the near and far planes lands in NDC z ∈ [-1, 1] after
/// the homogeneous divide (near → -1, far → +1). Graphics APIs that want
/// depth in [0, 1] go through `to_native_depth_range()` at the boundary.

use glam::{Mat4, Vec4};

/// Camera-space tolerance applied by `Camera::project_camera_space_point`
/// on the near-clip test.
pub const NEAR_CLIP_EPSILON: f32 = 1.0e-4;

/// Projection type used to build the camera's projection matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectionMode {
    /// Off-center perspective frustum (view plane scaled by the near distance)
    #[default]
    Perspective,
    /// Off-center orthographic box (view plane used as-is)
    Orthographic,
}

/// Classification returned alongside a projected point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionResult {
    /// Point is inside the view volume
    InsideFrustum,
    /// Point is in front of the near plane; the returned point is zeroed
    OutsideNearClip,
    /// Point is beyond the far plane; the returned point is still valid
    OutsideFarClip,
    /// Point is between near and far but outside the side planes
    OutsideFrustum,
}

impl ProjectionResult {
    /// Classify a normalized (post-divide) clip point.
    ///
    /// The near-clip case is decided before projection and never comes
    /// out of this function.
    pub fn classify_ndc(x: f32, y: f32, z: f32) -> Self {
        if z > 1.0 {
            return ProjectionResult::OutsideFarClip;
        }
        if !(-1.0..=1.0).contains(&x) || !(-1.0..=1.0).contains(&y) {
            return ProjectionResult::OutsideFrustum;
        }
        ProjectionResult::InsideFrustum
    }

    pub fn is_inside(&self) -> bool {
        *self == ProjectionResult::InsideFrustum
    }
}

/// Off-center perspective projection (glFrustum).
///
/// `left`/`right`/`bottom`/`top` are the near-plane rectangle in camera
/// space; `near` and `far` are positive distances.
pub fn perspective_off_center(
    left: f32,
    right: f32,
    bottom: f32,
    top: f32,
    near: f32,
    far: f32,
) -> Mat4 {
    let inv_width = 1.0 / (right - left);
    let inv_height = 1.0 / (top - bottom);
    let inv_depth = 1.0 / (far - near);

    Mat4::from_cols(
        Vec4::new(2.0 * near * inv_width, 0.0, 0.0, 0.0),
        Vec4::new(0.0, 2.0 * near * inv_height, 0.0, 0.0),
        Vec4::new(
            (right + left) * inv_width,
            (top + bottom) * inv_height,
            -(far + near) * inv_depth,
            -1.0,
        ),
        Vec4::new(0.0, 0.0, -2.0 * far * near * inv_depth, 0.0),
    )
}

/// Off-center orthographic projection (glOrtho).
pub fn orthographic_off_center(
    left: f32,
    right: f32,
    bottom: f32,
    top: f32,
    near: f32,
    far: f32,
) -> Mat4 {
    Mat4::orthographic_rh_gl(left, right, bottom, top, near, far)
}

/// Remap a projection's depth row from NDC z ∈ [-1, 1] to depth ∈ [0, 1].
///
/// Only the z row is replaced; x, y and w rows are kept. Camera z in
/// [-far, -near] then maps to [0, 1] after the divide (near → 0).
pub fn to_native_depth_range(projection: &Mat4, mode: ProjectionMode, near: f32, far: f32) -> Mat4 {
    let mut native = *projection;
    let inv_depth = 1.0 / (far - near);

    // glam is column-major: row z / column z is z_axis.z, row z / column w is w_axis.z
    match mode {
        ProjectionMode::Perspective => {
            native.z_axis.z = -far * inv_depth;
            native.w_axis.z = -far * near * inv_depth;
        }
        ProjectionMode::Orthographic => {
            native.z_axis.z = -inv_depth;
            native.w_axis.z = -near * inv_depth;
        }
    }

    native
}

#[cfg(test)]
#[path = "projection_tests.rs"]
mod tests;
