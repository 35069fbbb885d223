/// Camera: pose, projection configuration and lazily derived view state.
///
/// Setters only store configuration and drop the derived state. The first
/// query after a mutation rebuilds it once (`update_frustum`): projection
/// matrix, inverse view transform, world/view-space frustums and the
/// near-clip box. Every later query reads the cached values until the next
/// mutation.
///
/// Conventions: camera space looks down -Z with +Y up, clip space uses
/// z ∈ [-1, 1] (near → -1). `native_projection_matrix()` converts to a
/// [0, 1] depth range for graphics APIs.
///
/// A Camera is `Send` but not `Sync`: the derived-state cell is filled
/// through `&self`. Callers sharing one camera between threads must
/// serialize access themselves.

use std::cell::OnceCell;
use glam::{Affine3A, Mat3, Mat4, Vec2, Vec3, Vec4};
use crate::bounds::{AABB, OrientedBox, Ray};
use super::frustum::{Frustum, FrustumTest};
use super::projection::{
    self, ProjectionMode, ProjectionResult, NEAR_CLIP_EPSILON,
};
use super::view_plane::ViewPlane;
use super::viewport::{DepthRange, Viewport, ViewportRect};

/// Horizontal field of view of a default camera, in degrees
pub const DEFAULT_HORIZONTAL_FOV_DEGREES: f32 = 50.0;
/// Aspect ratio of a default camera
pub const DEFAULT_ASPECT_RATIO: f32 = 4.0 / 3.0;
/// Near clip distance of a default camera
pub const DEFAULT_NEAR: f32 = 1.0;
/// Far clip distance of a default camera
pub const DEFAULT_FAR: f32 = 1000.0;
/// Half-thickness of the near-clip bounding box along the view axis
pub const NEAR_CLIP_BOX_THICKNESS: f32 = 0.01;

const SOURCE: &str = "galaxy3d::Camera";

/// Everything derived from the camera configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct FrustumState {
    pub(crate) projection: Mat4,
    pub(crate) inverse_view: Affine3A,
    pub(crate) view_matrix: Mat4,
    pub(crate) frustum: Frustum,
    pub(crate) view_space_frustum: Frustum,
    pub(crate) near_clip_box: OrientedBox,
}

/// Camera with lazily computed projection, view and frustum.
#[derive(Debug, Clone)]
pub struct Camera {
    transform: Affine3A,
    projection_mode: ProjectionMode,
    view_plane: ViewPlane,
    aspect_ratio: f32,
    near: f32,
    far: f32,
    viewport: ViewportRect,
    depth_range: DepthRange,
    derived: OnceCell<FrustumState>,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera {
    /// Create a camera with the default configuration: perspective, 50°
    /// horizontal FOV, 4:3 aspect, near 1, far 1000, identity pose, full
    /// viewport and depth range.
    pub fn new() -> Self {
        let width_half = (DEFAULT_HORIZONTAL_FOV_DEGREES.to_radians() * 0.5).tan();
        Self {
            transform: Affine3A::IDENTITY,
            projection_mode: ProjectionMode::Perspective,
            view_plane: ViewPlane::from_half_extents(width_half, width_half / DEFAULT_ASPECT_RATIO),
            aspect_ratio: DEFAULT_ASPECT_RATIO,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
            viewport: ViewportRect::FULL,
            depth_range: DepthRange::FULL,
            derived: OnceCell::new(),
        }
    }

    // ===== CACHE =====

    /// Whether the derived state currently reflects the configuration.
    pub fn is_frustum_valid(&self) -> bool {
        self.derived.get().is_some()
    }

    fn invalidate(&mut self) {
        self.derived = OnceCell::new();
    }

    /// Rebuild the derived state if a setter ran since the last query.
    pub(crate) fn update_frustum(&self) -> &FrustumState {
        self.derived.get_or_init(|| self.build_frustum_state())
    }

    fn build_frustum_state(&self) -> FrustumState {
        // Forward is -Z in camera space
        let znear = -self.near;
        let vp = self.view_plane;

        let projection = match self.projection_mode {
            ProjectionMode::Perspective => projection::perspective_off_center(
                vp.min.x * self.near,
                vp.max.x * self.near,
                vp.min.y * self.near,
                vp.max.y * self.near,
                self.near,
                self.far,
            ),
            ProjectionMode::Orthographic => projection::orthographic_off_center(
                vp.min.x, vp.max.x, vp.min.y, vp.max.y, self.near, self.far,
            ),
        };

        let inverse_view = rigid_inverse(&self.transform);
        let view_matrix = Mat4::from(inverse_view);

        let near_clip_box = OrientedBox::new(
            self.transform.transform_point3(Vec3::new(0.0, 0.0, znear)),
            Mat3::from(self.transform.matrix3),
            Vec3::new(
                vp.width() * self.near * 0.5,
                vp.height() * self.near * 0.5,
                NEAR_CLIP_BOX_THICKNESS,
            ),
        );

        FrustumState {
            projection,
            inverse_view,
            view_matrix,
            frustum: Frustum::from_view_projection(&(projection * view_matrix)),
            view_space_frustum: Frustum::from_view_projection(&projection),
            near_clip_box,
        }
    }

    // ===== POSE =====

    /// Camera pose in world space (camera space → world space).
    pub fn transform(&self) -> &Affine3A {
        &self.transform
    }

    /// Replace the pose. The rotation part must be orthonormal.
    pub fn set_transform(&mut self, transform: Affine3A) {
        self.transform = transform;
        self.invalidate();
    }

    /// Camera position in world space.
    pub fn position(&self) -> Vec3 {
        self.transform.translation.into()
    }

    /// Move the camera, keeping its orientation.
    pub fn set_position(&mut self, position: Vec3) {
        self.transform.translation = position.into();
        self.invalidate();
    }

    /// Place the camera at `eye` looking at `target`.
    pub fn look_at(&mut self, eye: Vec3, target: Vec3, up: Vec3) {
        self.set_transform(rigid_inverse(&Affine3A::look_at_rh(eye, target, up)));
    }

    /// Unit view direction in world space (the pose's -Z axis).
    pub fn forward(&self) -> Vec3 {
        -Vec3::from(self.transform.matrix3.z_axis)
    }

    // ===== PROJECTION CONFIGURATION =====

    pub fn projection_mode(&self) -> ProjectionMode {
        self.projection_mode
    }

    pub fn set_projection_mode(&mut self, mode: ProjectionMode) {
        self.projection_mode = mode;
        self.invalidate();
    }

    pub fn view_plane(&self) -> ViewPlane {
        self.view_plane
    }

    /// Set the view plane rectangle directly. The aspect ratio follows.
    pub fn set_view_plane(&mut self, min: Vec2, max: Vec2) {
        let view_plane = ViewPlane::new(min, max);
        if !view_plane.is_valid() {
            crate::camera_warn!(SOURCE, "Degenerate view plane {:?}..{:?}", min, max);
        }
        debug_assert!(view_plane.is_valid(), "degenerate view plane {:?}..{:?}", min, max);

        self.view_plane = view_plane;
        self.aspect_ratio = view_plane.aspect_ratio();
        self.invalidate();
    }

    /// Set a symmetric view plane from field-of-view angles (radians).
    ///
    /// With `vfov = None` the height follows the current aspect ratio;
    /// otherwise the aspect ratio is recomputed from both angles.
    pub fn set_view_plane_fov(&mut self, hfov: f32, vfov: Option<f32>) {
        let width_half = (hfov * 0.5).tan();
        let height_half = match vfov {
            Some(vfov) => {
                let height_half = (vfov * 0.5).tan();
                self.aspect_ratio = width_half / height_half;
                height_half
            }
            None => width_half / self.aspect_ratio,
        };

        let view_plane = ViewPlane::from_half_extents(width_half, height_half);
        if !view_plane.is_valid() {
            crate::camera_warn!(SOURCE, "Field of view out of range: hfov {} vfov {:?}", hfov, vfov);
        }
        debug_assert!(view_plane.is_valid(), "field of view out of range");

        self.view_plane = view_plane;
        self.invalidate();
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    /// Set width/height, keeping the horizontal extents of the view plane.
    pub fn set_aspect_ratio(&mut self, width_to_height: f32) {
        if !(width_to_height.is_finite() && width_to_height > 0.0) {
            crate::camera_warn!(SOURCE, "Invalid aspect ratio {}", width_to_height);
        }
        debug_assert!(width_to_height.is_finite() && width_to_height > 0.0, "invalid aspect ratio");

        self.aspect_ratio = width_to_height;
        self.view_plane.min.y = self.view_plane.min.x / width_to_height;
        self.view_plane.max.y = self.view_plane.max.x / width_to_height;
        self.invalidate();
    }

    /// Near and far clip distances (positive, along the view direction).
    pub fn clip_planes(&self) -> (f32, f32) {
        (self.near, self.far)
    }

    /// Set clip distances. Requires `0 < near < far`.
    pub fn set_clip_planes(&mut self, near: f32, far: f32) {
        if !(near > 0.0 && far > near) {
            crate::camera_warn!(SOURCE, "Invalid clip planes: near {} far {}", near, far);
        }
        debug_assert!(near > 0.0 && far > near, "invalid clip planes: near {} far {}", near, far);

        self.near = near;
        self.far = far;
        self.invalidate();
    }

    pub fn horizontal_fov(&self) -> f32 {
        self.view_plane.horizontal_fov()
    }

    pub fn vertical_fov(&self) -> f32 {
        self.view_plane.vertical_fov()
    }

    // ===== VIEWPORT (no derived state depends on these) =====

    pub fn viewport(&self) -> &ViewportRect {
        &self.viewport
    }

    pub fn set_viewport(&mut self, viewport: ViewportRect) {
        self.viewport = viewport;
    }

    pub fn depth_range(&self) -> &DepthRange {
        &self.depth_range
    }

    pub fn set_depth_range(&mut self, depth_range: DepthRange) {
        self.depth_range = depth_range;
    }

    /// Pixel viewport for a render target of `target_size` pixels.
    pub fn device_viewport(&self, target_size: Vec2) -> Viewport {
        Viewport::from_normalized(&self.viewport, &self.depth_range, target_size)
    }

    // ===== DERIVED ACCESSORS =====

    /// Projection matrix, clip z ∈ [-1, 1].
    pub fn projection_matrix(&self) -> &Mat4 {
        &self.update_frustum().projection
    }

    /// Projection matrix with depth remapped to [0, 1].
    pub fn native_projection_matrix(&self) -> Mat4 {
        projection::to_native_depth_range(
            self.projection_matrix(),
            self.projection_mode,
            self.near,
            self.far,
        )
    }

    /// View matrix (inverse of the camera's world transform).
    pub fn view_matrix(&self) -> &Mat4 {
        &self.update_frustum().view_matrix
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection_matrix(&self) -> Mat4 {
        let state = self.update_frustum();
        state.projection * state.view_matrix
    }

    /// World-space frustum.
    pub fn frustum(&self) -> &Frustum {
        &self.update_frustum().frustum
    }

    /// The same frustum in camera space.
    pub fn view_space_frustum(&self) -> &Frustum {
        &self.update_frustum().view_space_frustum
    }

    /// Thin oriented box around the near-clip rectangle, in world space.
    pub fn near_clip_bounding_box(&self) -> &OrientedBox {
        &self.update_frustum().near_clip_box
    }

    /// Approximate clip-space radius of a sphere of `radius` centered
    /// `distance` units in front of the camera.
    ///
    /// Shrinks with distance in perspective, constant in orthographic.
    pub fn compute_projected_sphere_radius(&self, distance: f32, radius: f32) -> f32 {
        let clip = self.update_frustum().projection * Vec4::new(radius, 0.0, -distance, 1.0);
        clip.x / clip.w
    }

    /// Conservative object-space bounding sphere (center, radius).
    pub fn object_space_bounding_sphere(&self) -> (Vec3, f32) {
        (Vec3::ZERO, self.far)
    }

    /// Conservative object-space bounding box.
    pub fn object_space_bounding_box(&self) -> AABB {
        AABB::from_center_extent(Vec3::ZERO, Vec3::splat(self.far))
    }

    // ===== PROJECTION / UNPROJECTION =====

    /// Project a world-space point to normalized clip coordinates.
    ///
    /// For `OutsideNearClip` the returned point is zero and meaningless.
    pub fn project(&self, world_point: Vec3) -> (Vec3, ProjectionResult) {
        let state = self.update_frustum();
        let cam_point = state.inverse_view.transform_point3(world_point);
        project_view_point(state, cam_point, -self.near)
    }

    /// Project a point already in camera space.
    ///
    /// The near-clip test has a small tolerance so points sitting on the
    /// near plane do not flicker in and out.
    pub fn project_camera_space_point(&self, cam_point: Vec3) -> (Vec3, ProjectionResult) {
        let state = self.update_frustum();
        project_view_point(state, cam_point, -self.near + NEAR_CLIP_EPSILON)
    }

    /// Map a normalized [-1, 1]² view-plane point to the world-space point
    /// on the camera-space plane z = -1.
    pub fn unproject(&self, view_point: Vec2) -> Vec3 {
        self.update_frustum();
        let p = self.view_plane.map_normalized(view_point);
        self.transform.transform_point3(Vec3::new(p.x, p.y, -1.0))
    }

    /// World-space point → camera space.
    pub fn transform_to_view_space(&self, world_point: Vec3) -> Vec3 {
        self.update_frustum().inverse_view.transform_point3(world_point)
    }

    /// World-space direction → camera space (rotation only).
    pub fn rotate_to_view_space(&self, world_vector: Vec3) -> Vec3 {
        self.update_frustum().inverse_view.transform_vector3(world_vector)
    }

    // ===== DEVICE MAPPING =====

    /// Pixel coordinate → camera-space point on the view plane (z = -1).
    ///
    /// `target_size` is the render target resolution in pixels. Device Y
    /// grows downward, view-plane Y grows upward.
    pub fn device_to_view_space(&self, device_coord: Vec2, target_size: Vec2) -> Vec3 {
        let ndev = device_coord / target_size;
        let vp = &self.view_plane;
        let viewport = &self.viewport;

        Vec3::new(
            vp.min.x + (ndev.x - viewport.min.x) * vp.width() / viewport.width(),
            vp.max.y - (ndev.y - viewport.min.y) * vp.height() / viewport.height(),
            -1.0,
        )
    }

    /// Pixel coordinate → world-space point on the view plane.
    pub fn device_to_world_space(&self, device_coord: Vec2, target_size: Vec2) -> Vec3 {
        let view_point = self.device_to_view_space(device_coord, target_size);
        self.transform.transform_point3(view_point)
    }

    /// World-space picking ray through a pixel.
    pub fn picking_ray(&self, device_coord: Vec2, target_size: Vec2) -> Ray {
        let on_plane = self.device_to_world_space(device_coord, target_size);
        match self.projection_mode {
            ProjectionMode::Perspective => {
                let origin = self.position();
                Ray { origin, direction: (on_plane - origin).normalize() }
            }
            ProjectionMode::Orthographic => Ray { origin: on_plane, direction: self.forward() },
        }
    }

    // ===== CULLING =====

    /// `true` when the box is certainly invisible. Boxes that straddle a
    /// frustum plane are kept.
    pub fn cull_box(&self, aabb: &AABB) -> bool {
        self.frustum().classify_aabb(aabb) == FrustumTest::Outside
    }

    /// `true` when the sphere is entirely behind one frustum plane.
    pub fn cull_sphere(&self, center: Vec3, radius: f32) -> bool {
        !self.frustum().intersects_sphere(center, radius)
    }
}

/// Inverse of a rotation + translation: transpose the rotation, rotate
/// the negated translation.
fn rigid_inverse(pose: &Affine3A) -> Affine3A {
    let rotation = pose.matrix3.transpose();
    Affine3A {
        matrix3: rotation,
        translation: -(rotation * pose.translation),
    }
}

fn project_view_point(
    state: &FrustumState,
    cam_point: Vec3,
    near_limit: f32,
) -> (Vec3, ProjectionResult) {
    if cam_point.z > near_limit {
        return (Vec3::ZERO, ProjectionResult::OutsideNearClip);
    }

    let clip = state.projection * cam_point.extend(1.0);
    // Only reachable with a broken configuration (near <= 0)
    if clip.w <= f32::EPSILON {
        return (Vec3::ZERO, ProjectionResult::OutsideNearClip);
    }

    let ndc = clip.truncate() / clip.w;
    (ndc, ProjectionResult::classify_ndc(ndc.x, ndc.y, ndc.z))
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
