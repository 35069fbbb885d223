//! Camera module: pose, projection, frustum and culling.
//!
//! A `Camera` stores its configuration and derives the projection matrix,
//! view matrix and frustums lazily on first query. Callers own and drive
//! their cameras; nothing in this crate keeps a registry of them.

mod camera;
mod capabilities;
mod desc;
mod frustum;
mod projection;
mod uniform;
mod view_plane;
mod viewport;

pub use camera::{
    Camera,
    DEFAULT_ASPECT_RATIO, DEFAULT_FAR, DEFAULT_HORIZONTAL_FOV_DEGREES, DEFAULT_NEAR,
    NEAR_CLIP_BOX_THICKNESS,
};
pub use capabilities::{FrustumSource, Transformable};
pub use desc::CameraDesc;
pub use frustum::{
    Frustum, FrustumTest,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
};
pub use projection::{
    orthographic_off_center, perspective_off_center, to_native_depth_range,
    ProjectionMode, ProjectionResult, NEAR_CLIP_EPSILON,
};
pub use uniform::CameraUniform;
pub use view_plane::ViewPlane;
pub use viewport::{DepthRange, Viewport, ViewportRect};
