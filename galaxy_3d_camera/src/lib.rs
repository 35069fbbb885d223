/*!
# Galaxy 3D Camera

Camera and view-frustum subsystem for the Galaxy 3D engine.

A camera holds a world-space pose and a projection configuration (view
plane, aspect ratio, clip distances, perspective or orthographic). The
projection matrix, view matrix, world/view-space frustums and near-clip
box are derived lazily and cached until the next change.

## Architecture

- **Camera**: Pose, configuration and cached derived state
- **Frustum**: Six planes and eight corners, AABB/sphere tests
- **CameraDesc**: Validated construction from external configuration
- **CameraUniform**: `#[repr(C)]` block for GPU upload
- **Transformable / FrustumSource**: Capability traits for scene code

Clip space uses the OpenGL depth convention (z ∈ [-1, 1]);
`Camera::native_projection_matrix` remaps to [0, 1] for modern APIs.
*/

// Internal modules
mod error;
pub mod log;
pub mod bounds;
pub mod camera;

// Main galaxy3d namespace module
pub mod galaxy3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging sub-module (types and logger registry, NOT macros)
    pub mod log {
        pub use crate::log::{
            Logger, LogEntry, LogSeverity, DefaultLogger,
            set_logger, reset_logger, log, log_detailed,
        };
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Bounding volumes
    pub mod bounds {
        pub use crate::bounds::{AABB, OrientedBox, Ray};
    }
}

// Re-export math library at crate root
pub use glam;
