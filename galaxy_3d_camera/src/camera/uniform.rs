/// GPU-facing camera block.
///
/// Plain `#[repr(C)]` data that can be copied straight into a uniform
/// buffer with `bytemuck::bytes_of`. Matrices are column-major and use the
/// [0, 1] depth convention expected by Vulkan / D3D / Metal / WebGPU.

use super::camera::Camera;

/// Camera data as laid out in shader uniform memory (std140 compatible).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    /// World → camera space
    pub view: [[f32; 4]; 4],
    /// Camera → clip space, depth in [0, 1]
    pub projection: [[f32; 4]; 4],
    /// projection * view
    pub view_projection: [[f32; 4]; 4],
    /// Camera position in world space (w = 1)
    pub position: [f32; 4],
    /// near, far, 1 / near, 1 / far
    pub clip_planes: [f32; 4],
}

impl CameraUniform {
    /// Snapshot the camera's current matrices.
    ///
    /// Brings the camera's derived state up to date if needed.
    pub fn from_camera(camera: &Camera) -> Self {
        let view = *camera.view_matrix();
        let projection = camera.native_projection_matrix();
        let (near, far) = camera.clip_planes();

        Self {
            view: view.to_cols_array_2d(),
            projection: projection.to_cols_array_2d(),
            view_projection: (projection * view).to_cols_array_2d(),
            position: camera.position().extend(1.0).to_array(),
            clip_planes: [near, far, 1.0 / near, 1.0 / far],
        }
    }
}

impl From<&Camera> for CameraUniform {
    fn from(camera: &Camera) -> Self {
        Self::from_camera(camera)
    }
}

#[cfg(test)]
#[path = "uniform_tests.rs"]
mod tests;
