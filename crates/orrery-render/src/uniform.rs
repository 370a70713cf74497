//! Uniform buffer layouts shared by the sphere pipelines.

use bytemuck::{Pod, Zeroable};

/// Camera uniform: combined view-projection matrix plus the camera's world
/// position for specular lighting. 80 bytes, bound at group 0.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    /// World-space camera position; w is unused padding.
    pub camera_pos: [f32; 4],
}

/// Per-body model matrix, rewritten every frame from the orbital animator.
/// 64 bytes, bound at group 2.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct ModelUniform {
    pub model: [[f32; 4]; 4],
}

impl ModelUniform {
    pub fn from_mat4(matrix: glam::Mat4) -> Self {
        Self {
            model: matrix.to_cols_array_2d(),
        }
    }
}
