//! Vertex and index buffer upload for sphere meshes.

use orrery_mesh::{SphereMesh, SphereVertex};

/// A sphere mesh uploaded to the GPU, ready for indexed drawing.
pub struct MeshBuffer {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub index_count: u32,
}

impl MeshBuffer {
    /// Bind vertex and index buffers to a render pass.
    pub fn bind<'a>(&'a self, render_pass: &mut wgpu::RenderPass<'a>) {
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
    }

    /// Draw the entire mesh using indexed rendering.
    pub fn draw(&self, render_pass: &mut wgpu::RenderPass) {
        render_pass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}

/// GPU buffer allocator for uploading generated meshes.
pub struct BufferAllocator<'a> {
    device: &'a wgpu::Device,
}

impl<'a> BufferAllocator<'a> {
    pub fn new(device: &'a wgpu::Device) -> Self {
        Self { device }
    }

    /// Upload a generated sphere mesh. The buffers are immutable after
    /// creation; all per-frame animation happens through uniforms.
    pub fn upload_sphere(&self, label: &str, mesh: &SphereMesh) -> MeshBuffer {
        use wgpu::util::DeviceExt;

        let vertex_buffer = self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{label}-vertices")),
                contents: bytemuck::cast_slice(&mesh.vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });

        let index_buffer = self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{label}-indices")),
                contents: bytemuck::cast_slice(&mesh.indices),
                usage: wgpu::BufferUsages::INDEX,
            });

        MeshBuffer {
            vertex_buffer,
            index_buffer,
            index_count: mesh.index_count(),
        }
    }
}

/// Vertex buffer layout for [`SphereVertex`]: position, normal, uv at
/// shader locations 0, 1, 2.
pub fn sphere_vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    use wgpu::{VertexAttribute, VertexFormat};

    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<SphereVertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: VertexFormat::Float32x3,
            },
            VertexAttribute {
                offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                shader_location: 1,
                format: VertexFormat::Float32x3,
            },
            VertexAttribute {
                offset: (std::mem::size_of::<[f32; 3]>() * 2) as wgpu::BufferAddress,
                shader_location: 2,
                format: VertexFormat::Float32x2,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gpu::create_test_device_queue;

    #[test]
    fn test_sphere_vertex_layout_stride() {
        let layout = sphere_vertex_layout();
        // position (f32×3) + normal (f32×3) + uv (f32×2) = 32 bytes stride
        assert_eq!(layout.array_stride, 32);
        assert_eq!(layout.attributes.len(), 3);
    }

    #[test]
    fn test_upload_sphere_preserves_index_count() {
        let Some((device, _queue)) = create_test_device_queue() else {
            return;
        };
        let mesh = SphereMesh::generate(10, 10);
        let allocator = BufferAllocator::new(&device);
        let buffer = allocator.upload_sphere("test-sphere", &mesh);
        assert_eq!(buffer.index_count, 600);
    }

    #[test]
    fn test_buffer_sizes_match_mesh() {
        let Some((device, _queue)) = create_test_device_queue() else {
            return;
        };
        let mesh = SphereMesh::generate(4, 4);
        let allocator = BufferAllocator::new(&device);
        let buffer = allocator.upload_sphere("test-sphere", &mesh);
        assert_eq!(
            buffer.vertex_buffer.size(),
            (mesh.vertices.len() * std::mem::size_of::<SphereVertex>()) as u64
        );
        assert_eq!(buffer.index_buffer.size(), (mesh.indices.len() * 4) as u64);
    }
}
