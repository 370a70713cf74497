//! Phong-lit rendering pipeline for the sun/earth/moon spheres.
//!
//! The point light sits at the sun's position and the lighting constants are
//! baked into the shader; the demo has exactly one light.

use std::num::NonZeroU64;

use crate::buffer::{MeshBuffer, sphere_vertex_layout};
use crate::depth::DepthBuffer;

/// Lit sphere pipeline: texture modulated by single-point-light Phong.
pub struct LitPipeline {
    /// The underlying wgpu render pipeline.
    pub pipeline: wgpu::RenderPipeline,
    /// Camera uniform bind group layout (group 0).
    pub camera_bind_group_layout: wgpu::BindGroupLayout,
    /// Per-body model uniform bind group layout (group 2).
    pub model_bind_group_layout: wgpu::BindGroupLayout,
}

impl LitPipeline {
    /// Create a new lit pipeline.
    ///
    /// `texture_bind_group_layout` is the layout for group 1 (texture + sampler).
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        depth_format: Option<wgpu::TextureFormat>,
        texture_bind_group_layout: &wgpu::BindGroupLayout,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("lit-shader"),
            source: wgpu::ShaderSource::Wgsl(LIT_SHADER_SOURCE.into()),
        });

        let camera_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("lit-camera-bind-group-layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: NonZeroU64::new(80), // CameraUniform: mat4x4 + vec4
                    },
                    count: None,
                }],
            });

        let model_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("lit-model-bind-group-layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: NonZeroU64::new(64), // ModelUniform: mat4x4
                    },
                    count: None,
                }],
            });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("lit-pipeline-layout"),
            bind_group_layouts: &[
                &camera_bind_group_layout,
                texture_bind_group_layout,
                &model_bind_group_layout,
            ],
            immediate_size: 0,
        });

        let depth_stencil = depth_format.map(|format| wgpu::DepthStencilState {
            format,
            depth_write_enabled: true,
            depth_compare: DepthBuffer::COMPARE_FUNCTION,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("lit-pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[sphere_vertex_layout()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil,
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            multiview_mask: None,
            cache: None,
        });

        Self {
            pipeline,
            camera_bind_group_layout,
            model_bind_group_layout,
        }
    }
}

/// Draw one lit body.
pub fn draw_lit<'a>(
    render_pass: &mut wgpu::RenderPass<'a>,
    pipeline: &LitPipeline,
    camera_bind_group: &'a wgpu::BindGroup,
    texture_bind_group: &'a wgpu::BindGroup,
    model_bind_group: &'a wgpu::BindGroup,
    mesh: &'a MeshBuffer,
) {
    render_pass.set_pipeline(&pipeline.pipeline);
    render_pass.set_bind_group(0, camera_bind_group, &[]);
    render_pass.set_bind_group(1, texture_bind_group, &[]);
    render_pass.set_bind_group(2, model_bind_group, &[]);
    mesh.bind(render_pass);
    mesh.draw(render_pass);
}

/// WGSL shader source for Phong-lit rendering.
pub const LIT_SHADER_SOURCE: &str = r#"
struct CameraUniform {
    view_proj: mat4x4<f32>,
    camera_pos: vec4<f32>,
};

struct ModelUniform {
    model: mat4x4<f32>,
};

@group(0) @binding(0)
var<uniform> camera: CameraUniform;

@group(1) @binding(0)
var t_diffuse: texture_2d<f32>;
@group(1) @binding(1)
var s_diffuse: sampler;

@group(2) @binding(0)
var<uniform> body: ModelUniform;

// The point light sits at the sun's center.
const LIGHT_POS: vec3<f32> = vec3<f32>(0.0, 0.0, -5.0);
const LIGHT_AMBIENT: f32 = 0.2;
const LIGHT_DIFFUSE: f32 = 0.5;
const LIGHT_SPECULAR: f32 = 1.0;
const MATERIAL_SPECULAR: f32 = 0.5;
const SHININESS: f32 = 64.0;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
    @location(2) uv: vec2<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) world_pos: vec3<f32>,
    @location(1) normal: vec3<f32>,
    @location(2) uv: vec2<f32>,
};

@vertex
fn vs_main(in: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    let world = body.model * vec4<f32>(in.position, 1.0);
    out.clip_position = camera.view_proj * world;
    out.world_pos = world.xyz;
    out.normal = (body.model * vec4<f32>(in.normal, 0.0)).xyz;
    out.uv = in.uv;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let tex = textureSample(t_diffuse, s_diffuse, in.uv).rgb;
    let n = normalize(in.normal);
    let light_dir = normalize(LIGHT_POS - in.world_pos);
    let view_dir = normalize(camera.camera_pos.xyz - in.world_pos);

    let ambient = LIGHT_AMBIENT * tex;

    let diff = max(dot(n, light_dir), 0.0);
    let diffuse = LIGHT_DIFFUSE * diff * tex;

    let reflect_dir = reflect(-light_dir, n);
    let spec = pow(max(dot(view_dir, reflect_dir), 0.0), SHININESS);
    let specular = vec3<f32>(LIGHT_SPECULAR * spec * MATERIAL_SPECULAR);

    return vec4<f32>(ambient + diffuse + specular, 1.0);
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gpu::create_test_device_queue;
    use crate::texture::TextureManager;

    #[test]
    fn test_lit_shader_declares_three_groups() {
        assert!(LIT_SHADER_SOURCE.contains("@group(0)"));
        assert!(LIT_SHADER_SOURCE.contains("@group(1)"));
        assert!(LIT_SHADER_SOURCE.contains("@group(2)"));
    }

    #[test]
    fn test_light_sits_at_sun_center() {
        assert!(LIT_SHADER_SOURCE.contains("vec3<f32>(0.0, 0.0, -5.0)"));
    }

    #[test]
    fn test_lit_pipeline_creation() {
        let Some((device, _queue)) = create_test_device_queue() else {
            return;
        };
        let textures = TextureManager::new(&device);
        let _pipeline = LitPipeline::new(
            &device,
            wgpu::TextureFormat::Bgra8UnormSrgb,
            Some(wgpu::TextureFormat::Depth32Float),
            textures.bind_group_layout(),
        );
    }
}
