//! Scene assembly: one shared sphere mesh, three bodies, one pipeline.
//!
//! All three bodies draw the same GPU mesh; what differs per body is its
//! texture bind group and a model uniform rewritten every frame from the
//! orbital animator. The shading variant picks which pipeline the scene
//! builds and which clear color it uses.

use orrery_config::{Config, ShadingVariant};
use orrery_mesh::SphereMesh;
use orrery_orbit::{Body, model_matrices, solar_system};
use orrery_render::{
    BufferAllocator, Camera, LIT_CLEAR, LitPipeline, ManagedTexture, MeshBuffer, ModelUniform,
    TEXTURED_CLEAR, TextureError, TextureManager, TexturedPipeline, draw_lit, draw_textured,
};
use tracing::info;
use wgpu::util::DeviceExt;

use crate::assets;

/// Errors raised while assembling the scene.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("failed to create body texture: {0}")]
    Texture(#[from] TextureError),
}

/// The pipeline chosen by the shading variant.
pub enum ScenePipeline {
    Lit(LitPipeline),
    Textured(TexturedPipeline),
}

impl ScenePipeline {
    fn camera_bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        match self {
            Self::Lit(p) => &p.camera_bind_group_layout,
            Self::Textured(p) => &p.camera_bind_group_layout,
        }
    }

    fn model_bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        match self {
            Self::Lit(p) => &p.model_bind_group_layout,
            Self::Textured(p) => &p.model_bind_group_layout,
        }
    }
}

/// Per-body GPU resources.
struct BodyDraw {
    texture: ManagedTexture,
    model_buffer: wgpu::Buffer,
    model_bind_group: wgpu::BindGroup,
}

/// The assembled sun/earth/moon scene.
pub struct Scene {
    bodies: Vec<Body>,
    draws: Vec<BodyDraw>,
    mesh: MeshBuffer,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    pipeline: ScenePipeline,
    clear_color: wgpu::Color,
}

impl Scene {
    /// Build the scene for the configured shading variant: generate and
    /// upload the sphere mesh, source the three body textures, and allocate
    /// the uniform buffers.
    pub fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        surface_format: wgpu::TextureFormat,
        depth_format: wgpu::TextureFormat,
        config: &Config,
    ) -> Result<Self, SceneError> {
        let sphere = SphereMesh::generate(config.scene.lat_segments, config.scene.lon_segments);
        info!(
            "Generated sphere mesh: {} vertices, {} indices",
            sphere.vertices.len(),
            sphere.indices.len()
        );
        let mesh = BufferAllocator::new(device).upload_sphere("sphere", &sphere);

        let textures = TextureManager::new(device);
        let variant = config.scene.variant;
        let pipeline = match variant {
            ShadingVariant::Lit => ScenePipeline::Lit(LitPipeline::new(
                device,
                surface_format,
                Some(depth_format),
                textures.bind_group_layout(),
            )),
            ShadingVariant::Textured => ScenePipeline::Textured(TexturedPipeline::new(
                device,
                surface_format,
                Some(depth_format),
                textures.bind_group_layout(),
            )),
        };
        let clear_color = match variant {
            ShadingVariant::Lit => LIT_CLEAR,
            ShadingVariant::Textured => TEXTURED_CLEAR,
        };

        let bodies = solar_system();
        let assets_dir = config.scene.assets_dir.as_path();
        let mut draws = Vec::with_capacity(bodies.len());
        for body in &bodies {
            let image = assets::body_image(assets_dir, body.name);
            let texture = textures.create_texture(
                device,
                queue,
                body.name,
                &image.data,
                image.width,
                image.height,
                wgpu::TextureFormat::Rgba8UnormSrgb,
                true,
            )?;

            let model_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{}-model-uniform", body.name)),
                contents: bytemuck::bytes_of(&ModelUniform::from_mat4(glam::Mat4::IDENTITY)),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });
            let model_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some(&format!("{}-model-bind-group", body.name)),
                layout: pipeline.model_bind_group_layout(),
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: model_buffer.as_entire_binding(),
                }],
            });

            draws.push(BodyDraw {
                texture,
                model_buffer,
                model_bind_group,
            });
        }

        let camera_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("camera-uniform"),
            contents: bytemuck::bytes_of(&Camera::default().to_uniform()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("camera-bind-group"),
            layout: pipeline.camera_bind_group_layout(),
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
        });

        Ok(Self {
            bodies,
            draws,
            mesh,
            camera_buffer,
            camera_bind_group,
            pipeline,
            clear_color,
        })
    }

    /// Clear color matching the configured shading variant.
    pub fn clear_color(&self) -> wgpu::Color {
        self.clear_color
    }

    /// Rewrite the camera and per-body model uniforms for time `elapsed`.
    pub fn update(&self, queue: &wgpu::Queue, camera: &Camera, elapsed: f32) {
        queue.write_buffer(
            &self.camera_buffer,
            0,
            bytemuck::bytes_of(&camera.to_uniform()),
        );

        let matrices = model_matrices(&self.bodies, elapsed);
        for (draw, matrix) in self.draws.iter().zip(&matrices) {
            queue.write_buffer(
                &draw.model_buffer,
                0,
                bytemuck::bytes_of(&ModelUniform::from_mat4(*matrix)),
            );
        }
    }

    /// Record draw calls for all three bodies into an open render pass.
    pub fn render<'a>(&'a self, render_pass: &mut wgpu::RenderPass<'a>) {
        for draw in &self.draws {
            match &self.pipeline {
                ScenePipeline::Lit(pipeline) => draw_lit(
                    render_pass,
                    pipeline,
                    &self.camera_bind_group,
                    &draw.texture.bind_group,
                    &draw.model_bind_group,
                    &self.mesh,
                ),
                ScenePipeline::Textured(pipeline) => draw_textured(
                    render_pass,
                    pipeline,
                    &self.camera_bind_group,
                    &draw.texture.bind_group,
                    &draw.model_bind_group,
                    &self.mesh,
                ),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_render::DepthBuffer;

    // wgpu device helpers live behind cfg(test) in orrery-render, so scene
    // construction is exercised here with a fresh headless device.
    fn test_device_queue() -> Option<(wgpu::Device, wgpu::Queue)> {
        let instance = wgpu::Instance::default();
        let adapter =
            pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions::default()))
                .ok()?;
        pollster::block_on(adapter.request_device(&wgpu::DeviceDescriptor {
            label: Some("scene-test-device"),
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::downlevel_defaults(),
            memory_hints: wgpu::MemoryHints::default(),
            experimental_features: wgpu::ExperimentalFeatures::default(),
            trace: wgpu::Trace::Off,
        }))
        .ok()
    }

    #[test]
    fn test_scene_builds_three_bodies() {
        let Some((device, queue)) = test_device_queue() else {
            return;
        };
        let config = Config::default();
        let scene = Scene::new(
            &device,
            &queue,
            wgpu::TextureFormat::Bgra8UnormSrgb,
            DepthBuffer::FORMAT,
            &config,
        )
        .unwrap();
        assert_eq!(scene.draws.len(), 3);
        assert_eq!(scene.bodies.len(), 3);
    }

    #[test]
    fn test_lit_variant_uses_lit_clear() {
        let Some((device, queue)) = test_device_queue() else {
            return;
        };
        let config = Config::default();
        let scene = Scene::new(
            &device,
            &queue,
            wgpu::TextureFormat::Bgra8UnormSrgb,
            DepthBuffer::FORMAT,
            &config,
        )
        .unwrap();
        assert_eq!(scene.clear_color().r, LIT_CLEAR.r);
        assert!(matches!(scene.pipeline, ScenePipeline::Lit(_)));
    }

    #[test]
    fn test_textured_variant_uses_teal_clear() {
        let Some((device, queue)) = test_device_queue() else {
            return;
        };
        let mut config = Config::default();
        config.scene.variant = ShadingVariant::Textured;
        let scene = Scene::new(
            &device,
            &queue,
            wgpu::TextureFormat::Bgra8UnormSrgb,
            DepthBuffer::FORMAT,
            &config,
        )
        .unwrap();
        assert_eq!(scene.clear_color().g, TEXTURED_CLEAR.g);
        assert!(matches!(scene.pipeline, ScenePipeline::Textured(_)));
    }

    #[test]
    fn test_update_is_stable_across_frames() {
        let Some((device, queue)) = test_device_queue() else {
            return;
        };
        let config = Config::default();
        let scene = Scene::new(
            &device,
            &queue,
            wgpu::TextureFormat::Bgra8UnormSrgb,
            DepthBuffer::FORMAT,
            &config,
        )
        .unwrap();
        let camera = Camera::default();
        scene.update(&queue, &camera, 0.0);
        scene.update(&queue, &camera, 1.5);
    }
}
