//! wgpu rendering layer for the orrery demo: GPU context, depth buffer,
//! camera, mesh upload, textures, and the two sphere pipelines.

pub mod buffer;
pub mod camera;
pub mod depth;
pub mod gpu;
pub mod lit_pipeline;
pub mod pass;
pub mod texture;
pub mod textured_pipeline;
pub mod uniform;

pub use buffer::{BufferAllocator, MeshBuffer, sphere_vertex_layout};
pub use camera::Camera;
pub use depth::DepthBuffer;
pub use gpu::{RenderContext, RenderContextError, SurfaceError, init_render_context_blocking};
pub use lit_pipeline::{LIT_SHADER_SOURCE, LitPipeline, draw_lit};
pub use pass::{
    DepthAttachmentConfig, FrameEncoder, LIT_CLEAR, RenderPassBuilder, TEXTURED_CLEAR,
};
pub use texture::{LoadedImage, ManagedTexture, TextureError, TextureManager, load_rgba_image};
pub use textured_pipeline::{TEXTURED_SHADER_SOURCE, TexturedPipeline, draw_textured};
pub use uniform::{CameraUniform, ModelUniform};
