//! Window creation and the winit event loop.
//!
//! [`AppState`] implements [`ApplicationHandler`]: the window and GPU come up
//! in `resumed`, input events feed the trackers, and `RedrawRequested` runs
//! one frame of the simulation and draws it.

use std::sync::Arc;

use orrery_config::Config;
use orrery_render::{
    Camera, DepthBuffer, FrameEncoder, RenderContext, RenderPassBuilder, SurfaceError,
    init_render_context_blocking,
};
use tracing::{error, info};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{DeviceEvent, DeviceId, ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Fullscreen, Window, WindowId};

use crate::fly_camera::FlyCamera;
use crate::frame_clock::FrameClock;
use crate::input::{KeyboardState, MouseState};
use crate::scene::Scene;

/// Top-level application errors surfaced to `main`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
}

/// All mutable application state driven by the event loop.
pub struct AppState {
    config: Config,
    window: Option<Arc<Window>>,
    gpu: Option<RenderContext>,
    depth: Option<DepthBuffer>,
    scene: Option<Scene>,
    camera: Camera,
    fly_camera: FlyCamera,
    clock: FrameClock,
    keyboard: KeyboardState,
    mouse: MouseState,
}

impl AppState {
    /// Build initial state from the configuration. GPU resources are created
    /// later, in [`ApplicationHandler::resumed`].
    pub fn new(config: Config) -> Self {
        let camera = Camera {
            position: glam::Vec3::from_array(config.camera.position),
            fov_y: config.camera.fov_degrees.to_radians(),
            aspect_ratio: config.window.width as f32 / config.window.height.max(1) as f32,
            near: config.camera.near,
            far: config.camera.far,
            ..Camera::default()
        };
        let fly_camera = FlyCamera::from_config(&config.camera);

        Self {
            config,
            window: None,
            gpu: None,
            depth: None,
            scene: None,
            camera,
            fly_camera,
            clock: FrameClock::new(),
            keyboard: KeyboardState::new(),
            mouse: MouseState::new(),
        }
    }

    fn handle_resize(&mut self, size: PhysicalSize<u32>) {
        if let Some(gpu) = self.gpu.as_mut() {
            gpu.resize(size.width, size.height);
            if let Some(depth) = self.depth.as_mut() {
                depth.resize(&gpu.device, size.width.max(1), size.height.max(1));
            }
        }
        self.camera
            .set_aspect_ratio(size.width as f32, size.height as f32);
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(gpu), Some(depth), Some(scene), Some(window)) = (
            self.gpu.as_ref(),
            self.depth.as_ref(),
            self.scene.as_ref(),
            self.window.as_ref(),
        ) else {
            return;
        };

        let timing = self.clock.tick();
        self.fly_camera
            .update(timing.dt, &self.keyboard, &self.mouse);
        self.fly_camera.apply_to(&mut self.camera);
        scene.update(&gpu.queue, &self.camera, timing.elapsed);

        if self.config.debug.log_frame_stats
            && let Some(fps) = self.clock.take_fps_report()
        {
            info!("{fps:.1} fps ({} frames total)", self.clock.frame_count());
        }

        let surface_texture = match gpu.get_current_texture() {
            Ok(texture) => texture,
            Err(SurfaceError::Lost) => {
                let size = window.inner_size();
                self.handle_resize(size);
                return;
            }
            Err(SurfaceError::OutOfMemory) => {
                error!("GPU out of memory, exiting");
                event_loop.exit();
                return;
            }
            Err(SurfaceError::Timeout) => {
                // Skip this frame; the next acquire usually succeeds.
                return;
            }
        };

        let mut encoder =
            FrameEncoder::new(&gpu.device, Arc::new(gpu.queue.clone()), surface_texture);
        let pass_builder = RenderPassBuilder::new()
            .clear_color(scene.clear_color())
            .depth(depth.view.clone(), DepthBuffer::CLEAR_VALUE)
            .label("orrery-pass");
        {
            let mut render_pass = encoder.begin_render_pass(&pass_builder);
            scene.render(&mut render_pass);
        }
        encoder.submit();

        self.keyboard.clear_transients();
        self.mouse.clear_transients();
        window.request_redraw();
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let mut attributes = Window::default_attributes()
            .with_title(self.config.window.title.clone())
            .with_inner_size(PhysicalSize::new(
                self.config.window.width,
                self.config.window.height,
            ));
        if self.config.window.fullscreen {
            attributes = attributes.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        let window = match event_loop.create_window(attributes) {
            Ok(window) => Arc::new(window),
            Err(err) => {
                error!("Failed to create window: {err}");
                event_loop.exit();
                return;
            }
        };

        let gpu = match init_render_context_blocking(Arc::clone(&window), self.config.window.vsync)
        {
            Ok(gpu) => gpu,
            Err(err) => {
                error!("Failed to initialize GPU: {err}");
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        self.camera
            .set_aspect_ratio(size.width as f32, size.height as f32);
        let depth = DepthBuffer::new(&gpu.device, size.width.max(1), size.height.max(1));

        let scene = match Scene::new(
            &gpu.device,
            &gpu.queue,
            gpu.surface_format,
            DepthBuffer::FORMAT,
            &self.config,
        ) {
            Ok(scene) => scene,
            Err(err) => {
                error!("Failed to build scene: {err}");
                event_loop.exit();
                return;
            }
        };

        self.mouse.set_captured(&window, true);
        window.request_redraw();

        self.window = Some(window);
        self.gpu = Some(gpu);
        self.depth = Some(depth);
        self.scene = Some(scene);
        info!("Window and GPU initialized");
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => self.handle_resize(size),
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                // A Resized event with the new physical size follows, but
                // moving between monitors mid-frame can leave the surface
                // stale; resync from the window's current size.
                info!("Scale factor changed to {scale_factor}");
                if let Some(window) = self.window.as_ref() {
                    let size = window.inner_size();
                    self.handle_resize(size);
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                self.keyboard.process_event(&event);
                if self
                    .keyboard
                    .just_pressed(PhysicalKey::Code(KeyCode::Escape))
                {
                    event_loop.exit();
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.mouse.on_cursor_moved(position.x, position.y);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.mouse.on_scroll(delta);
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                // Clicking recaptures the cursor after a focus loss.
                if !self.mouse.is_captured()
                    && let Some(window) = self.window.as_ref()
                {
                    self.mouse.set_captured(window, true);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            self.mouse.on_raw_motion(dx, dy);
        }
    }
}

/// Run the demo with the given configuration until the window closes.
pub fn run_with_config(config: Config) -> Result<(), AppError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);
    let mut app = AppState::new(config);
    event_loop.run_app(&mut app)?;
    Ok(())
}
