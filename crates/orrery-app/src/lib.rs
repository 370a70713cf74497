//! Windowing, input, and per-frame orchestration for the orrery demo.
//!
//! [`run_with_config`] opens a window, initializes the GPU, builds the scene
//! from the configuration, and drives the event loop: input feeds the fly
//! camera, the frame clock feeds the orbital animator, and each redraw
//! uploads fresh uniforms and draws the three bodies.

pub mod assets;
pub mod fly_camera;
pub mod frame_clock;
pub mod input;
pub mod scene;
pub mod window;

pub use fly_camera::FlyCamera;
pub use frame_clock::{FrameClock, FrameTiming, MAX_FRAME_TIME};
pub use input::{KeyboardState, MouseState};
pub use scene::{Scene, SceneError};
pub use window::{AppError, AppState, run_with_config};
