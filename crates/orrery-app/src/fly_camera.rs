//! WASD + mouse-look fly camera controller.
//!
//! Holds the camera's position and Euler angles and translates frame input
//! into movement, look, and scroll zoom. The controller is deliberately
//! separate from the render camera: it owns the control state and writes the
//! resulting pose into [`orrery_render::Camera`] once per frame.

use glam::{Quat, Vec3};
use orrery_config::CameraConfig;
use orrery_render::Camera;
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::input::{KeyboardState, MouseState};

/// Pitch limit in degrees; straight up/down would flip the view.
const PITCH_LIMIT: f32 = 89.0;

/// Zoom (vertical FOV) limits in degrees.
const FOV_MIN: f32 = 1.0;
const FOV_MAX: f32 = 45.0;

/// Free-fly camera state.
#[derive(Debug, Clone)]
pub struct FlyCamera {
    pub position: Vec3,
    /// Yaw in degrees; -90 faces down -Z.
    pub yaw: f32,
    /// Pitch in degrees, clamped to ±[`PITCH_LIMIT`].
    pub pitch: f32,
    /// Vertical field of view in degrees, narrowed by scroll zoom.
    pub fov: f32,
    /// Movement speed in world units per second.
    pub speed: f32,
    /// Look sensitivity in degrees per pixel of mouse motion.
    pub sensitivity: f32,
}

impl FlyCamera {
    /// Build a controller from the camera configuration.
    pub fn from_config(config: &CameraConfig) -> Self {
        Self {
            position: Vec3::from_array(config.position),
            yaw: -90.0,
            pitch: 0.0,
            fov: config.fov_degrees.clamp(FOV_MIN, FOV_MAX),
            speed: config.speed,
            sensitivity: config.mouse_sensitivity,
        }
    }

    /// The normalized view direction for the current yaw/pitch.
    pub fn front(&self) -> Vec3 {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize()
    }

    /// Apply one frame of input: WASD movement, mouse look, scroll zoom.
    pub fn update(&mut self, dt: f32, keyboard: &KeyboardState, mouse: &MouseState) {
        // Mouse look. Screen y grows downward, pitch grows upward.
        let look = mouse.delta() * self.sensitivity;
        self.yaw += look.x;
        self.pitch = (self.pitch - look.y).clamp(-PITCH_LIMIT, PITCH_LIMIT);

        // Scroll zoom narrows the FOV.
        self.fov = (self.fov - mouse.scroll()).clamp(FOV_MIN, FOV_MAX);

        // WASD movement in the horizontal-free flight style: forward follows
        // the full view direction, including pitch.
        let front = self.front();
        let right = front.cross(Vec3::Y).normalize();
        let velocity = self.speed * dt;

        if keyboard.is_pressed(PhysicalKey::Code(KeyCode::KeyW)) {
            self.position += front * velocity;
        }
        if keyboard.is_pressed(PhysicalKey::Code(KeyCode::KeyS)) {
            self.position -= front * velocity;
        }
        if keyboard.is_pressed(PhysicalKey::Code(KeyCode::KeyA)) {
            self.position -= right * velocity;
        }
        if keyboard.is_pressed(PhysicalKey::Code(KeyCode::KeyD)) {
            self.position += right * velocity;
        }
    }

    /// Write the controller's pose into the render camera.
    pub fn apply_to(&self, camera: &mut Camera) {
        camera.position = self.position;
        // Ry(-(yaw + 90°)) maps camera-space -Z onto front().
        camera.rotation = Quat::from_rotation_y(-(self.yaw + 90.0).to_radians())
            * Quat::from_rotation_x(self.pitch.to_radians());
        camera.fov_y = self.fov.to_radians();
    }
}
