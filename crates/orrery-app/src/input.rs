//! Frame-coherent keyboard and mouse state trackers.
//!
//! Both trackers accumulate winit events during a frame and are queried by
//! the fly camera once per redraw; transient state (deltas, scroll, edge
//! transitions) is cleared at the end of each frame.
//!
//! Physical key codes are used throughout so that WASD movement works
//! identically regardless of the user's keyboard layout.

use std::collections::HashSet;

use glam::Vec2;
use winit::event::{ElementState, KeyEvent, MouseScrollDelta};
use winit::keyboard::PhysicalKey;

/// Tracks per-frame keyboard state using physical (scan-code) keys.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    pressed: HashSet<PhysicalKey>,
    just_pressed: HashSet<PhysicalKey>,
}

impl KeyboardState {
    /// Creates a new `KeyboardState` with no keys pressed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Processes a winit [`KeyEvent`], updating internal state.
    /// Repeat events are ignored.
    pub fn process_event(&mut self, event: &KeyEvent) {
        if event.repeat {
            return;
        }
        match event.state {
            ElementState::Pressed => {
                self.pressed.insert(event.physical_key);
                self.just_pressed.insert(event.physical_key);
            }
            ElementState::Released => {
                self.pressed.remove(&event.physical_key);
            }
        }
    }

    /// Returns `true` while the key is held down.
    #[must_use]
    pub fn is_pressed(&self, key: PhysicalKey) -> bool {
        self.pressed.contains(&key)
    }

    /// Returns `true` only during the frame the key transitioned to pressed.
    #[must_use]
    pub fn just_pressed(&self, key: PhysicalKey) -> bool {
        self.just_pressed.contains(&key)
    }

    /// Clears the `just_pressed` set. Call at end of frame.
    pub fn clear_transients(&mut self) {
        self.just_pressed.clear();
    }
}

/// Frame-coherent mouse state: look delta, scroll wheel, cursor capture.
#[derive(Debug, Clone)]
pub struct MouseState {
    position: Vec2,
    delta: Vec2,
    scroll: f32,
    captured: bool,
}

impl Default for MouseState {
    fn default() -> Self {
        Self::new()
    }
}

impl MouseState {
    /// Creates a new `MouseState` with all fields zeroed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            delta: Vec2::ZERO,
            scroll: 0.0,
            captured: false,
        }
    }

    /// Process a `CursorMoved` event. Ignored for look input while captured;
    /// raw motion is used instead.
    pub fn on_cursor_moved(&mut self, x: f64, y: f64) {
        let new_pos = Vec2::new(x as f32, y as f32);
        if !self.captured {
            self.delta += new_pos - self.position;
        }
        self.position = new_pos;
    }

    /// Process a `DeviceEvent::MouseMotion` raw delta (used when captured).
    pub fn on_raw_motion(&mut self, dx: f64, dy: f64) {
        if self.captured {
            self.delta += Vec2::new(dx as f32, dy as f32);
        }
    }

    /// Process a `MouseWheel` event.
    pub fn on_scroll(&mut self, delta: MouseScrollDelta) {
        match delta {
            MouseScrollDelta::LineDelta(_x, y) => {
                self.scroll += y;
            }
            MouseScrollDelta::PixelDelta(pos) => {
                // Normalize pixel delta: ~40 pixels ≈ 1 line
                self.scroll += (pos.y / 40.0) as f32;
            }
        }
    }

    /// Set cursor capture state. Pass the window to apply grab/visibility.
    ///
    /// When captured, the cursor is hidden and confined (or locked) to the
    /// window, and raw `DeviceEvent::MouseMotion` deltas are used instead of
    /// `CursorMoved` position differences.
    pub fn set_captured(&mut self, window: &winit::window::Window, captured: bool) {
        use winit::window::CursorGrabMode;
        self.captured = captured;
        if captured {
            // Try Locked first, fall back to Confined.
            if window.set_cursor_grab(CursorGrabMode::Locked).is_err() {
                let _ = window.set_cursor_grab(CursorGrabMode::Confined);
            }
            window.set_cursor_visible(false);
        } else {
            let _ = window.set_cursor_grab(CursorGrabMode::None);
            window.set_cursor_visible(true);
        }
    }

    /// Set captured flag without a window reference (for testing).
    #[cfg(test)]
    pub(crate) fn set_captured_flag(&mut self, captured: bool) {
        self.captured = captured;
    }

    /// Clears per-frame transients: delta and scroll.
    pub fn clear_transients(&mut self) {
        self.delta = Vec2::ZERO;
        self.scroll = 0.0;
    }

    /// Movement delta since last frame clear.
    #[must_use]
    pub fn delta(&self) -> Vec2 {
        self.delta
    }

    /// Scroll wheel delta accumulated this frame (positive = scroll up).
    #[must_use]
    pub fn scroll(&self) -> f32 {
        self.scroll
    }

    /// Whether the cursor is currently captured for FPS-style look.
    #[must_use]
    pub fn is_captured(&self) -> bool {
        self.captured
    }
}
