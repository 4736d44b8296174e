use glam::Vec2;
use winit::{
    event::{ElementState, MouseButton},
    keyboard::KeyCode,
};

use crate::camera::Camera;

/// Input gathered from window events between two frames.
#[derive(Debug, Default, Clone)]
pub struct InputState {
    look_enabled: bool,
    look_delta: Vec2,
    forward: bool,
    backward: bool,
    left: bool,
    right: bool,
}

impl InputState {
    pub fn look_enabled(&self) -> bool {
        self.look_enabled
    }

    /// Tracks the left button. Returns the new look mode when it changed.
    pub fn on_mouse_button(&mut self, button: MouseButton, state: ElementState) -> Option<bool> {
        if button != MouseButton::Left {
            return None;
        }

        let enabled = state.is_pressed();
        if enabled == self.look_enabled {
            return None;
        }

        self.look_enabled = enabled;
        self.look_delta = Vec2::ZERO;
        Some(enabled)
    }

    pub fn on_mouse_motion(&mut self, delta: (f64, f64)) {
        if self.look_enabled {
            self.look_delta += Vec2::new(delta.0 as f32, delta.1 as f32);
        }
    }

    /// Releases every held key and leaves look mode. Keys still down when
    /// focus moves away never report their release. Returns true when look
    /// mode was on, so the caller can give the cursor back.
    pub fn on_focus_lost(&mut self) -> bool {
        let was_looking = self.look_enabled;
        *self = Self::default();
        was_looking
    }

    pub fn on_key(&mut self, key: KeyCode, state: ElementState) {
        let pressed = state.is_pressed();
        match key {
            KeyCode::KeyW => self.forward = pressed,
            KeyCode::KeyS => self.backward = pressed,
            KeyCode::KeyA => self.left = pressed,
            KeyCode::KeyD => self.right = pressed,
            _ => (),
        }
    }

    /// Moves and turns the camera by everything gathered since the last
    /// frame, then clears the pending look delta.
    pub fn apply(&mut self, camera: &mut Camera, dt: f32) {
        if self.forward {
            camera.move_forward(dt);
        }
        if self.backward {
            camera.move_forward(-dt);
        }
        if self.left {
            camera.move_right(-dt);
        }
        if self.right {
            camera.move_right(dt);
        }

        let delta = std::mem::take(&mut self.look_delta);
        if delta != Vec2::ZERO {
            // screen y grows downwards
            camera.look(-delta.x, -delta.y);
        }
    }
}
