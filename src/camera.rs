use glam::{Mat4, Quat, Vec3};

use crate::transform::Transform;

/// A fly camera. Orientation is a single quaternion, so the forward, right
/// and up vectors it hands out are always orthonormal.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    /// Vertical field of view in degrees
    pub fov: f32,
    pub aspect: f32,
    pub near_clip: f32,
    pub far_clip: f32,
    /// World units per unit of movement input
    pub speed: f32,
    /// Degrees per unit of look input
    pub sensitivity: f32,
    pub transform: Transform,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            fov: 45.0,
            aspect: 800.0 / 600.0,
            near_clip: 0.01,
            far_clip: 1000.0,
            speed: 5.0,
            sensitivity: 0.1,
            transform: Transform {
                translation: Vec3::new(0.0, 0.0, 10.0),
                ..Default::default()
            },
        }
    }
}

impl Camera {
    pub fn position(&self) -> Vec3 {
        self.transform.translation
    }

    pub fn forward(&self) -> Vec3 {
        self.transform.rotation * Vec3::NEG_Z
    }

    pub fn up(&self) -> Vec3 {
        self.transform.rotation * Vec3::Y
    }

    pub fn right(&self) -> Vec3 {
        self.forward().cross(self.up()).normalize()
    }

    pub fn move_forward(&mut self, amount: f32) {
        self.transform.translation += self.forward() * amount * self.speed;
    }

    pub fn move_right(&mut self, amount: f32) {
        self.transform.translation += self.right() * amount * self.speed;
    }

    /// Turns the camera by `yaw` around its up axis and `pitch` around its
    /// right axis, both scaled by the sensitivity.
    pub fn look(&mut self, yaw: f32, pitch: f32) {
        let yaw = (yaw * self.sensitivity).to_radians();
        let pitch = (pitch * self.sensitivity).to_radians();

        // local-space composition of yaw about the current up and pitch
        // about the current right
        let rotation = self.transform.rotation
            * Quat::from_rotation_y(yaw)
            * Quat::from_rotation_x(pitch);
        self.transform.rotation = rotation.normalize();
    }

    pub fn set_aspect(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.aspect = width as f32 / height as f32;
    }

    pub fn view(&self) -> Mat4 {
        let position = self.position();
        Mat4::look_at_rh(position, position + self.forward(), self.up())
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fov.to_radians(),
            self.aspect,
            self.near_clip,
            self.far_clip,
        )
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection() * self.view()
    }
}
