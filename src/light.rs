use glam::{Mat4, Vec3};

/// A directional light, fixed for the whole run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub direction: Vec3,
    pub intensity: f32,
}

impl Default for Light {
    fn default() -> Self {
        Self {
            direction: Vec3::NEG_Z,
            intensity: 1.0,
        }
    }
}

impl Light {
    /// The light direction carried into view space. Directions ignore the
    /// view's translation.
    pub fn view_direction(&self, view: Mat4) -> Vec3 {
        view.transform_vector3(self.direction)
    }
}
