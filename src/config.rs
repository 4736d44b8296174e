use std::path::PathBuf;

use crate::{camera::Camera, light::Light};

/// Everything the renderer needs to know before it opens a window
#[derive(Debug, Clone)]
pub struct Config {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub vertex_shader: PathBuf,
    pub fragment_shader: PathBuf,
    pub earth_texture: PathBuf,
    pub clouds_texture: PathBuf,
    pub sphere_resolution: u32,
    pub clear_color: wgpu::Color,
    pub camera: Camera,
    pub light: Light,
}

impl Default for Config {
    fn default() -> Self {
        let width = 800;
        let height = 600;

        let mut camera = Camera::default();
        camera.set_aspect(width, height);

        Self {
            title: "Blue Marble".to_owned(),
            width,
            height,
            vertex_shader: "shaders/sphere_vert.wgsl".into(),
            fragment_shader: "shaders/sphere_frag.wgsl".into(),
            earth_texture: "textures/earth_2k.jpg".into(),
            clouds_texture: "textures/earth_clouds_2k.jpg".into(),
            sphere_resolution: 50,
            clear_color: wgpu::Color::BLACK,
            camera,
            light: Light::default(),
        }
    }
}
