pub mod camera;
pub mod config;
pub mod error;
pub mod input;
pub mod light;
pub mod matrices;
pub mod mesh;
pub mod shader_types;
pub mod state;
pub mod texture;
pub mod transform;
