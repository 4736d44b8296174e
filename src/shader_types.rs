use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2, Vec3};

use crate::mesh::Vertex;

/// Mirrors `Uniforms` in the sphere shaders (160 bytes)
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct Uniforms {
    pub model_view_projection: Mat4,
    pub normal_matrix: Mat4,
    pub light_direction: Vec3,
    pub light_intensity: f32,
    pub time: f32,
    pub _p0: [u32; 3],
}

impl Default for Uniforms {
    fn default() -> Self {
        Self {
            model_view_projection: Mat4::IDENTITY,
            normal_matrix: Mat4::IDENTITY,
            light_direction: Vec3::NEG_Z,
            light_intensity: 1.0,
            time: 0.0,
            _p0: [0; 3],
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable, Default)]
pub struct GpuVertex {
    pub pos: Vec3,
    pub normal: Vec3,
    pub color: Vec3,
    pub uv: Vec2,
}

impl GpuVertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        0 => Float32x3,
        1 => Float32x3,
        2 => Float32x3,
        3 => Float32x2
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

impl From<Vertex> for GpuVertex {
    fn from(value: Vertex) -> Self {
        Self::from(&value)
    }
}

impl From<&Vertex> for GpuVertex {
    fn from(value: &Vertex) -> Self {
        Self {
            pos: value.pos,
            normal: value.normal,
            color: value.color,
            uv: value.uv,
        }
    }
}
