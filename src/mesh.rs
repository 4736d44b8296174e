use std::f32::consts::{PI, TAU};

use glam::{Vec2, Vec3};

#[derive(Debug, Default, Clone)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub pos: Vec3,
    pub normal: Vec3,
    pub color: Vec3,
    pub uv: Vec2,
}

impl Mesh {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterates the index buffer three indices at a time
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
    }
}

/// Generates a unit UV sphere centered at the origin.
///
/// `resolution` is the number of grid samples along each parameter axis, so
/// the mesh has `resolution²` vertices and `2 * (resolution - 1)²` triangles.
/// The polar angle comes from the first grid axis and the azimuth from the
/// second. Resolutions below 2 produce an empty mesh.
///
/// The first and last rings collapse onto the poles, so one triangle per
/// cell along each of them has zero area.
pub fn generate_sphere(resolution: u32) -> Mesh {
    if resolution < 2 {
        return Mesh::default();
    }

    let n = resolution as usize;
    let inv_resolution = 1.0 / (resolution - 1) as f32;

    let mut vertices = Vec::with_capacity(n * n);
    for u_index in 0..resolution {
        let u = u_index as f32 * inv_resolution;
        let theta = PI * u;

        for v_index in 0..resolution {
            let v = v_index as f32 * inv_resolution;
            let phi = TAU * v;

            let pos = Vec3::new(theta.sin() * phi.cos(), theta.sin() * phi.sin(), theta.cos());

            vertices.push(Vertex {
                pos,
                normal: pos.normalize(),
                color: Vec3::ONE,
                uv: Vec2::new(1.0 - u, v),
            });
        }
    }

    let mut indices = Vec::with_capacity(6 * (n - 1) * (n - 1));
    for u in 0..resolution - 1 {
        for v in 0..resolution - 1 {
            let p0 = u * resolution + v;
            let p1 = (u + 1) * resolution + v;
            let p2 = (u + 1) * resolution + v + 1;
            let p3 = u * resolution + v + 1;

            // counter-clockwise seen from outside
            indices.extend_from_slice(&[p0, p1, p3]);
            indices.extend_from_slice(&[p3, p1, p2]);
        }
    }

    Mesh { vertices, indices }
}
