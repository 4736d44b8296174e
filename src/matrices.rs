//! Affine transform builders and the console walkthrough built on them.
//!
//! Positions carry `w = 1` and directions `w = 0`, so translations move the
//! former and leave the latter alone.

use std::fmt;

use glam::{Mat4, Vec3, Vec4};

pub fn translation(offset: Vec3) -> Mat4 {
    Mat4::from_translation(offset)
}

/// Rotation of `degrees` around `axis` (normalized here), right-hand rule
pub fn rotation(axis: Vec3, degrees: f32) -> Mat4 {
    Mat4::from_axis_angle(axis.normalize(), degrees.to_radians())
}

pub fn scale(amount: Vec3) -> Mat4 {
    Mat4::from_scale(amount)
}

/// `translation * rotation * scale`: applied to a point, scales first and
/// translates last
pub fn compose(translation: Mat4, rotation: Mat4, scale: Mat4) -> Mat4 {
    translation * rotation * scale
}

pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
    Mat4::look_at_rh(eye, target, up)
}

/// Right-handed perspective with the OpenGL -1..1 depth range
pub fn perspective(fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    Mat4::perspective_rh_gl(fov_degrees.to_radians(), aspect, near, far)
}

pub fn model_view_projection(model: Mat4, view: Mat4, projection: Mat4) -> Mat4 {
    projection * view * model
}

/// Clip space to normalized device coordinates. `w` must not be zero.
pub fn perspective_divide(clip: Vec4) -> Vec4 {
    clip / clip.w
}

/// One section of the walkthrough: the matrices involved and what they did
/// to the sample vectors
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub title: String,
    pub matrices: Vec<(String, Mat4)>,
    pub vectors: Vec<(String, Vec4)>,
}

impl Report {
    fn new(title: &str) -> Self {
        Self {
            title: title.to_owned(),
            matrices: Vec::new(),
            vectors: Vec::new(),
        }
    }

    fn matrix(mut self, label: &str, matrix: Mat4) -> Self {
        self.matrices.push((label.to_owned(), matrix));
        self
    }

    fn vector(mut self, label: &str, vector: Vec4) -> Self {
        self.vectors.push((label.to_owned(), vector));
        self
    }

    pub fn find_vector(&self, label: &str) -> Option<Vec4> {
        self.vectors
            .iter()
            .find(|(name, _)| name == label)
            .map(|(_, vector)| *vector)
    }

    pub fn find_matrix(&self, label: &str) -> Option<Mat4> {
        self.matrices
            .iter()
            .find(|(name, _)| name == label)
            .map(|(_, matrix)| *matrix)
    }
}

const BANNER: &str = "==================";

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "{BANNER}")?;
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{BANNER}")?;

        for (label, matrix) in &self.matrices {
            writeln!(f, "{label}:")?;
            for row in 0..4 {
                let row = matrix.row(row);
                writeln!(
                    f,
                    "{:>10.4} {:>10.4} {:>10.4} {:>10.4}",
                    row.x, row.y, row.z, row.w
                )?;
            }
            writeln!(f)?;
        }

        for (label, v) in &self.vectors {
            writeln!(
                f,
                "{label}: ({:.4}, {:.4}, {:.4}, {:.4})",
                v.x, v.y, v.z, v.w
            )?;
        }

        Ok(())
    }
}

pub fn translation_demo(offset: Vec3, position: Vec4, direction: Vec4) -> Report {
    let matrix = translation(offset);

    Report::new("Translation")
        .matrix("Translation", matrix)
        .vector("Position", matrix * position)
        .vector("Direction", matrix * direction)
}

pub fn rotation_demo(axis: Vec3, degrees: f32, position: Vec4, direction: Vec4) -> Report {
    let matrix = rotation(axis, degrees);

    Report::new("Rotation")
        .matrix("Rotation", matrix)
        .vector("Position", matrix * position)
        .vector("Direction", matrix * direction)
}

pub fn scale_demo(amount: Vec3, position: Vec4, direction: Vec4) -> Report {
    let matrix = scale(amount);

    Report::new("Scale")
        .matrix("Scale", matrix)
        .vector("Position", matrix * position)
        .vector("Direction", matrix * direction)
}

pub fn composition_demo(
    offset: Vec3,
    axis: Vec3,
    degrees: f32,
    amount: Vec3,
    position: Vec4,
    direction: Vec4,
) -> Report {
    let t = translation(offset);
    let r = rotation(axis, degrees);
    let s = scale(amount);
    let transform = compose(t, r, s);

    Report::new("Composition")
        .matrix("Translation", t)
        .matrix("Rotation", r)
        .matrix("Scale", s)
        .matrix("Transform", transform)
        .vector("Position", transform * position)
        .vector("Direction", transform * direction)
}

#[derive(Debug, Clone, Copy)]
pub struct ModelViewProjectionParams {
    pub model: Mat4,
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fov_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub point: Vec4,
}

impl Default for ModelViewProjectionParams {
    fn default() -> Self {
        Self {
            model: Mat4::IDENTITY,
            eye: Vec3::new(0.0, 0.0, 10.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_degrees: 45.0,
            aspect: 800.0 / 600.0,
            near: 0.001,
            far: 1000.0,
            point: Vec4::new(0.0, 0.0, 0.0, 1.0),
        }
    }
}

pub fn model_view_projection_demo(params: &ModelViewProjectionParams) -> Report {
    let view = look_at(params.eye, params.target, params.up);
    let projection = perspective(params.fov_degrees, params.aspect, params.near, params.far);
    let mvp = model_view_projection(params.model, view, projection);
    let clip = mvp * params.point;

    Report::new("Model View Projection")
        .matrix("View", view)
        .matrix("Projection", projection)
        .matrix("ModelViewProjection", mvp)
        .vector("Clip", clip)
        .vector("NDC", perspective_divide(clip))
}
