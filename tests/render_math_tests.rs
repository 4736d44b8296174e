//! Tests for the values the renderer hands to its shaders.

use blue_marble::{
    camera::Camera,
    config::Config,
    light::Light,
    error::RenderError,
    shader_types::{GpuVertex, Uniforms},
    state::preferred_surface_format,
    transform::Transform,
};
use glam::{Mat4, Quat, Vec3};

#[test]
fn uniform_block_matches_shader_layout() {
    assert_eq!(std::mem::size_of::<Uniforms>(), 160);
    assert_eq!(std::mem::size_of::<GpuVertex>(), 44);
    assert_eq!(GpuVertex::layout().attributes.len(), 4);
    assert_eq!(GpuVertex::layout().attributes[3].offset, 36);
}

#[test]
fn light_direction_ignores_translation() {
    let light = Light::default();
    let view = Mat4::from_translation(Vec3::new(4.0, 5.0, 6.0));
    assert_eq!(light.view_direction(view), Vec3::NEG_Z);

    let view = Mat4::from_rotation_y(90.0_f32.to_radians());
    assert!(light.view_direction(view).abs_diff_eq(Vec3::NEG_X, 1e-6));
}

#[test]
fn normal_matrix_keeps_normals_perpendicular_under_non_uniform_scale() {
    let globe = Transform {
        scale: Vec3::new(1.0, 3.0, 1.0),
        ..Default::default()
    };
    let view = Camera::default().view();
    let model_view = view * Mat4::from(&globe);

    // tangent and normal of the unit sphere at (1, 1, 0) / sqrt(2)
    let tangent = Vec3::new(1.0, -1.0, 0.0);
    let normal = Vec3::new(1.0, 1.0, 0.0);

    let tangent = model_view.transform_vector3(tangent);
    let normal = globe.normal_matrix(view).transform_vector3(normal);
    assert!(tangent.dot(normal).abs() < 1e-5);
}

#[test]
fn normal_matrix_of_rigid_transform_is_the_rotation() {
    let globe = Transform::from_rotation(Quat::from_rotation_x(-90.0_f32.to_radians()));
    let view = Mat4::IDENTITY;

    let normal = globe.normal_matrix(view).transform_vector3(Vec3::Z);
    assert!(normal.abs_diff_eq(Vec3::Y, 1e-6));
}

#[test]
fn default_config_matches_window() {
    let config = Config::default();
    assert_eq!(config.title, "Blue Marble");
    assert_eq!((config.width, config.height), (800, 600));
    assert_eq!(config.sphere_resolution, 50);
    assert!((config.camera.aspect - 800.0 / 600.0).abs() < 1e-6);
    assert!(config.vertex_shader.ends_with("sphere_vert.wgsl"));
    assert!(config.fragment_shader.ends_with("sphere_frag.wgsl"));
}

#[test]
fn surface_format_takes_first_reported() {
    let formats = [
        wgpu::TextureFormat::Bgra8Unorm,
        wgpu::TextureFormat::Rgba8Unorm,
    ];
    assert_eq!(
        preferred_surface_format(&formats).unwrap(),
        wgpu::TextureFormat::Bgra8Unorm
    );
}

#[test]
fn surface_without_formats_is_an_error() {
    let err = preferred_surface_format(&[]).unwrap_err();
    assert!(matches!(err, RenderError::NoSurfaceFormat));
}
