//! Integration tests for per-frame input integration.

use blue_marble::{camera::Camera, input::InputState};
use glam::Vec3;
use winit::{
    event::{ElementState, MouseButton},
    keyboard::KeyCode,
};

#[test]
fn left_button_toggles_look_mode() {
    let mut input = InputState::default();
    assert!(!input.look_enabled());

    assert_eq!(
        input.on_mouse_button(MouseButton::Left, ElementState::Pressed),
        Some(true)
    );
    assert!(input.look_enabled());

    // repeated press is not a change
    assert_eq!(
        input.on_mouse_button(MouseButton::Left, ElementState::Pressed),
        None
    );
    assert_eq!(
        input.on_mouse_button(MouseButton::Right, ElementState::Released),
        None
    );

    assert_eq!(
        input.on_mouse_button(MouseButton::Left, ElementState::Released),
        Some(false)
    );
    assert!(!input.look_enabled());
}

#[test]
fn motion_outside_look_mode_is_ignored() {
    let mut input = InputState::default();
    let mut camera = Camera::default();
    let before = camera.transform;

    input.on_mouse_motion((250.0, -40.0));
    input.apply(&mut camera, 0.016);

    assert_eq!(camera.transform, before);
}

#[test]
fn motion_in_look_mode_turns_camera() {
    let mut input = InputState::default();
    let mut camera = Camera::default();

    input.on_mouse_button(MouseButton::Left, ElementState::Pressed);
    // dragging 900 units right is a 90 degree turn to the right
    input.on_mouse_motion((400.0, 0.0));
    input.on_mouse_motion((500.0, 0.0));
    input.apply(&mut camera, 0.016);

    assert!(camera.forward().abs_diff_eq(Vec3::X, 1e-5));

    // the delta is consumed by the frame that applied it
    input.apply(&mut camera, 0.016);
    assert!(camera.forward().abs_diff_eq(Vec3::X, 1e-5));
}

#[test]
fn held_keys_move_camera_every_frame() {
    let mut input = InputState::default();
    let mut camera = Camera::default();

    input.on_key(KeyCode::KeyW, ElementState::Pressed);
    input.apply(&mut camera, 0.5);
    input.apply(&mut camera, 0.5);
    // speed 5 for one second along -z
    assert!(camera.position().abs_diff_eq(Vec3::new(0.0, 0.0, 5.0), 1e-5));

    input.on_key(KeyCode::KeyW, ElementState::Released);
    input.on_key(KeyCode::KeyD, ElementState::Pressed);
    input.apply(&mut camera, 0.2);
    assert!(camera.position().abs_diff_eq(Vec3::new(1.0, 0.0, 5.0), 1e-5));

    input.on_key(KeyCode::KeyD, ElementState::Released);
    input.on_key(KeyCode::KeyA, ElementState::Pressed);
    input.on_key(KeyCode::KeyS, ElementState::Pressed);
    input.apply(&mut camera, 0.2);
    assert!(camera.position().abs_diff_eq(Vec3::new(0.0, 0.0, 6.0), 1e-5));
}

#[test]
fn opposite_keys_cancel_out() {
    let mut input = InputState::default();
    let mut camera = Camera::default();

    input.on_key(KeyCode::KeyW, ElementState::Pressed);
    input.on_key(KeyCode::KeyS, ElementState::Pressed);
    input.on_key(KeyCode::KeyQ, ElementState::Pressed);
    input.apply(&mut camera, 1.0);

    assert!(camera.position().abs_diff_eq(Vec3::new(0.0, 0.0, 10.0), 1e-5));
}

#[test]
fn focus_loss_releases_held_keys() {
    let mut input = InputState::default();
    let mut camera = Camera::default();

    input.on_key(KeyCode::KeyW, ElementState::Pressed);
    input.on_key(KeyCode::KeyD, ElementState::Pressed);
    assert!(!input.on_focus_lost());

    // no release event ever arrives for W or D
    input.apply(&mut camera, 1.0);
    assert!(camera.position().abs_diff_eq(Vec3::new(0.0, 0.0, 10.0), 1e-5));
}

#[test]
fn focus_loss_leaves_look_mode() {
    let mut input = InputState::default();
    let mut camera = Camera::default();
    let before = camera.transform;

    input.on_mouse_button(MouseButton::Left, ElementState::Pressed);
    input.on_mouse_motion((120.0, 30.0));
    assert!(input.on_focus_lost());
    assert!(!input.look_enabled());

    // pending and later motion are dropped
    input.on_mouse_motion((50.0, 0.0));
    input.apply(&mut camera, 0.016);
    assert_eq!(camera.transform, before);

    // pressing again re-enters look mode as usual
    assert_eq!(
        input.on_mouse_button(MouseButton::Left, ElementState::Pressed),
        Some(true)
    );
}
