use approx::assert_relative_eq;
use cgmath::{Deg, Vector3};
use instant::Duration;
use still_life::{
    camera::{Camera, CameraController, Projection, ProjectionKind},
    config::CameraConfig,
};
use winit::{event::ElementState, keyboard::KeyCode};

#[test]
fn should_look_along_negative_z_at_default_yaw() {
    let camera = Camera::new((0.0, 0.0, 0.0), Deg(-90.0), Deg(0.0));

    assert_relative_eq!(camera.forward(), Vector3::new(0.0, 0.0, -1.0), epsilon = 1e-6);
}

#[test]
fn should_start_from_config() {
    let camera = Camera::from_config(&CameraConfig::default());

    assert_eq!(camera.position, [0.0, 7.0, 14.0].into());
    assert!(camera.forward().y < 0.0);
}

#[test]
fn should_move_forward_while_key_is_held() {
    let mut camera = Camera::new((0.0, 0.0, 0.0), Deg(-90.0), Deg(0.0));
    let mut projection = Projection::new(800, 600, Deg(45.0), 0.1, 100.0);
    let mut controller = CameraController::new(2.0, 0.4);

    assert!(controller.handle_key(KeyCode::KeyW, ElementState::Pressed));
    controller.update(&mut camera, &mut projection, Duration::from_secs(1));
    assert_relative_eq!(camera.position.z, -2.0, epsilon = 1e-5);

    controller.handle_key(KeyCode::KeyW, ElementState::Released);
    controller.update(&mut camera, &mut projection, Duration::from_secs(1));
    assert_relative_eq!(camera.position.z, -2.0, epsilon = 1e-5);
}

#[test]
fn should_switch_projection_on_key_press() {
    let mut camera = Camera::new((0.0, 0.0, 0.0), Deg(-90.0), Deg(0.0));
    let mut projection = Projection::new(800, 600, Deg(45.0), 0.1, 100.0);
    let mut controller = CameraController::new(2.0, 0.4);
    let perspective = projection.calc_matrix();

    controller.handle_key(KeyCode::KeyO, ElementState::Pressed);
    controller.update(&mut camera, &mut projection, Duration::from_millis(16));
    assert_eq!(projection.kind, ProjectionKind::Orthographic);
    assert_ne!(projection.calc_matrix(), perspective);

    controller.handle_key(KeyCode::KeyP, ElementState::Pressed);
    controller.update(&mut camera, &mut projection, Duration::from_millis(16));
    assert_eq!(projection.kind, ProjectionKind::Perspective);
    assert_eq!(projection.calc_matrix(), perspective);
}

#[test]
fn should_ignore_unbound_keys() {
    let mut controller = CameraController::new(2.0, 0.4);

    assert!(!controller.handle_key(KeyCode::KeyZ, ElementState::Pressed));
}

#[test]
fn should_keep_aspect_on_zero_sized_resize() {
    let mut projection = Projection::new(800, 600, Deg(45.0), 0.1, 100.0);
    let before = projection.calc_matrix();

    projection.resize(0, 0);

    assert_eq!(projection.calc_matrix(), before);
}
