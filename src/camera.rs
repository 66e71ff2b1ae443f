//! Fly camera, projection and keyboard/mouse controller.
//!
//! [`Camera`] holds the eye position and yaw/pitch angles, [`Projection`]
//! turns the window size into a perspective or orthographic matrix, and
//! [`CameraController`] accumulates input between frames and moves the camera
//! in [`CameraController::update`].

use std::f32::consts::FRAC_PI_2;

use cgmath::{InnerSpace, Matrix4, Point3, Rad, SquareMatrix, Vector3, perspective};
use instant::Duration;
use wgpu::util::DeviceExt;
use winit::{
    dpi::PhysicalPosition,
    event::{ElementState, KeyEvent, MouseScrollDelta, WindowEvent},
    keyboard::{KeyCode, PhysicalKey},
};

use crate::config::CameraConfig;

#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: Matrix4<f32> = Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
);

const SAFE_FRAC_PI_2: f32 = FRAC_PI_2 - 0.0001;

/// Half the visible height of the orthographic view, in world units.
const ORTHO_HALF_HEIGHT: f32 = 8.0;

#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub position: Point3<f32>,
    yaw: Rad<f32>,
    pitch: Rad<f32>,
}

impl Camera {
    pub fn new<V: Into<Point3<f32>>, Y: Into<Rad<f32>>, P: Into<Rad<f32>>>(
        position: V,
        yaw: Y,
        pitch: P,
    ) -> Self {
        Self {
            position: position.into(),
            yaw: yaw.into(),
            pitch: pitch.into(),
        }
    }

    pub fn from_config(config: &CameraConfig) -> Self {
        Self::new(
            config.position,
            cgmath::Deg(config.yaw_deg),
            cgmath::Deg(config.pitch_deg),
        )
    }

    /// Unit vector the camera looks along.
    pub fn forward(&self) -> Vector3<f32> {
        let (sin_pitch, cos_pitch) = self.pitch.0.sin_cos();
        let (sin_yaw, cos_yaw) = self.yaw.0.sin_cos();
        Vector3::new(cos_pitch * cos_yaw, sin_pitch, cos_pitch * sin_yaw).normalize()
    }

    pub fn calc_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_to_rh(self.position, self.forward(), Vector3::unit_y())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionKind {
    Perspective,
    Orthographic,
}

#[derive(Debug, Clone, Copy)]
pub struct Projection {
    pub kind: ProjectionKind,
    aspect: f32,
    fovy: Rad<f32>,
    znear: f32,
    zfar: f32,
}

impl Projection {
    pub fn new<F: Into<Rad<f32>>>(width: u32, height: u32, fovy: F, znear: f32, zfar: f32) -> Self {
        Self {
            kind: ProjectionKind::Perspective,
            aspect: width.max(1) as f32 / height.max(1) as f32,
            fovy: fovy.into(),
            znear,
            zfar,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    pub fn calc_matrix(&self) -> Matrix4<f32> {
        let proj = match self.kind {
            ProjectionKind::Perspective => perspective(self.fovy, self.aspect, self.znear, self.zfar),
            ProjectionKind::Orthographic => {
                let h = ORTHO_HALF_HEIGHT;
                let w = h * self.aspect;
                cgmath::ortho(-w, w, -h, h, self.znear, self.zfar)
            }
        };
        OPENGL_TO_WGPU_MATRIX * proj
    }
}

/// Accumulates input between frames and applies it in [`update`](Self::update).
#[derive(Debug)]
pub struct CameraController {
    amount_left: f32,
    amount_right: f32,
    amount_forward: f32,
    amount_backward: f32,
    amount_up: f32,
    amount_down: f32,
    rotate_horizontal: f32,
    rotate_vertical: f32,
    scroll: f32,
    speed: f32,
    sensitivity: f32,
    requested_projection: Option<ProjectionKind>,
}

impl CameraController {
    pub fn new(speed: f32, sensitivity: f32) -> Self {
        Self {
            amount_left: 0.0,
            amount_right: 0.0,
            amount_forward: 0.0,
            amount_backward: 0.0,
            amount_up: 0.0,
            amount_down: 0.0,
            rotate_horizontal: 0.0,
            rotate_vertical: 0.0,
            scroll: 0.0,
            speed,
            sensitivity,
            requested_projection: None,
        }
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Returns `true` if the key moved the camera or switched the projection.
    pub fn handle_key(&mut self, key: KeyCode, state: ElementState) -> bool {
        let amount = if state == ElementState::Pressed { 1.0 } else { 0.0 };
        match key {
            KeyCode::KeyW => self.amount_forward = amount,
            KeyCode::KeyS => self.amount_backward = amount,
            KeyCode::KeyA => self.amount_left = amount,
            KeyCode::KeyD => self.amount_right = amount,
            KeyCode::KeyE => self.amount_up = amount,
            KeyCode::KeyQ => self.amount_down = amount,
            KeyCode::KeyP if state == ElementState::Pressed => {
                self.requested_projection = Some(ProjectionKind::Perspective)
            }
            KeyCode::KeyO if state == ElementState::Pressed => {
                self.requested_projection = Some(ProjectionKind::Orthographic)
            }
            _ => return false,
        }
        true
    }

    pub fn handle_mouse(&mut self, dx: f64, dy: f64) {
        self.rotate_horizontal = dx as f32;
        self.rotate_vertical = dy as f32;
    }

    /// Scrolling up speeds the camera up.
    pub fn handle_scroll(&mut self, delta: &MouseScrollDelta) {
        self.scroll = match delta {
            MouseScrollDelta::LineDelta(_, scroll) => *scroll,
            MouseScrollDelta::PixelDelta(PhysicalPosition { y, .. }) => *y as f32 / 100.0,
        };
    }

    pub fn handle_window_events(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state,
                        ..
                    },
                ..
            } => {
                self.handle_key(*key, *state);
            }
            WindowEvent::MouseWheel { delta, .. } => self.handle_scroll(delta),
            _ => {}
        }
    }

    pub fn update(&mut self, camera: &mut Camera, projection: &mut Projection, dt: Duration) {
        let dt = dt.as_secs_f32();

        if let Some(kind) = self.requested_projection.take() {
            log::debug!("switching to {:?} projection", kind);
            projection.kind = kind;
        }

        self.speed = (self.speed * (1.0 + 0.1 * self.scroll)).clamp(0.5, 100.0);
        self.scroll = 0.0;

        let (yaw_sin, yaw_cos) = camera.yaw.0.sin_cos();
        let forward = Vector3::new(yaw_cos, 0.0, yaw_sin).normalize();
        let right = Vector3::new(-yaw_sin, 0.0, yaw_cos).normalize();
        camera.position += forward * (self.amount_forward - self.amount_backward) * self.speed * dt;
        camera.position += right * (self.amount_right - self.amount_left) * self.speed * dt;
        camera.position.y += (self.amount_up - self.amount_down) * self.speed * dt;

        camera.yaw += Rad(self.rotate_horizontal) * self.sensitivity * dt;
        camera.pitch += Rad(-self.rotate_vertical) * self.sensitivity * dt;
        self.rotate_horizontal = 0.0;
        self.rotate_vertical = 0.0;

        if camera.pitch < -Rad(SAFE_FRAC_PI_2) {
            camera.pitch = -Rad(SAFE_FRAC_PI_2);
        } else if camera.pitch > Rad(SAFE_FRAC_PI_2) {
            camera.pitch = Rad(SAFE_FRAC_PI_2);
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_position: [f32; 4],
    pub view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn new() -> Self {
        Self {
            view_position: [0.0; 4],
            view_proj: Matrix4::identity().into(),
        }
    }

    pub fn update_view_proj(&mut self, camera: &Camera, projection: &Projection) {
        self.view_position = camera.position.to_homogeneous().into();
        self.view_proj = (projection.calc_matrix() * camera.calc_matrix()).into();
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

/// Camera state together with its GPU buffer and bind group (`@group(0)`).
#[derive(Debug)]
pub struct CameraResources {
    pub camera: Camera,
    pub controller: CameraController,
    pub uniform: CameraUniform,
    pub buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
    pub bind_group_layout: wgpu::BindGroupLayout,
}

impl CameraResources {
    pub fn new(device: &wgpu::Device, config: &CameraConfig, projection: &Projection) -> Self {
        let camera = Camera::from_config(config);
        let controller = CameraController::new(config.speed, config.sensitivity);

        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&camera, projection);

        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Camera Buffer"),
            contents: bytemuck::cast_slice(&[uniform]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
            label: Some("camera_bind_group_layout"),
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
            label: Some("camera_bind_group"),
        });

        Self {
            camera,
            controller,
            uniform,
            buffer,
            bind_group,
            bind_group_layout,
        }
    }

    /// Applies pending input and uploads the new view-projection matrix.
    pub fn update(&mut self, queue: &wgpu::Queue, projection: &mut Projection, dt: Duration) {
        self.controller.update(&mut self.camera, projection, dt);
        self.uniform.update_view_proj(&self.camera, projection);
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&[self.uniform]));
    }
}
