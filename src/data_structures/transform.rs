//! Model matrix composition.
//!
//! Every object in the scene is placed by scale, three rotations given in
//! degrees and a position. The rotations are separate elemental rotations
//! about X, then Y, then Z, which do not commute, so the order is part of the
//! contract:
//!
//! ```text
//! M = Translate * RotateX * RotateY * RotateZ * Scale
//! ```

use cgmath::{Deg, Matrix4, Vector3};

/// Placement of one object: scale, rotation in degrees per axis, position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub scale: Vector3<f32>,
    /// Degrees about X, Y and Z, applied in that order.
    pub rotation: Vector3<f32>,
    pub position: Vector3<f32>,
}

impl Transform {
    /// Identity transformation (no move, rotate, or scale).
    pub fn new() -> Self {
        Self {
            scale: Vector3::new(1.0, 1.0, 1.0),
            rotation: Vector3::new(0.0, 0.0, 0.0),
            position: Vector3::new(0.0, 0.0, 0.0),
        }
    }

    pub fn to_matrix(&self) -> Matrix4<f32> {
        compose_model_matrix(
            self.scale,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
            self.position,
        )
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds `T * Rx * Ry * Rz * S` from the given parameters.
pub fn compose_model_matrix(
    scale: Vector3<f32>,
    x_rotation_degrees: f32,
    y_rotation_degrees: f32,
    z_rotation_degrees: f32,
    position: Vector3<f32>,
) -> Matrix4<f32> {
    let scale = Matrix4::from_nonuniform_scale(scale.x, scale.y, scale.z);
    // cgmath converts Deg into Rad internally
    let rotation_x = Matrix4::from_angle_x(Deg(x_rotation_degrees));
    let rotation_y = Matrix4::from_angle_y(Deg(y_rotation_degrees));
    let rotation_z = Matrix4::from_angle_z(Deg(z_rotation_degrees));
    let translation = Matrix4::from_translation(position);

    translation * rotation_x * rotation_y * rotation_z * scale
}
