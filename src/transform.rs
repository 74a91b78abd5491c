//! Model matrix composition.
//!
//! One pure function builds the matrix mapping a primitive's local-space
//! geometry into world space. The multiplication order is part of the
//! contract and covered by tests; see [`compose`].

use cgmath::{Deg, Matrix4, Vector3};

/// Per-draw transform request: scale, rotation in degrees about X/Y/Z, and
/// world position. Consumed once per draw, never retained.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub scale: Vector3<f32>,
    pub rotation_degrees: Vector3<f32>,
    pub position: Vector3<f32>,
}

impl Transform {
    pub fn new(
        scale: Vector3<f32>,
        rotation_degrees: Vector3<f32>,
        position: Vector3<f32>,
    ) -> Self {
        Self {
            scale,
            rotation_degrees,
            position,
        }
    }

    /// The model matrix for this request; see [`compose`].
    pub fn to_matrix(&self) -> Matrix4<f32> {
        compose(self.scale, self.rotation_degrees, self.position)
    }
}

impl Default for Transform {
    /// Identity transform: unit scale, no rotation, origin position.
    fn default() -> Self {
        Self {
            scale: Vector3::new(1.0, 1.0, 1.0),
            rotation_degrees: Vector3::new(0.0, 0.0, 0.0),
            position: Vector3::new(0.0, 0.0, 0.0),
        }
    }
}

/// Build the model matrix as `Translation × Rz × Ry × Rx × Scale`, applied
/// to column vectors: scale first, then rotation about X, then Y, then Z,
/// and translation last.
///
/// Reordering changes the rendered result for any non-trivial combination of
/// rotation and position. Angles are given in degrees; the conversion to
/// radians happens here.
pub fn compose(
    scale: Vector3<f32>,
    rotation_degrees: Vector3<f32>,
    position: Vector3<f32>,
) -> Matrix4<f32> {
    Matrix4::from_translation(position)
        * Matrix4::from_angle_z(Deg(rotation_degrees.z))
        * Matrix4::from_angle_y(Deg(rotation_degrees.y))
        * Matrix4::from_angle_x(Deg(rotation_degrees.x))
        * Matrix4::from_nonuniform_scale(scale.x, scale.y, scale.z)
}
