/// 3D transformation matrices and rotation state
use nalgebra::{Matrix4, Vector3};

/// Rotation state around three axes (in radians)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationState {
    /// Pitch, around the X axis.
    pub x: f32,
    /// Yaw, around the Y axis.
    pub y: f32,
    /// Roll, around the Z axis.
    pub z: f32,
}

impl RotationState {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Rotate by delta amounts (in radians)
    pub fn rotate(&mut self, dx: f32, dy: f32, dz: f32) {
        self.x += dx;
        self.y += dy;
        self.z += dz;
    }
}

impl Default for RotationState {
    fn default() -> Self {
        Self::zero()
    }
}

/// Transform builder for 3D transformations
pub struct Transform;

impl Transform {
    /// Create a rotation matrix from a rotation state, yaw-pitch-roll order.
    pub fn yaw_pitch_roll(rotation: &RotationState) -> Matrix4<f32> {
        let ry = Matrix4::new_rotation(Vector3::new(0.0, rotation.y, 0.0));
        let rx = Matrix4::new_rotation(Vector3::new(rotation.x, 0.0, 0.0));
        let rz = Matrix4::new_rotation(Vector3::new(0.0, 0.0, rotation.z));

        // Roll is applied first, then pitch, then yaw
        ry * rx * rz
    }

    /// Create a translation matrix
    pub fn translation_matrix(offset: &Vector3<f32>) -> Matrix4<f32> {
        Matrix4::new_translation(offset)
    }

    /// Create the world matrix for a mesh placement: rotate, then translate.
    /// The order matters; translating first would orbit the mesh around the
    /// origin instead of spinning it in place.
    pub fn world_matrix(rotation: &RotationState, position: &Vector3<f32>) -> Matrix4<f32> {
        Self::translation_matrix(position) * Self::yaw_pitch_roll(rotation)
    }

    /// Create a model-view-projection matrix
    pub fn mvp_matrix(
        world: &Matrix4<f32>,
        view: &Matrix4<f32>,
        projection: &Matrix4<f32>,
    ) -> Matrix4<f32> {
        projection * view * world
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Point3;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_rotation_state() {
        let mut state = RotationState::zero();
        assert_eq!(state.x, 0.0);
        assert_eq!(state.y, 0.0);
        assert_eq!(state.z, 0.0);

        state.rotate(0.1, 0.2, 0.3);
        assert!((state.x - 0.1).abs() < 1e-6);
        assert!((state.y - 0.2).abs() < 1e-6);
        assert!((state.z - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_identity_rotation() {
        let rotation = RotationState::zero();
        let matrix = Transform::yaw_pitch_roll(&rotation);
        assert!((matrix - Matrix4::identity()).norm() < 1e-6);
    }

    #[test]
    fn test_yaw_turns_z_toward_x() {
        let rotation = RotationState::new(0.0, FRAC_PI_2, 0.0);
        let matrix = Transform::yaw_pitch_roll(&rotation);
        let turned = matrix.transform_point(&Point3::new(0.0, 0.0, 1.0));
        assert_relative_eq!(turned, Point3::new(1.0, 0.0, 0.0), epsilon = 1e-6);
    }

    #[test]
    fn test_roll_applies_before_yaw() {
        // Roll +90° turns +X to +Y; the following +90° yaw leaves +Y alone.
        let rotation = RotationState::new(0.0, FRAC_PI_2, FRAC_PI_2);
        let matrix = Transform::yaw_pitch_roll(&rotation);
        let turned = matrix.transform_point(&Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(turned, Point3::new(0.0, 1.0, 0.0), epsilon = 1e-6);
    }

    #[test]
    fn test_world_matrix_rotates_before_translating() {
        let rotation = RotationState::new(0.0, FRAC_PI_2, 0.0);
        let position = Vector3::new(5.0, 0.0, 0.0);
        let world = Transform::world_matrix(&rotation, &position);
        let placed = world.transform_point(&Point3::new(0.0, 0.0, 1.0));
        assert_relative_eq!(placed, Point3::new(6.0, 0.0, 0.0), epsilon = 1e-6);
    }
}
