/// Camera and view-matrix construction
use nalgebra::{Matrix4, Point3, Vector3};

/// Camera defined by an eye position and a look-at target.
///
/// The up axis is not part of the camera state; view matrices always use
/// the world +Y axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Point3<f32>,
    pub target: Point3<f32>,
}

impl Camera {
    pub fn new(position: Point3<f32>, target: Point3<f32>) -> Self {
        Self { position, target }
    }

    /// Create the view matrix (camera transformation).
    ///
    /// A camera whose position equals its target has no viewing direction;
    /// the resulting matrix is non-finite and projects every point to
    /// garbage coordinates. Callers that cannot rule this out must check
    /// the two points themselves.
    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(&self.position, &self.target, &Vector3::y())
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Point3::new(0.0, 0.0, 10.0), Point3::origin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_view_matrix_moves_eye_to_origin() {
        let camera = Camera::new(Point3::new(0.0, 0.0, 10.0), Point3::origin());
        let view = camera.view_matrix();
        let eye = view.transform_point(&camera.position);
        assert_relative_eq!(eye, Point3::origin(), epsilon = 1e-5);
    }

    #[test]
    fn test_view_matrix_looks_down_negative_z() {
        let camera = Camera::new(Point3::new(0.0, 0.0, 10.0), Point3::origin());
        let view = camera.view_matrix();
        let target = view.transform_point(&camera.target);
        assert_relative_eq!(target, Point3::new(0.0, 0.0, -10.0), epsilon = 1e-5);
    }

    #[test]
    fn test_degenerate_camera_view_is_not_finite() {
        let position = Point3::new(1.0, 2.0, 3.0);
        let camera = Camera::new(position, position);
        let view = camera.view_matrix();
        assert!(view.iter().any(|value| !value.is_finite()));
    }
}
