/// Geometry primitives for wireframe rendering
use nalgebra::{Point3, Vector3};

use crate::transform::RotationState;

/// A triangular face referencing three vertices of the owning mesh by index.
///
/// Indices are not validated. An index past the end of the vertex list
/// panics when the vertex is looked up during rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Face {
    pub a: usize,
    pub b: usize,
    pub c: usize,
}

impl Face {
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        Self { a, b, c }
    }
}

/// A mesh with fixed-size vertex and face lists and a mutable world placement
#[derive(Debug, Clone)]
pub struct Mesh {
    name: String,
    /// Vertex positions. The length is fixed at construction; values are
    /// populated by the caller afterwards.
    pub vertices: Vec<Point3<f32>>,
    /// Triangles as index triples into `vertices`. The length is fixed at
    /// construction.
    pub faces: Vec<Face>,
    /// World-space position, mutated by the owning application loop.
    pub position: Vector3<f32>,
    /// World-space orientation, mutated by the owning application loop.
    pub rotation: RotationState,
}

impl Mesh {
    /// Create a mesh with `vertex_count` zeroed vertices and `face_count`
    /// zeroed faces, placed at the world origin.
    pub fn new(name: impl Into<String>, vertex_count: usize, face_count: usize) -> Self {
        Self {
            name: name.into(),
            vertices: vec![Point3::origin(); vertex_count],
            faces: vec![Face::default(); face_count],
            position: Vector3::zeros(),
            rotation: RotationState::zero(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Create a cube with corners at ±1 on each axis: 8 vertices, 12 faces.
    pub fn cube() -> Self {
        let mut mesh = Self::new("Cube", 8, 12);

        mesh.vertices[0] = Point3::new(-1.0, 1.0, 1.0);
        mesh.vertices[1] = Point3::new(1.0, 1.0, 1.0);
        mesh.vertices[2] = Point3::new(-1.0, -1.0, 1.0);
        mesh.vertices[3] = Point3::new(1.0, -1.0, 1.0);
        mesh.vertices[4] = Point3::new(-1.0, 1.0, -1.0);
        mesh.vertices[5] = Point3::new(1.0, 1.0, -1.0);
        mesh.vertices[6] = Point3::new(1.0, -1.0, -1.0);
        mesh.vertices[7] = Point3::new(-1.0, -1.0, -1.0);

        mesh.faces[0] = Face::new(0, 1, 2);
        mesh.faces[1] = Face::new(1, 2, 3);
        mesh.faces[2] = Face::new(1, 3, 6);
        mesh.faces[3] = Face::new(1, 5, 6);
        mesh.faces[4] = Face::new(0, 1, 4);
        mesh.faces[5] = Face::new(1, 4, 5);

        mesh.faces[6] = Face::new(2, 3, 7);
        mesh.faces[7] = Face::new(3, 6, 7);
        mesh.faces[8] = Face::new(0, 2, 7);
        mesh.faces[9] = Face::new(0, 4, 7);
        mesh.faces[10] = Face::new(4, 5, 6);
        mesh.faces[11] = Face::new(4, 6, 7);

        mesh
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_mesh_has_fixed_zeroed_storage() {
        let mesh = Mesh::new("Test", 4, 2);
        assert_eq!(mesh.name(), "Test");
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.faces.len(), 2);
        assert!(mesh.vertices.iter().all(|v| *v == Point3::origin()));
        assert!(mesh.faces.iter().all(|f| *f == Face::new(0, 0, 0)));
        assert_eq!(mesh.position, Vector3::zeros());
    }

    #[test]
    fn test_cube_topology() {
        let cube = Mesh::cube();
        assert_eq!(cube.vertices.len(), 8);
        assert_eq!(cube.faces.len(), 12);
        assert!(cube
            .faces
            .iter()
            .all(|f| f.a < 8 && f.b < 8 && f.c < 8));
        for vertex in &cube.vertices {
            assert_relative_eq!(vertex.coords.norm(), 3.0f32.sqrt(), epsilon = 1e-6);
        }
    }
}
