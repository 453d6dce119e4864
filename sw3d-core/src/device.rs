/// Framebuffer device: BGRA pixel buffer, projection, and wireframe drawing
use nalgebra::{Matrix4, Point3, Vector2};
use thiserror::Error;

use crate::geometry::Mesh;
use crate::projection::Camera;
use crate::transform::Transform;

/// View-distance normalization applied to every vertex before the combined
/// transform.
pub const VIEW_DISTANCE_SCALE: f32 = 10.0;

/// Vertical field of view of the fixed perspective projection, in radians.
pub const FIELD_OF_VIEW: f32 = 0.90;

/// Near clip plane of the fixed perspective projection.
pub const NEAR_PLANE: f32 = 0.01;

/// Far clip plane of the fixed perspective projection.
pub const FAR_PLANE: f32 = 1.0;

/// Line segments shorter than this many pixels are not subdivided further.
pub const MIN_SEGMENT_LENGTH: f32 = 2.0;

/// Wireframe edges are drawn in opaque yellow.
pub const WIREFRAME_COLOR: Color = Color::new(1.0, 1.0, 0.0, 1.0);

/// Normalized RGBA color. Channels stay in [0.0, 1.0] until a pixel is
/// written, where they are truncated to bytes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// Destination surface for a completed frame.
///
/// Implementations hold exclusive access to their backing store for the
/// duration of `copy_frame` and mark the full region dirty before
/// returning. The pixel data arrives as raw BGRA bytes; no conversion is
/// performed on either side of the copy.
pub trait PresentTarget {
    /// Byte length of the target's backing store.
    fn byte_len(&self) -> usize;

    /// Copy one finished frame into the backing store.
    fn copy_frame(&mut self, pixels: &[u8]);
}

/// Errors surfaced by framebuffer construction and presentation.
///
/// The hot-path pixel operations never return errors; invalid coordinates
/// or face indices fail by panicking, aborting the frame in progress.
#[derive(Debug, Error)]
pub enum DeviceError {
    #[error("framebuffer dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("present target holds {actual} bytes, framebuffer holds {expected}")]
    SurfaceSizeMismatch { expected: usize, actual: usize },
}

/// Rendering device owning a width×height×4 BGRA back buffer.
///
/// Drives the whole pipeline per frame: `clear`, then `render` (project
/// every face of every mesh and draw its edges), then `present` into an
/// external surface. The buffer contents are the only state carried
/// between those calls.
pub struct FrameBuffer {
    width: usize,
    height: usize,
    buffer: Vec<u8>,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Result<Self, DeviceError> {
        if width == 0 || height == 0 {
            return Err(DeviceError::InvalidDimensions { width, height });
        }

        Ok(Self {
            width,
            height,
            buffer: vec![0; width * height * 4],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The back buffer: BGRA byte order, row-major, top row first.
    pub fn data(&self) -> &[u8] {
        &self.buffer
    }

    /// Fill every pixel of the buffer with the given color.
    pub fn clear(&mut self, r: u8, g: u8, b: u8, a: u8) {
        for pixel in self.buffer.chunks_exact_mut(4) {
            pixel[0] = b;
            pixel[1] = g;
            pixel[2] = r;
            pixel[3] = a;
        }
    }

    /// Write one pixel at (x, y).
    ///
    /// Coordinates must lie inside the buffer; the bounds check is the
    /// caller's obligation (`draw_point` performs it) and violating it
    /// panics. Channels are truncated, not rounded, to bytes.
    pub fn put_pixel(&mut self, x: usize, y: usize, color: Color) {
        let index = (x + y * self.width) * 4;

        self.buffer[index] = (color.b * 255.0) as u8;
        self.buffer[index + 1] = (color.g * 255.0) as u8;
        self.buffer[index + 2] = (color.r * 255.0) as u8;
        self.buffer[index + 3] = (color.a * 255.0) as u8;
    }

    /// Project a model-space point to screen space through the combined
    /// transform.
    ///
    /// The point is divided by `VIEW_DISTANCE_SCALE`, the 4x4 transform is
    /// applied to (x, y, z, 1), and the result is mapped so that the
    /// origin lands at the buffer center with screen Y growing downward.
    /// There is no perspective divide and no guard for points behind the
    /// camera; those may land anywhere, including far outside the buffer.
    pub fn project(&self, point: &Point3<f32>, transform: &Matrix4<f32>) -> Vector2<f32> {
        let scaled = *point / VIEW_DISTANCE_SCALE;
        let transformed = transform * scaled.to_homogeneous();

        let width = self.width as f32;
        let height = self.height as f32;
        let x = transformed.x * width + width / 2.0;
        let y = -transformed.y * height + height / 2.0;

        Vector2::new(x, y)
    }

    /// Draw a single wireframe point if it falls inside the buffer.
    /// Out-of-bounds points are silently dropped.
    pub fn draw_point(&mut self, point: Vector2<f32>) {
        if point.x >= 0.0
            && point.y >= 0.0
            && point.x < self.width as f32
            && point.y < self.height as f32
        {
            self.put_pixel(point.x as usize, point.y as usize, WIREFRAME_COLOR);
        }
    }

    /// Rasterize a line by recursive midpoint subdivision.
    ///
    /// Segments shorter than `MIN_SEGMENT_LENGTH` draw nothing, so the
    /// output is a sparse bisection of the line with visible gaps at
    /// shallow angles, not a dense pixel-perfect line. Endpoints are never
    /// drawn here; a polygon's corners are covered by its adjacent edges.
    pub fn draw_line(&mut self, point0: Vector2<f32>, point1: Vector2<f32>) {
        let distance = (point1 - point0).norm();
        if distance < MIN_SEGMENT_LENGTH {
            return;
        }

        let middle = point0 + (point1 - point0) / 2.0;
        self.draw_point(middle);

        // Fill in both halves recursively
        self.draw_line(point0, middle);
        self.draw_line(middle, point1);
    }

    /// Render every face of every mesh as a wireframe.
    ///
    /// Faces are drawn in array order; nothing is culled, sorted, or depth
    /// tested, so overlapping edges simply draw over each other.
    pub fn render(&mut self, camera: &Camera, meshes: &[Mesh]) {
        let view = camera.view_matrix();
        let aspect = self.width as f32 / self.height as f32;
        let projection = Matrix4::new_perspective(aspect, FIELD_OF_VIEW, NEAR_PLANE, FAR_PLANE);

        for mesh in meshes {
            let world = Transform::world_matrix(&mesh.rotation, &mesh.position);
            let transform = Transform::mvp_matrix(&world, &view, &projection);

            for face in &mesh.faces {
                let vertex_a = mesh.vertices[face.a];
                let vertex_b = mesh.vertices[face.b];
                let vertex_c = mesh.vertices[face.c];

                let pixel_a = self.project(&vertex_a, &transform);
                let pixel_b = self.project(&vertex_b, &transform);
                let pixel_c = self.project(&vertex_c, &transform);

                self.draw_line(pixel_a, pixel_b);
                self.draw_line(pixel_b, pixel_c);
                self.draw_line(pixel_c, pixel_a);
            }
        }
    }

    /// Copy the finished frame to a present target, byte for byte.
    ///
    /// A size mismatch between the framebuffer and the target is a fatal
    /// configuration error; it is reported here once rather than detected
    /// per pixel.
    pub fn present(&self, target: &mut dyn PresentTarget) -> Result<(), DeviceError> {
        let expected = self.buffer.len();
        let actual = target.byte_len();
        if actual != expected {
            return Err(DeviceError::SurfaceSizeMismatch { expected, actual });
        }

        target.copy_frame(&self.buffer);
        Ok(())
    }
}
