/// SW3D Core Library - Software wireframe rasterization pipeline
///
/// This library provides the platform-independent core of the renderer:
/// mesh geometry, transformation matrices, camera/view construction, and
/// the framebuffer device that projects meshes and draws wireframe lines
/// into a raw BGRA pixel buffer.

pub mod device;
pub mod geometry;
pub mod projection;
pub mod transform;

// Re-export commonly used types
pub use device::{Color, DeviceError, FrameBuffer, PresentTarget};
pub use geometry::{Face, Mesh};
pub use projection::Camera;
pub use transform::{RotationState, Transform};
