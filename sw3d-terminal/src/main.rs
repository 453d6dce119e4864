/// SW3D Terminal Demo - Rotating Cube
///
/// Renders a spinning wireframe cube into the terminal.
/// Controls:
///   - WASD / Arrow Keys: Rotate the cube
///   - E/R: Roll rotation
///   - Q/ESC: Quit

use nalgebra::Point3;
use sw3d_core::{Camera, Mesh};
use sw3d_terminal::{AppError, TerminalApp};

fn main() -> Result<(), AppError> {
    env_logger::init();

    let cube = Mesh::cube();
    let camera = Camera::new(Point3::new(0.0, 0.0, 10.0), Point3::origin());
    log::info!("starting wireframe renderer with mesh '{}'", cube.name());

    let mut app = TerminalApp::new(vec![cube], camera)?;
    app.run()?;

    log::info!("renderer shut down");
    Ok(())
}
