/// Terminal front end driving the software wireframe renderer
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal,
};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};
use sw3d_core::{Camera, DeviceError, FrameBuffer, Mesh};
use thiserror::Error;

pub mod renderer;

pub use renderer::TerminalSurface;

/// Background color every frame starts from (opaque black).
const CLEAR_COLOR: (u8, u8, u8, u8) = (0, 0, 0, 255);

/// Continuous spin applied every frame, in radians (pitch, yaw).
const SPIN_STEP: f32 = 0.01;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Device(#[from] DeviceError),
}

/// Main application struct for terminal wireframe rendering
pub struct TerminalApp {
    meshes: Vec<Mesh>,
    camera: Camera,
    device: FrameBuffer,
    surface: TerminalSurface,
    running: bool,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(meshes: Vec<Mesh>, camera: Camera) -> Result<Self, AppError> {
        let (width, height) = terminal::size()?;
        let width = width as usize;
        let height = height as usize;

        Ok(Self {
            meshes,
            camera,
            device: FrameBuffer::new(width, height)?,
            surface: TerminalSurface::new(width, height),
            running: true,
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    pub fn run(&mut self) -> Result<(), AppError> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> Result<(), AppError> {
        let target_frame_time = Duration::from_millis(1000 / 30); // 30 FPS target

        while self.running {
            let frame_start = Instant::now();

            // Handle input
            if event::poll(Duration::from_millis(0))? {
                self.handle_input()?;
            }

            // Tick: clear, animate, render, present
            self.update();
            self.render_frame()?;

            // Frame timing
            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }

            // Update FPS counter
            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                log::debug!("{:.1} frames/s, {} mesh(es)", self.fps, self.meshes.len());
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        Ok(())
    }

    fn handle_input(&mut self) -> Result<(), AppError> {
        if let Event::Key(KeyEvent { code, .. }) = event::read()? {
            match code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.running = false;
                }
                KeyCode::Char('w') | KeyCode::Up => {
                    self.rotate_meshes(0.1, 0.0, 0.0);
                }
                KeyCode::Char('s') | KeyCode::Down => {
                    self.rotate_meshes(-0.1, 0.0, 0.0);
                }
                KeyCode::Char('a') | KeyCode::Left => {
                    self.rotate_meshes(0.0, -0.1, 0.0);
                }
                KeyCode::Char('d') | KeyCode::Right => {
                    self.rotate_meshes(0.0, 0.1, 0.0);
                }
                KeyCode::Char('e') => {
                    self.rotate_meshes(0.0, 0.0, 0.1);
                }
                KeyCode::Char('r') => {
                    self.rotate_meshes(0.0, 0.0, -0.1);
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn rotate_meshes(&mut self, dx: f32, dy: f32, dz: f32) {
        for mesh in &mut self.meshes {
            mesh.rotation.rotate(dx, dy, dz);
        }
    }

    fn update(&mut self) {
        // Continuous slow rotation for demo effect
        self.rotate_meshes(SPIN_STEP, SPIN_STEP, 0.0);
    }

    fn render_frame(&mut self) -> Result<(), AppError> {
        let (r, g, b, a) = CLEAR_COLOR;
        self.device.clear(r, g, b, a);
        self.device.render(&self.camera, &self.meshes);
        self.device.present(&mut self.surface)?;

        // Output to terminal
        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;

        self.surface.draw(&mut stdout)?;

        // Draw UI overlay
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "SW3D Wireframe | FPS: {:.1} | Controls: WASD/Arrows=Rotate E/R=Roll Q=Quit",
                self.fps
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}
