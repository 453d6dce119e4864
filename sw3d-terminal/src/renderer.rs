/// Terminal presentation surface for BGRA frames
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::Write;
use sw3d_core::PresentTarget;

/// Character luminosity ramp (darkest to lightest)
const LUMINOSITY_RAMP: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Presentation surface mapping one BGRA pixel onto one terminal cell.
///
/// Holds its own snapshot of the most recent frame; the framebuffer never
/// hands out a reference into its back buffer.
pub struct TerminalSurface {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
    dirty: bool,
}

impl TerminalSurface {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width * height * 4],
            dirty: false,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Flush the most recent frame to the terminal as colored cells.
    pub fn draw<W: Write>(&mut self, writer: &mut W) -> std::io::Result<()> {
        for y in 0..self.height {
            for x in 0..self.width {
                let index = (x + y * self.width) * 4;
                let blue = self.pixels[index];
                let green = self.pixels[index + 1];
                let red = self.pixels[index + 2];

                let character = ramp_char(red, green, blue);
                if character == ' ' {
                    writer.queue(Print(' '))?;
                } else {
                    writer.queue(SetForegroundColor(Color::Rgb {
                        r: red,
                        g: green,
                        b: blue,
                    }))?;
                    writer.queue(Print(character))?;
                }
            }
            if y + 1 < self.height {
                writer.queue(Print('\n'))?;
            }
        }
        writer.queue(ResetColor)?;
        self.dirty = false;
        Ok(())
    }
}

impl PresentTarget for TerminalSurface {
    fn byte_len(&self) -> usize {
        self.pixels.len()
    }

    fn copy_frame(&mut self, pixels: &[u8]) {
        self.pixels.copy_from_slice(pixels);
        self.dirty = true;
    }
}

/// Map a pixel to a ramp character by luminance.
fn ramp_char(red: u8, green: u8, blue: u8) -> char {
    let luminance = 0.2126 * red as f32 + 0.7152 * green as f32 + 0.0722 * blue as f32;
    let index = (luminance / 255.0 * (LUMINOSITY_RAMP.len() - 1) as f32) as usize;
    LUMINOSITY_RAMP[index.min(LUMINOSITY_RAMP.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ramp_endpoints() {
        assert_eq!(ramp_char(0, 0, 0), ' ');
        assert_eq!(ramp_char(255, 255, 255), '@');
    }

    #[test]
    fn test_copy_frame_snapshots_pixels() {
        let mut surface = TerminalSurface::new(4, 2);
        let frame = vec![7u8; 4 * 2 * 4];

        surface.copy_frame(&frame);
        assert!(surface.dirty);
        assert_eq!(surface.pixels, frame);
        assert_eq!(surface.byte_len(), frame.len());
    }

    #[test]
    fn test_draw_clears_dirty_flag() {
        let mut surface = TerminalSurface::new(2, 2);
        surface.copy_frame(&vec![0u8; 2 * 2 * 4]);

        let mut sink = Vec::new();
        surface.draw(&mut sink).unwrap();
        assert!(!surface.dirty);
        assert!(!sink.is_empty());
    }
}
