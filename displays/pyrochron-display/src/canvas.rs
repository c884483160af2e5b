//! Canvas trait
//!
//! Defines the drawing interface the renderer needs from a display.

use pyrochron_core::{Point, Size};

use crate::color::Color;
use crate::font::{glyph, GLYPH_ADVANCE, GLYPH_WIDTH};

/// Canvas errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
}

/// Pixel canvas
///
/// Provides a hardware-agnostic interface for drawing firework frames.
/// Implementations clip anything outside their area; particles routinely
/// fly off screen and must not cause errors.
pub trait Canvas {
    /// Full canvas dimensions in pixels
    fn size(&self) -> Size;

    /// Fill the whole canvas with one color
    fn fill(&mut self, color: Color) -> Result<(), DisplayError>;

    /// Draw a one pixel wide line between two points (inclusive)
    fn draw_line(&mut self, from: Point, to: Point, color: Color) -> Result<(), DisplayError>;

    /// Draw `text` with its top-left corner at `origin`, each font pixel
    /// `scale` screen pixels wide
    ///
    /// The default rasterizes the built-in digit font with horizontal
    /// lines; panels with native text support may override it.
    fn draw_text(
        &mut self,
        origin: Point,
        text: &str,
        scale: i16,
        color: Color,
    ) -> Result<(), DisplayError> {
        let mut x = origin.x;
        for ch in text.chars() {
            for (row, &bits) in glyph(ch).iter().enumerate() {
                for col in 0..GLYPH_WIDTH {
                    if bits & (0x10u8 >> col) == 0 {
                        continue;
                    }
                    let left = x.saturating_add(col * scale);
                    let top = origin.y.saturating_add(row as i16 * scale);
                    for dy in 0..scale {
                        let y = top.saturating_add(dy);
                        self.draw_line(
                            Point::new(left, y),
                            Point::new(left.saturating_add(scale - 1), y),
                            color,
                        )?;
                    }
                }
            }
            x = x.saturating_add(GLYPH_ADVANCE * scale);
        }
        Ok(())
    }

    /// Flush buffered content to the display
    ///
    /// For displays with internal buffers, this sends the buffer to the hardware.
    fn flush(&mut self) -> Result<(), DisplayError>;

    /// Whether the panel can show more than black and white
    fn supports_color(&self) -> bool {
        false
    }
}
