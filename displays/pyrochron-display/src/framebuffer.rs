//! 1-bit framebuffer
//!
//! In-memory canvas for 144x168 monochrome panels, one bit per pixel,
//! row-major with the most significant bit leftmost. The drawable area can
//! be obstructed from the bottom at runtime (e.g. by a system banner).

use pyrochron_core::traits::DisplayBounds;
use pyrochron_core::{Point, Size};

use crate::canvas::{Canvas, DisplayError};
use crate::color::Color;

/// Panel width in pixels
pub const SCREEN_WIDTH: usize = 144;

/// Panel height in pixels
pub const SCREEN_HEIGHT: usize = 168;

/// Bytes per pixel row
const ROW_BYTES: usize = SCREEN_WIDTH / 8;

/// Monochrome framebuffer
#[derive(Clone)]
pub struct Framebuffer {
    rows: [[u8; ROW_BYTES]; SCREEN_HEIGHT],
    /// Rows hidden at the bottom of the panel
    obstructed_rows: i16,
    /// Whether the buffer changed since the last flush
    dirty: bool,
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Framebuffer {
    /// Create a cleared framebuffer
    pub const fn new() -> Self {
        Self {
            rows: [[0; ROW_BYTES]; SCREEN_HEIGHT],
            obstructed_rows: 0,
            dirty: true,
        }
    }

    /// Hide `rows` pixel rows at the bottom of the panel from new bursts
    pub fn set_obstruction(&mut self, rows: i16) {
        self.obstructed_rows = rows.clamp(0, SCREEN_HEIGHT as i16);
    }

    /// Set a single pixel, ignoring anything off the panel
    pub fn set_pixel(&mut self, p: Point, on: bool) {
        if !self.size().contains(p) {
            return;
        }
        let (x, y) = (p.x as usize, p.y as usize);
        let mask = 0x80 >> (x % 8);
        if on {
            self.rows[y][x / 8] |= mask;
        } else {
            self.rows[y][x / 8] &= !mask;
        }
        self.dirty = true;
    }

    /// Read a single pixel (off-panel pixels read as off)
    pub fn pixel(&self, p: Point) -> bool {
        if !self.size().contains(p) {
            return false;
        }
        let (x, y) = (p.x as usize, p.y as usize);
        self.rows[y][x / 8] & (0x80 >> (x % 8)) != 0
    }

    /// Number of lit pixels
    pub fn lit_count(&self) -> u32 {
        self.rows
            .iter()
            .flat_map(|row| row.iter())
            .map(|b| b.count_ones())
            .sum()
    }

    /// Raw rows for transfer to the panel
    pub fn rows(&self) -> &[[u8; ROW_BYTES]; SCREEN_HEIGHT] {
        &self.rows
    }

    /// Check if the buffer needs to be sent to the panel
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}

impl DisplayBounds for Framebuffer {
    fn bounds(&self) -> Size {
        Size::new(
            SCREEN_WIDTH as i16,
            SCREEN_HEIGHT as i16 - self.obstructed_rows,
        )
    }
}

impl Canvas for Framebuffer {
    fn size(&self) -> Size {
        Size::new(SCREEN_WIDTH as i16, SCREEN_HEIGHT as i16)
    }

    fn fill(&mut self, color: Color) -> Result<(), DisplayError> {
        let byte = if color.is_lit() { 0xFF } else { 0x00 };
        for row in self.rows.iter_mut() {
            row.fill(byte);
        }
        self.dirty = true;
        Ok(())
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color) -> Result<(), DisplayError> {
        // Bresenham, clipped per pixel
        let on = color.is_lit();
        let (mut x, mut y) = (from.x as i32, from.y as i32);
        let (x1, y1) = (to.x as i32, to.y as i32);
        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.set_pixel(Point::new(x as i16, y as i16), on);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        self.dirty = false;
        Ok(())
    }
}
