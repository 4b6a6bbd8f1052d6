//! Outlined and filled shapes built from pixels, spans and lines.
//!
//! Shapes that would reach off the panel are not clipped: the whole call is dropped and the
//! frame buffer is left as it was. Frames and plain spans are the exception and clip at the
//! panel edge.

use bitflags::bitflags;

use crate::command::consts::*;
use crate::framebuffer::FrameBuffer;

mod circle;
mod ellipse;
mod polygon;
mod rect;

bitflags! {
    /// Which quarters of a circle or ellipse to draw.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Quadrants: u8 {
        const UPPER_RIGHT = 1 << 0;
        const UPPER_LEFT = 1 << 1;
        const LOWER_LEFT = 1 << 2;
        const LOWER_RIGHT = 1 << 3;
        const ALL = Self::UPPER_RIGHT.bits()
            | Self::UPPER_LEFT.bits()
            | Self::LOWER_LEFT.bits()
            | Self::LOWER_RIGHT.bits();
    }
}

impl Quadrants {
    fn has_upper(self) -> bool {
        self.intersects(Quadrants::UPPER_LEFT | Quadrants::UPPER_RIGHT)
    }

    fn has_lower(self) -> bool {
        self.intersects(Quadrants::LOWER_LEFT | Quadrants::LOWER_RIGHT)
    }

    fn has_left(self) -> bool {
        self.intersects(Quadrants::UPPER_LEFT | Quadrants::LOWER_LEFT)
    }

    fn has_right(self) -> bool {
        self.intersects(Quadrants::UPPER_RIGHT | Quadrants::LOWER_RIGHT)
    }
}

/// Whether the requested quadrants of the `rx`x`ry` radius shape centered on `(x0, y0)` lie on
/// the panel.
fn fits(x0: u8, y0: u8, rx: u8, ry: u8, quadrants: Quadrants) -> bool {
    let (x0, y0, rx, ry) = (x0 as u16, y0 as u16, rx as u16, ry as u16);
    x0 <= COLUMN_MAX as u16
        && y0 <= ROW_MAX as u16
        && (!quadrants.has_upper() || y0 >= ry)
        && (!quadrants.has_lower() || y0 + ry <= ROW_MAX as u16)
        && (!quadrants.has_left() || x0 >= rx)
        && (!quadrants.has_right() || x0 + rx <= COLUMN_MAX as u16)
}

impl FrameBuffer {
    /// Light a pixel given in signed coordinates, as produced by the curve tracers.
    fn plot(&mut self, x: i16, y: i16) {
        if (0..NUM_COLUMNS as i16).contains(&x) && (0..NUM_ROWS as i16).contains(&y) {
            self.set_pixel(x as u8, y as u8, true);
        }
    }

    /// `draw_vline` for signed coordinates as produced by the curve tracers.
    fn span(&mut self, x: i16, y: i16, h: i16) {
        if (0..NUM_COLUMNS as i16).contains(&x) && (0..NUM_ROWS as i16).contains(&y) && h > 0 {
            self.draw_vline(x as u8, y as u8, h.min(NUM_ROWS as i16) as u8);
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Every lit pixel in row-major order.
    pub(crate) fn lit(fb: &FrameBuffer) -> Vec<(u8, u8)> {
        let mut pixels = Vec::new();
        for y in 0..NUM_ROWS {
            for x in 0..NUM_COLUMNS {
                if fb.pixel(x, y) {
                    pixels.push((x, y));
                }
            }
        }
        pixels
    }

    #[test]
    fn quadrant_bounds() {
        assert!(fits(10, 10, 10, 10, Quadrants::ALL));
        assert!(!fits(10, 10, 11, 10, Quadrants::ALL));
        assert!(fits(10, 10, 11, 10, Quadrants::UPPER_RIGHT | Quadrants::LOWER_RIGHT));
        assert!(fits(127, 63, 20, 20, Quadrants::UPPER_LEFT));
        assert!(!fits(127, 63, 1, 0, Quadrants::UPPER_RIGHT));
        assert!(!fits(0, 64, 0, 0, Quadrants::ALL));
    }
}
