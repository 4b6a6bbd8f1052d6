use super::{fits, Quadrants};
use crate::framebuffer::FrameBuffer;

/// Midpoint circle tracer. Calls `section` with each `(x, y)` offset of the first octant, from
/// `(0, r)` until the offsets cross the diagonal.
fn trace_octant(r: u8, mut section: impl FnMut(i16, i16)) {
    let mut f: i16 = 1 - r as i16;
    let mut dd_f_x: i16 = 1;
    let mut dd_f_y: i16 = -2 * r as i16;
    let mut x: i16 = 0;
    let mut y: i16 = r as i16;

    section(x, y);
    while x < y {
        if f >= 0 {
            y -= 1;
            dd_f_y += 2;
            f += dd_f_y;
        }
        x += 1;
        dd_f_x += 2;
        f += dd_f_x;
        section(x, y);
    }
}

impl FrameBuffer {
    /// Outline the selected quadrants of the circle of radius `r` centered on `(x0, y0)`.
    ///
    /// Nothing is drawn if any selected quadrant would leave the panel.
    pub fn draw_circle(&mut self, x0: u8, y0: u8, r: u8, quadrants: Quadrants) {
        if !fits(x0, y0, r, r, quadrants) {
            trace!("circle rejected: r={} at ({}, {})", r, x0, y0);
            return;
        }
        let (cx, cy) = (x0 as i16, y0 as i16);
        trace_octant(r, |x, y| {
            if quadrants.contains(Quadrants::UPPER_RIGHT) {
                self.plot(cx + x, cy - y);
                self.plot(cx + y, cy - x);
            }
            if quadrants.contains(Quadrants::UPPER_LEFT) {
                self.plot(cx - x, cy - y);
                self.plot(cx - y, cy - x);
            }
            if quadrants.contains(Quadrants::LOWER_RIGHT) {
                self.plot(cx + x, cy + y);
                self.plot(cx + y, cy + x);
            }
            if quadrants.contains(Quadrants::LOWER_LEFT) {
                self.plot(cx - x, cy + y);
                self.plot(cx - y, cy + x);
            }
        });
    }

    /// Fill the selected quadrants of the disc of radius `r` centered on `(x0, y0)` with
    /// vertical spans reaching the center row.
    ///
    /// Nothing is drawn if any selected quadrant would leave the panel.
    pub fn draw_disc(&mut self, x0: u8, y0: u8, r: u8, quadrants: Quadrants) {
        if !fits(x0, y0, r, r, quadrants) {
            trace!("disc rejected: r={} at ({}, {})", r, x0, y0);
            return;
        }
        let (cx, cy) = (x0 as i16, y0 as i16);
        trace_octant(r, |x, y| {
            if quadrants.contains(Quadrants::UPPER_RIGHT) {
                self.span(cx + x, cy - y, y + 1);
                self.span(cx + y, cy - x, x + 1);
            }
            if quadrants.contains(Quadrants::UPPER_LEFT) {
                self.span(cx - x, cy - y, y + 1);
                self.span(cx - y, cy - x, x + 1);
            }
            if quadrants.contains(Quadrants::LOWER_RIGHT) {
                self.span(cx + x, cy, y + 1);
                self.span(cx + y, cy, x + 1);
            }
            if quadrants.contains(Quadrants::LOWER_LEFT) {
                self.span(cx - x, cy, y + 1);
                self.span(cx - y, cy, x + 1);
            }
        });
    }
}
