use super::{fits, Quadrants};
use crate::framebuffer::FrameBuffer;

/// Two-region midpoint ellipse tracer. Calls `section` with `(x, y)` offsets of the first
/// quadrant: first from `(rx, 0)` while the curve is steep, then from `(0, ry)` while it is flat.
fn trace_quadrant(rx: u8, ry: u8, mut section: impl FnMut(i16, i16)) {
    if rx == 0 && ry == 0 {
        section(0, 0);
        return;
    }
    let (rx_l, ry_l) = (rx as i32, ry as i32);
    let rxrx2 = rx_l * rx_l * 2;
    let ryry2 = ry_l * ry_l * 2;

    let mut x = rx as i16;
    let mut y: i16 = 0;
    let mut xchg = (1 - 2 * rx_l) * ry_l * ry_l;
    let mut ychg = rx_l * rx_l;
    let mut err: i32 = 0;
    let mut stopx = ryry2 * rx_l;
    let mut stopy: i32 = 0;
    while stopx >= stopy {
        section(x, y);
        y += 1;
        stopy += rxrx2;
        err += ychg;
        ychg += rxrx2;
        if 2 * err + xchg > 0 {
            x -= 1;
            stopx -= ryry2;
            err += xchg;
            xchg += ryry2;
        }
    }

    let mut x: i16 = 0;
    let mut y = ry as i16;
    let mut xchg = ry_l * ry_l;
    let mut ychg = (1 - 2 * ry_l) * rx_l * rx_l;
    let mut err: i32 = 0;
    let mut stopx: i32 = 0;
    let mut stopy = rxrx2 * ry_l;
    while stopx <= stopy {
        section(x, y);
        x += 1;
        stopx += ryry2;
        err += xchg;
        xchg += ryry2;
        if 2 * err + ychg > 0 {
            y -= 1;
            stopy -= rxrx2;
            err += ychg;
            ychg += rxrx2;
        }
    }
}

impl FrameBuffer {
    /// Outline the selected quadrants of the ellipse with radii `rx` and `ry` centered on
    /// `(x0, y0)`. Nothing is drawn if any selected quadrant would leave the panel.
    pub fn draw_ellipse(&mut self, x0: u8, y0: u8, rx: u8, ry: u8, quadrants: Quadrants) {
        if !fits(x0, y0, rx, ry, quadrants) {
            trace!("ellipse rejected: {}x{} at ({}, {})", rx, ry, x0, y0);
            return;
        }
        let (cx, cy) = (x0 as i16, y0 as i16);
        trace_quadrant(rx, ry, |x, y| {
            if quadrants.contains(Quadrants::UPPER_RIGHT) {
                self.plot(cx + x, cy - y);
            }
            if quadrants.contains(Quadrants::UPPER_LEFT) {
                self.plot(cx - x, cy - y);
            }
            if quadrants.contains(Quadrants::LOWER_RIGHT) {
                self.plot(cx + x, cy + y);
            }
            if quadrants.contains(Quadrants::LOWER_LEFT) {
                self.plot(cx - x, cy + y);
            }
        });
    }

    /// Fill the selected quadrants of the ellipse with radii `rx` and `ry` centered on
    /// `(x0, y0)`, using vertical spans that reach the center row.
    pub fn draw_filled_ellipse(&mut self, x0: u8, y0: u8, rx: u8, ry: u8, quadrants: Quadrants) {
        if !fits(x0, y0, rx, ry, quadrants) {
            trace!("filled ellipse rejected: {}x{} at ({}, {})", rx, ry, x0, y0);
            return;
        }
        let (cx, cy) = (x0 as i16, y0 as i16);
        trace_quadrant(rx, ry, |x, y| {
            if quadrants.contains(Quadrants::UPPER_RIGHT) {
                self.span(cx + x, cy - y, y + 1);
            }
            if quadrants.contains(Quadrants::UPPER_LEFT) {
                self.span(cx - x, cy - y, y + 1);
            }
            if quadrants.contains(Quadrants::LOWER_RIGHT) {
                self.span(cx + x, cy, y + 1);
            }
            if quadrants.contains(Quadrants::LOWER_LEFT) {
                self.span(cx - x, cy, y + 1);
            }
        });
    }
}
