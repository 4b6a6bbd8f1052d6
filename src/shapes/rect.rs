use core::cmp::min;

use super::Quadrants;
use crate::command::consts::*;
use crate::framebuffer::FrameBuffer;

/// Whether the `w`x`h` rectangle at `(x, y)` lies on the panel.
fn on_panel(x: u8, y: u8, w: u8, h: u8) -> bool {
    x as u16 + w as u16 <= NUM_COLUMNS as u16 && y as u16 + h as u16 <= NUM_ROWS as u16
}

/// Whether corners of radius `r` leave room for at least one straight pixel on each side.
fn corners_fit(w: u8, h: u8, r: u8) -> bool {
    2 * r as u16 + 2 <= min(w, h) as u16
}

/// Centers of the four corner arcs of a rounded rectangle: left, upper, right, lower.
fn corner_centers(x: u8, y: u8, w: u8, h: u8, r: u8) -> (u8, u8, u8, u8) {
    (x + r, y + r, x + w - r - 1, y + h - r - 1)
}

impl FrameBuffer {
    /// Outline the `w`x`h` rectangle with its upper left corner at `(x, y)`. A rectangle that
    /// hangs off the right or bottom edge is clipped there.
    pub fn draw_frame(&mut self, x: u8, y: u8, w: u8, h: u8) {
        if x >= NUM_COLUMNS || y >= NUM_ROWS || w == 0 || h == 0 {
            return;
        }
        let w = min(w, NUM_COLUMNS - x);
        let h = min(h, NUM_ROWS - y);
        self.draw_hline(x, y, w);
        self.draw_vline(x, y, h);
        self.draw_vline(x + w - 1, y, h);
        self.draw_hline(x, y + h - 1, w);
    }

    /// Outline the `w`x`h` rectangle at `(x, y)` with corners rounded to radius `r`.
    ///
    /// Nothing is drawn unless the rectangle is on the panel and `2 * r + 2` fits in both its
    /// width and height.
    pub fn draw_rframe(&mut self, x: u8, y: u8, w: u8, h: u8, r: u8) {
        if !on_panel(x, y, w, h) || !corners_fit(w, h, r) {
            trace!("rframe rejected: {}x{} r={} at ({}, {})", w, h, r, x, y);
            return;
        }
        let (xl, yu, xr, yl) = corner_centers(x, y, w, h, r);
        self.draw_circle(xl, yu, r, Quadrants::UPPER_LEFT);
        self.draw_circle(xr, yu, r, Quadrants::UPPER_RIGHT);
        self.draw_circle(xl, yl, r, Quadrants::LOWER_LEFT);
        self.draw_circle(xr, yl, r, Quadrants::LOWER_RIGHT);

        let ww = w - (2 * r + 2);
        let hh = h - (2 * r + 2);
        self.draw_hline(xl + 1, y, ww);
        self.draw_hline(xl + 1, y + h - 1, ww);
        self.draw_vline(x, yu + 1, hh);
        self.draw_vline(x + w - 1, yu + 1, hh);
    }

    /// Fill the `w`x`h` rectangle at `(x, y)`. Nothing is drawn if it does not lie on the panel.
    pub fn draw_box(&mut self, x: u8, y: u8, w: u8, h: u8) {
        if !on_panel(x, y, w, h) || w == 0 {
            trace!("box rejected: {}x{} at ({}, {})", w, h, x, y);
            return;
        }
        for column in x..x + w {
            self.draw_vline(column, y, h);
        }
    }

    /// Fill the `w`x`h` rectangle at `(x, y)` with corners rounded to radius `r`, under the same
    /// conditions as `draw_rframe`.
    pub fn draw_rbox(&mut self, x: u8, y: u8, w: u8, h: u8, r: u8) {
        if !on_panel(x, y, w, h) || !corners_fit(w, h, r) {
            trace!("rbox rejected: {}x{} r={} at ({}, {})", w, h, r, x, y);
            return;
        }
        let (xl, yu, xr, yl) = corner_centers(x, y, w, h, r);
        self.draw_disc(xl, yu, r, Quadrants::UPPER_LEFT);
        self.draw_disc(xr, yu, r, Quadrants::UPPER_RIGHT);
        self.draw_disc(xl, yl, r, Quadrants::LOWER_LEFT);
        self.draw_disc(xr, yl, r, Quadrants::LOWER_RIGHT);

        let ww = w - (2 * r + 2);
        let hh = h - (2 * r + 2);
        self.draw_box(xl + 1, y, ww, r + 1);
        self.draw_box(xl + 1, yl, ww, r + 1);
        self.draw_box(x, yu + 1, w, hh);
    }
}
