//! Blitting 1 bit per pixel images into the frame buffer.
//!
//! Images come in two byte orientations:
//!
//! - **Vertical**: the layout of the controller RAM. Each byte is 8 vertically adjacent pixels
//!   with bit 0 at the top; a row of `w` bytes covers 8 pixel rows, and rows follow each other
//!   top to bottom. The last row of bytes only uses its low `h % 8` bits when `h` is not a
//!   multiple of 8.
//! - **Horizontal**: the layout of most image converters. Each byte is 8 horizontally adjacent
//!   pixels with bit 7 on the left; every pixel row takes `ceil(w / 8)` bytes.
//!
//! Blitting replaces the covered pixels, so unset image bits blank what was underneath.

use core::cmp::min;

use itertools::iproduct;

use crate::command::consts::*;
use crate::framebuffer::{FrameBuffer, Orientation};

/// Bytes needed by a `w`x`h` image in the vertical orientation.
pub fn vertical_len(w: u8, h: u8) -> usize {
    w as usize * ((h as usize + 7) / 8)
}

/// Bytes needed by a `w`x`h` image in the horizontal orientation.
pub fn horizontal_len(w: u8, h: u8) -> usize {
    h as usize * ((w as usize + 7) / 8)
}

fn accepts(x: u8, y: u8, w: u8, h: u8, len: usize, needed: usize) -> bool {
    let fits = x as u16 + w as u16 <= NUM_COLUMNS as u16
        && y as u16 + h as u16 <= NUM_ROWS as u16
        && w > 0
        && h > 0;
    if !fits || len < needed {
        trace!("bitmap rejected: {}x{} at ({}, {}), {} of {} bytes", w, h, x, y, len, needed);
    }
    fits && len >= needed
}

impl FrameBuffer {
    /// Draw the `w`x`h` vertical byte orientation image `data` with its upper left corner at
    /// `(x, y)`.
    ///
    /// Nothing is drawn if the image does not fit on the panel, is empty, or `data` is shorter
    /// than the image.
    pub fn draw_bitmap(&mut self, x: u8, y: u8, w: u8, h: u8, data: &[u8]) {
        if !accepts(x, y, w, h, data.len(), vertical_len(w, h)) {
            return;
        }
        for ((row, column), &byte) in iproduct!((0..h).step_by(8), 0..w).zip(data) {
            self.draw_run(
                x + column,
                y + row,
                byte,
                min(8, h - row),
                Orientation::Vertical,
            );
        }
    }

    /// Draw the `w`x`h` horizontal byte orientation image `data` with its upper left corner at
    /// `(x, y)`, under the same conditions as `draw_bitmap`.
    pub fn draw_bitmap_h(&mut self, x: u8, y: u8, w: u8, h: u8, data: &[u8]) {
        if !accepts(x, y, w, h, data.len(), horizontal_len(w, h)) {
            return;
        }
        for ((row, column), &byte) in iproduct!(0..h, (0..w).step_by(8)).zip(data) {
            self.draw_run(
                x + column,
                y + row,
                byte,
                min(8, w - column),
                Orientation::Horizontal,
            );
        }
    }
}
