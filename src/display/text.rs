//! Text rendering into the current frame buffer at the session's text cursor.

use core::fmt;

use crate::display::Display;
use crate::font::Font;
use crate::framebuffer::Point;
use crate::interface::DisplayInterface;

impl<DI, const N: usize> Display<DI, N>
where
    DI: DisplayInterface,
{
    /// Use `font` for all following text.
    pub fn set_font(&mut self, font: &'static Font) {
        self.font = font;
    }

    pub fn font(&self) -> &'static Font {
        self.font
    }

    /// Move the text cursor to `(x, y)`, the upper left corner of the next character cell.
    pub fn set_cursor(&mut self, x: u8, y: u8) {
        self.cursor = Point::new(x, y);
    }

    pub fn cursor(&self) -> Point {
        self.cursor
    }

    /// Draw `c` at the text cursor and move the cursor past it.
    ///
    /// Each character cell is a blank column followed by the glyph, so the cursor advances by the
    /// glyph width plus one. Characters the font has no glyph for draw nothing and leave the
    /// cursor where it is. A cell that does not fit on the panel is not drawn, but the cursor
    /// still advances.
    pub fn draw_char(&mut self, c: char) {
        let glyph = match self.font.glyph(c) {
            Some(glyph) => glyph,
            None => {
                trace!("no glyph for {:?}", c);
                return;
            }
        };
        let Point { x, y } = self.cursor;
        let buffer = self.buffers.current_mut();
        buffer.clear(x, y, 1, glyph.height);
        if let Some(glyph_x) = x.checked_add(1) {
            buffer.draw_bitmap(glyph_x, y, glyph.width, glyph.height, glyph.data);
        }
        self.cursor.x = x.saturating_add(1).saturating_add(glyph.width);
    }

    /// Move the text cursor to `(x, y)` and draw `s` from there.
    pub fn draw_str(&mut self, x: u8, y: u8, s: &str) {
        self.set_cursor(x, y);
        for c in s.chars() {
            self.draw_char(c);
        }
    }
}

/// Formatted text with `write!` lands at the text cursor, as `draw_char` would draw it.
impl<DI, const N: usize> fmt::Write for Display<DI, N>
where
    DI: DisplayInterface,
{
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            self.draw_char(c);
        }
        Ok(())
    }
}
