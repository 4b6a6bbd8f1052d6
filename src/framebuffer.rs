//! In-memory image of the panel, organized the way the controller RAM is: 8 pages of 128 columns,
//! where each byte is a vertical run of 8 pixels with bit 0 at the top.
//!
//! All drawing happens here without any bus traffic. The `Display` pushes (part of) a buffer to
//! the controller on an explicit flush.

use core::cmp::min;

use crate::command::consts::*;

/// A pixel coordinate pair of `x` (column, 0-127) and `y` (row, 0-63), origin at the top left.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Point {
    pub x: u8,
    pub y: u8,
}

impl Point {
    pub const fn new(x: u8, y: u8) -> Self {
        Point { x, y }
    }
}

impl From<(u8, u8)> for Point {
    fn from((x, y): (u8, u8)) -> Self {
        Point { x, y }
    }
}

/// How the bits of a run pattern are laid out on the panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Bit 0 of the pattern is the topmost pixel, continuing down the column.
    Vertical,
    /// Bit 7 of the pattern is the leftmost pixel, continuing right along the row.
    Horizontal,
}

/// A 1 bit per pixel 128x64 image.
#[derive(Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    pages: [[u8; NUM_COLUMNS as usize]; NUM_PAGES as usize],
}

impl FrameBuffer {
    /// Construct a blank frame buffer.
    pub const fn new() -> Self {
        FrameBuffer {
            pages: [[0; NUM_COLUMNS as usize]; NUM_PAGES as usize],
        }
    }

    /// The byte holding rows `8*page..8*page+8` of `column`.
    ///
    /// Panics if `column` or `page` is outside the panel.
    pub fn byte(&self, column: u8, page: u8) -> u8 {
        self.pages[page as usize][column as usize]
    }

    /// All 128 column bytes of one page, in column order, as they are sent to the controller.
    ///
    /// Panics if `page` is outside the panel.
    pub fn page(&self, page: u8) -> &[u8; NUM_COLUMNS as usize] {
        &self.pages[page as usize]
    }

    /// Whether the pixel at `(x, y)` is lit. Pixels outside the panel read as unlit.
    pub fn pixel(&self, x: u8, y: u8) -> bool {
        x < NUM_COLUMNS && y < NUM_ROWS && self.pages[(y / 8) as usize][x as usize] & 1 << (y % 8) != 0
    }

    /// Light (`on`) or blank the pixel at `(x, y)`. Coordinates outside the panel are ignored.
    pub fn set_pixel(&mut self, x: u8, y: u8, on: bool) {
        if x >= NUM_COLUMNS || y >= NUM_ROWS {
            return;
        }
        let cell = &mut self.pages[(y / 8) as usize][x as usize];
        if on {
            *cell |= 1 << (y % 8);
        } else {
            *cell &= !(1 << (y % 8));
        }
    }

    /// Write up to 8 pixels starting at `(x, y)` from the low `count` bits of `pattern`.
    ///
    /// Every pixel covered by the run takes the value of its pattern bit, lit or blank; pixels
    /// outside the run are left alone. A vertical run that crosses a page boundary is split into
    /// two masked writes. `count` of 0 draws nothing, and anything above 8 draws 8.
    pub fn draw_run(&mut self, x: u8, y: u8, pattern: u8, count: u8, orientation: Orientation) {
        let count = min(count, 8);
        if count == 0 {
            return;
        }
        match orientation {
            Orientation::Vertical => {
                if x >= NUM_COLUMNS || y >= NUM_ROWS {
                    return;
                }
                let page = y / 8;
                let shift = y % 8;
                let pattern = pattern & low_bits(count);

                let upper = min(count, 8 - shift);
                self.write_masked(x, page, pattern << shift, low_bits(upper) << shift);

                let lower = count - upper;
                if lower > 0 && page < PAGE_MAX {
                    self.write_masked(x, page + 1, pattern >> upper, low_bits(lower));
                }
            }
            Orientation::Horizontal => {
                for i in 0..count {
                    if let Some(column) = x.checked_add(i) {
                        self.set_pixel(column, y, pattern & (0x80 >> i) != 0);
                    }
                }
            }
        }
    }

    /// Blank the `w`x`h` rectangle with its upper left corner at `(x, y)`.
    ///
    /// The rectangle is rejected, leaving the buffer untouched, if it does not fit on the panel.
    /// Clearing walks each column with blank vertical runs, exactly as drawing a blank bitmap
    /// would.
    pub fn clear(&mut self, x: u8, y: u8, w: u8, h: u8) {
        if x as u16 + w as u16 > NUM_COLUMNS as u16 || y as u16 + h as u16 > NUM_ROWS as u16 {
            trace!("clear rejected: {}x{} at ({}, {})", w, h, x, y);
            return;
        }
        for column in x..x + w {
            self.fill_column(column, y, y + h, false);
        }
    }

    /// Blank the whole buffer.
    pub fn clear_all(&mut self) {
        self.clear(0, 0, NUM_COLUMNS, NUM_ROWS);
    }

    /// Set rows `top..bottom` of `column` to `on` with page-aligned vertical runs. The caller
    /// keeps the span on the panel.
    pub(crate) fn fill_column(&mut self, column: u8, top: u8, bottom: u8, on: bool) {
        let pattern = if on { 0xFF } else { 0x00 };
        let mut row = top;
        while row < bottom {
            let run = min(8 - row % 8, bottom - row);
            self.draw_run(column, row, pattern, run, Orientation::Vertical);
            row += run;
        }
    }

    fn write_masked(&mut self, x: u8, page: u8, bits: u8, mask: u8) {
        let cell = &mut self.pages[page as usize][x as usize];
        *cell = (*cell & !mask) | (bits & mask);
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// A mask of the lowest `n` bits, for `n` in 0..=8.
fn low_bits(n: u8) -> u8 {
    (0xFFu16 >> (8 - n)) as u8
}

/// `N` frame buffers of which exactly one is current. Drawing goes to the current buffer, and it
/// is the one a `Display` flushes, so an application can prepare screens ahead of time and cycle
/// through them.
pub struct BufferSet<const N: usize> {
    buffers: [FrameBuffer; N],
    current: usize,
}

impl<const N: usize> BufferSet<N> {
    /// Construct `N` blank buffers with buffer 0 current. Panics if `N` is 0.
    pub fn new() -> Self {
        if N == 0 {
            panic!("A buffer set needs at least one frame buffer.");
        }
        BufferSet {
            buffers: core::array::from_fn(|_| FrameBuffer::new()),
            current: 0,
        }
    }

    pub fn current(&self) -> &FrameBuffer {
        &self.buffers[self.current]
    }

    pub fn current_mut(&mut self) -> &mut FrameBuffer {
        &mut self.buffers[self.current]
    }

    /// Index of the current buffer.
    pub fn index(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        N
    }

    pub fn get(&self, index: usize) -> Option<&FrameBuffer> {
        self.buffers.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut FrameBuffer> {
        self.buffers.get_mut(index)
    }

    /// Make the following buffer current, wrapping from the last to the first.
    pub fn next(&mut self) {
        self.current = (self.current + 1) % N;
        debug!("buffer {} of {} now current", self.current, N);
    }

    /// Make the preceding buffer current, wrapping from the first to the last.
    pub fn previous(&mut self) {
        self.current = (self.current + N - 1) % N;
        debug!("buffer {} of {} now current", self.current, N);
    }

    /// Make buffer `index` current. An index past the last buffer is ignored.
    pub fn goto(&mut self, index: usize) {
        if index >= N {
            trace!("goto rejected: buffer {} of {}", index, N);
            return;
        }
        self.current = index;
        debug!("buffer {} of {} now current", self.current, N);
    }
}

impl<const N: usize> Default for BufferSet<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "graphics")]
mod graphics {
    //! Lets `embedded-graphics` primitives, text and images render into a frame buffer.

    use core::convert::{Infallible, TryFrom};

    use embedded_graphics_core::draw_target::DrawTarget;
    use embedded_graphics_core::geometry::{OriginDimensions, Size};
    use embedded_graphics_core::pixelcolor::BinaryColor;
    use embedded_graphics_core::Pixel;

    use super::FrameBuffer;
    use crate::command::consts::*;

    impl OriginDimensions for FrameBuffer {
        fn size(&self) -> Size {
            Size::new(NUM_COLUMNS as u32, NUM_ROWS as u32)
        }
    }

    impl DrawTarget for FrameBuffer {
        type Color = BinaryColor;
        type Error = Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            for Pixel(point, color) in pixels {
                if let (Ok(x), Ok(y)) = (u8::try_from(point.x), u8::try_from(point.y)) {
                    self.set_pixel(x, y, color.is_on());
                }
            }
            Ok(())
        }
    }

}
