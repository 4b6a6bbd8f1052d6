//! The main API to the display driver. A `Display` owns the interface to the controller together
//! with the frame buffers that are drawn into, and pushes buffer contents to the panel on request.

pub mod region;
pub mod text;

use hal::blocking::delay::DelayUs;
use itertools::iproduct;

use crate::command::consts::*;
use crate::command::Command;
use crate::config::{Config, DEFAULT_COLUMN_OFFSET, DEFAULT_CONTRAST};
use crate::display::region::Region;
use crate::error::Error;
use crate::font::{Font, FONT_5X8};
use crate::framebuffer::{BufferSet, FrameBuffer, Point};
use crate::interface::DisplayInterface;

/// Power-on settling time before the first command.
const POWER_ON_DELAY_US: u32 = 1_200;
/// Time for the DC-DC converter to bring up the panel voltage.
const DC_DC_DELAY_US: u32 = 100_000;
/// Settling time after the display is switched on.
const DISPLAY_ON_DELAY_US: u32 = 50_000;

/// Which way `Display::contrast_step` nudges the contrast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Increase,
    Decrease,
}

/// A driver for an SH1106 display with `N` frame buffers.
pub struct Display<DI, const N: usize = 1>
where
    DI: DisplayInterface,
{
    iface: DI,
    buffers: BufferSet<N>,
    font: &'static Font,
    cursor: Point,
    column_offset: u8,
    contrast: u8,
}

impl<DI, const N: usize> Display<DI, N>
where
    DI: DisplayInterface,
{
    /// Construct a new display driver connected to the interface `iface`, with blank buffers,
    /// the built-in 5x8 font and the text cursor at the origin. Nothing is sent until `init`.
    ///
    /// Panics if `N` is 0.
    pub fn new(iface: DI) -> Self {
        Display {
            iface,
            buffers: BufferSet::new(),
            font: &FONT_5X8,
            cursor: Point::default(),
            column_offset: DEFAULT_COLUMN_OFFSET,
            contrast: DEFAULT_CONTRAST,
        }
    }

    /// Initialize the display with a config message, then clear the controller RAM and turn the
    /// panel on. `delay` provides the power-on and voltage settling waits.
    pub fn init<D>(&mut self, config: Config, delay: &mut D) -> Result<(), Error<DI::Error>>
    where
        D: DelayUs<u32>,
    {
        debug!("initializing display");
        delay.delay_us(POWER_ON_DELAY_US);
        config.send(&mut self.iface)?;
        self.column_offset = config.column_offset;
        self.contrast = config.contrast;
        delay.delay_us(DC_DC_DELAY_US);

        Command::SetStartLine(0).send(&mut self.iface)?;
        self.buffers.current_mut().clear_all();
        self.flush()?;
        Command::SetDisplayOn(true).send(&mut self.iface)?;
        delay.delay_us(DISPLAY_ON_DELAY_US);
        Ok(())
    }

    /// Control sleep mode. While asleep the panel is dark but the RAM contents are kept.
    pub fn sleep(&mut self, enabled: bool) -> Result<(), Error<DI::Error>> {
        Command::SetDisplayOn(!enabled).send(&mut self.iface)
    }

    /// Control the contrast.
    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), Error<DI::Error>> {
        Command::SetContrast(contrast).send(&mut self.iface)?;
        self.contrast = contrast;
        Ok(())
    }

    /// Nudge the contrast one step up or down, stopping at either end of the range.
    pub fn contrast_step(&mut self, direction: Direction) -> Result<(), Error<DI::Error>> {
        let contrast = match direction {
            Direction::Increase => self.contrast.saturating_add(1),
            Direction::Decrease => self.contrast.saturating_sub(1),
        };
        self.set_contrast(contrast)
    }

    /// The contrast last sent to the display.
    pub fn contrast(&self) -> u8 {
        self.contrast
    }

    /// Show lit pixels dark and blank pixels lit, or return to normal.
    pub fn invert(&mut self, inverted: bool) -> Result<(), Error<DI::Error>> {
        Command::SetInverted(inverted).send(&mut self.iface)
    }

    /// Set the vertical pan.
    ///
    /// This uses the `Command::SetStartLine` feature to roll the RAM rows shown on the panel, so
    /// the image wraps from the top edge to the bottom.
    pub fn vertical_pan(&mut self, offset: u8) -> Result<(), Error<DI::Error>> {
        Command::SetStartLine(offset).send(&mut self.iface)
    }

    /// The current frame buffer.
    pub fn buffer(&self) -> &FrameBuffer {
        self.buffers.current()
    }

    /// The current frame buffer, for drawing.
    pub fn buffer_mut(&mut self) -> &mut FrameBuffer {
        self.buffers.current_mut()
    }

    pub fn buffers(&self) -> &BufferSet<N> {
        &self.buffers
    }

    /// The buffer set, for switching which buffer is current.
    pub fn buffers_mut(&mut self) -> &mut BufferSet<N> {
        &mut self.buffers
    }

    /// Construct a region of the controller RAM `cols` columns wide and `pages` pages tall, with
    /// its upper left corner at panel column `column` of page `page`, onto which to write display
    /// data directly.
    ///
    /// The region must lie within the panel and must not be empty.
    pub fn region(
        &mut self,
        column: u8,
        page: u8,
        cols: u8,
        pages: u8,
    ) -> Result<Region<'_, DI>, Error<DI::Error>> {
        if cols == 0
            || pages == 0
            || column as u16 + cols as u16 > NUM_COLUMNS as u16
            || page as u16 + pages as u16 > NUM_PAGES as u16
        {
            return Err(Error::OutOfBounds);
        }
        Ok(Region::new(
            &mut self.iface,
            column + self.column_offset,
            cols,
            page,
            pages,
        ))
    }

    /// Push the whole current buffer to the display.
    pub fn flush(&mut self) -> Result<(), Error<DI::Error>> {
        self.flush_region(0, 0, NUM_COLUMNS, NUM_ROWS)
    }

    /// Push the part of the current buffer covering the `w`x`h` pixel rectangle at `(x, y)` to
    /// the display. The controller is written in whole pages, so every page the rectangle
    /// touches is sent over columns `x..x + w`.
    pub fn flush_region(&mut self, x: u8, y: u8, w: u8, h: u8) -> Result<(), Error<DI::Error>> {
        if w == 0
            || h == 0
            || x as u16 + w as u16 > NUM_COLUMNS as u16
            || y as u16 + h as u16 > NUM_ROWS as u16
        {
            return Err(Error::OutOfBounds);
        }
        let top_page = y / 8;
        let bottom_page = (y + h - 1) / 8;
        debug!("flushing {}x{} at ({}, {})", w, h, x, y);

        let buffer = self.buffers.current();
        let mut region = Region::new(
            &mut self.iface,
            x + self.column_offset,
            w,
            top_page,
            bottom_page - top_page + 1,
        );
        region.draw(
            iproduct!(top_page..=bottom_page, x..x + w)
                .map(|(page, column)| buffer.byte(column, page)),
        )
    }

    /// Write a page-aligned vertical byte orientation image straight to the controller RAM,
    /// bypassing the frame buffers. `data` holds `pages` rows of `cols` bytes.
    pub fn write_image(
        &mut self,
        column: u8,
        page: u8,
        cols: u8,
        pages: u8,
        data: &[u8],
    ) -> Result<(), Error<DI::Error>> {
        if data.len() < cols as usize * pages as usize {
            return Err(Error::OutOfBounds);
        }
        self.region(column, page, cols, pages)?
            .draw(data.iter().cloned())
    }

    /// Give back the interface.
    pub fn release(self) -> DI {
        self.iface
    }
}
