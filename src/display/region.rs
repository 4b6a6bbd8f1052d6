//! Region abstraction for writing into rectangular, page-aligned areas of the controller RAM.

use core::iter::Peekable;

use crate::command::Command;
use crate::error::Error;
use crate::interface::DisplayInterface;

/// Display data bytes staged per `send_data` call.
const CHUNK_LEN: usize = 32;

/// A handle to a rectangular region of the display RAM, `cols` columns wide and `pages` pages
/// tall, which can be written into.
///
/// Regions are intended to be short-lived, and contain a mutable borrow of the interface so
/// clashing writes are prevented.
pub struct Region<'di, DI>
where
    DI: 'di + DisplayInterface,
{
    iface: &'di mut DI,
    ram_left: u8,
    cols: u8,
    top_page: u8,
    pages: u8,
}

impl<'di, DI> Region<'di, DI>
where
    DI: 'di + DisplayInterface,
{
    /// Construct a new region. This is only called by the factory methods on `Display`, which
    /// check that the region lies on the panel and pre-compensate the left column for the
    /// display column offset.
    pub(super) fn new(iface: &'di mut DI, ram_left: u8, cols: u8, top_page: u8, pages: u8) -> Self {
        Self {
            iface,
            ram_left,
            cols,
            top_page,
            pages,
        }
    }

    /// Write display data into the region in controller order: page by page from the top, each
    /// page's columns from left to right, one byte per column with bit 0 the topmost pixel.
    ///
    /// Writing stops once the region is full or the iterator runs out, whichever comes first.
    pub fn draw<I>(&mut self, iter: I) -> Result<(), Error<DI::Error>>
    where
        I: IntoIterator<Item = u8>,
    {
        let mut iter = iter.into_iter().peekable();
        for page in self.top_page..self.top_page + self.pages {
            if iter.peek().is_none() {
                break;
            }
            Command::SetPageAddress(page).send(self.iface)?;
            Command::SetColumnAddress(self.ram_left).send(self.iface)?;
            if !self.draw_page(&mut iter)? {
                break;
            }
        }
        Ok(())
    }

    /// Stream one page of the region from `iter` using a constant-size chunk buffer. Returns
    /// whether the page was filled completely.
    fn draw_page<I>(&mut self, iter: &mut Peekable<I>) -> Result<bool, Error<DI::Error>>
    where
        I: Iterator<Item = u8>,
    {
        let mut buf = [0u8; CHUNK_LEN];
        let mut remaining = self.cols as usize;
        while remaining > 0 {
            let want = remaining.min(CHUNK_LEN);
            let mut chunk_len = 0;
            for slot in buf[..want].iter_mut() {
                match iter.next() {
                    Some(byte) => {
                        *slot = byte;
                        chunk_len += 1;
                    }
                    None => break,
                }
            }
            if chunk_len > 0 {
                self.iface
                    .send_data(&buf[..chunk_len])
                    .map_err(Error::Interface)?;
            }
            if chunk_len != want {
                return Ok(false);
            }
            remaining -= chunk_len;
        }
        Ok(true)
    }
}
