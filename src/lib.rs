//! Driver and graphics library for the Sino Wealth SH1106 dot matrix OLED controller, as found on
//! 1.3" 128x64 monochrome modules.
//!
//! Drawing happens in an in-memory frame buffer laid out like the controller RAM, and is pushed
//! to the panel over SPI or I2C on an explicit flush.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate embedded_hal as hal;
#[macro_use]
extern crate log;

// This has to be here in order to be usable by mods declared afterwards.
#[cfg(test)]
#[macro_use]
mod testing {
    macro_rules! send {
        ([$($d:tt),*]) => {$crate::interface::test_spy::Sent::Data(vec![$($d,)*])};
        ($c:tt) => {$crate::interface::test_spy::Sent::Cmd($c)};
    }
    macro_rules! sends {
        ($($e:tt),*) => {&[$(send!($e),)*]};
    }
}

pub mod bitmap;
pub mod command;
pub mod config;
pub mod display;
pub mod eeprom;
pub mod error;
pub mod font;
pub mod framebuffer;
pub mod interface;
pub mod raster;
pub mod shapes;

// Re-exports for primary API.
pub use command::{consts, ComPadsLayout, ComScanDirection, PumpVoltage, SegmentRemap};
pub use config::Config;
pub use display::{Direction, Display};
pub use eeprom::{Eeprom, EepromError, WordStorage};
pub use error::Error;
pub use font::{Font, FONT_5X8};
pub use framebuffer::{BufferSet, FrameBuffer, Orientation, Point};
pub use interface::i2c::I2cInterface;
pub use interface::spi::SpiInterface;
pub use interface::DisplayInterface;
pub use shapes::Quadrants;
