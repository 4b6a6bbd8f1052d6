//! The command set for the SH1106.
//!
//! Note 1: The display RAM of the SH1106 is 132 columns wide and 8 pages tall, where each page is
//! a horizontal band of 8 pixel rows and each byte in a page drives 8 vertically adjacent pixels
//! (bit 0 at the top). Most 1.3" 128x64 modules wire the panel to RAM columns 2->129, so anywhere
//! there is a RAM "column" address it may differ from the panel's pixel column by a small offset.
//!
//! Note 2: Unlike controllers with a separate parameter phase, every byte of a multi-byte SH1106
//! command (including the argument byte) is transmitted in command mode.

use crate::error::Error;
use crate::interface::DisplayInterface;

pub mod consts {
    //! Geometry of the panel and of the controller RAM.

    pub const NUM_COLUMNS: u8 = 128;
    pub const NUM_ROWS: u8 = 64;
    pub const NUM_PAGES: u8 = NUM_ROWS / 8;
    pub const NUM_RAM_COLUMNS: u8 = 132;
    pub const COLUMN_MAX: u8 = NUM_COLUMNS - 1;
    pub const ROW_MAX: u8 = NUM_ROWS - 1;
    pub const PAGE_MAX: u8 = NUM_PAGES - 1;
    pub const RAM_COLUMN_MAX: u8 = NUM_RAM_COLUMNS - 1;
    /// Largest panel column offset that still fits the panel inside the controller RAM.
    pub const MAX_COLUMN_OFFSET: u8 = NUM_RAM_COLUMNS - NUM_COLUMNS;
}

use self::consts::*;

/// Output voltage of the internal charge pump.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PumpVoltage {
    /// 6.4V
    V6_4,
    /// 7.4V
    V7_4,
    /// 8.0V, the power-on default.
    V8_0,
    /// 9.0V
    V9_0,
}

/// Mapping of RAM columns to segment drivers. Changing this setting mirrors the image
/// horizontally.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegmentRemap {
    /// RAM column 0 drives SEG0.
    Normal,
    /// RAM column 131 drives SEG0.
    Reversed,
}

/// Setting of the COM line scanning of rows. Changing this setting will flip the image vertically.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComScanDirection {
    /// COM lines scan from COM0 to COM[N-1].
    Normal,
    /// COM lines scan from COM[N-1] to COM0.
    Remapped,
}

/// Hardware layout of the COM pads. This is dictated by how the module wires the panel to the
/// controller; the wrong setting yields an interleaved, corrupted image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComPadsLayout {
    /// Sequential COM pin configuration.
    Sequential,
    /// Alternative (odd/even interleaved) COM pin configuration.
    Alternative,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Set the RAM column address pointer for subsequent data writes. Range is 0-131. (Note 1)
    SetColumnAddress(u8),
    /// Set the charge pump output voltage.
    SetPumpVoltage(PumpVoltage),
    /// Set the RAM row that is displayed on the first COM line, rolling the image upwards. Range
    /// is 0-63.
    SetStartLine(u8),
    /// Set the contrast (segment output current). Range 0-255.
    SetContrast(u8),
    /// Set the column to segment mapping.
    SetSegmentRemap(SegmentRemap),
    /// Force every pixel on regardless of the RAM contents (`true`), or show the RAM (`false`).
    SetEntireDisplayOn(bool),
    /// Show the RAM contents inverted (`true`) or as-is (`false`).
    SetInverted(bool),
    /// Set the number of active COM lines. Range is 1-64.
    SetMultiplexRatio(u8),
    /// Enable or disable the DC-DC converter. The converter should only be switched while the
    /// display is off.
    SetDcDc(bool),
    /// Turn the panel on or off. While off the controller keeps its RAM contents.
    SetDisplayOn(bool),
    /// Set the page address pointer for subsequent data writes. Range is 0-7.
    SetPageAddress(u8),
    /// Set the COM scan direction.
    SetComScanDirection(ComScanDirection),
    /// Set the vertical shift of the COM lines against the RAM rows. Range is 0-63.
    SetDisplayOffset(u8),
    /// Set the display clock divide ratio (1-16) and oscillator frequency (0-15). The oscillator
    /// setting is not documented beyond higher values being faster.
    SetClockDivide(u8, u8),
    /// Set the pre-charge (1-15) and dis-charge (1-15) periods in DCLKs.
    SetPrechargePeriod(u8, u8),
    /// Set the COM pads hardware layout.
    SetComPadsLayout(ComPadsLayout),
    /// Set the VCOM deselect level. The level is `0.430 + value * 0.006415` times VREF.
    SetVcomDeselectLevel(u8),
    /// Enter read-modify-write mode, where reads do not advance the column pointer.
    ReadModifyWrite,
    /// Leave read-modify-write mode, restoring the column pointer.
    End,
    /// No operation.
    Nop,
}

macro_rules! ok_command {
    ($buf:ident,[$byte0:expr]) => {{
        $buf[0] = $byte0;
        Ok(&$buf[..1])
    }};
    ($buf:ident,[$byte0:expr, $byte1:expr]) => {{
        $buf[0] = $byte0;
        $buf[1] = $byte1;
        Ok(&$buf[..2])
    }};
}

impl Command {
    pub fn send<DI>(self, iface: &mut DI) -> Result<(), Error<DI::Error>>
    where
        DI: DisplayInterface,
    {
        let mut cmd_buf = [0u8; 2];
        let bytes: Result<&[u8], Error<DI::Error>> = match self {
            Command::SetColumnAddress(column) => match column {
                0..=RAM_COLUMN_MAX => ok_command!(cmd_buf, [column & 0x0F, 0x10 | (column >> 4)]),
                _ => Err(Error::ArgumentOutOfRange),
            },
            Command::SetPumpVoltage(voltage) => ok_command!(
                cmd_buf,
                [match voltage {
                    PumpVoltage::V6_4 => 0x30,
                    PumpVoltage::V7_4 => 0x31,
                    PumpVoltage::V8_0 => 0x32,
                    PumpVoltage::V9_0 => 0x33,
                }]
            ),
            Command::SetStartLine(line) => match line {
                0..=ROW_MAX => ok_command!(cmd_buf, [0x40 | line]),
                _ => Err(Error::ArgumentOutOfRange),
            },
            Command::SetContrast(contrast) => ok_command!(cmd_buf, [0x81, contrast]),
            Command::SetSegmentRemap(remap) => ok_command!(
                cmd_buf,
                [match remap {
                    SegmentRemap::Normal => 0xA0,
                    SegmentRemap::Reversed => 0xA1,
                }]
            ),
            Command::SetEntireDisplayOn(ena) => {
                ok_command!(cmd_buf, [if ena { 0xA5 } else { 0xA4 }])
            }
            Command::SetInverted(ena) => ok_command!(cmd_buf, [if ena { 0xA7 } else { 0xA6 }]),
            Command::SetMultiplexRatio(ratio) => match ratio {
                1..=NUM_ROWS => ok_command!(cmd_buf, [0xA8, ratio - 1]),
                _ => Err(Error::ArgumentOutOfRange),
            },
            Command::SetDcDc(ena) => ok_command!(cmd_buf, [0xAD, if ena { 0x8B } else { 0x8A }]),
            Command::SetDisplayOn(ena) => ok_command!(cmd_buf, [if ena { 0xAF } else { 0xAE }]),
            Command::SetPageAddress(page) => match page {
                0..=PAGE_MAX => ok_command!(cmd_buf, [0xB0 | page]),
                _ => Err(Error::ArgumentOutOfRange),
            },
            Command::SetComScanDirection(direction) => ok_command!(
                cmd_buf,
                [match direction {
                    ComScanDirection::Normal => 0xC0,
                    ComScanDirection::Remapped => 0xC8,
                }]
            ),
            Command::SetDisplayOffset(offset) => match offset {
                0..=ROW_MAX => ok_command!(cmd_buf, [0xD3, offset]),
                _ => Err(Error::ArgumentOutOfRange),
            },
            Command::SetClockDivide(divide, osc) => match (divide, osc) {
                (1..=16, 0..=15) => ok_command!(cmd_buf, [0xD5, osc << 4 | (divide - 1)]),
                _ => Err(Error::ArgumentOutOfRange),
            },
            Command::SetPrechargePeriod(precharge, discharge) => match (precharge, discharge) {
                (1..=15, 1..=15) => ok_command!(cmd_buf, [0xD9, discharge << 4 | precharge]),
                _ => Err(Error::ArgumentOutOfRange),
            },
            Command::SetComPadsLayout(layout) => ok_command!(
                cmd_buf,
                [
                    0xDA,
                    match layout {
                        ComPadsLayout::Sequential => 0x02,
                        ComPadsLayout::Alternative => 0x12,
                    }
                ]
            ),
            Command::SetVcomDeselectLevel(level) => ok_command!(cmd_buf, [0xDB, level]),
            Command::ReadModifyWrite => ok_command!(cmd_buf, [0xE0]),
            Command::End => ok_command!(cmd_buf, [0xEE]),
            Command::Nop => ok_command!(cmd_buf, [0xE3]),
        };
        for byte in bytes? {
            iface.send_command(*byte).map_err(Error::Interface)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::test_spy::TestSpyInterface;

    #[test]
    fn set_column_address() {
        let mut di = TestSpyInterface::new();
        Command::SetColumnAddress(2).send(&mut di).unwrap();
        di.check_multi(sends!(0x02, 0x10));
        di.clear();
        Command::SetColumnAddress(0x81).send(&mut di).unwrap();
        di.check_multi(sends!(0x01, 0x18));
        di.clear();
        Command::SetColumnAddress(131).send(&mut di).unwrap();
        di.check_multi(sends!(0x03, 0x18));
        di.clear();
        assert_eq!(
            Command::SetColumnAddress(132).send(&mut di),
            Err(Error::ArgumentOutOfRange)
        );
        di.check_multi(sends!());
    }

    #[test]
    fn set_page_address() {
        let mut di = TestSpyInterface::new();
        Command::SetPageAddress(0).send(&mut di).unwrap();
        Command::SetPageAddress(7).send(&mut di).unwrap();
        di.check_multi(sends!(0xB0, 0xB7));
        assert_eq!(
            Command::SetPageAddress(8).send(&mut di),
            Err(Error::ArgumentOutOfRange)
        );
    }

    #[test]
    fn set_start_line() {
        let mut di = TestSpyInterface::new();
        Command::SetStartLine(0).send(&mut di).unwrap();
        Command::SetStartLine(23).send(&mut di).unwrap();
        di.check_multi(sends!(0x40, 0x57));
        assert_eq!(
            Command::SetStartLine(64).send(&mut di),
            Err(Error::ArgumentOutOfRange)
        );
    }

    #[test]
    fn set_contrast() {
        let mut di = TestSpyInterface::new();
        Command::SetContrast(0x80).send(&mut di).unwrap();
        di.check_multi(sends!(0x81, 0x80));
    }

    #[test]
    fn single_byte_switches() {
        let mut di = TestSpyInterface::new();
        Command::SetSegmentRemap(SegmentRemap::Normal)
            .send(&mut di)
            .unwrap();
        Command::SetSegmentRemap(SegmentRemap::Reversed)
            .send(&mut di)
            .unwrap();
        Command::SetEntireDisplayOn(false).send(&mut di).unwrap();
        Command::SetEntireDisplayOn(true).send(&mut di).unwrap();
        Command::SetInverted(false).send(&mut di).unwrap();
        Command::SetInverted(true).send(&mut di).unwrap();
        Command::SetDisplayOn(false).send(&mut di).unwrap();
        Command::SetDisplayOn(true).send(&mut di).unwrap();
        Command::SetComScanDirection(ComScanDirection::Normal)
            .send(&mut di)
            .unwrap();
        Command::SetComScanDirection(ComScanDirection::Remapped)
            .send(&mut di)
            .unwrap();
        Command::ReadModifyWrite.send(&mut di).unwrap();
        Command::End.send(&mut di).unwrap();
        Command::Nop.send(&mut di).unwrap();
        #[cfg_attr(rustfmt, rustfmt_skip)]
        di.check_multi(sends!(
            0xA0, 0xA1,
            0xA4, 0xA5,
            0xA6, 0xA7,
            0xAE, 0xAF,
            0xC0, 0xC8,
            0xE0, 0xEE, 0xE3
        ));
    }

    #[test]
    fn set_pump_voltage() {
        let mut di = TestSpyInterface::new();
        for &voltage in &[
            PumpVoltage::V6_4,
            PumpVoltage::V7_4,
            PumpVoltage::V8_0,
            PumpVoltage::V9_0,
        ] {
            Command::SetPumpVoltage(voltage).send(&mut di).unwrap();
        }
        di.check_multi(sends!(0x30, 0x31, 0x32, 0x33));
    }

    #[test]
    fn set_multiplex_ratio() {
        let mut di = TestSpyInterface::new();
        Command::SetMultiplexRatio(64).send(&mut di).unwrap();
        di.check_multi(sends!(0xA8, 0x3F));
        di.clear();
        Command::SetMultiplexRatio(1).send(&mut di).unwrap();
        di.check_multi(sends!(0xA8, 0x00));
        assert_eq!(
            Command::SetMultiplexRatio(0).send(&mut di),
            Err(Error::ArgumentOutOfRange)
        );
        assert_eq!(
            Command::SetMultiplexRatio(65).send(&mut di),
            Err(Error::ArgumentOutOfRange)
        );
    }

    #[test]
    fn set_dc_dc() {
        let mut di = TestSpyInterface::new();
        Command::SetDcDc(true).send(&mut di).unwrap();
        Command::SetDcDc(false).send(&mut di).unwrap();
        di.check_multi(sends!(0xAD, 0x8B, 0xAD, 0x8A));
    }

    #[test]
    fn set_display_offset() {
        let mut di = TestSpyInterface::new();
        Command::SetDisplayOffset(23).send(&mut di).unwrap();
        di.check_multi(sends!(0xD3, 23));
        assert_eq!(
            Command::SetDisplayOffset(64).send(&mut di),
            Err(Error::ArgumentOutOfRange)
        );
    }

    #[test]
    fn set_clock_divide() {
        let mut di = TestSpyInterface::new();
        Command::SetClockDivide(1, 5).send(&mut di).unwrap();
        di.check_multi(sends!(0xD5, 0x50));
        di.clear();
        Command::SetClockDivide(16, 15).send(&mut di).unwrap();
        di.check_multi(sends!(0xD5, 0xFF));
        assert_eq!(
            Command::SetClockDivide(0, 5).send(&mut di),
            Err(Error::ArgumentOutOfRange)
        );
        assert_eq!(
            Command::SetClockDivide(17, 5).send(&mut di),
            Err(Error::ArgumentOutOfRange)
        );
        assert_eq!(
            Command::SetClockDivide(1, 16).send(&mut di),
            Err(Error::ArgumentOutOfRange)
        );
    }

    #[test]
    fn set_precharge_period() {
        let mut di = TestSpyInterface::new();
        Command::SetPrechargePeriod(2, 2).send(&mut di).unwrap();
        di.check_multi(sends!(0xD9, 0x22));
        di.clear();
        Command::SetPrechargePeriod(15, 1).send(&mut di).unwrap();
        di.check_multi(sends!(0xD9, 0x1F));
        assert_eq!(
            Command::SetPrechargePeriod(0, 2).send(&mut di),
            Err(Error::ArgumentOutOfRange)
        );
        assert_eq!(
            Command::SetPrechargePeriod(2, 16).send(&mut di),
            Err(Error::ArgumentOutOfRange)
        );
    }

    #[test]
    fn set_com_pads_layout() {
        let mut di = TestSpyInterface::new();
        Command::SetComPadsLayout(ComPadsLayout::Sequential)
            .send(&mut di)
            .unwrap();
        Command::SetComPadsLayout(ComPadsLayout::Alternative)
            .send(&mut di)
            .unwrap();
        di.check_multi(sends!(0xDA, 0x02, 0xDA, 0x12));
    }

    #[test]
    fn set_vcom_deselect_level() {
        let mut di = TestSpyInterface::new();
        Command::SetVcomDeselectLevel(0x35).send(&mut di).unwrap();
        di.check_multi(sends!(0xDB, 0x35));
    }
}
