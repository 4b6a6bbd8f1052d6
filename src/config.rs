//! Defines the relatively static settings of the SH1106 that are programmed once at init time.

use crate::command::consts::*;
use crate::command::*;
use crate::error::Error;
use crate::interface::DisplayInterface;

/// Contrast programmed by `Config::new` and assumed by `Display` before any contrast change.
pub const DEFAULT_CONTRAST: u8 = 0x80;
/// RAM column of panel column 0 on the common 1.3" 128x64 modules.
pub const DEFAULT_COLUMN_OFFSET: u8 = 2;

/// A configuration for the display. Builder methods offer a declarative way to override any of
/// the settings sent at init time.
///
/// `Config::new` holds settings that suit the common 1.3" 128x64 SH1106 modules: no remapping,
/// alternative COM pads, all 64 rows multiplexed, the DC-DC converter on with a 6.4V pump, and
/// contrast at its midpoint. Pre-charge period and display offset are left at the chip's POR
/// default unless set.
#[derive(Clone, Debug)]
pub struct Config {
    segment_remap_cmd: Option<Command>,
    com_pads_layout_cmd: Option<Command>,
    com_scan_direction_cmd: Option<Command>,
    multiplex_ratio_cmd: Option<Command>,
    clock_divide_cmd: Option<Command>,
    vcom_deselect_level_cmd: Option<Command>,
    contrast_cmd: Option<Command>,
    precharge_period_cmd: Option<Command>,
    display_offset_cmd: Option<Command>,
    pump_voltage_cmd: Option<Command>,
    dc_dc_cmd: Option<Command>,
    pub(crate) contrast: u8,
    pub(crate) column_offset: u8,
}

impl Config {
    pub fn new() -> Self {
        Config {
            segment_remap_cmd: Some(Command::SetSegmentRemap(SegmentRemap::Normal)),
            com_pads_layout_cmd: Some(Command::SetComPadsLayout(ComPadsLayout::Alternative)),
            com_scan_direction_cmd: Some(Command::SetComScanDirection(ComScanDirection::Normal)),
            multiplex_ratio_cmd: Some(Command::SetMultiplexRatio(NUM_ROWS)),
            clock_divide_cmd: Some(Command::SetClockDivide(1, 5)),
            vcom_deselect_level_cmd: Some(Command::SetVcomDeselectLevel(0x35)),
            contrast_cmd: Some(Command::SetContrast(DEFAULT_CONTRAST)),
            precharge_period_cmd: None,
            display_offset_cmd: None,
            pump_voltage_cmd: Some(Command::SetPumpVoltage(PumpVoltage::V6_4)),
            dc_dc_cmd: Some(Command::SetDcDc(true)),
            contrast: DEFAULT_CONTRAST,
            column_offset: DEFAULT_COLUMN_OFFSET,
        }
    }

    /// Extend this `Config` to mirror the image horizontally. See `Command::SetSegmentRemap`.
    pub fn segment_remap(self, remap: SegmentRemap) -> Self {
        Self {
            segment_remap_cmd: Some(Command::SetSegmentRemap(remap)),
            ..self
        }
    }

    /// Extend this `Config` to match the module's COM wiring. See `Command::SetComPadsLayout`.
    pub fn com_pads_layout(self, layout: ComPadsLayout) -> Self {
        Self {
            com_pads_layout_cmd: Some(Command::SetComPadsLayout(layout)),
            ..self
        }
    }

    /// Extend this `Config` to flip the image vertically. See `Command::SetComScanDirection`.
    pub fn com_scan_direction(self, direction: ComScanDirection) -> Self {
        Self {
            com_scan_direction_cmd: Some(Command::SetComScanDirection(direction)),
            ..self
        }
    }

    /// Extend this `Config` to multiplex fewer COM lines. See `Command::SetMultiplexRatio`.
    pub fn multiplex_ratio(self, ratio: u8) -> Self {
        Self {
            multiplex_ratio_cmd: Some(Command::SetMultiplexRatio(ratio)),
            ..self
        }
    }

    /// Extend this `Config` to configure the display clock divider and oscillator frequency. See
    /// `Command::SetClockDivide`.
    pub fn clock_divide(self, divide: u8, oscillator: u8) -> Self {
        Self {
            clock_divide_cmd: Some(Command::SetClockDivide(divide, oscillator)),
            ..self
        }
    }

    /// See `Command::SetVcomDeselectLevel`.
    pub fn vcom_deselect_level(self, level: u8) -> Self {
        Self {
            vcom_deselect_level_cmd: Some(Command::SetVcomDeselectLevel(level)),
            ..self
        }
    }

    /// Extend this `Config` to start at a different contrast. See `Command::SetContrast`.
    pub fn contrast(self, contrast: u8) -> Self {
        Self {
            contrast_cmd: Some(Command::SetContrast(contrast)),
            contrast,
            ..self
        }
    }

    /// Extend this `Config` to configure the OLED drive pre-charge and discharge periods, in
    /// display clocks. See `Command::SetPrechargePeriod`.
    pub fn precharge_period(self, precharge: u8, discharge: u8) -> Self {
        Self {
            precharge_period_cmd: Some(Command::SetPrechargePeriod(precharge, discharge)),
            ..self
        }
    }

    /// See `Command::SetDisplayOffset`.
    pub fn display_offset(self, offset: u8) -> Self {
        Self {
            display_offset_cmd: Some(Command::SetDisplayOffset(offset)),
            ..self
        }
    }

    /// See `Command::SetPumpVoltage`.
    pub fn pump_voltage(self, voltage: PumpVoltage) -> Self {
        Self {
            pump_voltage_cmd: Some(Command::SetPumpVoltage(voltage)),
            ..self
        }
    }

    /// Extend this `Config` to switch the built-in DC-DC converter, for modules that supply the
    /// panel voltage externally. See `Command::SetDcDc`.
    pub fn dc_dc(self, enabled: bool) -> Self {
        Self {
            dc_dc_cmd: Some(Command::SetDcDc(enabled)),
            ..self
        }
    }

    /// Extend this `Config` with the RAM column that drives panel column 0. Modules built on the
    /// 132 column RAM with a 128 column panel place it anywhere from 0 to 4; the common layout is
    /// 2.
    pub fn column_offset(self, offset: u8) -> Self {
        Self {
            column_offset: offset,
            ..self
        }
    }

    /// Transmit commands to the display at `iface` necessary to put that display into the
    /// configuration encoded in `self`.
    pub(crate) fn send<DI>(&self, iface: &mut DI) -> Result<(), Error<DI::Error>>
    where
        DI: DisplayInterface,
    {
        if self.column_offset > MAX_COLUMN_OFFSET {
            return Err(Error::ArgumentOutOfRange);
        }
        let cmds = [
            self.segment_remap_cmd,
            self.com_pads_layout_cmd,
            self.com_scan_direction_cmd,
            self.multiplex_ratio_cmd,
            self.clock_divide_cmd,
            self.vcom_deselect_level_cmd,
            self.contrast_cmd,
            self.precharge_period_cmd,
            self.display_offset_cmd,
            self.pump_voltage_cmd,
            self.dc_dc_cmd,
        ];
        for cmd in cmds.iter().flatten() {
            cmd.send(iface)?;
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
