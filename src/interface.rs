//! Transports that carry command and display data bytes to the SH1106.

/// A byte-level connection to the controller.
pub trait DisplayInterface {
    type Error;

    /// Send a single byte in command mode.
    fn send_command(&mut self, cmd: u8) -> Result<(), Self::Error>;
    /// Send a burst of display RAM data.
    fn send_data(&mut self, buf: &[u8]) -> Result<(), Self::Error>;
}

pub mod spi {
    //! The SPI interface supports the "4-wire" interface of the driver, such that each word on the
    //! SPI bus is 8 bits and a separate GPIO selects between command and data bytes.

    use super::DisplayInterface;

    /// Failure of either half of the 4-wire interface.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub enum SpiError<SE, PE> {
        /// The SPI master failed to write.
        Spi(SE),
        /// The D/C pin could not be driven.
        Pin(PE),
    }

    pub struct SpiInterface<SPI, DC> {
        /// The SPI master device connected to the SH1106.
        spi: SPI,
        /// A GPIO output pin connected to the A0 (data/command) pin of the SH1106.
        dc: DC,
    }

    impl<SPI, DC> SpiInterface<SPI, DC>
    where
        SPI: hal::blocking::spi::Write<u8>,
        DC: hal::digital::v2::OutputPin,
    {
        /// Create a new SPI interface to communicate with the display driver. `spi` is the SPI
        /// master device, and `dc` is the GPIO output pin connected to the A0 pin of the SH1106.
        pub fn new(spi: SPI, dc: DC) -> Self {
            Self { spi, dc }
        }

        /// Give back the SPI master and D/C pin.
        pub fn release(self) -> (SPI, DC) {
            (self.spi, self.dc)
        }
    }

    impl<SPI, DC> DisplayInterface for SpiInterface<SPI, DC>
    where
        SPI: hal::blocking::spi::Write<u8>,
        DC: hal::digital::v2::OutputPin,
    {
        type Error = SpiError<SPI::Error, DC::Error>;

        fn send_command(&mut self, cmd: u8) -> Result<(), Self::Error> {
            self.dc.set_low().map_err(SpiError::Pin)?;
            self.spi.write(&[cmd]).map_err(SpiError::Spi)?;
            self.dc.set_high().map_err(SpiError::Pin)
        }

        fn send_data(&mut self, buf: &[u8]) -> Result<(), Self::Error> {
            self.dc.set_high().map_err(SpiError::Pin)?;
            self.spi.write(buf).map_err(SpiError::Spi)
        }
    }
}

pub mod i2c {
    //! The I2C interface prefixes every transaction with a control byte telling the controller
    //! whether the following bytes are commands or display data.

    use super::DisplayInterface;

    /// The slave address of most SH1106 modules (SA0 tied low).
    pub const DEFAULT_ADDRESS: u8 = 0x3C;

    const CONTROL_COMMAND: u8 = 0x00;
    const CONTROL_DATA: u8 = 0x40;
    /// Display data bytes carried by one I2C transaction.
    const DATA_CHUNK_LEN: usize = 32;

    pub struct I2cInterface<I2C> {
        i2c: I2C,
        address: u8,
    }

    impl<I2C> I2cInterface<I2C>
    where
        I2C: hal::blocking::i2c::Write,
    {
        /// Create a new I2C interface talking to the controller at 7-bit `address`.
        pub fn new(i2c: I2C, address: u8) -> Self {
            Self { i2c, address }
        }

        /// Give back the I2C master.
        pub fn release(self) -> I2C {
            self.i2c
        }
    }

    impl<I2C> DisplayInterface for I2cInterface<I2C>
    where
        I2C: hal::blocking::i2c::Write,
    {
        type Error = I2C::Error;

        fn send_command(&mut self, cmd: u8) -> Result<(), Self::Error> {
            self.i2c.write(self.address, &[CONTROL_COMMAND, cmd])
        }

        fn send_data(&mut self, buf: &[u8]) -> Result<(), Self::Error> {
            // The control byte leads every transaction.
            let mut frame = [0u8; DATA_CHUNK_LEN + 1];
            frame[0] = CONTROL_DATA;
            for chunk in buf.chunks(DATA_CHUNK_LEN) {
                frame[1..=chunk.len()].copy_from_slice(chunk);
                self.i2c.write(self.address, &frame[..=chunk.len()])?;
            }
            Ok(())
        }
    }
}
