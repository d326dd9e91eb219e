use core::fmt::{Debug, Display, Formatter, Result as FmtResult};

use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};
pub(crate) mod bit_fields;
use bit_fields::Config;
mod constants;
mod details;
mod fifo;
mod init;
mod power;
mod radio;
mod register;
mod status;
pub use constants::{commands, mnemonics, registers};

use crate::{radio::RadioConfig, StatusFlags};

/// An collection of error types to describe hardware malfunctions
/// and failed transmissions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Nrf24Error<SPI, DO> {
    /// Represents a SPI transaction error.
    Spi(SPI),
    /// Represents a DigitalOutput error.
    Gpo(DO),
    /// A previous SPI transaction could not release the CSN pin.
    ///
    /// No further SPI transactions are attempted until
    /// [`EsbInit::init()`](fn@crate::radio::prelude::EsbInit::init) succeeds.
    BusUnavailable,
    /// The TX Data Sent event was not observed within the configured
    /// [`RadioConfig::poll_budget()`].
    Timeout,
    /// The radio gave up after the maximum number of retransmits.
    MaxRetries,
    /// The payload's length does not match the configured
    /// [`RadioConfig::payload_length()`].
    InvalidLength { expected: u8, actual: usize },
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl<SPI, DO> defmt::Format for Nrf24Error<SPI, DO> {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Nrf24Error::Spi(_) => defmt::write!(fmt, "SPI transaction failed"),
            Nrf24Error::Gpo(_) => defmt::write!(fmt, "digital output failed"),
            Nrf24Error::BusUnavailable => defmt::write!(fmt, "SPI bus unavailable"),
            Nrf24Error::Timeout => defmt::write!(fmt, "transmission timed out"),
            Nrf24Error::MaxRetries => defmt::write!(fmt, "maximum retransmits reached"),
            Nrf24Error::InvalidLength { expected, actual } => {
                defmt::write!(fmt, "payload length {=usize} != {=u8}", actual, expected)
            }
        }
    }
}

impl<SPI: Debug, DO: Debug> Display for Nrf24Error<SPI, DO> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Nrf24Error::Spi(e) => write!(f, "SPI transaction failed: {e:?}"),
            Nrf24Error::Gpo(e) => write!(f, "digital output failed: {e:?}"),
            Nrf24Error::BusUnavailable => write!(f, "SPI bus unavailable"),
            Nrf24Error::Timeout => write!(f, "transmission timed out"),
            Nrf24Error::MaxRetries => write!(f, "maximum retransmits reached"),
            Nrf24Error::InvalidLength { expected, actual } => {
                write!(f, "payload length {actual} != {expected}")
            }
        }
    }
}

/// This struct implements the [`Esb*` traits](mod@crate::radio::prelude)
/// for the nRF24L01 transceiver.
///
/// The radio is driven in a fixed, symmetric configuration: one address
/// for both TX and RX (pipe 0), fixed payload length, and no auto-ack.
/// The handle owns the SPI bus and both of the radio's control pins,
/// so nothing else may talk to the radio while the handle exists.
pub struct Nrf24Mini<SPI, DO, DELAY> {
    _spi: SPI,
    csn_pin: DO,
    ce_pin: DO,
    _delay_impl: DELAY,
    _buf: [u8; 33],
    _status: StatusFlags,
    _config_reg: Config,
    _config: RadioConfig,
    _csn_active: bool,
    _last_poll_count: u32,
}

impl<SPI, DO, DELAY> Nrf24Mini<SPI, DO, DELAY>
where
    SPI: SpiBus,
    DO: OutputPin,
    DELAY: DelayNs,
{
    /// Instantiate a [`Nrf24Mini`] object for use on the specified
    /// `spi` bus with the given `csn_pin` and `ce_pin`.
    ///
    /// Unlike a [`SpiDevice`](trait@embedded_hal::spi::SpiDevice), the
    /// [`SpiBus`] does not manage a chip select line; the radio's CSN pin
    /// is toggled by this object around every SPI transaction.
    ///
    /// No hardware is touched until
    /// [`EsbInit::init()`](fn@crate::radio::prelude::EsbInit::init) is called.
    pub fn new(
        spi: SPI,
        csn_pin: DO,
        ce_pin: DO,
        delay_impl: DELAY,
        config: RadioConfig,
    ) -> Nrf24Mini<SPI, DO, DELAY> {
        Nrf24Mini {
            _spi: spi,
            csn_pin,
            ce_pin,
            _delay_impl: delay_impl,
            _buf: [0u8; 33],
            _status: StatusFlags::from_bits(0),
            _config_reg: config.config_reg,
            _config: config,
            _csn_active: false,
            _last_poll_count: 0,
        }
    }

    /// The configuration applied by
    /// [`EsbInit::reset()`](fn@crate::radio::prelude::EsbInit::reset).
    pub fn config(&self) -> &RadioConfig {
        &self._config
    }

    /// Release the SPI bus and control pins.
    pub fn free(self) -> (SPI, DO, DO, DELAY) {
        (self._spi, self.csn_pin, self.ce_pin, self._delay_impl)
    }

    /// Exchange the first `len` bytes of the internal buffer with the radio.
    ///
    /// This is the only function that drives the CSN pin.
    fn spi_transfer(&mut self, len: u8) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        if self._csn_active {
            return Err(Nrf24Error::BusUnavailable);
        }
        self.csn_pin.set_low().map_err(Nrf24Error::Gpo)?;
        self._csn_active = true;
        let result = self
            ._spi
            .transfer_in_place(&mut self._buf[..len as usize])
            .and_then(|_| self._spi.flush())
            .map_err(Nrf24Error::Spi);
        // CSN must go high even if the transfer failed
        self.csn_pin.set_high().map_err(Nrf24Error::Gpo)?;
        self._csn_active = false;
        result?;
        self._status = StatusFlags::from_bits(self._buf[0]);
        Ok(())
    }

    /// Send `command` followed by `len` dummy bytes.
    /// The response is stored in `self._buf[1..=len]`.
    ///
    /// This is also used to write SPI commands that consist of 1 byte:
    /// ```ignore
    /// self.spi_read(0, commands::NOP)?;
    /// // STATUS register is now stored in self._status
    /// ```
    fn spi_read(&mut self, len: u8, command: u8) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self._buf[0] = command;
        self._buf[1..(len as usize + 1)].fill(0);
        self.spi_transfer(len + 1)
    }

    fn spi_write_byte(
        &mut self,
        command: u8,
        byte: u8,
    ) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self._buf[0] = command;
        self._buf[1] = byte;
        self.spi_transfer(2)
    }

    fn spi_write_buf(
        &mut self,
        command: u8,
        buf: &[u8],
    ) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self._buf[0] = command;
        let buf_len = buf.len().min(32);
        self._buf[1..(buf_len + 1)].copy_from_slice(&buf[..buf_len]);
        self.spi_transfer(buf_len as u8 + 1)
    }

    /// Drive both control pins to their idle state (CSN high, CE low).
    ///
    /// This also forgets about any SPI transaction left open by a failed
    /// attempt to release the CSN pin.
    fn release_pins(&mut self) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self.csn_pin.set_high().map_err(Nrf24Error::Gpo)?;
        self._csn_active = false;
        self.ce_pin.set_low().map_err(Nrf24Error::Gpo)
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{commands, registers, Nrf24Error};
    use crate::{
        radio::prelude::EsbStatus,
        spi_test_expects,
        test::{
            csn_test_expects, mk_radio,
            sim::{Chip, SimError},
        },
        StatusFlags,
    };
    use embedded_hal_mock::eh1::spi::Transaction as SpiTransaction;
    use std::{format, string::String, vec};

    #[test]
    fn frame_brackets_csn() {
        let spi_expectations = spi_test_expects![
            (vec![commands::NOP], vec![0x0Eu8]),
            (vec![registers::RF_CH, 0u8], vec![0x0Eu8, 1u8]),
        ];
        let mocks = mk_radio(&csn_test_expects(2), &[], &spi_expectations);
        let (mut radio, mut spi, mut csn_pin, mut ce_pin) = (mocks.0, mocks.1, mocks.2, mocks.3);
        radio.update().unwrap();
        assert_eq!(radio.read_register(registers::RF_CH).unwrap(), 1);
        spi.done();
        csn_pin.done();
        ce_pin.done();
    }

    #[test]
    fn status_cached_from_every_frame() {
        let spi_expectations = spi_test_expects![
            // any register read refreshes the cached STATUS
            (vec![registers::RF_CH, 0u8], vec![0x2Eu8, 1u8]),
        ];
        let mocks = mk_radio(&csn_test_expects(1), &[], &spi_expectations);
        let (mut radio, mut spi, mut csn_pin, mut ce_pin) = (mocks.0, mocks.1, mocks.2, mocks.3);
        radio.read_register(registers::RF_CH).unwrap();
        let mut flags = StatusFlags::default();
        radio.get_status_flags(&mut flags);
        assert!(flags.tx_ds());
        assert!(!flags.rx_dr());
        spi.done();
        csn_pin.done();
        ce_pin.done();
    }

    #[test]
    fn csn_released_after_spi_error() {
        let chip = Chip::shared();
        chip.borrow_mut().fail_next_transfer = true;
        let mut radio = crate::test::sim::mk_sim_radio(&chip);
        let result = radio.read_register(registers::CONFIG);
        assert!(matches!(result, Err(Nrf24Error::Spi(_))));
        assert!(chip.borrow().csn_high);
        // the bus is usable again
        assert!(radio.read_register(registers::CONFIG).is_ok());
    }

    #[test]
    fn stuck_csn_blocks_bus() {
        let chip = Chip::shared();
        let mut radio = crate::test::sim::mk_sim_radio(&chip);
        chip.borrow_mut().fail_csn_release = true;
        assert!(matches!(
            radio.read_register(registers::CONFIG),
            Err(Nrf24Error::Gpo(_))
        ));
        chip.borrow_mut().fail_csn_release = false;
        let frames = chip.borrow().frames.len();
        assert_eq!(
            radio.read_register(registers::CONFIG),
            Err(Nrf24Error::BusUnavailable)
        );
        // nothing was sent while the bus was unavailable
        assert_eq!(chip.borrow().frames.len(), frames);
        radio.release_pins().unwrap();
        assert!(radio.read_register(registers::CONFIG).is_ok());
    }

    #[test]
    fn display_errors() {
        type Error = Nrf24Error<SimError, SimError>;
        assert_eq!(
            format!(
                "{}",
                Error::InvalidLength {
                    expected: 10,
                    actual: 3
                }
            ),
            String::from("payload length 3 != 10")
        );
        assert_eq!(
            format!("{}", Error::Timeout),
            String::from("transmission timed out")
        );
    }
}
