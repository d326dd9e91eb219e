use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};

use crate::radio::{
    prelude::{EsbFifo, EsbStatus},
    Nrf24Error, Nrf24Mini,
};
use crate::StatusFlags;

use super::commands;

impl<SPI, DO, DELAY> EsbFifo for Nrf24Mini<SPI, DO, DELAY>
where
    SPI: SpiBus,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type FifoErrorType = Nrf24Error<SPI::Error, DO::Error>;

    /// Use this to discard all 3 layers in the radio's RX FIFO.
    fn flush_rx(&mut self) -> Result<(), Self::FifoErrorType> {
        self.spi_read(0, commands::FLUSH_RX)
    }

    /// Use this to discard all 3 layers in the radio's TX FIFO.
    fn flush_tx(&mut self) -> Result<(), Self::FifoErrorType> {
        self.spi_read(0, commands::FLUSH_TX)
    }

    fn flush_buffers(&mut self) -> Result<(), Self::FifoErrorType> {
        self.clear_status_flags(StatusFlags::new())?;
        self.flush_tx()?;
        self.flush_rx()
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{commands, EsbFifo};
    use crate::{
        radio::registers,
        spi_test_expects,
        test::{csn_test_expects, mk_radio},
    };
    use embedded_hal_mock::eh1::spi::Transaction as SpiTransaction;
    use std::vec;

    fn flush_buffers_parametrized(status: u8) {
        let spi_expectations = spi_test_expects![
            (
                vec![registers::STATUS | commands::W_REGISTER, 0x70u8],
                vec![status, 0u8],
            ),
            (vec![commands::FLUSH_TX], vec![status & 0x0F]),
            (vec![commands::FLUSH_RX], vec![status & 0x0F]),
        ];
        let mocks = mk_radio(&csn_test_expects(3), &[], &spi_expectations);
        let (mut radio, mut spi, mut csn_pin, mut ce_pin) = (mocks.0, mocks.1, mocks.2, mocks.3);
        radio.flush_buffers().unwrap();
        spi.done();
        csn_pin.done();
        ce_pin.done();
    }

    #[test]
    fn flush_buffers_idle() {
        flush_buffers_parametrized(0x0E);
    }

    #[test]
    fn flush_buffers_all_flags() {
        flush_buffers_parametrized(0x7E);
    }

    #[test]
    fn flush_rx() {
        let spi_expectations = spi_test_expects![
            // flush RX FIFO
            (vec![commands::FLUSH_RX], vec![0xEu8]),
        ];
        let mocks = mk_radio(&csn_test_expects(1), &[], &spi_expectations);
        let (mut radio, mut spi, mut csn_pin, mut ce_pin) = (mocks.0, mocks.1, mocks.2, mocks.3);
        radio.flush_rx().unwrap();
        spi.done();
        csn_pin.done();
        ce_pin.done();
    }
}
