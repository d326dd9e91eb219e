use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};

use crate::{
    radio::{prelude::EsbStatus, Nrf24Error, Nrf24Mini},
    types::StatusFlags,
};

use super::{commands, registers};

impl<SPI, DO, DELAY> EsbStatus for Nrf24Mini<SPI, DO, DELAY>
where
    SPI: SpiBus,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type StatusErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn clear_status_flags(&mut self, flags: StatusFlags) -> Result<(), Self::StatusErrorType> {
        let mask = flags.into_bits() & StatusFlags::IRQ_MASK;
        self.write_register(registers::STATUS, mask)
    }

    fn update(&mut self) -> Result<(), Self::StatusErrorType> {
        self.spi_read(0, commands::NOP)
    }

    fn get_status_flags(&self, flags: &mut StatusFlags) {
        *flags = self._status;
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{commands, registers, EsbStatus, StatusFlags};
    use crate::{
        spi_test_expects,
        test::{csn_test_expects, mk_radio},
    };
    use embedded_hal_mock::eh1::spi::Transaction as SpiTransaction;
    use std::vec;

    #[test]
    pub fn what_happened() {
        let spi_expectations = spi_test_expects![
            // get the STATUS byte
            (vec![commands::NOP], vec![0x70u8]),
        ];
        let mocks = mk_radio(&csn_test_expects(1), &[], &spi_expectations);
        let (mut radio, mut spi, mut csn_pin, mut ce_pin) = (mocks.0, mocks.1, mocks.2, mocks.3);
        radio.update().unwrap();
        let mut flags = StatusFlags::default();
        radio.get_status_flags(&mut flags);
        assert!(flags.rx_dr());
        assert!(flags.tx_ds());
        assert!(flags.max_rt());
        spi.done();
        csn_pin.done();
        ce_pin.done();
    }

    #[test]
    pub fn clear_only_irq_bits() {
        let spi_expectations = spi_test_expects![
            // clear the TX_DS flag
            (
                vec![registers::STATUS | commands::W_REGISTER, 0x20u8],
                vec![0x2Eu8, 0u8],
            ),
        ];
        let mocks = mk_radio(&csn_test_expects(1), &[], &spi_expectations);
        let (mut radio, mut spi, mut csn_pin, mut ce_pin) = (mocks.0, mocks.1, mocks.2, mocks.3);
        // the lower bits of STATUS are read-only and never written
        radio
            .clear_status_flags(StatusFlags::from_bits(0x2F))
            .unwrap();
        spi.done();
        csn_pin.done();
        ce_pin.done();
    }
}
