use super::{commands, mnemonics, registers, Nrf24Error, Nrf24Mini};
use crate::{
    radio::prelude::{EsbFifo, EsbRadio, EsbStatus},
    StatusFlags,
};
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};

impl<SPI, DO, DELAY> Nrf24Mini<SPI, DO, DELAY>
where
    SPI: SpiBus,
    DO: OutputPin,
    DELAY: DelayNs,
{
    /// Switch to TX mode and pulse the CE pin.
    ///
    /// The radio transmits exactly 1 payload from the TX FIFO on the falling edge.
    fn start_tx(&mut self) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self.ce_pin.set_low().map_err(Nrf24Error::Gpo)?;
        self._config_reg = self._config_reg.with_power(true).as_tx();
        self.write_register(registers::CONFIG, self._config_reg.into_bits())?;
        self.ce_pin.set_high().map_err(Nrf24Error::Gpo)?;
        self._delay_impl.delay_us(self._config.ce_pulse_us());
        self.ce_pin.set_low().map_err(Nrf24Error::Gpo)
    }

    /// Poll the STATUS register until a TX event occurs or the poll budget is exhausted.
    fn wait_for_tx(&mut self) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        let budget = self._config.poll_budget();
        self._last_poll_count = 0;
        while self._last_poll_count < budget {
            self.read_register(registers::STATUS)?;
            self._last_poll_count += 1;
            if self._status.tx_ds() {
                return Ok(());
            }
            if self._status.max_rt() {
                return Err(Nrf24Error::MaxRetries);
            }
        }
        Err(Nrf24Error::Timeout)
    }
}

impl<SPI, DO, DELAY> EsbRadio for Nrf24Mini<SPI, DO, DELAY>
where
    SPI: SpiBus,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type RadioErrorType = Nrf24Error<SPI::Error, DO::Error>;

    /// See [`EsbRadio::send()`] for implementation-agnostic detail.
    ///
    /// Both [`Nrf24Error::Timeout`] and [`Nrf24Error::MaxRetries`] are reported as `Ok(false)`.
    fn send(&mut self, buf: &[u8]) -> Result<bool, Self::RadioErrorType> {
        match self.transmit(buf) {
            Ok(()) => Ok(true),
            Err(Nrf24Error::Timeout) | Err(Nrf24Error::MaxRetries) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// See [`EsbRadio::transmit()`] for implementation-agnostic detail.
    ///
    /// The radio is left in TX mode (standby-I) afterward.
    /// Use [`EsbInit::reset()`](fn@crate::radio::prelude::EsbInit::reset)
    /// to return to RX mode.
    fn transmit(&mut self, buf: &[u8]) -> Result<(), Self::RadioErrorType> {
        let expected = self._config.payload_length();
        if buf.len() != expected as usize {
            return Err(Nrf24Error::InvalidLength {
                expected,
                actual: buf.len(),
            });
        }
        self.spi_write_buf(commands::W_TX_PAYLOAD, buf)?;
        if let Err(e) = self.start_tx() {
            // a payload left in the TX FIFO would go out with the next send
            let _ = self.ce_pin.set_low();
            let _ = self.flush_tx();
            return Err(e);
        }

        let result = self.wait_for_tx();
        // RX_DR is left for the receiving side to handle
        self.clear_status_flags(StatusFlags::from_bits(
            mnemonics::MASK_TX_DS | mnemonics::MASK_MAX_RT,
        ))?;
        match result {
            Ok(()) => {
                crate::log::trace!("TX done after {=u32} polls", self._last_poll_count);
            }
            Err(Nrf24Error::Timeout) => {
                crate::log::warning!("TX timed out after {=u32} polls", self._last_poll_count);
            }
            Err(_) => {}
        }
        result
    }

    fn last_poll_count(&self) -> u32 {
        self._last_poll_count
    }

    fn is_rx(&self) -> bool {
        self._config_reg.is_rx()
    }
}
