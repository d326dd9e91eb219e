use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};

use crate::radio::{prelude::EsbPower, Nrf24Error, Nrf24Mini};

use super::{registers, Config};

/// The time (in microseconds) the radio needs to go from power down mode
/// to standby mode (with an external crystal).
pub(super) const POWER_UP_DELAY_US: u32 = 1500;

impl<SPI, DO, DELAY> EsbPower for Nrf24Mini<SPI, DO, DELAY>
where
    SPI: SpiBus,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type PowerErrorType = Nrf24Error<SPI::Error, DO::Error>;

    /// In full power down mode (a sleep state), the radio will consume approximately
    /// 900nA (.0009mA).
    fn power_down(&mut self) -> Result<(), Self::PowerErrorType> {
        self.ce_pin.set_low().map_err(Nrf24Error::Gpo)?; // Guarantee CE is low on powerDown
        let config = Config::from_bits(self.read_register(registers::CONFIG)?);
        self._config_reg = config.with_power(false);
        self.write_register(registers::CONFIG, self._config_reg.into_bits())
    }

    fn power_up(&mut self, delay: Option<u32>) -> Result<(), Self::PowerErrorType> {
        self._config_reg = Config::from_bits(self.read_register(registers::CONFIG)?);
        // if not powered up then power up and wait for the radio to initialize
        if self._config_reg.power() {
            return Ok(());
        }
        self._config_reg = self._config_reg.with_power(true);
        self.write_register(registers::CONFIG, self._config_reg.into_bits())?;

        // There must be a delay of Tpd2stby after the radio leaves power down mode
        // before the CE is set high.
        match delay {
            Some(d) => {
                if d > 0 {
                    self._delay_impl.delay_us(d);
                }
            }
            None => self._delay_impl.delay_us(POWER_UP_DELAY_US),
        }
        Ok(())
    }

    /// Is the radio powered up?
    fn is_powered(&self) -> bool {
        self._config_reg.power()
    }
}
