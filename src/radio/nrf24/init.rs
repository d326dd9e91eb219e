use super::{registers, Nrf24Error, Nrf24Mini};
use crate::{
    board::{PinAssignment, Platform, SpiClock},
    radio::{
        prelude::{EsbFifo, EsbInit},
        RadioConfig,
    },
};
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};

/// The time (in microseconds) the radio needs after its supply is stable
/// before it accepts SPI commands.
const POWER_ON_DELAY_US: u32 = 1500;

impl<SPI, DO, DELAY> Nrf24Mini<SPI, DO, DELAY>
where
    SPI: SpiBus,
    DO: OutputPin,
    DELAY: DelayNs,
{
    /// Bring up the radio on the given `platform`.
    ///
    /// This configures the `pins` as digital outputs, initializes the SPI bus at
    /// [`SpiClock::default()`], and then calls [`EsbInit::init()`] with the given `config`.
    /// ```ignore
    /// let pins = PinAssignment::from_layouts(&[BoardLayout::Pcb1])?;
    /// let mut radio = Nrf24Mini::initialize(&mut board, pins, RadioConfig::default())?;
    /// ```
    pub fn initialize<P>(
        platform: &mut P,
        pins: PinAssignment,
        config: RadioConfig,
    ) -> Result<Self, Nrf24Error<SPI::Error, DO::Error>>
    where
        P: Platform<Spi = SPI, Pin = DO, Delay = DELAY>,
    {
        let csn_pin = platform.output_pin(pins.csn());
        let ce_pin = platform.output_pin(pins.ce());
        let spi = platform.spi_bus(SpiClock::default());
        let delay_impl = platform.delay();
        let mut radio = Self::new(spi, csn_pin, ce_pin, delay_impl, config);
        radio.init()?;
        Ok(radio)
    }
}

impl<SPI, DO, DELAY> EsbInit for Nrf24Mini<SPI, DO, DELAY>
where
    SPI: SpiBus,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type ConfigErrorType = Nrf24Error<SPI::Error, DO::Error>;

    /// Initialize the radio's hardware using the [`SpiBus`] and [`OutputPin`]s given
    /// to [`Nrf24Mini::new()`].
    fn init(&mut self) -> Result<(), Self::ConfigErrorType> {
        self.release_pins()?;
        // No SPI commands before the power on reset has finished.
        self._delay_impl.delay_us(POWER_ON_DELAY_US);
        self.reset()
    }

    fn reset(&mut self) -> Result<(), Self::ConfigErrorType> {
        let config = self._config;
        crate::log::debug!(
            "reset: channel {=u8}, payload length {=u8}",
            config.channel(),
            config.payload_length()
        );

        // Set CONFIG register:
        //      Set all IRQ events on IRQ pin
        //      Set CRC length
        //      Power up
        //      Enable PRX
        self._config_reg = config.config_reg.with_power(true).as_rx();
        self.write_register(registers::CONFIG, self._config_reg.into_bits())?;

        // no auto-ack on any pipe
        self.write_register(registers::EN_AA, 0)?;
        // only pipe 0 receives
        self.write_register(registers::EN_RXADDR, 1)?;
        self.write_register(registers::SETUP_AW, config.address_length() - 2)?;
        // no auto-retransmit
        self.write_register(registers::SETUP_RETR, 0)?;
        self.write_register(registers::RF_CH, config.channel())?;
        self.write_register(registers::RF_SETUP, config.rf_setup())?;
        self.write_register(registers::RX_PW_P0, config.payload_length())?;

        // the same address for both directions
        self.write_address(registers::RX_ADDR_P0, config.address())?;
        self.write_address(registers::TX_ADDR, config.address())?;

        self.flush_buffers()
    }

    fn with_config(&mut self, config: &RadioConfig) -> Result<(), Self::ConfigErrorType> {
        self._config = *config;
        self.reset()
    }

    fn is_symmetric_link(&mut self) -> Result<bool, Self::ConfigErrorType> {
        let len = self._config.address_length() as usize;
        let mut rx_address = [0u8; 5];
        let mut tx_address = [0u8; 5];
        self.read_address(registers::RX_ADDR_P0, &mut rx_address[..len])?;
        self.read_address(registers::TX_ADDR, &mut tx_address[..len])?;
        Ok(rx_address == tx_address)
    }
}
