use crate::radio::nrf24::bit_fields::{Config, SetupRf};
use crate::{CrcLength, DataRate, PaLevel};

/// An object to configure the radio.
///
/// This struct follows a builder pattern. Since all fields are private, users should
/// start with the [`RadioConfig::default`] constructor, then mutate the object accordingly.
/// ```
/// use nrf24_mini::radio::RadioConfig;
///
/// let config = RadioConfig::default()
///     .with_channel(42)
///     .with_address(&[0xE7, 0xE7, 0xE7]);
/// assert_eq!(config.channel(), 42);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RadioConfig {
    pub(crate) config_reg: Config,
    pub(crate) setup_rf: SetupRf,
    channel: u8,
    payload_length: u8,
    address: [u8; 5],
    address_length: u8,
    poll_budget: u32,
    ce_pulse_us: u32,
}

impl Default for RadioConfig {
    /// Instantiate a [`RadioConfig`] object with library defaults.
    ///
    /// | feature | default value |
    /// |--------:|:--------------|
    /// | [`RadioConfig::channel()`] | `1` |
    /// | [`RadioConfig::address()`] | `[0x87, 0xC1, 0xB9]` |
    /// | [`RadioConfig::payload_length()`] | `10` |
    /// | [`RadioConfig::crc_length()`] | [`CrcLength::Bit8`] |
    /// | [`RadioConfig::data_rate()`] | [`DataRate::Kbps250`] |
    /// | [`RadioConfig::pa_level()`] | [`PaLevel::Max`] |
    /// | [`RadioConfig::lna_enable()`] | `false` |
    /// | [`RadioConfig::poll_budget()`] | `10000` |
    /// | [`RadioConfig::ce_pulse_us()`] | `150` |
    ///
    /// Auto-ack and auto-retransmission are always disabled,
    /// and only pipe 0 is enabled for receiving.
    fn default() -> Self {
        Self {
            /*
               - all events enabled for IRQ pin
               - 8 bit CRC
               - powered up
               - RX mode
            */
            config_reg: Config::from_bits(0x0B),
            /*
                - 250 Kbps data rate
                - Max PA level
                - LNA disabled
            */
            setup_rf: SetupRf::from_bits(0x26),
            channel: 1,
            payload_length: 10,
            address: [0x87, 0xC1, 0xB9, 0, 0],
            address_length: 3,
            poll_budget: 10000,
            ce_pulse_us: 150,
        }
    }
}

impl RadioConfig {
    /// The shortest CE pulse (in microseconds) that starts a transmission.
    pub const MIN_CE_PULSE_US: u32 = 10;

    /// Returns the CONFIG register value written by
    /// [`EsbInit::reset()`](fn@crate::radio::prelude::EsbInit::reset).
    pub const fn mode(&self) -> u8 {
        self.config_reg.into_bits()
    }

    /// Returns the value set by [`RadioConfig::with_crc_length()`].
    pub const fn crc_length(&self) -> CrcLength {
        self.config_reg.crc_length()
    }

    /// The Cyclical Redundancy Checksum (CRC) length.
    pub fn with_crc_length(self, length: CrcLength) -> Self {
        let new_config = self.config_reg.with_crc_length(length);
        Self {
            config_reg: new_config,
            ..self
        }
    }

    /// Returns the RF_SETUP register value written by
    /// [`EsbInit::reset()`](fn@crate::radio::prelude::EsbInit::reset).
    pub const fn rf_setup(&self) -> u8 {
        self.setup_rf.into_bits()
    }

    /// Returns the value set by [`RadioConfig::with_data_rate()`].
    pub const fn data_rate(&self) -> DataRate {
        self.setup_rf.data_rate()
    }

    /// The Data Rate (over the air).
    ///
    /// Both ends of the link must use the same data rate.
    pub fn with_data_rate(self, data_rate: DataRate) -> Self {
        let new_config = self.setup_rf.with_data_rate(data_rate);
        Self {
            setup_rf: new_config,
            ..self
        }
    }

    /// Returns the value set by [`RadioConfig::with_pa_level()`].
    pub const fn pa_level(&self) -> PaLevel {
        self.setup_rf.pa_level()
    }

    /// The Power Amplitude (PA) level.
    pub fn with_pa_level(self, level: PaLevel) -> Self {
        let new_config = self.setup_rf.with_pa_level(level);
        Self {
            setup_rf: new_config,
            ..self
        }
    }

    /// Returns the value set by [`RadioConfig::with_lna_enable()`].
    pub const fn lna_enable(&self) -> bool {
        self.setup_rf.lna_enable()
    }

    /// Enable or disable the chip's Low Noise Amplifier (LNA) feature.
    ///
    /// This value may not be respected depending on the radio module used.
    /// Consult the radio's manufacturer for accurate details.
    pub fn with_lna_enable(self, enable: bool) -> Self {
        let new_config = self.setup_rf.with_lna_enable(enable);
        Self {
            setup_rf: new_config,
            ..self
        }
    }

    /// Returns the value set by [`RadioConfig::with_channel()`].
    pub const fn channel(&self) -> u8 {
        self.channel
    }

    /// Set the channel (over the air frequency).
    ///
    /// This value is clamped to range [0, 125].
    /// The radio's frequency can be determined by the following equation:
    /// ```text
    /// frequency (in MHz) = channel + 2400
    /// ```
    pub fn with_channel(self, channel: u8) -> Self {
        Self {
            channel: channel.min(125),
            ..self
        }
    }

    /// Returns the value set by [`RadioConfig::with_payload_length()`].
    pub const fn payload_length(&self) -> u8 {
        self.payload_length
    }

    /// The fixed payload length (in bytes) of every packet.
    ///
    /// This value is clamped to range [1, 32].
    /// [`EsbRadio::send()`](fn@crate::radio::prelude::EsbRadio::send)
    /// only accepts buffers of exactly this length.
    pub fn with_payload_length(self, value: u8) -> Self {
        Self {
            payload_length: value.clamp(1, 32),
            ..self
        }
    }

    /// Returns the link address set by [`RadioConfig::with_address()`].
    pub fn address(&self) -> &[u8] {
        &self.address[..self.address_length as usize]
    }

    /// Returns the length of [`RadioConfig::address()`].
    pub const fn address_length(&self) -> u8 {
        self.address_length
    }

    /// The link address, used for both transmitting and receiving (on pipe 0).
    ///
    /// The address bytes are written to the radio in the given order.
    /// Addresses longer than 5 bytes are truncated.
    /// Addresses shorter than 3 bytes are ignored (the previous address is kept).
    pub fn with_address(self, address: &[u8]) -> Self {
        let len = address.len().min(5);
        if len < 3 {
            return self;
        }
        let mut new_address = [0u8; 5];
        new_address[..len].copy_from_slice(&address[..len]);
        Self {
            address: new_address,
            address_length: len as u8,
            ..self
        }
    }

    /// Returns the value set by [`RadioConfig::with_poll_budget()`].
    pub const fn poll_budget(&self) -> u32 {
        self.poll_budget
    }

    /// The maximum number of STATUS register reads made while waiting for a
    /// transmission to complete.
    ///
    /// This is an iteration count, not a duration. The resulting timeout depends
    /// on the SPI clock and the CPU speed. A value of 0 is treated as 1.
    pub fn with_poll_budget(self, budget: u32) -> Self {
        Self {
            poll_budget: budget.max(1),
            ..self
        }
    }

    /// Returns the value set by [`RadioConfig::with_ce_pulse_us()`].
    pub const fn ce_pulse_us(&self) -> u32 {
        self.ce_pulse_us
    }

    /// How long (in microseconds) the CE pin is held active to start a transmission.
    ///
    /// This value is never less than [`RadioConfig::MIN_CE_PULSE_US`].
    pub fn with_ce_pulse_us(self, micros: u32) -> Self {
        Self {
            ce_pulse_us: micros.max(Self::MIN_CE_PULSE_US),
            ..self
        }
    }
}
