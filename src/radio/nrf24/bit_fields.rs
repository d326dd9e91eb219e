use bitfield_struct::bitfield;

use crate::{CrcLength, DataRate, PaLevel, StatusFlags};

/// The CONFIG register.
///
/// The IRQ mask bits are active high: an asserted bit hides the event from the IRQ pin.
#[bitfield(u8, order = Msb)]
pub(crate) struct Config {
    #[bits(1)]
    _padding: u8,

    pub mask_rx_dr: bool,

    pub mask_tx_ds: bool,

    pub mask_max_rt: bool,

    #[bits(2, access = None, default = 2)]
    crc_length: u8,

    #[bits(1, default = true)]
    pub power: bool,

    #[bits(1, default = true)]
    pub is_rx: bool,
}

impl Config {
    pub(crate) const CRC_MASK: u8 = 0b1100;

    pub const fn crc_length(&self) -> CrcLength {
        CrcLength::from_bits(self.into_bits() & Self::CRC_MASK)
    }

    pub fn with_crc_length(self, length: CrcLength) -> Self {
        let new_val = self.into_bits() & !Self::CRC_MASK | length.into_bits();
        Self::from_bits(new_val)
    }

    #[cfg(any(
        test,
        all(feature = "defmt", target_os = "none"),
        all(feature = "std", not(target_os = "none"))
    ))]
    pub const fn irq_mask(&self) -> u8 {
        self.into_bits() & StatusFlags::IRQ_MASK
    }

    pub fn as_rx(self) -> Self {
        Self::from_bits(self.into_bits() | 1)
    }

    pub fn as_tx(self) -> Self {
        Self::from_bits(self.into_bits() & !1)
    }
}

/// The RF_SETUP register.
///
/// The data rate is encoded by 2 non-adjacent bits (RF_DR_LOW and RF_DR_HIGH),
/// so it is only accessible through masks.
#[bitfield(u8, order = Msb)]
pub(crate) struct SetupRf {
    #[bits(2)]
    _padding: u8,

    #[bits(3, access = None, default = 4)]
    data_rate: u8,

    #[bits(2, access = None, default = 3)]
    pa_level: u8,

    /// Only meaningful on non-plus nRF24L01 and Si24R1 chips.
    pub lna_enable: bool,
}

impl SetupRf {
    pub const fn data_rate(&self) -> DataRate {
        DataRate::from_bits(self.into_bits())
    }

    pub fn with_data_rate(self, data_rate: DataRate) -> Self {
        let new_val = self.into_bits() & !DataRate::MASK;
        Self::from_bits(new_val | data_rate.into_bits())
    }

    pub const fn pa_level(&self) -> PaLevel {
        PaLevel::from_bits(self.into_bits())
    }

    pub fn with_pa_level(self, level: PaLevel) -> Self {
        let new_val = self.into_bits() & !PaLevel::MASK;
        Self::from_bits(new_val | level.into_bits())
    }
}
