use super::{commands, registers, Nrf24Error, Nrf24Mini};
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};

/// Raw register access.
///
/// Register offsets are masked to 5 bits. Writing to reserved or read-only
/// registers is not prevented; the radio decides what happens.
impl<SPI, DO, DELAY> Nrf24Mini<SPI, DO, DELAY>
where
    SPI: SpiBus,
    DO: OutputPin,
    DELAY: DelayNs,
{
    /// Read the value of a single byte register.
    pub fn read_register(&mut self, address: u8) -> Result<u8, Nrf24Error<SPI::Error, DO::Error>> {
        self.spi_read(
            1,
            commands::R_REGISTER | (address & registers::ADDRESS_MASK),
        )?;
        Ok(self._buf[1])
    }

    /// Write a `value` to a single byte register.
    pub fn write_register(
        &mut self,
        address: u8,
        value: u8,
    ) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self.spi_write_byte(
            commands::W_REGISTER | (address & registers::ADDRESS_MASK),
            value,
        )
    }

    /// Write a multi-byte register, like [`registers::RX_ADDR_P0`] or [`registers::TX_ADDR`].
    ///
    /// The `bytes` are shifted out in the given order (LSByte first for addresses).
    pub fn write_address(
        &mut self,
        address: u8,
        bytes: &[u8],
    ) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self.spi_write_buf(
            commands::W_REGISTER | (address & registers::ADDRESS_MASK),
            bytes,
        )
    }

    /// Read a multi-byte register into `bytes`.
    ///
    /// At most 5 bytes are read (the widest register).
    pub fn read_address(
        &mut self,
        address: u8,
        bytes: &mut [u8],
    ) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        let len = bytes.len().min(5);
        self.spi_read(
            len as u8,
            commands::R_REGISTER | (address & registers::ADDRESS_MASK),
        )?;
        bytes[..len].copy_from_slice(&self._buf[1..(len + 1)]);
        Ok(())
    }

    /// Send a single byte command (with no payload), like [`commands::FLUSH_TX`].
    pub fn send_command(&mut self, command: u8) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self.spi_read(0, command)
    }
}
