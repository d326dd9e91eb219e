use super::{Nrf24Error, Nrf24Mini};
use crate::radio::prelude::EsbDetails;
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};

#[cfg(any(
    all(feature = "defmt", target_os = "none"),
    all(feature = "std", not(target_os = "none"))
))]
use super::{
    bit_fields::{Config, SetupRf},
    registers,
};
#[cfg(any(
    all(feature = "defmt", target_os = "none"),
    all(feature = "std", not(target_os = "none"))
))]
use crate::radio::prelude::EsbPower;

#[cfg(all(feature = "std", not(target_os = "none")))]
extern crate std;

impl<SPI, DO, DELAY> EsbDetails for Nrf24Mini<SPI, DO, DELAY>
where
    SPI: SpiBus,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type DetailsErrorType = Nrf24Error<SPI::Error, DO::Error>;

    #[cfg(feature = "defmt")]
    #[cfg(target_os = "none")]
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType> {
        let channel = self.read_register(registers::RF_CH)?;
        defmt::println!(
            "Channel___________________{=u8} ~ {=u16} MHz",
            channel,
            channel as u16 + 2400u16
        );

        let rf_setup = SetupRf::from_bits(self.read_register(registers::RF_SETUP)?);
        defmt::println!("RF Data Rate______________{}", rf_setup.data_rate());
        defmt::println!("RF Power Amplifier________{}", rf_setup.pa_level());
        defmt::println!("RF LNA enabled____________{=bool}", rf_setup.lna_enable());

        self._config_reg = Config::from_bits(self.read_register(registers::CONFIG)?);
        defmt::println!(
            "CRC Length________________{}",
            self._config_reg.crc_length()
        );

        let address_length = self.read_register(registers::SETUP_AW)? + 2;
        defmt::println!("Address length____________{=u8} bytes", address_length);
        defmt::println!(
            "Payload length____________{=u8} bytes",
            self.read_register(registers::RX_PW_P0)?
        );
        defmt::println!(
            "Auto Acknowledgment_______0b{=0..8}",
            self.read_register(registers::EN_AA)?
        );
        defmt::println!(
            "Auto retry attempts_______{=u8} maximum",
            self.read_register(registers::SETUP_RETR)? & 0x0F
        );

        let observer = self.read_register(registers::OBSERVE_TX)?;
        defmt::println!(
            "Packets lost\n    on current channel____{=u8}",
            observer >> 4
        );
        defmt::println!(
            "FIFO status_______________0b{=0..8}",
            self.read_register(registers::FIFO_STATUS)?
        );

        defmt::println!(
            "IRQ mask__________________0b{=0..8}",
            self._config_reg.irq_mask()
        );
        defmt::println!("{}", self._status);
        defmt::println!("Last TX poll count________{=u32}", self._last_poll_count);

        let rx = defmt::intern!("R");
        let tx = defmt::intern!("T");
        defmt::println!(
            "Primary Mode______________{=istr}X",
            if self._config_reg.is_rx() { rx } else { tx }
        );
        defmt::println!("Powered Up________________{=bool}", self.is_powered());

        let len = (address_length as usize).clamp(3, 5);
        let mut address = [0u8; 5];
        self.read_address(registers::TX_ADDR, &mut address[..len])?;
        defmt::println!("TX address________________{=[u8]:02X}", &address[..len]);
        self.read_address(registers::RX_ADDR_P0, &mut address[..len])?;
        defmt::println!("RX address (pipe 0)_______{=[u8]:02X}", &address[..len]);
        Ok(())
    }

    #[cfg(not(any(
        all(feature = "defmt", target_os = "none"),
        all(feature = "std", not(target_os = "none"))
    )))]
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType> {
        Ok(())
    }

    #[cfg(not(target_os = "none"))]
    #[cfg(feature = "std")]
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType> {
        let channel = self.read_register(registers::RF_CH)?;
        std::println!(
            "Channel___________________{channel} ~ {} MHz",
            channel as u16 + 2400u16
        );

        let rf_setup = SetupRf::from_bits(self.read_register(registers::RF_SETUP)?);
        std::println!("RF Data Rate______________{}", rf_setup.data_rate());
        std::println!("RF Power Amplifier________{}", rf_setup.pa_level());
        std::println!("RF LNA enabled____________{}", rf_setup.lna_enable());

        self._config_reg = Config::from_bits(self.read_register(registers::CONFIG)?);
        std::println!(
            "CRC Length________________{}",
            self._config_reg.crc_length()
        );

        let address_length = self.read_register(registers::SETUP_AW)? + 2;
        std::println!("Address length____________{address_length} bytes");
        std::println!(
            "Payload length____________{} bytes",
            self.read_register(registers::RX_PW_P0)?
        );
        std::println!(
            "Auto Acknowledgment_______{:#010b}",
            self.read_register(registers::EN_AA)?
        );
        std::println!(
            "Auto retry attempts_______{} maximum",
            self.read_register(registers::SETUP_RETR)? & 0x0F
        );

        let observer = self.read_register(registers::OBSERVE_TX)?;
        std::println!("Packets lost\n    on current channel____{}", observer >> 4);
        std::println!(
            "FIFO status_______________{:#010b}",
            self.read_register(registers::FIFO_STATUS)?
        );

        std::println!(
            "IRQ mask__________________{:#010b}",
            self._config_reg.irq_mask()
        );
        std::println!("{}", self._status);
        std::println!("Last TX poll count________{}", self._last_poll_count);

        std::println!(
            "Primary Mode______________{}X",
            if self._config_reg.is_rx() { "R" } else { "T" }
        );
        std::println!("Powered Up________________{}", self.is_powered());

        let len = (address_length as usize).clamp(3, 5);
        let mut address = [0u8; 5];
        self.read_address(registers::TX_ADDR, &mut address[..len])?;
        std::println!("TX address________________{:02X?}", &address[..len]);
        self.read_address(registers::RX_ADDR_P0, &mut address[..len])?;
        std::println!("RX address (pipe 0)_______{:02X?}", &address[..len]);
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::EsbDetails;

    #[cfg(not(feature = "std"))]
    #[test]
    fn print_nothing() {
        let mocks = crate::test::mk_radio(&[], &[], &[]);
        let (mut radio, mut spi, mut csn_pin, mut ce_pin) = (mocks.0, mocks.1, mocks.2, mocks.3);
        assert!(radio.print_details().is_ok());
        spi.done();
        csn_pin.done();
        ce_pin.done();
    }

    #[cfg(feature = "std")]
    #[test]
    fn print_from_registers() {
        use crate::{
            radio::prelude::EsbInit,
            test::sim::{mk_sim_radio, Chip},
        };

        let chip = Chip::shared();
        let mut radio = mk_sim_radio(&chip);
        radio.init().unwrap();
        let frames = chip.borrow().frames.len();
        assert!(radio.print_details().is_ok());
        // only reads; the configuration is untouched
        let chip = chip.borrow();
        assert!(chip.frames.len() > frames);
        assert!(chip.frames[frames..].iter().all(|f| f[0] & 0xE0 == 0));
        assert_eq!(chip.regs[0], 0x0B);
    }
}
