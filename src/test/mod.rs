extern crate std;
use crate::radio::{Nrf24Mini, RadioConfig};
use embedded_hal_mock::eh1::{
    delay::NoopDelay,
    digital::{Mock as PinMock, State as PinState, Transaction as PinTransaction},
    spi::{Mock as SpiMock, Transaction as SpiTransaction},
};
use std::vec::Vec;


/// Takes an indefinite repetition of a tuple of 2 vectors: `(expected_data, response_data)`
/// and generates an array of `SpiTransaction`s.
///
/// Every SPI transaction is a single in-place transfer followed by a flush.
///
/// NOTE: This macro is only used to generate code in unit tests (for this crate only).
#[macro_export]
macro_rules! spi_test_expects {
    ($( ($expected:expr , $response:expr $(,)? ) , ) + ) => {
        [
            $(
                SpiTransaction::transfer_in_place($expected, $response),
                SpiTransaction::flush(),
            )*
        ]
    }
}

/// The CSN pin toggles expected for `count` SPI transactions.
pub fn csn_test_expects(count: usize) -> Vec<PinTransaction> {
    let mut expectations = Vec::with_capacity(count * 2);
    for _ in 0..count {
        expectations.push(PinTransaction::set(PinState::Low));
        expectations.push(PinTransaction::set(PinState::High));
    }
    expectations
}

/// A tuple struct to encapsulate objects used to mock [`Nrf24Mini`],
pub struct MockRadio(
    pub Nrf24Mini<SpiMock<u8>, PinMock, NoopDelay>,
    pub SpiMock<u8>,
    pub PinMock,
    pub PinMock,
);

/// Create a mock objects using the given expectations.
///
/// The `csn_expectations` should account for every SPI transaction
/// (see [`csn_test_expects()`]).
pub fn mk_radio(
    csn_expectations: &[PinTransaction],
    ce_expectations: &[PinTransaction],
    spi_expectations: &[SpiTransaction<u8>],
) -> MockRadio {
    mk_radio_with_config(
        csn_expectations,
        ce_expectations,
        spi_expectations,
        RadioConfig::default(),
    )
}

pub fn mk_radio_with_config(
    csn_expectations: &[PinTransaction],
    ce_expectations: &[PinTransaction],
    spi_expectations: &[SpiTransaction<u8>],
    config: RadioConfig,
) -> MockRadio {
    let spi = SpiMock::new(spi_expectations);
    let csn_pin = PinMock::new(csn_expectations);
    let ce_pin = PinMock::new(ce_expectations);
    let radio = Nrf24Mini::new(
        spi.clone(),
        csn_pin.clone(),
        ce_pin.clone(),
        NoopDelay,
        config,
    );
    MockRadio(radio, spi, csn_pin, ce_pin)
}
