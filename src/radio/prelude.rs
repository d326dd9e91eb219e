//! This module defines the generic traits that may
//! need to imported to use radio implementations.
//!
//! Since rustc only compiles objects that are used,
//! it is convenient to import these traits with the `*` syntax.
//!
//! ```
//! use nrf24_mini::radio::prelude::*;
//! ```

use crate::types::StatusFlags;

use super::RadioConfig;

/// A trait to represent manipulation of [`StatusFlags`]
/// for an ESB capable transceiver.
pub trait EsbStatus {
    type StatusErrorType;

    /// Get the [`StatusFlags`] state that was cached from the latest SPI transaction.
    fn get_status_flags(&self, flags: &mut StatusFlags);

    /// Clear the radio's IRQ status flags
    ///
    /// Set any member of [`StatusFlags`] to `true` to clear the corresponding
    /// event. Setting any member of [`StatusFlags`] to `false` will leave
    /// the corresponding status flag untouched.
    fn clear_status_flags(&mut self, flags: StatusFlags) -> Result<(), Self::StatusErrorType>;

    /// Refresh the internal cache of status byte
    /// (which is also saved from every SPI transaction).
    ///
    /// Use [`EsbStatus::get_status_flags()`] to get the updated status flags.
    fn update(&mut self) -> Result<(), Self::StatusErrorType>;
}

/// A trait to represent manipulation of RX and TX FIFOs
/// for an ESB capable transceiver.
pub trait EsbFifo {
    type FifoErrorType;

    /// Flush the radio's RX FIFO.
    fn flush_rx(&mut self) -> Result<(), Self::FifoErrorType>;

    /// Flush the radio's TX FIFO.
    fn flush_tx(&mut self) -> Result<(), Self::FifoErrorType>;

    /// Clear all status flags, then flush both the TX and RX FIFOs (in that order).
    fn flush_buffers(&mut self) -> Result<(), Self::FifoErrorType>;
}

/// A trait to represent manipulation of the state of power
/// for an ESB capable transceiver.
pub trait EsbPower {
    type PowerErrorType;

    /// Power down the radio.
    ///
    /// Only the power bit is cleared; the rest of the radio's configuration
    /// is retained.
    ///
    /// <div class="warning">
    ///
    /// The nRF24L01 cannot receive nor transmit data when powered down.
    ///
    /// </div>
    fn power_down(&mut self) -> Result<(), Self::PowerErrorType>;

    /// Power up the radio.
    ///
    /// This wakes the radio from a sleep state, resulting in a
    /// power standby mode that allows the radio to receive or transmit data.
    /// Only the power bit is set; other configuration is left as it was
    /// (use [`EsbInit::reset()`] to restore the full configuration).
    ///
    /// To ensure proper operation, this function will `delay` after the radio is powered up.
    /// If the `delay` parameter is given a [`Some`] value, then the this function
    /// will wait for the specified number of microseconds. If `delay` is a [`None`]
    /// value, this function will wait for 1.5 milliseconds.
    fn power_up(&mut self, delay: Option<u32>) -> Result<(), Self::PowerErrorType>;

    /// Get the current (cached) state of the radio's power.
    ///
    /// Returns `true` if powered up or `false` if powered down.
    fn is_powered(&self) -> bool;
}

/// A trait to represent debug output
/// for an ESB capable transceiver.
pub trait EsbDetails {
    type DetailsErrorType;

    /// Print details about radio's current configuration.
    ///
    /// This should only be used for debugging development.
    /// Using this in production should be limited due to a significant increase in
    /// compile size.
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType>;
}

pub trait EsbInit {
    type ConfigErrorType;

    /// Initialize the radio's hardware.
    ///
    /// This idles the control pins (CSN high, CE low), waits 1.5 milliseconds
    /// for the radio to finish its power on reset, then calls [`EsbInit::reset()`].
    ///
    /// This function should only be called once after instantiating the radio object.
    fn init(&mut self) -> Result<(), Self::ConfigErrorType>;

    /// Write the stored configuration to the radio.
    ///
    /// This leaves the radio powered up in RX mode with both FIFOs flushed and
    /// all status flags cleared.
    fn reset(&mut self) -> Result<(), Self::ConfigErrorType>;

    /// Replace the stored configuration with the given `config`, then
    /// call [`EsbInit::reset()`].
    fn with_config(&mut self, config: &RadioConfig) -> Result<(), Self::ConfigErrorType>;

    /// Does the radio use the same address for transmitting and receiving (on pipe 0)?
    ///
    /// This reads back both addresses from the radio.
    fn is_symmetric_link(&mut self) -> Result<bool, Self::ConfigErrorType>;
}

/// A trait to represent transmission of payloads
/// for an ESB capable transceiver.
pub trait EsbRadio {
    type RadioErrorType;

    /// Blocking function to transmit a given payload.
    ///
    /// This transmits a payload (given by `buf`) and returns a bool describing if
    /// the transmission was successful or not.
    /// An unsuccessful transmission is not retried.
    ///
    /// See [`EsbRadio::transmit()`] for a more descriptive result.
    fn send(&mut self, buf: &[u8]) -> Result<bool, Self::RadioErrorType>;

    /// Blocking function to transmit a given payload.
    ///
    /// The `buf` length must equal the configured payload length.
    /// After starting the transmission, the STATUS register is polled until
    /// the TX Data Sent flag is asserted or the poll budget is exhausted.
    /// The TX Data Sent and Max Retries flags are cleared afterward regardless
    /// of the outcome.
    fn transmit(&mut self, buf: &[u8]) -> Result<(), Self::RadioErrorType>;

    /// The number of times the STATUS register was polled during the
    /// latest call to [`EsbRadio::transmit()`] (or [`EsbRadio::send()`]).
    fn last_poll_count(&self) -> u32;

    /// Is the radio in RX mode?
    fn is_rx(&self) -> bool;
}
