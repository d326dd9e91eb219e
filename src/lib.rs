#![doc = include_str!("../README.md")]
//!
//! ## Basic API
//!
//! - [`PinAssignment::from_layouts()`](fn@crate::board::PinAssignment::from_layouts)
//! - [`Nrf24Mini::initialize()`](fn@crate::radio::Nrf24Mini::initialize)
//! - [`Nrf24Mini::new()`](fn@crate::radio::Nrf24Mini::new)
//! - [`Nrf24Mini::init()`](radio/struct.Nrf24Mini.html#method.init)
//! - [`Nrf24Mini::send()`](radio/struct.Nrf24Mini.html#method.send)
//! - [`Nrf24Mini::transmit()`](radio/struct.Nrf24Mini.html#method.transmit)
//! - [`Nrf24Mini::is_symmetric_link()`](radio/struct.Nrf24Mini.html#method.is_symmetric_link)
//!
//! ## Advanced API
//!
//! - [`Nrf24Mini::read_register()`](fn@crate::radio::Nrf24Mini::read_register)
//! - [`Nrf24Mini::write_register()`](fn@crate::radio::Nrf24Mini::write_register)
//! - [`Nrf24Mini::read_address()`](fn@crate::radio::Nrf24Mini::read_address)
//! - [`Nrf24Mini::write_address()`](fn@crate::radio::Nrf24Mini::write_address)
//! - [`Nrf24Mini::send_command()`](fn@crate::radio::Nrf24Mini::send_command)
//! - [`Nrf24Mini::flush_buffers()`](radio/struct.Nrf24Mini.html#method.flush_buffers)
//! - [`Nrf24Mini::update()`](radio/struct.Nrf24Mini.html#method.update)
//! - [`Nrf24Mini::get_status_flags()`](radio/struct.Nrf24Mini.html#method.get_status_flags)
//! - [`Nrf24Mini::clear_status_flags()`](radio/struct.Nrf24Mini.html#method.clear_status_flags)
//! - [`Nrf24Mini::last_poll_count()`](radio/struct.Nrf24Mini.html#method.last_poll_count)
//! - [`Nrf24Mini::print_details()`](radio/struct.Nrf24Mini.html#method.print_details)
//!
//! ## Configuration API
//!
//! - [`RadioConfig`](struct@crate::radio::RadioConfig)
//! - [`Nrf24Mini::with_config()`](radio/struct.Nrf24Mini.html#method.with_config)
//! - [`Nrf24Mini::reset()`](radio/struct.Nrf24Mini.html#method.reset)
//! - [`Nrf24Mini::power_up()`](radio/struct.Nrf24Mini.html#method.power_up)
//! - [`Nrf24Mini::power_down()`](radio/struct.Nrf24Mini.html#method.power_down)
//! - [`Nrf24Mini::is_powered()`](radio/struct.Nrf24Mini.html#method.is_powered)
//!
#![no_std]

mod log;
mod types;
pub use types::{CrcLength, DataRate, PaLevel, StatusFlags};
pub mod board;
pub mod radio;

#[cfg(test)]
mod test;
