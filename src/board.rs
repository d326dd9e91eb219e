//! Board-level wiring: which GPIO lines drive the radio and how the
//! platform brings up those lines and the SPI bus.

use core::{
    fmt::{Display, Formatter, Result},
    str::FromStr,
};

use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};

/// An collection of error types to describe an invalid board configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// No [`BoardLayout`] was selected.
    NoLayout,
    /// More than one [`BoardLayout`] was selected.
    MultipleLayouts,
    /// A layout name did not match any [`BoardLayout`].
    UnknownLayout,
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for ConfigError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            ConfigError::NoLayout => defmt::write!(fmt, "no pin layout selected"),
            ConfigError::MultipleLayouts => defmt::write!(fmt, "more than one pin layout selected"),
            ConfigError::UnknownLayout => defmt::write!(fmt, "unknown pin layout"),
        }
    }
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            ConfigError::NoLayout => write!(f, "no pin layout selected"),
            ConfigError::MultipleLayouts => write!(f, "more than one pin layout selected"),
            ConfigError::UnknownLayout => write!(f, "unknown pin layout"),
        }
    }
}

/// The known boards carrying the radio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BoardLayout {
    /// The hand-wired prototype: CSN on line 7, CE on line 8.
    Prototype,
    /// The first PCB revision: CSN on line 6, CE on line 5.
    Pcb1,
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for BoardLayout {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            BoardLayout::Prototype => defmt::write!(fmt, "prototype"),
            BoardLayout::Pcb1 => defmt::write!(fmt, "pcb1"),
        }
    }
}

impl Display for BoardLayout {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            BoardLayout::Prototype => write!(f, "prototype"),
            BoardLayout::Pcb1 => write!(f, "pcb1"),
        }
    }
}

impl FromStr for BoardLayout {
    type Err = ConfigError;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("prototype") {
            Ok(BoardLayout::Prototype)
        } else if s.eq_ignore_ascii_case("pcb1") {
            Ok(BoardLayout::Pcb1)
        } else {
            Err(ConfigError::UnknownLayout)
        }
    }
}

/// The pair of digital output lines wired to the radio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinAssignment {
    csn: u8,
    ce: u8,
}

impl PinAssignment {
    /// Select the pins from exactly one [`BoardLayout`].
    ///
    /// ```
    /// use nrf24_mini::board::{BoardLayout, ConfigError, PinAssignment};
    ///
    /// let pins = PinAssignment::from_layouts(&[BoardLayout::Pcb1]).unwrap();
    /// assert_eq!((pins.csn(), pins.ce()), (6, 5));
    /// assert_eq!(PinAssignment::from_layouts(&[]), Err(ConfigError::NoLayout));
    /// ```
    pub fn from_layouts(layouts: &[BoardLayout]) -> core::result::Result<Self, ConfigError> {
        match layouts {
            [] => Err(ConfigError::NoLayout),
            [layout] => Ok(Self::from(*layout)),
            _ => Err(ConfigError::MultipleLayouts),
        }
    }

    /// The line number of the radio's CSN (Chip Select Not) pin.
    pub const fn csn(&self) -> u8 {
        self.csn
    }

    /// The line number of the radio's CE (Chip Enable) pin.
    pub const fn ce(&self) -> u8 {
        self.ce
    }
}

impl From<BoardLayout> for PinAssignment {
    fn from(layout: BoardLayout) -> Self {
        match layout {
            BoardLayout::Prototype => Self { csn: 7, ce: 8 },
            BoardLayout::Pcb1 => Self { csn: 6, ce: 5 },
        }
    }
}

/// The SPI clock as a divisor of the platform's core clock.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum SpiClock {
    Div2,
    Div4,
    Div8,
    Div16,
    Div32,
    /// 250 kHz on a 16 MHz core.
    #[default]
    Div64,
    Div128,
}

impl SpiClock {
    pub const fn divisor(&self) -> u32 {
        match self {
            SpiClock::Div2 => 2,
            SpiClock::Div4 => 4,
            SpiClock::Div8 => 8,
            SpiClock::Div16 => 16,
            SpiClock::Div32 => 32,
            SpiClock::Div64 => 64,
            SpiClock::Div128 => 128,
        }
    }

    /// The resulting SPI clock frequency (in Hz) for a given core clock.
    pub const fn frequency(&self, core_hz: u32) -> u32 {
        core_hz / self.divisor()
    }
}

/// The platform services needed to bring up the radio.
///
/// embedded-hal has no traits for pin direction or bus setup, so an
/// implementation of this trait bridges the board's HAL to
/// [`Nrf24Mini::initialize()`](fn@crate::radio::Nrf24Mini::initialize).
pub trait Platform {
    type Spi: SpiBus;
    type Pin: OutputPin;
    type Delay: DelayNs;

    /// Configure `line` as a digital output.
    fn output_pin(&mut self, line: u8) -> Self::Pin;

    /// Initialize the SPI bus (mode 0, MSB first) at the given `clock`.
    fn spi_bus(&mut self, clock: SpiClock) -> Self::Spi;

    fn delay(&mut self) -> Self::Delay;
}
