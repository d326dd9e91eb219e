//! Internal logging macros.
//!
//! These forward to [`defmt`](https://docs.rs/defmt) when the `defmt` feature is
//! enabled on a bare-metal target. Otherwise they expand to nothing.

macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(all(feature = "defmt", target_os = "none"))]
        defmt::trace!($($arg)*);
    };
}

macro_rules! debug {
    ($($arg:tt)*) => {
        #[cfg(all(feature = "defmt", target_os = "none"))]
        defmt::debug!($($arg)*);
    };
}

macro_rules! warning {
    ($($arg:tt)*) => {
        #[cfg(all(feature = "defmt", target_os = "none"))]
        defmt::warn!($($arg)*);
    };
}

pub(crate) use {debug, trace, warning};
