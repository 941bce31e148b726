//! Unified Logging Macros for knx-dpt
//!
//! This module provides a unified logging interface that automatically
//! selects between `defmt::` and `log::` based on the active feature flags.
//! Without either feature the macro compiles to nothing but still
//! type-checks its arguments.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::dpt_log;
//!
//! dpt_log!(debug, "DPT {} rejected {} bytes", id, len);
//! dpt_log!(warn, "Duplicate ordinal {}", ordinal);
//! dpt_log!(trace, "Registered enumeration value {}", name);
//! ```
//!
//! # Feature Flags
//!
//! - `defmt` - Uses `defmt::` (preferred on embedded targets)
//! - `log` - Uses `log::` (hosted applications)
//! - neither - logging is compiled out

/// Unified logging macro - automatically selects defmt:: or log:: based on features
///
/// The format string must stay compatible with both backends, i.e. only
/// plain `{}` placeholders.
#[macro_export]
#[cfg(feature = "defmt")]
macro_rules! dpt_log {
    (info, $($arg:tt)*) => { defmt::info!($($arg)*) };
    (debug, $($arg:tt)*) => { defmt::debug!($($arg)*) };
    (warn, $($arg:tt)*) => { defmt::warn!($($arg)*) };
    (error, $($arg:tt)*) => { defmt::error!($($arg)*) };
    (trace, $($arg:tt)*) => { defmt::trace!($($arg)*) };
}

#[macro_export]
#[cfg(all(feature = "log", not(feature = "defmt")))]
macro_rules! dpt_log {
    (info, $($arg:tt)*) => { log::info!($($arg)*) };
    (debug, $($arg:tt)*) => { log::debug!($($arg)*) };
    (warn, $($arg:tt)*) => { log::warn!($($arg)*) };
    (error, $($arg:tt)*) => { log::error!($($arg)*) };
    (trace, $($arg:tt)*) => { log::trace!($($arg)*) };
}

#[macro_export]
#[cfg(not(any(feature = "defmt", feature = "log")))]
macro_rules! dpt_log {
    ($level:ident, $($arg:tt)*) => {{
        let _ = core::format_args!($($arg)*);
    }};
}
