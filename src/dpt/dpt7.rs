//! DPT 7.xxx - 2-byte Unsigned Value (2 bytes)
//!
//! 16-bit unsigned datapoint types represent values from 0 to 65535.
//!
//! ## Format
//!
//! - 16 bits: unsigned value (0-65535), big-endian
//!
//! ## Common Subtypes
//!
//! - **7.001** - Pulses (0-65535)
//! - **7.002** - Time Period (ms)
//! - **7.003** - Time Period (10ms resolution, 0-655350 ms)
//! - **7.004** - Time Period (100ms resolution, 0-6553500 ms)
//! - **7.005** - Time Period (s)
//! - **7.006** - Time Period (min)
//! - **7.007** - Time Period (h)
//! - **7.010** - Property Data Type
//! - **7.011** - Length (mm)
//! - **7.012** - Current (mA)
//! - **7.013** - Brightness (lux)
//! - **7.600** - Color Temperature (K)
//!
//! ## Example
//!
//! ```rust
//! use knx_dpt::dpt::{DataPointType, Dpt7};
//!
//! // Decode brightness in lux
//! let lux = Dpt7::Brightness.parse(&[0x13, 0x88])?;  // 5000 lux
//! assert_eq!(lux.value(), 5000.0);
//!
//! // Encode pulses
//! assert_eq!(Dpt7::Pulses.encode_to_bytes(1234)?, [0x04, 0xD2]);
//!
//! // Time period with 10 ms resolution
//! assert_eq!(Dpt7::TimePeriod10Ms.encode_to_bytes(1000)?, [0x00, 0x64]);
//! # Ok::<(), knx_dpt::KnxError>(())
//! ```

use crate::dpt::integer::{IntegerWidth, ScaledInteger};
use crate::dpt::range::Scaling;

/// DPT 7.xxx 16-bit unsigned types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Dpt7 {
    /// DPT 7.001 - Pulses (0-65535)
    Pulses,
    /// DPT 7.002 - Time Period (ms)
    TimePeriodMs,
    /// DPT 7.003 - Time Period (10ms)
    TimePeriod10Ms,
    /// DPT 7.004 - Time Period (100ms)
    TimePeriod100Ms,
    /// DPT 7.005 - Time Period (s)
    TimePeriodSec,
    /// DPT 7.006 - Time Period (min)
    TimePeriodMin,
    /// DPT 7.007 - Time Period (h)
    TimePeriodHr,
    /// DPT 7.010 - Property Data Type
    PropDataType,
    /// DPT 7.011 - Length (mm)
    LengthMm,
    /// DPT 7.012 - Current (mA)
    CurrentMa,
    /// DPT 7.013 - Brightness (lux)
    Brightness,
    /// DPT 7.600 - Color Temperature (K)
    ColorTemperature,
}

fn times_10(raw: f64) -> f64 {
    raw * 10.0
}

fn div_10(value: f64) -> f64 {
    value / 10.0
}

fn times_100(raw: f64) -> f64 {
    raw * 100.0
}

fn div_100(value: f64) -> f64 {
    value / 100.0
}

impl Dpt7 {
    /// Get the DPT identifier string (e.g., "7.001")
    pub const fn identifier(&self) -> &'static str {
        match self {
            Dpt7::Pulses => "7.001",
            Dpt7::TimePeriodMs => "7.002",
            Dpt7::TimePeriod10Ms => "7.003",
            Dpt7::TimePeriod100Ms => "7.004",
            Dpt7::TimePeriodSec => "7.005",
            Dpt7::TimePeriodMin => "7.006",
            Dpt7::TimePeriodHr => "7.007",
            Dpt7::PropDataType => "7.010",
            Dpt7::LengthMm => "7.011",
            Dpt7::CurrentMa => "7.012",
            Dpt7::Brightness => "7.013",
            Dpt7::ColorTemperature => "7.600",
        }
    }

    /// Get the subtype name
    pub const fn name(&self) -> &'static str {
        match self {
            Dpt7::Pulses => "Unsigned count",
            Dpt7::TimePeriodMs
            | Dpt7::TimePeriod10Ms
            | Dpt7::TimePeriod100Ms
            | Dpt7::TimePeriodSec
            | Dpt7::TimePeriodMin
            | Dpt7::TimePeriodHr => "Time period",
            Dpt7::PropDataType => "Interface object property ID",
            Dpt7::LengthMm => "Length",
            Dpt7::CurrentMa => "Electrical current",
            Dpt7::Brightness => "Brightness",
            Dpt7::ColorTemperature => "Absolute color temperature",
        }
    }

    /// Get the unit string for this DPT
    pub const fn unit_symbol(&self) -> Option<&'static str> {
        match self {
            Dpt7::Pulses => Some("pulses"),
            Dpt7::TimePeriodMs | Dpt7::TimePeriod10Ms | Dpt7::TimePeriod100Ms => Some("ms"),
            Dpt7::TimePeriodSec => Some("s"),
            Dpt7::TimePeriodMin => Some("min"),
            Dpt7::TimePeriodHr => Some("h"),
            Dpt7::PropDataType => None,
            Dpt7::LengthMm => Some("mm"),
            Dpt7::CurrentMa => Some("mA"),
            Dpt7::Brightness => Some("lux"),
            Dpt7::ColorTemperature => Some("K"),
        }
    }
}

impl ScaledInteger for Dpt7 {
    const WIDTH: IntegerWidth = IntegerWidth::U16;

    fn scaling(&self) -> Scaling {
        match self {
            Dpt7::TimePeriod10Ms => Scaling::with_functions(0.0, 655_350.0, times_10, div_10),
            Dpt7::TimePeriod100Ms => Scaling::with_functions(0.0, 6_553_500.0, times_100, div_100),
            _ => Scaling::identity(0.0, 65_535.0),
        }
    }
}

impl_integer_dpt!(Dpt7, u16);
