//! DPT 8.xxx - 2-byte Signed Value (2 bytes)
//!
//! ## Format
//!
//! - 16 bits: two's complement value (-32768..32767), big-endian
//!
//! ## Subtypes
//!
//! - **8.001** - Pulse difference
//! - **8.002** - Time lag (ms)
//! - **8.003** - Time lag, 10 ms resolution (-327680..327670 ms)
//! - **8.004** - Time lag, 100 ms resolution (-3276800..3276700 ms)
//! - **8.005** - Time lag (s)
//! - **8.006** - Time lag (min)
//! - **8.007** - Time lag (h)
//! - **8.010** - Percent, 0.01 % resolution (-327.68..327.67 %)
//! - **8.011** - Rotation angle (°)
//! - **8.012** - Length (m)

use crate::dpt::integer::{IntegerWidth, ScaledInteger};
use crate::dpt::range::Scaling;

/// DPT 8.xxx 16-bit signed types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Dpt8 {
    /// DPT 8.001 - Pulse difference
    PulseDifference,
    /// DPT 8.002 - Time lag (ms)
    DeltaTimeMs,
    /// DPT 8.003 - Time lag (10ms)
    DeltaTime10Ms,
    /// DPT 8.004 - Time lag (100ms)
    DeltaTime100Ms,
    /// DPT 8.005 - Time lag (s)
    DeltaTimeSec,
    /// DPT 8.006 - Time lag (min)
    DeltaTimeMin,
    /// DPT 8.007 - Time lag (h)
    DeltaTimeHr,
    /// DPT 8.010 - Percent (0.01 %)
    PercentV16,
    /// DPT 8.011 - Rotation angle (°)
    RotationAngle,
    /// DPT 8.012 - Length (m)
    Length,
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

impl Dpt8 {
    /// Get the DPT identifier string (e.g., "8.001")
    pub const fn identifier(&self) -> &'static str {
        match self {
            Dpt8::PulseDifference => "8.001",
            Dpt8::DeltaTimeMs => "8.002",
            Dpt8::DeltaTime10Ms => "8.003",
            Dpt8::DeltaTime100Ms => "8.004",
            Dpt8::DeltaTimeSec => "8.005",
            Dpt8::DeltaTimeMin => "8.006",
            Dpt8::DeltaTimeHr => "8.007",
            Dpt8::PercentV16 => "8.010",
            Dpt8::RotationAngle => "8.011",
            Dpt8::Length => "8.012",
        }
    }

    /// Get the subtype name
    pub const fn name(&self) -> &'static str {
        match self {
            Dpt8::PulseDifference => "Pulse difference",
            Dpt8::DeltaTimeMs
            | Dpt8::DeltaTime10Ms
            | Dpt8::DeltaTime100Ms
            | Dpt8::DeltaTimeSec
            | Dpt8::DeltaTimeMin
            | Dpt8::DeltaTimeHr => "Time lag",
            Dpt8::PercentV16 => "Percent",
            Dpt8::RotationAngle => "Rotation angle",
            Dpt8::Length => "Length",
        }
    }

    /// Get the unit string for this DPT
    pub const fn unit_symbol(&self) -> Option<&'static str> {
        match self {
            Dpt8::PulseDifference => Some("pulses"),
            Dpt8::DeltaTimeMs | Dpt8::DeltaTime10Ms | Dpt8::DeltaTime100Ms => Some("ms"),
            Dpt8::DeltaTimeSec => Some("s"),
            Dpt8::DeltaTimeMin => Some("min"),
            Dpt8::DeltaTimeHr => Some("h"),
            Dpt8::PercentV16 => Some("%"),
            Dpt8::RotationAngle => Some("°"),
            Dpt8::Length => Some("m"),
        }
    }
}

impl ScaledInteger for Dpt8 {
    const WIDTH: IntegerWidth = IntegerWidth::I16;

    fn scaling(&self) -> Scaling {
        match self {
            Dpt8::DeltaTime10Ms => Scaling::with_functions(-327_680.0, 327_670.0, times_10, div_10),
            Dpt8::DeltaTime100Ms => {
                Scaling::with_functions(-3_276_800.0, 3_276_700.0, times_100, div_100)
            }
            Dpt8::PercentV16 => Scaling::with_functions(-327.68, 327.67, div_100, times_100),
            _ => Scaling::identity(-32_768.0, 32_767.0),
        }
    }

    fn decimals(&self) -> usize {
        match self {
            Dpt8::PercentV16 => 2,
            _ => 0,
        }
    }
}

impl_integer_dpt!(Dpt8, i16);
