//! DPT 12.xxx - 4-byte Unsigned Value (4 bytes)
//!
//! ## Format
//!
//! - 32 bits: unsigned value (0..4294967295), big-endian
//!
//! ## Subtypes
//!
//! - **12.001** - Counter pulses
//! - **12.100** - Long time period (s)
//! - **12.101** - Long time period (min)
//! - **12.102** - Long time period (h)

use crate::dpt::integer::{IntegerWidth, ScaledInteger};
use crate::dpt::range::Scaling;

/// DPT 12.xxx 32-bit unsigned types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Dpt12 {
    /// DPT 12.001 - Counter pulses (unsigned)
    Counter,
    /// DPT 12.100 - Long time period (s)
    LongTimePeriodSec,
    /// DPT 12.101 - Long time period (min)
    LongTimePeriodMin,
    /// DPT 12.102 - Long time period (h)
    LongTimePeriodHr,
}

impl Dpt12 {
    /// Get the DPT identifier string (e.g., "12.001")
    pub const fn identifier(&self) -> &'static str {
        match self {
            Dpt12::Counter => "12.001",
            Dpt12::LongTimePeriodSec => "12.100",
            Dpt12::LongTimePeriodMin => "12.101",
            Dpt12::LongTimePeriodHr => "12.102",
        }
    }

    /// Get the subtype name
    pub const fn name(&self) -> &'static str {
        match self {
            Dpt12::Counter => "Unsigned count",
            Dpt12::LongTimePeriodSec | Dpt12::LongTimePeriodMin | Dpt12::LongTimePeriodHr => {
                "Long time period"
            }
        }
    }

    /// Get the unit string for this DPT
    pub const fn unit_symbol(&self) -> Option<&'static str> {
        match self {
            Dpt12::Counter => Some("pulses"),
            Dpt12::LongTimePeriodSec => Some("s"),
            Dpt12::LongTimePeriodMin => Some("min"),
            Dpt12::LongTimePeriodHr => Some("h"),
        }
    }
}

impl ScaledInteger for Dpt12 {
    const WIDTH: IntegerWidth = IntegerWidth::U32;

    fn scaling(&self) -> Scaling {
        Scaling::identity(0.0, f64::from(u32::MAX))
    }
}

impl_integer_dpt!(Dpt12, u32);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dpt::{DataPointType, DataPointValue};

    #[test]
    fn test_boundaries() {
        assert_eq!(Dpt12::Counter.encode_to_bytes(0).unwrap(), [0, 0, 0, 0]);
        assert_eq!(Dpt12::Counter.encode_to_bytes(u32::MAX).unwrap(), [0xFF; 4]);
        assert!(Dpt12::Counter.of(-1).unwrap_err().is_out_of_range());
        assert!(Dpt12::Counter.of(4_294_967_296_f64).unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_decode_unsigned() {
        let value = Dpt12::Counter.parse(&[0xFF, 0xFF, 0xFF, 0xFF]).unwrap();
        assert_eq!(value.raw(), 4_294_967_295);
        assert_eq!(value.to_string(), "4294967295 pulses");
    }

    #[test]
    fn test_round_trip() {
        let value = Dpt12::LongTimePeriodHr.of(87_600).unwrap();
        let bytes = value.to_payload();
        assert_eq!(bytes.as_slice(), &[0x00, 0x01, 0x56, 0x30]);
        assert_eq!(Dpt12::LongTimePeriodHr.parse(&bytes).unwrap(), value);
    }

    #[test]
    fn test_identifier() {
        assert_eq!(Dpt12::Counter.id(), "12.001");
        assert_eq!(Dpt12::LongTimePeriodMin.id(), "12.101");
        assert_eq!(Dpt12::LongTimePeriodSec.unit(), Some("s"));
    }
}
