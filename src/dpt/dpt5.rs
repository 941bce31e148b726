//! DPT 5.xxx - 8-bit Unsigned Value (1 byte)
//!
//! 8-bit unsigned datapoint types represent values from 0 to 255
//! with different scaling and interpretations.
//!
//! ## Format
//!
//! - 8 bits: unsigned value (0-255)
//!
//! ## Common Subtypes
//!
//! - **5.001** - Percentage (0-100%), raw 0..255
//! - **5.003** - Angle (0-360°), raw 0..255
//! - **5.004** - Percentage 0-255 (0-255)
//! - **5.005** - Ratio (0-255)
//! - **5.006** - Tariff (0-254)
//! - **5.010** - Counter pulses (0-255)
//!
//! Scaled subtypes round half-up: 75 % is `191.25` and encodes as `0xBF`.
//!
//! ## Example
//!
//! ```rust
//! use knx_dpt::dpt::{DataPointType, DataPointValue, Dpt5};
//!
//! // Encode percentage (0-100%)
//! let byte = Dpt5::Percentage.encode_to_bytes(75)?;  // [0xBF] = 191
//! assert_eq!(byte, [0xBF]);
//!
//! // Decode
//! let value = Dpt5::Percentage.parse(&[0xFF])?;
//! assert_eq!(value.value(), 100.0);
//! assert_eq!(value.to_string(), "100 %");
//!
//! // Angle (0-360°)
//! assert_eq!(Dpt5::Angle.encode_to_bytes(180)?, [0x80]);
//! # Ok::<(), knx_dpt::KnxError>(())
//! ```

use crate::dpt::integer::{IntegerWidth, ScaledInteger};
use crate::dpt::range::Scaling;

/// DPT 5.xxx 8-bit unsigned types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Dpt5 {
    /// DPT 5.001 - Percentage (0-100%)
    Percentage,
    /// DPT 5.003 - Angle (0-360°)
    Angle,
    /// DPT 5.004 - Percentage 0-255 (0-255)
    PercentU8,
    /// DPT 5.005 - Ratio (0-255)
    Ratio,
    /// DPT 5.006 - Tariff (0-254)
    Tariff,
    /// DPT 5.010 - Counter pulses (0-255)
    Counter,
}

fn percent_to_physical(raw: f64) -> f64 {
    raw * 100.0 / 255.0
}

fn percent_to_raw(value: f64) -> f64 {
    value * 255.0 / 100.0
}

fn angle_to_physical(raw: f64) -> f64 {
    raw * 360.0 / 255.0
}

fn angle_to_raw(value: f64) -> f64 {
    value * 255.0 / 360.0
}

impl Dpt5 {
    /// Get the DPT identifier string (e.g., "5.001")
    pub const fn identifier(&self) -> &'static str {
        match self {
            Dpt5::Percentage => "5.001",
            Dpt5::Angle => "5.003",
            Dpt5::PercentU8 => "5.004",
            Dpt5::Ratio => "5.005",
            Dpt5::Tariff => "5.006",
            Dpt5::Counter => "5.010",
        }
    }

    /// Get the subtype name
    pub const fn name(&self) -> &'static str {
        match self {
            Dpt5::Percentage => "Scaling",
            Dpt5::Angle => "Angle",
            Dpt5::PercentU8 => "Percent (8 Bit)",
            Dpt5::Ratio => "Decimal factor",
            Dpt5::Tariff => "Tariff information",
            Dpt5::Counter => "Value 1 unsigned count",
        }
    }

    /// Get the unit string for this DPT
    pub const fn unit_symbol(&self) -> Option<&'static str> {
        match self {
            Dpt5::Percentage | Dpt5::PercentU8 => Some("%"),
            Dpt5::Angle => Some("°"),
            Dpt5::Ratio | Dpt5::Tariff => None,
            Dpt5::Counter => Some("pulses"),
        }
    }
}

impl ScaledInteger for Dpt5 {
    const WIDTH: IntegerWidth = IntegerWidth::U8;

    fn scaling(&self) -> Scaling {
        match self {
            Dpt5::Percentage => {
                Scaling::with_functions(0.0, 100.0, percent_to_physical, percent_to_raw)
            }
            Dpt5::Angle => Scaling::with_functions(0.0, 360.0, angle_to_physical, angle_to_raw),
            Dpt5::Tariff => Scaling::identity(0.0, 254.0),
            Dpt5::PercentU8 | Dpt5::Ratio | Dpt5::Counter => Scaling::identity(0.0, 255.0),
        }
    }

    fn decimals(&self) -> usize {
        match self {
            Dpt5::Percentage | Dpt5::Angle => 1,
            _ => 0,
        }
    }
}

impl_integer_dpt!(Dpt5, u8);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dpt::{DataPointType, DataPointValue};
    use crate::error::KnxError;

    #[test]
    fn test_percentage_encode() {
        assert_eq!(Dpt5::Percentage.encode_to_bytes(0).unwrap(), [0x00]);
        assert_eq!(Dpt5::Percentage.encode_to_bytes(100).unwrap(), [0xFF]);
        assert_eq!(Dpt5::Percentage.encode_to_bytes(75).unwrap(), [0xBF]);
        // 127.5 rounds half-up
        assert_eq!(Dpt5::Percentage.encode_to_bytes(50).unwrap(), [0x80]);
    }

    #[test]
    fn test_percentage_decode() {
        assert_eq!(Dpt5::Percentage.parse(&[0x00]).unwrap().value(), 0.0);
        assert_eq!(Dpt5::Percentage.parse(&[0xFF]).unwrap().value(), 100.0);
        let half = Dpt5::Percentage.parse(&[0x80]).unwrap();
        assert!((half.value() - 50.196).abs() < 0.001);
        assert_eq!(half.to_string(), "50.2 %");
    }

    #[test]
    fn test_percentage_round_trip_every_code() {
        for raw in 0..=255u8 {
            let value = Dpt5::Percentage.parse(&[raw]).unwrap();
            let again = Dpt5::Percentage.of(value.value()).unwrap();
            assert_eq!(again.to_payload().as_slice(), &[raw]);
        }
    }

    #[test]
    fn test_percentage_out_of_range() {
        let err = Dpt5::Percentage.of(100.5).unwrap_err();
        assert!(err.is_out_of_range());
        let KnxError::Range(e) = err else {
            panic!("expected range error");
        };
        assert_eq!(e.lower(), 0.0);
        assert_eq!(e.upper(), 100.0);
        assert!(Dpt5::Percentage.of(-1).unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_angle() {
        assert_eq!(Dpt5::Angle.encode_to_bytes(180).unwrap(), [0x80]);
        assert_eq!(Dpt5::Angle.encode_to_bytes(360).unwrap(), [0xFF]);
        assert_eq!(Dpt5::Angle.parse(&[0xFF]).unwrap().value(), 360.0);
        assert!(Dpt5::Angle.of(361).unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_tariff_rejects_255() {
        assert_eq!(Dpt5::Tariff.parse(&[254]).unwrap().raw(), 254);
        assert!(Dpt5::Tariff.parse(&[255]).unwrap_err().is_out_of_range());
        assert!(Dpt5::Tariff.of(255).unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_counter_boundaries() {
        assert_eq!(Dpt5::Counter.of(255).unwrap().to_payload().as_slice(), &[0xFF]);
        assert!(Dpt5::Counter.of(256).unwrap_err().is_out_of_range());
        assert!(Dpt5::Counter.of(-1).unwrap_err().is_out_of_range());
        assert_eq!(Dpt5::Counter.parse(&[42]).unwrap().to_string(), "42 pulses");
    }

    #[test]
    fn test_of_raw() {
        assert_eq!(Dpt5::Percentage.of_raw(255).unwrap().value(), 100.0);
        assert!(Dpt5::Percentage.of_raw(256).unwrap_err().is_out_of_range());
        assert!(Dpt5::Ratio.of_raw(-1).unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_invalid_length() {
        assert!(!Dpt5::Percentage.is_compatible(&[0x00, 0x01]));
        assert!(Dpt5::Percentage.parse(&[0x00, 0x01]).unwrap_err().is_incompatible_bytes());
    }

    #[test]
    fn test_syntax() {
        assert_eq!(Dpt5::Percentage.parse_syntax(&["100"]).unwrap().raw(), 255);
        assert_eq!(Dpt5::Percentage.parse_syntax(&["75", "%"]).unwrap().raw(), 191);
        assert!(Dpt5::Percentage.parse_syntax(&["75", "°"]).unwrap_err().is_incompatible_syntax());
        assert!(Dpt5::Percentage.parse_syntax(&["abc"]).unwrap_err().is_incompatible_syntax());
        assert!(Dpt5::Percentage.parse_syntax(&["101"]).unwrap_err().is_out_of_range());
        assert!(Dpt5::Ratio.parse_syntax(&["3", "x"]).is_err());
    }

    #[test]
    fn test_identifier() {
        assert_eq!(Dpt5::Percentage.id(), "5.001");
        assert_eq!(Dpt5::Angle.identifier(), "5.003");
        assert_eq!(Dpt5::Counter.id(), "5.010");
        assert_eq!(Dpt5::Angle.unit(), Some("°"));
        assert_eq!(Dpt5::Ratio.unit(), None);
    }
}
