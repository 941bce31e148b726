//! DPT 13.xxx - 4-byte Signed Value (4 bytes)
//!
//! 32-bit signed datapoint types represent values from -2,147,483,648 to +2,147,483,647.
//!
//! ## Format
//!
//! - 32 bits: signed value (-2^31 to 2^31-1), big-endian, two's complement
//!
//! ## Common Subtypes
//!
//! - **13.001** - Counter Pulses (signed)
//! - **13.002** - Flow Rate (m³/h, 0.0001 resolution)
//! - **13.010** - Active Energy (Wh)
//! - **13.011** - Apparent Energy (`VAh`)
//! - **13.012** - Reactive Energy (`VARh`)
//! - **13.013** - Active Energy (kWh)
//! - **13.014** - Apparent Energy (kVAh)
//! - **13.015** - Reactive Energy (kVARh)
//! - **13.016** - Active Energy (MWh)
//! - **13.100** - Long Delta Time Period (s)
//!
//! ## Example
//!
//! ```rust
//! use knx_dpt::dpt::{DataPointType, DataPointValue, Dpt13};
//!
//! // Decode active energy in Wh
//! let wh = Dpt13::ActiveEnergy.parse(&[0x00, 0x07, 0xA1, 0x20])?;  // 500000 Wh
//! assert_eq!(wh.to_string(), "500000 Wh");
//!
//! // Flow rate can be negative for reverse flow
//! let flow = Dpt13::FlowRate.of(-1.5)?;
//! assert_eq!(flow.raw(), -15000);
//!
//! // Counter pulses (signed, can increment/decrement)
//! let pulses = Dpt13::Counter.parse(&[0xFF, 0xFF, 0xFF, 0xFF])?;  // -1
//! assert_eq!(pulses.value(), -1.0);
//! # Ok::<(), knx_dpt::KnxError>(())
//! ```

use crate::dpt::integer::{IntegerWidth, ScaledInteger};
use crate::dpt::range::Scaling;

/// DPT 13.xxx 32-bit signed types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Dpt13 {
    /// DPT 13.001 - Counter pulses (signed)
    Counter,
    /// DPT 13.002 - Flow rate (m³/h)
    FlowRate,
    /// DPT 13.010 - Active energy (Wh)
    ActiveEnergy,
    /// DPT 13.011 - Apparent energy (VAh)
    ApparentEnergy,
    /// DPT 13.012 - Reactive energy (VARh)
    ReactiveEnergy,
    /// DPT 13.013 - Active energy (kWh)
    ActiveEnergyKwh,
    /// DPT 13.014 - Apparent energy (kVAh)
    ApparentEnergyKvah,
    /// DPT 13.015 - Reactive energy (kVARh)
    ReactiveEnergyKvarh,
    /// DPT 13.016 - Active energy (MWh)
    ActiveEnergyMwh,
    /// DPT 13.100 - Long delta time (s)
    LongDeltaTimeSec,
}

fn flow_to_physical(raw: f64) -> f64 {
    raw / 10_000.0
}

fn flow_to_raw(value: f64) -> f64 {
    value * 10_000.0
}

impl Dpt13 {
    /// Get the DPT identifier string (e.g., "13.001")
    pub const fn identifier(&self) -> &'static str {
        match self {
            Dpt13::Counter => "13.001",
            Dpt13::FlowRate => "13.002",
            Dpt13::ActiveEnergy => "13.010",
            Dpt13::ApparentEnergy => "13.011",
            Dpt13::ReactiveEnergy => "13.012",
            Dpt13::ActiveEnergyKwh => "13.013",
            Dpt13::ApparentEnergyKvah => "13.014",
            Dpt13::ReactiveEnergyKvarh => "13.015",
            Dpt13::ActiveEnergyMwh => "13.016",
            Dpt13::LongDeltaTimeSec => "13.100",
        }
    }

    /// Get the subtype name
    pub const fn name(&self) -> &'static str {
        match self {
            Dpt13::Counter => "Counter pulses",
            Dpt13::FlowRate => "Flow rate",
            Dpt13::ActiveEnergy | Dpt13::ActiveEnergyKwh | Dpt13::ActiveEnergyMwh => {
                "Active energy"
            }
            Dpt13::ApparentEnergy | Dpt13::ApparentEnergyKvah => "Apparent energy",
            Dpt13::ReactiveEnergy | Dpt13::ReactiveEnergyKvarh => "Reactive energy",
            Dpt13::LongDeltaTimeSec => "Delta time",
        }
    }

    /// Get the unit string for this DPT
    pub const fn unit_symbol(&self) -> Option<&'static str> {
        match self {
            Dpt13::Counter => Some("pulses"),
            Dpt13::FlowRate => Some("m³/h"),
            Dpt13::ActiveEnergy => Some("Wh"),
            Dpt13::ApparentEnergy => Some("VAh"),
            Dpt13::ReactiveEnergy => Some("VARh"),
            Dpt13::ActiveEnergyKwh => Some("kWh"),
            Dpt13::ApparentEnergyKvah => Some("kVAh"),
            Dpt13::ReactiveEnergyKvarh => Some("kVARh"),
            Dpt13::ActiveEnergyMwh => Some("MWh"),
            Dpt13::LongDeltaTimeSec => Some("s"),
        }
    }
}

impl ScaledInteger for Dpt13 {
    const WIDTH: IntegerWidth = IntegerWidth::I32;

    fn scaling(&self) -> Scaling {
        match self {
            Dpt13::FlowRate => Scaling::with_functions(
                -214_748.364_8,
                214_748.364_7,
                flow_to_physical,
                flow_to_raw,
            ),
            _ => Scaling::identity(f64::from(i32::MIN), f64::from(i32::MAX)),
        }
    }

    fn decimals(&self) -> usize {
        match self {
            Dpt13::FlowRate => 4,
            _ => 0,
        }
    }
}

impl_integer_dpt!(Dpt13, i32);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dpt::{DataPointType, DataPointValue};

    #[test]
    fn test_counter_encode_positive() {
        assert_eq!(Dpt13::Counter.encode_to_bytes(0).unwrap(), [0x00, 0x00, 0x00, 0x00]);
        assert_eq!(Dpt13::Counter.encode_to_bytes(1).unwrap(), [0x00, 0x00, 0x00, 0x01]);
        assert_eq!(Dpt13::Counter.encode_to_bytes(1_234_567).unwrap(), [0x00, 0x12, 0xD6, 0x87]);
        assert_eq!(Dpt13::Counter.encode_to_bytes(100_000_000).unwrap(), [0x05, 0xF5, 0xE1, 0x00]);
        assert_eq!(Dpt13::Counter.encode_to_bytes(i32::MAX).unwrap(), [0x7F, 0xFF, 0xFF, 0xFF]);
    }

    #[test]
    fn test_counter_encode_negative() {
        assert_eq!(Dpt13::Counter.encode_to_bytes(-1).unwrap(), [0xFF, 0xFF, 0xFF, 0xFF]);
        assert_eq!(Dpt13::Counter.encode_to_bytes(-100).unwrap(), [0xFF, 0xFF, 0xFF, 0x9C]);
        assert_eq!(Dpt13::Counter.encode_to_bytes(-1000).unwrap(), [0xFF, 0xFF, 0xFC, 0x18]);
        assert_eq!(
            Dpt13::Counter.encode_to_bytes(-100_000_000).unwrap(),
            [0xFA, 0x0A, 0x1F, 0x00]
        );
        assert_eq!(Dpt13::Counter.encode_to_bytes(i32::MIN).unwrap(), [0x80, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn test_counter_decode() {
        let decode = |bytes: [u8; 4]| Dpt13::Counter.parse(&bytes).unwrap().raw();
        assert_eq!(decode([0x00, 0x00, 0x00, 0x00]), 0);
        assert_eq!(decode([0x00, 0x12, 0xD6, 0x87]), 1_234_567);
        assert_eq!(decode([0x7F, 0xFF, 0xFF, 0xFF]), i64::from(i32::MAX));
        assert_eq!(decode([0xFF, 0xFF, 0xFF, 0x9C]), -100);
        assert_eq!(decode([0x80, 0x00, 0x00, 0x00]), i64::from(i32::MIN));
    }

    #[test]
    fn test_counter_out_of_range() {
        assert!(Dpt13::Counter.of(2_147_483_648_f64).unwrap_err().is_out_of_range());
        assert!(Dpt13::Counter.of(-2_147_483_649_f64).unwrap_err().is_out_of_range());
        assert!(Dpt13::Counter.of_raw(1 << 31).unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_active_energy_encode() {
        assert_eq!(Dpt13::ActiveEnergy.encode_to_bytes(1000).unwrap(), [0x00, 0x00, 0x03, 0xE8]);
        assert_eq!(Dpt13::ActiveEnergy.encode_to_bytes(100_000).unwrap(), [0x00, 0x01, 0x86, 0xA0]);
        assert_eq!(Dpt13::ActiveEnergy.encode_to_bytes(500_000).unwrap(), [0x00, 0x07, 0xA1, 0x20]);
        assert_eq!(
            Dpt13::ActiveEnergy.encode_to_bytes(1_000_000).unwrap(),
            [0x00, 0x0F, 0x42, 0x40]
        );
    }

    #[test]
    fn test_flow_rate() {
        let value = Dpt13::FlowRate.parse(&[0x7F, 0xFF, 0xFF, 0xFF]).unwrap();
        assert_eq!(value.value(), 214_748.364_7);
        assert_eq!(value.to_string(), "214748.3647 m³/h");

        let value = Dpt13::FlowRate.parse(&[0x80, 0x00, 0x00, 0x00]).unwrap();
        assert_eq!(value.value(), -214_748.364_8);

        assert_eq!(Dpt13::FlowRate.encode_to_bytes(1).unwrap(), [0x00, 0x00, 0x27, 0x10]);
        assert!(Dpt13::FlowRate.of(214_748.364_8).unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_invalid_length() {
        assert!(Dpt13::Counter.parse(&[0x00, 0x00, 0x00]).unwrap_err().is_incompatible_bytes());
        assert!(!Dpt13::Counter.is_compatible(&[0x00; 5]));
    }

    #[test]
    fn test_display_and_syntax() {
        let value = Dpt13::ActiveEnergyKwh.parse_syntax(&["-42", "kWh"]).unwrap();
        assert_eq!(value.to_payload().as_slice(), &[0xFF, 0xFF, 0xFF, 0xD6]);
        assert_eq!(value.to_string(), "-42 kWh");
    }

    #[test]
    fn test_identifier() {
        assert_eq!(Dpt13::Counter.id(), "13.001");
        assert_eq!(Dpt13::FlowRate.id(), "13.002");
        assert_eq!(Dpt13::ActiveEnergyMwh.id(), "13.016");
        assert_eq!(Dpt13::LongDeltaTimeSec.id(), "13.100");
        assert_eq!(Dpt13::ReactiveEnergy.unit(), Some("VARh"));
    }
}
