//! DPT 14.xxx - 4-byte Float (IEEE 754 single precision)
//!
//! ## Format
//!
//! - 32 bits: IEEE 754 `f32`, big-endian
//!
//! Values are limited to the finite range `-f32::MAX ..= f32::MAX`; NaN and
//! infinities are rejected on both encode and decode. Physical values are
//! given as `f64` and narrowed to `f32`.
//!
//! ## Example
//!
//! ```rust
//! use knx_dpt::dpt::{DataPointType, DataPointValue, Dpt14};
//!
//! let bytes = Dpt14::Power.encode_to_bytes(1234.5)?;
//! assert_eq!(bytes, [0x44, 0x9A, 0x50, 0x00]);
//!
//! let power = Dpt14::Power.parse(&bytes)?;
//! assert_eq!(power.to_string(), "1234.5 W");
//! # Ok::<(), knx_dpt::KnxError>(())
//! ```

use core::fmt;

use crate::dpt::syntax::{numeric_token, parse_number, write_decimal};
use crate::dpt::{fixed_bytes, payload, DataPointType, DataPointValue, Payload};
use crate::error::{KnxError, Result};

const DISPLAY_DECIMALS: usize = 6;

/// DPT 14.xxx 4-byte float types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Dpt14 {
    /// DPT 14.000 - Acceleration (m/s²)
    Acceleration,
    /// DPT 14.001 - Angular acceleration (rad/s²)
    AngularAcceleration,
    /// DPT 14.002 - Activation energy (J/mol)
    ActivationEnergy,
    /// DPT 14.003 - Radioactive activity (s⁻¹)
    Activity,
    /// DPT 14.004 - Amount of substance (mol)
    Mol,
    /// DPT 14.005 - Amplitude
    Amplitude,
    /// DPT 14.006 - Angle (rad)
    AngleRad,
    /// DPT 14.007 - Angle (°)
    AngleDeg,
    /// DPT 14.009 - Angular velocity (rad/s)
    AngularVelocity,
    /// DPT 14.010 - Area (m²)
    Area,
    /// DPT 14.011 - Capacitance (F)
    Capacitance,
    /// DPT 14.017 - Density (kg/m³)
    Density,
    /// DPT 14.019 - Electric current (A)
    ElectricCurrent,
    /// DPT 14.027 - Electric potential (V)
    ElectricPotential,
    /// DPT 14.028 - Electric potential difference (V)
    ElectricPotentialDifference,
    /// DPT 14.031 - Energy (J)
    Energy,
    /// DPT 14.032 - Force (N)
    Force,
    /// DPT 14.033 - Frequency (Hz)
    Frequency,
    /// DPT 14.039 - Length (m)
    Length,
    /// DPT 14.051 - Mass (kg)
    Mass,
    /// DPT 14.056 - Power (W)
    Power,
    /// DPT 14.057 - Power factor (cos Φ)
    PowerFactor,
    /// DPT 14.058 - Pressure (Pa)
    Pressure,
    /// DPT 14.065 - Speed (m/s)
    Speed,
    /// DPT 14.068 - Common temperature (°C)
    CommonTemperature,
    /// DPT 14.069 - Absolute temperature (K)
    AbsoluteTemperature,
    /// DPT 14.070 - Temperature difference (K)
    TemperatureDifference,
    /// DPT 14.074 - Time (s)
    Time,
    /// DPT 14.076 - Volume (m³)
    Volume,
    /// DPT 14.077 - Volume flux (m³/s)
    VolumeFlux,
    /// DPT 14.079 - Work (J)
    Work,
    /// DPT 14.080 - Apparent power (VA)
    ApparentPower,
}

impl Dpt14 {
    /// Get the DPT identifier string
    pub const fn identifier(&self) -> &'static str {
        match self {
            Dpt14::Acceleration => "14.000",
            Dpt14::AngularAcceleration => "14.001",
            Dpt14::ActivationEnergy => "14.002",
            Dpt14::Activity => "14.003",
            Dpt14::Mol => "14.004",
            Dpt14::Amplitude => "14.005",
            Dpt14::AngleRad => "14.006",
            Dpt14::AngleDeg => "14.007",
            Dpt14::AngularVelocity => "14.009",
            Dpt14::Area => "14.010",
            Dpt14::Capacitance => "14.011",
            Dpt14::Density => "14.017",
            Dpt14::ElectricCurrent => "14.019",
            Dpt14::ElectricPotential => "14.027",
            Dpt14::ElectricPotentialDifference => "14.028",
            Dpt14::Energy => "14.031",
            Dpt14::Force => "14.032",
            Dpt14::Frequency => "14.033",
            Dpt14::Length => "14.039",
            Dpt14::Mass => "14.051",
            Dpt14::Power => "14.056",
            Dpt14::PowerFactor => "14.057",
            Dpt14::Pressure => "14.058",
            Dpt14::Speed => "14.065",
            Dpt14::CommonTemperature => "14.068",
            Dpt14::AbsoluteTemperature => "14.069",
            Dpt14::TemperatureDifference => "14.070",
            Dpt14::Time => "14.074",
            Dpt14::Volume => "14.076",
            Dpt14::VolumeFlux => "14.077",
            Dpt14::Work => "14.079",
            Dpt14::ApparentPower => "14.080",
        }
    }

    /// Get the subtype name
    pub const fn name(&self) -> &'static str {
        match self {
            Dpt14::Acceleration => "Acceleration",
            Dpt14::AngularAcceleration => "Angular acceleration",
            Dpt14::ActivationEnergy => "Activation energy",
            Dpt14::Activity => "Activity",
            Dpt14::Mol => "Mol",
            Dpt14::Amplitude => "Amplitude",
            Dpt14::AngleRad | Dpt14::AngleDeg => "Angle",
            Dpt14::AngularVelocity => "Angular velocity",
            Dpt14::Area => "Area",
            Dpt14::Capacitance => "Capacitance",
            Dpt14::Density => "Density",
            Dpt14::ElectricCurrent => "Electric current",
            Dpt14::ElectricPotential => "Electric potential",
            Dpt14::ElectricPotentialDifference => "Electric potential difference",
            Dpt14::Energy => "Energy",
            Dpt14::Force => "Force",
            Dpt14::Frequency => "Frequency",
            Dpt14::Length => "Length",
            Dpt14::Mass => "Mass",
            Dpt14::Power => "Power",
            Dpt14::PowerFactor => "Power factor",
            Dpt14::Pressure => "Pressure",
            Dpt14::Speed => "Speed",
            Dpt14::CommonTemperature => "Common temperature",
            Dpt14::AbsoluteTemperature => "Absolute temperature",
            Dpt14::TemperatureDifference => "Temperature difference",
            Dpt14::Time => "Time",
            Dpt14::Volume => "Volume",
            Dpt14::VolumeFlux => "Volume flux",
            Dpt14::Work => "Work",
            Dpt14::ApparentPower => "Apparent power",
        }
    }

    /// Get the unit string, `None` for dimensionless subtypes
    pub const fn unit_symbol(&self) -> Option<&'static str> {
        match self {
            Dpt14::Acceleration => Some("m/s²"),
            Dpt14::AngularAcceleration => Some("rad/s²"),
            Dpt14::ActivationEnergy => Some("J/mol"),
            Dpt14::Activity => Some("s⁻¹"),
            Dpt14::Mol => Some("mol"),
            Dpt14::Amplitude => None,
            Dpt14::AngleRad => Some("rad"),
            Dpt14::AngleDeg => Some("°"),
            Dpt14::AngularVelocity => Some("rad/s"),
            Dpt14::Area => Some("m²"),
            Dpt14::Capacitance => Some("F"),
            Dpt14::Density => Some("kg/m³"),
            Dpt14::ElectricCurrent => Some("A"),
            Dpt14::ElectricPotential | Dpt14::ElectricPotentialDifference => Some("V"),
            Dpt14::Energy | Dpt14::Work => Some("J"),
            Dpt14::Force => Some("N"),
            Dpt14::Frequency => Some("Hz"),
            Dpt14::Length => Some("m"),
            Dpt14::Mass => Some("kg"),
            Dpt14::Power => Some("W"),
            Dpt14::PowerFactor => Some("cos Φ"),
            Dpt14::Pressure => Some("Pa"),
            Dpt14::Speed => Some("m/s"),
            Dpt14::CommonTemperature => Some("°C"),
            Dpt14::AbsoluteTemperature | Dpt14::TemperatureDifference => Some("K"),
            Dpt14::Time => Some("s"),
            Dpt14::Volume => Some("m³"),
            Dpt14::VolumeFlux => Some("m³/s"),
            Dpt14::ApparentPower => Some("VA"),
        }
    }

    /// Create a value, narrowed to `f32`
    ///
    /// # Errors
    ///
    /// Returns an out-of-range error for values outside the finite `f32` range.
    pub fn of(self, value: impl Into<f64>) -> Result<Float32Value> {
        let value = value.into();
        let max = f64::from(f32::MAX);
        if !(-max <= value && value <= max) {
            return Err(KnxError::out_of_range(self.identifier(), value, -max, max));
        }
        Ok(Float32Value {
            dpt: self,
            value: value as f32,
        })
    }

    /// Encode a value to its 4 wire bytes
    pub fn encode_to_bytes(self, value: impl Into<f64>) -> Result<[u8; 4]> {
        Ok(self.of(value)?.value.to_be_bytes())
    }
}

/// Decoded DPT 14 value
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Float32Value {
    dpt: Dpt14,
    value: f32,
}

impl Float32Value {
    /// Codec of this value
    pub fn dpt(&self) -> Dpt14 {
        self.dpt
    }

    /// Decoded value
    pub fn value(&self) -> f32 {
        self.value
    }
}

impl DataPointValue for Float32Value {
    fn dpt_id(&self) -> &'static str {
        self.dpt.identifier()
    }

    fn to_payload(&self) -> Payload {
        payload(&self.value.to_be_bytes())
    }
}

impl fmt::Display for Float32Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_decimal(f, f64::from(self.value), DISPLAY_DECIMALS)?;
        if let Some(unit) = self.dpt.unit_symbol() {
            write!(f, " {unit}")?;
        }
        Ok(())
    }
}

impl DataPointType for Dpt14 {
    type Value = Float32Value;

    fn id(&self) -> &'static str {
        self.identifier()
    }

    fn description(&self) -> &'static str {
        self.name()
    }

    fn unit(&self) -> Option<&'static str> {
        self.unit_symbol()
    }

    fn is_compatible(&self, data: &[u8]) -> bool {
        data.len() == 4
    }

    fn is_compatible_syntax(&self, args: &[&str]) -> bool {
        numeric_token(args, self.unit_symbol()).is_some()
    }

    fn decode(&self, data: &[u8]) -> Result<Float32Value> {
        let value = f32::from_be_bytes(fixed_bytes(self.identifier(), data)?);
        self.of(value)
    }

    fn decode_syntax(&self, args: &[&str]) -> Result<Float32Value> {
        let Some(value) = numeric_token(args, self.unit_symbol()).and_then(parse_number) else {
            return Err(KnxError::incompatible_syntax(self.identifier(), args));
        };
        self.of(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode() {
        assert_eq!(Dpt14::Power.encode_to_bytes(0.0).unwrap(), [0x00, 0x00, 0x00, 0x00]);
        assert_eq!(Dpt14::Power.encode_to_bytes(1.0).unwrap(), [0x3F, 0x80, 0x00, 0x00]);
        assert_eq!(Dpt14::Power.encode_to_bytes(-2.5).unwrap(), [0xC0, 0x20, 0x00, 0x00]);
    }

    #[test]
    fn test_decode() {
        let value = Dpt14::ElectricCurrent.parse(&[0x3F, 0xC0, 0x00, 0x00]).unwrap();
        assert_eq!(value.value(), 1.5);
        assert_eq!(value.to_string(), "1.5 A");
    }

    #[test]
    fn test_boundaries() {
        let max = f64::from(f32::MAX);
        assert!(Dpt14::Power.of(max).is_ok());
        assert!(Dpt14::Power.of(-max).is_ok());
        assert!(Dpt14::Power.of(max * 2.0).unwrap_err().is_out_of_range());
        assert!(Dpt14::Power.of(f64::NAN).unwrap_err().is_out_of_range());
        // +inf and NaN on the wire
        assert!(Dpt14::Power.parse(&[0x7F, 0x80, 0x00, 0x00]).unwrap_err().is_out_of_range());
        assert!(Dpt14::Power.parse(&[0x7F, 0xC0, 0x00, 0x00]).unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_round_trip() {
        for value in [0.0f32, 1.0e-12, -273.15, 3.141_592_7, 1.0e30] {
            let bytes = Dpt14::Energy.encode_to_bytes(value).unwrap();
            let decoded = Dpt14::Energy.parse(&bytes).unwrap();
            assert_eq!(decoded.value(), value);
            assert_eq!(decoded.to_payload().as_slice(), &bytes);
        }
    }

    #[test]
    fn test_display_without_unit() {
        assert_eq!(Dpt14::Amplitude.of(0.25).unwrap().to_string(), "0.25");
        assert_eq!(Dpt14::Amplitude.unit(), None);
    }

    #[test]
    fn test_syntax() {
        let value = Dpt14::Frequency.parse_syntax(&["50", "Hz"]).unwrap();
        assert_eq!(value.value(), 50.0);
        assert!(Dpt14::Frequency.parse_syntax(&["fifty"]).unwrap_err().is_incompatible_syntax());
    }

    #[test]
    fn test_identifier() {
        assert_eq!(Dpt14::Acceleration.id(), "14.000");
        assert_eq!(Dpt14::Power.id(), "14.056");
        assert_eq!(Dpt14::ApparentPower.id(), "14.080");
    }
}
