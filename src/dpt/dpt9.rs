//! DPT 9.xxx - 2-byte Float (16-bit floating point)
//!
//! 2-byte floating point datapoint types represent values using a custom
//! 16-bit floating point format with 1 sign bit, 4 exponent bits, and 11 mantissa bits.
//!
//! ## Format
//!
//! ```text
//! Byte 0: SEEE EMMM
//! Byte 1: MMMM MMMM
//!
//! S = Sign bit (bit 15), the top bit of the 12-bit two's complement mantissa
//! E = Exponent (bits 14-11: 4 bits, unsigned, range 0-15)
//! M = Mantissa (bits 10-0: low 11 bits of the mantissa)
//!
//! Value = 0.01 * m * 2^E     with m = S·MMMMMMMMMMM in -2048..=2047
//! ```
//!
//! Encoding picks the smallest exponent for which the half-up rounded
//! mantissa fits, so every value has exactly one canonical encoding.
//!
//! ## Range
//!
//! - Min: -671088.64
//! - Max: +670760.96
//! - Resolution: 0.01 at exponent 0
//!
//! Each subtype narrows this range, e.g. 9.001 accepts -273..670760.96 °C.
//! The nominal limit of ±670760 is the format limit rounded, so subtypes
//! bounded by it use [`FLOAT16_MIN`] and [`FLOAT16_MAX`].
//!
//! ## Example
//!
//! ```rust
//! use knx_dpt::dpt::{DataPointType, DataPointValue, Dpt9};
//!
//! // Encode temperature
//! let bytes = Dpt9::Temperature.encode_to_bytes(21.6)?;
//! assert_eq!(bytes, [0x0C, 0x38]);
//!
//! // Decode
//! let temp = Dpt9::Temperature.parse(&bytes)?;
//! assert_eq!(temp.value(), 21.6);
//! assert_eq!(temp.to_string(), "21.6 °C");
//! # Ok::<(), knx_dpt::KnxError>(())
//! ```

use core::fmt;

use crate::dpt::range::round_half_up;
use crate::dpt::syntax::{numeric_token, parse_number, write_decimal};
use crate::dpt::{fixed_bytes, payload, DataPointType, DataPointValue, Payload};
use crate::error::{KnxError, Result};

/// Smallest value representable in the 16-bit float format
pub const FLOAT16_MIN: f64 = -671_088.64;
/// Largest value representable in the 16-bit float format
pub const FLOAT16_MAX: f64 = 670_760.96;

const MANTISSA_MIN: i64 = -2048;
const MANTISSA_MAX: i64 = 2047;

/// DPT 9.xxx 2-byte float types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Dpt9 {
    /// DPT 9.001 - Temperature (°C)
    Temperature,
    /// DPT 9.002 - Temperature difference (K)
    TemperatureDifference,
    /// DPT 9.003 - Kelvin per hour (K/h)
    KelvinPerHour,
    /// DPT 9.004 - Illuminance (lux)
    Illuminance,
    /// DPT 9.005 - Wind speed (m/s)
    WindSpeed,
    /// DPT 9.006 - Pressure (Pa)
    Pressure,
    /// DPT 9.007 - Humidity (%)
    Humidity,
    /// DPT 9.008 - Air quality (ppm)
    AirQuality,
    /// DPT 9.009 - Air flow (m³/h)
    AirFlow,
    /// DPT 9.010 - Time difference (s)
    TimeDifference,
    /// DPT 9.011 - Time difference (ms)
    TimeDifferenceMs,
    /// DPT 9.020 - Voltage (mV)
    Voltage,
    /// DPT 9.021 - Current (mA)
    Current,
    /// DPT 9.022 - Power density (W/m²)
    PowerDensity,
    /// DPT 9.023 - Kelvin per percent (K/%)
    KelvinPerPercent,
    /// DPT 9.024 - Power (kW)
    Power,
    /// DPT 9.025 - Volume flow (l/h)
    VolumeFlow,
    /// DPT 9.026 - Rain amount (l/m²)
    RainAmount,
    /// DPT 9.027 - Temperature (°F)
    TemperatureF,
    /// DPT 9.028 - Wind speed (km/h)
    WindSpeedKmh,
}

impl Dpt9 {
    /// Get the DPT identifier string
    pub const fn identifier(&self) -> &'static str {
        match self {
            Dpt9::Temperature => "9.001",
            Dpt9::TemperatureDifference => "9.002",
            Dpt9::KelvinPerHour => "9.003",
            Dpt9::Illuminance => "9.004",
            Dpt9::WindSpeed => "9.005",
            Dpt9::Pressure => "9.006",
            Dpt9::Humidity => "9.007",
            Dpt9::AirQuality => "9.008",
            Dpt9::AirFlow => "9.009",
            Dpt9::TimeDifference => "9.010",
            Dpt9::TimeDifferenceMs => "9.011",
            Dpt9::Voltage => "9.020",
            Dpt9::Current => "9.021",
            Dpt9::PowerDensity => "9.022",
            Dpt9::KelvinPerPercent => "9.023",
            Dpt9::Power => "9.024",
            Dpt9::VolumeFlow => "9.025",
            Dpt9::RainAmount => "9.026",
            Dpt9::TemperatureF => "9.027",
            Dpt9::WindSpeedKmh => "9.028",
        }
    }

    /// Get the subtype name
    pub const fn name(&self) -> &'static str {
        match self {
            Dpt9::Temperature | Dpt9::TemperatureF => "Temperature",
            Dpt9::TemperatureDifference => "Temperature difference",
            Dpt9::KelvinPerHour => "Kelvin/hour",
            Dpt9::Illuminance => "Lux",
            Dpt9::WindSpeed | Dpt9::WindSpeedKmh => "Wind speed",
            Dpt9::Pressure => "Air pressure",
            Dpt9::Humidity => "Humidity",
            Dpt9::AirQuality => "Air quality",
            Dpt9::AirFlow => "Air flow",
            Dpt9::TimeDifference | Dpt9::TimeDifferenceMs => "Time difference",
            Dpt9::Voltage => "Voltage",
            Dpt9::Current => "Current",
            Dpt9::PowerDensity => "Power density",
            Dpt9::KelvinPerPercent => "Kelvin/percent",
            Dpt9::Power => "Power",
            Dpt9::VolumeFlow => "Volume flow",
            Dpt9::RainAmount => "Rain amount",
        }
    }

    /// Get the unit string
    pub const fn unit_symbol(&self) -> &'static str {
        match self {
            Dpt9::Temperature => "°C",
            Dpt9::TemperatureDifference => "K",
            Dpt9::KelvinPerHour => "K/h",
            Dpt9::Illuminance => "lux",
            Dpt9::WindSpeed => "m/s",
            Dpt9::Pressure => "Pa",
            Dpt9::Humidity => "%",
            Dpt9::AirQuality => "ppm",
            Dpt9::AirFlow => "m³/h",
            Dpt9::TimeDifference => "s",
            Dpt9::TimeDifferenceMs => "ms",
            Dpt9::Voltage => "mV",
            Dpt9::Current => "mA",
            Dpt9::PowerDensity => "W/m²",
            Dpt9::KelvinPerPercent => "K/%",
            Dpt9::Power => "kW",
            Dpt9::VolumeFlow => "l/h",
            Dpt9::RainAmount => "l/m²",
            Dpt9::TemperatureF => "°F",
            Dpt9::WindSpeedKmh => "km/h",
        }
    }

    /// Get the valid range for this DPT `(min, max)`
    pub const fn range(&self) -> (f64, f64) {
        match self {
            Dpt9::Temperature => (-273.0, FLOAT16_MAX),
            Dpt9::TemperatureF => (-459.6, FLOAT16_MAX),
            Dpt9::Illuminance
            | Dpt9::WindSpeed
            | Dpt9::Pressure
            | Dpt9::Humidity
            | Dpt9::AirQuality
            | Dpt9::WindSpeedKmh => (0.0, FLOAT16_MAX),
            Dpt9::TemperatureDifference
            | Dpt9::KelvinPerHour
            | Dpt9::AirFlow
            | Dpt9::TimeDifference
            | Dpt9::TimeDifferenceMs
            | Dpt9::Voltage
            | Dpt9::Current
            | Dpt9::PowerDensity
            | Dpt9::KelvinPerPercent
            | Dpt9::Power
            | Dpt9::VolumeFlow
            | Dpt9::RainAmount => (FLOAT16_MIN, FLOAT16_MAX),
        }
    }

    /// Create a value, quantized to the 16-bit float resolution
    ///
    /// # Errors
    ///
    /// Returns an out-of-range error outside the subtype range (NaN included),
    /// or when the quantized value falls outside it.
    pub fn of(self, value: impl Into<f64>) -> Result<Float16Value> {
        let value = value.into();
        let (min, max) = self.range();
        if !(min <= value && value <= max) {
            return Err(KnxError::out_of_range(self.identifier(), value, min, max));
        }
        let Some(raw) = encode_float16(value) else {
            return Err(KnxError::out_of_range(self.identifier(), value, min, max));
        };
        // decode rejects anything outside the range, so the quantized value must fit too
        let quantized = decode_float16(raw);
        if !(min <= quantized && quantized <= max) {
            return Err(KnxError::out_of_range(self.identifier(), quantized, min, max));
        }
        Ok(Float16Value { dpt: self, raw })
    }

    /// Encode a value to its 2 wire bytes
    pub fn encode_to_bytes(self, value: impl Into<f64>) -> Result<[u8; 2]> {
        Ok(self.of(value)?.raw.to_be_bytes())
    }
}

/// Encode `value` to the 16-bit float format
///
/// Returns `None` if the value cannot be represented.
pub fn encode_float16(value: f64) -> Option<u16> {
    if !value.is_finite() {
        return None;
    }
    let scaled = value * 100.0;
    (0..=15u8).find_map(|exponent| {
        let mantissa = round_half_up(scaled / f64::from(1u32 << exponent));
        if !(MANTISSA_MIN..=MANTISSA_MAX).contains(&mantissa) {
            return None;
        }
        // 12-bit two's complement: the sign goes to bit 15, the low 11 bits stay in place
        let sign = if mantissa < 0 { 0x8000 } else { 0 };
        let bits = (mantissa as u16) & 0x07FF;
        Some(sign | (u16::from(exponent) << 11) | bits)
    })
}

/// Decode a raw 16-bit float
pub fn decode_float16(raw: u16) -> f64 {
    let exponent = (raw >> 11) & 0x0F;
    let low = i32::from(raw & 0x07FF);
    let mantissa = if raw & 0x8000 != 0 { low - 2048 } else { low };
    f64::from(mantissa) * f64::from(1u32 << exponent) / 100.0
}

/// Decoded DPT 9 value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Float16Value {
    dpt: Dpt9,
    raw: u16,
}

impl Float16Value {
    /// Codec of this value
    pub fn dpt(&self) -> Dpt9 {
        self.dpt
    }

    /// Decoded value in the subtype unit
    pub fn value(&self) -> f64 {
        decode_float16(self.raw)
    }

    /// Raw 16-bit word
    pub fn raw(&self) -> u16 {
        self.raw
    }
}

impl DataPointValue for Float16Value {
    fn dpt_id(&self) -> &'static str {
        self.dpt.identifier()
    }

    fn to_payload(&self) -> Payload {
        payload(&self.raw.to_be_bytes())
    }
}

impl fmt::Display for Float16Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_decimal(f, self.value(), 2)?;
        write!(f, " {}", self.dpt.unit_symbol())
    }
}

impl DataPointType for Dpt9 {
    type Value = Float16Value;

    fn id(&self) -> &'static str {
        self.identifier()
    }

    fn description(&self) -> &'static str {
        self.name()
    }

    fn unit(&self) -> Option<&'static str> {
        Some(self.unit_symbol())
    }

    fn is_compatible(&self, data: &[u8]) -> bool {
        data.len() == 2
    }

    fn is_compatible_syntax(&self, args: &[&str]) -> bool {
        numeric_token(args, Some(self.unit_symbol())).is_some()
    }

    fn decode(&self, data: &[u8]) -> Result<Float16Value> {
        let raw = u16::from_be_bytes(fixed_bytes(self.identifier(), data)?);
        let value = decode_float16(raw);
        let (min, max) = self.range();
        if !(min <= value && value <= max) {
            return Err(KnxError::out_of_range(self.identifier(), value, min, max));
        }
        Ok(Float16Value { dpt: *self, raw })
    }

    fn decode_syntax(&self, args: &[&str]) -> Result<Float16Value> {
        let Some(value) = numeric_token(args, Some(self.unit_symbol())).and_then(parse_number)
        else {
            return Err(KnxError::incompatible_syntax(self.identifier(), args));
        };
        self.of(value)
    }
}
