//! Scaled integer shape shared by DPT 5, 6, 7, 8, 12, 13 and 17.
//!
//! These families transport a big-endian integer of 1, 2 or 4 bytes. The
//! application meaning is a physical value obtained through the codec's
//! [`Scaling`]:
//!
//! ```text
//! 5.001  raw 0..255    -> 0..100 %     (raw * 100 / 255)
//! 7.003  raw 0..65535  -> 0..655350 ms (raw * 10)
//! 8.010  raw -32768..  -> -327.68.. %  (raw / 100)
//! ```
//!
//! A family enum implements [`ScaledInteger`] and gets its
//! [`DataPointType`] implementation, `of`/`of_raw` constructors and the
//! `encode_to_bytes` encoder from the `impl_integer_dpt!` macro.

use core::fmt;

use crate::dpt::range::Scaling;
use crate::dpt::syntax::{numeric_token, parse_number, write_decimal};
use crate::dpt::{payload, DataPointType, DataPointValue, Payload};
use crate::error::{KnxError, Result};

/// Wire width and signedness of an integer DPT
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IntegerWidth {
    /// 8-bit unsigned
    U8,
    /// 8-bit two's complement
    I8,
    /// 16-bit unsigned, big-endian
    U16,
    /// 16-bit two's complement, big-endian
    I16,
    /// 32-bit unsigned, big-endian
    U32,
    /// 32-bit two's complement, big-endian
    I32,
}

impl IntegerWidth {
    /// Payload length in bytes
    pub const fn len(self) -> usize {
        match self {
            IntegerWidth::U8 | IntegerWidth::I8 => 1,
            IntegerWidth::U16 | IntegerWidth::I16 => 2,
            IntegerWidth::U32 | IntegerWidth::I32 => 4,
        }
    }

    /// Inclusive raw bounds `(min, max)`
    pub const fn bounds(self) -> (i64, i64) {
        match self {
            IntegerWidth::U8 => (0, u8::MAX as i64),
            IntegerWidth::I8 => (i8::MIN as i64, i8::MAX as i64),
            IntegerWidth::U16 => (0, u16::MAX as i64),
            IntegerWidth::I16 => (i16::MIN as i64, i16::MAX as i64),
            IntegerWidth::U32 => (0, u32::MAX as i64),
            IntegerWidth::I32 => (i32::MIN as i64, i32::MAX as i64),
        }
    }

    /// Read a raw code; `None` unless `data` has exactly [`len`](Self::len) bytes
    pub fn read(self, data: &[u8]) -> Option<i64> {
        let raw = match (self, data) {
            (IntegerWidth::U8, &[b]) => i64::from(b),
            (IntegerWidth::I8, &[b]) => i64::from(b as i8),
            (IntegerWidth::U16, &[b0, b1]) => i64::from(u16::from_be_bytes([b0, b1])),
            (IntegerWidth::I16, &[b0, b1]) => i64::from(i16::from_be_bytes([b0, b1])),
            (IntegerWidth::U32, &[b0, b1, b2, b3]) => {
                i64::from(u32::from_be_bytes([b0, b1, b2, b3]))
            }
            (IntegerWidth::I32, &[b0, b1, b2, b3]) => {
                i64::from(i32::from_be_bytes([b0, b1, b2, b3]))
            }
            _ => return None,
        };
        Some(raw)
    }

    /// Truncate `raw` to the wire width (two's complement wrap)
    pub const fn wrap(self, raw: i64) -> i64 {
        match self {
            IntegerWidth::U8 => raw as u8 as i64,
            IntegerWidth::I8 => raw as i8 as i64,
            IntegerWidth::U16 => raw as u16 as i64,
            IntegerWidth::I16 => raw as i16 as i64,
            IntegerWidth::U32 => raw as u32 as i64,
            IntegerWidth::I32 => raw as i32 as i64,
        }
    }

    /// Big-endian encoding of `raw`, truncated to the wire width
    pub fn write(self, raw: i64) -> Payload {
        let bytes = (raw as u32).to_be_bytes();
        payload(&bytes[4 - self.len()..])
    }
}

/// A DPT family transporting a scaled integer
pub trait ScaledInteger: DataPointType + Copy {
    /// Wire width of the family
    const WIDTH: IntegerWidth;

    /// Physical bounds and raw conversions of this subtype
    fn scaling(&self) -> Scaling;

    /// Decimals shown by `Display` (trailing zeros are trimmed)
    fn decimals(&self) -> usize {
        0
    }
}

/// Decoded value of a [`ScaledInteger`] codec
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IntegerValue<D> {
    dpt: D,
    raw: i64,
}

impl<D: ScaledInteger> IntegerValue<D> {
    /// Create a value from its physical representation
    ///
    /// The raw code is `round_half_up(to_raw(value))`.
    ///
    /// # Errors
    ///
    /// Returns an out-of-range error if `value` is outside the codec range.
    pub fn of(dpt: D, value: f64) -> Result<Self> {
        let scaling = dpt.scaling();
        if !scaling.is_range_closed(value) {
            return Err(KnxError::out_of_range(
                dpt.id(),
                value,
                scaling.lower(),
                scaling.upper(),
            ));
        }
        Ok(Self {
            dpt,
            raw: D::WIDTH.wrap(scaling.to_raw(value)),
        })
    }

    /// Create a value from its raw wire code
    ///
    /// # Errors
    ///
    /// Returns an out-of-range error if `raw` does not fit the wire width or
    /// maps outside the codec range.
    pub fn of_raw(dpt: D, raw: i64) -> Result<Self> {
        let (min, max) = D::WIDTH.bounds();
        if raw < min || raw > max {
            return Err(KnxError::out_of_range(dpt.id(), raw as f64, min as f64, max as f64));
        }
        let scaling = dpt.scaling();
        let value = scaling.to_physical(raw);
        if !scaling.is_range_closed(value) {
            return Err(KnxError::out_of_range(
                dpt.id(),
                value,
                scaling.lower(),
                scaling.upper(),
            ));
        }
        Ok(Self { dpt, raw })
    }

    /// Codec of this value
    #[inline]
    pub fn dpt(&self) -> D {
        self.dpt
    }

    /// Raw wire code
    #[inline]
    pub fn raw(&self) -> i64 {
        self.raw
    }

    /// Physical value
    #[inline]
    pub fn value(&self) -> f64 {
        self.dpt.scaling().to_physical(self.raw)
    }
}

impl<D: ScaledInteger> DataPointValue for IntegerValue<D> {
    fn dpt_id(&self) -> &'static str {
        self.dpt.id()
    }

    fn to_payload(&self) -> Payload {
        D::WIDTH.write(self.raw)
    }
}

impl<D: ScaledInteger> fmt::Display for IntegerValue<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_decimal(f, self.value(), self.dpt.decimals())?;
        if let Some(unit) = self.dpt.unit() {
            write!(f, " {unit}")?;
        }
        Ok(())
    }
}

pub(crate) fn is_integer_payload<D: ScaledInteger>(data: &[u8]) -> bool {
    data.len() == D::WIDTH.len()
}

pub(crate) fn is_integer_syntax<D: ScaledInteger>(dpt: &D, args: &[&str]) -> bool {
    numeric_token(args, dpt.unit()).is_some()
}

pub(crate) fn decode_integer<D: ScaledInteger>(dpt: D, data: &[u8]) -> Result<IntegerValue<D>> {
    let Some(raw) = D::WIDTH.read(data) else {
        return Err(KnxError::incompatible_bytes(dpt.id(), data));
    };
    IntegerValue::of_raw(dpt, raw)
}

pub(crate) fn decode_integer_syntax<D: ScaledInteger>(
    dpt: D,
    args: &[&str],
) -> Result<IntegerValue<D>> {
    let Some(value) = numeric_token(args, dpt.unit()).and_then(parse_number) else {
        return Err(KnxError::incompatible_syntax(dpt.id(), args));
    };
    IntegerValue::of(dpt, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_exact_length_only() {
        assert_eq!(IntegerWidth::U8.read(&[0xFF]), Some(255));
        assert_eq!(IntegerWidth::I8.read(&[0xFF]), Some(-1));
        assert_eq!(IntegerWidth::U16.read(&[0x12, 0x34]), Some(0x1234));
        assert_eq!(IntegerWidth::I16.read(&[0x80, 0x00]), Some(-32768));
        assert_eq!(IntegerWidth::U32.read(&[0xFF; 4]), Some(4_294_967_295));
        assert_eq!(IntegerWidth::I32.read(&[0x80, 0, 0, 0]), Some(-2_147_483_648));
        assert_eq!(IntegerWidth::U16.read(&[0x12]), None);
        assert_eq!(IntegerWidth::U8.read(&[0x12, 0x34]), None);
    }

    #[test]
    fn test_write_truncates() {
        assert_eq!(IntegerWidth::I8.write(-1).as_slice(), &[0xFF]);
        assert_eq!(IntegerWidth::U16.write(0x1_2345).as_slice(), &[0x23, 0x45]);
        assert_eq!(IntegerWidth::I16.write(-2).as_slice(), &[0xFF, 0xFE]);
        assert_eq!(IntegerWidth::I32.write(-1).as_slice(), &[0xFF; 4]);
    }

    #[test]
    fn test_wrap() {
        assert_eq!(IntegerWidth::U8.wrap(256), 0);
        assert_eq!(IntegerWidth::I8.wrap(128), -128);
        assert_eq!(IntegerWidth::U16.wrap(-1), 65535);
    }

    #[test]
    fn test_bounds() {
        assert_eq!(IntegerWidth::I8.bounds(), (-128, 127));
        assert_eq!(IntegerWidth::U32.bounds(), (0, 4_294_967_295));
    }
}
