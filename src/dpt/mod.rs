//! KNX Datapoint Types (DPT)
//!
//! This module provides encoding and decoding for KNX Datapoint Types.
//! DPTs define how to interpret the data payload in KNX telegrams.
//!
//! Every codec implements [`DataPointType`]: a cheap compatibility check
//! followed by a parse, for both the raw byte form and the tokenized text
//! form. Every decoded value implements [`DataPointValue`] and re-encodes to
//! its canonical bytes.
//!
//! ## Supported DPT Families
//!
//! - **DPT 1.xxx** - Boolean (1 bit): switches, buttons, binary sensors
//! - **DPT 2.xxx** - 1-bit controlled: priority switching
//! - **DPT 3.xxx** - 3-bit controlled: dimming, blind control
//! - **DPT 4.xxx** - Character (ASCII, ISO-8859-1)
//! - **DPT 5.xxx** - 8-bit unsigned: percentages, angles, counters
//! - **DPT 6.xxx** - 8-bit signed, status with mode
//! - **DPT 7.xxx** - 16-bit unsigned: pulses, brightness, color temperature
//! - **DPT 8.xxx** - 16-bit signed: deltas, rotation angles
//! - **DPT 9.xxx** - 2-byte float: temperature, illuminance, pressure
//! - **DPT 10.xxx / 11.xxx / 19.xxx** - Time of day, date, date with time
//! - **DPT 12.xxx / 13.xxx** - 32-bit unsigned and signed counters
//! - **DPT 14.xxx** - 4-byte IEEE float
//! - **DPT 16.xxx / 28.xxx** - Strings
//! - **DPT 17.xxx / 18.xxx / 26.xxx** - Scenes
//! - **DPT 20.xxx / 23.xxx** - Enumerations
//! - **DPT 21.xxx / 22.xxx** - Status and channel flags
//! - **DPT 232.xxx** - RGB color
//!
//! ## Usage
//!
//! ```rust
//! use knx_dpt::dpt::{DataPointType, DataPointValue, Dpt1, Dpt9};
//!
//! // Bytes received from the bus
//! let temp = Dpt9::Temperature.parse(&[0x0C, 0x1A])?;
//! assert_eq!(temp.value(), 21.0);
//!
//! // Application value to transmit
//! let on = Dpt1::Switch.of(true);
//! assert_eq!(on.to_payload().as_slice(), &[0x01]);
//! assert_eq!(on.to_string(), "On");
//!
//! // Textual form
//! let temp = Dpt9::Temperature.parse_syntax(&["21.5", "°C"])?;
//! assert_eq!(temp.value(), 21.5);
//! # Ok::<(), knx_dpt::KnxError>(())
//! ```

use core::fmt;

use crate::error::{KnxError, Result};

pub mod calendar;
pub mod charset;
pub mod enumeration;
pub mod flags;
pub mod integer;
pub mod range;
pub mod syntax;

pub mod dpt1;
pub mod dpt2;
pub mod dpt3;
pub mod dpt4;
pub mod dpt5;
pub mod dpt6;
pub mod dpt7;
pub mod dpt8;
pub mod dpt9;
pub mod dpt10;
pub mod dpt11;
pub mod dpt12;
pub mod dpt13;
pub mod dpt14;
pub mod dpt16;
pub mod dpt17;
pub mod dpt18;
pub mod dpt19;
pub mod dpt20;
pub mod dpt21;
pub mod dpt22;
pub mod dpt23;
pub mod dpt26;
pub mod dpt28;
pub mod dpt232;

// Re-export common types
#[doc(inline)]
pub use calendar::{DayOfWeek, KnxDate, KnxTime};
#[doc(inline)]
pub use charset::Charset;
#[doc(inline)]
pub use enumeration::{EnumDpt, EnumEntry, EnumRegistry, EnumRegistryBuilder, EnumValue};
#[cfg(feature = "sync")]
#[doc(inline)]
pub use enumeration::SharedEnumRegistry;
#[doc(inline)]
pub use flags::{ChannelList, Flags};
#[doc(inline)]
pub use integer::{IntegerValue, IntegerWidth, ScaledInteger};
#[doc(inline)]
pub use range::Scaling;

#[doc(inline)]
pub use dpt1::{BooleanValue, Dpt1};
#[doc(inline)]
pub use dpt2::{ControlledValue, Dpt2};
#[doc(inline)]
pub use dpt3::{ControlCommand, ControlCommandValue, Dpt3, StepCode};
#[doc(inline)]
pub use dpt4::{CharValue, Dpt4};
#[doc(inline)]
pub use dpt5::Dpt5;
#[doc(inline)]
pub use dpt6::{Dpt6, StatusMode, StatusModeValue};
#[doc(inline)]
pub use dpt7::Dpt7;
#[doc(inline)]
pub use dpt8::Dpt8;
#[doc(inline)]
pub use dpt9::{Dpt9, Float16Value};
#[doc(inline)]
pub use dpt10::{Dpt10, TimeValue};
#[doc(inline)]
pub use dpt11::{DateValue, Dpt11};
#[doc(inline)]
pub use dpt12::Dpt12;
#[doc(inline)]
pub use dpt13::Dpt13;
#[doc(inline)]
pub use dpt14::{Dpt14, Float32Value};
#[doc(inline)]
pub use dpt16::{Dpt16, StringValue};
#[doc(inline)]
pub use dpt17::Dpt17;
#[doc(inline)]
pub use dpt18::{Dpt18, SceneControlValue};
#[doc(inline)]
pub use dpt19::{DateTimeFlag, DateTimeFlags, DateTimeValue, Dpt19};
#[doc(inline)]
pub use dpt21::{Dpt21, FlagLayout, StatusFlagsType, StatusFlagsValue};
#[doc(inline)]
pub use dpt22::Dpt22;
#[doc(inline)]
pub use dpt26::{Dpt26, SceneInfoValue};
#[doc(inline)]
pub use dpt28::{Dpt28, Utf8Value};
#[doc(inline)]
pub use dpt232::{Dpt232, Rgb, RgbValue};

/// Largest payload any supported DPT produces (DPT 28 strings)
pub const MAX_PAYLOAD_LEN: usize = 64;

/// Canonical byte encoding of a value
pub type Payload = heapless::Vec<u8, MAX_PAYLOAD_LEN>;

/// Copy `bytes` into a [`Payload`], keeping at most [`MAX_PAYLOAD_LEN`] bytes.
pub(crate) fn payload(bytes: &[u8]) -> Payload {
    bytes.iter().copied().take(MAX_PAYLOAD_LEN).collect()
}

/// A decoded datapoint value
///
/// Values are immutable and remember the codec that produced them.
/// `Display` renders the human readable form (`"On"`, `"21.5 °C"`).
pub trait DataPointValue: fmt::Display {
    /// Identifier of the codec this value belongs to (e.g. `"9.001"`)
    fn dpt_id(&self) -> &'static str;

    /// Canonical byte encoding
    ///
    /// Decoding these bytes with the same codec yields an equal value.
    fn to_payload(&self) -> Payload;

    /// Write the canonical encoding into `buf`, returning the number of bytes written
    ///
    /// # Errors
    ///
    /// Returns `KnxError::BufferTooSmall` if `buf` cannot hold the payload.
    fn encode(&self, buf: &mut [u8]) -> Result<usize> {
        let payload = self.to_payload();
        let out = buf.get_mut(..payload.len()).ok_or(KnxError::BufferTooSmall)?;
        out.copy_from_slice(&payload);
        Ok(payload.len())
    }
}

/// A datapoint codec
///
/// Implementors provide the checks ([`is_compatible`](Self::is_compatible),
/// [`is_compatible_syntax`](Self::is_compatible_syntax)) and the decoding
/// hooks ([`decode`](Self::decode), [`decode_syntax`](Self::decode_syntax)).
/// Callers use [`parse`](Self::parse) and [`parse_syntax`](Self::parse_syntax),
/// which run the check first and wrap a rejection into the matching error.
///
/// The hooks are only called with input that passed the check, but they
/// never panic on any input.
pub trait DataPointType {
    /// Value type produced by this codec
    type Value: DataPointValue;

    /// Dotted identifier (e.g. `"9.001"`)
    fn id(&self) -> &'static str;

    /// Human readable description (e.g. `"Temperature"`)
    fn description(&self) -> &'static str;

    /// Physical unit, if any
    fn unit(&self) -> Option<&'static str> {
        None
    }

    /// Cheap structural check of a raw payload (length, sometimes content)
    fn is_compatible(&self, data: &[u8]) -> bool;

    /// Cheap structural check of the textual form (token count and shape)
    fn is_compatible_syntax(&self, args: &[&str]) -> bool;

    /// Check if the codec has a textual form at all
    fn has_syntax(&self) -> bool {
        true
    }

    /// Decode a payload that passed [`is_compatible`](Self::is_compatible)
    fn decode(&self, data: &[u8]) -> Result<Self::Value>;

    /// Decode tokens that passed [`is_compatible_syntax`](Self::is_compatible_syntax)
    fn decode_syntax(&self, args: &[&str]) -> Result<Self::Value>;

    /// Parse a raw payload
    ///
    /// # Errors
    ///
    /// - null argument if `data` is empty
    /// - incompatible bytes if the codec does not accept the payload
    /// - any error of [`decode`](Self::decode) (e.g. out of range)
    fn parse(&self, data: &[u8]) -> Result<Self::Value> {
        if data.is_empty() {
            return Err(KnxError::null_argument());
        }
        if !self.is_compatible(data) {
            crate::dpt_log!(debug, "DPT {} rejected {} bytes", self.id(), data.len());
            return Err(KnxError::incompatible_bytes(self.id(), data));
        }
        self.decode(data)
    }

    /// Parse the textual form
    ///
    /// # Errors
    ///
    /// - unsupported syntax if the codec has no textual form
    /// - null argument if `args` is empty
    /// - incompatible syntax if the tokens do not match the codec grammar
    fn parse_syntax(&self, args: &[&str]) -> Result<Self::Value> {
        if !self.has_syntax() {
            return Err(KnxError::unsupported_syntax(self.id(), args));
        }
        if args.is_empty() {
            return Err(KnxError::null_argument());
        }
        if !self.is_compatible_syntax(args) {
            crate::dpt_log!(debug, "DPT {} rejected {} tokens", self.id(), args.len());
            return Err(KnxError::incompatible_syntax(self.id(), args));
        }
        self.decode_syntax(args)
    }
}

/// Check that `data` is exactly one byte long and return it
#[inline]
pub(crate) fn single_byte(id: &'static str, data: &[u8]) -> Result<u8> {
    match data {
        [byte] => Ok(*byte),
        _ => Err(KnxError::incompatible_bytes(id, data)),
    }
}

/// Check that `data` is exactly `N` bytes long and copy it out
#[inline]
pub(crate) fn fixed_bytes<const N: usize>(id: &'static str, data: &[u8]) -> Result<[u8; N]> {
    let Ok(bytes) = <[u8; N]>::try_from(data) else {
        return Err(KnxError::incompatible_bytes(id, data));
    };
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_is_null_argument() {
        let err = Dpt9::Temperature.parse(&[]).unwrap_err();
        assert!(err.is_null_argument());
    }

    #[test]
    fn test_parse_wrong_length_is_incompatible() {
        let err = Dpt9::Temperature.parse(&[0x0C, 0x1A, 0x00]).unwrap_err();
        assert!(err.is_incompatible_bytes());
        let KnxError::Bytes(e) = err else {
            panic!("expected bytes error");
        };
        assert_eq!(e.dpt_id(), "9.001");
        assert_eq!(e.data(), &[0x0C, 0x1A, 0x00]);
    }

    #[test]
    fn test_parse_syntax_empty_is_null_argument() {
        let err = Dpt1::Switch.parse_syntax(&[]).unwrap_err();
        assert!(err.is_null_argument());
    }

    #[test]
    fn test_unsupported_syntax_wins_over_null() {
        let err = StatusMode.parse_syntax(&[]).unwrap_err();
        assert!(err.is_unsupported_syntax());
    }

    #[test]
    fn test_encode_into_buffer() {
        let value = Dpt9::Temperature.of(21.0).unwrap();
        let mut buf = [0u8; 4];
        assert_eq!(value.encode(&mut buf).unwrap(), 2);
        assert_eq!(&buf[..2], &[0x0C, 0x1A]);

        let mut small = [0u8; 1];
        assert!(matches!(value.encode(&mut small), Err(KnxError::BufferTooSmall)));
    }

    #[test]
    fn test_fixed_bytes() {
        assert_eq!(fixed_bytes::<2>("7.001", &[1, 2]).unwrap(), [1, 2]);
        assert!(fixed_bytes::<2>("7.001", &[1]).unwrap_err().is_incompatible_bytes());
        assert_eq!(single_byte("5.001", &[7]).unwrap(), 7);
        assert!(single_byte("5.001", &[7, 8]).is_err());
    }
}
