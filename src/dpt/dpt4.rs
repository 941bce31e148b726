//! DPT 4.xxx - Character (1 byte)
//!
//! ## Format
//!
//! - 8 bits: character code in the subtype charset
//!
//! ## Subtypes
//!
//! - **4.001** - US-ASCII (bit 7 must be 0)
//! - **4.002** - ISO-8859-1
//!
//! ## Example
//!
//! ```rust
//! use knx_dpt::dpt::{DataPointType, Dpt4};
//!
//! assert_eq!(Dpt4::Ascii.encode_to_bytes('K')?, [0x4B]);
//! assert_eq!(Dpt4::Latin1.parse(&[0xE4])?.value(), 'ä');
//! assert!(Dpt4::Ascii.of('ä').is_err());
//! # Ok::<(), knx_dpt::KnxError>(())
//! ```

use core::fmt;

use crate::dpt::{payload, single_byte, Charset, DataPointType, DataPointValue, Payload};
use crate::error::{KnxError, Result};

/// DPT 4.xxx character types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Dpt4 {
    /// DPT 4.001 - ASCII character
    Ascii,
    /// DPT 4.002 - ISO-8859-1 character
    Latin1,
}

impl Dpt4 {
    /// Get the DPT identifier string
    pub const fn identifier(&self) -> &'static str {
        match self {
            Dpt4::Ascii => "4.001",
            Dpt4::Latin1 => "4.002",
        }
    }

    /// Get the subtype name
    pub const fn name(&self) -> &'static str {
        match self {
            Dpt4::Ascii => "Character (ASCII)",
            Dpt4::Latin1 => "Character (ISO-8859-1)",
        }
    }

    /// Charset of this subtype
    pub const fn charset(&self) -> Charset {
        match self {
            Dpt4::Ascii => Charset::Ascii,
            Dpt4::Latin1 => Charset::Iso8859_1,
        }
    }

    /// Create a value
    ///
    /// # Errors
    ///
    /// Returns a charset error if `c` cannot be represented.
    pub fn of(self, c: char) -> Result<CharValue> {
        if !self.charset().can_encode(c) {
            return Err(KnxError::charset(self.identifier(), self.charset(), c));
        }
        Ok(CharValue { dpt: self, value: c })
    }

    /// Encode a character to its wire byte
    pub fn encode_to_bytes(self, c: char) -> Result<[u8; 1]> {
        Ok([self.of(c)?.value as u8])
    }
}

/// Decoded DPT 4 value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CharValue {
    dpt: Dpt4,
    value: char,
}

impl CharValue {
    /// Codec of this value
    pub fn dpt(&self) -> Dpt4 {
        self.dpt
    }

    /// Decoded character
    pub fn value(&self) -> char {
        self.value
    }
}

impl DataPointValue for CharValue {
    fn dpt_id(&self) -> &'static str {
        self.dpt.identifier()
    }

    fn to_payload(&self) -> Payload {
        // Only charset-checked characters (<= U+00FF) are stored
        payload(&[self.value as u8])
    }
}

impl fmt::Display for CharValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl DataPointType for Dpt4 {
    type Value = CharValue;

    fn id(&self) -> &'static str {
        self.identifier()
    }

    fn description(&self) -> &'static str {
        self.name()
    }

    fn is_compatible(&self, data: &[u8]) -> bool {
        match (self, data) {
            (Dpt4::Ascii, [byte]) => byte.is_ascii(),
            (Dpt4::Latin1, [_]) => true,
            _ => false,
        }
    }

    fn is_compatible_syntax(&self, args: &[&str]) -> bool {
        matches!(args, [token] if token.chars().count() == 1)
    }

    fn decode(&self, data: &[u8]) -> Result<CharValue> {
        let byte = single_byte(self.identifier(), data)?;
        if *self == Dpt4::Ascii && !byte.is_ascii() {
            return Err(KnxError::incompatible_bytes(self.identifier(), data));
        }
        Ok(CharValue {
            dpt: *self,
            value: char::from(byte),
        })
    }

    fn decode_syntax(&self, args: &[&str]) -> Result<CharValue> {
        if let [token] = args {
            let mut chars = token.chars();
            if let (Some(c), None) = (chars.next(), chars.next()) {
                return self.of(c);
            }
        }
        Err(KnxError::incompatible_syntax(self.identifier(), args))
    }
}
