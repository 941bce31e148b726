//! DPT 16.xxx - Character string (14 bytes)
//!
//! ## Format
//!
//! - 14 bytes: characters in the subtype charset, padded with trailing NULs
//!
//! ## Subtypes
//!
//! - **16.000** - US-ASCII
//! - **16.001** - ISO-8859-1
//!
//! ## Textual Form
//!
//! The tokens joined with single spaces: `["KNX", "is", "OK"]` is `"KNX is OK"`.
//!
//! ## Example
//!
//! ```rust
//! use knx_dpt::dpt::{DataPointType, DataPointValue, Dpt16};
//!
//! let bytes = Dpt16::Ascii.encode_to_bytes("KNX is OK")?;
//! assert_eq!(&bytes[..9], b"KNX is OK");
//! assert_eq!(&bytes[9..], &[0; 5]);
//!
//! let text = Dpt16::Ascii.parse(&bytes)?;
//! assert_eq!(text.as_str(), "KNX is OK");
//! # Ok::<(), knx_dpt::KnxError>(())
//! ```

use core::fmt;

use crate::dpt::syntax::join_tokens;
use crate::dpt::{fixed_bytes, payload, Charset, DataPointType, DataPointValue, Payload};
use crate::error::{KnxError, Result};

/// Number of characters a DPT 16 string carries
pub const STRING_CAPACITY: usize = 14;

/// Decoded text storage (ISO-8859-1 characters take up to 2 UTF-8 bytes)
pub type Text = heapless::String<{ 2 * STRING_CAPACITY }>;

/// DPT 16.xxx string types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Dpt16 {
    /// DPT 16.000 - ASCII string
    Ascii,
    /// DPT 16.001 - ISO-8859-1 string
    Latin1,
}

impl Dpt16 {
    /// Get the DPT identifier string
    pub const fn identifier(&self) -> &'static str {
        match self {
            Dpt16::Ascii => "16.000",
            Dpt16::Latin1 => "16.001",
        }
    }

    /// Get the subtype name
    pub const fn name(&self) -> &'static str {
        match self {
            Dpt16::Ascii => "Character string (ASCII)",
            Dpt16::Latin1 => "Character string (ISO-8859-1)",
        }
    }

    /// Charset of this subtype
    pub const fn charset(&self) -> Charset {
        match self {
            Dpt16::Ascii => Charset::Ascii,
            Dpt16::Latin1 => Charset::Iso8859_1,
        }
    }

    /// Create a value
    ///
    /// # Errors
    ///
    /// - charset error if a character cannot be represented, or for NUL
    /// - incompatible syntax (too long) for more than 14 characters
    pub fn of(self, text: &str) -> Result<StringValue> {
        let id = self.identifier();
        if let Some(nul) = text.chars().find(|&c| c == '\0') {
            return Err(KnxError::charset(id, self.charset(), nul));
        }
        let len = self
            .charset()
            .encoded_len(text)
            .map_err(|c| KnxError::charset(id, self.charset(), c))?;
        if len > STRING_CAPACITY {
            return Err(KnxError::text_too_long(id, text, STRING_CAPACITY));
        }
        let mut stored = Text::new();
        if stored.push_str(text).is_err() {
            return Err(KnxError::text_too_long(id, text, STRING_CAPACITY));
        }
        Ok(StringValue { dpt: self, text: stored })
    }

    /// Encode text to its 14 NUL-padded wire bytes
    pub fn encode_to_bytes(self, text: &str) -> Result<[u8; STRING_CAPACITY]> {
        Ok(self.of(text)?.to_bytes())
    }
}

/// Decoded DPT 16 value
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StringValue {
    dpt: Dpt16,
    text: Text,
}

impl StringValue {
    /// Codec of this value
    pub fn dpt(&self) -> Dpt16 {
        self.dpt
    }

    /// Decoded text without padding
    pub fn as_str(&self) -> &str {
        &self.text
    }

    fn to_bytes(&self) -> [u8; STRING_CAPACITY] {
        let mut buf = [0u8; STRING_CAPACITY];
        let written = self
            .dpt
            .charset()
            .encode_into(self.dpt.identifier(), &self.text, &mut buf);
        debug_assert!(written.is_ok());
        buf
    }
}

impl DataPointValue for StringValue {
    fn dpt_id(&self) -> &'static str {
        self.dpt.identifier()
    }

    fn to_payload(&self) -> Payload {
        payload(&self.to_bytes())
    }
}

impl fmt::Display for StringValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl DataPointType for Dpt16 {
    type Value = StringValue;

    fn id(&self) -> &'static str {
        self.identifier()
    }

    fn description(&self) -> &'static str {
        self.name()
    }

    fn is_compatible(&self, data: &[u8]) -> bool {
        data.len() == STRING_CAPACITY
    }

    fn is_compatible_syntax(&self, _args: &[&str]) -> bool {
        true
    }

    fn decode(&self, data: &[u8]) -> Result<StringValue> {
        let bytes = fixed_bytes::<STRING_CAPACITY>(self.identifier(), data)?;
        let text = self.charset().decode(self.identifier(), &bytes)?;
        Ok(StringValue { dpt: *self, text })
    }

    fn decode_syntax(&self, args: &[&str]) -> Result<StringValue> {
        let Some(text) = join_tokens::<{ crate::dpt::MAX_PAYLOAD_LEN }>(args) else {
            let first = args.first().copied().unwrap_or_default();
            return Err(KnxError::text_too_long(self.identifier(), first, STRING_CAPACITY));
        };
        self.of(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_pads_with_nul() {
        let bytes = Dpt16::Ascii.encode_to_bytes("KNX").unwrap();
        assert_eq!(bytes, [b'K', b'N', b'X', 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(Dpt16::Ascii.encode_to_bytes("").unwrap(), [0; 14]);
    }

    #[test]
    fn test_decode_trims_padding() {
        let value = Dpt16::Ascii.parse(b"KNX is OK!\0\0\0\0").unwrap();
        assert_eq!(value.as_str(), "KNX is OK!");
        assert_eq!(value.to_string(), "KNX is OK!");
        assert_eq!(value.to_payload().as_slice(), b"KNX is OK!\0\0\0\0");
    }

    #[test]
    fn test_full_capacity() {
        let value = Dpt16::Latin1.of("äöüäöüäöüäöüäö").unwrap();
        assert_eq!(value.to_payload().len(), 14);
        assert_eq!(Dpt16::Latin1.parse(&value.to_payload()).unwrap(), value);
    }

    #[test]
    fn test_too_long() {
        let err = Dpt16::Ascii.of("fifteen chars!!").unwrap_err();
        assert!(err.is_incompatible_syntax());
        let KnxError::Syntax(e) = err else {
            panic!("expected syntax error");
        };
        assert!(e.is_too_long());
    }

    #[test]
    fn test_charset() {
        assert!(Dpt16::Ascii.of("Grüße").unwrap_err().is_charset_error());
        assert!(Dpt16::Latin1.of("Grüße").is_ok());
        assert!(Dpt16::Latin1.of("100 €").unwrap_err().is_charset_error());
        // Non-ASCII byte on the wire
        let mut bytes = [0u8; 14];
        bytes[0] = 0xE4;
        assert!(Dpt16::Ascii.parse(&bytes).unwrap_err().is_incompatible_bytes());
        assert_eq!(Dpt16::Latin1.parse(&bytes).unwrap().as_str(), "ä");
    }

    #[test]
    fn test_nul_in_text() {
        let err = Dpt16::Ascii.of("AB\0").unwrap_err();
        assert!(err.is_charset_error());
        assert!(Dpt16::Latin1.encode_to_bytes("\0").unwrap_err().is_charset_error());
        // A NUL inside the string is not padding
        let mut bytes = [0u8; 14];
        bytes[..3].copy_from_slice(b"A\0B");
        assert!(Dpt16::Ascii.parse(&bytes).unwrap_err().is_incompatible_bytes());
    }

    #[test]
    fn test_wrong_length() {
        assert!(Dpt16::Ascii.parse(b"short").unwrap_err().is_incompatible_bytes());
    }

    #[test]
    fn test_syntax() {
        let value = Dpt16::Ascii.parse_syntax(&["Hello", "KNX"]).unwrap();
        assert_eq!(value.as_str(), "Hello KNX");
        let err = Dpt16::Ascii.parse_syntax(&["a", "rather", "long", "sentence"]).unwrap_err();
        assert!(err.is_incompatible_syntax());
    }
}
