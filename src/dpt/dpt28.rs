//! DPT 28.001 - Variable length UTF-8 string
//!
//! ## Format
//!
//! - UTF-8 bytes followed by a single NUL terminator
//! - at most 63 text bytes, so a payload is 1..=64 bytes
//!
//! Decoding trims trailing NULs, so a payload without terminator is
//! accepted as well. Encoding always appends exactly one NUL.
//!
//! ## Example
//!
//! ```rust
//! use knx_dpt::dpt::{DataPointType, DataPointValue, Dpt28};
//!
//! let value = Dpt28::Utf8.of("Küche 🌡")?;
//! assert_eq!(value.to_payload().last(), Some(&0x00));
//! assert_eq!(Dpt28::Utf8.parse(&value.to_payload())?.as_str(), "Küche 🌡");
//! # Ok::<(), knx_dpt::KnxError>(())
//! ```

use core::fmt;

use crate::dpt::syntax::join_tokens;
use crate::dpt::{payload, Charset, DataPointType, DataPointValue, Payload, MAX_PAYLOAD_LEN};
use crate::error::{KnxError, Result};

/// Maximum number of UTF-8 bytes of text, excluding the terminator
pub const TEXT_CAPACITY: usize = MAX_PAYLOAD_LEN - 1;

/// Decoded text storage
pub type Utf8Text = heapless::String<TEXT_CAPACITY>;

/// DPT 28.xxx string types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Dpt28 {
    /// DPT 28.001 - UTF-8 string
    Utf8,
}

impl Dpt28 {
    /// Get the DPT identifier string
    pub const fn identifier(&self) -> &'static str {
        "28.001"
    }

    /// Get the subtype name
    pub const fn name(&self) -> &'static str {
        "UTF-8 string"
    }

    /// Create a value
    ///
    /// # Errors
    ///
    /// Returns an incompatible syntax error (too long) above 63 bytes of
    /// text, or a charset error for text containing NUL.
    pub fn of(self, text: &str) -> Result<Utf8Value> {
        let id = self.identifier();
        if let Some(nul) = text.chars().find(|&c| c == '\0') {
            return Err(KnxError::charset(id, Charset::Utf8, nul));
        }
        let mut stored = Utf8Text::new();
        if stored.push_str(text).is_err() {
            return Err(KnxError::text_too_long(id, text, TEXT_CAPACITY));
        }
        Ok(Utf8Value { dpt: self, text: stored })
    }

    /// Encode text to its NUL-terminated wire bytes
    pub fn encode_to_bytes(self, text: &str) -> Result<Payload> {
        Ok(self.of(text)?.to_payload())
    }
}

/// Decoded DPT 28 value
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Utf8Value {
    dpt: Dpt28,
    text: Utf8Text,
}

impl Utf8Value {
    /// Codec of this value
    pub fn dpt(&self) -> Dpt28 {
        self.dpt
    }

    /// Decoded text without terminator
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl DataPointValue for Utf8Value {
    fn dpt_id(&self) -> &'static str {
        self.dpt.identifier()
    }

    fn to_payload(&self) -> Payload {
        // Text is at most TEXT_CAPACITY bytes, the terminator always fits
        let mut bytes = payload(self.text.as_bytes());
        let _ = bytes.push(0);
        bytes
    }
}

impl fmt::Display for Utf8Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl DataPointType for Dpt28 {
    type Value = Utf8Value;

    fn id(&self) -> &'static str {
        self.identifier()
    }

    fn description(&self) -> &'static str {
        self.name()
    }

    fn is_compatible(&self, data: &[u8]) -> bool {
        (1..=MAX_PAYLOAD_LEN).contains(&data.len())
    }

    fn is_compatible_syntax(&self, _args: &[&str]) -> bool {
        true
    }

    fn decode(&self, data: &[u8]) -> Result<Utf8Value> {
        let text = Charset::Utf8.decode(self.identifier(), data)?;
        Ok(Utf8Value { dpt: *self, text })
    }

    fn decode_syntax(&self, args: &[&str]) -> Result<Utf8Value> {
        let Some(text) = join_tokens::<MAX_PAYLOAD_LEN>(args) else {
            let first = args.first().copied().unwrap_or_default();
            return Err(KnxError::text_too_long(self.identifier(), first, TEXT_CAPACITY));
        };
        self.of(&text)
    }
}
