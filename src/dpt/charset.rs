//! Character sets used by the character and string DPT families.
//!
//! - **US-ASCII** - DPT 4.001, 16.000
//! - **ISO-8859-1** - DPT 4.002, 16.001
//! - **UTF-8** - DPT 28.001
//!
//! Decoding trims trailing NUL padding before interpreting the bytes.

use core::fmt;

use crate::error::{KnxError, Result};

/// Charset bound to a string or character codec
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Charset {
    /// 7-bit US-ASCII
    Ascii,
    /// ISO-8859-1 (Latin-1), one byte per code point U+0000..U+00FF
    Iso8859_1,
    /// UTF-8
    Utf8,
}

impl Charset {
    /// Canonical charset name
    pub const fn name(self) -> &'static str {
        match self {
            Charset::Ascii => "US-ASCII",
            Charset::Iso8859_1 => "ISO-8859-1",
            Charset::Utf8 => "UTF-8",
        }
    }

    /// Check if a single character can be represented
    pub const fn can_encode(self, c: char) -> bool {
        match self {
            Charset::Ascii => c.is_ascii(),
            Charset::Iso8859_1 => (c as u32) <= 0xFF,
            Charset::Utf8 => true,
        }
    }

    /// Number of bytes `text` occupies once encoded, or the first
    /// character that cannot be represented.
    pub fn encoded_len(self, text: &str) -> core::result::Result<usize, char> {
        match self {
            Charset::Utf8 => Ok(text.len()),
            Charset::Ascii | Charset::Iso8859_1 => {
                let mut len = 0;
                for c in text.chars() {
                    if !self.can_encode(c) {
                        return Err(c);
                    }
                    len += 1;
                }
                Ok(len)
            }
        }
    }

    /// Encode `text` into the start of `buf`, returning the number of bytes written.
    ///
    /// `id` names the codec in the error when a character is not representable.
    pub fn encode_into(self, id: &'static str, text: &str, buf: &mut [u8]) -> Result<usize> {
        let len = self
            .encoded_len(text)
            .map_err(|c| KnxError::charset(id, self, c))?;
        let out = buf.get_mut(..len).ok_or(KnxError::BufferTooSmall)?;
        match self {
            Charset::Utf8 => out.copy_from_slice(text.as_bytes()),
            Charset::Ascii | Charset::Iso8859_1 => {
                for (slot, c) in out.iter_mut().zip(text.chars()) {
                    *slot = c as u8;
                }
            }
        }
        Ok(len)
    }

    /// Decode bytes after trimming trailing NUL padding.
    ///
    /// Returns `IncompatibleBytes` for byte sequences the charset cannot
    /// represent, for a NUL before the padding, or for text that does not
    /// fit into the output string.
    pub fn decode<const N: usize>(self, id: &'static str, data: &[u8]) -> Result<heapless::String<N>> {
        let trimmed = trim_nul(data);
        if trimmed.contains(&0) {
            return Err(KnxError::incompatible_bytes(id, data));
        }
        let mut text = heapless::String::new();
        match self {
            Charset::Utf8 => {
                let Ok(s) = core::str::from_utf8(trimmed) else {
                    return Err(KnxError::incompatible_bytes(id, data));
                };
                if text.push_str(s).is_err() {
                    return Err(KnxError::incompatible_bytes(id, data));
                }
            }
            Charset::Ascii | Charset::Iso8859_1 => {
                for &byte in trimmed {
                    if self == Charset::Ascii && !byte.is_ascii() {
                        return Err(KnxError::incompatible_bytes(id, data));
                    }
                    if text.push(char::from(byte)).is_err() {
                        return Err(KnxError::incompatible_bytes(id, data));
                    }
                }
            }
        }
        Ok(text)
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Strip trailing NUL padding.
pub(crate) fn trim_nul(data: &[u8]) -> &[u8] {
    let end = data.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    &data[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_nul() {
        assert_eq!(trim_nul(&[0x41, 0x42, 0x00, 0x00]), &[0x41, 0x42]);
        assert_eq!(trim_nul(&[0x00, 0x00]), &[] as &[u8]);
        assert_eq!(trim_nul(&[0x41, 0x00, 0x42]), &[0x41, 0x00, 0x42]);
    }

    #[test]
    fn test_ascii_round_trip() {
        let mut buf = [0u8; 14];
        let len = Charset::Ascii.encode_into("16.000", "KNX is OK", &mut buf).unwrap();
        assert_eq!(len, 9);
        let text: heapless::String<28> = Charset::Ascii.decode("16.000", &buf).unwrap();
        assert_eq!(text.as_str(), "KNX is OK");
    }

    #[test]
    fn test_ascii_rejects_non_ascii_text() {
        let mut buf = [0u8; 14];
        let err = Charset::Ascii.encode_into("16.000", "Grüezi", &mut buf).unwrap_err();
        assert!(err.is_charset_error());
    }

    #[test]
    fn test_ascii_rejects_high_bytes() {
        let result: Result<heapless::String<28>> = Charset::Ascii.decode("16.000", &[0x41, 0xE4]);
        assert!(result.unwrap_err().is_incompatible_bytes());
    }

    #[test]
    fn test_latin1_maps_bytes_to_code_points() {
        let text: heapless::String<28> = Charset::Iso8859_1.decode("16.001", &[0x47, 0x72, 0xFC, 0x00]).unwrap();
        assert_eq!(text.as_str(), "Grü");

        let mut buf = [0u8; 4];
        let len = Charset::Iso8859_1.encode_into("16.001", "Grü", &mut buf).unwrap();
        assert_eq!(&buf[..len], &[0x47, 0x72, 0xFC]);
    }

    #[test]
    fn test_latin1_rejects_euro_sign() {
        let mut buf = [0u8; 4];
        let err = Charset::Iso8859_1.encode_into("16.001", "€", &mut buf).unwrap_err();
        assert!(err.is_charset_error());
    }

    #[test]
    fn test_utf8_invalid_sequence() {
        let result: Result<heapless::String<16>> = Charset::Utf8.decode("28.001", &[0xC3, 0x28, 0x00]);
        assert!(result.unwrap_err().is_incompatible_bytes());
    }

    #[test]
    fn test_encode_buffer_too_small() {
        let mut buf = [0u8; 2];
        let err = Charset::Utf8.encode_into("28.001", "abc", &mut buf).unwrap_err();
        assert!(matches!(err, KnxError::BufferTooSmall));
    }
}
