//! DPT 232.600 - RGB color (3 bytes)
//!
//! ## Format
//!
//! ```text
//! Byte 0: red   (0..255)
//! Byte 1: green (0..255)
//! Byte 2: blue  (0..255)
//! ```
//!
//! ## Textual Form
//!
//! `#RRGGBB` or three decimal tokens `R G B`.
//!
//! ## Example
//!
//! ```rust
//! use knx_dpt::dpt::{DataPointType, Dpt232, Rgb};
//!
//! let orange = Dpt232::Rgb.parse_syntax(&["#FF8000"])?;
//! assert_eq!(orange.rgb(), Rgb::new(255, 128, 0));
//! assert_eq!(Dpt232::Rgb.encode_to_bytes(orange.rgb()), [0xFF, 0x80, 0x00]);
//! # Ok::<(), knx_dpt::KnxError>(())
//! ```

use core::fmt;

use crate::dpt::syntax::parse_u8;
use crate::dpt::{fixed_bytes, payload, DataPointType, DataPointValue, Payload};
use crate::error::{KnxError, Result};

/// RGB triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    /// Red component
    pub red: u8,
    /// Green component
    pub green: u8,
    /// Blue component
    pub blue: u8,
}

impl Rgb {
    /// Create a color from its components
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Components as wire bytes
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    /// Parse `#RRGGBB`
    fn from_hex(token: &str) -> Option<Self> {
        let digits = token.strip_prefix('#').filter(|d| d.len() == 6)?;
        let component = |range: core::ops::Range<usize>| {
            digits.get(range).and_then(|hex| u8::from_str_radix(hex, 16).ok())
        };
        Some(Self::new(component(0..2)?, component(2..4)?, component(4..6)?))
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red, green, blue)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

/// DPT 232.xxx color types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Dpt232 {
    /// DPT 232.600 - RGB value 3x(0..255)
    Rgb,
}

impl Dpt232 {
    /// Get the DPT identifier string
    pub const fn identifier(&self) -> &'static str {
        "232.600"
    }

    /// Get the subtype name
    pub const fn name(&self) -> &'static str {
        "RGB value 3x(0..255)"
    }

    /// Create a value
    pub const fn of(self, rgb: Rgb) -> RgbValue {
        RgbValue { dpt: self, rgb }
    }

    /// Encode a color to its 3 wire bytes
    pub const fn encode_to_bytes(self, rgb: Rgb) -> [u8; 3] {
        rgb.to_bytes()
    }
}

fn tokens(args: &[&str]) -> Option<Rgb> {
    match args {
        [hex] => Rgb::from_hex(hex),
        [red, green, blue] => Some(Rgb::new(parse_u8(red)?, parse_u8(green)?, parse_u8(blue)?)),
        _ => None,
    }
}

/// Decoded DPT 232 value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RgbValue {
    dpt: Dpt232,
    rgb: Rgb,
}

impl RgbValue {
    /// Codec of this value
    pub fn dpt(&self) -> Dpt232 {
        self.dpt
    }

    /// Decoded color
    pub fn rgb(&self) -> Rgb {
        self.rgb
    }
}

impl DataPointValue for RgbValue {
    fn dpt_id(&self) -> &'static str {
        self.dpt.identifier()
    }

    fn to_payload(&self) -> Payload {
        payload(&self.rgb.to_bytes())
    }
}

impl fmt::Display for RgbValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rgb)
    }
}

impl DataPointType for Dpt232 {
    type Value = RgbValue;

    fn id(&self) -> &'static str {
        self.identifier()
    }

    fn description(&self) -> &'static str {
        self.name()
    }

    fn is_compatible(&self, data: &[u8]) -> bool {
        data.len() == 3
    }

    fn is_compatible_syntax(&self, args: &[&str]) -> bool {
        matches!(args.len(), 1 | 3)
    }

    fn decode(&self, data: &[u8]) -> Result<RgbValue> {
        let bytes = fixed_bytes::<3>(self.identifier(), data)?;
        Ok(self.of(Rgb::from(bytes)))
    }

    fn decode_syntax(&self, args: &[&str]) -> Result<RgbValue> {
        let Some(rgb) = tokens(args) else {
            return Err(KnxError::incompatible_syntax(self.identifier(), args));
        };
        Ok(self.of(rgb))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode() {
        let value = Dpt232::Rgb.parse(&[0x12, 0xAB, 0x00]).unwrap();
        assert_eq!(value.rgb(), Rgb::new(0x12, 0xAB, 0x00));
        assert_eq!(value.to_string(), "#12AB00");
        assert_eq!(value.to_payload().as_slice(), &[0x12, 0xAB, 0x00]);
    }

    #[test]
    fn test_syntax() {
        let hex = Dpt232::Rgb.parse_syntax(&["#ff8000"]).unwrap();
        let decimal = Dpt232::Rgb.parse_syntax(&["255", "128", "0"]).unwrap();
        assert_eq!(hex, decimal);

        assert!(Dpt232::Rgb.parse_syntax(&["#FF80"]).unwrap_err().is_incompatible_syntax());
        assert!(Dpt232::Rgb.parse_syntax(&["FF8000"]).unwrap_err().is_incompatible_syntax());
        assert!(Dpt232::Rgb.parse_syntax(&["256", "0", "0"]).unwrap_err().is_incompatible_syntax());
        assert!(Dpt232::Rgb.parse_syntax(&["1", "2"]).unwrap_err().is_incompatible_syntax());
    }

    #[test]
    fn test_wrong_length() {
        assert!(Dpt232::Rgb.parse(&[0x00, 0x00]).unwrap_err().is_incompatible_bytes());
    }
}
