//! DPT 18.001 - Scene control (1 byte)
//!
//! ## Format
//!
//! ```text
//! bit:  7 6 5 4 3 2 1 0
//!       C r N N N N N N
//! ```
//!
//! - `C` - `0` = activate the scene, `1` = learn (store) the scene
//! - `r` - reserved, must be 0
//! - `N` - scene number 0..63
//!
//! ## Textual Form
//!
//! `[learn|activate] <scene>`, activation when the keyword is omitted.

use core::fmt;

use crate::dpt::dpt17::MAX_SCENE_NUMBER;
use crate::dpt::syntax::parse_u8;
use crate::dpt::{payload, single_byte, DataPointType, DataPointValue, Payload};
use crate::error::{KnxError, Result};

const LEARN_BIT: u8 = 0x80;
const RESERVED_BIT: u8 = 0x40;
const SCENE_MASK: u8 = 0x3F;

const LEARN: &str = "learn";
const ACTIVATE: &str = "activate";

/// DPT 18.xxx scene control types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Dpt18 {
    /// DPT 18.001 - Scene control
    SceneControl,
}

impl Dpt18 {
    /// Get the DPT identifier string
    pub const fn identifier(&self) -> &'static str {
        "18.001"
    }

    /// Get the subtype name
    pub const fn name(&self) -> &'static str {
        "Scene control"
    }

    /// Create a value
    ///
    /// # Errors
    ///
    /// Returns an out-of-range error for scene numbers above 63.
    pub fn of(self, learn: bool, scene: u8) -> Result<SceneControlValue> {
        if scene > MAX_SCENE_NUMBER {
            return Err(KnxError::out_of_range(
                self.identifier(),
                f64::from(scene),
                0.0,
                f64::from(MAX_SCENE_NUMBER),
            ));
        }
        Ok(SceneControlValue { dpt: self, learn, scene })
    }

    /// Encode a scene control command to its wire byte
    pub fn encode_to_bytes(self, learn: bool, scene: u8) -> Result<[u8; 1]> {
        Ok([self.of(learn, scene)?.to_byte()])
    }

    fn tokens(args: &[&str]) -> Option<(bool, u8)> {
        match args {
            [scene] => Some((false, parse_u8(scene)?)),
            [keyword, scene] if keyword.eq_ignore_ascii_case(LEARN) => Some((true, parse_u8(scene)?)),
            [keyword, scene] if keyword.eq_ignore_ascii_case(ACTIVATE) => {
                Some((false, parse_u8(scene)?))
            }
            _ => None,
        }
    }
}

/// Decoded DPT 18 value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SceneControlValue {
    dpt: Dpt18,
    learn: bool,
    scene: u8,
}

impl SceneControlValue {
    /// Codec of this value
    pub fn dpt(&self) -> Dpt18 {
        self.dpt
    }

    /// Check if the scene is to be learnt rather than activated
    pub fn is_learn(&self) -> bool {
        self.learn
    }

    /// Scene number (0..63)
    pub fn scene(&self) -> u8 {
        self.scene
    }

    fn to_byte(self) -> u8 {
        let learn = if self.learn { LEARN_BIT } else { 0 };
        learn | self.scene
    }
}

impl DataPointValue for SceneControlValue {
    fn dpt_id(&self) -> &'static str {
        self.dpt.identifier()
    }

    fn to_payload(&self) -> Payload {
        payload(&[self.to_byte()])
    }
}

impl fmt::Display for SceneControlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let action = if self.learn { LEARN } else { ACTIVATE };
        write!(f, "{action} {}", self.scene)
    }
}

impl DataPointType for Dpt18 {
    type Value = SceneControlValue;

    fn id(&self) -> &'static str {
        self.identifier()
    }

    fn description(&self) -> &'static str {
        self.name()
    }

    fn is_compatible(&self, data: &[u8]) -> bool {
        matches!(data, [byte] if byte & RESERVED_BIT == 0)
    }

    fn is_compatible_syntax(&self, args: &[&str]) -> bool {
        Self::tokens(args).is_some()
    }

    fn decode(&self, data: &[u8]) -> Result<SceneControlValue> {
        let byte = single_byte(self.identifier(), data)?;
        self.of(byte & LEARN_BIT != 0, byte & SCENE_MASK)
    }

    fn decode_syntax(&self, args: &[&str]) -> Result<SceneControlValue> {
        let Some((learn, scene)) = Self::tokens(args) else {
            return Err(KnxError::incompatible_syntax(self.identifier(), args));
        };
        self.of(learn, scene)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode() {
        assert_eq!(Dpt18::SceneControl.encode_to_bytes(false, 0).unwrap(), [0x00]);
        assert_eq!(Dpt18::SceneControl.encode_to_bytes(false, 63).unwrap(), [0x3F]);
        assert_eq!(Dpt18::SceneControl.encode_to_bytes(true, 5).unwrap(), [0x85]);
        assert!(Dpt18::SceneControl.of(true, 64).unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_decode() {
        let value = Dpt18::SceneControl.parse(&[0x85]).unwrap();
        assert!(value.is_learn());
        assert_eq!(value.scene(), 5);
        assert_eq!(value.to_string(), "learn 5");
    }

    #[test]
    fn test_reserved_bit_rejected() {
        assert!(Dpt18::SceneControl.parse(&[0x40]).unwrap_err().is_incompatible_bytes());
    }

    #[test]
    fn test_syntax() {
        assert_eq!(Dpt18::SceneControl.parse_syntax(&["12"]).unwrap().to_string(), "activate 12");
        let value = Dpt18::SceneControl.parse_syntax(&["Learn", "12"]).unwrap();
        assert_eq!(value.to_payload().as_slice(), &[0x8C]);
        assert!(Dpt18::SceneControl.parse_syntax(&["activate", "64"]).unwrap_err().is_out_of_range());
        assert!(Dpt18::SceneControl.parse_syntax(&["store", "1"]).unwrap_err().is_incompatible_syntax());
    }
}
