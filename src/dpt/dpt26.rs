//! DPT 26.001 - Scene information (1 byte)
//!
//! ## Format
//!
//! ```text
//! bit:  7 6 5 4 3 2 1 0
//!       r I N N N N N N
//! ```
//!
//! - `r` - reserved, must be 0
//! - `I` - `0` = scene active, `1` = scene inactive
//! - `N` - scene number 0..63
//!
//! ## Textual Form
//!
//! `<scene> [active|inactive]`, active when the keyword is omitted.

use core::fmt;

use crate::dpt::dpt17::MAX_SCENE_NUMBER;
use crate::dpt::syntax::parse_u8;
use crate::dpt::{payload, single_byte, DataPointType, DataPointValue, Payload};
use crate::error::{KnxError, Result};

const RESERVED_BIT: u8 = 0x80;
const INACTIVE_BIT: u8 = 0x40;
const SCENE_MASK: u8 = 0x3F;

const ACTIVE: &str = "active";
const INACTIVE: &str = "inactive";

/// DPT 26.xxx scene information types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Dpt26 {
    /// DPT 26.001 - Scene information
    SceneInfo,
}

impl Dpt26 {
    /// Get the DPT identifier string
    pub const fn identifier(&self) -> &'static str {
        "26.001"
    }

    /// Get the subtype name
    pub const fn name(&self) -> &'static str {
        "Scene information"
    }

    /// Create a value
    ///
    /// # Errors
    ///
    /// Returns an out-of-range error for scene numbers above 63.
    pub fn of(self, scene: u8, active: bool) -> Result<SceneInfoValue> {
        if scene > MAX_SCENE_NUMBER {
            return Err(KnxError::out_of_range(
                self.identifier(),
                f64::from(scene),
                0.0,
                f64::from(MAX_SCENE_NUMBER),
            ));
        }
        Ok(SceneInfoValue { dpt: self, scene, active })
    }

    /// Encode scene information to its wire byte
    pub fn encode_to_bytes(self, scene: u8, active: bool) -> Result<[u8; 1]> {
        Ok([self.of(scene, active)?.to_byte()])
    }
}

fn tokens(args: &[&str]) -> Option<(u8, bool)> {
    let (scene, active) = match args {
        [scene] => (scene, true),
        [scene, state] if state.eq_ignore_ascii_case(ACTIVE) => (scene, true),
        [scene, state] if state.eq_ignore_ascii_case(INACTIVE) => (scene, false),
        _ => return None,
    };
    Some((parse_u8(scene)?, active))
}

/// Decoded DPT 26 value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SceneInfoValue {
    dpt: Dpt26,
    scene: u8,
    active: bool,
}

impl SceneInfoValue {
    /// Codec of this value
    pub fn dpt(&self) -> Dpt26 {
        self.dpt
    }

    /// Scene number (0..63)
    pub fn scene(&self) -> u8 {
        self.scene
    }

    /// Check if the scene is active
    pub fn is_active(&self) -> bool {
        self.active
    }

    fn to_byte(self) -> u8 {
        let inactive = if self.active { 0 } else { INACTIVE_BIT };
        inactive | self.scene
    }
}

impl DataPointValue for SceneInfoValue {
    fn dpt_id(&self) -> &'static str {
        self.dpt.identifier()
    }

    fn to_payload(&self) -> Payload {
        payload(&[self.to_byte()])
    }
}

impl fmt::Display for SceneInfoValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.active { ACTIVE } else { INACTIVE };
        write!(f, "{} {state}", self.scene)
    }
}

impl DataPointType for Dpt26 {
    type Value = SceneInfoValue;

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
        tokens(args).is_some()
    }

    fn decode(&self, data: &[u8]) -> Result<SceneInfoValue> {
        let byte = single_byte(self.identifier(), data)?;
        self.of(byte & SCENE_MASK, byte & INACTIVE_BIT == 0)
    }

    fn decode_syntax(&self, args: &[&str]) -> Result<SceneInfoValue> {
        let Some((scene, active)) = tokens(args) else {
            return Err(KnxError::incompatible_syntax(self.identifier(), args));
        };
        self.of(scene, active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode() {
        assert_eq!(Dpt26::SceneInfo.encode_to_bytes(5, true).unwrap(), [0x05]);
        assert_eq!(Dpt26::SceneInfo.encode_to_bytes(5, false).unwrap(), [0x45]);
        assert_eq!(Dpt26::SceneInfo.encode_to_bytes(63, false).unwrap(), [0x7F]);
        assert!(Dpt26::SceneInfo.of(64, true).unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_decode() {
        let value = Dpt26::SceneInfo.parse(&[0x4C]).unwrap();
        assert_eq!(value.scene(), 12);
        assert!(!value.is_active());
        assert_eq!(value.to_string(), "12 inactive");
        assert!(Dpt26::SceneInfo.parse(&[0x80]).unwrap_err().is_incompatible_bytes());
    }

    #[test]
    fn test_syntax() {
        assert_eq!(Dpt26::SceneInfo.parse_syntax(&["7"]).unwrap().to_payload().as_slice(), &[0x07]);
        let value = Dpt26::SceneInfo.parse_syntax(&["7", "Inactive"]).unwrap();
        assert_eq!(value.to_payload().as_slice(), &[0x47]);
        assert!(Dpt26::SceneInfo.parse_syntax(&["64"]).unwrap_err().is_out_of_range());
        assert!(Dpt26::SceneInfo.parse_syntax(&["7", "off"]).unwrap_err().is_incompatible_syntax());
    }
}
