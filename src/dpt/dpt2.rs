//! DPT 2.xxx - 1-bit controlled (2 bits)
//!
//! A boolean paired with a control (priority) bit. With the control bit
//! set, the receiver must apply the value regardless of its own logic.
//!
//! ## Format
//!
//! ```text
//! bit:  7 6 5 4 3 2 1 0
//!       0 0 0 0 0 0 c v
//! ```
//!
//! - `c` - control (`0` = no control, `1` = controlled)
//! - `v` - value, labelled like the matching DPT 1 subtype
//!
//! Unused bits are ignored on decode.
//!
//! ## Textual Form
//!
//! `[controlled] <boolean>`, e.g. `["controlled", "on"]` or `["off"]`.

use core::fmt;

use crate::dpt::syntax::parse_bool;
use crate::dpt::{payload, single_byte, DataPointType, DataPointValue, Dpt1, Payload};
use crate::error::{KnxError, Result};

const CONTROL_BIT: u8 = 0x02;
const VALUE_BIT: u8 = 0x01;
const CONTROLLED: &str = "controlled";

/// DPT 2.xxx 1-bit controlled types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Dpt2 {
    /// DPT 2.001 - Switch control
    Switch,
    /// DPT 2.002 - Bool control
    Bool,
    /// DPT 2.003 - Enable control
    Enable,
    /// DPT 2.004 - Ramp control
    Ramp,
    /// DPT 2.005 - Alarm control
    Alarm,
    /// DPT 2.006 - Binary value control
    BinaryValue,
    /// DPT 2.007 - Step control
    Step,
    /// DPT 2.008 - Direction control 1 (up/down)
    UpDown,
    /// DPT 2.009 - Direction control 2 (open/close)
    OpenClose,
    /// DPT 2.010 - Start control
    Start,
    /// DPT 2.011 - State control
    State,
    /// DPT 2.012 - Invert control
    Invert,
}

impl Dpt2 {
    /// Get the DPT identifier string (e.g., "2.001")
    pub const fn identifier(&self) -> &'static str {
        match self {
            Dpt2::Switch => "2.001",
            Dpt2::Bool => "2.002",
            Dpt2::Enable => "2.003",
            Dpt2::Ramp => "2.004",
            Dpt2::Alarm => "2.005",
            Dpt2::BinaryValue => "2.006",
            Dpt2::Step => "2.007",
            Dpt2::UpDown => "2.008",
            Dpt2::OpenClose => "2.009",
            Dpt2::Start => "2.010",
            Dpt2::State => "2.011",
            Dpt2::Invert => "2.012",
        }
    }

    /// Get the subtype name
    pub const fn name(&self) -> &'static str {
        match self {
            Dpt2::Switch => "Switch controlled",
            Dpt2::Bool => "Boolean controlled",
            Dpt2::Enable => "Enable controlled",
            Dpt2::Ramp => "Ramp controlled",
            Dpt2::Alarm => "Alarm controlled",
            Dpt2::BinaryValue => "Binary value controlled",
            Dpt2::Step => "Step controlled",
            Dpt2::UpDown => "Up/Down controlled",
            Dpt2::OpenClose => "Open/Close controlled",
            Dpt2::Start => "Start controlled",
            Dpt2::State => "State controlled",
            Dpt2::Invert => "Invert controlled",
        }
    }

    /// DPT 1 subtype providing the value labels
    pub const fn boolean(&self) -> Dpt1 {
        match self {
            Dpt2::Switch => Dpt1::Switch,
            Dpt2::Bool => Dpt1::Bool,
            Dpt2::Enable => Dpt1::Enable,
            Dpt2::Ramp => Dpt1::Ramp,
            Dpt2::Alarm => Dpt1::Alarm,
            Dpt2::BinaryValue => Dpt1::BinaryValue,
            Dpt2::Step => Dpt1::Step,
            Dpt2::UpDown => Dpt1::UpDown,
            Dpt2::OpenClose => Dpt1::OpenClose,
            Dpt2::Start => Dpt1::Start,
            Dpt2::State => Dpt1::State,
            Dpt2::Invert => Dpt1::Invert,
        }
    }

    /// Create a value
    pub const fn of(self, control: bool, value: bool) -> ControlledValue {
        ControlledValue { dpt: self, control, value }
    }

    /// Encode a value to its wire byte
    pub const fn encode_to_bytes(self, control: bool, value: bool) -> [u8; 1] {
        let c = if control { CONTROL_BIT } else { 0 };
        let v = if value { VALUE_BIT } else { 0 };
        [c | v]
    }
}

/// Decoded DPT 2 value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControlledValue {
    dpt: Dpt2,
    control: bool,
    value: bool,
}

impl ControlledValue {
    /// Codec of this value
    pub fn dpt(&self) -> Dpt2 {
        self.dpt
    }

    /// Control bit
    pub fn is_controlled(&self) -> bool {
        self.control
    }

    /// Value bit
    pub fn value(&self) -> bool {
        self.value
    }
}

impl DataPointValue for ControlledValue {
    fn dpt_id(&self) -> &'static str {
        self.dpt.identifier()
    }

    fn to_payload(&self) -> Payload {
        payload(&self.dpt.encode_to_bytes(self.control, self.value))
    }
}

impl fmt::Display for ControlledValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.control {
            write!(f, "{CONTROLLED} ")?;
        }
        f.write_str(self.dpt.boolean().label(self.value))
    }
}

impl DataPointType for Dpt2 {
    type Value = ControlledValue;

    fn id(&self) -> &'static str {
        self.identifier()
    }

    fn description(&self) -> &'static str {
        self.name()
    }

    fn is_compatible(&self, data: &[u8]) -> bool {
        data.len() == 1
    }

    fn is_compatible_syntax(&self, args: &[&str]) -> bool {
        split_control(args).is_some_and(|(_, rest)| {
            parse_bool(self.boolean().labels(), rest).is_some()
        })
    }

    fn decode(&self, data: &[u8]) -> Result<ControlledValue> {
        let byte = single_byte(self.identifier(), data)?;
        Ok(self.of(byte & CONTROL_BIT != 0, byte & VALUE_BIT != 0))
    }

    fn decode_syntax(&self, args: &[&str]) -> Result<ControlledValue> {
        let Some((control, rest)) = split_control(args) else {
            return Err(KnxError::incompatible_syntax(self.identifier(), args));
        };
        parse_bool(self.boolean().labels(), rest)
            .map(|value| self.of(control, value))
            .ok_or_else(|| KnxError::incompatible_syntax(self.identifier(), args))
    }
}

/// Strip the optional `controlled` keyword
fn split_control<'a, 'b>(args: &'a [&'b str]) -> Option<(bool, &'a [&'b str])> {
    match args {
        [] => None,
        [first, rest @ ..] if first.eq_ignore_ascii_case(CONTROLLED) => {
            (!rest.is_empty()).then_some((true, rest))
        }
        _ => Some((false, args)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode() {
        assert_eq!(Dpt2::Switch.encode_to_bytes(false, false), [0x00]);
        assert_eq!(Dpt2::Switch.encode_to_bytes(false, true), [0x01]);
        assert_eq!(Dpt2::Switch.encode_to_bytes(true, false), [0x02]);
        assert_eq!(Dpt2::Switch.encode_to_bytes(true, true), [0x03]);
    }

    #[test]
    fn test_decode() {
        let value = Dpt2::Alarm.parse(&[0x03]).unwrap();
        assert!(value.is_controlled());
        assert!(value.value());

        // Unused bits are ignored
        let value = Dpt2::Alarm.parse(&[0xFD]).unwrap();
        assert!(!value.is_controlled());
        assert!(value.value());
        assert_eq!(value.to_payload().as_slice(), &[0x01]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Dpt2::Switch.of(true, true).to_string(), "controlled On");
        assert_eq!(Dpt2::Switch.of(false, false).to_string(), "Off");
        assert_eq!(Dpt2::UpDown.of(true, false).to_string(), "controlled Up");
    }

    #[test]
    fn test_syntax() {
        let value = Dpt2::Switch.parse_syntax(&["controlled", "on"]).unwrap();
        assert_eq!(value, Dpt2::Switch.of(true, true));

        let value = Dpt2::Alarm.parse_syntax(&["no", "alarm"]).unwrap();
        assert_eq!(value, Dpt2::Alarm.of(false, false));

        assert!(Dpt2::Switch.parse_syntax(&["controlled"]).unwrap_err().is_incompatible_syntax());
        assert!(Dpt2::Switch.parse_syntax(&["up"]).unwrap_err().is_incompatible_syntax());
    }

    #[test]
    fn test_identifier() {
        assert_eq!(Dpt2::Switch.id(), "2.001");
        assert_eq!(Dpt2::Invert.id(), "2.012");
        assert_eq!(Dpt2::OpenClose.boolean(), Dpt1::OpenClose);
    }
}
