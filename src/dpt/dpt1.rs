//! DPT 1.xxx - Boolean (1-bit)
//!
//! Boolean datapoint types represent binary states (on/off, true/false, etc.)
//! encoded as a single bit (LSB of the data byte in APDU).
//!
//! ## Format
//!
//! - 7 bits: unused (always 0)
//! - 1 bit: data
//!   - `0` = false/off/disable/...
//!   - `1` = true/on/enable/...
//!
//! Decoding is lenient: only `0x01` decodes to `true`, every other byte
//! decodes to `false`.
//!
//! ## Common Subtypes
//!
//! - **1.001** - Switch (off/on)
//! - **1.002** - Bool (false/true)
//! - **1.003** - Enable (disable/enable)
//! - **1.008** - UpDown (up/down)
//! - **1.009** - OpenClose (open/close)
//! - **1.010** - Start (stop/start)
//! - **1.100** - Heat/Cool (cooling/heating)
//!
//! ## Textual Form
//!
//! `true`, `false`, `1`, `0` or one of the subtype labels, case-insensitive
//! (`["on"]`, `["no", "alarm"]`).
//!
//! ## Example
//!
//! ```rust
//! use knx_dpt::dpt::{DataPointType, DataPointValue, Dpt1};
//!
//! // Turn on a switch
//! assert_eq!(Dpt1::Switch.encode_to_bytes(true), [0x01]);
//!
//! // Decode
//! let state = Dpt1::Switch.parse(&[0x01])?;
//! assert!(state.value());
//! assert_eq!(state.to_string(), "On");
//! # Ok::<(), knx_dpt::KnxError>(())
//! ```

use core::fmt;

use crate::dpt::syntax::parse_bool;
use crate::dpt::{payload, single_byte, DataPointType, DataPointValue, Payload};
use crate::error::{KnxError, Result};

/// DPT 1.xxx Boolean types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Dpt1 {
    /// DPT 1.001 - Switch (off/on)
    Switch,
    /// DPT 1.002 - Bool (false/true)
    Bool,
    /// DPT 1.003 - Enable (disable/enable)
    Enable,
    /// DPT 1.004 - Ramp (no ramp/ramp)
    Ramp,
    /// DPT 1.005 - Alarm (no alarm/alarm)
    Alarm,
    /// DPT 1.006 - BinaryValue (low/high)
    BinaryValue,
    /// DPT 1.007 - Step (decrease/increase)
    Step,
    /// DPT 1.008 - UpDown (up/down)
    UpDown,
    /// DPT 1.009 - OpenClose (open/close)
    OpenClose,
    /// DPT 1.010 - Start (stop/start)
    Start,
    /// DPT 1.011 - State (inactive/active)
    State,
    /// DPT 1.012 - Invert (not inverted/inverted)
    Invert,
    /// DPT 1.013 - Dim send style (start/stop, cyclically)
    DimSendStyle,
    /// DPT 1.014 - Input source (fixed/calculated)
    InputSource,
    /// DPT 1.015 - Reset (no action/reset)
    Reset,
    /// DPT 1.016 - Acknowledge (no action/acknowledge)
    Ack,
    /// DPT 1.017 - Trigger (trigger/trigger)
    Trigger,
    /// DPT 1.018 - Occupancy (not occupied/occupied)
    Occupancy,
    /// DPT 1.019 - Window/door (closed/open)
    WindowDoor,
    /// DPT 1.021 - Logical function (OR/AND)
    LogicalFunction,
    /// DPT 1.022 - Scene A/B (scene A/scene B)
    SceneAB,
    /// DPT 1.023 - Shutter/blinds mode
    ShutterBlindsMode,
    /// DPT 1.024 - Day/night (day/night)
    DayNight,
    /// DPT 1.100 - Heat/cool (cooling/heating)
    HeatCool,
}

impl Dpt1 {
    /// Get the DPT identifier string (e.g., "1.001")
    pub const fn identifier(&self) -> &'static str {
        match self {
            Dpt1::Switch => "1.001",
            Dpt1::Bool => "1.002",
            Dpt1::Enable => "1.003",
            Dpt1::Ramp => "1.004",
            Dpt1::Alarm => "1.005",
            Dpt1::BinaryValue => "1.006",
            Dpt1::Step => "1.007",
            Dpt1::UpDown => "1.008",
            Dpt1::OpenClose => "1.009",
            Dpt1::Start => "1.010",
            Dpt1::State => "1.011",
            Dpt1::Invert => "1.012",
            Dpt1::DimSendStyle => "1.013",
            Dpt1::InputSource => "1.014",
            Dpt1::Reset => "1.015",
            Dpt1::Ack => "1.016",
            Dpt1::Trigger => "1.017",
            Dpt1::Occupancy => "1.018",
            Dpt1::WindowDoor => "1.019",
            Dpt1::LogicalFunction => "1.021",
            Dpt1::SceneAB => "1.022",
            Dpt1::ShutterBlindsMode => "1.023",
            Dpt1::DayNight => "1.024",
            Dpt1::HeatCool => "1.100",
        }
    }

    /// Get the subtype name
    pub const fn name(&self) -> &'static str {
        match self {
            Dpt1::Switch => "Switch",
            Dpt1::Bool => "Boolean",
            Dpt1::Enable => "Enable",
            Dpt1::Ramp => "Ramp",
            Dpt1::Alarm => "Alarm",
            Dpt1::BinaryValue => "Binary value",
            Dpt1::Step => "Step",
            Dpt1::UpDown => "Up/Down",
            Dpt1::OpenClose => "Open/Close",
            Dpt1::Start => "Start",
            Dpt1::State => "State",
            Dpt1::Invert => "Invert",
            Dpt1::DimSendStyle => "Dim send-style",
            Dpt1::InputSource => "Input source",
            Dpt1::Reset => "Reset",
            Dpt1::Ack => "Acknowledge",
            Dpt1::Trigger => "Trigger",
            Dpt1::Occupancy => "Occupancy",
            Dpt1::WindowDoor => "Window/Door",
            Dpt1::LogicalFunction => "Logical function",
            Dpt1::SceneAB => "Scene A/B",
            Dpt1::ShutterBlindsMode => "Shutter/Blinds mode",
            Dpt1::DayNight => "Day/Night",
            Dpt1::HeatCool => "Heat/Cool",
        }
    }

    /// Get semantic labels for false/true values
    ///
    /// Returns a tuple (false_label, true_label)
    pub const fn labels(&self) -> (&'static str, &'static str) {
        match self {
            Dpt1::Switch => ("Off", "On"),
            Dpt1::Bool => ("False", "True"),
            Dpt1::Enable => ("Disable", "Enable"),
            Dpt1::Ramp => ("No ramp", "Ramp"),
            Dpt1::Alarm => ("No alarm", "Alarm"),
            Dpt1::BinaryValue => ("Low", "High"),
            Dpt1::Step => ("Decrease", "Increase"),
            Dpt1::UpDown => ("Up", "Down"),
            Dpt1::OpenClose => ("Open", "Close"),
            Dpt1::Start => ("Stop", "Start"),
            Dpt1::State => ("Inactive", "Active"),
            Dpt1::Invert => ("Not inverted", "Inverted"),
            Dpt1::DimSendStyle => ("Start/Stop", "Cyclically"),
            Dpt1::InputSource => ("Fixed", "Calculated"),
            Dpt1::Reset => ("No action", "Reset"),
            Dpt1::Ack => ("No action", "Acknowledge"),
            Dpt1::Trigger => ("Trigger", "Trigger"),
            Dpt1::Occupancy => ("Not occupied", "Occupied"),
            Dpt1::WindowDoor => ("Closed", "Open"),
            Dpt1::LogicalFunction => ("OR", "AND"),
            Dpt1::SceneAB => ("Scene A", "Scene B"),
            Dpt1::ShutterBlindsMode => ("Only move Up/Down", "Move Up/Down + Step-Stop"),
            Dpt1::DayNight => ("Day", "Night"),
            Dpt1::HeatCool => ("Cooling", "Heating"),
        }
    }

    /// Get the label for a value
    pub const fn label(&self, value: bool) -> &'static str {
        let (false_label, true_label) = self.labels();
        if value { true_label } else { false_label }
    }

    /// Create a value
    pub const fn of(self, value: bool) -> BooleanValue {
        BooleanValue { dpt: self, value }
    }

    /// Encode a value to its wire byte
    pub const fn encode_to_bytes(self, value: bool) -> [u8; 1] {
        [value as u8]
    }
}

/// Decoded DPT 1 value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BooleanValue {
    dpt: Dpt1,
    value: bool,
}

impl BooleanValue {
    /// Codec of this value
    pub fn dpt(&self) -> Dpt1 {
        self.dpt
    }

    /// Boolean state
    pub fn value(&self) -> bool {
        self.value
    }

    /// Label of the current state (e.g. `"On"`)
    pub fn label(&self) -> &'static str {
        self.dpt.label(self.value)
    }
}

impl DataPointValue for BooleanValue {
    fn dpt_id(&self) -> &'static str {
        self.dpt.identifier()
    }

    fn to_payload(&self) -> Payload {
        payload(&self.dpt.encode_to_bytes(self.value))
    }
}

impl fmt::Display for BooleanValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl DataPointType for Dpt1 {
    type Value = BooleanValue;

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
        parse_bool(self.labels(), args).is_some()
    }

    fn decode(&self, data: &[u8]) -> Result<BooleanValue> {
        let byte = single_byte(self.identifier(), data)?;
        if byte > 0x01 {
            crate::dpt_log!(trace, "DPT {} decoded byte {} as false", self.identifier(), byte);
        }
        Ok(self.of(byte == 0x01))
    }

    fn decode_syntax(&self, args: &[&str]) -> Result<BooleanValue> {
        parse_bool(self.labels(), args)
            .map(|value| self.of(value))
            .ok_or_else(|| KnxError::incompatible_syntax(self.identifier(), args))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_false() {
        assert_eq!(Dpt1::Switch.encode_to_bytes(false), [0x00]);
        assert_eq!(Dpt1::Switch.of(false).to_payload().as_slice(), &[0x00]);
    }

    #[test]
    fn test_encode_true() {
        assert_eq!(Dpt1::Switch.encode_to_bytes(true), [0x01]);
        assert_eq!(Dpt1::Switch.of(true).to_payload().as_slice(), &[0x01]);
    }

    #[test]
    fn test_decode_false() {
        let result = Dpt1::Switch.parse(&[0x00]).unwrap();
        assert!(!result.value());
    }

    #[test]
    fn test_decode_true() {
        let result = Dpt1::Switch.parse(&[0x01]).unwrap();
        assert!(result.value());
    }

    #[test]
    fn test_decode_is_lenient() {
        // Anything but 0x01 is false, including other set bits
        for byte in [0x02u8, 0x03, 0x80, 0xFF] {
            assert!(!Dpt1::Switch.parse(&[byte]).unwrap().value(), "byte {byte:#04X}");
        }
    }

    #[test]
    fn test_decode_wrong_length() {
        assert!(Dpt1::Switch.parse(&[]).unwrap_err().is_null_argument());
        assert!(Dpt1::Switch.parse(&[0x01, 0x00]).unwrap_err().is_incompatible_bytes());
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(Dpt1::Switch.of(true).to_string(), "On");
        assert_eq!(Dpt1::Switch.of(false).to_string(), "Off");
        assert_eq!(Dpt1::Alarm.of(false).to_string(), "No alarm");
        assert_eq!(Dpt1::UpDown.of(true).to_string(), "Down");
        assert_eq!(Dpt1::HeatCool.of(true).to_string(), "Heating");
    }

    #[test]
    fn test_syntax() {
        assert!(Dpt1::Switch.parse_syntax(&["on"]).unwrap().value());
        assert!(!Dpt1::Switch.parse_syntax(&["OFF"]).unwrap().value());
        assert!(Dpt1::Switch.parse_syntax(&["1"]).unwrap().value());
        assert!(!Dpt1::Switch.parse_syntax(&["false"]).unwrap().value());
        assert!(!Dpt1::Alarm.parse_syntax(&["no", "alarm"]).unwrap().value());
        assert!(Dpt1::Alarm.parse_syntax(&["alarm"]).unwrap().value());
        assert!(Dpt1::Switch.parse_syntax(&["maybe"]).unwrap_err().is_incompatible_syntax());
    }

    #[test]
    fn test_identifier() {
        assert_eq!(Dpt1::Switch.id(), "1.001");
        assert_eq!(Dpt1::Bool.id(), "1.002");
        assert_eq!(Dpt1::UpDown.id(), "1.008");
        assert_eq!(Dpt1::DayNight.id(), "1.024");
        assert_eq!(Dpt1::HeatCool.id(), "1.100");
        assert_eq!(Dpt1::Switch.unit(), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Dpt1::Switch.labels(), ("Off", "On"));
        assert_eq!(Dpt1::UpDown.labels(), ("Up", "Down"));
        assert_eq!(Dpt1::OpenClose.labels(), ("Open", "Close"));
    }
}
