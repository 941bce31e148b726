//! DPT 3.xxx - 3-bit controlled (dimming and blinds)
//!
//! Control datapoint types for stepwise dimming and blind positioning.
//!
//! ## Format
//!
//! 4 bits total:
//! - Bit 3 (MSB): Control bit (direction)
//! - Bits 0-2 (LSB): Stepcode (0-7)
//!
//! ```text
//! ┌─────────┬─────────────┐
//! │ Control │  Stepcode   │
//! │  (1b)   │    (3b)     │
//! └─────────┴─────────────┘
//!    Bit 3     Bits 0-2
//! ```
//!
//! The upper 4 bits are ignored on decode.
//!
//! ## Stepcode Values
//!
//! - **0**: Break/Stop - halts current operation
//! - **1-7**: Intervals (1, 2, 4, 8, 16, 32, 64 intervals respectively)
//!
//! ## Common Subtypes
//!
//! - **3.007** - Dimming control (decrease/increase light intensity)
//! - **3.008** - Blind control (up/down blind positioning)
//!
//! ## Textual Form
//!
//! `stop`, or a control label followed by the stepcode: `["increase", "3"]`.
//!
//! ## Example
//!
//! ```rust
//! use knx_dpt::dpt::{DataPointType, DataPointValue, Dpt3, StepCode};
//!
//! // Increase dimming by 4 intervals
//! assert_eq!(Dpt3::Dimming.encode_to_bytes(true, StepCode::Intervals4), [0x0B]);
//!
//! // Stop dimming
//! assert_eq!(Dpt3::Dimming.encode_to_bytes(false, StepCode::Break), [0x00]);
//!
//! // Move blind down by 1 interval
//! let cmd = Dpt3::Blind.parse(&[0x09])?;
//! assert_eq!(cmd.to_string(), "down 1");
//! # Ok::<(), knx_dpt::KnxError>(())
//! ```

use core::fmt;

use crate::dpt::syntax::parse_u8;
use crate::dpt::{payload, single_byte, DataPointType, DataPointValue, Payload};
use crate::error::{KnxError, Result};

const CONTROL_BIT: u8 = 0x08;
const STEPCODE_MASK: u8 = 0x07;
const STOP: &str = "stop";

/// DPT 3.xxx 3-bit controlled types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Dpt3 {
    /// DPT 3.007 - Dimming control (decrease/increase)
    Dimming,
    /// DPT 3.008 - Blind control (up/down)
    Blind,
}

/// Stepcode values for 3-bit controlled types
///
/// Represents the number of intervals for the control operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum StepCode {
    /// Break/Stop - halts the current operation
    Break = 0,
    /// 1 interval
    Intervals1 = 1,
    /// 2 intervals
    Intervals2 = 2,
    /// 4 intervals
    Intervals4 = 3,
    /// 8 intervals
    Intervals8 = 4,
    /// 16 intervals
    Intervals16 = 5,
    /// 32 intervals
    Intervals32 = 6,
    /// 64 intervals (maximum)
    Intervals64 = 7,
}

/// Control direction and stepcode of a DPT 3 command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlCommand {
    /// Control bit: false = decrease/up, true = increase/down
    pub control: bool,
    /// Stepcode (0-7)
    pub stepcode: StepCode,
}

impl ControlCommand {
    /// The stop command (`control = false`, [`StepCode::Break`])
    pub const STOP: ControlCommand = ControlCommand {
        control: false,
        stepcode: StepCode::Break,
    };

    /// Wire nibble of this command
    pub const fn to_bits(self) -> u8 {
        let control_bit = if self.control { CONTROL_BIT } else { 0x00 };
        control_bit | (self.stepcode as u8 & STEPCODE_MASK)
    }

    /// Decode the low nibble of `byte`
    pub const fn from_bits(byte: u8) -> Self {
        Self {
            control: byte & CONTROL_BIT != 0,
            stepcode: StepCode::from_bits(byte),
        }
    }
}

impl Dpt3 {
    /// Get the DPT identifier string (e.g., "3.007")
    pub const fn identifier(&self) -> &'static str {
        match self {
            Dpt3::Dimming => "3.007",
            Dpt3::Blind => "3.008",
        }
    }

    /// Get the subtype name
    pub const fn name(&self) -> &'static str {
        match self {
            Dpt3::Dimming => "Dimming",
            Dpt3::Blind => "Blinds",
        }
    }

    /// Get semantic labels for control directions
    ///
    /// Returns a tuple (`control_false_label`, `control_true_label`)
    pub const fn control_labels(&self) -> (&'static str, &'static str) {
        match self {
            Dpt3::Dimming => ("decrease", "increase"),
            Dpt3::Blind => ("up", "down"),
        }
    }

    /// Create a value
    pub const fn of(self, control: bool, stepcode: StepCode) -> ControlCommandValue {
        ControlCommandValue {
            dpt: self,
            command: ControlCommand { control, stepcode },
        }
    }

    /// Encode a command to its wire byte
    pub const fn encode_to_bytes(self, control: bool, stepcode: StepCode) -> [u8; 1] {
        [ControlCommand { control, stepcode }.to_bits()]
    }

    fn control_from_label(&self, label: &str) -> Option<bool> {
        let (decrease, increase) = self.control_labels();
        if label.eq_ignore_ascii_case(increase) {
            Some(true)
        } else if label.eq_ignore_ascii_case(decrease) {
            Some(false)
        } else {
            None
        }
    }

    fn command_from_tokens(&self, args: &[&str]) -> Option<ControlCommand> {
        match args {
            [stop] if stop.eq_ignore_ascii_case(STOP) => Some(ControlCommand::STOP),
            [label, code] => Some(ControlCommand {
                control: self.control_from_label(label)?,
                stepcode: StepCode::from_u8(parse_u8(code)?)?,
            }),
            _ => None,
        }
    }
}

impl StepCode {
    /// Convert a u8 value to a StepCode
    ///
    /// Returns `None` if value is not in range 0-7
    pub const fn from_u8(value: u8) -> Option<Self> {
        if value > STEPCODE_MASK {
            return None;
        }
        Some(Self::from_bits(value))
    }

    /// Stepcode held in the 3 least significant bits of `byte`
    pub const fn from_bits(byte: u8) -> Self {
        match byte & STEPCODE_MASK {
            0 => StepCode::Break,
            1 => StepCode::Intervals1,
            2 => StepCode::Intervals2,
            3 => StepCode::Intervals4,
            4 => StepCode::Intervals8,
            5 => StepCode::Intervals16,
            6 => StepCode::Intervals32,
            _ => StepCode::Intervals64,
        }
    }

    /// Get the number of intervals this stepcode represents
    ///
    /// Returns 0 for Break, otherwise 1, 2, 4, 8, 16, 32, or 64
    pub const fn intervals(&self) -> u8 {
        match self {
            StepCode::Break => 0,
            StepCode::Intervals1 => 1,
            StepCode::Intervals2 => 2,
            StepCode::Intervals4 => 4,
            StepCode::Intervals8 => 8,
            StepCode::Intervals16 => 16,
            StepCode::Intervals32 => 32,
            StepCode::Intervals64 => 64,
        }
    }
}

/// Decoded DPT 3 value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControlCommandValue {
    dpt: Dpt3,
    command: ControlCommand,
}

impl ControlCommandValue {
    /// Codec of this value
    pub fn dpt(&self) -> Dpt3 {
        self.dpt
    }

    /// Decoded command
    pub fn command(&self) -> ControlCommand {
        self.command
    }

    /// Control bit
    pub fn control(&self) -> bool {
        self.command.control
    }

    /// Stepcode
    pub fn stepcode(&self) -> StepCode {
        self.command.stepcode
    }

    /// Check if this is a break command, whatever the control bit
    pub fn is_stop(&self) -> bool {
        self.command.stepcode == StepCode::Break
    }
}

impl DataPointValue for ControlCommandValue {
    fn dpt_id(&self) -> &'static str {
        self.dpt.identifier()
    }

    fn to_payload(&self) -> Payload {
        payload(&[self.command.to_bits()])
    }
}

impl fmt::Display for ControlCommandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_stop() {
            return f.write_str(STOP);
        }
        let (decrease, increase) = self.dpt.control_labels();
        let label = if self.command.control { increase } else { decrease };
        write!(f, "{} {}", label, self.command.stepcode as u8)
    }
}

impl DataPointType for Dpt3 {
    type Value = ControlCommandValue;

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
        self.command_from_tokens(args).is_some()
    }

    fn decode(&self, data: &[u8]) -> Result<ControlCommandValue> {
        let byte = single_byte(self.identifier(), data)?;
        Ok(ControlCommandValue {
            dpt: *self,
            command: ControlCommand::from_bits(byte),
        })
    }

    fn decode_syntax(&self, args: &[&str]) -> Result<ControlCommandValue> {
        let Some(command) = self.command_from_tokens(args) else {
            return Err(KnxError::incompatible_syntax(self.identifier(), args));
        };
        Ok(ControlCommandValue { dpt: *self, command })
    }
}
