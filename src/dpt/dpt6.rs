//! DPT 6.xxx - 8-bit Signed Value (1 byte)
//!
//! ## Format
//!
//! - 8 bits: two's complement value (-128..127)
//!
//! ## Subtypes
//!
//! - **6.001** - Percent (-128..127 %)
//! - **6.010** - Counter pulses (-128..127)
//! - **6.020** - Status with mode, see [`StatusMode`]
//!
//! ## 6.020 Layout
//!
//! ```text
//! bit:  7 6 5 4 3 2 1 0
//!       A B C D E F F F
//! ```
//!
//! `A..E` are status bits, **active low** (`0` = set). `FFF` selects the
//! mode and is one-hot: `001` mode 0, `010` mode 1, `100` mode 2. Any other
//! mode pattern is rejected by the compatibility check. 6.020 has no textual
//! form.

use core::fmt;

use crate::dpt::flags::Flags;
use crate::dpt::integer::{IntegerWidth, ScaledInteger};
use crate::dpt::range::Scaling;
use crate::dpt::{payload, single_byte, DataPointType, DataPointValue, Payload};
use crate::error::{KnxError, Result};

/// DPT 6.xxx 8-bit signed types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Dpt6 {
    /// DPT 6.001 - Percent (-128..127 %)
    Percent,
    /// DPT 6.010 - Counter pulses (-128..127)
    Counter,
}

impl Dpt6 {
    /// Get the DPT identifier string (e.g., "6.001")
    pub const fn identifier(&self) -> &'static str {
        match self {
            Dpt6::Percent => "6.001",
            Dpt6::Counter => "6.010",
        }
    }

    /// Get the subtype name
    pub const fn name(&self) -> &'static str {
        match self {
            Dpt6::Percent => "Percent (8 Bit)",
            Dpt6::Counter => "Value 1 count",
        }
    }

    /// Get the unit string for this DPT
    pub const fn unit_symbol(&self) -> Option<&'static str> {
        match self {
            Dpt6::Percent => Some("%"),
            Dpt6::Counter => Some("pulses"),
        }
    }
}

impl ScaledInteger for Dpt6 {
    const WIDTH: IntegerWidth = IntegerWidth::I8;

    fn scaling(&self) -> Scaling {
        Scaling::identity(-128.0, 127.0)
    }
}

impl_integer_dpt!(Dpt6, i8);

/// DPT 6.020 - Status with mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusMode;

/// Active mode of a [`StatusModeValue`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Mode {
    /// Mode 0 (`001`)
    Mode0 = 0b001,
    /// Mode 1 (`010`)
    Mode1 = 0b010,
    /// Mode 2 (`100`)
    Mode2 = 0b100,
}

impl Mode {
    /// Decode the one-hot mode field
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits & 0x07 {
            0b001 => Some(Mode::Mode0),
            0b010 => Some(Mode::Mode1),
            0b100 => Some(Mode::Mode2),
            _ => None,
        }
    }

    /// Mode number (0, 1 or 2)
    pub const fn number(self) -> u8 {
        match self {
            Mode::Mode0 => 0,
            Mode::Mode1 => 1,
            Mode::Mode2 => 2,
        }
    }
}

/// Number of status bits in a 6.020 value
pub const STATUS_BITS: usize = 5;

/// Decoded DPT 6.020 value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusModeValue {
    flags: Flags<1>,
}

impl StatusMode {
    /// DPT identifier
    pub const ID: &'static str = "6.020";

    /// Create a value from status flags (`A..E`, `true` = set) and mode
    pub fn of(self, status: [bool; STATUS_BITS], mode: Mode) -> StatusModeValue {
        let mut byte = mode as u8;
        for (i, set) in status.iter().enumerate() {
            // active low
            if !set {
                byte |= 0x80 >> i;
            }
        }
        StatusModeValue {
            flags: Flags::new([byte]),
        }
    }
}

impl StatusModeValue {
    /// Check if status bit `index` (0 = `A` .. 4 = `E`) is set
    ///
    /// # Errors
    ///
    /// Returns an index-out-of-bounds error for `index >= 5`.
    pub fn is_status_set(&self, index: usize) -> Result<bool> {
        if index >= STATUS_BITS {
            return Err(KnxError::index_out_of_bounds(index, STATUS_BITS));
        }
        // Status bits are transmitted active low
        Ok(!self.flags.is_set(index)?)
    }

    /// Active mode
    pub fn mode(&self) -> Mode {
        // The constructor and the compatibility check guarantee a valid pattern
        Mode::from_bits(self.flags.bytes()[0]).unwrap_or(Mode::Mode0)
    }
}

impl DataPointValue for StatusModeValue {
    fn dpt_id(&self) -> &'static str {
        StatusMode::ID
    }

    fn to_payload(&self) -> Payload {
        payload(&self.flags.bytes())
    }
}

impl fmt::Display for StatusModeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, name) in ["A", "B", "C", "D", "E"].iter().enumerate() {
            let set = self.is_status_set(i).unwrap_or(false);
            write!(f, "{name}={} ", if set { "set" } else { "clear" })?;
        }
        write!(f, "mode={}", self.mode().number())
    }
}

impl DataPointType for StatusMode {
    type Value = StatusModeValue;

    fn id(&self) -> &'static str {
        Self::ID
    }

    fn description(&self) -> &'static str {
        "Status with mode"
    }

    fn is_compatible(&self, data: &[u8]) -> bool {
        matches!(data, [byte] if Mode::from_bits(*byte).is_some())
    }

    fn is_compatible_syntax(&self, _args: &[&str]) -> bool {
        false
    }

    fn has_syntax(&self) -> bool {
        false
    }

    fn decode(&self, data: &[u8]) -> Result<StatusModeValue> {
        let byte = single_byte(Self::ID, data)?;
        if Mode::from_bits(byte).is_none() {
            return Err(KnxError::incompatible_bytes(Self::ID, data));
        }
        Ok(StatusModeValue {
            flags: Flags::new([byte]),
        })
    }

    fn decode_syntax(&self, args: &[&str]) -> Result<StatusModeValue> {
        Err(KnxError::unsupported_syntax(Self::ID, args))
    }
}
