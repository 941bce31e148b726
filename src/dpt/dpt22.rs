//! DPT 22.xxx - 16-bit status and channel flags (2 bytes)
//!
//! ## Format
//!
//! ```text
//! Byte 0: b15 .. b8
//! Byte 1: b7  .. b0
//! ```
//!
//! Same presentation rules as DPT 21, see [`StatusFlagsValue`].
//!
//! ## Example
//!
//! ```rust
//! use knx_dpt::dpt::{DataPointType, DataPointValue, Dpt22};
//!
//! let channels = Dpt22::ChannelActivation16.parse_syntax(&["1,", "9,", "16"])?;
//! assert_eq!(channels.to_payload().as_slice(), &[0x81, 0x01]);
//! assert_eq!(channels.to_string(), "1, 9, 16");
//! # Ok::<(), knx_dpt::KnxError>(())
//! ```

use crate::dpt::dpt21::{decode_flags, decode_flags_syntax, FlagLayout, StatusFlagsType};
use crate::dpt::{DataPointType, StatusFlagsValue};
use crate::error::Result;

/// DPT 22.xxx 16-bit flag types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Dpt22 {
    /// DPT 22.100 - DHW controller status
    DhwControllerStatus,
    /// DPT 22.101 - Room heating/cooling controller status
    RhccStatus,
    /// DPT 22.1000 - Media
    Media,
    /// DPT 22.1010 - Channel activation for 16 channels
    ChannelActivation16,
}

const DHW_CONTROLLER_STATUS: &[(usize, &str)] = &[
    (0, "Fault"),
    (1, "SDHWLoadActive"),
    (2, "LegioProtActive"),
    (3, "DHWPushActive"),
    (4, "OtherEnergySourceActive"),
    (5, "SolarEnergyOnly"),
    (6, "SolarEnergySupport"),
    (7, "TempOptimShiftActive"),
];
const RHCC_STATUS: &[(usize, &str)] = &[
    (0, "Fault"),
    (1, "StatusEcoH"),
    (2, "TempFlowLimit"),
    (3, "TempReturnLimit"),
    (4, "StatusMorningBoostH"),
    (5, "StatusStartOptim"),
    (6, "StatusStopOptim"),
    (7, "HeatingDisabled"),
    (8, "HeatCoolMode"),
    (9, "StatusEcoC"),
    (10, "StatusPreCool"),
    (11, "CoolingDisabled"),
    (12, "DewPointStatus"),
    (13, "FrostAlarm"),
    (14, "OverheatAlarm"),
];
// b0 and b3 are reserved
const MEDIA: &[(usize, &str)] = &[(1, "TP1"), (2, "PL110"), (4, "RF"), (5, "KNXIP")];

impl Dpt22 {
    /// Get the DPT identifier string
    pub const fn identifier(&self) -> &'static str {
        match self {
            Dpt22::DhwControllerStatus => "22.100",
            Dpt22::RhccStatus => "22.101",
            Dpt22::Media => "22.1000",
            Dpt22::ChannelActivation16 => "22.1010",
        }
    }

    /// Get the subtype name
    pub const fn name(&self) -> &'static str {
        match self {
            Dpt22::DhwControllerStatus => "DHW controller status",
            Dpt22::RhccStatus => "RHCC status",
            Dpt22::Media => "Media",
            Dpt22::ChannelActivation16 => "Channel activation for 16 channels",
        }
    }

    /// Presentation of the record bits
    pub const fn flag_layout(&self) -> FlagLayout {
        match self {
            Dpt22::DhwControllerStatus => FlagLayout::Named(DHW_CONTROLLER_STATUS),
            Dpt22::RhccStatus => FlagLayout::Named(RHCC_STATUS),
            Dpt22::Media => FlagLayout::Named(MEDIA),
            Dpt22::ChannelActivation16 => FlagLayout::Channels,
        }
    }

    /// Create a value from its raw big-endian word
    pub fn of(self, word: u16) -> StatusFlagsValue<Dpt22, 2> {
        StatusFlagsValue::new(self, word.to_be_bytes())
    }

    /// Create a value with the given bits (LSB numbering) set
    pub fn of_bits(self, bits: &[usize]) -> Result<StatusFlagsValue<Dpt22, 2>> {
        StatusFlagsValue::from_bits(self, bits)
    }

    /// Encode a raw word to its wire bytes
    pub const fn encode_to_bytes(self, word: u16) -> [u8; 2] {
        word.to_be_bytes()
    }
}

impl StatusFlagsType for Dpt22 {
    fn layout(&self) -> FlagLayout {
        self.flag_layout()
    }
}

impl DataPointType for Dpt22 {
    type Value = StatusFlagsValue<Dpt22, 2>;

    fn id(&self) -> &'static str {
        self.identifier()
    }

    fn description(&self) -> &'static str {
        self.name()
    }

    fn is_compatible(&self, data: &[u8]) -> bool {
        data.len() == 2
    }

    fn is_compatible_syntax(&self, args: &[&str]) -> bool {
        args.first().is_some_and(|token| !token.is_empty())
    }

    fn decode(&self, data: &[u8]) -> Result<Self::Value> {
        decode_flags(*self, data)
    }

    fn decode_syntax(&self, args: &[&str]) -> Result<Self::Value> {
        decode_flags_syntax(*self, args)
    }
}
