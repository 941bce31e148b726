//! DPT 21.xxx - 8-bit status and channel flags (1 byte)
//!
//! ## Format
//!
//! ```text
//! bit:  7  6  5  4  3  2  1  0
//!       b7 b6 b5 b4 b3 b2 b1 b0
//! ```
//!
//! Status subtypes give each bit `bN` a name (`b0` = `OutOfService` for
//! 21.001). Channel subtypes (21.1010) map channel `n` to bit `b(n-1)`.
//! Bits without a name are carried through unchanged.
//!
//! The value type [`StatusFlagsValue`] is shared with the 16-bit records
//! of DPT 22.
//!
//! ## Textual Form
//!
//! - a hex token: `0x87`
//! - flag names, case-insensitive: `Fault InAlarm`
//! - channel numbers, optionally comma separated: `1, 2, 3, 8`
//! - `none` for an empty record
//!
//! ## Example
//!
//! ```rust
//! use knx_dpt::dpt::{DataPointType, Dpt21};
//!
//! let channels = Dpt21::ChannelActivation8.parse(&[0x87])?;
//! assert_eq!(channels.to_string(), "1, 2, 3, 8");
//!
//! let status = Dpt21::GeneralStatus.parse(&[0x06])?;
//! assert_eq!(status.is_flag_set("Fault"), Some(true));
//! assert_eq!(status.to_string(), "Fault, Overridden");
//! # Ok::<(), knx_dpt::KnxError>(())
//! ```

use core::fmt;

use crate::dpt::flags::Flags;
use crate::dpt::syntax::{parse_hex, parse_u8};
use crate::dpt::{fixed_bytes, payload, ChannelList, DataPointType, DataPointValue, Payload};
use crate::error::{KnxError, Result};

/// Rendered when no named flag is set
pub const NO_FLAG_SET: &str = "none";

/// How the bits of a status record are presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FlagLayout {
    /// Named bits as `(bit, name)`, bits in LSB numbering
    Named(&'static [(usize, &'static str)]),
    /// Channel activation, channel `n` is bit `b(n-1)`
    Channels,
}

/// A codec whose values are [`StatusFlagsValue`] records
pub trait StatusFlagsType: DataPointType + Copy {
    /// Presentation of the record bits
    fn layout(&self) -> FlagLayout;
}

/// DPT 21.xxx 8-bit flag types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Dpt21 {
    /// DPT 21.001 - General status
    GeneralStatus,
    /// DPT 21.002 - Device control
    DeviceControl,
    /// DPT 21.100 - Forcing signal
    ForcingSignal,
    /// DPT 21.101 - Forcing signal cool
    ForcingSignalCool,
    /// DPT 21.102 - Room heating controller status
    RoomHeatingControllerStatus,
    /// DPT 21.103 - Solar DHW controller status
    SolarDhwControllerStatus,
    /// DPT 21.104 - Fuel type set
    FuelTypeSet,
    /// DPT 21.105 - Room cooling controller status
    RoomCoolingControllerStatus,
    /// DPT 21.106 - Ventilation controller status
    VentilationControllerStatus,
    /// DPT 21.601 - Light actuator error info
    LightActuatorErrorInfo,
    /// DPT 21.1000 - RF communication mode info
    RfCommModeInfo,
    /// DPT 21.1001 - cEMI server supported RF filtering modes
    RfFilterModes,
    /// DPT 21.1002 - Security report
    SecurityReport,
    /// DPT 21.1010 - Channel activation for 8 channels
    ChannelActivation8,
}

const GENERAL_STATUS: &[(usize, &str)] = &[
    (0, "OutOfService"),
    (1, "Fault"),
    (2, "Overridden"),
    (3, "InAlarm"),
    (4, "AlarmUnAck"),
];
const DEVICE_CONTROL: &[(usize, &str)] = &[(0, "UserStopped"), (1, "OwnIA"), (2, "VerifyMode")];
const FORCING_SIGNAL: &[(usize, &str)] = &[
    (0, "ForceRequest"),
    (1, "Protection"),
    (2, "Oversupply"),
    (3, "Overrun"),
    (4, "DHWNorm"),
    (5, "DHWLegio"),
    (6, "RoomHConf"),
    (7, "RoomHMax"),
];
const FORCING_SIGNAL_COOL: &[(usize, &str)] = &[(0, "ForceRequest")];
const ROOM_HEATING_STATUS: &[(usize, &str)] = &[
    (0, "Fault"),
    (1, "StatusEcoH"),
    (2, "TempFlowLimit"),
    (3, "TempReturnLimit"),
    (4, "StatusMorningBoost"),
    (5, "StatusStartOptim"),
    (6, "StatusStopOptim"),
    (7, "SummerMode"),
];
const SOLAR_DHW_STATUS: &[(usize, &str)] = &[(0, "Fault"), (1, "SDHWLoadActive"), (2, "SolarLoadSufficient")];
const FUEL_TYPE_SET: &[(usize, &str)] = &[(0, "Oil"), (1, "Gas"), (2, "SolidState")];
const ROOM_COOLING_STATUS: &[(usize, &str)] = &[(0, "Fault")];
const VENTILATION_STATUS: &[(usize, &str)] = &[(0, "Fault"), (1, "FanActive"), (2, "Heat"), (3, "Cool")];
const LIGHT_ACTUATOR_ERROR: &[(usize, &str)] = &[
    (0, "LoadDetectionError"),
    (1, "Undervoltage"),
    (2, "Overcurrent"),
    (3, "Underload"),
    (4, "DefectiveLoad"),
    (5, "LampFailure"),
    (6, "Overheat"),
];
const RF_COMM_MODE: &[(usize, &str)] = &[(0, "Asynchronous"), (1, "BiBatMaster"), (2, "BiBatSlave")];
const RF_FILTER_MODES: &[(usize, &str)] = &[(0, "DoA"), (1, "KnxSn"), (2, "DoAAndKnxSn")];
const SECURITY_REPORT: &[(usize, &str)] = &[(0, "Failure")];

impl Dpt21 {
    /// Get the DPT identifier string
    pub const fn identifier(&self) -> &'static str {
        match self {
            Dpt21::GeneralStatus => "21.001",
            Dpt21::DeviceControl => "21.002",
            Dpt21::ForcingSignal => "21.100",
            Dpt21::ForcingSignalCool => "21.101",
            Dpt21::RoomHeatingControllerStatus => "21.102",
            Dpt21::SolarDhwControllerStatus => "21.103",
            Dpt21::FuelTypeSet => "21.104",
            Dpt21::RoomCoolingControllerStatus => "21.105",
            Dpt21::VentilationControllerStatus => "21.106",
            Dpt21::LightActuatorErrorInfo => "21.601",
            Dpt21::RfCommModeInfo => "21.1000",
            Dpt21::RfFilterModes => "21.1001",
            Dpt21::SecurityReport => "21.1002",
            Dpt21::ChannelActivation8 => "21.1010",
        }
    }

    /// Get the subtype name
    pub const fn name(&self) -> &'static str {
        match self {
            Dpt21::GeneralStatus => "General status",
            Dpt21::DeviceControl => "Device control",
            Dpt21::ForcingSignal => "Forcing signal",
            Dpt21::ForcingSignalCool => "Forcing signal cool",
            Dpt21::RoomHeatingControllerStatus => "Room heating controller status",
            Dpt21::SolarDhwControllerStatus => "Solar DHW controller status",
            Dpt21::FuelTypeSet => "Fuel type set",
            Dpt21::RoomCoolingControllerStatus => "Room cooling controller status",
            Dpt21::VentilationControllerStatus => "Ventilation controller status",
            Dpt21::LightActuatorErrorInfo => "Light actuator error info",
            Dpt21::RfCommModeInfo => "RF communication mode info",
            Dpt21::RfFilterModes => "cEMI server supported RF filtering modes",
            Dpt21::SecurityReport => "Security report",
            Dpt21::ChannelActivation8 => "Channel activation for 8 channels",
        }
    }

    /// Presentation of the record bits
    pub const fn flag_layout(&self) -> FlagLayout {
        match self {
            Dpt21::GeneralStatus => FlagLayout::Named(GENERAL_STATUS),
            Dpt21::DeviceControl => FlagLayout::Named(DEVICE_CONTROL),
            Dpt21::ForcingSignal => FlagLayout::Named(FORCING_SIGNAL),
            Dpt21::ForcingSignalCool => FlagLayout::Named(FORCING_SIGNAL_COOL),
            Dpt21::RoomHeatingControllerStatus => FlagLayout::Named(ROOM_HEATING_STATUS),
            Dpt21::SolarDhwControllerStatus => FlagLayout::Named(SOLAR_DHW_STATUS),
            Dpt21::FuelTypeSet => FlagLayout::Named(FUEL_TYPE_SET),
            Dpt21::RoomCoolingControllerStatus => FlagLayout::Named(ROOM_COOLING_STATUS),
            Dpt21::VentilationControllerStatus => FlagLayout::Named(VENTILATION_STATUS),
            Dpt21::LightActuatorErrorInfo => FlagLayout::Named(LIGHT_ACTUATOR_ERROR),
            Dpt21::RfCommModeInfo => FlagLayout::Named(RF_COMM_MODE),
            Dpt21::RfFilterModes => FlagLayout::Named(RF_FILTER_MODES),
            Dpt21::SecurityReport => FlagLayout::Named(SECURITY_REPORT),
            Dpt21::ChannelActivation8 => FlagLayout::Channels,
        }
    }

    /// Create a value from its raw byte
    pub const fn of(self, byte: u8) -> StatusFlagsValue<Dpt21, 1> {
        StatusFlagsValue {
            dpt: self,
            flags: Flags::new([byte]),
        }
    }

    /// Create a value with the given bits (LSB numbering) set
    pub fn of_bits(self, bits: &[usize]) -> Result<StatusFlagsValue<Dpt21, 1>> {
        StatusFlagsValue::from_bits(self, bits)
    }
}

/// Decoded DPT 21 / DPT 22 record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusFlagsValue<D, const N: usize> {
    dpt: D,
    flags: Flags<N>,
}

impl<D: StatusFlagsType, const N: usize> StatusFlagsValue<D, N> {
    pub(crate) fn new(dpt: D, bytes: [u8; N]) -> Self {
        Self {
            dpt,
            flags: Flags::new(bytes),
        }
    }

    pub(crate) fn from_bits(dpt: D, bits: &[usize]) -> Result<Self> {
        let mut flags = Flags::empty();
        for &bit in bits {
            flags = flags.with_bit(bit, true)?;
        }
        Ok(Self { dpt, flags })
    }

    /// Codec of this value
    pub fn dpt(&self) -> D {
        self.dpt
    }

    /// Underlying bit record
    pub fn flags(&self) -> Flags<N> {
        self.flags
    }

    /// Raw bytes
    pub fn bytes(&self) -> [u8; N] {
        self.flags.bytes()
    }

    /// Read the bit at MSB-first `index`, see [`Flags::is_set`]
    pub fn is_set(&self, index: usize) -> Result<bool> {
        self.flags.is_set(index)
    }

    /// State of a named flag, `None` if the subtype has no such flag
    pub fn is_flag_set(&self, name: &str) -> Option<bool> {
        let FlagLayout::Named(names) = self.dpt.layout() else {
            return None;
        };
        let (bit, _) = names.iter().find(|(_, n)| n.eq_ignore_ascii_case(name))?;
        self.flags.is_bit_set(*bit).ok()
    }

    /// Check if 1-based `channel` is active
    ///
    /// # Errors
    ///
    /// Returns an index-out-of-bounds error outside `1..=8 * N`.
    pub fn is_channel_active(&self, channel: usize) -> Result<bool> {
        let Some(bit) = channel.checked_sub(1) else {
            return Err(KnxError::index_out_of_bounds(channel, Flags::<N>::WIDTH));
        };
        self.flags.is_bit_set(bit)
    }

    /// Active channels, rendered `"1, 2, 3, 8"` or `"none"`
    pub fn active_channels(&self) -> ChannelList<'_, N> {
        self.flags.channels()
    }

    /// Names of the set flags, ascending by bit
    pub fn active_flags(&self) -> impl Iterator<Item = &'static str> + '_ {
        let names = match self.dpt.layout() {
            FlagLayout::Named(names) => names,
            FlagLayout::Channels => &[],
        };
        names
            .iter()
            .filter(|(bit, _)| self.flags.is_bit_set(*bit).unwrap_or(false))
            .map(|(_, name)| *name)
    }
}

impl<D: StatusFlagsType, const N: usize> DataPointValue for StatusFlagsValue<D, N> {
    fn dpt_id(&self) -> &'static str {
        self.dpt.id()
    }

    fn to_payload(&self) -> Payload {
        payload(&self.flags.bytes())
    }
}

impl<D: StatusFlagsType, const N: usize> fmt::Display for StatusFlagsValue<D, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let FlagLayout::Named(names) = self.dpt.layout() else {
            return write!(f, "{}", self.flags.channels());
        };
        if self.flags.is_empty() {
            return f.write_str(NO_FLAG_SET);
        }
        let mut first = true;
        for bit in self.flags.active_bits() {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            match names.iter().find(|(b, _)| *b == bit) {
                Some((_, name)) => f.write_str(name)?,
                None => write!(f, "b{bit}")?,
            }
        }
        Ok(())
    }
}

/// Decode `N` record bytes for a flag codec
pub(crate) fn decode_flags<D: StatusFlagsType, const N: usize>(dpt: D, data: &[u8]) -> Result<StatusFlagsValue<D, N>> {
    let bytes = fixed_bytes::<N>(dpt.id(), data)?;
    Ok(StatusFlagsValue::new(dpt, bytes))
}

/// Decode the textual form of a flag record
pub(crate) fn decode_flags_syntax<D: StatusFlagsType, const N: usize>(
    dpt: D,
    args: &[&str],
) -> Result<StatusFlagsValue<D, N>> {
    if let [token] = args {
        if let Some(bytes) = parse_hex::<N>(token) {
            return Ok(StatusFlagsValue::new(dpt, bytes));
        }
        if token.eq_ignore_ascii_case(NO_FLAG_SET) {
            return Ok(StatusFlagsValue::new(dpt, [0; N]));
        }
    }
    let mut flags = Flags::<N>::empty();
    let items = args
        .iter()
        .flat_map(|token| token.split(','))
        .filter(|item| !item.is_empty());
    for item in items {
        let bit = match dpt.layout() {
            FlagLayout::Channels => parse_u8(item)
                .map(usize::from)
                .filter(|channel| (1..=Flags::<N>::WIDTH).contains(channel))
                .map(|channel| channel - 1),
            FlagLayout::Named(names) => names
                .iter()
                .find(|(_, name)| name.eq_ignore_ascii_case(item))
                .map(|(bit, _)| *bit),
        };
        let Some(bit) = bit else {
            return Err(KnxError::incompatible_syntax(dpt.id(), args));
        };
        flags = flags.with_bit(bit, true)?;
    }
    Ok(StatusFlagsValue { dpt, flags })
}

impl StatusFlagsType for Dpt21 {
    fn layout(&self) -> FlagLayout {
        self.flag_layout()
    }
}

impl DataPointType for Dpt21 {
    type Value = StatusFlagsValue<Dpt21, 1>;

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
        args.first().is_some_and(|token| !token.is_empty())
    }

    fn decode(&self, data: &[u8]) -> Result<Self::Value> {
        decode_flags(*self, data)
    }

    fn decode_syntax(&self, args: &[&str]) -> Result<Self::Value> {
        decode_flags_syntax(*self, args)
    }
}
