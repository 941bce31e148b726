//! DPT 23.xxx - 2-bit enumerations (1 byte)
//!
//! ## Format
//!
//! ```text
//! bit:  7 6 5 4 3 2 1 0
//!       0 0 0 0 0 0 s s
//! ```
//!
//! Only the two least significant bits carry the ordinal; the upper six
//! bits are ignored on decode and sent as zero.
//!
//! ## Example
//!
//! ```rust
//! use knx_dpt::dpt::{dpt23, DataPointType};
//!
//! let action = dpt23::UP_DOWN_ACTION.parse(&[0x03])?;
//! assert_eq!(action.name(), "DownUp");
//! # Ok::<(), knx_dpt::KnxError>(())
//! ```

use crate::dpt::EnumDpt;

enum_dpt! {
    /// DPT 23.001 - On/Off action
    ON_OFF_ACTION = two_bit("23.001", "On/Off action") {
        0 => "Off", "off";
        1 => "On", "on";
        2 => "OffOn", "off/on";
        3 => "OnOff", "on/off";
    }

    /// DPT 23.002 - Alarm reaction
    ALARM_REACTION = two_bit("23.002", "Alarm reaction") {
        0 => "NoAlarm", "no alarm is used";
        1 => "AlarmUp", "alarm position is UP";
        2 => "AlarmDown", "alarm position is DOWN";
    }

    /// DPT 23.003 - Up/Down action
    UP_DOWN_ACTION = two_bit("23.003", "Up/Down action") {
        0 => "Up", "up";
        1 => "Down", "down";
        2 => "UpDown", "UpDown";
        3 => "DownUp", "DownUp";
    }
}

/// Every DPT 23 subtype provided by this module
pub const SUBTYPES: &[EnumDpt<'static>] = &[ON_OFF_ACTION, ALARM_REACTION, UP_DOWN_ACTION];
