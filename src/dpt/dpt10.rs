//! DPT 10.001 - Time of day (3 bytes)
//!
//! ## Format
//!
//! ```text
//! Byte 0: DDDH HHHH    D = day of week (0 = no day, 1 = Monday .. 7 = Sunday)
//! Byte 1: 00MM MMMM    M = minute (0..59)
//! Byte 2: 00SS SSSS    S = second (0..59)
//! ```
//!
//! Hour is 0..23. Reserved bits must be zero.
//!
//! ## Textual Form
//!
//! `[weekday] hh:mm[:ss]`, e.g. `["Mon", "12:30"]` or `["07:05:09"]`.
//!
//! ## Example
//!
//! ```rust
//! use knx_dpt::dpt::{DataPointType, DataPointValue, DayOfWeek, Dpt10, KnxTime};
//!
//! let time = KnxTime::new(12, 30, 0)?;
//! let bytes = Dpt10::TimeOfDay.encode_to_bytes(Some(DayOfWeek::Monday), time)?;
//! assert_eq!(bytes, [0x2C, 0x1E, 0x00]);
//!
//! let value = Dpt10::TimeOfDay.parse(&bytes)?;
//! assert_eq!(value.to_string(), "Monday 12:30:00");
//! # Ok::<(), knx_dpt::KnxError>(())
//! ```

use core::fmt;

use crate::dpt::syntax::{looks_like_time, parse_time};
use crate::dpt::{
    fixed_bytes, payload, DataPointType, DataPointValue, DayOfWeek, KnxTime, Payload,
};
use crate::error::{KnxError, Result};

/// DPT 10.xxx time types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Dpt10 {
    /// DPT 10.001 - Time of day
    TimeOfDay,
}

impl Dpt10 {
    /// Get the DPT identifier string
    pub const fn identifier(&self) -> &'static str {
        "10.001"
    }

    /// Get the subtype name
    pub const fn name(&self) -> &'static str {
        "Time of day"
    }

    /// Create a value
    ///
    /// # Errors
    ///
    /// Returns an out-of-range error for the `24:00:00` instant, which this
    /// type cannot carry.
    pub fn of(self, day: Option<DayOfWeek>, time: KnxTime) -> Result<TimeValue> {
        if time.hour() > 23 {
            return Err(KnxError::out_of_range(
                self.identifier(),
                f64::from(time.hour()),
                0.0,
                23.0,
            ));
        }
        Ok(TimeValue { dpt: self, day, time })
    }

    /// Encode a time of day to its 3 wire bytes
    pub fn encode_to_bytes(self, day: Option<DayOfWeek>, time: KnxTime) -> Result<[u8; 3]> {
        Ok(self.of(day, time)?.to_bytes())
    }
}

/// Decoded DPT 10 value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeValue {
    dpt: Dpt10,
    day: Option<DayOfWeek>,
    time: KnxTime,
}

impl TimeValue {
    /// Codec of this value
    pub fn dpt(&self) -> Dpt10 {
        self.dpt
    }

    /// Day of week, `None` if not specified
    pub fn day(&self) -> Option<DayOfWeek> {
        self.day
    }

    /// Time of day
    pub fn time(&self) -> KnxTime {
        self.time
    }

    fn to_bytes(self) -> [u8; 3] {
        let dow = self.day.map_or(0, DayOfWeek::code);
        [(dow << 5) | self.time.hour(), self.time.minute(), self.time.second()]
    }
}

impl DataPointValue for TimeValue {
    fn dpt_id(&self) -> &'static str {
        self.dpt.identifier()
    }

    fn to_payload(&self) -> Payload {
        payload(&self.to_bytes())
    }
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(day) = self.day {
            write!(f, "{day} ")?;
        }
        write!(f, "{}", self.time)
    }
}

impl DataPointType for Dpt10 {
    type Value = TimeValue;

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
        match args {
            [time] => looks_like_time(time),
            [day, time] => DayOfWeek::from_name(day).is_some() && looks_like_time(time),
            _ => false,
        }
    }

    fn decode(&self, data: &[u8]) -> Result<TimeValue> {
        let [first, minute, second] = fixed_bytes::<3>(self.identifier(), data)?;
        let hour = first & 0x1F;
        let day = DayOfWeek::from_code(first >> 5);
        check_field(self.identifier(), hour, 23)?;
        check_field(self.identifier(), minute, 59)?;
        check_field(self.identifier(), second, 59)?;
        self.of(day, KnxTime::new(hour, minute, second)?)
    }

    fn decode_syntax(&self, args: &[&str]) -> Result<TimeValue> {
        let (day, token) = match args {
            [time] => (None, *time),
            [day, time] => (DayOfWeek::from_name(day), *time),
            _ => return Err(KnxError::incompatible_syntax(self.identifier(), args)),
        };
        let Some((hour, minute, second)) = parse_time(token) else {
            return Err(KnxError::incompatible_syntax(self.identifier(), args));
        };
        let Ok(time) = KnxTime::new(hour, minute, second) else {
            return Err(KnxError::incompatible_syntax(self.identifier(), args));
        };
        self.of(day, time)
    }
}

fn check_field(id: &'static str, value: u8, max: u8) -> Result<()> {
    if value > max {
        return Err(KnxError::out_of_range(id, f64::from(value), 0.0, f64::from(max)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode() {
        let time = KnxTime::new(23, 59, 59).unwrap();
        assert_eq!(Dpt10::TimeOfDay.encode_to_bytes(None, time).unwrap(), [0x17, 0x3B, 0x3B]);
        assert_eq!(
            Dpt10::TimeOfDay.encode_to_bytes(Some(DayOfWeek::Sunday), time).unwrap(),
            [0xF7, 0x3B, 0x3B]
        );
    }

    #[test]
    fn test_decode() {
        let value = Dpt10::TimeOfDay.parse(&[0x2C, 0x1E, 0x05]).unwrap();
        assert_eq!(value.day(), Some(DayOfWeek::Monday));
        assert_eq!(value.time(), KnxTime::new(12, 30, 5).unwrap());
        assert_eq!(value.to_payload().as_slice(), &[0x2C, 0x1E, 0x05]);
    }

    #[test]
    fn test_decode_invalid_fields() {
        // Hour 24
        assert!(Dpt10::TimeOfDay.parse(&[0x18, 0x00, 0x00]).unwrap_err().is_out_of_range());
        // Minute 60
        assert!(Dpt10::TimeOfDay.parse(&[0x00, 0x3C, 0x00]).unwrap_err().is_out_of_range());
        // Reserved bit in second byte
        assert!(Dpt10::TimeOfDay.parse(&[0x00, 0x40, 0x00]).unwrap_err().is_out_of_range());
        assert!(Dpt10::TimeOfDay.parse(&[0x00, 0x00]).unwrap_err().is_incompatible_bytes());
    }

    #[test]
    fn test_end_of_day_rejected() {
        let err = Dpt10::TimeOfDay.of(None, KnxTime::END_OF_DAY).unwrap_err();
        assert!(err.is_out_of_range());
    }

    #[test]
    fn test_syntax() {
        let value = Dpt10::TimeOfDay.parse_syntax(&["Fri", "07:05"]).unwrap();
        assert_eq!(value.day(), Some(DayOfWeek::Friday));
        assert_eq!(value.to_string(), "Friday 07:05:00");

        let value = Dpt10::TimeOfDay.parse_syntax(&["18:00:30"]).unwrap();
        assert_eq!(value.day(), None);
        assert_eq!(value.to_payload().as_slice(), &[0x12, 0x00, 0x1E]);

        assert!(Dpt10::TimeOfDay.parse_syntax(&["noon"]).unwrap_err().is_incompatible_syntax());
        assert!(Dpt10::TimeOfDay.parse_syntax(&["24:00"]).unwrap_err().is_incompatible_syntax());
        assert!(Dpt10::TimeOfDay.parse_syntax(&["Someday", "12:00"]).is_err());
    }
}
