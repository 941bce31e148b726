//! DPT 19.001 - Date and time (8 bytes)
//!
//! ## Format
//!
//! ```text
//! Byte 0: YYYY YYYY    year - 1900 (1900..2155)
//! Byte 1: 0000 MMMM    month (1..12)
//! Byte 2: 000D DDDD    day of month (1..31)
//! Byte 3: WWWH HHHH    day of week (0 = any, 1 = Monday .. 7 = Sunday), hour (0..24)
//! Byte 4: 00MM MMMM    minute (0..59)
//! Byte 5: 00SS SSSS    second (0..59)
//! Byte 6: F WD NWD NY ND NDOW NT SUTI
//! Byte 7: CLQ SRC 0 0 0 0 0 0
//! ```
//!
//! | Flag | Meaning |
//! |---|---|
//! | `F` | fault |
//! | `WD` | working day |
//! | `NWD` | working day field not valid |
//! | `NY` | year field not valid |
//! | `ND` | month and day fields not valid |
//! | `NDOW` | day of week field not valid |
//! | `NT` | hour, minute and second fields not valid |
//! | `SUTI` | summer time |
//! | `CLQ` | clock with external synchronization |
//! | `SRC` | reliable synchronization source |
//!
//! Hour 24 is allowed only as `24:00:00`. Date and time fields are validated
//! unless the matching "not valid" flag is set. Reserved bits are ignored.
//!
//! ## Textual Form
//!
//! `[weekday] yyyy-mm-dd hh:mm[:ss] [0xFFFF]`, the optional last token being
//! the two flag bytes. Without flags the day of week is taken from the
//! weekday token, or computed from the date.
//!
//! ## Example
//!
//! ```rust
//! use knx_dpt::dpt::{DataPointType, DataPointValue, Dpt19, KnxDate, KnxTime};
//!
//! let date = KnxDate::new(2024, 3, 15)?;
//! let time = KnxTime::new(14, 30, 0)?;
//! let bytes = Dpt19::DateTime.encode_to_bytes(date, time)?;
//! assert_eq!(bytes, [0x7C, 0x03, 0x0F, 0xAE, 0x1E, 0x00, 0x00, 0x00]);
//!
//! let value = Dpt19::DateTime.parse(&bytes)?;
//! assert_eq!(value.to_string(), "Friday 2024-03-15 14:30:00");
//! # Ok::<(), knx_dpt::KnxError>(())
//! ```

use core::fmt;

use crate::dpt::calendar::days_in_month;
use crate::dpt::syntax::{looks_like_date, looks_like_time, parse_date, parse_hex, parse_time};
use crate::dpt::{
    fixed_bytes, payload, DataPointType, DataPointValue, DayOfWeek, Flags, KnxDate, KnxTime,
    Payload,
};
use crate::error::{KnxError, Result, SyntaxErrorKind};

/// First representable year
pub const MIN_YEAR: u16 = 1900;
/// Last representable year
pub const MAX_YEAR: u16 = 1900 + 255;

const RESERVED_MASK: [u8; 2] = [0xFF, 0xC0];

/// Single flag of the DPT 19 status bytes, by MSB-first bit index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum DateTimeFlag {
    /// `F` - fault
    Fault = 0,
    /// `WD` - working day
    WorkingDay = 1,
    /// `NWD` - working day field not valid
    NoWorkingDay = 2,
    /// `NY` - year field not valid
    NoYear = 3,
    /// `ND` - month and day fields not valid
    NoDate = 4,
    /// `NDOW` - day of week field not valid
    NoDayOfWeek = 5,
    /// `NT` - time fields not valid
    NoTime = 6,
    /// `SUTI` - summer time
    SummerTime = 7,
    /// `CLQ` - clock with external synchronization
    ClockQuality = 8,
    /// `SRC` - reliable synchronization source
    SyncSource = 9,
}

/// Status flags of a date-time value (bytes 6 and 7)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DateTimeFlags {
    flags: Flags<2>,
}

impl DateTimeFlags {
    /// No flag set
    pub const fn empty() -> Self {
        Self { flags: Flags::empty() }
    }

    /// Flags from the two wire bytes, reserved bits cleared
    pub const fn new(bytes: [u8; 2]) -> Self {
        Self {
            flags: Flags::new([bytes[0] & RESERVED_MASK[0], bytes[1] & RESERVED_MASK[1]]),
        }
    }

    /// The two wire bytes
    pub const fn bytes(&self) -> [u8; 2] {
        self.flags.bytes()
    }

    /// Check a flag
    pub fn is_set(&self, flag: DateTimeFlag) -> bool {
        matches!(self.flags.is_set(usize::from(flag as u8)), Ok(true))
    }

    /// Return a copy with `flag` set to `value`
    #[must_use]
    pub fn with(self, flag: DateTimeFlag, value: bool) -> Self {
        // Every flag index is below the 16-bit width
        let flags = self.flags.with(usize::from(flag as u8), value).unwrap_or(self.flags);
        Self { flags }
    }

    /// Check if the year field is valid
    pub fn has_year(&self) -> bool {
        !self.is_set(DateTimeFlag::NoYear)
    }

    /// Check if the month and day fields are valid
    pub fn has_date(&self) -> bool {
        !self.is_set(DateTimeFlag::NoDate)
    }

    /// Check if the time fields are valid
    pub fn has_time(&self) -> bool {
        !self.is_set(DateTimeFlag::NoTime)
    }

    /// Check if the day of week field is valid
    pub fn has_day_of_week(&self) -> bool {
        !self.is_set(DateTimeFlag::NoDayOfWeek)
    }

    /// Working day indication, `None` if the field is not valid
    pub fn working_day(&self) -> Option<bool> {
        (!self.is_set(DateTimeFlag::NoWorkingDay)).then(|| self.is_set(DateTimeFlag::WorkingDay))
    }

    /// Check if the clock reports a fault
    pub fn is_fault(&self) -> bool {
        self.is_set(DateTimeFlag::Fault)
    }

    /// Check if summer time (DST) is active
    pub fn is_summer_time(&self) -> bool {
        self.is_set(DateTimeFlag::SummerTime)
    }
}

/// DPT 19.xxx date-time types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Dpt19 {
    /// DPT 19.001 - Date time
    DateTime,
}

impl Dpt19 {
    /// Get the DPT identifier string
    pub const fn identifier(&self) -> &'static str {
        "19.001"
    }

    /// Get the subtype name
    pub const fn name(&self) -> &'static str {
        "Date time"
    }

    /// Create a value from a date and a time of day
    ///
    /// The day of week is derived from the date; no flag is set.
    ///
    /// # Errors
    ///
    /// Returns an out-of-range error for years outside 1900..=2155.
    pub fn of(self, date: KnxDate, time: KnxTime) -> Result<DateTimeValue> {
        self.check_year(date.year())?;
        Ok(DateTimeValue {
            dpt: self,
            fields: Fields::from_parts(date, time, Some(date.weekday())),
            flags: DateTimeFlags::empty(),
        })
    }

    /// Create a value carrying only a date (`NT` set)
    pub fn of_date(self, date: KnxDate) -> Result<DateTimeValue> {
        let value = self.of(date, KnxTime::default())?;
        Ok(value.with_flag_unchecked(DateTimeFlag::NoTime))
    }

    /// Create a value carrying only a time of day (`NY`, `ND` and `NDOW` set)
    pub fn of_time(self, time: KnxTime) -> DateTimeValue {
        let fields = Fields {
            year: MIN_YEAR,
            month: 1,
            day: 1,
            day_of_week: 0,
            hour: time.hour(),
            minute: time.minute(),
            second: time.second(),
        };
        let flags = DateTimeFlags::empty()
            .with(DateTimeFlag::NoYear, true)
            .with(DateTimeFlag::NoDate, true)
            .with(DateTimeFlag::NoDayOfWeek, true);
        DateTimeValue { dpt: self, fields, flags }
    }

    /// Encode a date and time (no flags) to its 8 wire bytes
    pub fn encode_to_bytes(self, date: KnxDate, time: KnxTime) -> Result<[u8; 8]> {
        Ok(self.of(date, time)?.to_bytes())
    }

    fn check_year(self, year: u16) -> Result<()> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(KnxError::out_of_range(
                self.identifier(),
                f64::from(year),
                f64::from(MIN_YEAR),
                f64::from(MAX_YEAR),
            ));
        }
        Ok(())
    }
}

/// Raw date-time fields as transported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
struct Fields {
    year: u16,
    month: u8,
    day: u8,
    day_of_week: u8,
    hour: u8,
    minute: u8,
    second: u8,
}

impl Fields {
    fn from_parts(date: KnxDate, time: KnxTime, day_of_week: Option<DayOfWeek>) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
            day_of_week: day_of_week.map_or(0, DayOfWeek::code),
            hour: time.hour(),
            minute: time.minute(),
            second: time.second(),
        }
    }

    /// Validate the fields that `flags` declare valid
    fn validate(&self, id: &'static str, flags: DateTimeFlags) -> Result<()> {
        if flags.has_date() {
            if !(1..=12).contains(&self.month) {
                return Err(KnxError::out_of_range(id, f64::from(self.month), 1.0, 12.0));
            }
            let last = days_in_month(self.year, self.month);
            if !(1..=last).contains(&self.day) {
                return Err(KnxError::out_of_range(id, f64::from(self.day), 1.0, f64::from(last)));
            }
        }
        if flags.has_time() {
            if self.hour > 24 {
                return Err(KnxError::out_of_range(id, f64::from(self.hour), 0.0, 24.0));
            }
            if self.minute > 59 {
                return Err(KnxError::out_of_range(id, f64::from(self.minute), 0.0, 59.0));
            }
            if self.second > 59 {
                return Err(KnxError::out_of_range(id, f64::from(self.second), 0.0, 59.0));
            }
            if self.hour == 24 && (self.minute, self.second) != (0, 0) {
                let seconds = f64::from(self.minute) * 60.0 + f64::from(self.second);
                return Err(KnxError::out_of_range(id, seconds, 0.0, 0.0));
            }
        }
        Ok(())
    }
}

/// Decoded DPT 19 value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DateTimeValue {
    dpt: Dpt19,
    fields: Fields,
    flags: DateTimeFlags,
}

impl DateTimeValue {
    /// Codec of this value
    pub fn dpt(&self) -> Dpt19 {
        self.dpt
    }

    /// Status flags
    pub fn flags(&self) -> DateTimeFlags {
        self.flags
    }

    /// Year field (1900..=2155), regardless of `NY`
    pub fn year(&self) -> u16 {
        self.fields.year
    }

    /// Date, `None` if the year or the month and day are flagged not valid
    pub fn date(&self) -> Option<KnxDate> {
        if !self.flags.has_year() || !self.flags.has_date() {
            return None;
        }
        KnxDate::new(self.fields.year, self.fields.month, self.fields.day).ok()
    }

    /// Time of day (possibly `24:00:00`), `None` if flagged not valid
    pub fn time(&self) -> Option<KnxTime> {
        if !self.flags.has_time() {
            return None;
        }
        KnxTime::checked(self.fields.hour, self.fields.minute, self.fields.second).ok()
    }

    /// Day of week, `None` if flagged not valid or transported as "any day"
    pub fn day_of_week(&self) -> Option<DayOfWeek> {
        if !self.flags.has_day_of_week() {
            return None;
        }
        DayOfWeek::from_code(self.fields.day_of_week)
    }

    /// Return a copy carrying `flags`
    ///
    /// # Errors
    ///
    /// Returns an out-of-range error if a field the new flags declare valid
    /// holds an impossible value.
    pub fn with_flags(self, flags: DateTimeFlags) -> Result<Self> {
        self.fields.validate(self.dpt.identifier(), flags)?;
        Ok(Self { flags, ..self })
    }

    /// Return a copy with the day of week replaced (`None` = any day)
    #[must_use]
    pub fn with_day_of_week(self, day: Option<DayOfWeek>) -> Self {
        let fields = Fields {
            day_of_week: day.map_or(0, DayOfWeek::code),
            ..self.fields
        };
        Self { fields, ..self }
    }

    fn with_flag_unchecked(self, flag: DateTimeFlag) -> Self {
        Self {
            flags: self.flags.with(flag, true),
            ..self
        }
    }

    fn to_bytes(self) -> [u8; 8] {
        let f = self.fields;
        let [flags_high, flags_low] = self.flags.bytes();
        [
            (f.year - MIN_YEAR) as u8,
            f.month,
            f.day,
            (f.day_of_week << 5) | f.hour,
            f.minute,
            f.second,
            flags_high,
            flags_low,
        ]
    }

    /// Flags not already expressed by the rendered fields
    fn extra_flags(&self) -> bool {
        !self
            .flags
            .with(DateTimeFlag::NoDayOfWeek, false)
            .with(DateTimeFlag::NoYear, false)
            .with(DateTimeFlag::NoDate, false)
            .with(DateTimeFlag::NoTime, false)
            .flags
            .is_empty()
    }
}

impl DataPointValue for DateTimeValue {
    fn dpt_id(&self) -> &'static str {
        self.dpt.identifier()
    }

    fn to_payload(&self) -> Payload {
        payload(&self.to_bytes())
    }
}

impl fmt::Display for DateTimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut separator = "";
        if let Some(day) = self.day_of_week() {
            write!(f, "{day}")?;
            separator = " ";
        }
        if self.flags.has_date() {
            let d = &self.fields;
            write!(f, "{separator}{:04}-{:02}-{:02}", d.year, d.month, d.day)?;
            separator = " ";
        }
        if let Some(time) = self.time() {
            write!(f, "{separator}{time}")?;
            separator = " ";
        }
        if self.extra_flags() {
            let [high, low] = self.flags.bytes();
            write!(f, "{separator}0x{high:02X}{low:02X}")?;
        }
        Ok(())
    }
}

impl DataPointType for Dpt19 {
    type Value = DateTimeValue;

    fn id(&self) -> &'static str {
        self.identifier()
    }

    fn description(&self) -> &'static str {
        self.name()
    }

    fn is_compatible(&self, data: &[u8]) -> bool {
        data.len() == 8
    }

    fn is_compatible_syntax(&self, args: &[&str]) -> bool {
        (2..=4).contains(&args.len())
    }

    fn decode(&self, data: &[u8]) -> Result<DateTimeValue> {
        let [year, month, day, dow_hour, minute, second, flags_high, flags_low] =
            fixed_bytes::<8>(self.identifier(), data)?;
        let fields = Fields {
            year: MIN_YEAR + u16::from(year),
            month: month & 0x0F,
            day: day & 0x1F,
            day_of_week: dow_hour >> 5,
            hour: dow_hour & 0x1F,
            minute: minute & 0x3F,
            second: second & 0x3F,
        };
        let flags = DateTimeFlags::new([flags_high, flags_low]);
        fields.validate(self.identifier(), flags)?;
        Ok(DateTimeValue { dpt: *self, fields, flags })
    }

    fn decode_syntax(&self, args: &[&str]) -> Result<DateTimeValue> {
        let id = self.identifier();
        let mut tokens = args.iter().copied().peekable();

        let weekday = tokens.next_if(|t| DayOfWeek::from_name(t).is_some());
        let weekday = weekday.and_then(DayOfWeek::from_name);

        let date = match tokens.next_if(|t| looks_like_date(t)) {
            None => return Err(KnxError::syntax(SyntaxErrorKind::MissingDate, id, args)),
            Some(token) => parse_date(token)
                .and_then(|(y, m, d)| KnxDate::new(y, m, d).ok())
                .ok_or_else(|| KnxError::syntax(SyntaxErrorKind::InvalidDate, id, args))?,
        };

        let time = match tokens.next_if(|t| looks_like_time(t)) {
            None => return Err(KnxError::syntax(SyntaxErrorKind::MissingTime, id, args)),
            Some(token) => parse_time(token)
                .and_then(|(h, m, s)| KnxTime::checked(h, m, s).ok())
                .ok_or_else(|| KnxError::syntax(SyntaxErrorKind::InvalidTime, id, args))?,
        };

        let flags = match (tokens.next(), tokens.next()) {
            (None, _) => None,
            (Some(token), None) => match parse_hex::<2>(token) {
                Some(bytes) => Some(DateTimeFlags::new(bytes)),
                None => return Err(KnxError::incompatible_syntax(id, args)),
            },
            (Some(_), Some(_)) => return Err(KnxError::incompatible_syntax(id, args)),
        };

        let value = self.of(date, time)?;
        let value = match weekday {
            Some(day) => value.with_day_of_week(Some(day)),
            None => value,
        };
        match flags {
            Some(flags) => value.with_flags(flags),
            None => Ok(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [u8; 8] = [0x7C, 0x03, 0x0F, 0xAE, 0x1E, 0x00, 0x00, 0x00];

    fn date(y: u16, m: u8, d: u8) -> KnxDate {
        KnxDate::new(y, m, d).unwrap()
    }

    fn time(h: u8, m: u8, s: u8) -> KnxTime {
        KnxTime::new(h, m, s).unwrap()
    }

    fn syntax_error(args: &[&str]) -> crate::error::SyntaxError {
        match Dpt19::DateTime.parse_syntax(args) {
            Err(KnxError::Syntax(e)) => e,
            other => panic!("expected syntax error, got {other:?}"),
        }
    }

    #[test]
    fn test_encode() {
        let bytes = Dpt19::DateTime.encode_to_bytes(date(2024, 3, 15), time(14, 30, 0)).unwrap();
        assert_eq!(bytes, SAMPLE);
    }

    #[test]
    fn test_decode() {
        let value = Dpt19::DateTime.parse(&SAMPLE).unwrap();
        assert_eq!(value.date(), Some(date(2024, 3, 15)));
        assert_eq!(value.time(), Some(time(14, 30, 0)));
        assert_eq!(value.day_of_week(), Some(DayOfWeek::Friday));
        assert_eq!(value.to_payload().as_slice(), &SAMPLE);
    }

    #[test]
    fn test_year_bounds() {
        assert!(Dpt19::DateTime.of(date(1900, 1, 1), time(0, 0, 0)).is_ok());
        assert!(Dpt19::DateTime.of(date(2155, 12, 31), time(0, 0, 0)).is_ok());
        assert!(Dpt19::DateTime.of(date(1899, 12, 31), time(0, 0, 0)).unwrap_err().is_out_of_range());
        assert!(Dpt19::DateTime.of(date(2156, 1, 1), time(0, 0, 0)).unwrap_err().is_out_of_range());
        let value = Dpt19::DateTime.parse(&[0xFF, 0x0C, 0x1F, 0x00, 0x00, 0x00, 0x00, 0x00]).unwrap();
        assert_eq!(value.year(), 2155);
    }

    #[test]
    fn test_end_of_day() {
        let value = Dpt19::DateTime.parse(&[0x7C, 0x03, 0x0F, 0x18, 0x00, 0x00, 0x00, 0x00]).unwrap();
        assert_eq!(value.time(), Some(KnxTime::END_OF_DAY));
        // 24:00:01
        let err = Dpt19::DateTime
            .parse(&[0x7C, 0x03, 0x0F, 0x18, 0x00, 0x01, 0x00, 0x00])
            .unwrap_err();
        assert!(err.is_out_of_range());
    }

    #[test]
    fn test_invalid_fields_unless_flagged() {
        // Month 0 is rejected ...
        let mut bytes = [0x7C, 0x00, 0x00, 0x19, 0x00, 0x00, 0x00, 0x00];
        assert!(Dpt19::DateTime.parse(&bytes).unwrap_err().is_out_of_range());
        // ... unless ND is set, hour 25 unless NT is set
        bytes[6] = 0x08;
        assert!(Dpt19::DateTime.parse(&bytes).unwrap_err().is_out_of_range());
        bytes[6] = 0x0A;
        let value = Dpt19::DateTime.parse(&bytes).unwrap();
        assert_eq!(value.date(), None);
        assert_eq!(value.time(), None);
        assert_eq!(value.to_payload().as_slice(), &bytes);
    }

    #[test]
    fn test_flags() {
        let flags = DateTimeFlags::new([0x81, 0xC0]);
        assert!(flags.is_fault());
        assert!(flags.is_summer_time());
        assert!(flags.is_set(DateTimeFlag::ClockQuality));
        assert!(flags.is_set(DateTimeFlag::SyncSource));
        assert_eq!(flags.working_day(), Some(false));
        assert_eq!(DateTimeFlags::new([0x60, 0x00]).working_day(), None);

        // Reserved bits are dropped
        assert_eq!(DateTimeFlags::new([0x00, 0x3F]).bytes(), [0x00, 0x00]);

        let flags = DateTimeFlags::empty().with(DateTimeFlag::WorkingDay, true);
        assert_eq!(flags.bytes(), [0x40, 0x00]);
        assert_eq!(flags.working_day(), Some(true));
    }

    #[test]
    fn test_partial_values() {
        let value = Dpt19::DateTime.of_time(time(6, 0, 0));
        assert_eq!(value.date(), None);
        assert_eq!(value.day_of_week(), None);
        assert_eq!(value.to_string(), "06:00:00");
        assert_eq!(Dpt19::DateTime.parse(&value.to_payload()).unwrap(), value);

        let value = Dpt19::DateTime.of_date(date(2024, 3, 15)).unwrap();
        assert_eq!(value.time(), None);
        assert_eq!(value.to_string(), "Friday 2024-03-15");
    }

    #[test]
    fn test_display_with_flags() {
        let value = Dpt19::DateTime
            .of(date(2024, 7, 1), time(8, 0, 0))
            .unwrap()
            .with_flags(DateTimeFlags::empty().with(DateTimeFlag::SummerTime, true))
            .unwrap();
        assert_eq!(value.to_string(), "Monday 2024-07-01 08:00:00 0x0100");
    }

    #[test]
    fn test_syntax() {
        let value = Dpt19::DateTime.parse_syntax(&["2024-03-15", "14:30"]).unwrap();
        assert_eq!(value.to_payload().as_slice(), &SAMPLE);

        let value = Dpt19::DateTime.parse_syntax(&["Sun", "2024-03-15", "14:30:00"]).unwrap();
        assert_eq!(value.day_of_week(), Some(DayOfWeek::Sunday));

        let value = Dpt19::DateTime.parse_syntax(&["2024-03-15", "24:00", "0x4000"]).unwrap();
        assert_eq!(value.time(), Some(KnxTime::END_OF_DAY));
        assert_eq!(value.flags().working_day(), Some(true));

        // Day of week from the flags token is dropped with NDOW
        let value = Dpt19::DateTime.parse_syntax(&["2024-03-15", "14:30", "0x0400"]).unwrap();
        assert_eq!(value.day_of_week(), None);
    }

    #[test]
    fn test_syntax_errors() {
        assert!(syntax_error(&["14:30", "0x0000"]).is_missing_date());
        assert!(syntax_error(&["2024-02-30", "14:30"]).is_invalid_date());
        assert!(syntax_error(&["2024-03-15", "0x0000"]).is_missing_time());
        assert!(syntax_error(&["2024-03-15", "14:61"]).is_invalid_time());
        assert!(syntax_error(&["2024-03-15", "24:00:01"]).is_invalid_time());
        assert!(syntax_error(&["2024-03-15", "14:30", "flags"]).input().contains("flags"));
        assert!(Dpt19::DateTime.parse_syntax(&["2024-03-15"]).unwrap_err().is_incompatible_syntax());
    }
}
