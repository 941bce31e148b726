//! Calendar types shared by the time, date and date-time codecs.
//!
//! These are deliberately small `Copy` types so the codecs stay usable
//! without `std` or an external date/time crate.

use core::fmt;

use crate::error::{KnxError, Result};

/// Day of the week as transported in the 3-bit KNX field (1 = Monday .. 7 = Sunday)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum DayOfWeek {
    /// Monday
    Monday = 1,
    /// Tuesday
    Tuesday = 2,
    /// Wednesday
    Wednesday = 3,
    /// Thursday
    Thursday = 4,
    /// Friday
    Friday = 5,
    /// Saturday
    Saturday = 6,
    /// Sunday
    Sunday = 7,
}

impl DayOfWeek {
    /// All days, Monday first
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    /// Decode the 3-bit field; `0` means "no day" and yields `None`
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(DayOfWeek::Monday),
            2 => Some(DayOfWeek::Tuesday),
            3 => Some(DayOfWeek::Wednesday),
            4 => Some(DayOfWeek::Thursday),
            5 => Some(DayOfWeek::Friday),
            6 => Some(DayOfWeek::Saturday),
            7 => Some(DayOfWeek::Sunday),
            _ => None,
        }
    }

    /// 3-bit wire code (1..=7)
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// English day name
    pub const fn name(self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
            DayOfWeek::Sunday => "Sunday",
        }
    }

    /// Parse a full (`Monday`) or three letter (`Mon`) name, case-insensitive
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|day| {
            let full = day.name();
            full.eq_ignore_ascii_case(name)
                || (name.len() == 3 && full[..3].eq_ignore_ascii_case(name))
        })
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Calendar date (proleptic Gregorian)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnxDate {
    year: u16,
    month: u8,
    day: u8,
}

impl KnxDate {
    /// Create a date, validating month and day of month
    ///
    /// # Errors
    ///
    /// Returns an illegal-argument error for impossible dates (e.g. 2023-02-29).
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(KnxError::illegal_argument("month must be within 1..=12"));
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(KnxError::illegal_argument("day does not exist in month"));
        }
        Ok(Self { year, month, day })
    }

    /// Year (e.g. 2024)
    #[inline]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Month (1..=12)
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Day of month (1..=31)
    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Day of the week of this date
    pub fn weekday(&self) -> DayOfWeek {
        // Sakamoto's algorithm, 0 = Sunday
        const OFFSETS: [u32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
        // Shifted by one 400-year cycle so year 0 never underflows
        let y = u32::from(self.year) + if self.month < 3 { 399 } else { 400 };
        let offset = OFFSETS.get(usize::from(self.month.saturating_sub(1))).copied().unwrap_or(0);
        let dow = (y + y / 4 - y / 100 + y / 400 + offset + u32::from(self.day)) % 7;
        match dow {
            0 => DayOfWeek::Sunday,
            // 1..=6 map directly onto Monday..Saturday
            n => DayOfWeek::from_code(n as u8).unwrap_or(DayOfWeek::Sunday),
        }
    }
}

impl fmt::Display for KnxDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Time of day with second resolution
///
/// `hour` may be 24 only for the instant `24:00:00`, which the date-time
/// codec allows as end-of-day marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnxTime {
    hour: u8,
    minute: u8,
    second: u8,
}

impl KnxTime {
    /// Create a time of day within `00:00:00 ..= 23:59:59`
    pub fn new(hour: u8, minute: u8, second: u8) -> Result<Self> {
        if hour > 23 {
            return Err(KnxError::illegal_argument("hour must be within 0..=23"));
        }
        Self::checked(hour, minute, second)
    }

    /// The `24:00:00` end-of-day instant
    pub const END_OF_DAY: KnxTime = KnxTime {
        hour: 24,
        minute: 0,
        second: 0,
    };

    pub(crate) fn checked(hour: u8, minute: u8, second: u8) -> Result<Self> {
        if minute > 59 {
            return Err(KnxError::illegal_argument("minute must be within 0..=59"));
        }
        if second > 59 {
            return Err(KnxError::illegal_argument("second must be within 0..=59"));
        }
        if hour == 24 && (minute, second) != (0, 0) {
            return Err(KnxError::illegal_argument("hour 24 only allowed as 24:00:00"));
        }
        if hour > 24 {
            return Err(KnxError::illegal_argument("hour must be within 0..=24"));
        }
        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    /// Hour (0..=23, or 24 for end of day)
    #[inline]
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    /// Minute (0..=59)
    #[inline]
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    /// Second (0..=59)
    #[inline]
    pub const fn second(&self) -> u8 {
        self.second
    }
}

impl fmt::Display for KnxTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

/// Gregorian leap year rule
pub const fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year` (0 for an invalid month)
pub const fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}
