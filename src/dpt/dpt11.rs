//! DPT 11.001 - Date (3 bytes)
//!
//! ## Format
//!
//! ```text
//! Byte 0: 000D DDDD    D = day of month (1..31)
//! Byte 1: 0000 MMMM    M = month (1..12)
//! Byte 2: 0YYY YYYY    Y = year (0..99)
//! ```
//!
//! ## Century Rule
//!
//! Two-digit years `>= 90` belong to the 20th century, the rest to the 21st,
//! so the type covers 1990-01-01 ..= 2089-12-31. Out-of-century year bits
//! (100..127) are accepted on decode and re-encoded in two-digit form.
//!
//! ## Example
//!
//! ```rust
//! use knx_dpt::dpt::{DataPointType, Dpt11, KnxDate};
//!
//! let bytes = Dpt11::Date.encode_to_bytes(KnxDate::new(1990, 1, 1)?)?;
//! assert_eq!(bytes, [0x01, 0x01, 0x5A]);
//!
//! let date = Dpt11::Date.parse(&[0x1F, 0x0C, 0x59])?;
//! assert_eq!(date.to_string(), "2089-12-31");
//! # Ok::<(), knx_dpt::KnxError>(())
//! ```

use core::fmt;

use crate::dpt::calendar::days_in_month;
use crate::dpt::syntax::{looks_like_date, parse_date};
use crate::dpt::{fixed_bytes, payload, DataPointType, DataPointValue, KnxDate, Payload};
use crate::error::{KnxError, Result};

/// First year representable by the two-digit encoding
pub const MIN_YEAR: u16 = 1990;
/// Last year representable by the two-digit encoding
pub const MAX_YEAR: u16 = 2089;

const CENTURY_PIVOT: u16 = 90;

/// DPT 11.xxx date types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Dpt11 {
    /// DPT 11.001 - Date
    Date,
}

impl Dpt11 {
    /// Get the DPT identifier string
    pub const fn identifier(&self) -> &'static str {
        "11.001"
    }

    /// Get the subtype name
    pub const fn name(&self) -> &'static str {
        "Date"
    }

    /// Create a value
    ///
    /// # Errors
    ///
    /// Returns an out-of-range error outside 1990..=2089.
    pub fn of(self, date: KnxDate) -> Result<DateValue> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&date.year()) {
            return Err(KnxError::out_of_range(
                self.identifier(),
                f64::from(date.year()),
                f64::from(MIN_YEAR),
                f64::from(MAX_YEAR),
            ));
        }
        Ok(DateValue { dpt: self, date })
    }

    /// Encode a date to its 3 wire bytes
    pub fn encode_to_bytes(self, date: KnxDate) -> Result<[u8; 3]> {
        Ok(self.of(date)?.to_bytes())
    }
}

/// Full year for the 7-bit year field
pub const fn expand_year(two_digit: u8) -> u16 {
    let year = two_digit as u16;
    if year >= CENTURY_PIVOT {
        1900 + year
    } else {
        2000 + year
    }
}

/// Decoded DPT 11 value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DateValue {
    dpt: Dpt11,
    date: KnxDate,
}

impl DateValue {
    /// Codec of this value
    pub fn dpt(&self) -> Dpt11 {
        self.dpt
    }

    /// Decoded date
    pub fn date(&self) -> KnxDate {
        self.date
    }

    fn to_bytes(self) -> [u8; 3] {
        [self.date.day(), self.date.month(), (self.date.year() % 100) as u8]
    }
}

impl DataPointValue for DateValue {
    fn dpt_id(&self) -> &'static str {
        self.dpt.identifier()
    }

    fn to_payload(&self) -> Payload {
        payload(&self.to_bytes())
    }
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date)
    }
}

impl DataPointType for Dpt11 {
    type Value = DateValue;

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
        matches!(args, [token] if looks_like_date(token))
    }

    fn decode(&self, data: &[u8]) -> Result<DateValue> {
        let id = self.identifier();
        let [day, month, year] = fixed_bytes::<3>(id, data)?;
        let (day, month, year) = (day & 0x1F, month & 0x0F, expand_year(year & 0x7F));
        if !(1..=12).contains(&month) {
            return Err(KnxError::out_of_range(id, f64::from(month), 1.0, 12.0));
        }
        let last = days_in_month(year, month);
        if !(1..=last).contains(&day) {
            return Err(KnxError::out_of_range(id, f64::from(day), 1.0, f64::from(last)));
        }
        // Years 2000..=2027 from out-of-century bits are kept as decoded
        Ok(DateValue {
            dpt: *self,
            date: KnxDate::new(year, month, day)?,
        })
    }

    fn decode_syntax(&self, args: &[&str]) -> Result<DateValue> {
        let date = args
            .first()
            .and_then(|token| parse_date(token))
            .and_then(|(y, m, d)| KnxDate::new(y, m, d).ok());
        let Some(date) = date else {
            return Err(KnxError::incompatible_syntax(self.identifier(), args));
        };
        self.of(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> KnxDate {
        KnxDate::new(y, m, d).unwrap()
    }

    #[test]
    fn test_century_boundaries() {
        assert_eq!(Dpt11::Date.encode_to_bytes(date(1990, 1, 1)).unwrap(), [0x01, 0x01, 0x5A]);
        assert_eq!(Dpt11::Date.encode_to_bytes(date(2089, 12, 31)).unwrap(), [0x1F, 0x0C, 0x59]);
        assert_eq!(Dpt11::Date.parse(&[0x1F, 0x0C, 0x59]).unwrap().date(), date(2089, 12, 31));
        assert_eq!(Dpt11::Date.parse(&[0x01, 0x01, 0x5A]).unwrap().date(), date(1990, 1, 1));
        assert_eq!(Dpt11::Date.parse(&[0x01, 0x01, 0x00]).unwrap().date(), date(2000, 1, 1));
    }

    #[test]
    fn test_year_out_of_range() {
        assert!(Dpt11::Date.of(date(1989, 12, 31)).unwrap_err().is_out_of_range());
        assert!(Dpt11::Date.of(date(2090, 1, 1)).unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_out_of_century_bits() {
        // Year bits 100 decode as 2000 and re-encode as 00
        let value = Dpt11::Date.parse(&[0x0F, 0x06, 0x64]).unwrap();
        assert_eq!(value.date(), date(2000, 6, 15));
        assert_eq!(value.to_payload().as_slice(), &[0x0F, 0x06, 0x00]);
    }

    #[test]
    fn test_invalid_calendar_dates() {
        // 2023-02-29
        assert!(Dpt11::Date.parse(&[0x1D, 0x02, 0x17]).unwrap_err().is_out_of_range());
        // 2024-02-29 is a leap day
        assert!(Dpt11::Date.parse(&[0x1D, 0x02, 0x18]).is_ok());
        // Month 13, day 0
        assert!(Dpt11::Date.parse(&[0x01, 0x0D, 0x17]).unwrap_err().is_out_of_range());
        assert!(Dpt11::Date.parse(&[0x00, 0x01, 0x17]).unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_syntax() {
        let value = Dpt11::Date.parse_syntax(&["2024-02-29"]).unwrap();
        assert_eq!(value.to_payload().as_slice(), &[0x1D, 0x02, 0x18]);
        assert_eq!(value.to_string(), "2024-02-29");

        assert!(Dpt11::Date.parse_syntax(&["2023-02-29"]).unwrap_err().is_incompatible_syntax());
        assert!(Dpt11::Date.parse_syntax(&["2100-01-01"]).unwrap_err().is_out_of_range());
        assert!(Dpt11::Date.parse_syntax(&["today"]).unwrap_err().is_incompatible_syntax());
    }

    #[test]
    fn test_expand_year() {
        assert_eq!(expand_year(90), 1990);
        assert_eq!(expand_year(99), 1999);
        assert_eq!(expand_year(0), 2000);
        assert_eq!(expand_year(89), 2089);
        assert_eq!(expand_year(127), 2027);
    }
}
