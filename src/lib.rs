//! Jalali (Persian solar calendar) dates for birth-date form fields.
//!
//! Normalizes Persian and Arabic-Indic digits, validates `YYYYMMDD` input
//! as the user types, converts to and from the ISO Gregorian dates the
//! backend stores, and formats dates for RTL display. A small password
//! strength scorer used by the same forms lives alongside.

mod consts;
mod convert;
mod digits;
mod format;
mod input;
pub mod iso_gregorian;
mod password;
mod prelude;
mod range;
mod types;
mod validate;

pub use consts::*;
pub use convert::{ConversionError, gregorian_to_jalali, jalali_to_gregorian};
pub use digits::{digits_only, normalize, to_ascii_digit};
pub use format::{DigitStyle, month_name, to_display_string, to_long_string, to_persian_numerals};
pub use input::{RawDate, format_partial};
pub use password::{PasswordStrength, Strength, score};
pub use range::{RangeError, YearRange};
pub use types::{Day, Month, Year, days_in_month, days_in_year, is_leap_year};
pub use validate::{
    Month12Rule, Validation, ValidationError, Validator, ValidatorConfig, validate_birth_date,
};

use crate::prelude::*;
use std::str::FromStr;

/// A day in the Jalali calendar.
///
/// Always denotes a real calendar day: Esfand 30 only exists in leap years.
/// Orders chronologically and displays as `YYYY/MM/DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}/{:02}/{:02}", "year.get()", "month.get()", "day.get()")]
pub struct JalaliDate {
    year:  Year,
    month: Month,
    day:   Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}/{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl JalaliDate {
    /// Creates a date from raw components, validating each one
    ///
    /// # Errors
    /// Returns the `ParseError` of the first component that is out of range.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        Ok(Self {
            year:  Year::new(year)?,
            month: Month::new(month)?,
            day:   Day::new(day, year, month)?,
        })
    }

    /// Creates a date from typed components.
    /// The day is rechecked against the month since `Day` may have been
    /// built without that context.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the day does not exist in that month.
    pub fn from_parts(year: Year, month: Month, day: Day) -> Result<Self, ParseError> {
        let day = Day::new(day.get(), year.get(), month.get())?;
        Ok(Self { year, month, day })
    }

    /// Returns the year component
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the month component
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day component
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn year_typed(&self) -> Year {
        self.year
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Returns `(year, month, day)`
    pub const fn to_columns(&self) -> (u16, u8, u8) {
        (self.year.get(), self.month.get(), self.day.get())
    }

    pub const fn is_leap_year(&self) -> bool {
        self.year.is_leap()
    }

    /// Day of the year, 1-based (Farvardin 1 is 1, Esfand 30 is 366)
    pub const fn ordinal(&self) -> u16 {
        let month = self.month.get() as u16;
        let before = if month < MEHR as u16 {
            31 * (month - 1)
        } else {
            30 * (month - 1) + 6
        };
        before + self.day.get() as u16
    }

    /// The following day, or `None` past Esfand of `MAX_YEAR`
    pub fn succ(&self) -> Option<Self> {
        let (y, m, d) = next_day(self.year(), self.month(), self.day())?;
        Self::new(y, m, d).ok()
    }

    /// The preceding day, or `None` before Farvardin 1 of year 1
    pub fn pred(&self) -> Option<Self> {
        let (y, m, d) = prev_day(self.year(), self.month(), self.day())?;
        Self::new(y, m, d).ok()
    }
}

// --- helpers for day stepping ---
fn next_month(year: u16, month: u8) -> Option<(u16, u8)> {
    if month == ESFAND {
        if year >= MAX_YEAR {
            None
        } else {
            Some((year + 1, FARVARDIN))
        }
    } else {
        Some((year, month + 1))
    }
}

fn next_day(year: u16, month: u8, day: u8) -> Option<(u16, u8, u8)> {
    if day < days_in_month(year, month) {
        Some((year, month, day + 1))
    } else {
        next_month(year, month).map(|(ny, nm)| (ny, nm, MIN_DAY))
    }
}

fn prev_day(year: u16, month: u8, day: u8) -> Option<(u16, u8, u8)> {
    if day > MIN_DAY {
        return Some((year, month, day - 1));
    }
    let (py, pm) = if month == FARVARDIN {
        if year <= 1 {
            return None;
        }
        (year - 1, ESFAND)
    } else {
        (year, month - 1)
    };
    Some((py, pm, days_in_month(py, pm)))
}

impl FromStr for JalaliDate {
    type Err = ParseError;

    /// Accepts `YYYYMMDD`, `YYYY/MM/DD` or `YYYY-MM-DD` in ASCII, Persian or
    /// Arabic-Indic digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let folded = fold_digits(trimmed)?;

        let has_slash = folded.contains(DATE_SEPARATOR);
        let has_hyphen = folded.contains(ALT_DATE_SEPARATOR);

        if has_slash && has_hyphen {
            return Err(ParseError::InvalidFormat(format!(
                "Mixed delimiters ({DATE_SEPARATOR} and {ALT_DATE_SEPARATOR})"
            )));
        }

        if has_slash || has_hyphen {
            let separator = if has_slash {
                DATE_SEPARATOR
            } else {
                ALT_DATE_SEPARATOR
            };
            let parts: Vec<&str> = folded.split(separator).collect();
            if parts.len() != 3 {
                return Err(ParseError::InvalidFormat(format!(
                    "Expected 2 '{separator}' separators, found {}",
                    parts.len() - 1
                )));
            }
            Self::parse_parts(parts[0], parts[1], parts[2])
        } else if folded.len() == DATE_DIGITS {
            let (year, rest) = folded.split_at(YEAR_DIGITS);
            let (month, day) = rest.split_at(MONTH_DIGITS);
            Self::parse_parts(year, month, day)
        } else {
            Err(ParseError::InvalidFormat(format!(
                "Expected {DATE_DIGITS} digits, found {}",
                folded.len()
            )))
        }
    }
}

impl JalaliDate {
    /// Helper to parse u16 with better error messages
    fn parse_u16(s: &str) -> Result<u16, ParseError> {
        s.parse::<u16>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }

    /// Helper to parse u8 with better error messages
    fn parse_u8(s: &str) -> Result<u8, ParseError> {
        s.parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }

    fn parse_parts(year: &str, month: &str, day: &str) -> Result<Self, ParseError> {
        // Parse components - InvalidFormat if not numeric
        let year = Self::parse_u16(year)?;
        let month = Self::parse_u8(month)?;
        let day = Self::parse_u8(day)?;

        Self::new(year, month, day)
    }
}

/// Maps every digit to ASCII and keeps separators; any other character is
/// a format error.
fn fold_digits(s: &str) -> Result<String, ParseError> {
    s.chars()
        .map(|c| match to_ascii_digit(c) {
            Some(d) => Ok(char::from(b'0' + d)),
            None if c == DATE_SEPARATOR || c == ALT_DATE_SEPARATOR => Ok(c),
            None => Err(ParseError::InvalidFormat(s.to_owned())),
        })
        .collect()
}

impl serde::Serialize for JalaliDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for JalaliDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::jd;

    #[test]
    fn test_parse_compact() {
        let date = "13700101".parse::<JalaliDate>().unwrap();
        assert_eq!(date, jd(1370, 1, 1));
        assert_eq!(date.year(), 1370);
        assert_eq!(date.month(), 1);
        assert_eq!(date.day(), 1);
    }

    #[test]
    fn test_parse_separated() {
        assert_eq!("1370/01/11".parse::<JalaliDate>().unwrap(), jd(1370, 1, 11));
        assert_eq!("1370-1-11".parse::<JalaliDate>().unwrap(), jd(1370, 1, 11));
        assert_eq!(" 1403/12/30 ".parse::<JalaliDate>().unwrap(), jd(1403, 12, 30));
    }

    #[test]
    fn test_parse_persian_and_arabic_digits() {
        assert_eq!("۱۳۷۰/۰۱/۱۱".parse::<JalaliDate>().unwrap(), jd(1370, 1, 11));
        assert_eq!("١٣٧٠٠١١١".parse::<JalaliDate>().unwrap(), jd(1370, 1, 11));
        assert_eq!("۱۳۷۰01۱۱".parse::<JalaliDate>().unwrap(), jd(1370, 1, 11));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!("".parse::<JalaliDate>(), Err(ParseError::EmptyInput)));
        assert!(matches!("   ".parse::<JalaliDate>(), Err(ParseError::EmptyInput)));
        assert!(matches!(
            "1370011".parse::<JalaliDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "1370/01-01".parse::<JalaliDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "1370/01".parse::<JalaliDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "1370/0a/01".parse::<JalaliDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "13701301".parse::<JalaliDate>(),
            Err(ParseError::InvalidMonth(13))
        ));
        assert!(matches!(
            "14041230".parse::<JalaliDate>(),
            Err(ParseError::InvalidDay {
                year: 1404,
                month: 12,
                day: 30
            })
        ));
        assert!(matches!(
            "00000101".parse::<JalaliDate>(),
            Err(ParseError::InvalidYear(0))
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(jd(1370, 1, 1).to_string(), "1370/01/01");
        assert_eq!(jd(98, 7, 9).to_string(), "0098/07/09");
    }

    #[test]
    fn test_from_parts_rechecks_day() {
        let day: Day = 31.try_into().unwrap();
        let year = Year::new(1403).unwrap();
        assert!(JalaliDate::from_parts(year, Month::new(1).unwrap(), day).is_ok());
        assert!(matches!(
            JalaliDate::from_parts(year, Month::new(7).unwrap(), day),
            Err(ParseError::InvalidDay { .. })
        ));
    }

    #[test]
    fn test_ordering() {
        assert!(jd(1370, 1, 31) < jd(1370, 2, 1));
        assert!(jd(1369, 12, 29) < jd(1370, 1, 1));
        assert!(jd(1370, 5, 5) == jd(1370, 5, 5));
    }

    #[test]
    fn test_ordinal() {
        assert_eq!(jd(1403, 1, 1).ordinal(), 1);
        assert_eq!(jd(1403, 6, 31).ordinal(), 186);
        assert_eq!(jd(1403, 7, 1).ordinal(), 187);
        assert_eq!(jd(1403, 12, 30).ordinal(), 366);
        assert_eq!(jd(1404, 12, 29).ordinal(), 365);
    }

    #[test]
    fn test_succ_and_pred() {
        assert_eq!(jd(1370, 1, 31).succ(), Some(jd(1370, 2, 1)));
        assert_eq!(jd(1370, 6, 31).succ(), Some(jd(1370, 7, 1)));
        assert_eq!(jd(1403, 12, 29).succ(), Some(jd(1403, 12, 30)));
        assert_eq!(jd(1403, 12, 30).succ(), Some(jd(1404, 1, 1)));
        assert_eq!(jd(1404, 12, 29).succ(), Some(jd(1405, 1, 1)));
        assert_eq!(jd(MAX_YEAR, 12, days_in_month(MAX_YEAR, 12)).succ(), None);

        assert_eq!(jd(1404, 1, 1).pred(), Some(jd(1403, 12, 30)));
        assert_eq!(jd(1370, 7, 1).pred(), Some(jd(1370, 6, 31)));
        assert_eq!(jd(1, 1, 1).pred(), None);
    }

    #[test]
    fn test_serde_string_format() {
        let date = jd(1370, 1, 11);
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#""1370/01/11""#);
        let parsed: JalaliDate = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);

        let parsed: JalaliDate = serde_json::from_str(r#""۱۳۷۰۰۱۱۱""#).unwrap();
        assert_eq!(date, parsed);

        assert!(serde_json::from_str::<JalaliDate>(r#""1370/13/01""#).is_err());
    }
}
