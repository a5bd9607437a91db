//! Jalali <-> Gregorian conversion.
//!
//! Both calendars are mapped onto a shared day count (days from CE, the
//! numbering `chrono` uses) and converted through it. The Jalali side uses
//! the arithmetic 33-year cycle, with the leap-day corrections from 1502 on
//! applied so that later years match the astronomical calendar.

use chrono::{Datelike, NaiveDate, Weekday};
use tracing::{debug, trace};

use crate::{
    JalaliDate, MAX_YEAR, MEHR, ParseError,
    consts::{
        DAYS_PER_LEAP_CYCLE, FIRST_HALF_DAYS, JALALI_EPOCH_DAYS_FROM_CE, LEAP_CYCLE_YEARS,
        LEAP_YEARS_PER_CYCLE, NEW_YEAR_LEAP_OFFSET,
    },
    types::is_corrected_year,
};

/// ISO 8601 calendar date, as stored by the backend
const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// Not a `YYYY-MM-DD` Gregorian date.
    #[error("invalid ISO date: {0:?}")]
    InvalidIso(String),

    /// The Jalali components do not form a real date.
    #[error(transparent)]
    InvalidDate(#[from] ParseError),

    /// The Gregorian date falls outside Jalali years `1..=MAX_YEAR`.
    #[error("{0} is outside the supported Jalali range")]
    OutOfRange(NaiveDate),
}

/// Days from CE of the day before Farvardin 1 of `year`.
fn days_before_year(year: u16) -> i64 {
    let y = i64::from(year);
    let days = JALALI_EPOCH_DAYS_FROM_CE - 1
        + 365 * (y - 1)
        + (LEAP_YEARS_PER_CYCLE * y + NEW_YEAR_LEAP_OFFSET).div_euclid(LEAP_CYCLE_YEARS);
    // the year after a corrected year starts one day earlier
    if year > 1 && is_corrected_year(year - 1) {
        days - 1
    } else {
        days
    }
}

/// Days from CE of `date` (0001-01-01 is day 1).
fn days_from_ce(date: &JalaliDate) -> i64 {
    days_before_year(date.year()) + i64::from(date.ordinal())
}

fn from_days_from_ce(days: i64) -> Option<JalaliDate> {
    let since_epoch = days - JALALI_EPOCH_DAYS_FROM_CE;
    let year = 1 + (LEAP_CYCLE_YEARS * since_epoch + 3).div_euclid(DAYS_PER_LEAP_CYCLE);
    let mut year = u16::try_from(year).ok().filter(|y| (1..=MAX_YEAR).contains(y))?;

    let mut day_of_year = days - days_before_year(year);
    // day 366 of a corrected year is Farvardin 1 of the next
    if day_of_year == 366 && is_corrected_year(year) {
        year += 1;
        day_of_year = 1;
    }
    let (month, day) = if day_of_year <= FIRST_HALF_DAYS {
        (1 + (day_of_year - 1) / 31, 1 + (day_of_year - 1) % 31)
    } else {
        let rest = day_of_year - FIRST_HALF_DAYS - 1;
        (i64::from(MEHR) + rest / 30, 1 + rest % 30)
    };

    JalaliDate::new(year, u8::try_from(month).ok()?, u8::try_from(day).ok()?).ok()
}

impl JalaliDate {
    /// The same day in the proleptic Gregorian calendar
    ///
    /// # Errors
    /// Never fails for a valid `JalaliDate`; the error exists because the
    /// day count is narrowed to `chrono`'s range.
    pub fn to_gregorian(&self) -> Result<NaiveDate, ConversionError> {
        i32::try_from(days_from_ce(self))
            .ok()
            .and_then(NaiveDate::from_num_days_from_ce_opt)
            .ok_or(ConversionError::InvalidDate(ParseError::InvalidYear(self.year())))
    }

    /// The Jalali day for a Gregorian date
    ///
    /// # Errors
    /// Returns `ConversionError::OutOfRange` before 622-03-21 or past the
    /// end of Jalali year `MAX_YEAR`.
    pub fn from_gregorian(date: NaiveDate) -> Result<Self, ConversionError> {
        from_days_from_ce(i64::from(date.num_days_from_ce()))
            .ok_or(ConversionError::OutOfRange(date))
    }

    /// Gregorian `YYYY-MM-DD`, the form the backend stores
    ///
    /// # Errors
    /// See [`JalaliDate::to_gregorian`].
    pub fn to_iso_string(&self) -> Result<String, ConversionError> {
        self.to_gregorian()
            .map(|date| date.format(ISO_DATE_FORMAT).to_string())
    }

    /// Parses a Gregorian `YYYY-MM-DD` string into a Jalali date
    ///
    /// Only the exact zero-padded form is accepted; `chrono` alone would also
    /// take `1991-3-31` or `+1991-03-31`.
    ///
    /// # Errors
    /// Returns `ConversionError::InvalidIso` for a malformed string and
    /// `ConversionError::OutOfRange` for a date outside the Jalali range.
    pub fn from_iso_str(iso: &str) -> Result<Self, ConversionError> {
        let trimmed = iso.trim();
        let date = NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT)
            .ok()
            .filter(|date| date.format(ISO_DATE_FORMAT).to_string() == trimmed)
            .ok_or_else(|| ConversionError::InvalidIso(iso.to_owned()))?;
        Self::from_gregorian(date)
    }

    /// Day of the week
    pub fn weekday(&self) -> Weekday {
        // 0001-01-01 was a Monday
        const WEEK: [Weekday; 7] = [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ];
        let index = (days_from_ce(self) - 1).rem_euclid(7);
        WEEK[usize::try_from(index).unwrap_or_default()]
    }
}

/// Converts a Jalali date to Gregorian for submission to the backend.
///
/// # Errors
/// Returns `ConversionError::InvalidDate` if the components are not a real
/// Jalali date.
pub fn jalali_to_gregorian(year: u16, month: u8, day: u8) -> Result<NaiveDate, ConversionError> {
    let date = JalaliDate::new(year, month, day)?;
    let gregorian = date.to_gregorian()?;
    trace!(%date, %gregorian, "converted jalali to gregorian");
    Ok(gregorian)
}

/// Converts a backend ISO date (`YYYY-MM-DD`) to Jalali for display.
///
/// Callers fall back to showing the raw string when this fails.
///
/// # Errors
/// See [`JalaliDate::from_iso_str`].
pub fn gregorian_to_jalali(iso: &str) -> Result<JalaliDate, ConversionError> {
    JalaliDate::from_iso_str(iso)
        .inspect(|date| trace!(iso, %date, "converted gregorian to jalali"))
        .inspect_err(|err| debug!(iso, %err, "gregorian date not convertible"))
}
