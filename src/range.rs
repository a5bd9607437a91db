use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    DEFAULT_MAX_BIRTH_YEAR, DEFAULT_MIN_BIRTH_YEAR, ParseError, RANGE_SEPARATOR, Year,
    prelude::*,
};

/// An inclusive range of Jalali years, written `1300/1420`.
/// The start year must be less than or equal to the end year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct YearRange {
    start: Year,
    end:   Year,
}

/// Error type for year range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Start year is after end year.
    #[error("Invalid year range: start ({start}) is after end ({end})")]
    InvalidRange { start: Year, end: Year },

    /// Error parsing a year bound.
    #[error(transparent)]
    ParseError(#[from] ParseError),

    /// Invalid range format.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),
}

impl YearRange {
    /// Creates a new year range with validation.
    ///
    /// # Errors
    /// Returns `RangeError::ParseError` if either bound is not a valid year
    /// and `RangeError::InvalidRange` if start > end.
    pub fn new(start: u16, end: u16) -> Result<Self, RangeError> {
        let start = Year::new(start)?;
        let end = Year::new(end)?;
        if start > end {
            return Err(RangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Plausible birth years, `1300/1420`
    pub fn birth_years() -> Self {
        Self::default()
    }

    /// Returns the first year of the range
    pub const fn start(&self) -> u16 {
        self.start.get()
    }

    /// Returns the last year of the range
    pub const fn end(&self) -> u16 {
        self.end.get()
    }

    /// Checks if the range contains a given year
    pub fn contains(&self, year: u16) -> bool {
        (self.start.get()..=self.end.get()).contains(&year)
    }
}

impl Default for YearRange {
    fn default() -> Self {
        const BIRTH_YEARS: YearRange = YearRange {
            start: Year::from_const(DEFAULT_MIN_BIRTH_YEAR),
            end:   Year::from_const(DEFAULT_MAX_BIRTH_YEAR),
        };
        BIRTH_YEARS
    }
}

impl FromStr for YearRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        let Some((start_str, end_str)) = trimmed.split_once(RANGE_SEPARATOR) else {
            return Err(RangeError::InvalidFormat(format!(
                "No range separator found (expected '{RANGE_SEPARATOR}'): {s}"
            )));
        };
        if end_str.contains(RANGE_SEPARATOR) {
            return Err(RangeError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: expected 1 in {s}"
            )));
        }

        let parse = |part: &str| {
            part.trim()
                .parse::<u16>()
                .map_err(|_| RangeError::InvalidFormat(part.trim().to_owned()))
        };

        Self::new(parse(start_str)?, parse(end_str)?)
    }
}

impl Serialize for YearRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for YearRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
