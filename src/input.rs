//! Raw `YYYYMMDD` input as typed into a birth-date field.

use serde::{Deserialize, Serialize};

use crate::{
    DATE_DIGITS, DATE_SEPARATOR, MONTH_DIGITS, ValidationError, YEAR_DIGITS, digits::digits_only,
};

/// Year, month and day split out of exactly eight digits.
/// No range checks have been applied yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawDate {
    pub year:  u16,
    pub month: u8,
    pub day:   u8,
}

impl RawDate {
    /// Normalizes `input` and splits it as `YYYYMMDD`.
    ///
    /// # Errors
    /// Returns `ValidationError::IncompleteInput` for fewer than eight digits
    /// and `ValidationError::TooManyDigits` for more, once separators and
    /// non-digits are stripped.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let digits = digits_only(input);
        match digits.len() {
            DATE_DIGITS => {}
            count if count < DATE_DIGITS => {
                return Err(ValidationError::IncompleteInput { digits: count });
            }
            count => return Err(ValidationError::TooManyDigits { digits: count }),
        }

        let (year, rest) = digits.split_at(YEAR_DIGITS);
        let (month, day) = rest.split_at(MONTH_DIGITS);
        let incomplete = || ValidationError::IncompleteInput {
            digits: DATE_DIGITS,
        };

        Ok(Self {
            year:  year.parse().map_err(|_| incomplete())?,
            month: month.parse().map_err(|_| incomplete())?,
            day:   day.parse().map_err(|_| incomplete())?,
        })
    }

    /// `YYYY/MM/DD` with ASCII digits
    pub fn to_display_string(&self) -> String {
        format!(
            "{:04}{sep}{:02}{sep}{:02}",
            self.year,
            self.month,
            self.day,
            sep = DATE_SEPARATOR
        )
    }
}

/// Renders a partially typed date with separators inserted as the digit
/// groups fill up, e.g. `13701` becomes `1370/1`. Extra digits past eight
/// are dropped.
pub fn format_partial(input: &str) -> String {
    let digits: String = digits_only(input).chars().take(DATE_DIGITS).collect();
    let mut out = String::with_capacity(DATE_DIGITS + 2);
    for (i, c) in digits.chars().enumerate() {
        if i == YEAR_DIGITS || i == YEAR_DIGITS + MONTH_DIGITS {
            out.push(DATE_SEPARATOR);
        }
        out.push(c);
    }
    out
}
