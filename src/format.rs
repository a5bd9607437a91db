//! Display renderings for RTL and LTR contexts.

use serde::{Deserialize, Serialize};

use crate::{JalaliDate, MONTH_NAMES, Month, PERSIAN_DIGITS};

/// Digit script used when rendering a date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DigitStyle {
    #[default]
    Ascii,
    Persian,
}

impl DigitStyle {
    fn apply(self, ascii: String) -> String {
        match self {
            Self::Ascii => ascii,
            Self::Persian => to_persian_numerals(&ascii),
        }
    }
}

/// Replaces ASCII digits with Persian-script digits; other characters pass through.
pub fn to_persian_numerals(input: &str) -> String {
    input
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(d) if c.is_ascii_digit() => PERSIAN_DIGITS[d as usize],
            _ => c,
        })
        .collect()
}

/// `YYYY/MM/DD` in the requested script.
pub fn to_display_string(date: &JalaliDate, style: DigitStyle) -> String {
    style.apply(date.to_string())
}

/// Persian name of a month, e.g. `فروردین` for 1
pub fn month_name(month: Month) -> &'static str {
    MONTH_NAMES[usize::from(month.get())]
}

/// Long form `"<day> <month name> <year>"`, e.g. `۱۱ فروردین ۱۳۷۰`.
pub fn to_long_string(date: &JalaliDate, style: DigitStyle) -> String {
    let long = format!(
        "{} {} {}",
        date.day(),
        month_name(date.month_typed()),
        date.year()
    );
    style.apply(long)
}

impl JalaliDate {
    /// Shorthand for [`to_display_string`]
    pub fn format(&self, style: DigitStyle) -> String {
        to_display_string(self, style)
    }

    /// Persian name of this date's month
    pub fn month_name(&self) -> &'static str {
        month_name(self.month_typed())
    }
}
