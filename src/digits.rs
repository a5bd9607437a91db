//! Digit normalization for form input.
//!
//! Users type birth dates with whatever keyboard layout is active, so a
//! single field can mix Persian, Arabic-Indic and ASCII digits.

use crate::consts::{ALT_DATE_SEPARATOR, ARABIC_INDIC_DIGITS, DATE_SEPARATOR, PERSIAN_DIGITS};

/// Digit value of `c` in the ASCII, Persian or Arabic-Indic tables.
pub fn to_ascii_digit(c: char) -> Option<u8> {
    if c.is_ascii_digit() {
        return Some(c as u8 - b'0');
    }
    PERSIAN_DIGITS
        .iter()
        .chain(ARABIC_INDIC_DIGITS.iter())
        .position(|&d| d == c)
        .and_then(|i| u8::try_from(i % 10).ok())
}

#[inline]
const fn is_separator(c: char) -> bool {
    c == DATE_SEPARATOR || c == ALT_DATE_SEPARATOR
}

/// Maps every digit to ASCII, keeps `/` and `-`, drops everything else.
pub fn normalize(input: &str) -> String {
    input
        .chars()
        .filter_map(|c| match to_ascii_digit(c) {
            Some(d) => Some(char::from(b'0' + d)),
            None if is_separator(c) => Some(c),
            None => None,
        })
        .collect()
}

/// Like [`normalize`], but separators are dropped as well.
pub fn digits_only(input: &str) -> String {
    input
        .chars()
        .filter_map(to_ascii_digit)
        .map(|d| char::from(b'0' + d))
        .collect()
}
