//! Birth-date validation for a `YYYYMMDD` form field.
//!
//! Rules run in a fixed order and the first failure wins: digit count,
//! month, day, then the plausible-year policy.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{
    DAYS_IN_MONTH, JalaliDate, MAX_MONTH, MIN_DAY, RawDate, YearRange, days_in_month,
};

/// Why a typed date was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Fewer than eight digits so far. Forms keep quiet about this one
    /// while the user is still typing.
    #[error("date must be 8 digits, found {digits}")]
    IncompleteInput { digits: usize },

    /// More than eight digits. Shown to the user like the other failures.
    #[error("date must be 8 digits, found {digits}")]
    TooManyDigits { digits: usize },

    #[error("invalid month: {0}")]
    InvalidMonth(u8),

    #[error("invalid day {day} for month {year}/{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },

    #[error("year {year} out of range {range}")]
    YearOutOfRange { year: u16, range: YearRange },
}

impl ValidationError {
    /// Field-level hint shown under the input
    pub const fn message(&self) -> &'static str {
        match self {
            Self::IncompleteInput { .. } | Self::TooManyDigits { .. } => "تاریخ باید ۸ رقم باشد",
            Self::InvalidMonth(_) => "ماه نامعتبر است",
            Self::InvalidDay { .. } => "روز نامعتبر است",
            Self::YearOutOfRange { .. } => "سال خارج از محدوده مجاز است",
        }
    }

    pub const fn is_incomplete(&self) -> bool {
        matches!(self, Self::IncompleteInput { .. })
    }
}

/// Length of Esfand as seen by the validator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Month12Rule {
    /// Esfand always has 29 days, as the registration and profile forms
    /// have always enforced.
    #[default]
    AlwaysTwentyNine,
    /// Esfand has 30 days in leap years.
    LeapAware,
}

/// Validator settings, loadable from any serde format.
///
/// ```json
/// { "birth_years": "1300/1420", "month12_rule": "leap_aware" }
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    pub birth_years:  YearRange,
    pub month12_rule: Month12Rule,
}

/// Result of validating one keystroke's worth of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validation {
    raw:     Option<RawDate>,
    outcome: Result<JalaliDate, ValidationError>,
}

impl Validation {
    pub const fn is_valid(&self) -> bool {
        self.outcome.is_ok()
    }

    /// True while fewer than eight digits have been typed
    pub const fn is_incomplete(&self) -> bool {
        matches!(self.outcome, Err(ValidationError::IncompleteInput { .. }))
    }

    /// The validated date, if any
    pub const fn date(&self) -> Option<JalaliDate> {
        match self.outcome {
            Ok(date) => Some(date),
            Err(_) => None,
        }
    }

    pub const fn reason(&self) -> Option<ValidationError> {
        match self.outcome {
            Ok(_) => None,
            Err(reason) => Some(reason),
        }
    }

    /// Hint to render under the field. `None` for valid or still-incomplete input.
    pub fn hint(&self) -> Option<&'static str> {
        self.reason()
            .filter(|reason| !reason.is_incomplete())
            .map(|reason| reason.message())
    }

    /// The digits split as year/month/day, present once eight digits were typed
    pub const fn raw(&self) -> Option<RawDate> {
        self.raw
    }

    pub fn year(&self) -> Option<u16> {
        self.raw.map(|raw| raw.year)
    }

    pub fn month(&self) -> Option<u8> {
        self.raw.map(|raw| raw.month)
    }

    pub fn day(&self) -> Option<u8> {
        self.raw.map(|raw| raw.day)
    }

    pub const fn outcome(&self) -> &Result<JalaliDate, ValidationError> {
        &self.outcome
    }

    pub const fn into_result(self) -> Result<JalaliDate, ValidationError> {
        self.outcome
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Validator {
    config: ValidatorConfig,
}

impl Validator {
    pub const fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validates raw field input. Never fails: the outcome carries the reason.
    pub fn validate(&self, input: &str) -> Validation {
        let raw = match RawDate::parse(input) {
            Ok(raw) => raw,
            Err(reason) => {
                trace!(%reason, "birth date input not eight digits");
                return Validation {
                    raw:     None,
                    outcome: Err(reason),
                };
            }
        };

        let outcome = self.check(raw);
        match &outcome {
            Ok(date) => debug!(%date, "birth date accepted"),
            Err(reason) => debug!(%reason, "birth date rejected"),
        }

        Validation {
            raw: Some(raw),
            outcome,
        }
    }

    fn check(&self, raw: RawDate) -> Result<JalaliDate, ValidationError> {
        let RawDate { year, month, day } = raw;
        let invalid_day = ValidationError::InvalidDay { year, month, day };

        if !(1..=MAX_MONTH).contains(&month) {
            return Err(ValidationError::InvalidMonth(month));
        }

        if !(MIN_DAY..=self.max_day(year, month)).contains(&day) {
            return Err(invalid_day);
        }

        let range = self.config.birth_years;
        if !range.contains(year) {
            return Err(ValidationError::YearOutOfRange { year, range });
        }

        JalaliDate::new(year, month, day).map_err(|_| invalid_day)
    }

    const fn max_day(&self, year: u16, month: u8) -> u8 {
        match self.config.month12_rule {
            Month12Rule::AlwaysTwentyNine => DAYS_IN_MONTH[month as usize],
            Month12Rule::LeapAware => days_in_month(year, month),
        }
    }
}

/// Validates with the default birth-date policy.
pub fn validate_birth_date(input: &str) -> Validation {
    Validator::default().validate(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::jd;

    #[test]
    fn test_valid_date() {
        let v = validate_birth_date("13700101");
        assert!(v.is_valid());
        assert_eq!(v.year(), Some(1370));
        assert_eq!(v.month(), Some(1));
        assert_eq!(v.day(), Some(1));
        assert_eq!(v.date(), Some(jd(1370, 1, 1)));
        assert_eq!(v.reason(), None);
        assert_eq!(v.hint(), None);
    }

    #[test]
    fn test_boundary_cases() {
        struct TestCase {
            input:  &'static str,
            reason: Option<ValidationError>,
        }

        let cases = [
            TestCase {
                input:  "13700101",
                reason: None,
            },
            TestCase {
                input:  "13701301",
                reason: Some(ValidationError::InvalidMonth(13)),
            },
            TestCase {
                input:  "13700001",
                reason: Some(ValidationError::InvalidMonth(0)),
            },
            TestCase {
                input:  "13700132",
                reason: Some(ValidationError::InvalidDay {
                    year:  1370,
                    month: 1,
                    day:   32,
                }),
            },
            TestCase {
                input:  "13700100",
                reason: Some(ValidationError::InvalidDay {
                    year:  1370,
                    month: 1,
                    day:   0,
                }),
            },
            TestCase {
                input:  "13700731",
                reason: Some(ValidationError::InvalidDay {
                    year:  1370,
                    month: 7,
                    day:   31,
                }),
            },
            TestCase {
                input:  "1370011",
                reason: Some(ValidationError::IncompleteInput { digits: 7 }),
            },
            TestCase {
                input:  "12991010",
                reason: Some(ValidationError::YearOutOfRange {
                    year:  1299,
                    range: YearRange::default(),
                }),
            },
            TestCase {
                input:  "14210101",
                reason: Some(ValidationError::YearOutOfRange {
                    year:  1421,
                    range: YearRange::default(),
                }),
            },
            TestCase {
                input:  "14201229",
                reason: None,
            },
        ];

        for case in &cases {
            let v = validate_birth_date(case.input);
            assert_eq!(v.reason(), case.reason, "input {:?}", case.input);
            assert_eq!(v.is_valid(), case.reason.is_none(), "input {:?}", case.input);
        }
    }

    #[test]
    fn test_month_checked_before_day_and_year() {
        // Month 13 and year 1299 are both wrong; month wins
        let v = validate_birth_date("12991332");
        assert_eq!(v.reason(), Some(ValidationError::InvalidMonth(13)));

        // Day 32 and year 1299 are both wrong; day wins
        let v = validate_birth_date("12990132");
        assert!(matches!(v.reason(), Some(ValidationError::InvalidDay { .. })));
    }

    #[test]
    fn test_incomplete_input_has_no_hint() {
        let v = validate_birth_date("13701");
        assert!(v.is_incomplete());
        assert!(!v.is_valid());
        assert_eq!(v.hint(), None);
        assert_eq!(v.year(), None);

        let v = validate_birth_date("13701301");
        assert_eq!(v.hint(), Some("ماه نامعتبر است"));
        assert_eq!(v.month(), Some(13));
    }

    #[test]
    fn test_too_many_digits_shows_hint() {
        let v = validate_birth_date("137001011");
        assert_eq!(v.reason(), Some(ValidationError::TooManyDigits { digits: 9 }));
        assert!(!v.is_incomplete());
        assert!(!v.is_valid());
        assert_eq!(v.hint(), Some("تاریخ باید ۸ رقم باشد"));
        assert_eq!(v.raw(), None);
    }

    #[test]
    fn test_typing_sequence() {
        for partial in ["1", "13", "137", "1370", "13701", "137010", "1370101"] {
            let v = validate_birth_date(partial);
            assert!(v.is_incomplete(), "{partial} should be incomplete");
        }

        let v = validate_birth_date("13701011");
        assert!(v.is_valid());
        assert_eq!(v.year(), Some(1370));
        assert_eq!(v.month(), Some(10));
        assert_eq!(v.day(), Some(11));
    }

    #[test]
    fn test_persian_digit_input() {
        let v = validate_birth_date("۱۳۷۰/۰۱/۱۱");
        assert_eq!(v.date(), Some(jd(1370, 1, 11)));
    }

    #[test]
    fn test_esfand_rules() {
        // 1403 is a leap year
        let v = validate_birth_date("14031230");
        assert_eq!(
            v.reason(),
            Some(ValidationError::InvalidDay {
                year:  1403,
                month: 12,
                day:   30,
            })
        );

        let leap_aware = Validator::new(ValidatorConfig {
            month12_rule: Month12Rule::LeapAware,
            ..ValidatorConfig::default()
        });
        assert_eq!(leap_aware.validate("14031230").date(), Some(jd(1403, 12, 30)));
        assert!(matches!(
            leap_aware.validate("14041230").reason(),
            Some(ValidationError::InvalidDay { .. })
        ));
        assert!(leap_aware.validate("14041229").is_valid());
    }

    #[test]
    fn test_custom_year_range() {
        let validator = Validator::new(ValidatorConfig {
            birth_years: YearRange::new(1380, 1390).unwrap(),
            ..ValidatorConfig::default()
        });
        assert!(validator.validate("13850505").is_valid());
        assert!(matches!(
            validator.validate("13700101").reason(),
            Some(ValidationError::YearOutOfRange { year: 1370, .. })
        ));
    }

    #[test]
    fn test_year_zero_is_out_of_range() {
        let v = validate_birth_date("00000101");
        assert!(matches!(
            v.reason(),
            Some(ValidationError::YearOutOfRange { year: 0, .. })
        ));
    }

    #[test]
    fn test_config_deserialize() {
        let config: ValidatorConfig =
            serde_json::from_str(r#"{ "birth_years": "1350/1400", "month12_rule": "leap_aware" }"#)
                .unwrap();
        assert_eq!(config.birth_years, YearRange::new(1350, 1400).unwrap());
        assert_eq!(config.month12_rule, Month12Rule::LeapAware);

        let config: ValidatorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ValidatorConfig::default());

        assert!(serde_json::from_str::<ValidatorConfig>(r#"{ "birth_years": "1400/1300" }"#).is_err());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ValidationError::InvalidMonth(13).to_string(),
            "invalid month: 13"
        );
        assert_eq!(
            ValidationError::YearOutOfRange {
                year:  1299,
                range: YearRange::default(),
            }
            .to_string(),
            "year 1299 out of range 1300/1420"
        );
    }
}
