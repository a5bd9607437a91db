//! Password strength meter for the registration and reset-password forms.

use serde::Serialize;

use crate::{PASSWORD_MIN_LENGTH, PASSWORD_SYMBOLS, digits::to_ascii_digit, prelude::*};

/// Strength bucket derived from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strength {
    #[display(fmt = "very weak")]
    VeryWeak,
    #[display(fmt = "weak")]
    Weak,
    #[display(fmt = "medium")]
    Medium,
    #[display(fmt = "strong")]
    Strong,
    #[display(fmt = "very strong")]
    VeryStrong,
}

impl Strength {
    pub const fn from_score(score: u8) -> Self {
        match score {
            0 | 1 => Self::VeryWeak,
            2 => Self::Weak,
            3 => Self::Medium,
            4 => Self::Strong,
            _ => Self::VeryStrong,
        }
    }

    /// Persian label shown next to the meter
    pub const fn message(self) -> &'static str {
        match self {
            Self::VeryWeak => "خیلی ضعیف",
            Self::Weak => "ضعیف",
            Self::Medium => "متوسط",
            Self::Strong => "قوی",
            Self::VeryStrong => "خیلی قوی",
        }
    }
}

/// Score out of 5 with its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PasswordStrength {
    pub score:   u8,
    pub message: &'static str,
}

impl PasswordStrength {
    pub const MAX_SCORE: u8 = 5;

    pub const fn strength(&self) -> Strength {
        Strength::from_score(self.score)
    }
}

/// One point each for: length, uppercase, lowercase, digit, symbol.
pub fn score(password: &str) -> PasswordStrength {
    let criteria = [
        password.chars().count() >= PASSWORD_MIN_LENGTH,
        password.chars().any(char::is_uppercase),
        password.chars().any(char::is_lowercase),
        password.chars().any(|c| to_ascii_digit(c).is_some()),
        password.chars().any(|c| PASSWORD_SYMBOLS.contains(c)),
    ];
    let score = criteria.iter().fold(0u8, |acc, &met| acc + u8::from(met));

    PasswordStrength {
        score,
        message: Strength::from_score(score).message(),
    }
}
