//! Serde adapter that carries a [`JalaliDate`] over the wire as an ISO
//! Gregorian `YYYY-MM-DD` string, the format the backend stores birth
//! dates in.
//!
//! ```
//! use jalali_date::JalaliDate;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct ProfileUpdate {
//!     #[serde(with = "jalali_date::iso_gregorian")]
//!     birth_date: JalaliDate,
//! }
//! ```

use serde::{Deserialize, Deserializer, Serializer, de::Error as _, ser::Error as _};

use crate::JalaliDate;

pub fn serialize<S>(date: &JalaliDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let iso = date.to_iso_string().map_err(S::Error::custom)?;
    serializer.serialize_str(&iso)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<JalaliDate, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    JalaliDate::from_iso_str(&s).map_err(D::Error::custom)
}

/// Same adapter for an optional birth date; `null` maps to `None`.
pub mod option {
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    use crate::JalaliDate;

    pub fn serialize<S>(date: &Option<JalaliDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(date) => super::serialize(date, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<JalaliDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|s| JalaliDate::from_iso_str(&s).map_err(D::Error::custom))
            .transpose()
    }
}
