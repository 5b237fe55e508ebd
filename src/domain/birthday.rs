//! Birthday value object and next-occurrence arithmetic.

use super::errors::ValidationError;
use super::field::Field;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static BIRTHDAY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(0[1-9]|[12]\d|3[01])\.(0[1-9]|1[0-2])\.\d{4}$")
        .expect("Failed to compile birthday regex")
});

/// A birthday in `DD.MM.YYYY` form.
///
/// The pattern bounds day to 01-31 and month to 01-12 but does not check that
/// the day exists in that month, so `31.04.1990` is accepted. Such dates, and
/// 29 February outside leap years, fall on the last day of the month when
/// computing the next occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday {
    raw: String,
    day: u32,
    month: u32,
}

impl Birthday {
    /// Create a new Birthday, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the date does not match
    /// `DD.MM.YYYY`.
    pub fn new(date: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = date.into();

        let (day, month) = match BIRTHDAY_REGEX.captures(&raw) {
            Some(caps) => {
                let day = caps[1].parse::<u32>();
                let month = caps[2].parse::<u32>();
                match (day, month) {
                    (Ok(day), Ok(month)) => (day, month),
                    _ => return Err(ValidationError::InvalidBirthday(raw)),
                }
            }
            None => return Err(ValidationError::InvalidBirthday(raw)),
        };

        Ok(Self { raw, day, month })
    }

    /// Parse an optional birthday. `None` is always valid and means "unset".
    pub fn parse_optional(date: Option<&str>) -> Result<Option<Self>, ValidationError> {
        date.map(Self::new).transpose()
    }

    /// Get the birthday as a string slice.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Day of month, 1-31.
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Month, 1-12.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Days from `today` to the next occurrence of this birthday, on or after
    /// `today`. Returns 0 when the birthday is today.
    ///
    /// Returns `None` only when the next occurrence falls outside chrono's
    /// representable date range.
    pub fn days_until(&self, today: NaiveDate) -> Option<i64> {
        let this_year = occurrence_in(today.year(), self.month, self.day)?;
        let next = if this_year >= today {
            this_year
        } else {
            occurrence_in(today.year() + 1, self.month, self.day)?
        };
        Some((next - today).num_days())
    }
}

/// The date a `day`/`month` birthday is celebrated in `year`, clamped to the
/// last day of the month.
fn occurrence_in(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    let last = last_day_of_month(year, month)?;
    NaiveDate::from_ymd_opt(year, month, day.min(last))
}

fn last_day_of_month(year: i32, month: u32) -> Option<u32> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
}

impl Field for Birthday {
    fn value(&self) -> &str {
        &self.raw
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
