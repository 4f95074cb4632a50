mod consts;
mod prelude;
mod types;
mod validator;

pub use consts::*;
pub use types::{Day, Month, Weekday, Year, day_of_week, days_in_month, is_leap_year};
pub use validator::{
    DateInfo, MessageKind, ValidationResult, validate_components, validate_free_text,
};

use crate::prelude::*;
use std::str::FromStr;
use types::{civil_from_days, days_from_civil};

/// A fully validated proleptic Gregorian calendar date.
/// Construction goes through range-checked component types and a day-number
/// round trip, so an existing value always denotes a real calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct CalendarDate {
    year: types::Year,
    month: types::Month,
    day: types::Day,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Input was empty or whitespace only.
    #[error("Empty date string")]
    EmptyInput,
    /// Text does not match any accepted date format.
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),
    /// Year outside 1-9999.
    #[error("Invalid year: {0} (must be 1-9999)")]
    YearOutOfRange(u16),
    /// Month outside 1-12.
    #[error("Invalid month: {0} (must be 1-12)")]
    MonthOutOfRange(u8),
    /// Day outside the length of the governing month.
    #[error("Invalid day {day} for {year}-{month:02}")]
    DayOutOfRange { month: u8, day: u8, year: u16 },
    /// Components are individually in range but do not survive day-number
    /// reconstruction.
    #[error("Invalid date combination: {year:04}-{month:02}-{day:02}")]
    InvalidCombination { month: u8, day: u8, year: u16 },
}

impl CalendarDate {
    /// Creates a date from already-validated components, cross-checking the
    /// triple by rebuilding it from its day number.
    ///
    /// The component types make each field valid on its own; the round trip
    /// guards against a triple that a calendar conversion would silently
    /// normalize into a different day.
    ///
    /// # Errors
    /// Returns `DateError::InvalidCombination` if reconstruction disagrees
    /// with the inputs.
    pub fn new(year: types::Year, month: types::Month, day: types::Day) -> Result<Self, DateError> {
        let number = days_from_civil(year.get(), month.get(), day.get());
        let (ry, rm, rd) = civil_from_days(number);
        if ry != i64::from(year.get()) || rm != month.get() || rd != day.get() {
            return Err(DateError::InvalidCombination {
                month: month.get(),
                day: day.get(),
                year: year.get(),
            });
        }
        Ok(Self { year, month, day })
    }

    /// Creates a date from raw numeric components, validating each.
    ///
    /// # Errors
    /// Returns the first component error, or `InvalidCombination` if the
    /// round-trip check fails.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        let year_t = types::Year::new(year)?;
        let month_t = types::Month::new(month)?;
        let day_t = types::Day::new(day, year, month)?;
        Self::new(year_t, month_t, day_t)
    }

    /// Returns the year component
    pub const fn year(&self) -> types::Year {
        self.year
    }

    /// Returns the month component
    pub const fn month(&self) -> types::Month {
        self.month
    }

    /// Returns the day component
    pub const fn day(&self) -> types::Day {
        self.day
    }

    /// Returns the date as plain (year, month, day) numbers
    pub const fn to_ymd(&self) -> (u16, u8, u8) {
        (self.year.get(), self.month.get(), self.day.get())
    }

    /// Day of the week for this date
    pub const fn weekday(&self) -> types::Weekday {
        types::day_of_week(self.year.get(), self.month.get(), self.day.get())
    }

    /// Whether the governing year is a leap year
    pub const fn is_leap_year(&self) -> bool {
        self.year.is_leap()
    }

    /// Number of days in the governing month
    pub const fn days_in_month(&self) -> u8 {
        types::days_in_month(self.year.get(), self.month.get())
    }

    /// English full name of the governing month
    pub const fn month_name(&self) -> &'static str {
        self.month.name()
    }
}

/// Splits free-form date text into raw (day, month, year) fields.
///
/// Accepted shapes, tried in order:
/// 1. `D/M/YYYY` — the slash form is ambiguous between day-first and
///    month-first; day-first is the convention here, so `03/04/2024`
///    reads as 3 April 2024.
/// 2. `YYYY-M-D`
/// 3. `D-M-YYYY`
///
/// Only checks shape (digit runs of the right lengths); range validation
/// is the caller's job.
pub(crate) fn split_date_text(s: &str) -> Option<(&str, &str, &str)> {
    fn is_digits(field: &str, min: usize, max: usize) -> bool {
        (min..=max).contains(&field.len()) && field.bytes().all(|b| b.is_ascii_digit())
    }

    let slash: Vec<&str> = s.split(DAY_FIRST_SEPARATOR).collect();
    if let [d, m, y] = slash[..] {
        if is_digits(d, 1, 2) && is_digits(m, 1, 2) && is_digits(y, 4, 4) {
            return Some((d, m, y));
        }
    }

    let hyphen: Vec<&str> = s.split(DATE_SEPARATOR).collect();
    if let [a, b, c] = hyphen[..] {
        if is_digits(a, 4, 4) && is_digits(b, 1, 2) && is_digits(c, 1, 2) {
            return Some((c, b, a));
        }
        if is_digits(a, 1, 2) && is_digits(b, 1, 2) && is_digits(c, 4, 4) {
            return Some((a, b, c));
        }
    }

    None
}

impl FromStr for CalendarDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let (day, month, year) =
            split_date_text(trimmed).ok_or_else(|| DateError::InvalidFormat(trimmed.to_owned()))?;

        // Fields are short digit runs at this point, so the parses only
        // fail on overflow (a 5+ digit year never gets here).
        let year = year
            .parse::<u16>()
            .map_err(|_| DateError::InvalidFormat(year.to_owned()))?;
        let month = month
            .parse::<u8>()
            .map_err(|_| DateError::InvalidFormat(month.to_owned()))?;
        let day = day
            .parse::<u8>()
            .map_err(|_| DateError::InvalidFormat(day.to_owned()))?;

        Self::from_ymd(year, month, day)
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
