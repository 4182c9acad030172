//! Date type for deadline and fee calculations.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

use crate::error::{NotariumError, NotariumResult};

/// A calendar date with no time-of-day component.
///
/// This is a newtype wrapper around `chrono::NaiveDate` providing the
/// operations deadline arithmetic needs, and ensuring type safety at the
/// engine boundary.
///
/// Dates carry two textual forms: the canonical ISO form `YYYY-MM-DD`
/// (`Display`, [`Date::parse`]) used for equality and ordering, and the
/// user-facing display form `DD/MM/YYYY` ([`Date::format_display`],
/// [`Date::parse_display`]).
///
/// # Example
///
/// ```rust
/// use notarium_core::types::Date;
///
/// let date = Date::from_ymd(2025, 6, 15).unwrap();
/// assert_eq!(date.format_display(), "15/06/2025");
/// assert_eq!(Date::parse_display("15/06/2025"), Some(date));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `NotariumError::InvalidDate` if the date is invalid.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> NotariumResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| NotariumError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Creates a date from an ISO 8601 string (YYYY-MM-DD).
    ///
    /// # Errors
    ///
    /// Returns `NotariumError::InvalidDate` if the string is not a valid date.
    pub fn parse(s: &str) -> NotariumResult<Self> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|_| NotariumError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Parses the user-facing `DD/MM/YYYY` display form.
    ///
    /// All non-digit characters are stripped first, so `15/06/2025`,
    /// `15-06-2025` and `15062025` are equivalent. The payload must be
    /// exactly eight digits and the decomposed day/month/year must form a
    /// real calendar date (so `31/02/2025` is rejected). Anything else
    /// yields `None` — incomplete input is a suppressed state, not an error.
    #[must_use]
    pub fn parse_display(text: &str) -> Option<Self> {
        let digits: String = text.chars().filter(char::is_ascii_digit).collect();
        if digits.len() != 8 {
            return None;
        }
        let day: u32 = digits[0..2].parse().ok()?;
        let month: u32 = digits[2..4].parse().ok()?;
        let year: i32 = digits[4..8].parse().ok()?;
        NaiveDate::from_ymd_opt(year, month, day).map(Date)
    }

    /// Formats the date in the user-facing `DD/MM/YYYY` display form.
    #[must_use]
    pub fn format_display(&self) -> String {
        self.0.format("%d/%m/%Y").to_string()
    }

    /// Returns today's date.
    #[must_use]
    pub fn today() -> Self {
        Date(chrono::Local::now().date_naive())
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Checks if the year is a leap year.
    #[must_use]
    pub fn is_leap_year(&self) -> bool {
        self.0.leap_year()
    }

    /// Returns the number of days in the date's month.
    #[must_use]
    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year(), self.month())
    }

    /// Adds a number of days to the date.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Adds a number of months to the date with field-carry semantics.
    ///
    /// The month field is advanced directly; if the day-of-month does not
    /// exist in the target month, the excess days spill into the following
    /// month rather than clamping to month end. Jan 31 + 1 month is Mar 2 in
    /// a leap year and Mar 3 otherwise. Statutory deadline practice follows
    /// this carry rule, matching how the paper forms are counted.
    #[must_use]
    pub fn add_months_carry(&self, months: i32) -> Self {
        let total = self.year() * 12 + self.month() as i32 - 1 + months;
        let year = total.div_euclid(12);
        let month = (total.rem_euclid(12) + 1) as u32;
        Date(carry_ymd(year, month, self.day()))
    }

    /// Adds a number of years to the date with field-carry semantics.
    ///
    /// Feb 29 + 1 year lands on Mar 1 of the following (non-leap) year.
    #[must_use]
    pub fn add_years_carry(&self, years: i32) -> Self {
        Date(carry_ymd(self.year() + years, self.month(), self.day()))
    }

    /// Calculates the number of calendar days between two dates.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }

    /// Returns the day of week.
    #[must_use]
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Checks if the date is a weekend (Saturday or Sunday).
    #[must_use]
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl Add<i64> for Date {
    type Output = Self;

    /// Adds days to a date.
    fn add(self, days: i64) -> Self::Output {
        self.add_days(days)
    }
}

impl Sub<i64> for Date {
    type Output = Self;

    /// Subtracts days from a date.
    fn sub(self, days: i64) -> Self::Output {
        self.add_days(-days)
    }
}

impl Sub<Date> for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    fn sub(self, other: Date) -> Self::Output {
        other.days_between(&self)
    }
}

/// Normalizes a (year, month, day) triple whose day may overflow the month,
/// spilling the excess into the following month(s).
fn carry_ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    let mut year = year;
    let mut month = month;
    let mut day = day;
    loop {
        let dim = days_in_month(year, month);
        if day <= dim {
            break;
        }
        day -= dim;
        month += 1;
        if month > 12 {
            month = 1;
            year += 1;
        }
    }
    NaiveDate::from_ymd_opt(year, month, day).expect("carried date is always valid")
}

/// Helper function to get days in a month for a given year.
fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => panic!("Invalid month: {month}"),
    }
}

/// Helper function to check if a year is a leap year.
fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}
