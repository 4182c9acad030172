//! Deadline and duration arithmetic.
//!
//! Three operations, all pure and deterministic:
//!
//! - [`add_period`]: a start date plus a (years, months, days) offset,
//!   optionally consuming the day component in working days only
//! - [`difference`]: day count plus a calendar (years, months) breakdown
//!   between two dates
//! - [`range_statistics`]: working/weekend/holiday tallies over a date range
//!
//! Reversed ranges (`end < start`) produce all-zero results rather than
//! errors: the calculators treat them as incomplete input.

use serde::{Deserialize, Serialize};

use crate::calendars::Calendar;
use crate::types::{Date, DayFilter, Period};

/// Adds a period to a base date.
///
/// Components apply in the fixed order years, months, days. Years and months
/// use field-carry addition (see [`Date::add_months_carry`]); the day
/// component is then either added directly (`skip_non_working == false`) or
/// consumed one working day at a time.
///
/// In skip mode the walk moves one calendar day per step and decrements the
/// remaining count only when the landed-on day satisfies
/// [`Calendar::is_working_day`] under `filter`. The start date itself is
/// never counted. A negative day component walks backwards under the same
/// rule. The walk is O(|days| + skipped); the holiday set is irregular, so
/// there is no closed form.
pub fn add_period<C: Calendar>(
    cal: &C,
    base: Date,
    period: Period,
    skip_non_working: bool,
    filter: DayFilter,
) -> Date {
    let mut result = base;

    if period.years != 0 {
        result = result.add_years_carry(period.years);
    }
    if period.months != 0 {
        result = result.add_months_carry(period.months);
    }

    if period.days == 0 {
        return result;
    }

    if !skip_non_working {
        return result.add_days(i64::from(period.days));
    }

    let direction: i64 = if period.days >= 0 { 1 } else { -1 };
    let mut remaining = period.days.abs();
    while remaining > 0 {
        result = result.add_days(direction);
        if cal.is_working_day(result, filter) {
            remaining -= 1;
        }
    }
    result
}

/// The distance between two dates: a day count and a calendar
/// (years, months) breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateDifference {
    /// Elapsed whole days when no exclusion flag is set (same day is 0);
    /// otherwise the inclusive count of days satisfying the filter.
    pub day_count: i64,
    /// Whole calendar years, always flag-independent.
    pub years: i32,
    /// Remaining whole calendar months (0-11), always flag-independent.
    pub months: i32,
}

/// Computes the difference between two dates.
///
/// Returns the zero difference when `end < start`. The `years`/`months`
/// breakdown is calendar-based regardless of `filter`: month borrows a year
/// when negative, and an `end` day-of-month before the `start` day-of-month
/// costs one more month. The day-level remainder is not reported.
pub fn difference<C: Calendar>(
    cal: &C,
    start: Date,
    end: Date,
    filter: DayFilter,
) -> DateDifference {
    if end < start {
        return DateDifference::default();
    }

    let day_count = if filter.is_none() {
        start.days_between(&end)
    } else {
        let mut count = 0;
        let mut current = start;
        while current <= end {
            if cal.is_working_day(current, filter) {
                count += 1;
            }
            current = current.add_days(1);
        }
        count
    };

    let mut years = end.year() - start.year();
    let mut months = end.month() as i32 - start.month() as i32;
    if months < 0 {
        years -= 1;
        months += 12;
    }
    if end.day() < start.day() {
        months -= 1;
        if months < 0 {
            years -= 1;
            months += 12;
        }
    }

    DateDifference {
        day_count,
        years,
        months,
    }
}

/// Day-class tallies over an inclusive date range.
///
/// Invariant: `total == working + weekend + holiday`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RangeStatistics {
    /// Inclusive day count of the range.
    pub total: u32,
    /// Days that are neither weekend nor holiday.
    pub working: u32,
    /// Saturdays and Sundays that are not holidays.
    pub weekend: u32,
    /// Listed holidays, including those falling on a weekend.
    pub holiday: u32,
}

/// Scans `[start, end]` inclusive and classifies each day into exactly one
/// bucket, priority holiday > weekend > working.
///
/// Returns all zeros when `end < start`.
pub fn range_statistics<C: Calendar>(cal: &C, start: Date, end: Date) -> RangeStatistics {
    if end < start {
        return RangeStatistics::default();
    }

    let mut stats = RangeStatistics::default();
    let mut current = start;
    while current <= end {
        stats.total += 1;
        if cal.is_holiday(current) {
            stats.holiday += 1;
        } else if current.is_weekend() {
            stats.weekend += 1;
        } else {
            stats.working += 1;
        }
        current = current.add_days(1);
    }
    stats
}
