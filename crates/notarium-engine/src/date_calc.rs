//! Deadline, difference, and working-day calculators.
//!
//! Each calculator is a plain input struct with a synchronous
//! [`recompute`](DeadlineInput::recompute). The UI layer mutates the input
//! on every keystroke and calls `recompute` for the fresh result; a missing
//! date suppresses the result (`None`) instead of raising an error, so a
//! half-filled form simply shows nothing.
//!
//! All date arithmetic runs against the shared Vietnam holiday calendar.

use log::debug;
use notarium_core::calendars::VietnamCalendar;
use notarium_core::deadline::{
    add_period, difference, range_statistics, DateDifference, RangeStatistics,
};
use notarium_core::types::{Date, DateField, DayFilter, Period};
use serde::Serialize;

/// Inputs of the deadline calculator: a start date plus an offset period.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeadlineInput {
    /// Start date field; an empty field suppresses the result.
    pub start: DateField,
    /// Offset to add (years, months, days; may be negative).
    pub period: Period,
    /// When set, the day component walks working days only.
    pub skip_non_working: bool,
    /// Which days count as non-working for the walk.
    pub filter: DayFilter,
}

/// Resolved deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeadlineResult {
    /// Echo of the start date the result was computed from.
    pub start: Date,
    /// The resulting deadline date.
    pub end: Date,
}

impl DeadlineInput {
    /// Computes the deadline, or `None` when no start date is set.
    #[must_use]
    pub fn recompute(&self) -> Option<DeadlineResult> {
        let start = self.start.date()?;
        let end = add_period(
            VietnamCalendar::global(),
            start,
            self.period,
            self.skip_non_working,
            self.filter,
        );
        debug!("deadline {start} + {:?} -> {end}", self.period);
        Some(DeadlineResult { start, end })
    }
}

/// Inputs of the date-difference calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct DifferenceInput {
    /// Earlier date field.
    pub from: DateField,
    /// Later date field.
    pub to: DateField,
    /// Day-count exclusion flags.
    pub filter: DayFilter,
}

impl DifferenceInput {
    /// Computes the difference, or `None` when either date is missing.
    #[must_use]
    pub fn recompute(&self) -> Option<DateDifference> {
        let from = self.from.date()?;
        let to = self.to.date()?;
        Some(difference(VietnamCalendar::global(), from, to, self.filter))
    }
}

/// Inputs of the working-day range calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkingDaysInput {
    /// First day of the range, inclusive.
    pub from: DateField,
    /// Last day of the range, inclusive.
    pub to: DateField,
}

impl WorkingDaysInput {
    /// Classifies every day in the range, or `None` when a date is missing.
    #[must_use]
    pub fn recompute(&self) -> Option<RangeStatistics> {
        let from = self.from.date()?;
        let to = self.to.date()?;
        Some(range_statistics(VietnamCalendar::global(), from, to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(iso: &str) -> DateField {
        let mut f = DateField::new();
        f.set_from_iso(iso);
        f
    }

    #[test]
    fn test_deadline_requires_start_date() {
        let input = DeadlineInput {
            period: Period::days(30),
            ..Default::default()
        };
        assert!(input.recompute().is_none());
    }

    #[test]
    fn test_deadline_calendar_days() {
        let input = DeadlineInput {
            start: field("2025-06-02"),
            period: Period::days(30),
            skip_non_working: false,
            filter: DayFilter::WORKING_DAYS,
        };
        let result = input.recompute().unwrap();
        assert_eq!(result.end, Date::from_ymd(2025, 7, 2).unwrap());
    }

    #[test]
    fn test_deadline_working_days_skip_weekend() {
        // Friday + 1 working day lands on Monday
        let input = DeadlineInput {
            start: field("2025-06-06"),
            period: Period::days(1),
            skip_non_working: true,
            filter: DayFilter::WORKING_DAYS,
        };
        let result = input.recompute().unwrap();
        assert_eq!(result.end, Date::from_ymd(2025, 6, 9).unwrap());
    }

    #[test]
    fn test_difference_requires_both_dates() {
        let input = DifferenceInput {
            from: field("2025-01-01"),
            ..Default::default()
        };
        assert!(input.recompute().is_none());
    }

    #[test]
    fn test_difference_same_day() {
        let input = DifferenceInput {
            from: field("2024-01-01"),
            to: field("2024-01-01"),
            filter: DayFilter::NONE,
        };
        let diff = input.recompute().unwrap();
        assert_eq!(diff.day_count, 0);
        assert_eq!(diff.years, 0);
        assert_eq!(diff.months, 0);
    }

    #[test]
    fn test_working_days_new_year_week() {
        let input = WorkingDaysInput {
            from: field("2025-01-01"),
            to: field("2025-01-07"),
        };
        let stats = input.recompute().unwrap();
        assert_eq!(stats.total, 7);
        assert_eq!(stats.holiday, 1);
        assert_eq!(stats.weekend, 2);
        assert_eq!(stats.working, 4);
    }
}
