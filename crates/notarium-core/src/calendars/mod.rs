//! Public-holiday calendars and day classification.
//!
//! This module provides:
//! - The [`Calendar`] trait: which dates are public holidays, and day
//!   classification under toggleable weekend/holiday exclusions
//! - [`VietnamCalendar`]: the production Vietnam holiday calendar
//! - [`WeekendOnlyCalendar`]: a holiday-free calendar for tests

mod vietnam;

pub use vietnam::VietnamCalendar;

use crate::types::{Date, DayFilter};

/// Trait for public-holiday calendars.
///
/// Calendars decide which dates are listed holidays; everything else
/// (weekend detection, working-day classification) is derived.
pub trait Calendar: Send + Sync {
    /// Returns the name of the calendar.
    fn name(&self) -> &'static str;

    /// Returns true if the date is a listed public holiday.
    fn is_holiday(&self, date: Date) -> bool;

    /// Returns true if the date counts as a working day under the filter.
    ///
    /// A date is excluded when `exclude_weekends` is set and it falls on a
    /// Saturday or Sunday, or when `exclude_holidays` is set and it is a
    /// listed holiday. With [`DayFilter::NONE`] every date is a working day.
    fn is_working_day(&self, date: Date, filter: DayFilter) -> bool {
        if filter.exclude_weekends && date.is_weekend() {
            return false;
        }
        if filter.exclude_holidays && self.is_holiday(date) {
            return false;
        }
        true
    }
}

/// A calendar with no listed holidays (weekends only).
///
/// Useful for testing and for counts where only weekends matter.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendOnlyCalendar;

impl Calendar for WeekendOnlyCalendar {
    fn name(&self) -> &'static str {
        "Weekend Only"
    }

    fn is_holiday(&self, _date: Date) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekend_only_calendar() {
        let cal = WeekendOnlyCalendar;

        // Wednesday Jan 1, 2025 is not a holiday here
        let jan1 = Date::from_ymd(2025, 1, 1).unwrap();
        assert!(!cal.is_holiday(jan1));
        assert!(cal.is_working_day(jan1, DayFilter::WORKING_DAYS));

        let saturday = Date::from_ymd(2025, 1, 4).unwrap();
        assert!(!cal.is_working_day(saturday, DayFilter::WORKING_DAYS));
        assert!(cal.is_working_day(saturday, DayFilter::NONE));
    }

    #[test]
    fn test_working_day_flag_independence() {
        let cal = VietnamCalendar::default();

        // Jan 1, 2025: a holiday on a Wednesday
        let holiday = Date::from_ymd(2025, 1, 1).unwrap();
        let weekends_only = DayFilter {
            exclude_weekends: true,
            exclude_holidays: false,
        };
        let holidays_only = DayFilter {
            exclude_weekends: false,
            exclude_holidays: true,
        };

        assert!(cal.is_working_day(holiday, weekends_only));
        assert!(!cal.is_working_day(holiday, holidays_only));
        assert!(!cal.is_working_day(holiday, DayFilter::WORKING_DAYS));
        assert!(cal.is_working_day(holiday, DayFilter::NONE));
    }
}
