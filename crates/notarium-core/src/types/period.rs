//! Period offsets and working-day filters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A signed (years, months, days) offset applied to a date.
///
/// Components are applied in the fixed order years, then months, then days;
/// see [`crate::deadline::add_period`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Period {
    /// Whole years to add.
    pub years: i32,
    /// Whole months to add.
    pub months: i32,
    /// Days to add.
    pub days: i32,
}

impl Period {
    /// Creates a period from explicit components.
    #[must_use]
    pub fn new(years: i32, months: i32, days: i32) -> Self {
        Self {
            years,
            months,
            days,
        }
    }

    /// A day-only period.
    #[must_use]
    pub fn days(days: i32) -> Self {
        Self::new(0, 0, days)
    }

    /// A month-only period.
    #[must_use]
    pub fn months(months: i32) -> Self {
        Self::new(0, months, 0)
    }

    /// A year-only period.
    #[must_use]
    pub fn years(years: i32) -> Self {
        Self::new(years, 0, 0)
    }

    /// Returns true if all components are zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// The document-deadline presets offered by the office forms:
    /// 30/45/60/90 days, 6 months, 1/2/3 years.
    pub const PRESETS: [Period; 8] = [
        Period {
            years: 0,
            months: 0,
            days: 30,
        },
        Period {
            years: 0,
            months: 0,
            days: 45,
        },
        Period {
            years: 0,
            months: 0,
            days: 60,
        },
        Period {
            years: 0,
            months: 0,
            days: 90,
        },
        Period {
            years: 0,
            months: 6,
            days: 0,
        },
        Period {
            years: 1,
            months: 0,
            days: 0,
        },
        Period {
            years: 2,
            months: 0,
            days: 0,
        },
        Period {
            years: 3,
            months: 0,
            days: 0,
        },
    ];
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}y{}m{}d", self.years, self.months, self.days)
    }
}

/// Which day classes to exclude when counting or skipping working days.
///
/// Both flags are independently toggleable; the default excludes both
/// weekends and holidays, which is what the deadline and duration
/// calculators use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayFilter {
    /// Exclude Saturdays and Sundays.
    pub exclude_weekends: bool,
    /// Exclude listed public holidays.
    pub exclude_holidays: bool,
}

impl DayFilter {
    /// Excludes nothing; every calendar day counts.
    pub const NONE: DayFilter = DayFilter {
        exclude_weekends: false,
        exclude_holidays: false,
    };

    /// Excludes weekends and holidays (working days only).
    pub const WORKING_DAYS: DayFilter = DayFilter {
        exclude_weekends: true,
        exclude_holidays: true,
    };

    /// Returns true if neither exclusion is enabled.
    #[must_use]
    pub fn is_none(&self) -> bool {
        !self.exclude_weekends && !self.exclude_holidays
    }
}

impl Default for DayFilter {
    fn default() -> Self {
        Self::WORKING_DAYS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_constructors() {
        assert_eq!(Period::days(30), Period::new(0, 0, 30));
        assert_eq!(Period::months(6), Period::new(0, 6, 0));
        assert_eq!(Period::years(2), Period::new(2, 0, 0));
        assert!(Period::default().is_zero());
        assert!(!Period::days(1).is_zero());
    }

    #[test]
    fn test_presets() {
        assert_eq!(Period::PRESETS.len(), 8);
        assert_eq!(Period::PRESETS[0], Period::days(30));
        assert_eq!(Period::PRESETS[7], Period::years(3));
    }

    #[test]
    fn test_day_filter_defaults() {
        assert_eq!(DayFilter::default(), DayFilter::WORKING_DAYS);
        assert!(DayFilter::NONE.is_none());
        assert!(!DayFilter::WORKING_DAYS.is_none());
    }
}
