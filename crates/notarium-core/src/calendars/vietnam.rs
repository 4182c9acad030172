//! Vietnam public-holiday calendar.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use super::Calendar;
use crate::types::Date;

/// Static Vietnam calendar instance.
static VIETNAM_CALENDAR: OnceLock<VietnamCalendar> = OnceLock::new();

/// Vietnam public-holiday calendar.
///
/// ## Holidays
///
/// Fixed-date, every year:
/// - New Year's Day (January 1)
/// - Reunification Day (April 30)
/// - International Labour Day (May 1)
/// - National Day (September 2)
///
/// Lunar-calendar, hard-coded per year (2024-2028):
/// - Tết Nguyên Đán, a contiguous 7-day span
/// - Hùng Kings' Commemoration Day (10th day of the 3rd lunar month)
///
/// Lunar dates cannot be derived algorithmically here, so years outside the
/// hard-coded table get only the four fixed holidays. That is a silent
/// approximation, not an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct VietnamCalendar;

impl VietnamCalendar {
    /// Creates a new Vietnam calendar.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Get the global Vietnam calendar instance.
    pub fn global() -> &'static VietnamCalendar {
        VIETNAM_CALENDAR.get_or_init(VietnamCalendar::new)
    }

    /// Returns all public-holiday dates in the given year, ordered.
    ///
    /// Always contains the four fixed holidays; lunar holidays are added
    /// only for years present in the hard-coded table.
    #[must_use]
    pub fn holidays_for_year(&self, year: i32) -> BTreeSet<Date> {
        let mut holidays = BTreeSet::new();

        for &(month, day) in &FIXED_HOLIDAYS {
            if let Ok(d) = Date::from_ymd(year, month, day) {
                holidays.insert(d);
            }
        }

        if let Some(lunar) = LUNAR_TABLE.iter().find(|l| l.year == year) {
            for &(month, day) in &lunar.tet {
                if let Ok(d) = Date::from_ymd(year, month, day) {
                    holidays.insert(d);
                }
            }
            let (month, day) = lunar.hung_kings;
            if let Ok(d) = Date::from_ymd(year, month, day) {
                holidays.insert(d);
            }
        }

        holidays
    }
}

impl Calendar for VietnamCalendar {
    fn name(&self) -> &'static str {
        "Vietnam"
    }

    fn is_holiday(&self, date: Date) -> bool {
        let month = date.month();
        let day = date.day();

        if FIXED_HOLIDAYS.contains(&(month, day)) {
            return true;
        }

        match LUNAR_TABLE.iter().find(|l| l.year == date.year()) {
            Some(lunar) => {
                lunar.tet.contains(&(month, day)) || lunar.hung_kings == (month, day)
            }
            None => false,
        }
    }
}

/// Fixed-date public holidays, as (month, day), observed every year.
const FIXED_HOLIDAYS: [(u32, u32); 4] = [(1, 1), (4, 30), (5, 1), (9, 2)];

/// Lunar-calendar holidays for one year, as (month, day) in the solar
/// calendar.
struct LunarYear {
    year: i32,
    /// The 7-day Tết Nguyên Đán span.
    tet: [(u32, u32); 7],
    /// Hùng Kings' Commemoration Day.
    hung_kings: (u32, u32),
}

/// Hard-coded lunar holiday table. Extend by appending a year's entry.
const LUNAR_TABLE: [LunarYear; 5] = [
    LunarYear {
        year: 2024,
        tet: [(2, 8), (2, 9), (2, 10), (2, 11), (2, 12), (2, 13), (2, 14)],
        hung_kings: (4, 18),
    },
    LunarYear {
        year: 2025,
        tet: [(1, 27), (1, 28), (1, 29), (1, 30), (1, 31), (2, 1), (2, 2)],
        hung_kings: (4, 18),
    },
    LunarYear {
        year: 2026,
        tet: [(2, 16), (2, 17), (2, 18), (2, 19), (2, 20), (2, 21), (2, 22)],
        hung_kings: (4, 18),
    },
    LunarYear {
        year: 2027,
        tet: [(2, 4), (2, 5), (2, 6), (2, 7), (2, 8), (2, 9), (2, 10)],
        hung_kings: (4, 15),
    },
    LunarYear {
        year: 2028,
        tet: [(1, 24), (1, 25), (1, 26), (1, 27), (1, 28), (1, 29), (1, 30)],
        hung_kings: (4, 4),
    },
];
