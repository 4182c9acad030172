//! Property tests over the calendar and deadline arithmetic.

use proptest::prelude::*;

use crate::calendars::{Calendar, VietnamCalendar};
use crate::deadline::{difference, range_statistics};
use crate::types::{Date, DayFilter};

/// Arbitrary date between 2020-01-01 and roughly 2033.
fn any_date() -> impl Strategy<Value = Date> {
    (0i64..5000).prop_map(|offset| Date::from_ymd(2020, 1, 1).unwrap().add_days(offset))
}

proptest! {
    #[test]
    fn working_day_matches_flag_expansion(
        date in any_date(),
        exclude_weekends in any::<bool>(),
        exclude_holidays in any::<bool>(),
    ) {
        let cal = VietnamCalendar::new();
        let filter = DayFilter { exclude_weekends, exclude_holidays };

        let expected = !(exclude_weekends && date.is_weekend())
            && !(exclude_holidays && cal.is_holiday(date));
        prop_assert_eq!(cal.is_working_day(date, filter), expected);
    }

    #[test]
    fn range_statistics_buckets_sum_to_total(
        start in any_date(),
        span in 0i64..400,
    ) {
        let cal = VietnamCalendar::new();
        let end = start.add_days(span);

        let stats = range_statistics(&cal, start, end);
        prop_assert_eq!(stats.total, stats.working + stats.weekend + stats.holiday);
        prop_assert_eq!(i64::from(stats.total), span + 1);
    }

    #[test]
    fn difference_day_count_is_whole_day_delta(
        start in any_date(),
        span in 0i64..2000,
    ) {
        let cal = VietnamCalendar::new();
        let end = start.add_days(span);

        let diff = difference(&cal, start, end, DayFilter::NONE);
        prop_assert_eq!(diff.day_count, span);
        prop_assert!(diff.months < 12);
        prop_assert!(diff.years >= 0);
    }

    #[test]
    fn difference_working_count_agrees_with_statistics(
        start in any_date(),
        span in 0i64..400,
    ) {
        let cal = VietnamCalendar::new();
        let end = start.add_days(span);

        let diff = difference(&cal, start, end, DayFilter::WORKING_DAYS);
        let stats = range_statistics(&cal, start, end);
        // Holiday-first bucketing and the filter agree on what "working" is
        prop_assert_eq!(diff.day_count, i64::from(stats.working));
    }

    #[test]
    fn display_form_round_trips(date in any_date()) {
        prop_assert_eq!(Date::parse_display(&date.format_display()), Some(date));
    }
}
