//! End-to-end calculator checks against worked reference cases from the
//! office's published tariff and calendar.

use notarium_engine::date_calc::{DeadlineInput, DifferenceInput, WorkingDaysInput};
use notarium_engine::fee_calc::{
    CertificationInput, ContractInput, NotarizedCopyInput, TranslationInput,
};
use notarium_core::types::{Date, DateField, DayFilter, Period};
use notarium_fees::tiers::ContractCategory;
use notarium_fees::translation::{Complexity, Direction, Language};
use rust_decimal_macros::dec;

fn field(iso: &str) -> DateField {
    let mut f = DateField::new();
    f.set_from_iso(iso);
    f
}

#[test]
fn deadline_month_offset_carries_into_march() {
    // Jan 31 + 1 month overflows February and carries into March,
    // landing on Mar 2 in a leap year.
    let input = DeadlineInput {
        start: field("2024-01-31"),
        period: Period::months(1),
        skip_non_working: false,
        filter: DayFilter::WORKING_DAYS,
    };
    let result = input.recompute().unwrap();
    assert_eq!(result.end, Date::from_ymd(2024, 3, 2).unwrap());

    // Non-leap year: one day later.
    let input = DeadlineInput {
        start: field("2025-01-31"),
        period: Period::months(1),
        skip_non_working: false,
        filter: DayFilter::WORKING_DAYS,
    };
    assert_eq!(
        input.recompute().unwrap().end,
        Date::from_ymd(2025, 3, 3).unwrap()
    );
}

#[test]
fn difference_of_equal_dates_is_zero() {
    let input = DifferenceInput {
        from: field("2024-01-01"),
        to: field("2024-01-01"),
        filter: DayFilter::NONE,
    };
    let diff = input.recompute().unwrap();
    assert_eq!((diff.day_count, diff.years, diff.months), (0, 0, 0));
}

#[test]
fn economic_contract_two_billion() {
    // 1,000,000 base + (2,000,000,000 - 1,000,000,001) * 0.0006
    let input = ContractInput {
        category: Some(ContractCategory::Economic),
        value_text: "2.000.000.000".into(),
        service_fee_text: String::new(),
        copy_fee_text: String::new(),
    };
    let result = input.recompute().unwrap();
    assert_eq!(result.notary_fee, dec!(1_599_999.9994));
    assert_eq!(result.total, result.notary_fee);
}

#[test]
fn certification_five_pages_below_cap() {
    let input = CertificationInput {
        pages_text: "5".into(),
        copies_text: "1".into(),
    };
    let result = input.recompute();
    assert_eq!(result.total, dec!(7_000));
    assert!(!result.breakdown[0].capped);
}

#[test]
fn first_week_of_2025_day_classification() {
    // Jan 1 is a holiday, Jan 4-5 a weekend, the rest office days.
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

#[test]
fn twelve_page_english_translation() {
    // 9 full-rate pages plus 3 at the 70% long-document rate.
    let input = TranslationInput {
        direction: Direction::ToVietnamese,
        language: Language::English,
        complexity: Complexity::Simple,
        pages_text: "12".into(),
        copies_text: "1".into(),
        similar_content: false,
    };
    let result = input.recompute();
    assert_eq!(result.base_rate, dec!(75_000));
    assert_eq!(result.translation_fee, dec!(832_500));
    // One notarized copy at the flat first-copy rate.
    assert_eq!(result.notarization_fee, dec!(120_000));
    assert_eq!(result.total, dec!(952_500));
}

#[test]
fn tet_week_deadline_walks_past_holidays() {
    // 2025 Tet runs Jan 27 through Feb 2. Three working days from
    // Friday Jan 24 must clear the whole block.
    let input = DeadlineInput {
        start: field("2025-01-24"),
        period: Period::days(3),
        skip_non_working: true,
        filter: DayFilter::WORKING_DAYS,
    };
    let result = input.recompute().unwrap();
    assert_eq!(result.end, Date::from_ymd(2025, 2, 5).unwrap());
}

#[test]
fn notarized_copy_grouped_input_round_trip() {
    // Grouped text in the count fields parses like plain digits.
    let input = NotarizedCopyInput {
        pages_text: "1.000".into(),
        copies_text: "2".into(),
    };
    let result = input.recompute();
    assert_eq!(result.pages, 1_000);
    // Per copy capped at 100,000.
    assert_eq!(result.total, dec!(200_000));
}

#[test]
fn results_serialize_for_the_ui() {
    let input = CertificationInput {
        pages_text: "3".into(),
        copies_text: "1".into(),
    };
    let json = serde_json::to_value(input.recompute()).unwrap();
    assert_eq!(json["pages"], 3);
    assert_eq!(json["breakdown"][0]["capped"], false);
}
