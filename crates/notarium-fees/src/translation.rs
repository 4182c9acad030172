//! Translation fee rates and formulas.
//!
//! The per-page base rate depends on translation direction, document
//! complexity, and language. On top of the base rate two volume discounts
//! apply: a similar-content discount (60% rate from page 2 when the pages
//! are near-duplicates, e.g. household registers or school records) and a
//! long-document discount from page 10.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Translation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// From a foreign language into Vietnamese.
    #[default]
    ToVietnamese,
    /// From Vietnamese into a foreign language.
    FromVietnamese,
}

/// Document complexity classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Complexity {
    /// Standard forms and certificates.
    #[default]
    Simple,
    /// Technical, legal, or specialized content.
    Complex,
}

/// Source/target language of the document.
///
/// `Other` is the fallback rate for languages not individually listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Language {
    /// English.
    #[default]
    English,
    /// Chinese.
    Chinese,
    /// Russian.
    Russian,
    /// French.
    French,
    /// Korean.
    Korean,
    /// Japanese.
    Japanese,
    /// German.
    German,
    /// Any language not listed above.
    Other,
}

impl Language {
    /// All listed languages, in form order.
    pub const ALL: [Language; 8] = [
        Language::English,
        Language::Chinese,
        Language::Russian,
        Language::French,
        Language::Korean,
        Language::Japanese,
        Language::German,
        Language::Other,
    ];
}

/// The per-page base rate for a (direction, complexity, language) triple.
#[must_use]
pub fn base_rate(direction: Direction, complexity: Complexity, language: Language) -> Decimal {
    use Complexity::{Complex, Simple};
    use Direction::{FromVietnamese, ToVietnamese};
    use Language::{Chinese, English, French, German, Japanese, Korean, Other, Russian};

    match (direction, complexity, language) {
        (ToVietnamese, Simple, English | Chinese) => dec!(75_000),
        (ToVietnamese, Simple, Russian | French) => dec!(100_000),
        (ToVietnamese, Simple, Korean | Japanese | German) => dec!(120_000),
        (ToVietnamese, Complex, English | Chinese) => dec!(100_000),
        (ToVietnamese, Complex, Russian | French) => dec!(120_000),
        (ToVietnamese, Complex, Korean | Japanese | German) => dec!(150_000),
        (ToVietnamese, _, Other) => dec!(200_000),

        (FromVietnamese, Simple, English | Chinese) => dec!(100_000),
        (FromVietnamese, Simple, Russian | French) => dec!(120_000),
        (FromVietnamese, Simple, Korean | Japanese | German) => dec!(150_000),
        (FromVietnamese, Complex, English | Chinese) => dec!(120_000),
        (FromVietnamese, Complex, Russian | French) => dec!(150_000),
        (FromVietnamese, Complex, Korean | Japanese | German) => dec!(200_000),
        (FromVietnamese, _, Other) => dec!(300_000),
    }
}

/// Similar-content rate multiplier applied from page 2.
const SIMILAR_CONTENT_RATE: Decimal = dec!(0.6);
/// Long-document rate multiplier from page 10, simple documents.
const LONG_DOCUMENT_RATE_SIMPLE: Decimal = dec!(0.7);
/// Long-document rate multiplier from page 10, complex documents.
const LONG_DOCUMENT_RATE_COMPLEX: Decimal = dec!(0.8);
/// Pages charged at the full base rate before the long-document discount.
const FULL_RATE_PAGES: u32 = 9;

/// Computes the translation fee for a document.
///
/// With `similar_content`, page 1 is charged the full base rate and every
/// further page 60% of it. Otherwise the first nine pages are charged in
/// full and pages from the tenth onward at 70% (simple) or 80% (complex).
#[must_use]
pub fn translation_fee(
    pages: u32,
    base_rate: Decimal,
    similar_content: bool,
    complexity: Complexity,
) -> Decimal {
    if similar_content {
        let later = pages.saturating_sub(1);
        return base_rate + Decimal::from(later) * base_rate * SIMILAR_CONTENT_RATE;
    }

    if pages <= FULL_RATE_PAGES {
        return Decimal::from(pages) * base_rate;
    }

    let discount = match complexity {
        Complexity::Simple => LONG_DOCUMENT_RATE_SIMPLE,
        Complexity::Complex => LONG_DOCUMENT_RATE_COMPLEX,
    };
    Decimal::from(FULL_RATE_PAGES) * base_rate
        + Decimal::from(pages - FULL_RATE_PAGES) * base_rate * discount
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_rate_table_corners() {
        assert_eq!(
            base_rate(Direction::ToVietnamese, Complexity::Simple, Language::English),
            dec!(75_000)
        );
        assert_eq!(
            base_rate(Direction::ToVietnamese, Complexity::Complex, Language::German),
            dec!(150_000)
        );
        assert_eq!(
            base_rate(Direction::FromVietnamese, Complexity::Simple, Language::Chinese),
            dec!(100_000)
        );
        assert_eq!(
            base_rate(Direction::FromVietnamese, Complexity::Complex, Language::Korean),
            dec!(200_000)
        );
    }

    #[test]
    fn test_other_language_fallback_ignores_complexity() {
        for complexity in [Complexity::Simple, Complexity::Complex] {
            assert_eq!(
                base_rate(Direction::ToVietnamese, complexity, Language::Other),
                dec!(200_000)
            );
            assert_eq!(
                base_rate(Direction::FromVietnamese, complexity, Language::Other),
                dec!(300_000)
            );
        }
    }

    #[test]
    fn test_short_document_full_rate() {
        let fee = translation_fee(5, dec!(75_000), false, Complexity::Simple);
        assert_eq!(fee, dec!(375_000));

        let fee = translation_fee(9, dec!(75_000), false, Complexity::Simple);
        assert_eq!(fee, dec!(675_000));
    }

    #[test]
    fn test_long_document_discount_simple() {
        // 9 * 75,000 + 3 * 75,000 * 0.7 = 675,000 + 157,500
        let fee = translation_fee(12, dec!(75_000), false, Complexity::Simple);
        assert_eq!(fee, dec!(832_500));
    }

    #[test]
    fn test_long_document_discount_complex() {
        // 9 * 100,000 + 1 * 100,000 * 0.8
        let fee = translation_fee(10, dec!(100_000), false, Complexity::Complex);
        assert_eq!(fee, dec!(980_000));
    }

    #[test]
    fn test_similar_content_discount() {
        // 75,000 + 4 * 75,000 * 0.6
        let fee = translation_fee(5, dec!(75_000), true, Complexity::Simple);
        assert_eq!(fee, dec!(255_000));

        // Single page: just the base rate
        let fee = translation_fee(1, dec!(75_000), true, Complexity::Simple);
        assert_eq!(fee, dec!(75_000));
    }

    #[test]
    fn test_similar_content_beats_long_document_rule() {
        // Similar content takes precedence over the page-10 discount
        let fee = translation_fee(12, dec!(75_000), true, Complexity::Simple);
        assert_eq!(fee, dec!(75_000) + dec!(11) * dec!(75_000) * dec!(0.6));
    }

    #[test]
    fn test_serde_enum_forms() {
        assert_eq!(
            serde_json::to_string(&Direction::ToVietnamese).unwrap(),
            "\"to-vietnamese\""
        );
        assert_eq!(
            serde_json::from_str::<Language>("\"other\"").unwrap(),
            Language::Other
        );
    }
}
