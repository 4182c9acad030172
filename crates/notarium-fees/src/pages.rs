//! Per-page, per-copy document fees.
//!
//! Certification and copy issuance are priced per physical copy: the first
//! few pages at one rate, every later page at a cheaper rate, with a hard
//! cap per copy. Translation notarization additionally special-cases the
//! first copy, which is charged a flat per-page rate with no tier and no
//! cap.

use std::sync::OnceLock;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{FeeError, FeeResult};

/// Tiered per-copy pricing rule for a multi-page document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageFeeRule {
    /// Number of pages charged at the first-tier rate.
    pub first_tier_pages: u32,
    /// Rate for each of the first-tier pages.
    pub first_tier_rate: Decimal,
    /// Rate for every page after the first tier.
    pub later_rate: Decimal,
    /// Maximum chargeable fee for one copy.
    pub per_copy_cap: Decimal,
}

impl PageFeeRule {
    /// Creates a validated rule.
    ///
    /// # Errors
    ///
    /// Returns `FeeError::CapBelowFirstTier` when the cap could not even
    /// cover the first-tier pages, which would make the tier unreachable.
    pub fn new(
        first_tier_pages: u32,
        first_tier_rate: Decimal,
        later_rate: Decimal,
        per_copy_cap: Decimal,
    ) -> FeeResult<Self> {
        let first_tier_cost = Decimal::from(first_tier_pages) * first_tier_rate;
        if per_copy_cap < first_tier_cost {
            return Err(FeeError::CapBelowFirstTier {
                cap: per_copy_cap,
                first_tier_cost,
            });
        }
        Ok(Self {
            first_tier_pages,
            first_tier_rate,
            later_rate,
            per_copy_cap,
        })
    }

    /// Fee for one copy of a document with the given page count, capped.
    #[must_use]
    pub fn per_copy_fee(&self, pages: u32) -> Decimal {
        let first = pages.min(self.first_tier_pages);
        let later = pages.saturating_sub(self.first_tier_pages);
        let fee = Decimal::from(first) * self.first_tier_rate
            + Decimal::from(later) * self.later_rate;
        fee.min(self.per_copy_cap)
    }

    /// Total fee for `copies` identical copies, each priced by
    /// [`Self::per_copy_fee`].
    #[must_use]
    pub fn total_fee(&self, pages: u32, copies: u32) -> Decimal {
        Decimal::from(copies) * self.per_copy_fee(pages)
    }

    /// Per-copy fee lines, with a flag marking copies where the cap bound.
    ///
    /// The office receipt itemizes each copy, so the calculators surface
    /// the same breakdown.
    #[must_use]
    pub fn copy_breakdown(&self, pages: u32, copies: u32) -> Vec<CopyFee> {
        let uncapped = Decimal::from(pages.min(self.first_tier_pages)) * self.first_tier_rate
            + Decimal::from(pages.saturating_sub(self.first_tier_pages)) * self.later_rate;
        let capped = uncapped > self.per_copy_cap;
        let fee = self.per_copy_fee(pages);
        (1..=copies)
            .map(|copy| CopyFee { copy, fee, capped })
            .collect()
    }
}

/// One itemized copy on the fee breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyFee {
    /// 1-based copy number.
    pub copy: u32,
    /// Fee charged for this copy, after the cap.
    pub fee: Decimal,
    /// True when the per-copy cap reduced the fee.
    pub capped: bool,
}

/// Total for the first-copy-special scheme used by translation
/// notarization: copy 1 is charged `pages * first_copy_rate` with no tier
/// and no cap; copies 2..N each go through `rule`.
#[must_use]
pub fn first_copy_special_total(
    pages: u32,
    copies: u32,
    first_copy_rate: Decimal,
    rule: &PageFeeRule,
) -> Decimal {
    if copies == 0 {
        return Decimal::ZERO;
    }
    let first = Decimal::from(pages) * first_copy_rate;
    first + Decimal::from(copies - 1) * rule.per_copy_fee(pages)
}

static CERTIFICATION_RULE: OnceLock<PageFeeRule> = OnceLock::new();
static NOTARIZED_COPY_RULE: OnceLock<PageFeeRule> = OnceLock::new();
static TRANSLATION_NOTARIZATION_RULE: OnceLock<PageFeeRule> = OnceLock::new();

/// Flat per-page rate for the first notarized copy of a translation.
pub const TRANSLATION_FIRST_COPY_RATE: Decimal = dec!(10_000);

/// Certification of true copies: pages 1-2 at 2,000, later pages at 1,000,
/// capped at 200,000 per copy.
pub fn certification_rule() -> &'static PageFeeRule {
    CERTIFICATION_RULE.get_or_init(|| {
        PageFeeRule::new(2, dec!(2_000), dec!(1_000), dec!(200_000))
            .expect("static certification rule is valid")
    })
}

/// Issuing copies of notarized documents: pages 1-2 at 5,000, later pages
/// at 3,000, capped at 100,000 per copy.
pub fn notarized_copy_rule() -> &'static PageFeeRule {
    NOTARIZED_COPY_RULE.get_or_init(|| {
        PageFeeRule::new(2, dec!(5_000), dec!(3_000), dec!(100_000))
            .expect("static notarized copy rule is valid")
    })
}

/// Notarizing additional copies of a translation (copies after the first):
/// pages 1-2 at 5,000, later pages at 3,000, capped at 200,000 per copy.
pub fn translation_notarization_rule() -> &'static PageFeeRule {
    TRANSLATION_NOTARIZATION_RULE.get_or_init(|| {
        PageFeeRule::new(2, dec!(5_000), dec!(3_000), dec!(200_000))
            .expect("static translation notarization rule is valid")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_per_copy_fee_below_cap() {
        // 2 * 2,000 + 3 * 1,000
        let rule = PageFeeRule::new(2, dec!(2_000), dec!(1_000), dec!(200_000)).unwrap();
        assert_eq!(rule.per_copy_fee(5), dec!(7_000));
    }

    #[test]
    fn test_per_copy_fee_short_document() {
        let rule = certification_rule();
        assert_eq!(rule.per_copy_fee(1), dec!(2_000));
        assert_eq!(rule.per_copy_fee(2), dec!(4_000));
        assert_eq!(rule.per_copy_fee(0), Decimal::ZERO);
    }

    #[test]
    fn test_per_copy_cap_binds() {
        // 2 * 2,000 + 298 * 1,000 = 302,000, capped at 200,000
        let rule = certification_rule();
        assert_eq!(rule.per_copy_fee(300), dec!(200_000));
    }

    #[test]
    fn test_total_fee_multi_copy() {
        let rule = notarized_copy_rule();
        // 3 pages: 2 * 5,000 + 1 * 3,000 = 13,000 per copy
        assert_eq!(rule.total_fee(3, 4), dec!(52_000));
    }

    #[test]
    fn test_copy_breakdown_flags_cap() {
        let rule = notarized_copy_rule();

        // 50 pages: 10,000 + 48 * 3,000 = 154,000, capped at 100,000
        let lines = rule.copy_breakdown(50, 2);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].copy, 1);
        assert_eq!(lines[0].fee, dec!(100_000));
        assert!(lines[0].capped);

        let lines = rule.copy_breakdown(3, 1);
        assert_eq!(lines[0].fee, dec!(13_000));
        assert!(!lines[0].capped);
    }

    #[test]
    fn test_first_copy_special_total() {
        // Copy 1: 3 * 10,000 = 30,000 flat.
        // Copy 2: 2 * 5,000 + 1 * 3,000 = 13,000.
        let total = first_copy_special_total(
            3,
            2,
            TRANSLATION_FIRST_COPY_RATE,
            translation_notarization_rule(),
        );
        assert_eq!(total, dec!(43_000));
    }

    #[test]
    fn test_first_copy_has_no_cap() {
        // 100 pages, single copy: 1,000,000 flat, far above the later-copy cap
        let total = first_copy_special_total(
            100,
            1,
            TRANSLATION_FIRST_COPY_RATE,
            translation_notarization_rule(),
        );
        assert_eq!(total, dec!(1_000_000));
    }

    #[test]
    fn test_zero_copies() {
        let total = first_copy_special_total(
            5,
            0,
            TRANSLATION_FIRST_COPY_RATE,
            translation_notarization_rule(),
        );
        assert_eq!(total, Decimal::ZERO);
    }

    #[test]
    fn test_cap_invariant_enforced() {
        let result = PageFeeRule::new(10, dec!(5_000), dec!(1_000), dec!(20_000));
        assert!(matches!(result, Err(FeeError::CapBelowFirstTier { .. })));
    }
}
