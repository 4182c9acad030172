//! Fee calculators: translation, contract notarization, certification,
//! and notarized copies.
//!
//! Numeric form fields cross this boundary as the raw grouped text the
//! user typed ("1.500.000"); each `recompute` normalizes them with the
//! shared rules (monetary fields default to 0, page and copy counts to 1)
//! and prices against the static schedules in `notarium_fees`.

use log::debug;
use notarium_core::input::{amount_or_zero, count_or_one};
use notarium_fees::pages::{
    certification_rule, first_copy_special_total, notarized_copy_rule,
    translation_notarization_rule, CopyFee, PageFeeRule, TRANSLATION_FIRST_COPY_RATE,
};
use notarium_fees::tiers::ContractCategory;
use notarium_fees::translation::{base_rate, translation_fee, Complexity, Direction, Language};
use rust_decimal::Decimal;
use serde::Serialize;

/// Inputs of the translation fee calculator.
///
/// Direction, language, and complexity default to the form's preselected
/// values, so a quote exists as soon as the form renders.
#[derive(Debug, Clone, Default)]
pub struct TranslationInput {
    /// Translation direction.
    pub direction: Direction,
    /// Document language.
    pub language: Language,
    /// Document complexity.
    pub complexity: Complexity,
    /// Page count as typed, defaulting to 1.
    pub pages_text: String,
    /// Copy count as typed, defaulting to 1.
    pub copies_text: String,
    /// Near-duplicate pages (household registers, transcripts).
    pub similar_content: bool,
}

/// Itemized translation quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TranslationResult {
    /// Normalized page count.
    pub pages: u32,
    /// Normalized copy count.
    pub copies: u32,
    /// Per-page base rate for the selected direction and language.
    pub base_rate: Decimal,
    /// Translation work fee, charged once regardless of copies.
    pub translation_fee: Decimal,
    /// Notarization fee across all copies.
    pub notarization_fee: Decimal,
    /// Grand total.
    pub total: Decimal,
}

impl TranslationInput {
    /// Computes the quote.
    #[must_use]
    pub fn recompute(&self) -> TranslationResult {
        let pages = count_or_one(&self.pages_text);
        let copies = count_or_one(&self.copies_text);

        let rate = base_rate(self.direction, self.complexity, self.language);
        let translation = translation_fee(pages, rate, self.similar_content, self.complexity);
        let notarization = first_copy_special_total(
            pages,
            copies,
            TRANSLATION_FIRST_COPY_RATE,
            translation_notarization_rule(),
        );
        debug!("translation quote: {pages} pages x {copies} copies at {rate}");
        TranslationResult {
            pages,
            copies,
            base_rate: rate,
            translation_fee: translation,
            notarization_fee: notarization,
            total: translation + notarization,
        }
    }
}

/// Inputs of the contract notarization fee calculator.
#[derive(Debug, Clone, Default)]
pub struct ContractInput {
    /// Selected contract category; nothing is priced until one is chosen.
    pub category: Option<ContractCategory>,
    /// Contract or transaction value as typed, defaulting to 0.
    pub value_text: String,
    /// Ancillary service fee as typed, defaulting to 0.
    pub service_fee_text: String,
    /// Copy fee as typed, defaulting to 0.
    pub copy_fee_text: String,
}

/// Itemized contract notarization quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContractResult {
    /// Tiered statutory notary fee on the contract value.
    pub notary_fee: Decimal,
    /// Pass-through service fee.
    pub service_fee: Decimal,
    /// Pass-through copy fee.
    pub copy_fee: Decimal,
    /// Grand total.
    pub total: Decimal,
}

impl ContractInput {
    /// Computes the quote, or `None` while no category is selected or the
    /// contract value is zero.
    #[must_use]
    pub fn recompute(&self) -> Option<ContractResult> {
        let category = self.category?;
        let value = amount_or_zero(&self.value_text);
        if value == 0 {
            return None;
        }

        let notary_fee = category.table().fee_for(value);
        let service_fee = Decimal::from(amount_or_zero(&self.service_fee_text));
        let copy_fee = Decimal::from(amount_or_zero(&self.copy_fee_text));
        debug!("contract quote: {category:?} value {value} -> {notary_fee}");
        Some(ContractResult {
            notary_fee,
            service_fee,
            copy_fee,
            total: notary_fee + service_fee + copy_fee,
        })
    }
}

/// Inputs of the true-copy certification calculator.
#[derive(Debug, Clone, Default)]
pub struct CertificationInput {
    /// Page count as typed, defaulting to 1.
    pub pages_text: String,
    /// Copy count as typed, defaulting to 1.
    pub copies_text: String,
}

/// Inputs of the notarized-copy issuance calculator.
#[derive(Debug, Clone, Default)]
pub struct NotarizedCopyInput {
    /// Page count as typed, defaulting to 1.
    pub pages_text: String,
    /// Copy count as typed, defaulting to 1.
    pub copies_text: String,
}

/// Itemized per-copy quote shared by the two per-page calculators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageFeeResult {
    /// Normalized page count.
    pub pages: u32,
    /// Normalized copy count.
    pub copies: u32,
    /// One line per copy, with cap flags.
    pub breakdown: Vec<CopyFee>,
    /// Grand total across all copies.
    pub total: Decimal,
}

fn price_per_page(rule: &PageFeeRule, pages_text: &str, copies_text: &str) -> PageFeeResult {
    let pages = count_or_one(pages_text);
    let copies = count_or_one(copies_text);
    PageFeeResult {
        pages,
        copies,
        breakdown: rule.copy_breakdown(pages, copies),
        total: rule.total_fee(pages, copies),
    }
}

impl CertificationInput {
    /// Prices certification of true copies.
    #[must_use]
    pub fn recompute(&self) -> PageFeeResult {
        price_per_page(certification_rule(), &self.pages_text, &self.copies_text)
    }
}

impl NotarizedCopyInput {
    /// Prices issuance of copies of notarized documents.
    #[must_use]
    pub fn recompute(&self) -> PageFeeResult {
        price_per_page(notarized_copy_rule(), &self.pages_text, &self.copies_text)
    }
}
