//! # Notarium Fees
//!
//! Statutory fee schedules for the Notarium notary-office fee engine:
//! tiered notary fees on contract value, per-page certification and copy
//! fees, and translation rates.
//!
//! The schedules are the published tariff, hard-coded and exposed through
//! lazily built statics:
//!
//! - **Tiered tables**: [`tiers::FeeTable`] with flat, rate-on-value, and
//!   marginal (base plus rate on the excess) tiers, one table per
//!   [`tiers::ContractCategory`]
//! - **Page fees**: [`pages::PageFeeRule`] for certification, notarized
//!   copies, and translation notarization, plus the first-copy special
//!   scheme for translations
//! - **Translation**: [`translation::base_rate`] and
//!   [`translation::translation_fee`] with similar-content and
//!   long-document discounts
//!
//! Evaluation is total: a zero or out-of-range value prices to zero.
//! Construction is where the invariants live, so hand-built schedules go
//! through validated constructors returning [`error::FeeResult`].
//!
//! ## Example
//!
//! ```rust
//! use notarium_fees::tiers::ContractCategory;
//! use rust_decimal_macros::dec;
//!
//! // Notary fee on a 50M VND economic contract: the flat first tier
//! let table = ContractCategory::Economic.table();
//! assert_eq!(table.fee_for(50_000_000), dec!(50_000));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::unreadable_literal)]

pub mod error;
pub mod pages;
pub mod tiers;
pub mod translation;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{FeeError, FeeResult};
    pub use crate::pages::{
        certification_rule, first_copy_special_total, notarized_copy_rule,
        translation_notarization_rule, CopyFee, PageFeeRule, TRANSLATION_FIRST_COPY_RATE,
    };
    pub use crate::tiers::{ContractCategory, FeeTable, FeeTier, TierPricing};
    pub use crate::translation::{base_rate, translation_fee, Complexity, Direction, Language};
}

// Re-export commonly used types at crate root
pub use error::{FeeError, FeeResult};
pub use tiers::{ContractCategory, FeeTable};
