//! # Notarium Engine
//!
//! The calculator layer of the Notarium notary-office fee engine. Each
//! on-screen calculator maps to one plain input struct here with a
//! synchronous `recompute()`: the UI mutates the input on every keystroke
//! and re-renders from the returned result.
//!
//! - **Date calculators**: [`date_calc::DeadlineInput`],
//!   [`date_calc::DifferenceInput`], [`date_calc::WorkingDaysInput`]
//! - **Fee calculators**: [`fee_calc::TranslationInput`],
//!   [`fee_calc::ContractInput`], [`fee_calc::CertificationInput`],
//!   [`fee_calc::NotarizedCopyInput`]
//!
//! Inputs carry raw form text; normalization, calendars, and fee schedules
//! all live in `notarium-core` and `notarium-fees`. Evaluation never
//! fails: incomplete input suppresses the result (`None`) and invalid
//! numeric text degrades to the field's default.
//!
//! ## Example
//!
//! ```rust
//! use notarium_engine::fee_calc::CertificationInput;
//! use rust_decimal_macros::dec;
//!
//! let input = CertificationInput {
//!     pages_text: "5".into(),
//!     copies_text: "2".into(),
//! };
//! assert_eq!(input.recompute().total, dec!(14_000));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::unreadable_literal)]

pub mod date_calc;
pub mod fee_calc;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::date_calc::{DeadlineInput, DeadlineResult, DifferenceInput, WorkingDaysInput};
    pub use crate::fee_calc::{
        CertificationInput, ContractInput, ContractResult, NotarizedCopyInput, PageFeeResult,
        TranslationInput, TranslationResult,
    };
    pub use notarium_core::prelude::*;
    pub use notarium_fees::prelude::*;
}

// Re-export the calculator inputs at crate root
pub use date_calc::{DeadlineInput, DifferenceInput, WorkingDaysInput};
pub use fee_calc::{CertificationInput, ContractInput, NotarizedCopyInput, TranslationInput};
