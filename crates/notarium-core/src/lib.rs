//! # Notarium Core
//!
//! Core date types, the Vietnam public-holiday calendar, and deadline
//! arithmetic for the Notarium notary-office fee engine.
//!
//! This crate provides the foundational building blocks the calculators
//! delegate to:
//!
//! - **Types**: [`types::Date`], [`types::DateField`], [`types::Period`],
//!   [`types::DayFilter`]
//! - **Calendars**: the [`calendars::Calendar`] trait and the hard-coded
//!   [`calendars::VietnamCalendar`]
//! - **Deadline arithmetic**: period addition with optional working-day
//!   skipping, date differences, range statistics
//! - **Input normalization**: grouped numeric text and `DD/MM/YYYY` display
//!   dates
//!
//! Every operation here is a pure, deterministic function of its explicit
//! inputs; the only shared state is the read-only holiday table.
//!
//! ## Example
//!
//! ```rust
//! use notarium_core::calendars::VietnamCalendar;
//! use notarium_core::deadline::{add_period, range_statistics};
//! use notarium_core::types::{Date, DayFilter, Period};
//!
//! let cal = VietnamCalendar::global();
//! let signed = Date::from_ymd(2025, 6, 2).unwrap();
//!
//! // Appeal window: 30 calendar days from signature
//! let deadline = add_period(cal, signed, Period::days(30), false, DayFilter::WORKING_DAYS);
//! assert_eq!(deadline, Date::from_ymd(2025, 7, 2).unwrap());
//!
//! // How many of those are office days?
//! let stats = range_statistics(cal, signed, deadline);
//! assert_eq!(stats.total, 31);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::uninlined_format_args)]

pub mod calendars;
pub mod deadline;
pub mod error;
pub mod input;
pub mod types;

#[cfg(test)]
mod property_tests;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calendars::{Calendar, VietnamCalendar};
    pub use crate::deadline::{
        add_period, difference, range_statistics, DateDifference, RangeStatistics,
    };
    pub use crate::error::{NotariumError, NotariumResult};
    pub use crate::types::{Date, DateField, DayFilter, Period};
}

// Re-export commonly used types at crate root
pub use error::{NotariumError, NotariumResult};
pub use types::{Date, DateField, DayFilter, Period};
