//! Core value types.
//!
//! - [`Date`]: calendar date with ISO and `DD/MM/YYYY` textual forms
//! - [`DateField`]: per-input-field date state (redesigned from ad-hoc
//!   display/canonical setter pairs)
//! - [`Period`]: signed (years, months, days) offset
//! - [`DayFilter`]: weekend/holiday exclusion flags

mod date;
mod field;
mod period;

pub use date::Date;
pub use field::DateField;
pub use period::{DayFilter, Period};
