//! Error types for fee schedule construction.
//!
//! Fee evaluation itself is total (out-of-range values price to zero);
//! errors can only arise when building a schedule whose shape violates the
//! tariff invariants.

use thiserror::Error;

/// A specialized Result type for fee schedule operations.
pub type FeeResult<T> = Result<T, FeeError>;

/// Errors raised while constructing fee schedules.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeeError {
    /// A fee table has no tiers.
    #[error("Fee table '{table}' has no tiers")]
    EmptyTable {
        /// Name of the offending table.
        table: String,
    },

    /// Tiers are not ascending and contiguous.
    #[error("Fee table '{table}' is not contiguous at tier {index}: {reason}")]
    NonContiguousTiers {
        /// Name of the offending table.
        table: String,
        /// Index of the tier where the gap or overlap was found.
        index: usize,
        /// Description of the violation.
        reason: String,
    },

    /// A page fee rule whose cap is below the first-tier cost.
    #[error("Per-copy cap {cap} is below the first-tier cost {first_tier_cost}")]
    CapBelowFirstTier {
        /// The configured per-copy cap.
        cap: rust_decimal::Decimal,
        /// Cost of the first tier alone.
        first_tier_cost: rust_decimal::Decimal,
    },
}
