//! Progressive tiered contract-fee schedules.
//!
//! Notarization fees for value-bearing contracts follow a statutory tariff:
//! an ordered sequence of contiguous value bands, each priced as a flat
//! amount, a percentage of the full value, or a base amount plus a marginal
//! rate on the value above the band floor, optionally capped.

use std::sync::OnceLock;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{FeeError, FeeResult};

/// How one tier prices a value inside its band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TierPricing {
    /// A fixed fee for the whole band.
    Flat(Decimal),
    /// A rate applied to the full value (not just the part above the band
    /// floor), optionally capped.
    RateOnValue {
        /// Rate applied to the whole value.
        rate: Decimal,
        /// Upper bound on the resulting fee.
        cap: Option<Decimal>,
    },
    /// A base amount plus a marginal rate on the value above the band
    /// floor, optionally capped.
    Marginal {
        /// Fee accumulated by the lower bands.
        base: Decimal,
        /// Rate applied to `value - lower`.
        rate: Decimal,
        /// Upper bound on the resulting fee.
        cap: Option<Decimal>,
    },
}

/// One band of a tiered fee schedule, valid over `lower..=upper`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeTier {
    /// Inclusive lower bound of the band.
    pub lower: u64,
    /// Inclusive upper bound of the band (`u64::MAX` for an open top band).
    pub upper: u64,
    /// Pricing rule for values inside the band.
    pub pricing: TierPricing,
}

impl FeeTier {
    fn amount_for(&self, value: u64) -> Decimal {
        match self.pricing {
            TierPricing::Flat(fee) => fee,
            TierPricing::RateOnValue { rate, cap } => {
                clamp(Decimal::from(value) * rate, cap)
            }
            TierPricing::Marginal { base, rate, cap } => {
                clamp(base + Decimal::from(value - self.lower) * rate, cap)
            }
        }
    }
}

fn clamp(amount: Decimal, cap: Option<Decimal>) -> Decimal {
    match cap {
        Some(cap) if amount > cap => cap,
        _ => amount,
    }
}

/// An ordered, contiguous sequence of fee tiers for one contract category.
///
/// Construction validates that the tiers start at zero, ascend, and leave
/// neither gaps nor overlaps, so exactly one tier matches any in-range value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeTable {
    name: String,
    tiers: Vec<FeeTier>,
}

impl FeeTable {
    /// Creates a validated fee table.
    ///
    /// # Errors
    ///
    /// Returns `FeeError` when the table is empty, does not start at zero,
    /// or has non-contiguous bands.
    pub fn new(name: impl Into<String>, tiers: Vec<FeeTier>) -> FeeResult<Self> {
        let name = name.into();
        if tiers.is_empty() {
            return Err(FeeError::EmptyTable { table: name });
        }
        if tiers[0].lower != 0 {
            return Err(FeeError::NonContiguousTiers {
                table: name,
                index: 0,
                reason: format!("first tier starts at {}, expected 0", tiers[0].lower),
            });
        }
        for (i, pair) in tiers.windows(2).enumerate() {
            let (prev, next) = (&pair[0], &pair[1]);
            if prev.upper == u64::MAX || next.lower != prev.upper + 1 {
                return Err(FeeError::NonContiguousTiers {
                    table: name,
                    index: i + 1,
                    reason: format!(
                        "tier starts at {} but previous ends at {}",
                        next.lower, prev.upper
                    ),
                });
            }
        }
        for (i, tier) in tiers.iter().enumerate() {
            if tier.lower > tier.upper {
                return Err(FeeError::NonContiguousTiers {
                    table: name,
                    index: i,
                    reason: format!("empty band {}..={}", tier.lower, tier.upper),
                });
            }
        }
        Ok(Self { name, tiers })
    }

    /// The table's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The tiers, ascending.
    #[must_use]
    pub fn tiers(&self) -> &[FeeTier] {
        &self.tiers
    }

    /// Evaluates the fee for a contract value.
    ///
    /// A value of 0 prices to 0 (an unfilled form, not a priced contract),
    /// as does a value outside every band.
    #[must_use]
    pub fn fee_for(&self, value: u64) -> Decimal {
        if value == 0 {
            return Decimal::ZERO;
        }
        self.tiers
            .iter()
            .find(|t| t.lower <= value && value <= t.upper)
            .map(|t| t.amount_for(value))
            .unwrap_or(Decimal::ZERO)
    }
}

/// Contract category selecting the applicable tariff table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContractCategory {
    /// Economic, commercial, investment, and business contracts.
    Economic,
    /// Leases of land-use rights, housing, and other assets.
    Rental,
}

impl ContractCategory {
    /// The tariff table for this category.
    #[must_use]
    pub fn table(&self) -> &'static FeeTable {
        match self {
            ContractCategory::Economic => economic_table(),
            ContractCategory::Rental => rental_table(),
        }
    }
}

static ECONOMIC_TABLE: OnceLock<FeeTable> = OnceLock::new();
static RENTAL_TABLE: OnceLock<FeeTable> = OnceLock::new();

/// Tariff for economic/commercial/investment/business contracts.
/// Top band capped at 70,000,000 VND.
pub fn economic_table() -> &'static FeeTable {
    ECONOMIC_TABLE.get_or_init(|| {
        FeeTable::new(
            "Economic contracts",
            vec![
                FeeTier {
                    lower: 0,
                    upper: 49_999_999,
                    pricing: TierPricing::Flat(dec!(50_000)),
                },
                FeeTier {
                    lower: 50_000_000,
                    upper: 100_000_000,
                    pricing: TierPricing::Flat(dec!(100_000)),
                },
                FeeTier {
                    lower: 100_000_001,
                    upper: 1_000_000_000,
                    pricing: TierPricing::RateOnValue {
                        rate: dec!(0.001),
                        cap: None,
                    },
                },
                FeeTier {
                    lower: 1_000_000_001,
                    upper: 3_000_000_000,
                    pricing: TierPricing::Marginal {
                        base: dec!(1_000_000),
                        rate: dec!(0.0006),
                        cap: None,
                    },
                },
                FeeTier {
                    lower: 3_000_000_001,
                    upper: 5_000_000_000,
                    pricing: TierPricing::Marginal {
                        base: dec!(2_200_000),
                        rate: dec!(0.0005),
                        cap: None,
                    },
                },
                FeeTier {
                    lower: 5_000_000_001,
                    upper: 10_000_000_000,
                    pricing: TierPricing::Marginal {
                        base: dec!(3_200_000),
                        rate: dec!(0.0004),
                        cap: None,
                    },
                },
                FeeTier {
                    lower: 10_000_000_001,
                    upper: 100_000_000_000,
                    pricing: TierPricing::Marginal {
                        base: dec!(5_200_000),
                        rate: dec!(0.0003),
                        cap: None,
                    },
                },
                FeeTier {
                    lower: 100_000_000_001,
                    upper: u64::MAX,
                    pricing: TierPricing::Marginal {
                        base: dec!(32_200_000),
                        rate: dec!(0.0002),
                        cap: Some(dec!(70_000_000)),
                    },
                },
            ],
        )
        .expect("static economic table is contiguous")
    })
}

/// Tariff for lease contracts (land-use rights, housing, assets).
/// Top band capped at 8,000,000 VND.
pub fn rental_table() -> &'static FeeTable {
    RENTAL_TABLE.get_or_init(|| {
        FeeTable::new(
            "Rental contracts",
            vec![
                FeeTier {
                    lower: 0,
                    upper: 49_999_999,
                    pricing: TierPricing::Flat(dec!(40_000)),
                },
                FeeTier {
                    lower: 50_000_000,
                    upper: 100_000_000,
                    pricing: TierPricing::Flat(dec!(80_000)),
                },
                FeeTier {
                    lower: 100_000_001,
                    upper: 1_000_000_000,
                    pricing: TierPricing::RateOnValue {
                        rate: dec!(0.0008),
                        cap: None,
                    },
                },
                FeeTier {
                    lower: 1_000_000_001,
                    upper: 3_000_000_000,
                    pricing: TierPricing::Marginal {
                        base: dec!(800_000),
                        rate: dec!(0.0006),
                        cap: None,
                    },
                },
                FeeTier {
                    lower: 3_000_000_001,
                    upper: 5_000_000_000,
                    pricing: TierPricing::Marginal {
                        base: dec!(2_000_000),
                        rate: dec!(0.0005),
                        cap: None,
                    },
                },
                FeeTier {
                    lower: 5_000_000_001,
                    upper: 10_000_000_000,
                    pricing: TierPricing::Marginal {
                        base: dec!(3_000_000),
                        rate: dec!(0.0004),
                        cap: None,
                    },
                },
                FeeTier {
                    lower: 10_000_000_001,
                    upper: u64::MAX,
                    pricing: TierPricing::Marginal {
                        base: dec!(5_000_000),
                        rate: dec!(0.0003),
                        cap: Some(dec!(8_000_000)),
                    },
                },
            ],
        )
        .expect("static rental table is contiguous")
    })
}
