//! Capital allocation recommendations.
//!
//! Maps an investor's risk-tolerance preference to a fixed split of
//! committed capital across the low/medium/high risk buckets. The weight
//! table is fixed per tier; there is no interpolation between tiers.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::types::Money;
use crate::EngineResult;

// ---------------------------------------------------------------------------
// Input / Output
// ---------------------------------------------------------------------------

/// Investor risk-tolerance preference driving the allocation weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTolerance {
    Conservative,
    Moderate,
    Aggressive,
}

impl std::fmt::Display for RiskTolerance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskTolerance::Conservative => write!(f, "conservative"),
            RiskTolerance::Moderate => write!(f, "moderate"),
            RiskTolerance::Aggressive => write!(f, "aggressive"),
        }
    }
}

impl std::str::FromStr for RiskTolerance {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "conservative" => Ok(RiskTolerance::Conservative),
            "moderate" => Ok(RiskTolerance::Moderate),
            "aggressive" => Ok(RiskTolerance::Aggressive),
            _ => Err(EngineError::InvalidInput {
                field: "risk_tolerance".into(),
                reason: format!(
                    "Unknown risk tolerance '{s}'. Use: conservative, moderate, aggressive"
                ),
            }),
        }
    }
}

/// Fractional weights applied to the committed amount for one tier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AllocationWeights {
    pub low: Decimal,
    pub medium: Decimal,
    pub high: Decimal,
}

/// Recommended currency split across the risk buckets. The three amounts
/// sum to the committed total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioAllocation {
    pub low: Money,
    pub medium: Money,
    pub high: Money,
    /// Weights applied, echoed for display ("70 / 25 / 5 %").
    pub weights: AllocationWeights,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

fn tolerance_weights(tolerance: RiskTolerance) -> AllocationWeights {
    match tolerance {
        RiskTolerance::Conservative => AllocationWeights {
            low: dec!(0.70),
            medium: dec!(0.25),
            high: dec!(0.05),
        },
        RiskTolerance::Moderate => AllocationWeights {
            low: dec!(0.50),
            medium: dec!(0.35),
            high: dec!(0.15),
        },
        RiskTolerance::Aggressive => AllocationWeights {
            low: dec!(0.30),
            medium: dec!(0.40),
            high: dec!(0.30),
        },
    }
}

/// Recommend a risk-balanced split of `total_amount` for one tolerance tier.
pub fn recommend_allocation(
    total_amount: Money,
    tolerance: RiskTolerance,
) -> EngineResult<PortfolioAllocation> {
    if total_amount < Decimal::ZERO {
        return Err(EngineError::InvalidInput {
            field: "total_amount".into(),
            reason: "Committed amount cannot be negative".into(),
        });
    }

    let weights = tolerance_weights(tolerance);
    Ok(PortfolioAllocation {
        low: total_amount * weights.low,
        medium: total_amount * weights.medium,
        high: total_amount * weights.high,
        weights,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const ALL_TIERS: [RiskTolerance; 3] = [
        RiskTolerance::Conservative,
        RiskTolerance::Moderate,
        RiskTolerance::Aggressive,
    ];

    #[test]
    fn test_conservative_split() {
        let out = recommend_allocation(dec!(100000), RiskTolerance::Conservative).unwrap();
        assert_eq!(out.low, dec!(70000));
        assert_eq!(out.medium, dec!(25000));
        assert_eq!(out.high, dec!(5000));
    }

    #[test]
    fn test_moderate_split() {
        let out = recommend_allocation(dec!(10000), RiskTolerance::Moderate).unwrap();
        assert_eq!(out.low, dec!(5000));
        assert_eq!(out.medium, dec!(3500));
        assert_eq!(out.high, dec!(1500));
    }

    #[test]
    fn test_aggressive_split() {
        let out = recommend_allocation(dec!(1000), RiskTolerance::Aggressive).unwrap();
        assert_eq!(out.low, dec!(300));
        assert_eq!(out.medium, dec!(400));
        assert_eq!(out.high, dec!(300));
    }

    #[test]
    fn test_buckets_sum_to_total_for_every_tier() {
        for tier in ALL_TIERS {
            let out = recommend_allocation(dec!(123456.78), tier).unwrap();
            assert_eq!(out.low + out.medium + out.high, dec!(123456.78), "{tier}");
        }
    }

    #[test]
    fn test_weights_sum_to_one_for_every_tier() {
        for tier in ALL_TIERS {
            let w = tolerance_weights(tier);
            assert_eq!(w.low + w.medium + w.high, Decimal::ONE, "{tier}");
        }
    }

    #[test]
    fn test_zero_total_allocates_zero() {
        let out = recommend_allocation(dec!(0), RiskTolerance::Moderate).unwrap();
        assert_eq!(out.low, Decimal::ZERO);
        assert_eq!(out.medium, Decimal::ZERO);
        assert_eq!(out.high, Decimal::ZERO);
    }

    #[test]
    fn test_reject_negative_total() {
        assert!(recommend_allocation(dec!(-1), RiskTolerance::Conservative).is_err());
    }

    #[test]
    fn test_allocation_is_idempotent() {
        let a = recommend_allocation(dec!(42000), RiskTolerance::Aggressive).unwrap();
        let b = recommend_allocation(dec!(42000), RiskTolerance::Aggressive).unwrap();
        assert_eq!(a.low, b.low);
        assert_eq!(a.medium, b.medium);
        assert_eq!(a.high, b.high);
    }

    #[test]
    fn test_tolerance_parses_from_string() {
        assert_eq!(
            "conservative".parse::<RiskTolerance>().unwrap(),
            RiskTolerance::Conservative
        );
        assert_eq!(
            "Aggressive".parse::<RiskTolerance>().unwrap(),
            RiskTolerance::Aggressive
        );
        assert!("balanced".parse::<RiskTolerance>().is_err());
    }

    #[test]
    fn test_tolerance_serde_uses_lowercase() {
        let json = serde_json::to_string(&RiskTolerance::Moderate).unwrap();
        assert_eq!(json, "\"moderate\"");
        let back: RiskTolerance = serde_json::from_str("\"aggressive\"").unwrap();
        assert_eq!(back, RiskTolerance::Aggressive);
    }
}
