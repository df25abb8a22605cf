//! Portfolio diversification scoring.
//!
//! Composite 0-100 score over an investor's placements:
//! 1. **Lender concentration** (0-40) -- distinct-lender count against a
//!    10-lender target.
//! 2. **Risk balance** (0-30) -- how close the medium-risk share of the
//!    portfolio sits to 50%. A heuristic target, preserved as-is.
//! 3. **Amount consistency** (0-30) -- coefficient of variation of the
//!    invested amounts.
//!
//! Recommendation strings are rendered verbatim by the dashboards.

use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::EngineError;
use crate::types::{Investment, RiskLevel};
use crate::EngineResult;

/// Distinct-lender count at which the concentration component maxes out.
const LENDER_TARGET: Decimal = dec!(10);

/// Below this many distinct lenders the concentration recommendation fires.
const LENDER_FLAG_THRESHOLD: usize = 5;

/// Coefficient-of-variation level above which amounts are flagged as
/// inconsistent.
const CONSISTENCY_FLAG_THRESHOLD: Decimal = dec!(0.5);

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Output of the diversification scorer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiversificationReport {
    /// Composite score, 0-100, rounded to a whole number.
    pub score: Decimal,
    /// Lender concentration component (0-40).
    pub lender_score: Decimal,
    /// Risk balance component (0-30).
    pub balance_score: Decimal,
    /// Amount consistency component (0-30).
    pub consistency_score: Decimal,
    pub recommendations: Vec<String>,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Score how diversified a set of investments is.
///
/// An empty portfolio is a defined case: score 0 with a single
/// starter recommendation.
pub fn score_diversification(investments: &[Investment]) -> EngineResult<DiversificationReport> {
    if investments.is_empty() {
        return Ok(DiversificationReport {
            score: Decimal::ZERO,
            lender_score: Decimal::ZERO,
            balance_score: Decimal::ZERO,
            consistency_score: Decimal::ZERO,
            recommendations: vec!["Start investing to build diversification".to_string()],
        });
    }

    validate_investments(investments)?;

    let mut recommendations: Vec<String> = Vec::new();
    let total = Decimal::from(investments.len() as u64);

    // Lender concentration (0-40)
    let distinct_lenders: usize = investments
        .iter()
        .map(|inv| inv.lender_id.as_str())
        .collect::<HashSet<_>>()
        .len();
    let lender_ratio = (Decimal::from(distinct_lenders as u64) / LENDER_TARGET).min(Decimal::ONE);
    let lender_score = lender_ratio * dec!(40);
    if distinct_lenders < LENDER_FLAG_THRESHOLD {
        recommendations.push("Invest in more lenders to reduce concentration risk".to_string());
    }

    // Risk balance (0-30): medium-risk share measured against a 50% target.
    let medium_count = investments
        .iter()
        .filter(|inv| inv.risk_level == RiskLevel::Medium)
        .count();
    let medium_fraction = Decimal::from(medium_count as u64) / total;
    let balance = Decimal::ONE - (dec!(0.5) - medium_fraction).abs();
    let balance_score = balance * dec!(30);

    // Amount consistency (0-30): coefficient of variation of the amounts.
    let mean = investments.iter().map(|inv| inv.amount).sum::<Decimal>() / total;
    if mean.is_zero() {
        return Err(EngineError::DivisionByZero {
            context: "mean investment amount".into(),
        });
    }
    let variance = investments
        .iter()
        .map(|inv| {
            let deviation = inv.amount - mean;
            deviation * deviation
        })
        .sum::<Decimal>()
        / total;
    let std_dev = variance.sqrt().ok_or_else(|| EngineError::InvalidInput {
        field: "amount".into(),
        reason: "Amount variance is not representable".into(),
    })?;
    let coefficient = std_dev / mean;
    let consistency_score = (Decimal::ONE - coefficient).max(Decimal::ZERO) * dec!(30);
    if coefficient > CONSISTENCY_FLAG_THRESHOLD {
        recommendations.push("Consider more consistent investment amounts".to_string());
    }

    Ok(DiversificationReport {
        score: (lender_score + balance_score + consistency_score).round(),
        lender_score,
        balance_score,
        consistency_score,
        recommendations,
    })
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate_investments(investments: &[Investment]) -> EngineResult<()> {
    for inv in investments {
        if inv.amount <= Decimal::ZERO {
            return Err(EngineError::InvalidInput {
                field: "amount".into(),
                reason: format!("Investment '{}' has a non-positive amount", inv.id),
            });
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::InvestmentStatus;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn investment(id: &str, lender_id: &str, amount: Decimal, risk: RiskLevel) -> Investment {
        Investment {
            id: id.to_string(),
            investor_id: "inv-1".to_string(),
            lender_id: lender_id.to_string(),
            amount,
            expected_return: amount * dec!(0.1),
            actual_return: None,
            duration: 12,
            status: InvestmentStatus::Active,
            start_date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            end_date: None,
            risk_level: risk,
            lender_info: None,
        }
    }

    #[test]
    fn test_empty_portfolio_scores_zero() {
        let out = score_diversification(&[]).unwrap();
        assert_eq!(out.score, Decimal::ZERO);
        assert_eq!(
            out.recommendations,
            vec!["Start investing to build diversification".to_string()]
        );
    }

    #[test]
    fn test_ideal_portfolio_scores_hundred() {
        // Ten distinct lenders, equal amounts, half medium risk.
        let investments: Vec<Investment> = (0..10)
            .map(|i| {
                let risk = if i % 2 == 0 { RiskLevel::Medium } else { RiskLevel::Low };
                investment(&format!("i-{i}"), &format!("lender-{i}"), dec!(1000), risk)
            })
            .collect();
        let out = score_diversification(&investments).unwrap();
        assert_eq!(out.score, dec!(100));
        assert!(out.recommendations.is_empty());
    }

    #[test]
    fn test_concentrated_portfolio_flags_lender_count() {
        let investments = vec![
            investment("a", "lender-1", dec!(1000), RiskLevel::Medium),
            investment("b", "lender-2", dec!(1000), RiskLevel::Low),
        ];
        let out = score_diversification(&investments).unwrap();
        assert!(out
            .recommendations
            .contains(&"Invest in more lenders to reduce concentration risk".to_string()));
        // 2 of 10 lenders: 8 points.
        assert_eq!(out.lender_score, dec!(8));
    }

    #[test]
    fn test_uneven_amounts_flag_consistency() {
        // Amounts 1000 and 5000: mean 3000, stddev 2000, cv ~0.67.
        let investments = vec![
            investment("a", "lender-1", dec!(1000), RiskLevel::Low),
            investment("b", "lender-2", dec!(5000), RiskLevel::Low),
        ];
        let out = score_diversification(&investments).unwrap();
        assert!(out
            .recommendations
            .contains(&"Consider more consistent investment amounts".to_string()));
        // lender 8 + balance 15 + consistency ~10 => 33
        assert_eq!(out.score, dec!(33));
    }

    #[test]
    fn test_equal_amounts_max_consistency_component() {
        let investments = vec![
            investment("a", "lender-1", dec!(2500), RiskLevel::Low),
            investment("b", "lender-2", dec!(2500), RiskLevel::Low),
            investment("c", "lender-3", dec!(2500), RiskLevel::Low),
        ];
        let out = score_diversification(&investments).unwrap();
        assert_eq!(out.consistency_score, dec!(30));
    }

    #[test]
    fn test_all_medium_portfolio_balance_component() {
        // medium_fraction 1.0 => balance 0.5 => 15 points.
        let investments = vec![
            investment("a", "lender-1", dec!(1000), RiskLevel::Medium),
            investment("b", "lender-2", dec!(1000), RiskLevel::Medium),
        ];
        let out = score_diversification(&investments).unwrap();
        assert_eq!(out.balance_score, dec!(15.0));
    }

    #[test]
    fn test_no_medium_portfolio_balance_component() {
        // medium_fraction 0 => balance 0.5 => 15 points.
        let investments = vec![
            investment("a", "lender-1", dec!(1000), RiskLevel::Low),
            investment("b", "lender-2", dec!(1000), RiskLevel::High),
        ];
        let out = score_diversification(&investments).unwrap();
        assert_eq!(out.balance_score, dec!(15.0));
    }

    #[test]
    fn test_lender_component_caps_at_forty() {
        let investments: Vec<Investment> = (0..15)
            .map(|i| investment(&format!("i-{i}"), &format!("lender-{i}"), dec!(1000), RiskLevel::Low))
            .collect();
        let out = score_diversification(&investments).unwrap();
        assert_eq!(out.lender_score, dec!(40));
    }

    #[test]
    fn test_repeat_lender_counts_once() {
        let investments = vec![
            investment("a", "lender-1", dec!(1000), RiskLevel::Low),
            investment("b", "lender-1", dec!(1000), RiskLevel::Low),
            investment("c", "lender-2", dec!(1000), RiskLevel::Low),
        ];
        let out = score_diversification(&investments).unwrap();
        assert_eq!(out.lender_score, dec!(8));
    }

    #[test]
    fn test_components_round_to_score() {
        let investments = vec![
            investment("a", "lender-1", dec!(1200), RiskLevel::Medium),
            investment("b", "lender-2", dec!(900), RiskLevel::Low),
            investment("c", "lender-3", dec!(1100), RiskLevel::Medium),
        ];
        let out = score_diversification(&investments).unwrap();
        let sum = out.lender_score + out.balance_score + out.consistency_score;
        assert_eq!(out.score, sum.round());
    }

    #[test]
    fn test_scoring_is_idempotent() {
        let investments = vec![
            investment("a", "lender-1", dec!(1000), RiskLevel::Medium),
            investment("b", "lender-2", dec!(3000), RiskLevel::High),
        ];
        let a = score_diversification(&investments).unwrap();
        let b = score_diversification(&investments).unwrap();
        assert_eq!(a.score, b.score);
        assert_eq!(a.recommendations, b.recommendations);
    }

    #[test]
    fn test_reject_zero_amount_investment() {
        let investments = vec![investment("a", "lender-1", dec!(0), RiskLevel::Low)];
        let err = score_diversification(&investments).unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput { .. }));
    }

    #[test]
    fn test_reject_negative_amount_investment() {
        let investments = vec![
            investment("a", "lender-1", dec!(1000), RiskLevel::Low),
            investment("b", "lender-2", dec!(-50), RiskLevel::Low),
        ];
        assert!(score_diversification(&investments).is_err());
    }

    #[test]
    fn test_investment_json_uses_lowercase_enums() {
        let inv = investment("a", "lender-1", dec!(1000), RiskLevel::High);
        let json = serde_json::to_string(&inv).unwrap();
        assert!(json.contains("\"high\""));
        assert!(json.contains("\"active\""));
    }
}
