//! Lender risk assessment.
//!
//! Covers:
//! 1. **Risk score** -- neutral base of 50 plus four bounded adjustments:
//!    credit score, portfolio size, default rate, lending experience.
//! 2. **Classification** -- low (<= 30), medium (<= 60), high (> 60).
//! 3. **Factor narrative** -- one explanation string per signal, in
//!    evaluation order, rendered verbatim by the dashboards.
//!
//! The score is intentionally unclamped: only the two classification
//! bounds matter, and extreme inputs may score outside [0, 100].

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::types::{Money, RiskLevel};
use crate::EngineResult;

const BASE_SCORE: Decimal = dec!(50);

// ---------------------------------------------------------------------------
// Input / Output
// ---------------------------------------------------------------------------

/// Risk-relevant attributes of a lender, assembled by the caller at
/// assessment time. The engine does not retain it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LenderRiskProfile {
    /// Bureau-style credit score, typically 300-850.
    pub credit_score: Decimal,
    /// Currency units under management.
    pub portfolio_size: Money,
    /// Historical default rate in percent (2 = 2%).
    pub default_rate: Decimal,
    /// Whole years of lending activity.
    pub years_active: u32,
}

/// Signed contribution of each signal to the risk score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub credit_score_adjustment: Decimal,
    pub portfolio_size_adjustment: Decimal,
    pub default_rate_adjustment: Decimal,
    pub experience_adjustment: Decimal,
}

/// Output of a lender risk assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub risk_level: RiskLevel,
    /// Lower is safer. Not clamped to any range.
    pub risk_score: Decimal,
    /// One explanation per signal, in evaluation order.
    pub factors: Vec<String>,
    pub breakdown: ScoreBreakdown,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Score a lender's risk profile and classify it into a risk bucket.
pub fn assess_lender(profile: &LenderRiskProfile) -> EngineResult<RiskAssessment> {
    validate_profile(profile)?;

    let (credit_adj, credit_factor) = credit_score_signal(profile.credit_score);
    let (size_adj, size_factor) = portfolio_size_signal(profile.portfolio_size);
    let (default_adj, default_factor) = default_rate_signal(profile.default_rate);
    let (experience_adj, experience_factor) = experience_signal(profile.years_active);

    let risk_score = BASE_SCORE + credit_adj + size_adj + default_adj + experience_adj;

    Ok(RiskAssessment {
        risk_level: classify_risk(risk_score),
        risk_score,
        factors: vec![
            credit_factor.to_string(),
            size_factor.to_string(),
            default_factor.to_string(),
            experience_factor.to_string(),
        ],
        breakdown: ScoreBreakdown {
            credit_score_adjustment: credit_adj,
            portfolio_size_adjustment: size_adj,
            default_rate_adjustment: default_adj,
            experience_adjustment: experience_adj,
        },
    })
}

// ---------------------------------------------------------------------------
// Signals
// ---------------------------------------------------------------------------

// Threshold comparisons are inclusive on the lower bound of each tier.

fn credit_score_signal(credit_score: Decimal) -> (Decimal, &'static str) {
    if credit_score >= dec!(750) {
        (dec!(-15), "Excellent credit score")
    } else if credit_score >= dec!(650) {
        (dec!(-5), "Good credit score")
    } else {
        (dec!(10), "Below average credit score")
    }
}

fn portfolio_size_signal(portfolio_size: Money) -> (Decimal, &'static str) {
    if portfolio_size >= dec!(1000000) {
        (dec!(-10), "Large portfolio")
    } else if portfolio_size >= dec!(500000) {
        (dec!(-5), "Medium portfolio")
    } else {
        (dec!(5), "Small portfolio")
    }
}

fn default_rate_signal(default_rate: Decimal) -> (Decimal, &'static str) {
    if default_rate <= dec!(2) {
        (dec!(-15), "Low default rate")
    } else if default_rate <= dec!(5) {
        (dec!(-5), "Average default rate")
    } else {
        (dec!(15), "High default rate")
    }
}

fn experience_signal(years_active: u32) -> (Decimal, &'static str) {
    if years_active >= 5 {
        (dec!(-8), "Experienced lender")
    } else if years_active >= 2 {
        (dec!(-3), "Moderate experience")
    } else {
        (dec!(5), "New to lending")
    }
}

fn classify_risk(risk_score: Decimal) -> RiskLevel {
    if risk_score <= dec!(30) {
        RiskLevel::Low
    } else if risk_score <= dec!(60) {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate_profile(profile: &LenderRiskProfile) -> EngineResult<()> {
    if profile.credit_score < Decimal::ZERO {
        return Err(EngineError::InvalidInput {
            field: "credit_score".into(),
            reason: "Credit score cannot be negative".into(),
        });
    }
    if profile.portfolio_size < Decimal::ZERO {
        return Err(EngineError::InvalidInput {
            field: "portfolio_size".into(),
            reason: "Portfolio size cannot be negative".into(),
        });
    }
    if profile.default_rate < Decimal::ZERO || profile.default_rate > dec!(100) {
        return Err(EngineError::InvalidInput {
            field: "default_rate".into(),
            reason: "Default rate must be between 0 and 100 percent".into(),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
