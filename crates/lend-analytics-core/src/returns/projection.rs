//! Compound-return projections for the investor dashboards.
//!
//! Covers:
//! 1. **Expected return** -- compound growth of a single placement with
//!    monthly compounding.
//! 2. **ROI** -- realized return as a percentage of the amount invested.
//! 3. **Growth projection** -- future value of a recurring monthly
//!    contribution treated as an ordinary annuity.

use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::types::{Money, Rate};
use crate::EngineResult;

const MONTHS_PER_YEAR: Decimal = dec!(12);
const PERCENT: Decimal = dec!(100);

fn monthly_rate(annual_rate_pct: Rate) -> Decimal {
    annual_rate_pct / PERCENT / MONTHS_PER_YEAR
}

/// Expected return on a single investment with monthly compounding.
///
/// Returns the gain only, not the grown balance.
pub fn expected_return(
    amount: Money,
    annual_rate_pct: Rate,
    duration_months: u32,
) -> EngineResult<Money> {
    if amount < Decimal::ZERO {
        return Err(EngineError::InvalidInput {
            field: "amount".into(),
            reason: "Invested amount cannot be negative".into(),
        });
    }
    if annual_rate_pct < Decimal::ZERO {
        return Err(EngineError::InvalidInput {
            field: "annual_rate_pct".into(),
            reason: "Annual rate cannot be negative".into(),
        });
    }

    let rate = monthly_rate(annual_rate_pct);
    let growth = (Decimal::ONE + rate).powd(Decimal::from(duration_months));
    Ok(amount * growth - amount)
}

/// Realized return on investment as a percentage of the amount invested.
pub fn roi(invested: Money, returned: Money) -> EngineResult<Decimal> {
    if invested < Decimal::ZERO {
        return Err(EngineError::InvalidInput {
            field: "invested".into(),
            reason: "Invested amount cannot be negative".into(),
        });
    }
    if invested.is_zero() {
        return Err(EngineError::DivisionByZero {
            context: "ROI invested amount".into(),
        });
    }

    Ok((returned - invested) / invested * PERCENT)
}

// ---------------------------------------------------------------------------
// Growth projection
// ---------------------------------------------------------------------------

/// Input for the recurring-contribution growth projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthProjectionInput {
    pub monthly_contribution: Money,
    /// Annual interest rate in percent.
    pub annual_rate_pct: Rate,
    pub years: u32,
}

/// Output of the recurring-contribution growth projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthProjectionOutput {
    pub total_invested: Money,
    pub projected_value: Money,
    pub total_returns: Money,
}

/// Future value of a recurring monthly contribution (ordinary annuity).
pub fn project_future_value(
    input: &GrowthProjectionInput,
) -> EngineResult<GrowthProjectionOutput> {
    if input.monthly_contribution < Decimal::ZERO {
        return Err(EngineError::InvalidInput {
            field: "monthly_contribution".into(),
            reason: "Monthly contribution cannot be negative".into(),
        });
    }
    if input.annual_rate_pct < Decimal::ZERO {
        return Err(EngineError::InvalidInput {
            field: "annual_rate_pct".into(),
            reason: "Annual rate cannot be negative".into(),
        });
    }

    let months = Decimal::from(input.years) * MONTHS_PER_YEAR;
    let rate = monthly_rate(input.annual_rate_pct);
    let total_invested = input.monthly_contribution * months;

    let projected_value = if rate.is_zero() {
        total_invested
    } else {
        let growth = (Decimal::ONE + rate).powd(months);
        input.monthly_contribution * (growth - Decimal::ONE) / rate
    };

    Ok(GrowthProjectionOutput {
        total_invested,
        projected_value,
        total_returns: projected_value - total_invested,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn approx_eq(a: Decimal, b: Decimal, eps: Decimal) -> bool {
        (a - b).abs() < eps
    }

    #[test]
    fn test_roi_basic() {
        assert_eq!(roi(dec!(1000), dec!(1150)).unwrap(), dec!(15));
    }

    #[test]
    fn test_roi_loss_is_negative() {
        assert_eq!(roi(dec!(1000), dec!(900)).unwrap(), dec!(-10));
    }

    #[test]
    fn test_roi_zero_invested_is_division_by_zero() {
        let err = roi(dec!(0), dec!(500)).unwrap_err();
        assert!(matches!(err, EngineError::DivisionByZero { .. }));
    }

    #[test]
    fn test_roi_rejects_negative_invested() {
        assert!(roi(dec!(-100), dec!(500)).is_err());
    }

    #[test]
    fn test_expected_return_zero_rate_is_zero() {
        assert_eq!(expected_return(dec!(5000), dec!(0), 24).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_expected_return_zero_duration_is_zero() {
        assert_eq!(expected_return(dec!(5000), dec!(12), 0).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_expected_return_known_value() {
        // 10,000 at 12% annual (1% monthly) for 12 months:
        // 10000 * 1.01^12 - 10000 = ~1268.25
        let gain = expected_return(dec!(10000), dec!(12), 12).unwrap();
        assert!(approx_eq(gain, dec!(1268.25), dec!(0.01)), "got {gain}");
    }

    #[test]
    fn test_expected_return_rejects_negative_amount() {
        assert!(expected_return(dec!(-1), dec!(10), 12).is_err());
    }

    #[test]
    fn test_expected_return_is_idempotent() {
        let a = expected_return(dec!(2500), dec!(9.5), 18).unwrap();
        let b = expected_return(dec!(2500), dec!(9.5), 18).unwrap();
        assert_eq!(a, b);
    }

    fn growth_input() -> GrowthProjectionInput {
        GrowthProjectionInput {
            monthly_contribution: dec!(500),
            annual_rate_pct: dec!(12),
            years: 10,
        }
    }

    #[test]
    fn test_growth_total_invested() {
        let out = project_future_value(&growth_input()).unwrap();
        assert_eq!(out.total_invested, dec!(60000));
    }

    #[test]
    fn test_growth_known_future_value() {
        // 500/month at 1% monthly for 120 months: 500 * (1.01^120 - 1) / 0.01
        // = ~115,019.34
        let out = project_future_value(&growth_input()).unwrap();
        assert!(
            approx_eq(out.projected_value, dec!(115019.34), dec!(0.01)),
            "got {}",
            out.projected_value
        );
    }

    #[test]
    fn test_growth_returns_are_value_minus_invested() {
        let out = project_future_value(&growth_input()).unwrap();
        assert_eq!(out.total_returns, out.projected_value - out.total_invested);
    }

    #[test]
    fn test_growth_zero_rate_is_linear() {
        let input = GrowthProjectionInput {
            monthly_contribution: dec!(250),
            annual_rate_pct: dec!(0),
            years: 4,
        };
        let out = project_future_value(&input).unwrap();
        assert_eq!(out.projected_value, dec!(12000));
        assert_eq!(out.total_returns, Decimal::ZERO);
    }

    #[test]
    fn test_growth_zero_contribution_is_all_zero() {
        let input = GrowthProjectionInput {
            monthly_contribution: dec!(0),
            annual_rate_pct: dec!(8),
            years: 5,
        };
        let out = project_future_value(&input).unwrap();
        assert_eq!(out.total_invested, Decimal::ZERO);
        assert_eq!(out.projected_value, Decimal::ZERO);
        assert_eq!(out.total_returns, Decimal::ZERO);
    }

    #[test]
    fn test_growth_rejects_negative_contribution() {
        let input = GrowthProjectionInput {
            monthly_contribution: dec!(-500),
            annual_rate_pct: dec!(8),
            years: 5,
        };
        assert!(project_future_value(&input).is_err());
    }

    #[test]
    fn test_growth_serialization_roundtrip() {
        let out = project_future_value(&growth_input()).unwrap();
        let json = serde_json::to_string(&out).unwrap();
        let _: GrowthProjectionOutput = serde_json::from_str(&json).unwrap();
    }
}
