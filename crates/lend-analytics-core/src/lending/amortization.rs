//! Loan amortization.
//!
//! Covers:
//! 1. **Monthly payment** -- fixed-payment annuity for a principal, term,
//!    and annual rate.
//! 2. **Repayment schedule** -- month-by-month split of each payment into
//!    interest and principal.
//!
//! All arithmetic uses `rust_decimal::Decimal`. No `f64`.

use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::EngineError;
use crate::types::{ComputationMetadata, ComputationOutput, Money, Rate};
use crate::EngineResult;

const MONTHS_PER_YEAR: Decimal = dec!(12);
const PERCENT: Decimal = dec!(100);

/// Convert an annual percentage rate into a monthly decimal rate.
fn monthly_rate(annual_rate_pct: Rate) -> Decimal {
    annual_rate_pct / PERCENT / MONTHS_PER_YEAR
}

/// Fixed monthly payment for an amortized loan.
///
/// Returns zero while the application form is still incomplete (zero
/// principal or term) so the live payment preview can render mid-typing
/// without surfacing an error.
pub fn monthly_payment(
    principal: Money,
    term_months: u32,
    annual_rate_pct: Rate,
) -> EngineResult<Money> {
    if principal < Decimal::ZERO {
        return Err(EngineError::InvalidInput {
            field: "principal".into(),
            reason: "Loan principal cannot be negative".into(),
        });
    }
    if annual_rate_pct < Decimal::ZERO {
        return Err(EngineError::InvalidInput {
            field: "annual_rate_pct".into(),
            reason: "Annual rate cannot be negative".into(),
        });
    }
    if principal.is_zero() || term_months == 0 {
        return Ok(Decimal::ZERO);
    }

    let rate = monthly_rate(annual_rate_pct);
    let term = Decimal::from(term_months);

    if rate.is_zero() {
        // Straight-line: equal principal installments, no interest.
        return Ok(principal / term);
    }

    let growth = (Decimal::ONE + rate).powd(term);
    let annuity_factor = growth - Decimal::ONE;
    if annuity_factor.is_zero() {
        return Err(EngineError::DivisionByZero {
            context: "monthly payment annuity factor".into(),
        });
    }

    Ok(principal * (rate * growth) / annuity_factor)
}

// ---------------------------------------------------------------------------
// Repayment schedule
// ---------------------------------------------------------------------------

/// Input for the repayment schedule builder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepaymentScheduleInput {
    pub principal: Money,
    pub term_months: u32,
    /// Annual interest rate in percent (12.5 = 12.5%).
    pub annual_rate_pct: Rate,
}

/// A single month in the repayment schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepaymentPeriod {
    pub month: u32,
    pub opening_balance: Money,
    pub interest: Money,
    pub principal: Money,
    pub closing_balance: Money,
}

/// Output of the repayment schedule builder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepaymentScheduleOutput {
    pub monthly_payment: Money,
    pub periods: Vec<RepaymentPeriod>,
    pub total_interest_paid: Money,
    pub total_paid: Money,
}

/// Build a month-by-month repayment schedule for an amortized loan.
///
/// The final month sweeps the remaining balance so the schedule always
/// closes at exactly zero.
pub fn build_repayment_schedule(
    input: &RepaymentScheduleInput,
) -> EngineResult<ComputationOutput<RepaymentScheduleOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    if input.principal <= Decimal::ZERO {
        return Err(EngineError::InvalidInput {
            field: "principal".into(),
            reason: "Loan principal must be positive".into(),
        });
    }
    if input.term_months == 0 {
        return Err(EngineError::InvalidInput {
            field: "term_months".into(),
            reason: "Term must be at least 1 month".into(),
        });
    }

    let payment = monthly_payment(input.principal, input.term_months, input.annual_rate_pct)?;
    let rate = monthly_rate(input.annual_rate_pct);

    if rate.is_zero() {
        warnings.push("Zero interest rate; schedule is straight-line principal repayment".into());
    }

    let mut periods = Vec::with_capacity(input.term_months as usize);
    let mut balance = input.principal;
    let mut total_interest_paid = Decimal::ZERO;

    for month in 1..=input.term_months {
        let opening = balance;
        let interest = opening * rate;

        // Final month sweeps the remaining balance.
        let principal_part = if month == input.term_months {
            opening
        } else {
            payment - interest
        };

        balance = opening - principal_part;
        total_interest_paid += interest;

        periods.push(RepaymentPeriod {
            month,
            opening_balance: opening,
            interest,
            principal: principal_part,
            closing_balance: balance,
        });
    }

    let result = RepaymentScheduleOutput {
        monthly_payment: payment,
        periods,
        total_interest_paid,
        total_paid: input.principal + total_interest_paid,
    };

    Ok(ComputationOutput {
        result,
        methodology: "Fixed-payment amortization (monthly compounding annuity)".to_string(),
        assumptions: serde_json::to_value(input)?,
        warnings,
        metadata: ComputationMetadata::current(start.elapsed().as_micros() as u64),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
