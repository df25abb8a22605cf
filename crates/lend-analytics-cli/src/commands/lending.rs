use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use lend_analytics_core::lending::amortization::{self, RepaymentScheduleInput};

/// Arguments for the monthly payment preview
#[derive(Args)]
pub struct MonthlyPaymentArgs {
    /// Loan principal
    #[arg(long)]
    pub principal: Decimal,

    /// Term in months
    #[arg(long)]
    pub term_months: u32,

    /// Annual interest rate in percent (e.g. 12.5)
    #[arg(long)]
    pub annual_rate: Decimal,
}

/// Arguments for the full repayment schedule
#[derive(Args)]
pub struct RepaymentScheduleArgs {
    /// Loan principal
    #[arg(long)]
    pub principal: Decimal,

    /// Term in months
    #[arg(long)]
    pub term_months: u32,

    /// Annual interest rate in percent
    #[arg(long)]
    pub annual_rate: Decimal,
}

pub fn run_monthly_payment(args: MonthlyPaymentArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let payment = amortization::monthly_payment(args.principal, args.term_months, args.annual_rate)?;
    Ok(serde_json::json!({
        "monthly_payment": payment,
        "principal": args.principal,
        "term_months": args.term_months,
        "annual_rate_pct": args.annual_rate,
    }))
}

pub fn run_repayment_schedule(
    args: RepaymentScheduleArgs,
) -> Result<Value, Box<dyn std::error::Error>> {
    let input = RepaymentScheduleInput {
        principal: args.principal,
        term_months: args.term_months,
        annual_rate_pct: args.annual_rate,
    };
    let result = amortization::build_repayment_schedule(&input)?;
    Ok(serde_json::to_value(result)?)
}
