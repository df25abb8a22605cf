use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use lend_analytics_core::returns::projection::{self, GrowthProjectionInput};

/// Arguments for the single-investment expected return
#[derive(Args)]
pub struct ExpectedReturnArgs {
    /// Amount invested
    #[arg(long)]
    pub amount: Decimal,

    /// Annual interest rate in percent
    #[arg(long)]
    pub annual_rate: Decimal,

    /// Investment duration in months
    #[arg(long)]
    pub duration_months: u32,
}

/// Arguments for realized return on investment
#[derive(Args)]
pub struct RoiArgs {
    /// Amount invested
    #[arg(long)]
    pub invested: Decimal,

    /// Amount returned at maturity
    #[arg(long)]
    pub returned: Decimal,
}

/// Arguments for the recurring-contribution growth projection
#[derive(Args)]
pub struct ProjectGrowthArgs {
    /// Contribution per month
    #[arg(long)]
    pub monthly_contribution: Decimal,

    /// Annual interest rate in percent
    #[arg(long)]
    pub annual_rate: Decimal,

    /// Projection horizon in years
    #[arg(long)]
    pub years: u32,
}

pub fn run_expected_return(args: ExpectedReturnArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let gain = projection::expected_return(args.amount, args.annual_rate, args.duration_months)?;
    Ok(serde_json::json!({
        "expected_return": gain,
        "amount": args.amount,
        "annual_rate_pct": args.annual_rate,
        "duration_months": args.duration_months,
    }))
}

pub fn run_roi(args: RoiArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let roi_pct = projection::roi(args.invested, args.returned)?;
    Ok(serde_json::json!({
        "roi_pct": roi_pct,
        "invested": args.invested,
        "returned": args.returned,
    }))
}

pub fn run_project_growth(args: ProjectGrowthArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let input = GrowthProjectionInput {
        monthly_contribution: args.monthly_contribution,
        annual_rate_pct: args.annual_rate,
        years: args.years,
    };
    let result = projection::project_future_value(&input)?;
    Ok(serde_json::to_value(result)?)
}
