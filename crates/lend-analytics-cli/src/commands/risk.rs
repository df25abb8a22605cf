use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use lend_analytics_core::risk::assessor::{self, LenderRiskProfile};

use crate::input;

/// Arguments for lender risk assessment.
///
/// Supply the profile either as flags or as a JSON file/stdin document.
#[derive(Args)]
pub struct AssessLenderArgs {
    /// Path to a JSON file with the lender risk profile
    #[arg(long)]
    pub input: Option<String>,

    /// Bureau-style credit score (typically 300-850)
    #[arg(long)]
    pub credit_score: Option<Decimal>,

    /// Currency units under management
    #[arg(long)]
    pub portfolio_size: Option<Decimal>,

    /// Historical default rate in percent
    #[arg(long)]
    pub default_rate: Option<Decimal>,

    /// Whole years of lending activity
    #[arg(long)]
    pub years_active: Option<u32>,
}

pub fn run_assess_lender(args: AssessLenderArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let profile: LenderRiskProfile = if let Some(ref path) = args.input {
        input::read_json_file(path)?
    } else if let Some(data) = input::read_stdin_json()? {
        serde_json::from_value(data)?
    } else {
        match (
            args.credit_score,
            args.portfolio_size,
            args.default_rate,
            args.years_active,
        ) {
            (Some(credit_score), Some(portfolio_size), Some(default_rate), Some(years_active)) => {
                LenderRiskProfile {
                    credit_score,
                    portfolio_size,
                    default_rate,
                    years_active,
                }
            }
            _ => {
                return Err("--input <file.json>, stdin, or all of --credit-score \
                            --portfolio-size --default-rate --years-active required"
                    .into())
            }
        }
    };

    let result = assessor::assess_lender(&profile)?;
    Ok(serde_json::to_value(result)?)
}
