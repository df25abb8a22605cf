use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use lend_analytics_core::portfolio::allocation::{self, RiskTolerance};
use lend_analytics_core::portfolio::diversification;
use lend_analytics_core::types::Investment;

use crate::input;

/// Arguments for the capital allocation recommendation
#[derive(Args)]
pub struct AllocateArgs {
    /// Total amount to allocate
    #[arg(long)]
    pub total: Decimal,

    /// Risk tolerance: conservative, moderate, aggressive
    #[arg(long)]
    pub risk_tolerance: String,
}

/// Arguments for diversification scoring
#[derive(Args)]
pub struct DiversificationArgs {
    /// Path to a JSON file with the investment list
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_allocate(args: AllocateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let tolerance: RiskTolerance = args.risk_tolerance.parse()?;
    let result = allocation::recommend_allocation(args.total, tolerance)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_diversification(
    args: DiversificationArgs,
) -> Result<Value, Box<dyn std::error::Error>> {
    let investments: Vec<Investment> = if let Some(ref path) = args.input {
        input::read_json_file(path)?
    } else if let Some(data) = input::read_stdin_json()? {
        serde_json::from_value(data)?
    } else {
        return Err("--input <file.json> or stdin required".into());
    };

    let result = diversification::score_diversification(&investments)?;
    Ok(serde_json::to_value(result)?)
}
