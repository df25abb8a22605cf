mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::lending::{MonthlyPaymentArgs, RepaymentScheduleArgs};
use commands::portfolio::{AllocateArgs, DiversificationArgs};
use commands::returns::{ExpectedReturnArgs, ProjectGrowthArgs, RoiArgs};
use commands::risk::AssessLenderArgs;

/// Lending-marketplace risk and portfolio analytics
#[derive(Parser)]
#[command(
    name = "lra",
    version,
    about = "Lending-marketplace risk and portfolio analytics",
    long_about = "Deterministic risk-scoring, allocation, and return calculators \
                  with decimal precision. Supports lender risk assessment, \
                  capital allocation, diversification scoring, compound-return \
                  projection, and loan amortization."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Fixed monthly payment for an amortized loan
    MonthlyPayment(MonthlyPaymentArgs),
    /// Month-by-month loan repayment schedule
    RepaymentSchedule(RepaymentScheduleArgs),
    /// Expected compound return on a single investment
    ExpectedReturn(ExpectedReturnArgs),
    /// Realized return on investment as a percentage
    Roi(RoiArgs),
    /// Future value of a recurring monthly contribution
    ProjectGrowth(ProjectGrowthArgs),
    /// Score a lender's risk profile
    AssessLender(AssessLenderArgs),
    /// Recommend a risk-balanced capital allocation
    Allocate(AllocateArgs),
    /// Score portfolio diversification
    Diversification(DiversificationArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::MonthlyPayment(args) => commands::lending::run_monthly_payment(args),
        Commands::RepaymentSchedule(args) => commands::lending::run_repayment_schedule(args),
        Commands::ExpectedReturn(args) => commands::returns::run_expected_return(args),
        Commands::Roi(args) => commands::returns::run_roi(args),
        Commands::ProjectGrowth(args) => commands::returns::run_project_growth(args),
        Commands::AssessLender(args) => commands::risk::run_assess_lender(args),
        Commands::Allocate(args) => commands::portfolio::run_allocate(args),
        Commands::Diversification(args) => commands::portfolio::run_diversification(args),
        Commands::Version => {
            println!("lra {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
