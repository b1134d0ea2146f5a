mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::cash_flow::CashProjectionArgs;
use commands::estimation::{PertArgs, ProjectEstimateArgs};
use commands::forecasting::{ForecastArgs, TrendArgs};
use commands::interest::{LoanArgs, LoanReviewArgs};
use commands::investment::{AppraisalArgs, IrrArgs, NpvArgs};
use commands::optimization::{AllocationArgs, BreakevenArgs};
use commands::variance::BudgetReviewArgs;

/// Decimal-precision business finance calculations
#[derive(Parser)]
#[command(
    name = "fincalc",
    version,
    about = "Decimal-precision business finance calculations",
    long_about = "A CLI for budget variance, loans and interest, cash flow projection, \
                  forecasting, investment appraisal, project estimation and budget \
                  allocation. Review commands read JSON from --input or stdin."
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
    /// Net present value of a cash flow series
    Npv(NpvArgs),
    /// Internal rate of return (Newton-Raphson)
    Irr(IrrArgs),
    /// Monthly payment and total interest for an amortizing loan
    Loan(LoanArgs),
    /// Three-point (PERT) estimate with confidence interval
    Pert(PertArgs),
    /// Break-even units and contribution margin
    Breakeven(BreakevenArgs),
    /// Classify a series as increasing, decreasing or stable
    Trend(TrendArgs),
    /// Budget-vs-actual variance review
    BudgetReview(BudgetReviewArgs),
    /// Loan analysis with amortization schedule
    LoanReview(LoanReviewArgs),
    /// Project cash position over future periods
    CashProjection(CashProjectionArgs),
    /// Forecast a series by regression, moving average and smoothing
    Forecast(ForecastArgs),
    /// Capital investment appraisal (NPV, IRR, payback, PI, ROI)
    Appraise(AppraisalArgs),
    /// Roll task estimates up into a project estimate
    ProjectEstimate(ProjectEstimateArgs),
    /// Allocate a budget proportionally or by priority
    Allocate(AllocationArgs),
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
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Npv(args) => commands::investment::run_npv(args),
        Commands::Irr(args) => commands::investment::run_irr(args),
        Commands::Loan(args) => commands::interest::run_loan(args),
        Commands::Pert(args) => commands::estimation::run_pert(args),
        Commands::Breakeven(args) => commands::optimization::run_breakeven(args),
        Commands::Trend(args) => commands::forecasting::run_trend(args),
        Commands::BudgetReview(args) => commands::variance::run_budget_review(args),
        Commands::LoanReview(args) => commands::interest::run_loan_review(args),
        Commands::CashProjection(args) => commands::cash_flow::run_cash_projection(args),
        Commands::Forecast(args) => commands::forecasting::run_forecast(args),
        Commands::Appraise(args) => commands::investment::run_appraisal(args),
        Commands::ProjectEstimate(args) => commands::estimation::run_project_estimate(args),
        Commands::Allocate(args) => commands::optimization::run_allocation(args),
        Commands::Version => {
            println!("fincalc {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            log::debug!("command failed: {e:?}");
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
