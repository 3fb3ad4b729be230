use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::process::ExitCode;

use ledger_report::cli::{
    handle_compare_command, handle_config_command, handle_generate_command,
    handle_report_command, run_demo, CompareArgs, ConfigArgs, GenerateArgs, ReportArgs,
};
use ledger_report::config::{AppPaths, Settings};
use ledger_report::logging::init_tracing;
use ledger_report::services::STATUS_OK;

#[derive(Parser)]
#[command(
    name = "ledger-report",
    version,
    about = "Period reports and year-over-year comparisons for income and expense records",
    long_about = "ledger-report summarizes income and expense records into period reports \
                  with opening and closing balances, and compares two calendar years \
                  category by category. Run without a command for a demo on generated data."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Report on a period
    Report(ReportArgs),

    /// Compare the expenses of two calendar years
    #[command(alias = "cmp")]
    Compare(CompareArgs),

    /// Write a file of synthetic records
    #[command(alias = "gen")]
    Generate(GenerateArgs),

    /// Show current configuration and paths
    Config(ConfigArgs),
}

fn main() -> Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    let paths = AppPaths::new().context("Failed to resolve configuration paths")?;
    let settings = Settings::load_or_create(&paths).context("Failed to load settings")?;

    let status = match cli.command {
        Some(Commands::Report(args)) => handle_report_command(args, &settings)?,
        Some(Commands::Compare(args)) => handle_compare_command(args, &settings)?,
        Some(Commands::Generate(args)) => {
            handle_generate_command(args, &settings)?;
            STATUS_OK
        }
        Some(Commands::Config(args)) => {
            handle_config_command(args, &paths, &settings)?;
            STATUS_OK
        }
        None => run_demo(&settings)?,
    };

    tracing::info!(status, "done");
    Ok(if status == STATUS_OK {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
