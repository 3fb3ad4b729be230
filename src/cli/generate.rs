//! CLI command for synthetic record files

use clap::Args;
use std::path::PathBuf;

use crate::config::Settings;
use crate::error::ReportResult;
use crate::source::{generate_records, save_records};

/// Arguments of the `generate` command
///
/// Unset options fall back to the generator section of the settings file.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Number of records
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// First year of the date range
    #[arg(long)]
    pub from_year: Option<i32>,

    /// Last year of the date range
    #[arg(long)]
    pub to_year: Option<i32>,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output file (.json or .csv)
    #[arg(short, long)]
    pub output: PathBuf,
}

/// Handle the `generate` command
pub fn handle_generate_command(args: GenerateArgs, settings: &Settings) -> ReportResult<()> {
    let mut generator = settings.generator.clone();
    if let Some(count) = args.count {
        generator.count = count;
    }
    if let Some(year) = args.from_year {
        generator.first_year = year;
    }
    if let Some(year) = args.to_year {
        generator.last_year = year;
    }
    if args.seed.is_some() {
        generator.seed = args.seed;
    }

    let records = generate_records(&generator)?;
    save_records(&args.output, &records)?;

    println!("Wrote {} records to: {}", records.len(), args.output.display());
    Ok(())
}
