//! CLI command for year-over-year comparisons

use clap::Args;
use std::io::Write;
use std::path::PathBuf;

use super::{create_export_file, load_input, print_json, report_status, ExportFormat};
use crate::config::Settings;
use crate::display::{ConsolePresenter, Presenter};
use crate::error::ReportResult;
use crate::export::{export_comparison_csv, export_comparison_json, export_comparison_yaml};
use crate::reports::YearComparison;
use crate::services::{compare_years_with, Response};

/// Arguments of the `compare` command
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Earlier year
    #[arg(allow_negative_numbers = true)]
    pub year1: i32,

    /// Later year
    #[arg(allow_negative_numbers = true)]
    pub year2: i32,

    /// Records file (.json or .csv); generated when omitted
    #[arg(short, long)]
    pub records: Option<PathBuf>,

    /// Export the comparison to this file
    #[arg(short = 'o', long)]
    pub export: Option<PathBuf>,

    /// Export format
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Json)]
    pub format: ExportFormat,

    /// Print the response as JSON instead of the summary
    #[arg(long)]
    pub json: bool,

    /// Do not print the comparison
    #[arg(short, long)]
    pub quiet: bool,
}

/// Handle the `compare` command
pub fn handle_compare_command(args: CompareArgs, settings: &Settings) -> ReportResult<u16> {
    let records = load_input(args.records.as_deref(), settings)?;

    let console = ConsolePresenter::from_settings(settings);
    let presenter = (!args.quiet && !args.json).then_some(&console as &dyn Presenter);
    let response = compare_years_with(&records, args.year1, args.year2, presenter);

    if args.json {
        print_json(&response)?;
    }

    if let (Response::Success(comparison), Some(path)) = (&response, &args.export) {
        let mut writer = create_export_file(path)?;
        write_comparison(comparison, &mut writer, args.format)?;
        writer.flush()?;
        if !args.quiet {
            println!("Comparison exported to: {}", path.display());
        }
    }

    Ok(report_status(&response))
}

fn write_comparison<W: Write>(
    comparison: &YearComparison,
    writer: &mut W,
    format: ExportFormat,
) -> ReportResult<()> {
    match format {
        ExportFormat::Json => export_comparison_json(comparison, writer, true),
        ExportFormat::Yaml => export_comparison_yaml(comparison, writer),
        ExportFormat::Csv => export_comparison_csv(comparison, writer),
    }
}
