//! CLI command for period reports

use clap::Args;
use std::io::Write;
use std::path::PathBuf;

use super::{create_export_file, load_input, print_json, report_status, ExportFormat};
use crate::config::Settings;
use crate::display::{ConsolePresenter, Presenter};
use crate::error::{ReportError, ReportResult};
use crate::export::{export_report_csv, export_report_json, export_report_yaml};
use crate::models::{parse_date, Period};
use crate::reports::FinancialReport;
use crate::services::{generate_report_with, Response};

/// Arguments of the `report` command
#[derive(Args, Debug, Default)]
pub struct ReportArgs {
    /// Start date, inclusive (YYYY-MM-DD)
    #[arg(short, long, requires = "end", conflicts_with = "period")]
    pub start: Option<String>,

    /// End date, exclusive (YYYY-MM-DD)
    #[arg(short, long, requires = "start")]
    pub end: Option<String>,

    /// Period to report on: "2021", "2021-03" or "2021-01-01..2021-07-01"
    #[arg(short, long)]
    pub period: Option<String>,

    /// Records file (.json or .csv); generated when omitted
    #[arg(short, long)]
    pub records: Option<PathBuf>,

    /// Export the report to this file
    #[arg(short = 'o', long)]
    pub export: Option<PathBuf>,

    /// Export format
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Json)]
    pub format: ExportFormat,

    /// Print the response as JSON instead of tables
    #[arg(long)]
    pub json: bool,

    /// Do not print the report
    #[arg(short, long)]
    pub quiet: bool,
}

impl ReportArgs {
    /// Resolve the requested period
    ///
    /// A reversed range is passed through unchanged so the report itself
    /// answers with an invalid-period status.
    pub fn resolve_period(&self) -> ReportResult<Period> {
        match (&self.period, &self.start, &self.end) {
            (Some(period), _, _) => Period::parse(period).map_err(|e| {
                ReportError::Validation(format!("{}. Use YYYY, YYYY-MM or START..END", e))
            }),
            (None, Some(start), Some(end)) => {
                let start =
                    parse_date(start).map_err(|e| ReportError::Validation(e.to_string()))?;
                let end = parse_date(end).map_err(|e| ReportError::Validation(e.to_string()))?;
                Ok(Period::new(start, end))
            }
            _ => Err(ReportError::Validation(
                "Provide --period, or both --start and --end".into(),
            )),
        }
    }
}

/// Handle the `report` command
pub fn handle_report_command(args: ReportArgs, settings: &Settings) -> ReportResult<u16> {
    let period = args.resolve_period()?;
    let records = load_input(args.records.as_deref(), settings)?;

    let console = ConsolePresenter::from_settings(settings);
    let presenter = (!args.quiet && !args.json).then_some(&console as &dyn Presenter);
    let response = generate_report_with(&records, period, presenter);

    if args.json {
        print_json(&response)?;
    }

    if let (Response::Success(report), Some(path)) = (&response, &args.export) {
        let mut writer = create_export_file(path)?;
        write_report(report, &mut writer, args.format)?;
        writer.flush()?;
        if !args.quiet {
            println!("Report exported to: {}", path.display());
        }
    }

    Ok(report_status(&response))
}

fn write_report<W: Write>(
    report: &FinancialReport,
    writer: &mut W,
    format: ExportFormat,
) -> ReportResult<()> {
    match format {
        ExportFormat::Json => export_report_json(report, writer, true),
        ExportFormat::Yaml => export_report_yaml(report, writer),
        ExportFormat::Csv => export_report_csv(report, writer),
    }
}
