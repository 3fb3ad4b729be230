//! Run with no command: a report and a comparison over generated records

use chrono::NaiveDate;

use super::report_status;
use crate::config::Settings;
use crate::display::{ConsolePresenter, Presenter};
use crate::error::{ReportError, ReportResult};
use crate::models::Period;
use crate::services::{compare_years_with, generate_report_with, STATUS_OK};
use crate::source::generate_records;

/// Years compared by the demo
pub const DEMO_YEARS: (i32, i32) = (2022, 2024);

/// Period covered by the demo report, `[2020-01-01, 2023-01-01)`
pub fn demo_period() -> ReportResult<Period> {
    let start = NaiveDate::from_ymd_opt(2020, 1, 1);
    let end = NaiveDate::from_ymd_opt(2023, 1, 1);
    match (start, end) {
        (Some(start), Some(end)) => Ok(Period::new(start, end)),
        _ => Err(ReportError::Validation("Invalid demo period".into())),
    }
}

/// Generate records from the settings, print a report and a comparison
///
/// Returns the first non-200 status, or 200 when both succeed.
pub fn run_demo(settings: &Settings) -> ReportResult<u16> {
    let records = generate_records(&settings.generator)?;
    tracing::info!(count = records.len(), "running demo on generated records");

    let console = ConsolePresenter::from_settings(settings);
    let presenter = Some(&console as &dyn Presenter);

    let report = generate_report_with(&records, demo_period()?, presenter);
    let first = report_status(&report);

    println!();
    let (year1, year2) = DEMO_YEARS;
    let comparison = compare_years_with(&records, year1, year2, presenter);
    let second = report_status(&comparison);

    Ok(if first != STATUS_OK { first } else { second })
}
