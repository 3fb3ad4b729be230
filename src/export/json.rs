//! JSON Export functionality
//!
//! Writes a computed report or comparison wrapped in a versioned envelope.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::error::{ReportError, ReportResult};
use crate::reports::{FinancialReport, YearComparison};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Envelope around exported content
#[derive(Debug, Clone, Serialize)]
pub struct ExportEnvelope<'a, T: Serialize> {
    /// Schema version for compatibility checking
    pub schema_version: &'static str,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: &'static str,

    /// What kind of document this is ("report" or "comparison")
    pub kind: &'static str,

    /// The exported value
    pub content: &'a T,
}

impl<'a, T: Serialize> ExportEnvelope<'a, T> {
    /// Wrap content stamped with the current time
    pub fn new(kind: &'static str, content: &'a T) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION"),
            kind,
            content,
        }
    }
}

/// Export content to JSON
pub fn export_json<T: Serialize, W: Write>(
    kind: &'static str,
    content: &T,
    writer: &mut W,
    pretty: bool,
) -> ReportResult<()> {
    let envelope = ExportEnvelope::new(kind, content);

    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &envelope)
    } else {
        serde_json::to_writer(&mut *writer, &envelope)
    }
    .map_err(|e| ReportError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| ReportError::Export(e.to_string()))?;
    Ok(())
}

/// Export a period report to JSON
pub fn export_report_json<W: Write>(
    report: &FinancialReport,
    writer: &mut W,
    pretty: bool,
) -> ReportResult<()> {
    export_json("report", report, writer, pretty)
}

/// Export a year comparison to JSON
pub fn export_comparison_json<W: Write>(
    comparison: &YearComparison,
    writer: &mut W,
    pretty: bool,
) -> ReportResult<()> {
    export_json("comparison", comparison, writer, pretty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Period, RawRecord, RecordKind};
    use chrono::NaiveDate;

    #[test]
    fn test_export_report_json() {
        let records = vec![RawRecord::new(
            "rent",
            700.0,
            NaiveDate::from_ymd_opt(2021, 2, 1).unwrap(),
            RecordKind::Expense,
            Category::Housing,
        )];
        let report = FinancialReport::generate(&records, &Period::year(2021).unwrap()).unwrap();

        let mut buffer = Vec::new();
        export_report_json(&report, &mut buffer, true).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["schema_version"], EXPORT_SCHEMA_VERSION);
        assert_eq!(value["kind"], "report");
        assert_eq!(value["content"]["expenses"]["Housing"], 700.0);
        assert_eq!(value["content"]["closing_balance"], -700.0);
        assert_eq!(value["content"]["period"]["start"], "2021-01-01");
    }

    #[test]
    fn test_export_comparison_json_compact() {
        let records: Vec<RawRecord> = [(2021, 100.0), (2022, 250.0)]
            .into_iter()
            .map(|(year, amount)| {
                RawRecord::new(
                    "books",
                    amount,
                    NaiveDate::from_ymd_opt(year, 9, 1).unwrap(),
                    RecordKind::Expense,
                    Category::Education,
                )
            })
            .collect();
        let comparison = YearComparison::compare(&records, 2021, 2022).unwrap();

        let mut buffer = Vec::new();
        export_comparison_json(&comparison, &mut buffer, false).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text.lines().count(), 1);

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["kind"], "comparison");
        assert_eq!(value["content"]["greatest_difference"]["category"], "Education");
        assert_eq!(value["content"]["greatest_difference"]["difference"], 150.0);
    }
}
