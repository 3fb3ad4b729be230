//! YAML Export functionality
//!
//! Same envelope as the JSON export, written as YAML with a header comment.

use serde::Serialize;
use std::io::Write;

use crate::error::{ReportError, ReportResult};
use crate::export::json::ExportEnvelope;
use crate::reports::{FinancialReport, YearComparison};

/// Export content to YAML
pub fn export_yaml<T: Serialize, W: Write>(
    kind: &'static str,
    content: &T,
    writer: &mut W,
) -> ReportResult<()> {
    let envelope = ExportEnvelope::new(kind, content);

    writeln!(writer, "# ledger-report {} export", kind)
        .map_err(|e| ReportError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", envelope.exported_at)
        .map_err(|e| ReportError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| ReportError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &envelope).map_err(|e| ReportError::Export(e.to_string()))?;

    Ok(())
}

/// Export a period report to YAML
pub fn export_report_yaml<W: Write>(report: &FinancialReport, writer: &mut W) -> ReportResult<()> {
    export_yaml("report", report, writer)
}

/// Export a year comparison to YAML
pub fn export_comparison_yaml<W: Write>(
    comparison: &YearComparison,
    writer: &mut W,
) -> ReportResult<()> {
    export_yaml("comparison", comparison, writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, RawRecord, RecordKind};
    use chrono::NaiveDate;

    #[test]
    fn test_export_comparison_yaml() {
        let records: Vec<RawRecord> = [2021, 2022]
            .into_iter()
            .map(|year| {
                RawRecord::new(
                    "bus",
                    30.0,
                    NaiveDate::from_ymd_opt(year, 6, 1).unwrap(),
                    RecordKind::Expense,
                    Category::Transport,
                )
            })
            .collect();
        let comparison = YearComparison::compare(&records, 2021, 2022).unwrap();

        let mut buffer = Vec::new();
        export_comparison_yaml(&comparison, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.starts_with("# ledger-report comparison export"));
        assert!(text.contains("kind: comparison"));
        assert!(text.contains("year1: 2021"));
        assert!(text.contains("category: Transport"));
    }
}
