//! CSV Export functionality
//!
//! Flat, spreadsheet-friendly rows for reports and comparisons.

use std::io::Write;

use crate::error::ReportResult;
use crate::models::Money;
use crate::reports::{FinancialReport, YearComparison};

/// Export a report as `Start,End,Line,Category,Amount` rows
///
/// Balance lines have an empty category; each kind gets one row per category
/// and a `total` row.
pub fn export_report_csv<W: Write>(report: &FinancialReport, writer: &mut W) -> ReportResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["Start", "End", "Line", "Category", "Amount"])?;

    let start = report.period.start.to_string();
    let end = report.period.end.to_string();

    let mut rows: Vec<(&str, &str, Money)> =
        vec![("opening_balance", "", report.opening_balance)];
    for (line, aggregate) in [("income", &report.income), ("expense", &report.expenses)] {
        rows.extend(aggregate.iter().map(|(category, amount)| (line, category.name(), amount)));
        rows.push((line, "total", aggregate.total()));
    }
    rows.push(("closing_balance", "", report.closing_balance));
    rows.push(("net_change", "", report.net_change));

    for (line, category, amount) in rows {
        let amount = amount.to_string();
        csv_writer.write_record([
            start.as_str(),
            end.as_str(),
            line,
            category,
            amount.as_str(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Export per-category expense differences of a comparison
pub fn export_comparison_csv<W: Write>(
    comparison: &YearComparison,
    writer: &mut W,
) -> ReportResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    let year1 = comparison.year1.to_string();
    let year2 = comparison.year2.to_string();
    csv_writer.write_record(["Category", year1.as_str(), year2.as_str(), "Difference"])?;

    for item in &comparison.categories {
        csv_writer.write_record(&[
            item.category.name().to_string(),
            item.year1_amount.to_string(),
            item.year2_amount.to_string(),
            item.difference.to_string(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Period, RawRecord, RecordKind};
    use chrono::NaiveDate;

    fn raw(kind: RecordKind, amount: f64, year: i32, category: Category) -> RawRecord {
        RawRecord::new(
            "test",
            amount,
            NaiveDate::from_ymd_opt(year, 3, 1).unwrap(),
            kind,
            category,
        )
    }

    #[test]
    fn test_export_report_csv() {
        let records = vec![
            raw(RecordKind::Income, 1000.0, 2021, Category::Salary),
            raw(RecordKind::Expense, 200.0, 2021, Category::Food),
        ];
        let report = FinancialReport::generate(&records, &Period::year(2021).unwrap()).unwrap();

        let mut buffer = Vec::new();
        export_report_csv(&report, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Start,End,Line,Category,Amount");
        assert_eq!(lines[1], "2021-01-01,2022-01-01,opening_balance,,0.00");
        assert!(lines.contains(&"2021-01-01,2022-01-01,income,Salary,1000.00"));
        assert!(lines.contains(&"2021-01-01,2022-01-01,expense,total,200.00"));
        assert_eq!(lines.last(), Some(&"2021-01-01,2022-01-01,net_change,,800.00"));
    }

    #[test]
    fn test_export_comparison_csv() {
        let records = vec![
            raw(RecordKind::Expense, 300.0, 2021, Category::Food),
            raw(RecordKind::Income, 100.0, 2022, Category::Salary),
        ];
        let comparison = YearComparison::compare(&records, 2021, 2022).unwrap();

        let mut buffer = Vec::new();
        export_comparison_csv(&comparison, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert_eq!(text, "Category,2021,2022,Difference\nFood,300.00,0.00,-300.00\n");
    }
}
