//! Report formatting for terminal output
//!
//! Renders computed reports and comparisons; nothing here feeds back into the
//! numbers.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Money;
use crate::reports::{CategoryAggregate, FinancialReport, YearComparison};

const WIDTH: usize = 60;

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Share")]
    share: String,
}

#[derive(Tabled)]
struct DifferenceRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Year 1")]
    year1: String,
    #[tabled(rename = "Year 2")]
    year2: String,
    #[tabled(rename = "Change")]
    change: String,
}

/// Share of `part` in `total`, as a percentage
pub fn share_percent(part: Money, total: Money) -> f64 {
    if total.is_zero() {
        0.0
    } else {
        part.cents() as f64 / total.cents() as f64 * 100.0
    }
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

fn aggregate_table(aggregate: &CategoryAggregate, symbol: &str) -> String {
    let rows: Vec<CategoryRow> = aggregate
        .iter()
        .map(|(category, amount)| CategoryRow {
            category: category.to_string(),
            amount: amount.format_with_symbol(symbol),
            share: format_percentage(share_percent(amount, aggregate.total())),
        })
        .collect();

    Table::new(rows).with(Style::rounded()).to_string()
}

/// Format a financial report for terminal display
pub fn format_report(report: &FinancialReport, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Financial Report: {} to {} (end excluded)\n",
        report.period.start, report.period.end
    ));
    output.push_str(&double_separator(WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "{:<20} {:>16}\n",
        "Opening balance:",
        report.opening_balance.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "{:<20} {:>16}\n",
        "Income:",
        report.income_total().format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "{:<20} {:>16}\n",
        "Expenses:",
        report.expense_total().format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "{:<20} {:>16}\n",
        "Closing balance:",
        report.closing_balance.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "{:<20} {:>16}\n",
        "Net change:",
        report.net_change.format_with_symbol(symbol)
    ));

    if !report.income.is_empty() {
        output.push_str("\nIncome by category\n");
        output.push_str(&aggregate_table(&report.income, symbol));
        output.push('\n');
    }

    if !report.expenses.is_empty() {
        output.push_str("\nExpenses by category\n");
        output.push_str(&aggregate_table(&report.expenses, symbol));
        output.push('\n');
    }

    output
}

/// Text rendition of the expense distribution
pub fn format_expense_chart(report: &FinancialReport, width: usize) -> String {
    let expenses = &report.expenses;
    if expenses.is_empty() {
        return "No expenses to display.\n".to_string();
    }

    let mut output = String::from("Expense distribution by category\n");
    output.push_str(&separator(width + 24));
    output.push('\n');

    for (category, amount) in expenses.iter() {
        let pct = share_percent(amount, expenses.total());
        output.push_str(&format!(
            "{:<12} {} {:>7}\n",
            category.name(),
            format_bar(pct, 100.0, width),
            format_percentage(pct)
        ));
    }

    output
}

/// Format a year comparison for terminal display
pub fn format_comparison(comparison: &YearComparison, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Comparison: {} vs {}\n",
        comparison.year1, comparison.year2
    ));
    output.push_str(&double_separator(WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "{:<18} {:>14} {:>14} {:>14}\n",
        "", comparison.year1, comparison.year2, "Change"
    ));

    let lines = [
        (
            "Income",
            comparison.report1.income_total(),
            comparison.report2.income_total(),
            comparison.differences.income,
        ),
        (
            "Expenses",
            comparison.report1.expense_total(),
            comparison.report2.expense_total(),
            comparison.differences.expenses,
        ),
        (
            "Closing balance",
            comparison.report1.closing_balance,
            comparison.report2.closing_balance,
            comparison.differences.closing_balance,
        ),
    ];
    for (label, first, second, change) in lines {
        output.push_str(&format!(
            "{:<18} {:>14} {:>14} {:>14}\n",
            label,
            first.format_with_symbol(symbol),
            second.format_with_symbol(symbol),
            change.format_signed()
        ));
    }

    if !comparison.categories.is_empty() {
        let rows: Vec<DifferenceRow> = comparison
            .categories
            .iter()
            .map(|c| DifferenceRow {
                category: c.category.to_string(),
                year1: c.year1_amount.format_with_symbol(symbol),
                year2: c.year2_amount.format_with_symbol(symbol),
                change: c.difference.format_signed(),
            })
            .collect();
        output.push_str("\nExpenses by category\n");
        output.push_str(&Table::new(rows).with(Style::rounded()).to_string());
        output.push('\n');
    }

    output.push('\n');
    output.push_str(&comparison.summary);

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Period, RawRecord, RecordKind};
    use chrono::NaiveDate;

    fn report(records: &[RawRecord]) -> FinancialReport {
        FinancialReport::generate(records, &Period::year(2021).unwrap()).unwrap()
    }

    fn raw(kind: RecordKind, amount: f64, category: Category) -> RawRecord {
        RawRecord::new(
            "test",
            amount,
            NaiveDate::from_ymd_opt(2021, 5, 1).unwrap(),
            kind,
            category,
        )
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(5.5), "5.5%");
        assert_eq!(format_percentage(50.0), "50%");
    }

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50.0, 100.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
    }

    #[test]
    fn test_share_percent() {
        assert_eq!(
            share_percent(Money::from_cents(25), Money::from_cents(100)),
            25.0
        );
        assert_eq!(share_percent(Money::from_cents(25), Money::zero()), 0.0);
    }

    #[test]
    fn test_chart_without_expenses() {
        let report = report(&[raw(RecordKind::Income, 100.0, Category::Salary)]);
        assert_eq!(format_expense_chart(&report, 20), "No expenses to display.\n");
    }

    #[test]
    fn test_chart_lists_each_category() {
        let report = report(&[
            raw(RecordKind::Expense, 75.0, Category::Food),
            raw(RecordKind::Expense, 25.0, Category::Leisure),
        ]);
        let chart = format_expense_chart(&report, 20);

        assert!(chart.contains("Food"));
        assert!(chart.contains("75%"));
        assert!(chart.contains("Leisure"));
        assert!(chart.contains("25%"));
    }

    #[test]
    fn test_format_report_contains_totals() {
        let report = report(&[
            raw(RecordKind::Income, 1000.0, Category::Salary),
            raw(RecordKind::Expense, 200.0, Category::Food),
        ]);
        let text = format_report(&report, "$");

        assert!(text.contains("Financial Report: 2021-01-01 to 2022-01-01"));
        assert!(text.contains("$1000.00"));
        assert!(text.contains("$800.00"));
        assert!(text.contains("Expenses by category"));
        assert!(text.contains("Food"));
    }
}
