//! Year-over-year comparison
//!
//! Runs the financial report for two full calendar years and reduces the pair
//! into totals deltas, per-category expense differences and a narrative.

use serde::Serialize;
use std::collections::BTreeSet;

use super::financial::FinancialReport;
use super::validator;
use crate::error::{ReportError, ReportResult};
use crate::models::{Category, Money, Period, RawRecord, Record};

/// Expense of one category in both years
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryDifference {
    /// Category compared
    pub category: Category,
    /// Expense in the first year (zero if absent)
    pub year1_amount: Money,
    /// Expense in the second year (zero if absent)
    pub year2_amount: Money,
    /// `year2_amount - year1_amount`
    pub difference: Money,
}

/// Second year minus first year, for the report totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TotalsDifference {
    pub income: Money,
    pub expenses: Money,
    pub closing_balance: Money,
}

/// Comparison of two full calendar years
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearComparison {
    /// Baseline year
    pub year1: i32,
    /// Compared year
    pub year2: i32,
    /// Report for `year1`
    pub report1: FinancialReport,
    /// Report for `year2`
    pub report2: FinancialReport,
    /// Deltas of the totals
    pub differences: TotalsDifference,
    /// Every expense category seen in either year, in declaration order
    pub categories: Vec<CategoryDifference>,
    /// Category with the largest difference, if any expense exists
    pub greatest_difference: Option<CategoryDifference>,
    /// Narrative summary
    pub summary: String,
}

impl YearComparison {
    /// Compare two calendar years of raw records
    ///
    /// Both years must produce a report. An invalid period in either year wins
    /// over a missing-records failure in the other.
    pub fn compare(records: &[RawRecord], year1: i32, year2: i32) -> ReportResult<Self> {
        let records = validator::validated(records);

        let (report1, report2) = match (
            year_report(&records, year1),
            year_report(&records, year2),
        ) {
            (Ok(first), Ok(second)) => (first, second),
            (Err(e), _) if e.is_invalid_period() => return Err(e),
            (_, Err(e)) if e.is_invalid_period() => return Err(e),
            (Err(e), _) | (_, Err(e)) => return Err(e),
        };

        let differences = TotalsDifference {
            income: report2.income_total() - report1.income_total(),
            expenses: report2.expense_total() - report1.expense_total(),
            closing_balance: report2.closing_balance - report1.closing_balance,
        };

        let categories = category_differences(&report1, &report2);
        let greatest_difference = greatest_difference(&categories).cloned();

        let summary = summarize(
            year1,
            year2,
            &differences,
            &categories,
            greatest_difference.as_ref(),
        );

        tracing::debug!(
            year1,
            year2,
            categories = categories.len(),
            "generated year comparison"
        );

        Ok(Self {
            year1,
            year2,
            report1,
            report2,
            differences,
            categories,
            greatest_difference,
            summary,
        })
    }

    /// Categories whose expense went up
    pub fn increased(&self) -> impl Iterator<Item = &CategoryDifference> {
        self.categories.iter().filter(|c| c.difference.is_positive())
    }

    /// Categories whose expense went down
    pub fn decreased(&self) -> impl Iterator<Item = &CategoryDifference> {
        self.categories.iter().filter(|c| c.difference.is_negative())
    }
}

fn year_report(records: &[Record], year: i32) -> ReportResult<FinancialReport> {
    let period =
        Period::year(year).ok_or_else(|| ReportError::invalid_period(format!("year {}", year)))?;
    FinancialReport::from_records(records, &period)
}

/// Expense differences over the union of both years' categories
pub fn category_differences(
    report1: &FinancialReport,
    report2: &FinancialReport,
) -> Vec<CategoryDifference> {
    let union: BTreeSet<Category> = report1
        .expenses
        .categories()
        .chain(report2.expenses.categories())
        .collect();

    union
        .into_iter()
        .map(|category| {
            let year1_amount = report1.expenses.get(category);
            let year2_amount = report2.expenses.get(category);
            CategoryDifference {
                category,
                year1_amount,
                year2_amount,
                difference: year2_amount - year1_amount,
            }
        })
        .collect()
}

/// Entry with the largest difference, even when nothing increased
///
/// Ties go to the alphabetically first category name.
pub fn greatest_difference(categories: &[CategoryDifference]) -> Option<&CategoryDifference> {
    categories.iter().max_by(|a, b| {
        a.difference
            .cmp(&b.difference)
            .then_with(|| b.category.name().cmp(a.category.name()))
    })
}

fn summarize(
    year1: i32,
    year2: i32,
    differences: &TotalsDifference,
    categories: &[CategoryDifference],
    greatest: Option<&CategoryDifference>,
) -> String {
    let mut summary = String::new();

    summary.push_str(&format!(
        "In {}, income changed by {}, expenses by {} and the closing balance by {}.\n",
        year2,
        differences.income.format_signed(),
        differences.expenses.format_signed(),
        differences.closing_balance.format_signed(),
    ));

    match greatest {
        Some(top) => {
            let lead = if top.difference.is_positive() {
                "The category with the greatest increase in expenses was"
            } else {
                "No category increased its expenses; the largest change was"
            };
            summary.push_str(&format!(
                "{} '{}': {} in {} versus {} in {} ({}).\n",
                lead,
                top.category,
                top.year1_amount,
                year1,
                top.year2_amount,
                year2,
                top.difference.format_signed(),
            ));
        }
        None => summary.push_str("No expenses were recorded in either year.\n"),
    }

    summary.push_str("Categories where expenses increased:\n");
    for item in categories.iter().filter(|c| c.difference.is_positive()) {
        summary.push_str(&format!(" - {}: {}\n", item.category, item.difference.format_signed()));
    }

    summary.push_str("Categories where expenses decreased:\n");
    for item in categories.iter().filter(|c| c.difference.is_negative()) {
        summary.push_str(&format!(" - {}: {}\n", item.category, item.difference));
    }

    summary
}
