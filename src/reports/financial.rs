//! Financial Report
//!
//! Income and expense summary for a half-open period, with the opening
//! balance carried forward from every earlier record.

use serde::Serialize;

use super::aggregate::{aggregate, CategoryAggregate};
use super::validator;
use crate::error::{ReportError, ReportResult};
use crate::models::{Money, Period, RawRecord, Record, RecordKind};

/// Summary of one period
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FinancialReport {
    /// Period covered, `[start, end)`
    pub period: Period,
    /// Net of all records before the period start
    pub opening_balance: Money,
    /// Income inside the period by category
    pub income: CategoryAggregate,
    /// Expenses inside the period by category
    pub expenses: CategoryAggregate,
    /// Opening balance plus income minus expenses
    pub closing_balance: Money,
    /// Closing minus opening balance
    pub net_change: Money,
}

impl FinancialReport {
    /// Generate a report from raw records
    ///
    /// Malformed records are excluded before anything is summed.
    pub fn generate(records: &[RawRecord], period: &Period) -> ReportResult<Self> {
        let records = validator::validated(records);
        Self::from_records(&records, period)
    }

    /// Generate a report from records that already passed validation
    pub fn from_records(records: &[Record], period: &Period) -> ReportResult<Self> {
        if !period.is_ordered() {
            return Err(ReportError::invalid_period(period));
        }

        let in_period: Vec<&Record> = records
            .iter()
            .filter(|r| period.contains(r.date))
            .collect();

        if in_period.is_empty() {
            return Err(ReportError::no_records(period));
        }

        let opening_balance = opening_balance(records, period);
        let income = aggregate(in_period.iter().copied(), RecordKind::Income);
        let expenses = aggregate(in_period.iter().copied(), RecordKind::Expense);

        let closing_balance = opening_balance + income.total() - expenses.total();
        let net_change = closing_balance - opening_balance;

        tracing::debug!(
            period = %period,
            records = in_period.len(),
            opening = %opening_balance,
            closing = %closing_balance,
            "generated financial report"
        );

        Ok(Self {
            period: *period,
            opening_balance,
            income,
            expenses,
            closing_balance,
            net_change,
        })
    }

    /// Total income for the period
    pub fn income_total(&self) -> Money {
        self.income.total()
    }

    /// Total expenses for the period
    pub fn expense_total(&self) -> Money {
        self.expenses.total()
    }
}

/// Net of every record dated strictly before the period start
///
/// Scans the whole history; the period end plays no part.
pub fn opening_balance(records: &[Record], period: &Period) -> Money {
    records
        .iter()
        .filter(|r| period.is_before(r.date))
        .map(Record::signed_amount)
        .sum()
}
