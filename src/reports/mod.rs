//! Reports module for ledger-report
//!
//! The report engine: record validation, per-category aggregation, period
//! reports with carried-forward balances, and year-over-year comparisons.

pub mod aggregate;
pub mod comparison;
pub mod financial;
pub mod validator;

pub use aggregate::{aggregate, CategoryAggregate};
pub use comparison::{CategoryDifference, TotalsDifference, YearComparison};
pub use financial::FinancialReport;
pub use validator::{validate, validated};
