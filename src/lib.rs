//! ledger-report - Period reports and year comparisons for financial records
//!
//! This library turns a list of income and expense records into a report for
//! a half-open date period (opening balance, per-category income and
//! expenses, closing balance) and compares two calendar years category by
//! category.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Money, categories, records and periods
//! - `reports`: Validation, aggregation, period reports and year comparisons
//! - `services`: Status-tagged operations for callers
//! - `display`: Terminal formatting and the presenter abstraction
//! - `export`: JSON, YAML and CSV exporters
//! - `source`: Record files and the synthetic record generator
//! - `config`: Configuration and path management
//! - `cli`: Command handlers for the binary
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use ledger_report::models::{Category, Period, RawRecord, RecordKind};
//! use ledger_report::services::generate_report;
//!
//! let date = NaiveDate::from_ymd_opt(2021, 5, 1).unwrap();
//! let records = vec![
//!     RawRecord::new("pay", 1000.0, date, RecordKind::Income, Category::Salary),
//!     RawRecord::new("rent", 400.0, date, RecordKind::Expense, Category::Housing),
//! ];
//!
//! let response = generate_report(&records, Period::year(2021).unwrap(), false);
//! assert_eq!(response.status(), 200);
//! assert_eq!(response.content().unwrap().closing_balance.to_string(), "600.00");
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod source;

pub use error::{ReportError, ReportResult};
