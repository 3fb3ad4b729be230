//! Service layer for ledger-report
//!
//! Wraps the report engine into the status-tagged operations exposed to
//! callers (the CLI, tests, or an embedding service).

pub mod report;

pub use report::{
    compare_years, compare_years_with, generate_report, generate_report_with, Response,
    STATUS_OK,
};
