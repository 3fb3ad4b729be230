//! Export functionality for ledger-report
//!
//! Writes computed reports and comparisons to JSON, YAML or CSV. Every
//! exporter takes any `Write`, so callers decide between files, stdout or
//! in-memory buffers.

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{export_comparison_csv, export_report_csv};
pub use json::{
    export_comparison_json, export_json, export_report_json, ExportEnvelope,
    EXPORT_SCHEMA_VERSION,
};
pub use yaml::{export_comparison_yaml, export_report_yaml, export_yaml};
