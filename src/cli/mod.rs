//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.
//!
//! Report and compare handlers return the status of the service response so
//! the binary can turn it into an exit code; collaborator failures (files,
//! settings, bad arguments) come back as errors instead.

pub mod compare;
pub mod config;
pub mod demo;
pub mod generate;
pub mod report;

pub use compare::{handle_compare_command, CompareArgs};
pub use config::{handle_config_command, ConfigArgs};
pub use demo::run_demo;
pub use generate::{handle_generate_command, GenerateArgs};
pub use report::{handle_report_command, ReportArgs};

use clap::ValueEnum;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::config::Settings;
use crate::error::{ReportError, ReportResult};
use crate::models::RawRecord;
use crate::services::Response;
use crate::source::{generate_records, load_records};

/// Export file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    #[default]
    Json,
    Yaml,
    Csv,
}

/// Records from `path`, or generated from the configured settings
pub fn load_input(path: Option<&Path>, settings: &Settings) -> ReportResult<Vec<RawRecord>> {
    match path {
        Some(path) => {
            let records = load_records(path)?;
            tracing::info!(path = %path.display(), count = records.len(), "loaded records");
            Ok(records)
        }
        None => {
            let records = generate_records(&settings.generator)?;
            tracing::info!(count = records.len(), "generated records");
            Ok(records)
        }
    }
}

/// Open an export target for buffered writing
pub(crate) fn create_export_file(path: &Path) -> ReportResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        ReportError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}

/// Print a failed response to stderr and return its status
pub(crate) fn report_status<T>(response: &Response<T>) -> u16 {
    if let Response::Failure(err) = response {
        eprintln!("Error ({}): {}", err.status(), err);
    }
    response.status()
}

/// Print the serialized response envelope to stdout
pub(crate) fn print_json<T: serde::Serialize>(response: &Response<T>) -> ReportResult<()> {
    println!("{}", serde_json::to_string_pretty(response)?);
    Ok(())
}
