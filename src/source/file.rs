//! Record files
//!
//! Reads and writes raw records as a JSON array or as CSV with the header
//! `description,amount,date,kind,category`. Loading is tolerant: a row with
//! bad values still loads and is left for the validator to exclude.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::error::{ReportError, ReportResult};
use crate::models::RawRecord;

/// Supported record file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    Json,
    Csv,
}

impl RecordFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> ReportResult<Self> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => Ok(Self::Json),
            Some("csv") => Ok(Self::Csv),
            _ => Err(ReportError::Validation(format!(
                "Unsupported records file: {}. Use a .json or .csv file",
                path.display()
            ))),
        }
    }
}

/// One CSV row; every cell is text
#[derive(Debug, Default, Serialize, Deserialize)]
struct CsvRow {
    #[serde(default)]
    description: String,
    #[serde(default)]
    amount: String,
    #[serde(default)]
    date: String,
    #[serde(default)]
    kind: String,
    #[serde(default)]
    category: String,
}

impl From<CsvRow> for RawRecord {
    fn from(row: CsvRow) -> Self {
        // CSV has no number type, so numeric text counts as a number
        let amount = row
            .amount
            .trim()
            .parse::<f64>()
            .ok()
            .and_then(serde_json::Number::from_f64)
            .map(Value::Number)
            .unwrap_or(Value::String(row.amount));

        RawRecord {
            description: row.description,
            amount,
            date: Value::String(row.date),
            kind: Value::String(row.kind),
            category: Value::String(row.category),
        }
    }
}

impl From<&RawRecord> for CsvRow {
    fn from(record: &RawRecord) -> Self {
        CsvRow {
            description: record.description.clone(),
            amount: cell(&record.amount),
            date: cell(&record.date),
            kind: cell(&record.kind),
            category: cell(&record.category),
        }
    }
}

fn cell(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Load records from a file, picking the format from its extension
pub fn load_records(path: &Path) -> ReportResult<Vec<RawRecord>> {
    let format = RecordFormat::from_path(path)?;
    let file = File::open(path).map_err(|e| {
        ReportError::Io(format!("Failed to open {}: {}", path.display(), e))
    })?;
    let reader = BufReader::new(file);

    let records = match format {
        RecordFormat::Json => read_json(reader)?,
        RecordFormat::Csv => read_csv(reader)?,
    };

    tracing::debug!(path = %path.display(), count = records.len(), "loaded records");
    Ok(records)
}

/// Save records to a file, picking the format from its extension
pub fn save_records(path: &Path, records: &[RawRecord]) -> ReportResult<()> {
    let format = RecordFormat::from_path(path)?;
    let file = File::create(path).map_err(|e| {
        ReportError::Io(format!("Failed to create {}: {}", path.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    match format {
        RecordFormat::Json => write_json(&mut writer, records)?,
        RecordFormat::Csv => write_csv(&mut writer, records)?,
    }

    writer.flush()?;
    Ok(())
}

/// Read a JSON array of raw records
pub fn read_json<R: Read>(reader: R) -> ReportResult<Vec<RawRecord>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Read CSV rows as raw records
pub fn read_csv<R: Read>(reader: R) -> ReportResult<Vec<RawRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for row in csv_reader.deserialize::<CsvRow>() {
        records.push(row?.into());
    }
    Ok(records)
}

/// Write raw records as a pretty JSON array
pub fn write_json<W: Write>(writer: &mut W, records: &[RawRecord]) -> ReportResult<()> {
    serde_json::to_writer_pretty(&mut *writer, records)?;
    writeln!(writer)?;
    Ok(())
}

/// Write raw records as CSV
pub fn write_csv<W: Write>(writer: &mut W, records: &[RawRecord]) -> ReportResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in records {
        csv_writer.serialize(CsvRow::from(record))?;
    }
    csv_writer.flush()?;
    Ok(())
}
