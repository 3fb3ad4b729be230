//! Record validation
//!
//! Decides whether a raw record is well-formed. Malformed records are never an
//! error: they are dropped here and never reach aggregation.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

use crate::models::{Category, Money, RawRecord, Record, RecordKind};

/// Check whether a raw record is well-formed
///
/// True iff the kind and category are in their allowed sets, the amount is a
/// finite non-negative number and the date is a real calendar date.
pub fn validate(raw: &RawRecord) -> bool {
    to_record(raw).is_some()
}

/// Convert a raw record into a typed one, or `None` if it is malformed
pub fn to_record(raw: &RawRecord) -> Option<Record> {
    let kind: RecordKind = raw.kind.as_str()?.parse().ok()?;
    let category: Category = raw.category.as_str()?.parse().ok()?;
    let amount = parse_amount(&raw.amount)?;
    let date = parse_record_date(raw.date.as_str()?)?;

    Some(Record {
        description: raw.description.clone(),
        amount,
        date,
        kind,
        category,
    })
}

/// Keep only the well-formed records, converted
pub fn validated(records: &[RawRecord]) -> Vec<Record> {
    let valid: Vec<Record> = records.iter().filter_map(to_record).collect();

    let excluded = records.len() - valid.len();
    if excluded > 0 {
        tracing::debug!(excluded, total = records.len(), "excluded malformed records");
    }

    valid
}

/// Amounts must be JSON numbers; numeric strings do not count
fn parse_amount(value: &Value) -> Option<Money> {
    let amount = match value {
        Value::Number(n) => n.as_f64()?,
        _ => return None,
    };
    if amount < 0.0 {
        return None;
    }
    Money::from_f64(amount)
}

/// Accepts `YYYY-MM-DD`, a naive ISO date-time, or RFC 3339; the time is dropped
fn parse_record_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(datetime) = s.parse::<NaiveDateTime>() {
        return Some(datetime.date());
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(datetime.date());
    }
    DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive())
}
