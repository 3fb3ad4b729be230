//! Transaction records
//!
//! A [`RawRecord`] is what a data source hands over: loosely typed so that
//! malformed rows survive loading and can be excluded later by the validator.
//! A [`Record`] is the typed form the report engine works with.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use super::category::Category;
use super::money::Money;

/// Direction of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    /// Money coming in
    Income,
    /// Money going out
    Expense,
}

impl RecordKind {
    /// Both kinds, income first
    pub const ALL: [RecordKind; 2] = [RecordKind::Income, RecordKind::Expense];

    /// Spelling used in raw records
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(UnknownKind(other.to_string())),
        }
    }
}

/// Error returned for a kind outside the allowed set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown record kind: {0}")]
pub struct UnknownKind(pub String);

/// An unvalidated record as supplied by a data source
///
/// Every field defaults to an empty value, so rows with missing columns still
/// load and are then rejected by validation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawRecord {
    /// Free text
    #[serde(default)]
    pub description: String,

    /// Expected to be a non-negative number
    #[serde(default)]
    pub amount: Value,

    /// Expected to be a `YYYY-MM-DD` date or an ISO date-time string
    #[serde(default)]
    pub date: Value,

    /// Expected to be `income` or `expense`
    #[serde(default)]
    pub kind: Value,

    /// Expected to be one of the fixed category names
    #[serde(default)]
    pub category: Value,
}

impl RawRecord {
    /// Build a well-formed raw record from typed parts
    pub fn new(
        description: impl Into<String>,
        amount: f64,
        date: NaiveDate,
        kind: RecordKind,
        category: Category,
    ) -> Self {
        Self {
            description: description.into(),
            amount: serde_json::Number::from_f64(amount)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            date: Value::String(date.format("%Y-%m-%d").to_string()),
            kind: Value::String(kind.as_str().to_string()),
            category: Value::String(category.name().to_string()),
        }
    }
}

impl From<&Record> for RawRecord {
    fn from(record: &Record) -> Self {
        RawRecord::new(
            record.description.clone(),
            record.amount.to_f64(),
            record.date,
            record.kind,
            record.category,
        )
    }
}

/// A validated transaction record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Free text
    pub description: String,

    /// Non-negative amount
    pub amount: Money,

    /// Calendar date of the transaction
    pub date: NaiveDate,

    /// Income or expense
    pub kind: RecordKind,

    /// Category the amount is booked under
    pub category: Category,
}

impl Record {
    /// Amount with the sign it contributes to a balance
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            RecordKind::Income => self.amount,
            RecordKind::Expense => -self.amount,
        }
    }

    /// Check if this is an income record
    pub fn is_income(&self) -> bool {
        self.kind == RecordKind::Income
    }

    /// Check if this is an expense record
    pub fn is_expense(&self) -> bool {
        self.kind == RecordKind::Expense
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} ({})",
            self.date, self.kind, self.category, self.amount, self.description
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parse() {
        assert_eq!("income".parse::<RecordKind>(), Ok(RecordKind::Income));
        assert_eq!("expense".parse::<RecordKind>(), Ok(RecordKind::Expense));
        assert!("Income".parse::<RecordKind>().is_err());
        assert!("transfer".parse::<RecordKind>().is_err());
    }

    #[test]
    fn test_raw_record_new() {
        let date = NaiveDate::from_ymd_opt(2021, 3, 1).unwrap();
        let raw = RawRecord::new("pay", 1000.0, date, RecordKind::Income, Category::Salary);

        assert_eq!(raw.date, Value::String("2021-03-01".into()));
        assert_eq!(raw.kind, Value::String("income".into()));
        assert_eq!(raw.category, Value::String("Salary".into()));
        assert_eq!(raw.amount.as_f64(), Some(1000.0));
    }

    #[test]
    fn test_raw_record_missing_fields_deserialize() {
        let raw: RawRecord = serde_json::from_str(r#"{"description": "only text"}"#).unwrap();
        assert_eq!(raw.description, "only text");
        assert!(raw.amount.is_null());
        assert!(raw.kind.is_null());
    }

    #[test]
    fn test_signed_amount() {
        let record = Record {
            description: "rent".into(),
            amount: Money::from_cents(50000),
            date: NaiveDate::from_ymd_opt(2021, 1, 5).unwrap(),
            kind: RecordKind::Expense,
            category: Category::Housing,
        };
        assert_eq!(record.signed_amount().cents(), -50000);
        assert!(record.is_expense());
        assert!(!record.is_income());
    }
}
