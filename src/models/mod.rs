//! Core data models for ledger-report
//!
//! Records, categories, money amounts and report periods.

pub mod category;
pub mod money;
pub mod period;
pub mod record;

pub use category::{Category, UnknownCategory};
pub use money::{Money, MAX_CENTS};
pub use period::{parse_date, Period, PeriodParseError};
pub use record::{RawRecord, Record, RecordKind, UnknownKind};
