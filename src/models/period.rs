//! Report period representation
//!
//! A period is the half-open interval `[start, end)`. Construction never
//! checks ordering: a reversed period is a valid value that report generation
//! rejects with `InvalidPeriod`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Half-open date interval used to select records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    /// First day included
    pub start: NaiveDate,
    /// First day excluded
    pub end: NaiveDate,
}

impl Period {
    /// Create a period from its bounds
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Full calendar year: `[Jan 1 year, Jan 1 year+1)`
    ///
    /// Returns `None` when either bound is outside the supported date range.
    pub fn year(year: i32) -> Option<Self> {
        let start = NaiveDate::from_ymd_opt(year, 1, 1)?;
        let end = NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)?;
        Some(Self { start, end })
    }

    /// Full calendar month: `[first of month, first of next month)`
    pub fn month(year: i32, month: u32) -> Option<Self> {
        let start = NaiveDate::from_ymd_opt(year, month, 1)?;
        let end = if month == 12 {
            NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)?
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)?
        };
        Some(Self { start, end })
    }

    /// Check that the start does not come after the end
    pub fn is_ordered(&self) -> bool {
        self.start <= self.end
    }

    /// Check if a date falls within this period
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }

    /// Check if a date comes strictly before this period
    pub fn is_before(&self, date: NaiveDate) -> bool {
        date < self.start
    }

    /// Parse a period string
    ///
    /// Formats:
    /// - Year: "2021"
    /// - Monthly: "2021-03"
    /// - Custom: "2021-01-01..2021-07-01"
    pub fn parse(s: &str) -> Result<Self, PeriodParseError> {
        let s = s.trim();

        // Custom range format (contains ..)
        if let Some((start, end)) = s.split_once("..") {
            let start = parse_date(start.trim())?;
            let end = parse_date(end.trim())?;
            return Ok(Self { start, end });
        }

        let parts: Vec<&str> = s.split('-').collect();
        match parts.as_slice() {
            [year] => {
                let year: i32 = year
                    .parse()
                    .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;
                Self::year(year).ok_or(PeriodParseError::OutOfRange(s.to_string()))
            }
            [year, month] => {
                let year: i32 = year
                    .parse()
                    .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;
                let month: u32 = month
                    .parse()
                    .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;

                if !(1..=12).contains(&month) {
                    return Err(PeriodParseError::InvalidMonth(month));
                }

                Self::month(year, month).ok_or(PeriodParseError::OutOfRange(s.to_string()))
            }
            _ => Err(PeriodParseError::InvalidFormat(s.to_string())),
        }
    }
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(s: &str) -> Result<NaiveDate, PeriodParseError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| PeriodParseError::InvalidDate(s.to_string()))
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..{}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}

/// Error type for period parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodParseError {
    InvalidFormat(String),
    InvalidDate(String),
    InvalidMonth(u32),
    OutOfRange(String),
}

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodParseError::InvalidFormat(s) => write!(f, "Invalid period format: {}", s),
            PeriodParseError::InvalidDate(s) => {
                write!(f, "Invalid date: {}. Use YYYY-MM-DD", s)
            }
            PeriodParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
            PeriodParseError::OutOfRange(s) => write!(f, "Period out of range: {}", s),
        }
    }
}

impl std::error::Error for PeriodParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_year_period() {
        let period = Period::year(2021).unwrap();
        assert_eq!(period.start, date(2021, 1, 1));
        assert_eq!(period.end, date(2022, 1, 1));
        assert!(period.contains(date(2021, 12, 31)));
        assert!(!period.contains(date(2022, 1, 1)));
    }

    #[test]
    fn test_year_out_of_range() {
        assert!(Period::year(i32::MAX).is_none());
    }

    #[test]
    fn test_month_period() {
        let dec = Period::month(2024, 12).unwrap();
        assert_eq!(dec.start, date(2024, 12, 1));
        assert_eq!(dec.end, date(2025, 1, 1));

        let feb = Period::month(2024, 2).unwrap();
        assert_eq!(feb.end, date(2024, 3, 1));
    }

    #[test]
    fn test_half_open_bounds() {
        let period = Period::new(date(2021, 1, 1), date(2021, 2, 1));
        assert!(period.contains(date(2021, 1, 1)));
        assert!(!period.contains(date(2021, 2, 1)));
        assert!(period.is_before(date(2020, 12, 31)));
        assert!(!period.is_before(date(2021, 1, 1)));
    }

    #[test]
    fn test_empty_and_reversed() {
        let empty = Period::new(date(2021, 1, 1), date(2021, 1, 1));
        assert!(empty.is_ordered());
        assert!(!empty.contains(date(2021, 1, 1)));

        let reversed = Period::new(date(2022, 1, 1), date(2021, 1, 1));
        assert!(!reversed.is_ordered());
    }

    #[test]
    fn test_parse_formats() {
        assert_eq!(Period::parse("2021").unwrap(), Period::year(2021).unwrap());
        assert_eq!(
            Period::parse("2021-03").unwrap(),
            Period::month(2021, 3).unwrap()
        );
        assert_eq!(
            Period::parse("2021-01-01..2021-07-01").unwrap(),
            Period::new(date(2021, 1, 1), date(2021, 7, 1))
        );
    }

    #[test]
    fn test_parse_keeps_reversed_range() {
        let period = Period::parse("2022-01-01..2021-01-01").unwrap();
        assert!(!period.is_ordered());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            Period::parse("2021-13"),
            Err(PeriodParseError::InvalidMonth(13))
        );
        assert!(matches!(
            Period::parse("2021-02-30..2021-03-01"),
            Err(PeriodParseError::InvalidDate(_))
        ));
        assert!(matches!(
            Period::parse("last year"),
            Err(PeriodParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_display() {
        let period = Period::year(2021).unwrap();
        assert_eq!(period.to_string(), "2021-01-01..2022-01-01");
    }
}
