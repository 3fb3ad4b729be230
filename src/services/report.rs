//! Report service
//!
//! The two operations callers use: a period report and a year comparison.
//! Both return a [`Response`] that carries either the computed value or the
//! error with its status code, and hand the value to a presenter only after it
//! has been computed.

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::display::{ConsolePresenter, Presenter};
use crate::error::{ReportError, ReportResult};
use crate::models::{Period, RawRecord};
use crate::reports::{FinancialReport, YearComparison};

/// Status code of a successful response
pub const STATUS_OK: u16 = 200;

/// Outcome of a service call
///
/// Serializes as `{"status": <code>, "content": <value or message>}`.
#[derive(Debug)]
pub enum Response<T> {
    /// The computed value
    Success(T),
    /// Why nothing was computed
    Failure(ReportError),
}

impl<T> Response<T> {
    /// 200 on success, otherwise the error's status
    pub fn status(&self) -> u16 {
        match self {
            Self::Success(_) => STATUS_OK,
            Self::Failure(err) => err.status(),
        }
    }

    /// Check if the call succeeded
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Error message, if the call failed
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Success(_) => None,
            Self::Failure(err) => Some(err.to_string()),
        }
    }

    /// Borrow the computed value
    pub fn content(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Convert back into a plain result
    pub fn into_result(self) -> ReportResult<T> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(err) => Err(err),
        }
    }
}

impl<T> From<ReportResult<T>> for Response<T> {
    fn from(result: ReportResult<T>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(err) => Self::Failure(err),
        }
    }
}

impl<T: Serialize> Serialize for Response<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Response", 2)?;
        state.serialize_field("status", &self.status())?;
        match self {
            Self::Success(value) => state.serialize_field("content", value)?,
            Self::Failure(err) => state.serialize_field("content", &err.to_string())?,
        }
        state.end()
    }
}

/// Generate a report for a period, optionally printing it to the console
pub fn generate_report(
    records: &[RawRecord],
    period: Period,
    emit_console: bool,
) -> Response<FinancialReport> {
    let console = ConsolePresenter::default();
    generate_report_with(records, period, emit_console.then_some(&console as &dyn Presenter))
}

/// Generate a report for a period, handing it to `presenter` on success
pub fn generate_report_with(
    records: &[RawRecord],
    period: Period,
    presenter: Option<&dyn Presenter>,
) -> Response<FinancialReport> {
    let result = FinancialReport::generate(records, &period);

    match &result {
        Ok(report) => {
            if let Some(presenter) = presenter {
                presenter.present_report(report);
            }
        }
        Err(err) => tracing::debug!(%period, status = err.status(), "report failed: {}", err),
    }

    result.into()
}

/// Compare two calendar years, optionally printing the comparison
pub fn compare_years(
    records: &[RawRecord],
    year1: i32,
    year2: i32,
    emit_console: bool,
) -> Response<YearComparison> {
    let console = ConsolePresenter::default();
    compare_years_with(
        records,
        year1,
        year2,
        emit_console.then_some(&console as &dyn Presenter),
    )
}

/// Compare two calendar years, handing the result to `presenter` on success
pub fn compare_years_with(
    records: &[RawRecord],
    year1: i32,
    year2: i32,
    presenter: Option<&dyn Presenter>,
) -> Response<YearComparison> {
    let result = YearComparison::compare(records, year1, year2);

    match &result {
        Ok(comparison) => {
            if let Some(presenter) = presenter {
                presenter.present_comparison(comparison);
            }
        }
        Err(err) => {
            tracing::debug!(year1, year2, status = err.status(), "comparison failed: {}", err)
        }
    }

    result.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money, RecordKind};
    use chrono::NaiveDate;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingPresenter {
        reports: RefCell<Vec<FinancialReport>>,
        comparisons: RefCell<usize>,
    }

    impl Presenter for RecordingPresenter {
        fn present_report(&self, report: &FinancialReport) {
            self.reports.borrow_mut().push(report.clone());
        }

        fn present_comparison(&self, _comparison: &YearComparison) {
            *self.comparisons.borrow_mut() += 1;
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn records() -> Vec<RawRecord> {
        vec![
            RawRecord::new("pay", 1000.0, date(2021, 3, 1), RecordKind::Income, Category::Salary),
            RawRecord::new("food", 200.0, date(2021, 3, 15), RecordKind::Expense, Category::Food),
            RawRecord::new("food", 300.0, date(2021, 4, 15), RecordKind::Expense, Category::Food),
            RawRecord::new("pay", 1000.0, date(2022, 3, 1), RecordKind::Income, Category::Salary),
        ]
    }

    #[test]
    fn test_success_response() {
        let response = generate_report(&records(), Period::year(2021).unwrap(), false);

        assert_eq!(response.status(), 200);
        assert!(response.is_success());
        assert!(response.message().is_none());
        let report = response.content().unwrap();
        assert_eq!(report.closing_balance, Money::from_cents(50000));
    }

    #[test]
    fn test_invalid_period_response() {
        let period = Period::new(date(2022, 1, 1), date(2021, 1, 1));
        let response = generate_report(&records(), period, false);

        assert_eq!(response.status(), 400);
        assert_eq!(response.message().as_deref(), Some("Invalid period."));
        assert!(response.content().is_none());
    }

    #[test]
    fn test_no_records_response() {
        let response = generate_report(&records(), Period::year(2030).unwrap(), false);
        assert_eq!(response.status(), 404);
        assert_eq!(response.message().as_deref(), Some("No records found"));
    }

    #[test]
    fn test_presenter_sees_computed_report() {
        let presenter = RecordingPresenter::default();
        let period = Period::year(2021).unwrap();

        let shown = generate_report_with(&records(), period, Some(&presenter));
        let silent = generate_report_with(&records(), period, None);

        assert_eq!(shown.content(), silent.content());
        assert_eq!(presenter.reports.borrow().len(), 1);
        assert_eq!(Some(&presenter.reports.borrow()[0]), silent.content());
    }

    #[test]
    fn test_presenter_not_called_on_failure() {
        let presenter = RecordingPresenter::default();
        let response = compare_years_with(&records(), 2021, 2025, Some(&presenter));

        assert_eq!(response.status(), 404);
        assert_eq!(*presenter.comparisons.borrow(), 0);
    }

    #[test]
    fn test_compare_years_response() {
        let presenter = RecordingPresenter::default();
        let response = compare_years_with(&records(), 2021, 2022, Some(&presenter));

        assert_eq!(response.status(), 200);
        assert_eq!(*presenter.comparisons.borrow(), 1);

        let comparison = response.into_result().unwrap();
        let food = &comparison.categories[0];
        assert_eq!(food.category, Category::Food);
        assert_eq!(food.difference, Money::from_cents(-50000));
        assert_eq!(comparison.decreased().count(), 1);
        assert_eq!(comparison.increased().count(), 0);
    }

    #[test]
    fn test_many_large_records_succeed() {
        let records: Vec<RawRecord> = (0..1100)
            .map(|_| {
                RawRecord::new("big", 8.9e13, date(2021, 3, 1), RecordKind::Income, Category::Salary)
            })
            .collect();

        let response = generate_report(&records, Period::year(2021).unwrap(), false);

        assert_eq!(response.status(), 200);
        let report = response.content().unwrap();
        assert_eq!(report.closing_balance, Money::from_cents(1100 * 8_900_000_000_000_000));
    }

    #[test]
    fn test_response_serialization() {
        let period = Period::new(date(2022, 1, 1), date(2021, 1, 1));
        let failure = generate_report(&records(), period, false);
        assert_eq!(
            serde_json::to_value(&failure).unwrap(),
            serde_json::json!({"status": 400, "content": "Invalid period."})
        );

        let success = generate_report(&records(), Period::year(2021).unwrap(), false);
        let json = serde_json::to_value(&success).unwrap();
        assert_eq!(json["status"], 200);
        assert_eq!(json["content"]["closing_balance"], 500.0);
        assert_eq!(json["content"]["expenses"]["total"], 500.0);
        assert_eq!(json["content"]["expenses"]["Food"], 500.0);
    }
}
