//! Display formatting for terminal output
//!
//! The presentation side of the crate. A [`Presenter`] receives reports that
//! are already computed; the service layer calls it only when console output
//! is requested.

pub mod report;

pub use report::{format_comparison, format_expense_chart, format_report};

use crate::config::Settings;
use crate::reports::{FinancialReport, YearComparison};

/// Consumer of computed reports
pub trait Presenter {
    /// Show a period report
    fn present_report(&self, report: &FinancialReport);

    /// Show a year comparison
    fn present_comparison(&self, comparison: &YearComparison);
}

/// Prints reports to stdout, with the expense chart after a period report
#[derive(Debug, Clone)]
pub struct ConsolePresenter {
    currency_symbol: String,
    chart_width: usize,
}

impl ConsolePresenter {
    /// Create a presenter with an explicit currency symbol and chart width
    pub fn new(currency_symbol: impl Into<String>, chart_width: usize) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
            chart_width,
        }
    }

    /// Create a presenter from user settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.currency_symbol.clone(), settings.chart_width)
    }
}

impl Default for ConsolePresenter {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl Presenter for ConsolePresenter {
    fn present_report(&self, report: &FinancialReport) {
        println!("{}", format_report(report, &self.currency_symbol));
        println!("{}", format_expense_chart(report, self.chart_width));
    }

    fn present_comparison(&self, comparison: &YearComparison) {
        println!("{}", format_comparison(comparison, &self.currency_symbol));
    }
}
