//! Synthetic record generator
//!
//! Produces random but plausible records for demos and manual testing. With a
//! seed the output is reproducible.

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::GeneratorSettings;
use crate::error::{ReportError, ReportResult};
use crate::models::{Category, RawRecord, RecordKind};

/// Generate random raw records according to the settings
///
/// Days are drawn from 1..=28 so every month/day pair is a real date.
/// Income amounts fall in [1000, 5000), expenses in [10, 500).
pub fn generate_records(settings: &GeneratorSettings) -> ReportResult<Vec<RawRecord>> {
    if settings.first_year > settings.last_year {
        return Err(ReportError::Validation(format!(
            "First year {} is after last year {}",
            settings.first_year, settings.last_year
        )));
    }

    let mut rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut records = Vec::with_capacity(settings.count);
    for _ in 0..settings.count {
        let year = rng.gen_range(settings.first_year..=settings.last_year);
        let month = rng.gen_range(1..=12);
        let day = rng.gen_range(1..=28);
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            ReportError::Validation(format!("Year {} is out of range", year))
        })?;

        let kind = RecordKind::ALL[rng.gen_range(0..RecordKind::ALL.len())];
        let amount = match kind {
            RecordKind::Income => rng.gen_range(1000.0..5000.0),
            RecordKind::Expense => rng.gen_range(10.0..500.0),
        };
        let amount = (amount * 100.0_f64).round() / 100.0;
        let category = Category::ALL[rng.gen_range(0..Category::ALL.len())];

        records.push(RawRecord::new(
            format!("{} record - {}", kind, category),
            amount,
            date,
            kind,
            category,
        ));
    }

    tracing::debug!(
        count = records.len(),
        first_year = settings.first_year,
        last_year = settings.last_year,
        "generated synthetic records"
    );

    Ok(records)
}
