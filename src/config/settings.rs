//! User settings for ledger-report
//!
//! Display preferences and the defaults used by the synthetic record
//! generator. Every field has a default, so partial files load.

use serde::{Deserialize, Serialize};

use super::paths::AppPaths;
use crate::error::ReportError;

/// Synthetic record generator settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorSettings {
    /// Number of records to generate
    #[serde(default = "default_count")]
    pub count: usize,

    /// First year of the random date range (inclusive)
    #[serde(default = "default_first_year")]
    pub first_year: i32,

    /// Last year of the random date range (inclusive)
    #[serde(default = "default_last_year")]
    pub last_year: i32,

    /// Fixed seed for reproducible output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_count() -> usize {
    30
}

fn default_first_year() -> i32 {
    2020
}

fn default_last_year() -> i32 {
    2024
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            count: default_count(),
            first_year: default_first_year(),
            last_year: default_last_year(),
            seed: None,
        }
    }
}

/// User settings for ledger-report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in console output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Bar width of the expense chart
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,

    /// Synthetic data defaults
    #[serde(default)]
    pub generator: GeneratorSettings,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_chart_width() -> usize {
    40
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            chart_width: default_chart_width(),
            generator: GeneratorSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use default settings if the file doesn't exist
    pub fn load_or_create(paths: &AppPaths) -> Result<Self, ReportError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                ReportError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ReportError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            tracing::debug!(path = %settings_path.display(), "no settings file, using defaults");
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &AppPaths) -> Result<(), ReportError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            ReportError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            ReportError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
