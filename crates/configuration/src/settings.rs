use crate::error::ConfigError;
use chrono::NaiveDate;
use serde::Deserialize;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub dataset: DatasetConfig,
    pub display: DisplayConfig,
}

/// Parameters of the synthetic daily sales dataset.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Seed of the pseudorandom generator. Same seed, same dataset.
    pub seed: u64,
    /// First day of the generated span (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the generated span (inclusive).
    pub end_date: NaiveDate,
    /// Mean of the normal distribution daily sales are drawn from.
    pub sales_mean: f64,
    /// Standard deviation of that distribution. Must be positive.
    pub sales_std_dev: f64,
}

/// Settings of the presentation surface.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Rows shown by the raw-data preview table.
    pub preview_limit: usize,
}

/// Command-line overrides applied on top of the loaded file.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "clap", derive(clap::Args))]
pub struct DatasetOverrides {
    /// Override the dataset seed from the configuration file.
    #[cfg_attr(feature = "clap", arg(long, global = true))]
    pub seed: Option<u64>,
}

// --- Default Implementations ---
// A missing `dashboard.toml` reproduces the reference dashboard exactly.

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or(NaiveDate::MIN),
            end_date: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap_or(NaiveDate::MIN),
            sales_mean: 10_000.0,
            sales_std_dev: 2_000.0,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { preview_limit: 100 }
    }
}

impl DashboardConfig {
    /// Checks the invariants deserialization alone cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let dataset = &self.dataset;
        if dataset.start_date > dataset.end_date {
            return Err(ConfigError::ValidationError(format!(
                "dataset.start_date ({}) is after dataset.end_date ({})",
                dataset.start_date, dataset.end_date
            )));
        }
        if !dataset.sales_mean.is_finite() {
            return Err(ConfigError::ValidationError(
                "dataset.sales_mean must be a finite number".to_string(),
            ));
        }
        if !(dataset.sales_std_dev.is_finite() && dataset.sales_std_dev > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "dataset.sales_std_dev must be positive, got {}",
                dataset.sales_std_dev
            )));
        }
        if self.display.preview_limit == 0 {
            return Err(ConfigError::ValidationError(
                "display.preview_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn apply_overrides(&mut self, overrides: &DatasetOverrides) {
        if let Some(seed) = overrides.seed {
            self.dataset.seed = seed;
        }
    }
}
