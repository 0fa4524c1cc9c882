use crate::error::GeneratorError;
use chrono::NaiveDate;
use configuration::DatasetConfig;
use core_types::{Category, Dataset, Region, SalesRecord};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

/// The shape of the synthetic dataset: its calendar span and sales distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorSettings {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub sales_mean: f64,
    pub sales_std_dev: f64,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self::from(&DatasetConfig::default())
    }
}

impl From<&DatasetConfig> for GeneratorSettings {
    fn from(config: &DatasetConfig) -> Self {
        Self {
            start_date: config.start_date,
            end_date: config.end_date,
            sales_mean: config.sales_mean,
            sales_std_dev: config.sales_std_dev,
        }
    }
}

/// Generates the canonical dataset (2024, mean 10000, std-dev 2000) for `seed`.
pub fn generate(seed: u64) -> Result<Dataset, GeneratorError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    generate_with(&GeneratorSettings::default(), &mut rng)
}

/// Generates one record per calendar day of the configured span, drawing every
/// random value from `rng`.
///
/// Values are drawn column by column: the whole `sales` column first, then
/// `category`, then `region`. Reproducing a dataset requires the same seed,
/// the same settings, and this draw order.
pub fn generate_with<R: Rng>(
    settings: &GeneratorSettings,
    rng: &mut R,
) -> Result<Dataset, GeneratorError> {
    if settings.start_date > settings.end_date {
        return Err(GeneratorError::InvalidSpan {
            start: settings.start_date,
            end: settings.end_date,
        });
    }
    if !settings.sales_mean.is_finite() {
        return Err(GeneratorError::Distribution(format!(
            "mean must be finite, got {}",
            settings.sales_mean
        )));
    }
    if !(settings.sales_std_dev.is_finite() && settings.sales_std_dev > 0.0) {
        return Err(GeneratorError::Distribution(format!(
            "standard deviation must be positive, got {}",
            settings.sales_std_dev
        )));
    }
    let distribution = Normal::new(settings.sales_mean, settings.sales_std_dev)
        .map_err(|e| GeneratorError::Distribution(e.to_string()))?;

    let dates: Vec<NaiveDate> = settings
        .start_date
        .iter_days()
        .take_while(|day| *day <= settings.end_date)
        .collect();
    let n = dates.len();

    // 1. Columnar draws.
    let sales: Vec<f64> = (0..n).map(|_| distribution.sample(rng)).collect();
    let categories: Vec<Category> = (0..n)
        .map(|_| Category::ALL[rng.gen_range(0..Category::ALL.len())])
        .collect();
    let regions: Vec<Region> = (0..n)
        .map(|_| Region::ALL[rng.gen_range(0..Region::ALL.len())])
        .collect();

    // 2. Assemble rows and the running total in date order.
    let mut running_total = 0.0;
    let records = dates
        .into_iter()
        .zip(sales)
        .zip(categories.into_iter().zip(regions))
        .map(|((date, sales), (category, region))| {
            running_total += sales;
            SalesRecord {
                date,
                sales,
                category,
                region,
                cumulative_sales: running_total,
            }
        })
        .collect();

    Ok(Dataset::from_records(records))
}
