use crate::engine::mean;
use core_types::Dataset;
use serde::{Deserialize, Serialize};

/// Descriptive statistics of the `sales` column, for the statistics panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptiveStats {
    pub count: usize,
    pub mean: Option<f64>,
    /// Sample standard deviation (n - 1). Needs at least two records.
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub p25: Option<f64>,
    pub p50: Option<f64>,
    pub p75: Option<f64>,
    pub max: Option<f64>,
}

/// Summarises the sales of `dataset` (full or filtered).
pub fn describe(dataset: &Dataset) -> DescriptiveStats {
    let mut sales = dataset.sales();
    sales.sort_by(f64::total_cmp);

    let count = sales.len();
    let mean = mean(sales.iter().sum(), count);
    let std = match mean {
        Some(m) if count > 1 => {
            let squared: f64 = sales.iter().map(|s| (s - m) * (s - m)).sum();
            Some((squared / (count - 1) as f64).sqrt())
        }
        _ => None,
    };

    DescriptiveStats {
        count,
        mean,
        std,
        min: sales.first().copied(),
        p25: quantile(&sales, 0.25),
        p50: quantile(&sales, 0.50),
        p75: quantile(&sales, 0.75),
        max: sales.last().copied(),
    }
}

/// Linear interpolation between the two closest ranks of sorted `values`.
fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let position = q * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;
    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * fraction)
}
