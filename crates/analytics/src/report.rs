use core_types::{Category, Region};
use serde::{Deserialize, Serialize};

/// The metrics and breakdown tables of one filtered query.
///
/// Computed fresh per query and never cached. Quantities that are undefined
/// over zero records are `None` rather than NaN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregationResult {
    // I. Sales
    pub total_sales: f64,
    pub mean_sales: Option<f64>, // None for an empty selection
    /// `total_sales - baseline_mean * record_count`. None if the baseline is empty.
    pub delta_total: Option<f64>,
    /// `mean_sales - baseline_mean`. None if either mean is undefined.
    pub delta_mean: Option<f64>,

    // II. Counts
    pub record_count: usize,
    /// `record_count - baseline.len()`, so never positive.
    pub delta_record_count: i64,
    /// Regions selected in the criteria, not regions present in the result.
    pub region_count: usize,
    /// `region_count - distinct regions in the baseline`.
    pub delta_region_count: i64,

    // III. Breakdowns
    pub category_breakdown: Vec<BreakdownRow<Category>>,
    pub region_breakdown: Vec<BreakdownRow<Region>>,
}

/// One group of a breakdown table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownRow<K> {
    pub group_key: K,
    pub sum: f64,
    pub mean: f64,
    pub count: usize,
}

impl<K> BreakdownRow<K> {
    /// This row's percentage of `total`, e.g. for a share-of-sales pie.
    pub fn share_of(&self, total: f64) -> Option<f64> {
        if total == 0.0 {
            return None;
        }
        Some(self.sum / total * 100.0)
    }
}

impl AggregationResult {
    /// The result of aggregating zero records against an empty baseline.
    pub fn empty() -> Self {
        Self {
            total_sales: 0.0,
            mean_sales: None,
            delta_total: None,
            delta_mean: None,
            record_count: 0,
            delta_record_count: 0,
            region_count: 0,
            delta_region_count: 0,
            category_breakdown: Vec::new(),
            region_breakdown: Vec::new(),
        }
    }
}

impl Default for AggregationResult {
    fn default() -> Self {
        Self::empty()
    }
}
