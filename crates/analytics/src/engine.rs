use crate::report::{AggregationResult, BreakdownRow};
use core_types::{Dataset, FilterCriteria, SalesRecord};
use std::collections::BTreeMap;

/// A stateless calculator for the dashboard's metric cards and breakdowns.
#[derive(Debug, Default, Clone, Copy)]
pub struct AggregationEngine {}

impl AggregationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The main entry point for aggregating a filtered selection.
    ///
    /// # Arguments
    ///
    /// * `filtered` - The records the query selected.
    /// * `baseline` - The full, unfiltered dataset. Only used for deltas.
    /// * `criteria` - The criteria that produced `filtered`; supplies the
    ///   selected region count.
    pub fn aggregate(
        &self,
        filtered: &Dataset,
        baseline: &Dataset,
        criteria: &FilterCriteria,
    ) -> AggregationResult {
        let mut result = AggregationResult::empty();

        self.calculate_totals(filtered, &mut result);
        self.calculate_deltas(baseline, criteria, &mut result);
        result.category_breakdown = group_by(filtered, |r| r.category);
        result.region_breakdown = group_by(filtered, |r| r.region);

        tracing::debug!(
            records = result.record_count,
            total = result.total_sales,
            categories = result.category_breakdown.len(),
            regions = result.region_breakdown.len(),
            "Aggregation complete."
        );

        result
    }

    fn calculate_totals(&self, filtered: &Dataset, result: &mut AggregationResult) {
        result.record_count = filtered.len();
        result.total_sales = filtered.iter().map(|r| r.sales).sum();
        result.mean_sales = mean(result.total_sales, result.record_count);
    }

    /// Deltas compare against the baseline *mean* scaled to the filtered
    /// count, not against the baseline total.
    fn calculate_deltas(
        &self,
        baseline: &Dataset,
        criteria: &FilterCriteria,
        result: &mut AggregationResult,
    ) {
        let baseline_total: f64 = baseline.iter().map(|r| r.sales).sum();
        let baseline_mean = mean(baseline_total, baseline.len());

        result.delta_total =
            baseline_mean.map(|m| result.total_sales - m * result.record_count as f64);
        result.delta_mean = match (result.mean_sales, baseline_mean) {
            (Some(filtered), Some(base)) => Some(filtered - base),
            _ => None,
        };

        result.delta_record_count = result.record_count as i64 - baseline.len() as i64;

        result.region_count = criteria.region_count();
        result.delta_region_count =
            result.region_count as i64 - baseline.distinct_regions().len() as i64;
    }
}

/// Buckets records by `key` and reduces every bucket to sum, mean and count.
///
/// Keys with no records produce no row. Rows come out in key order.
pub fn group_by<K, F>(records: &Dataset, key: F) -> Vec<BreakdownRow<K>>
where
    K: Ord + Copy,
    F: Fn(&SalesRecord) -> K,
{
    let mut buckets: BTreeMap<K, (f64, usize)> = BTreeMap::new();
    for record in records {
        let bucket = buckets.entry(key(record)).or_insert((0.0, 0));
        bucket.0 += record.sales;
        bucket.1 += 1;
    }

    buckets
        .into_iter()
        .map(|(group_key, (sum, count))| BreakdownRow {
            group_key,
            sum,
            mean: sum / count as f64,
            count,
        })
        .collect()
}

pub(crate) fn mean(sum: f64, count: usize) -> Option<f64> {
    if count == 0 {
        return None;
    }
    Some(sum / count as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use core_types::{Category, Region};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn dataset(rows: &[(u32, f64, Category, Region)]) -> Dataset {
        let mut running = 0.0;
        rows.iter()
            .map(|&(d, sales, category, region)| {
                running += sales;
                SalesRecord {
                    date: day(d),
                    sales,
                    category,
                    region,
                    cumulative_sales: running,
                }
            })
            .collect()
    }

    fn all_of(data: &Dataset) -> FilterCriteria {
        FilterCriteria::select_all(data)
    }

    #[test]
    fn totals_and_counts() {
        let data = dataset(&[
            (1, 100.0, Category::A, Region::East),
            (2, 200.0, Category::B, Region::West),
            (3, 300.0, Category::A, Region::East),
        ]);
        let result = AggregationEngine::new().aggregate(&data, &data, &all_of(&data));

        assert_eq!(result.total_sales, 600.0);
        assert_eq!(result.mean_sales, Some(200.0));
        assert_eq!(result.record_count, 3);
        assert_eq!(result.delta_record_count, 0);
        assert_eq!(result.delta_total, Some(0.0));
        assert_eq!(result.delta_mean, Some(0.0));
    }

    #[test]
    fn delta_total_uses_scaled_baseline_mean() {
        let baseline = dataset(&[
            (1, 100.0, Category::A, Region::East),
            (2, 200.0, Category::B, Region::West),
            (3, 600.0, Category::C, Region::Central),
        ]);
        // Baseline mean is 300; one selected record of 600 beats it by 300,
        // not by 600 - 900 as a total-vs-total comparison would say.
        let criteria = FilterCriteria::new(day(3), day(3), Category::ALL, Region::ALL);
        let filtered = dataset(&[(3, 600.0, Category::C, Region::Central)]);
        let result = AggregationEngine::new().aggregate(&filtered, &baseline, &criteria);

        assert_eq!(result.delta_total, Some(300.0));
        assert_eq!(result.delta_mean, Some(300.0));
        assert_eq!(result.delta_record_count, -2);
    }

    #[test]
    fn region_count_comes_from_the_selection() {
        let baseline = dataset(&[
            (1, 1.0, Category::A, Region::East),
            (2, 1.0, Category::A, Region::West),
        ]);
        // West and Central are selected, but only East/West exist in the data.
        let criteria = FilterCriteria::new(
            day(1),
            day(2),
            Category::ALL,
            [Region::West, Region::Central],
        );
        let filtered = dataset(&[(2, 1.0, Category::A, Region::West)]);
        let result = AggregationEngine::new().aggregate(&filtered, &baseline, &criteria);

        assert_eq!(result.region_count, 2);
        assert_eq!(result.delta_region_count, 0);
        assert_eq!(result.region_breakdown.len(), 1);
    }

    #[test]
    fn empty_selection_has_no_mean() {
        let baseline = dataset(&[(1, 50.0, Category::A, Region::East)]);
        let criteria = FilterCriteria::new(day(1), day(1), [], [Region::East]);
        let result =
            AggregationEngine::new().aggregate(&Dataset::default(), &baseline, &criteria);

        assert_eq!(result.record_count, 0);
        assert_eq!(result.total_sales, 0.0);
        assert_eq!(result.mean_sales, None);
        assert_eq!(result.delta_mean, None);
        assert_eq!(result.delta_total, Some(0.0));
        assert_eq!(result.delta_record_count, -1);
        assert!(result.category_breakdown.is_empty());
    }

    #[test]
    fn empty_baseline_has_no_deltas() {
        let empty = Dataset::default();
        let result = AggregationEngine::new().aggregate(&empty, &empty, &all_of(&empty));
        assert_eq!(result, AggregationResult::empty());
    }

    #[test]
    fn breakdown_omits_absent_groups_and_is_key_ordered() {
        let data = dataset(&[
            (1, 10.0, Category::C, Region::Central),
            (2, 20.0, Category::A, Region::East),
            (3, 40.0, Category::C, Region::East),
        ]);
        let rows = group_by(&data, |r| r.category);

        assert_eq!(
            rows,
            vec![
                BreakdownRow {
                    group_key: Category::A,
                    sum: 20.0,
                    mean: 20.0,
                    count: 1,
                },
                BreakdownRow {
                    group_key: Category::C,
                    sum: 50.0,
                    mean: 25.0,
                    count: 2,
                },
            ]
        );
    }

    #[test]
    fn share_of_total() {
        let row = BreakdownRow {
            group_key: Region::East,
            sum: 25.0,
            mean: 25.0,
            count: 1,
        };
        assert_eq!(row.share_of(100.0), Some(25.0));
        assert_eq!(row.share_of(0.0), None);
    }
}
