use crate::dataset::Dataset;
use crate::enums::{Category, Region};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One calendar day of sales.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub date: NaiveDate,
    /// Drawn from a normal distribution; not clamped, so it can be negative.
    pub sales: f64,
    pub category: Category,
    pub region: Region,
    /// Running total of `sales` over the full, unfiltered dataset up to and
    /// including this day. Filtering never re-bases it.
    pub cumulative_sales: f64,
}

/// The record-level predicate of a single dashboard query.
///
/// Built fresh by the controller for every interaction and consumed read-only
/// by the filter engine. Empty category or region sets select nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub categories: BTreeSet<Category>,
    pub regions: BTreeSet<Region>,
}

impl FilterCriteria {
    pub fn new(
        start_date: NaiveDate,
        end_date: NaiveDate,
        categories: impl IntoIterator<Item = Category>,
        regions: impl IntoIterator<Item = Region>,
    ) -> Self {
        Self {
            start_date,
            end_date,
            categories: categories.into_iter().collect(),
            regions: regions.into_iter().collect(),
        }
    }

    /// The initial selection of the dashboard controls: the dataset's whole
    /// date span and every category and region present in it.
    ///
    /// An empty dataset yields an inverted date range, which matches nothing.
    pub fn select_all(dataset: &Dataset) -> Self {
        let (start_date, end_date) = dataset
            .date_span()
            .unwrap_or((NaiveDate::MAX, NaiveDate::MIN));
        Self {
            start_date,
            end_date,
            categories: dataset.distinct_categories(),
            regions: dataset.distinct_regions(),
        }
    }

    /// `start <= date <= end` and category and region both selected.
    pub fn matches(&self, record: &SalesRecord) -> bool {
        self.start_date <= record.date
            && record.date <= self.end_date
            && self.categories.contains(&record.category)
            && self.regions.contains(&record.region)
    }

    /// Number of regions selected by the user, regardless of what the data holds.
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    fn record(day: NaiveDate, category: Category, region: Region) -> SalesRecord {
        SalesRecord {
            date: day,
            sales: 1.0,
            category,
            region,
            cumulative_sales: 1.0,
        }
    }

    #[test]
    fn bounds_are_inclusive() {
        let criteria = FilterCriteria::new(date(3, 1), date(3, 31), Category::ALL, Region::ALL);
        assert!(criteria.matches(&record(date(3, 1), Category::A, Region::East)));
        assert!(criteria.matches(&record(date(3, 31), Category::A, Region::East)));
        assert!(!criteria.matches(&record(date(2, 29), Category::A, Region::East)));
        assert!(!criteria.matches(&record(date(4, 1), Category::A, Region::East)));
    }

    #[test]
    fn empty_sets_select_nothing() {
        let no_categories = FilterCriteria::new(date(1, 1), date(12, 31), [], Region::ALL);
        let no_regions = FilterCriteria::new(date(1, 1), date(12, 31), Category::ALL, []);
        let r = record(date(6, 1), Category::B, Region::West);
        assert!(!no_categories.matches(&r));
        assert!(!no_regions.matches(&r));
    }

    #[test]
    fn inverted_range_selects_nothing() {
        let criteria = FilterCriteria::new(date(6, 2), date(6, 1), Category::ALL, Region::ALL);
        assert!(!criteria.matches(&record(date(6, 1), Category::C, Region::Central)));
        assert!(!criteria.matches(&record(date(6, 2), Category::C, Region::Central)));
    }

    #[test]
    fn region_count_uses_the_selection() {
        let criteria = FilterCriteria::new(
            date(1, 1),
            date(1, 1),
            [Category::A],
            [Region::East, Region::West, Region::East],
        );
        assert_eq!(criteria.region_count(), 2);
    }

    #[test]
    fn select_all_on_empty_dataset_matches_nothing() {
        let criteria = FilterCriteria::select_all(&Dataset::default());
        assert!(criteria.categories.is_empty());
        assert!(!criteria.matches(&record(date(1, 1), Category::A, Region::East)));
    }
}
