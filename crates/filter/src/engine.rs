use chrono::NaiveDate;
use core_types::{Category, Dataset, FilterCriteria, Region};
use std::collections::BTreeSet;
use std::str::FromStr;

/// A stateless filter over sales datasets.
#[derive(Debug, Default, Clone, Copy)]
pub struct FilterEngine {}

impl FilterEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the records of `dataset` that satisfy `criteria`, in their
    /// original order. The input is left untouched.
    pub fn filter(&self, dataset: &Dataset, criteria: &FilterCriteria) -> Dataset {
        let filtered: Dataset = dataset
            .iter()
            .filter(|record| criteria.matches(record))
            .copied()
            .collect();

        tracing::debug!(
            input = dataset.len(),
            output = filtered.len(),
            start = %criteria.start_date,
            end = %criteria.end_date,
            categories = criteria.categories.len(),
            regions = criteria.regions.len(),
            "Dataset filtered."
        );

        filtered
    }
}

/// Filters by string labels, the way the dashboard controls hand them over.
///
/// Labels outside the closed category/region sets are dropped, so they can
/// never match a record. The returned criteria are the ones actually applied.
pub fn filter_dataset<C, R>(
    dataset: &Dataset,
    start_date: NaiveDate,
    end_date: NaiveDate,
    categories: C,
    regions: R,
) -> (Dataset, FilterCriteria)
where
    C: IntoIterator,
    C::Item: AsRef<str>,
    R: IntoIterator,
    R::Item: AsRef<str>,
{
    let criteria = FilterCriteria {
        start_date,
        end_date,
        categories: parse_labels::<Category, _>(categories),
        regions: parse_labels::<Region, _>(regions),
    };
    let filtered = FilterEngine::new().filter(dataset, &criteria);
    (filtered, criteria)
}

fn parse_labels<T, I>(labels: I) -> BTreeSet<T>
where
    T: FromStr + Ord,
    T::Err: std::fmt::Display,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    labels
        .into_iter()
        .filter_map(|label| match label.as_ref().parse::<T>() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring filter label.");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::SalesRecord;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn three_days() -> Dataset {
        let rows = [
            (1, 100.0, Category::A, Region::East),
            (2, 200.0, Category::B, Region::West),
            (3, 300.0, Category::A, Region::East),
        ];
        let mut running = 0.0;
        rows.into_iter()
            .map(|(d, sales, category, region)| {
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

    #[test]
    fn selects_matching_records_in_order() {
        let data = three_days();
        let criteria = FilterCriteria::new(day(1), day(3), [Category::A], [Region::East]);
        let filtered = FilterEngine::new().filter(&data, &criteria);

        let dates: Vec<_> = filtered.iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![day(1), day(3)]);
        // Stored running totals are not re-based.
        assert_eq!(filtered.records()[1].cumulative_sales, 600.0);
    }

    #[test]
    fn empty_category_set_yields_nothing() {
        let data = three_days();
        let criteria = FilterCriteria::new(day(1), day(3), [], [Region::East]);
        assert!(FilterEngine::new().filter(&data, &criteria).is_empty());
    }

    #[test]
    fn inverted_range_yields_nothing() {
        let data = three_days();
        let criteria = FilterCriteria::new(day(3), day(1), Category::ALL, Region::ALL);
        assert!(FilterEngine::new().filter(&data, &criteria).is_empty());
    }

    #[test]
    fn out_of_span_dates_clamp_implicitly() {
        let data = three_days();
        let before = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let after = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
        let criteria = FilterCriteria::new(before, after, Category::ALL, Region::ALL);
        assert_eq!(FilterEngine::new().filter(&data, &criteria), data);
    }

    #[test]
    fn string_labels_drop_unknown_values() {
        let data = three_days();
        let (filtered, criteria) =
            filter_dataset(&data, day(1), day(3), ["A", "Z"], ["East", "Atlantis"]);
        assert_eq!(criteria.categories.len(), 1);
        assert_eq!(criteria.region_count(), 1);
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn only_unknown_labels_select_nothing() {
        let data = three_days();
        let (filtered, _) = filter_dataset(&data, day(1), day(3), ["D"], ["East"]);
        assert!(filtered.is_empty());
    }

    #[test]
    fn localized_region_labels_are_accepted() {
        let data = three_days();
        let (filtered, _) = filter_dataset(&data, day(1), day(3), ["B"], ["大阪"]);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered.records()[0].sales, 200.0);
    }
}
