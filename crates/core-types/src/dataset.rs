use crate::enums::{Category, Region};
use crate::structs::SalesRecord;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeSet;

/// An ordered collection of `SalesRecord`s, ascending by date.
///
/// Used for both the full generated dataset and every filtered view of it.
/// There is no mutable access: downstream operations build new datasets.
/// Serialize-only, so no document can bypass the date ordering.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Dataset {
    records: Vec<SalesRecord>,
}

impl Dataset {
    /// Wraps records that are already in ascending date order.
    pub fn from_records(records: Vec<SalesRecord>) -> Self {
        debug_assert!(records.windows(2).all(|w| w[0].date <= w[1].date));
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SalesRecord> {
        self.records.iter()
    }

    /// The first `limit` records in date order, for preview tables.
    pub fn head(&self, limit: usize) -> &[SalesRecord] {
        &self.records[..limit.min(self.records.len())]
    }

    /// First and last date held, or `None` when empty.
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.records.first()?;
        let last = self.records.last()?;
        Some((first.date, last.date))
    }

    pub fn distinct_categories(&self) -> BTreeSet<Category> {
        self.records.iter().map(|r| r.category).collect()
    }

    pub fn distinct_regions(&self) -> BTreeSet<Region> {
        self.records.iter().map(|r| r.region).collect()
    }

    /// The `sales` column.
    pub fn sales(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.sales).collect()
    }

    /// `(date, sales)` points for the daily sales chart.
    pub fn sales_series(&self) -> Vec<(NaiveDate, f64)> {
        self.records.iter().map(|r| (r.date, r.sales)).collect()
    }

    /// `(date, cumulative_sales)` points for the cumulative chart. Values are
    /// the stored full-dataset running totals.
    pub fn cumulative_series(&self) -> Vec<(NaiveDate, f64)> {
        self.records
            .iter()
            .map(|r| (r.date, r.cumulative_sales))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a SalesRecord;
    type IntoIter = std::slice::Iter<'a, SalesRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<SalesRecord> for Dataset {
    fn from_iter<I: IntoIterator<Item = SalesRecord>>(iter: I) -> Self {
        Self::from_records(iter.into_iter().collect())
    }
}
