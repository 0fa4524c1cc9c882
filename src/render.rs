use analytics::{AggregationResult, BreakdownRow, DescriptiveStats};
use comfy_table::{Cell, CellAlignment, Table, presets::UTF8_FULL};
use chrono::NaiveDate;
use core_types::{FilterCriteria, SalesRecord};
use std::fmt::Display;

/// The four metric cards: value plus delta against the full dataset.
pub fn metrics_table(result: &AggregationResult) -> Table {
    let mut table = styled(vec!["Metric", "Value", "Delta"]);
    table.add_row(vec![
        Cell::new("Total sales"),
        money_cell(Some(result.total_sales)),
        money_cell(result.delta_total),
    ]);
    table.add_row(vec![
        Cell::new("Mean sales"),
        money_cell(result.mean_sales),
        money_cell(result.delta_mean),
    ]);
    table.add_row(vec![
        Cell::new("Days"),
        number_cell(result.record_count),
        number_cell(result.delta_record_count),
    ]);
    table.add_row(vec![
        Cell::new("Selected regions"),
        number_cell(result.region_count),
        number_cell(result.delta_region_count),
    ]);
    table
}

/// A sum/mean/count/share table for one breakdown.
pub fn breakdown_table<K: Display>(title: &str, rows: &[BreakdownRow<K>], total: f64) -> Table {
    let mut table = styled(vec![title, "Sum", "Mean", "Count", "Share %"]);
    for row in rows {
        table.add_row(vec![
            Cell::new(&row.group_key),
            money_cell(Some(row.sum)),
            money_cell(Some(row.mean)),
            number_cell(row.count),
            Cell::new(
                row.share_of(total)
                    .map(|s| format!("{s:.1}"))
                    .unwrap_or_else(|| "n/a".to_string()),
            )
            .set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

pub fn preview_table(records: &[SalesRecord]) -> Table {
    let mut table = styled(vec!["Date", "Sales", "Category", "Region", "Cumulative"]);
    for record in records {
        table.add_row(vec![
            Cell::new(record.date),
            money_cell(Some(record.sales)),
            Cell::new(record.category),
            Cell::new(record.region),
            money_cell(Some(record.cumulative_sales)),
        ]);
    }
    table
}

/// Daily sales beside the stored running total, one row per day.
pub fn series_table(sales: &[(NaiveDate, f64)], cumulative: &[(NaiveDate, f64)]) -> Table {
    let mut table = styled(vec!["Date", "Sales", "Cumulative"]);
    for (&(date, value), &(_, running)) in sales.iter().zip(cumulative) {
        table.add_row(vec![
            Cell::new(date),
            money_cell(Some(value)),
            money_cell(Some(running)),
        ]);
    }
    table
}

pub fn stats_table(stats: &DescriptiveStats) -> Table {
    let mut table = styled(vec!["Statistic", "Sales"]);
    table.add_row(vec![Cell::new("count"), number_cell(stats.count)]);
    let rows = [
        ("mean", stats.mean),
        ("std", stats.std),
        ("min", stats.min),
        ("25%", stats.p25),
        ("50%", stats.p50),
        ("75%", stats.p75),
        ("max", stats.max),
    ];
    for (name, value) in rows {
        table.add_row(vec![
            Cell::new(name),
            Cell::new(
                value
                    .map(|v| format!("{v:.2}"))
                    .unwrap_or_else(|| "n/a".to_string()),
            )
            .set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

pub fn criteria_line(criteria: &FilterCriteria) -> String {
    let join = |items: Vec<String>| {
        if items.is_empty() {
            "(none)".to_string()
        } else {
            items.join(", ")
        }
    };
    format!(
        "{} to {} | categories: {} | regions: {}",
        criteria.start_date,
        criteria.end_date,
        join(criteria.categories.iter().map(|c| c.to_string()).collect()),
        join(criteria.regions.iter().map(|r| r.to_string()).collect()),
    )
}

fn styled(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(header);
    table
}

fn money_cell(value: Option<f64>) -> Cell {
    let text = value.map(format_yen).unwrap_or_else(|| "n/a".to_string());
    Cell::new(text).set_alignment(CellAlignment::Right)
}

fn number_cell<T: Display>(value: T) -> Cell {
    Cell::new(value).set_alignment(CellAlignment::Right)
}

/// `¥1,234,568`: rounded to whole yen with thousands separators.
pub fn format_yen(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}¥{grouped}")
}
