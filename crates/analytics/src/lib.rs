//! # Sales Aggregation Engine
//!
//! This crate turns a filtered selection of sales records into the numbers the
//! dashboard displays: metric cards with their deltas, per-category and
//! per-region breakdowns, and the descriptive-statistics panel.
//!
//! ## Architectural Principles
//!
//! - **Pure logic:** no I/O, no caching. It depends only on `core-types`.
//! - **Stateless calculation:** `AggregationEngine` takes the filtered records,
//!   the unfiltered baseline and the query criteria, and returns an
//!   `AggregationResult`. Nothing can fail: empty selections produce `None`
//!   for undefined means instead of NaN.
//!
//! ## Public API
//!
//! - `AggregationEngine`: metric and breakdown calculation.
//! - `AggregationResult` / `BreakdownRow`: the output records.
//! - `describe` / `DescriptiveStats`: count, mean, std, min, quartiles, max.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod report;
pub mod stats;

// Re-export the key components to create a clean, public-facing API.
pub use engine::{AggregationEngine, group_by};
pub use report::{AggregationResult, BreakdownRow};
pub use stats::{DescriptiveStats, describe};
