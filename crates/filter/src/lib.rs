//! # Sales Filter Engine
//!
//! Narrows a `Dataset` down to the records a dashboard query selects.
//!
//! - **Stable subsequence:** the output keeps input order and never reorders,
//!   deduplicates or edits records, so stored cumulative totals pass through
//!   untouched.
//! - **No errors:** inverted date ranges, empty selections and unknown labels
//!   all degrade to records simply not matching.

pub mod engine;

pub use engine::{FilterEngine, filter_dataset};
