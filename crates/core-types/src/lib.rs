//! # Sales Dashboard Core Types
//!
//! Layer 0 of the dashboard engine. Every other crate speaks in these types.
//!
//! - `SalesRecord`: one calendar day of sales.
//! - `Category` / `Region`: the closed value sets a record can carry.
//! - `Dataset`: an ordered, read-only collection of records (full or filtered).
//! - `FilterCriteria`: the record-level predicate built by the controller per query.

pub mod dataset;
pub mod enums;
pub mod error;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use dataset::Dataset;
pub use enums::{Category, Region};
pub use error::CoreError;
pub use structs::{FilterCriteria, SalesRecord};
