//! # Sales Dataset Generator
//!
//! Produces the synthetic daily sales dataset the dashboard analyses.
//!
//! ## Architectural Principles
//!
//! - **Explicit randomness:** the pseudorandom generator is built from the seed
//!   and passed in as an argument. There is no global RNG state, so two
//!   generations with the same seed are bit-for-bit identical.
//! - **Compute once:** `DatasetHandle` is the startup step that generates the
//!   dataset and shares it read-only with every query.

pub mod error;
pub mod generate;
pub mod handle;

pub use error::GeneratorError;
pub use generate::{GeneratorSettings, generate, generate_with};
pub use handle::DatasetHandle;
