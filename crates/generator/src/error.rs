use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeneratorError {
    #[error("Invalid date span: start {start} is after end {end}")]
    InvalidSpan { start: NaiveDate, end: NaiveDate },

    #[error("Invalid sales distribution: {0}")]
    Distribution(String),
}
