// File: crates/chart-core/src/error.rs
// Summary: Error taxonomy for loading data and building scales.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("failed to read CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing required column '{0}'")]
    MissingColumn(String),

    /// `row` is 1-based and counts data rows only (the header is row 0).
    #[error("row {row}: column '{column}' has non-numeric value {value:?}")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },

    #[error("empty dataset: nothing to plot")]
    EmptyDataset,

    #[error("degenerate domain for '{field}': all values are zero after padding")]
    DegenerateDomain { field: String },
}

pub type Result<T, E = ChartError> = std::result::Result<T, E>;
