//! Error types for station data ingestion
//!
//! The scoring engine itself is infallible; only ingestion of external
//! station data can fail.

use thiserror::Error;

/// Result type alias for ingestion operations
pub type Result<T> = std::result::Result<T, WqiError>;

/// Errors that can occur while ingesting station data
#[derive(Error, Debug)]
pub enum WqiError {
    /// The underlying reader failed
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV reader rejected the input
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Input has no header row or no data row
    #[error("CSV input must contain a header row and at least one data row")]
    Empty,

    /// One or more of the minimum required columns is absent
    #[error("Missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// Every data row was skipped
    #[error("No valid data rows found")]
    NoValidRows,
}

impl WqiError {
    /// Create a new `MissingColumns` error from column names
    #[must_use]
    pub fn missing_columns<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::MissingColumns(columns.into_iter().map(Into::into).collect())
    }
}
