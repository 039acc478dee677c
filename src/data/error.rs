//! Error types for data operations.
//!
//! Provides unified error handling for spreadsheet ingestion. The trace
//! builder has no error taxonomy by design; malformed values degrade to
//! defaults there instead of surfacing here.

use thiserror::Error;

// Re-export ingestion limits from constants module for consistency
pub use crate::constants::{MAX_SHEET_ROWS, MAX_SHEET_SIZE_MB};

/// Errors that can occur while ingesting spreadsheet data
#[derive(Error, Debug)]
pub enum DataError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    /// Payload is too large for eager loading
    #[error("File too large: {size_mb}MB (max {max_mb}MB)")]
    TooLarge { size_mb: u64, max_mb: usize },

    /// Too many rows for eager loading
    #[error("Too many rows: {rows} (max {max_rows})")]
    TooManyRows { rows: usize, max_rows: usize },
}

/// Result type alias for data operations
pub type DataResult<T> = Result<T, DataError>;
